//! Strided 3-D region addressing shared by every format.
//!
//! Both transfer directions iterate depth slices, then rows, then columns
//! (block-rows and block-columns for compressed formats). That order is part
//! of the wire contract: row and slice padding is skipped with relative
//! seeks so that a call consumes exactly `depth * slice_pitch` bytes.

use std::io::{Read, Seek, SeekFrom, Write};

use crate::{Box3i, Color, Error, Point3i, Result, Size3i};

/// Byte extent of a packed region: total size plus row/slice strides.
///
/// `slice_pitch` is always a whole multiple of `row_pitch`, and for block
/// formats `row_pitch` is a whole multiple of the block byte size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteLayout {
    pub total: usize,
    pub row_pitch: usize,
    pub slice_pitch: usize,
}

/// Borrowed view of a flattened color array: `data[offset + x + y*width +
/// z*width*height]` addresses pixel `(x, y, z)`.
#[derive(Debug)]
pub struct ColorRegion<'a> {
    pub data: &'a [Color],
    pub offset: usize,
    pub width: usize,
    pub height: usize,
}

impl<'a> ColorRegion<'a> {
    pub fn new(data: &'a [Color], offset: usize, width: usize, height: usize) -> Self {
        Self {
            data,
            offset,
            width,
            height,
        }
    }
}

/// Mutable counterpart of [`ColorRegion`].
#[derive(Debug)]
pub struct ColorRegionMut<'a> {
    pub data: &'a mut [Color],
    pub offset: usize,
    pub width: usize,
    pub height: usize,
}

impl<'a> ColorRegionMut<'a> {
    pub fn new(data: &'a mut [Color], offset: usize, width: usize, height: usize) -> Self {
        Self {
            data,
            offset,
            width,
            height,
        }
    }
}

/// Rounds one dimension up to the 4-pixel block granularity, minimum one
/// block. Idempotent.
pub(crate) fn align_to_block(v: i32) -> i32 {
    ((v.max(1) + 3) / 4) * 4
}

/// Rounds a size up to block granularity in X and Y. Depth granularity is 1.
pub(crate) fn block_physical_size(size: Size3i) -> Size3i {
    Size3i::new(
        align_to_block(size.width),
        align_to_block(size.height),
        size.depth.max(1),
    )
}

pub(crate) fn block_byte_layout(size: Size3i, block_bytes: usize) -> ByteLayout {
    let phys = block_physical_size(size);
    let row_pitch = (phys.width as usize / 4) * block_bytes;
    let slice_pitch = row_pitch * (phys.height as usize / 4);
    ByteLayout {
        total: slice_pitch * phys.depth as usize,
        row_pitch,
        slice_pitch,
    }
}

pub(crate) fn pixel_byte_layout(size: Size3i, pixel_bytes: usize) -> ByteLayout {
    let row_pitch = size.width.max(0) as usize * pixel_bytes;
    let slice_pitch = row_pitch * size.height.max(0) as usize;
    ByteLayout {
        total: slice_pitch * size.depth.max(0) as usize,
        row_pitch,
        slice_pitch,
    }
}

/// Byte offset of `region.origin` within a buffer laid out with the given
/// pitches. The origin must be non-negative, and block formats address
/// whole blocks, so it must also sit on the block grid.
pub(crate) fn seek_offset(
    region: Box3i,
    row_pitch: usize,
    slice_pitch: usize,
    unit_bytes: usize,
    block_compressed: bool,
) -> Result<u64> {
    let o = region.origin;
    if o.x < 0 || o.y < 0 || o.z < 0 {
        return Err(Error::OutOfBounds {
            region,
            size: Size3i::ZERO,
        });
    }
    let (x, y) = if block_compressed {
        check_alignment(region)?;
        (o.x as u64 / 4, o.y as u64 / 4)
    } else {
        (o.x as u64, o.y as u64)
    };
    Ok(x * unit_bytes as u64 + y * row_pitch as u64 + o.z as u64 * slice_pitch as u64)
}

pub(crate) fn check_alignment(region: Box3i) -> Result<()> {
    check_origin_alignment(region.origin)
}

fn check_origin_alignment(o: Point3i) -> Result<()> {
    if o.x % 4 != 0 || o.y % 4 != 0 {
        return Err(Error::Misaligned { x: o.x, y: o.y });
    }
    Ok(())
}

fn check_pitches(row_pitch: usize, slice_pitch: usize, row_span: usize, rows: usize) -> Result<()> {
    let ok = row_pitch >= row_span
        && slice_pitch >= rows * row_pitch
        && (row_pitch == 0 || slice_pitch % row_pitch == 0);
    if !ok {
        return Err(Error::InvalidPitch {
            row_pitch,
            slice_pitch,
        });
    }
    Ok(())
}

/// Checks that the box, placed at `origin`, lies inside the color view.
/// A degenerate box transfers nothing and passes regardless of the view.
fn check_view_bounds(region: Box3i, view_len: usize, view: (usize, usize, usize), origin: Point3i) -> Result<()> {
    if region.size.is_empty() {
        return Ok(());
    }
    let (offset, width, height) = view;
    let size = region.size;
    let err = Error::OutOfBounds {
        region,
        size: Size3i::new(width as i32, height as i32, i32::MAX),
    };
    if origin.x < 0 || origin.y < 0 || origin.z < 0 {
        return Err(err);
    }
    let far_x = origin.x as usize + size.width as usize;
    let far_y = origin.y as usize + size.height as usize;
    let far_z = origin.z as usize + size.depth as usize;
    if far_x > width || far_y > height {
        return Err(err);
    }
    // Depth is bounded only by the flattened array itself.
    let last = offset + (far_x - 1) + (far_y - 1) * width + (far_z - 1) * width * height;
    if last >= view_len {
        return Err(err);
    }
    Ok(())
}

/// Fills `buf` from the reader, reporting exactly how many bytes were
/// available when the stream comes up short.
fn read_unit<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    let mut got = 0;
    while got < buf.len() {
        match reader.read(&mut buf[got..])? {
            0 => {
                return Err(Error::TruncatedStream {
                    needed: buf.len(),
                    got,
                })
            }
            n => got += n,
        }
    }
    Ok(())
}

fn skip<S: Seek>(stream: &mut S, bytes: usize) -> Result<()> {
    if bytes > 0 {
        stream.seek(SeekFrom::Current(bytes as i64))?;
    }
    Ok(())
}

/// Decodes the blocks covering `src_box` into `dst` at `dst_origin`.
///
/// `decode_block` turns one raw block into its 4x4 texel footprint; texels
/// outside the box extent (edge blocks of a non-multiple-of-4 region) are
/// dropped.
#[allow(clippy::too_many_arguments)]
pub(crate) fn decode_blocks<R, F>(
    reader: &mut R,
    block_bytes: usize,
    row_pitch: usize,
    slice_pitch: usize,
    mut dst: ColorRegionMut<'_>,
    src_box: Box3i,
    dst_origin: Point3i,
    mut decode_block: F,
) -> Result<()>
where
    R: Read + Seek,
    F: FnMut(&[u8]) -> Result<[Color; 16]>,
{
    check_alignment(src_box)?;
    check_origin_alignment(dst_origin)?;
    check_view_bounds(
        src_box,
        dst.data.len(),
        (dst.offset, dst.width, dst.height),
        dst_origin,
    )?;
    if src_box.size.is_empty() {
        return Ok(());
    }

    let w = src_box.size.width as usize;
    let h = src_box.size.height as usize;
    let blocks_x = (w + 3) / 4;
    let blocks_y = (h + 3) / 4;
    check_pitches(row_pitch, slice_pitch, blocks_x * block_bytes, blocks_y)?;
    if row_pitch % block_bytes != 0 {
        return Err(Error::InvalidPitch {
            row_pitch,
            slice_pitch,
        });
    }

    let mut block = [0u8; 16];
    let block = &mut block[..block_bytes];
    let plane = dst.width * dst.height;

    for z in 0..src_box.size.depth as usize {
        for by in 0..blocks_y {
            for bx in 0..blocks_x {
                read_unit(reader, block)?;
                let texels = decode_block(block)?;
                // Scatter, clamped to the true (non-rounded) extent.
                for py in 0..4 {
                    for px in 0..4 {
                        let (x, y) = (bx * 4 + px, by * 4 + py);
                        if x < w && y < h {
                            let index = dst.offset
                                + (dst_origin.x as usize + x)
                                + (dst_origin.y as usize + y) * dst.width
                                + (dst_origin.z as usize + z) * plane;
                            dst.data[index] = texels[py * 4 + px];
                        }
                    }
                }
            }
            skip(reader, row_pitch - blocks_x * block_bytes)?;
        }
        skip(reader, slice_pitch - blocks_y * row_pitch)?;
    }
    Ok(())
}

/// Encodes the region of `src` at `src_origin` into the blocks covering
/// `dst_box`.
///
/// `encode_block` packs one 4x4 texel footprint; texels outside the box
/// extent are filled by clamping to the nearest edge pixel.
#[allow(clippy::too_many_arguments)]
pub(crate) fn encode_blocks<W, F>(
    writer: &mut W,
    block_bytes: usize,
    row_pitch: usize,
    slice_pitch: usize,
    src: ColorRegion<'_>,
    dst_box: Box3i,
    src_origin: Point3i,
    mut encode_block: F,
) -> Result<()>
where
    W: Write + Seek,
    F: FnMut(&[Color; 16], &mut [u8]) -> Result<()>,
{
    check_alignment(dst_box)?;
    check_origin_alignment(src_origin)?;
    check_view_bounds(
        dst_box,
        src.data.len(),
        (src.offset, src.width, src.height),
        src_origin,
    )?;
    if dst_box.size.is_empty() {
        return Ok(());
    }

    let w = dst_box.size.width as usize;
    let h = dst_box.size.height as usize;
    let blocks_x = (w + 3) / 4;
    let blocks_y = (h + 3) / 4;
    check_pitches(row_pitch, slice_pitch, blocks_x * block_bytes, blocks_y)?;
    if row_pitch % block_bytes != 0 {
        return Err(Error::InvalidPitch {
            row_pitch,
            slice_pitch,
        });
    }

    let mut block = [0u8; 16];
    let block = &mut block[..block_bytes];
    let plane = src.width * src.height;

    for z in 0..dst_box.size.depth as usize {
        for by in 0..blocks_y {
            for bx in 0..blocks_x {
                let mut texels = [Color::TRANSPARENT_BLACK; 16];
                for py in 0..4 {
                    for px in 0..4 {
                        let x = (bx * 4 + px).min(w - 1);
                        let y = (by * 4 + py).min(h - 1);
                        let index = src.offset
                            + (src_origin.x as usize + x)
                            + (src_origin.y as usize + y) * src.width
                            + (src_origin.z as usize + z) * plane;
                        texels[py * 4 + px] = src.data[index];
                    }
                }
                block.fill(0);
                encode_block(&texels, block)?;
                writer.write_all(block)?;
            }
            skip(writer, row_pitch - blocks_x * block_bytes)?;
        }
        skip(writer, slice_pitch - blocks_y * row_pitch)?;
    }
    Ok(())
}

/// Decodes an uncompressed pixel region. Same pitch-skip accounting as the
/// block driver, with unit granularity 1.
#[allow(clippy::too_many_arguments)]
pub(crate) fn decode_pixels<R, F>(
    reader: &mut R,
    pixel_bytes: usize,
    row_pitch: usize,
    slice_pitch: usize,
    mut dst: ColorRegionMut<'_>,
    src_box: Box3i,
    dst_origin: Point3i,
    mut decode_pixel: F,
) -> Result<()>
where
    R: Read + Seek,
    F: FnMut(&[u8]) -> Color,
{
    check_view_bounds(
        src_box,
        dst.data.len(),
        (dst.offset, dst.width, dst.height),
        dst_origin,
    )?;
    if src_box.size.is_empty() {
        return Ok(());
    }

    let w = src_box.size.width as usize;
    let h = src_box.size.height as usize;
    check_pitches(row_pitch, slice_pitch, w * pixel_bytes, h)?;

    let mut row = vec![0u8; w * pixel_bytes];
    let plane = dst.width * dst.height;

    for z in 0..src_box.size.depth as usize {
        for y in 0..h {
            read_unit(reader, &mut row)?;
            let base = dst.offset
                + dst_origin.x as usize
                + (dst_origin.y as usize + y) * dst.width
                + (dst_origin.z as usize + z) * plane;
            for x in 0..w {
                dst.data[base + x] = decode_pixel(&row[x * pixel_bytes..(x + 1) * pixel_bytes]);
            }
            skip(reader, row_pitch - w * pixel_bytes)?;
        }
        skip(reader, slice_pitch - h * row_pitch)?;
    }
    Ok(())
}

/// Encodes an uncompressed pixel region.
#[allow(clippy::too_many_arguments)]
pub(crate) fn encode_pixels<W, F>(
    writer: &mut W,
    pixel_bytes: usize,
    row_pitch: usize,
    slice_pitch: usize,
    src: ColorRegion<'_>,
    dst_box: Box3i,
    src_origin: Point3i,
    mut encode_pixel: F,
) -> Result<()>
where
    W: Write + Seek,
    F: FnMut(Color, &mut [u8]),
{
    check_view_bounds(
        dst_box,
        src.data.len(),
        (src.offset, src.width, src.height),
        src_origin,
    )?;
    if dst_box.size.is_empty() {
        return Ok(());
    }

    let w = dst_box.size.width as usize;
    let h = dst_box.size.height as usize;
    check_pitches(row_pitch, slice_pitch, w * pixel_bytes, h)?;

    let mut row = vec![0u8; w * pixel_bytes];
    let plane = src.width * src.height;

    for z in 0..dst_box.size.depth as usize {
        for y in 0..h {
            let base = src.offset
                + src_origin.x as usize
                + (src_origin.y as usize + y) * src.width
                + (src_origin.z as usize + z) * plane;
            for x in 0..w {
                encode_pixel(
                    src.data[base + x],
                    &mut row[x * pixel_bytes..(x + 1) * pixel_bytes],
                );
            }
            writer.write_all(&row)?;
            skip(writer, row_pitch - w * pixel_bytes)?;
        }
        skip(writer, slice_pitch - h * row_pitch)?;
    }
    Ok(())
}
