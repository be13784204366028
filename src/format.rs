//! Format descriptors and the per-format operation dispatch.

use std::io::{Read, Seek, Write};

use crate::layout::{self, ByteLayout, ColorRegion, ColorRegionMut};
use crate::{bc1, bc2, bc3, bc4, bc5, bc6h, bc7, uncompressed};
use crate::{Bc1Block, Box3i, Color, Error, Point3i, Result, Size3i};

/// Static per-format traits: value range, normalization, granularity.
#[derive(Debug)]
pub struct FormatInfo {
    pub name: &'static str,
    /// Smallest representable color, channel-wise.
    pub min_value: Color,
    /// Largest representable color, channel-wise.
    pub max_value: Color,
    /// Whether stored values map to the unit (or signed unit) interval.
    pub normalized: bool,
    /// Whether the format is addressed in 4x4 blocks rather than pixels.
    pub block_compressed: bool,
}

/// Encoder effort level. All levels currently share the BC1 box fit; the
/// distinction is a selection hook for more exhaustive strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Quality {
    Fastest,
    #[default]
    Default,
    Exhaustive,
}

#[derive(Clone, Debug, Default)]
pub struct EncodeOptions {
    pub quality: Quality,
    /// Exclude fully transparent pixels from endpoint selection.
    pub weight_by_alpha: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    Bc1,
    Bc2,
    Bc3,
    Bc4,
    Bc4Signed,
    Bc5,
    Bc5Signed,
    Bc6hUnsigned,
    Bc6hSigned,
    Bc7,
    R8,
    Rg8,
    Rgba8,
}

// Indexed by the enum discriminant.
#[rustfmt::skip]
static INFOS: [FormatInfo; 13] = [
    FormatInfo { name: "BC1",          min_value: Color::TRANSPARENT_BLACK,            max_value: Color::WHITE,                        normalized: true,  block_compressed: true },
    FormatInfo { name: "BC2",          min_value: Color::TRANSPARENT_BLACK,            max_value: Color::WHITE,                        normalized: true,  block_compressed: true },
    FormatInfo { name: "BC3",          min_value: Color::TRANSPARENT_BLACK,            max_value: Color::WHITE,                        normalized: true,  block_compressed: true },
    FormatInfo { name: "BC4",          min_value: Color::BLACK,                        max_value: Color::new(1.0, 0.0, 0.0, 1.0),      normalized: true,  block_compressed: true },
    FormatInfo { name: "BC4s",         min_value: Color::new(-1.0, 0.0, 0.0, 1.0),     max_value: Color::new(1.0, 0.0, 0.0, 1.0),      normalized: true,  block_compressed: true },
    FormatInfo { name: "BC5",          min_value: Color::BLACK,                        max_value: Color::new(1.0, 1.0, 0.0, 1.0),      normalized: true,  block_compressed: true },
    FormatInfo { name: "BC5s",         min_value: Color::new(-1.0, -1.0, 0.0, 1.0),    max_value: Color::new(1.0, 1.0, 0.0, 1.0),      normalized: true,  block_compressed: true },
    FormatInfo { name: "BC6Hu",        min_value: Color::BLACK,                        max_value: Color::new(65504.0, 65504.0, 65504.0, 1.0), normalized: false, block_compressed: true },
    FormatInfo { name: "BC6Hs",        min_value: Color::new(-65504.0, -65504.0, -65504.0, 1.0), max_value: Color::new(65504.0, 65504.0, 65504.0, 1.0), normalized: false, block_compressed: true },
    FormatInfo { name: "BC7",          min_value: Color::TRANSPARENT_BLACK,            max_value: Color::WHITE,                        normalized: true,  block_compressed: true },
    FormatInfo { name: "R8",           min_value: Color::BLACK,                        max_value: Color::new(1.0, 0.0, 0.0, 1.0),      normalized: true,  block_compressed: false },
    FormatInfo { name: "RG8",          min_value: Color::BLACK,                        max_value: Color::new(1.0, 1.0, 0.0, 1.0),      normalized: true,  block_compressed: false },
    FormatInfo { name: "RGBA8",        min_value: Color::TRANSPARENT_BLACK,            max_value: Color::WHITE,                        normalized: true,  block_compressed: false },
];

impl TextureFormat {
    pub fn info(self) -> &'static FormatInfo {
        &INFOS[self as usize]
    }

    pub fn is_block_compressed(self) -> bool {
        self.info().block_compressed
    }

    /// Bytes per addressed unit: one block for compressed formats, one
    /// pixel otherwise.
    pub fn unit_bytes(self) -> usize {
        use TextureFormat::*;
        match self {
            Bc1 => bc1::BLOCK_SIZE,
            Bc2 => bc2::BLOCK_SIZE,
            Bc3 => bc3::BLOCK_SIZE,
            Bc4 | Bc4Signed => bc4::BLOCK_SIZE,
            Bc5 | Bc5Signed => bc5::BLOCK_SIZE,
            Bc6hUnsigned | Bc6hSigned => bc6h::BLOCK_SIZE,
            Bc7 => bc7::BLOCK_SIZE,
            R8 => 1,
            Rg8 => 2,
            Rgba8 => 4,
        }
    }

    /// Storage size of a logical extent: block formats round X and Y up to
    /// the 4-pixel grid (minimum one block), uncompressed formats store the
    /// extent as-is. Idempotent.
    pub fn physical_size(self, size: Size3i) -> Size3i {
        if self.is_block_compressed() {
            layout::block_physical_size(size)
        } else {
            size
        }
    }

    pub fn byte_layout(self, size: Size3i) -> ByteLayout {
        if self.is_block_compressed() {
            layout::block_byte_layout(size, self.unit_bytes())
        } else {
            layout::pixel_byte_layout(size, self.unit_bytes())
        }
    }

    /// Byte offset of `region.origin` in a buffer with the given pitches.
    pub fn seek_offset(self, region: Box3i, row_pitch: usize, slice_pitch: usize) -> Result<u64> {
        layout::seek_offset(
            region,
            row_pitch,
            slice_pitch,
            self.unit_bytes(),
            self.is_block_compressed(),
        )
    }

    /// Reads the packed region `src_box` from the stream and stores the
    /// decoded texels into `dst` at `dst_origin`.
    ///
    /// The reader is expected to be positioned at the region's first unit
    /// (see [`TextureFormat::seek_offset`]); on success it has advanced by
    /// exactly `src_box.size.depth * slice_pitch` bytes.
    pub fn decode<R: Read + Seek>(
        self,
        reader: &mut R,
        row_pitch: usize,
        slice_pitch: usize,
        dst: ColorRegionMut<'_>,
        src_box: Box3i,
        dst_origin: Point3i,
    ) -> Result<()> {
        use TextureFormat::*;
        let unit = self.unit_bytes();
        match self {
            Bc1 => layout::decode_blocks(reader, unit, row_pitch, slice_pitch, dst, src_box, dst_origin, |b| {
                Ok(bc1::decode_block(b.try_into().unwrap()))
            }),
            Bc2 => layout::decode_blocks(reader, unit, row_pitch, slice_pitch, dst, src_box, dst_origin, |b| {
                Ok(bc2::decode_block(b.try_into().unwrap()))
            }),
            Bc3 => layout::decode_blocks(reader, unit, row_pitch, slice_pitch, dst, src_box, dst_origin, |b| {
                Ok(bc3::decode_block(b.try_into().unwrap()))
            }),
            Bc4 | Bc4Signed => {
                let signed = self == Bc4Signed;
                layout::decode_blocks(reader, unit, row_pitch, slice_pitch, dst, src_box, dst_origin, |b| {
                    Ok(bc4::decode_block(b.try_into().unwrap(), signed))
                })
            }
            Bc5 | Bc5Signed => {
                let signed = self == Bc5Signed;
                layout::decode_blocks(reader, unit, row_pitch, slice_pitch, dst, src_box, dst_origin, |b| {
                    Ok(bc5::decode_block(b.try_into().unwrap(), signed))
                })
            }
            Bc6hUnsigned | Bc6hSigned => {
                layout::decode_blocks(reader, unit, row_pitch, slice_pitch, dst, src_box, dst_origin, |b| {
                    bc6h::decode_block(b.try_into().unwrap())
                })
            }
            Bc7 => layout::decode_blocks(reader, unit, row_pitch, slice_pitch, dst, src_box, dst_origin, |b| {
                bc7::decode_block(b.try_into().unwrap())
            }),
            R8 => layout::decode_pixels(reader, unit, row_pitch, slice_pitch, dst, src_box, dst_origin, uncompressed::decode_r8),
            Rg8 => layout::decode_pixels(reader, unit, row_pitch, slice_pitch, dst, src_box, dst_origin, uncompressed::decode_rg8),
            Rgba8 => layout::decode_pixels(reader, unit, row_pitch, slice_pitch, dst, src_box, dst_origin, uncompressed::decode_rgba8),
        }
    }

    /// Packs the texels of `src` at `src_origin` into the region `dst_box`
    /// of the stream. Only BC1 and the uncompressed formats can encode.
    #[allow(clippy::too_many_arguments)]
    pub fn encode<W: Write + Seek>(
        self,
        src: ColorRegion<'_>,
        writer: &mut W,
        row_pitch: usize,
        slice_pitch: usize,
        dst_box: Box3i,
        src_origin: Point3i,
        options: &EncodeOptions,
    ) -> Result<()> {
        use TextureFormat::*;
        let unit = self.unit_bytes();
        match self {
            Bc1 => layout::encode_blocks(writer, unit, row_pitch, slice_pitch, src, dst_box, src_origin, |texels, out| {
                out.copy_from_slice(&Bc1Block::fit(texels, options).to_bytes());
                Ok(())
            }),
            R8 => layout::encode_pixels(writer, unit, row_pitch, slice_pitch, src, dst_box, src_origin, uncompressed::encode_r8),
            Rg8 => layout::encode_pixels(writer, unit, row_pitch, slice_pitch, src, dst_box, src_origin, uncompressed::encode_rg8),
            Rgba8 => layout::encode_pixels(writer, unit, row_pitch, slice_pitch, src, dst_box, src_origin, uncompressed::encode_rgba8),
            _ => Err(Error::EncodeUnsupported(self.info().name)),
        }
    }
}
