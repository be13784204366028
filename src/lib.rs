#![warn(clippy::all)]

//! Converts pixel imagery between a canonical floating-point RGBA
//! representation and packed binary texture encodings, including the
//! block-compressed BCn family (BC1-BC7).
//!
//! All conversions move data between an addressable byte stream
//! (`std::io::Read`/`Write` + `Seek`, seeked relative to the current
//! position) and a flattened [`Color`] array, addressed through a 3-D
//! sub-box plus row/slice pitches.

mod bc1;
mod bc2;
mod bc3;
mod bc4;
mod bc5;
mod bc6h;
mod bc7;
mod bitreader;
mod bitwriter;
mod color;
mod format;
mod geom;
mod layout;
mod ramp;
mod uncompressed;

pub use bc1::Bc1Block;
pub use bitreader::BitReaderLsb;
pub use bitwriter::BitWriterLsb;
pub use color::Color;
pub use format::{EncodeOptions, FormatInfo, Quality, TextureFormat};
pub use geom::{Box3i, Point3i, Size3i};
pub use layout::{ByteLayout, ColorRegion, ColorRegionMut};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The stream ended before a full block or scanline could be read.
    #[error("stream truncated: needed {needed} bytes, got {got}")]
    TruncatedStream { needed: usize, got: usize },

    /// A region origin for a block-compressed format is not on the 4-pixel
    /// block grid.
    #[error("region origin ({x}, {y}) is not aligned to the 4x4 block grid")]
    Misaligned { x: i32, y: i32 },

    /// A region or destination offset falls outside the addressed buffer.
    #[error("region {region:?} exceeds the available extent {size:?}")]
    OutOfBounds { region: Box3i, size: Size3i },

    /// A block mode is recognized by the dispatch table but has no decoder.
    #[error("{format} mode {mode} is not supported")]
    UnsupportedMode { format: &'static str, mode: u8 },

    /// The operation is not defined for this format at all.
    #[error("{0} is not supported")]
    Unsupported(&'static str),

    /// The format is decode-only.
    #[error("{0} does not support encoding")]
    EncodeUnsupported(&'static str),

    /// Row/slice pitches violate the format's stride invariants.
    #[error("invalid pitches: row {row_pitch}, slice {slice_pitch}")]
    InvalidPitch { row_pitch: usize, slice_pitch: usize },

    /// A stream failure other than running out of bytes.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[doc(hidden)]
#[macro_export]
macro_rules! mask {
    ($size:expr) => {
        !(!($size ^ $size)).checked_shl($size as u32).unwrap_or(0)
    };
}
