//! Span conversion between text index spaces.
//!
//! Offsets come in three flavours: UTF-16 code units (the "BMP" offsets editors and
//! UTF-16 hosts hand out), code points of the UTF-8 text (what the classifier side calls UTF-8
//! indices), and raw UTF-8 bytes. All spans are half-open `[start, end)`.
//!
//! Conversion is a single pass over the text and keeps no state between calls.
mod convert;
mod error;
mod runs;
mod span;
mod tests;

pub use convert::{
    ConvertOptions, MisalignedPolicy, convert_indices_bmp_to_utf8, convert_indices_utf8_to_bmp,
    convert_offset, convert_span, text_from_utf8, text_len,
};
pub use error::ConvertError;
pub use runs::{CodePointRun, code_point_runs};
pub use span::{
    ByteSpan, Bytes, IndexSpace, IndexSpaceKind, Span, Utf8, Utf8Span, Utf16, Utf16Span,
};
