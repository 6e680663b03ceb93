//! Dual-cursor span conversion.
//!
//! One pass over the code points of the text keeps a cursor in the source space and one in the
//! target space. A bound resolves to the target cursor of the code point it starts; a bound equal
//! to the source length resolves to the target length.

use tracing::{debug, trace};

use crate::error::ConvertError;
use crate::runs::code_point_runs;
use crate::span::{IndexSpace, IndexSpaceKind, Span, Utf8Span, Utf16Span};

/// What to do with an offset that falls strictly inside a code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MisalignedPolicy {
    /// Resolve to the start of the enclosing code point.
    #[default]
    RoundDown,
    /// Fail with [`ConvertError::MisalignedOffset`].
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    pub misaligned: MisalignedPolicy,
}

/// Maps a span of UTF-16 code units to a span of code points.
pub fn convert_indices_bmp_to_utf8(
    text: &str,
    span: Utf16Span,
) -> Result<Utf8Span, ConvertError> {
    convert_span(text, span, &ConvertOptions::default())
}

/// Maps a span of code points to a span of UTF-16 code units.
pub fn convert_indices_utf8_to_bmp(
    text: &str,
    span: Utf8Span,
) -> Result<Utf16Span, ConvertError> {
    convert_span(text, span, &ConvertOptions::default())
}

/// Converts `span` from space `S` into space `T`.
///
/// Fails with [`ConvertError::InvalidSpan`] if `start > end` or `end` is past the end of `text`.
/// Converting into the same space returns the span unchanged when it is aligned.
pub fn convert_span<S: IndexSpace, T: IndexSpace>(
    text: &str,
    span: Span<S>,
    options: &ConvertOptions,
) -> Result<Span<T>, ConvertError> {
    let (start, end) = scan(text, S::KIND, T::KIND, span.start, span.end, options)?;
    Ok(Span::new(start, end))
}

/// Converts a single position, e.g. a cursor, from space `S` into space `T`.
pub fn convert_offset<S: IndexSpace, T: IndexSpace>(
    text: &str,
    offset: usize,
    options: &ConvertOptions,
) -> Result<usize, ConvertError> {
    scan(text, S::KIND, T::KIND, offset, offset, options).map(|(start, _)| start)
}

/// Length of `text` in space `S`.
pub fn text_len<S: IndexSpace>(text: &str) -> usize {
    S::KIND.len(text)
}

/// Accepts raw bytes at the ingestion boundary. Conversion itself only ever sees `&str`.
pub fn text_from_utf8(bytes: &[u8]) -> Result<&str, ConvertError> {
    std::str::from_utf8(bytes).map_err(|err| {
        debug!(valid_up_to = err.valid_up_to(), "rejecting malformed text");
        ConvertError::MalformedText {
            valid_up_to: err.valid_up_to(),
        }
    })
}

fn scan(
    text: &str,
    from: IndexSpaceKind,
    to: IndexSpaceKind,
    start: usize,
    end: usize,
    options: &ConvertOptions,
) -> Result<(usize, usize), ConvertError> {
    trace!(from = from.name(), to = to.name(), start, end, "convert span");

    if start > end {
        return Err(invalid_span(start, end, from.len(text)));
    }

    let mut source = 0usize;
    let mut target = 0usize;
    let mut out_start = None;
    let mut out_end = None;
    // First bound that fell inside a code point. Acted on only once the span is known to be
    // in range, so an out-of-range span is always `InvalidSpan`.
    let mut misaligned = None;

    for run in code_point_runs(text) {
        let next = source + run.width(from);
        if out_start.is_none() && start < next {
            note_misaligned(start, source, &mut misaligned);
            out_start = Some(target);
        }
        if end < next {
            note_misaligned(end, source, &mut misaligned);
            out_end = Some(target);
            break;
        }
        source = next;
        target += run.width(to);
    }

    // Without an early break `source` is now the full source length and `target` the full
    // target length.
    let out_end = match out_end {
        Some(out_end) => out_end,
        None if end == source => target,
        None => return Err(invalid_span(start, end, source)),
    };
    let out_start = out_start.unwrap_or(target);

    if let Some(offset) = misaligned {
        match options.misaligned {
            MisalignedPolicy::RoundDown => {
                debug!(offset, "offset inside code point, rounding down");
            }
            MisalignedPolicy::Reject => {
                debug!(offset, "offset inside code point, rejecting");
                return Err(ConvertError::MisalignedOffset { offset });
            }
        }
    }

    Ok((out_start, out_end))
}

/// `offset` lies in the run starting at `source`.
fn note_misaligned(offset: usize, source: usize, misaligned: &mut Option<usize>) {
    if offset != source && misaligned.is_none() {
        *misaligned = Some(offset);
    }
}

fn invalid_span(start: usize, end: usize, len: usize) -> ConvertError {
    debug!(start, end, len, "rejecting invalid span");
    ConvertError::InvalidSpan { start, end, len }
}
