use std::fmt;

/// Why a span or offset could not be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// `start > end`, or `end` lies past the end of the text in the source space.
    InvalidSpan {
        start: usize,
        end: usize,
        len: usize,
    },
    /// The offset falls inside a code point. Only reported under `MisalignedPolicy::Reject`.
    MisalignedOffset { offset: usize },
    /// The input bytes are not UTF-8.
    MalformedText { valid_up_to: usize },
}

impl ConvertError {
    pub fn message(self) -> &'static str {
        match self {
            ConvertError::InvalidSpan { .. } => "Invalid span",
            ConvertError::MisalignedOffset { .. } => "Offset is not on a code point boundary",
            ConvertError::MalformedText { .. } => "Malformed UTF-8 text",
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConvertError::InvalidSpan { start, end, len } => write!(
                f,
                "{}: [{start}..{end}) in text of length {len}",
                self.message()
            ),
            ConvertError::MisalignedOffset { offset } => {
                write!(f, "{}: {offset}", self.message())
            }
            ConvertError::MalformedText { valid_up_to } => {
                write!(f, "{} after byte {valid_up_to}", self.message())
            }
        }
    }
}

impl std::error::Error for ConvertError {}
