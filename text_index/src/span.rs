use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

/// Which unit an offset counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexSpaceKind {
    /// UTF-16 code units ("BMP offsets"). Supplementary code points take two.
    Utf16,
    /// Code points of the UTF-8 text. Every code point takes one.
    Utf8,
    /// Raw UTF-8 bytes. A code point takes one to four.
    Bytes,
}

impl IndexSpaceKind {
    /// Width of `ch` in this space.
    pub fn width(self, ch: char) -> usize {
        match self {
            IndexSpaceKind::Utf16 => ch.len_utf16(),
            IndexSpaceKind::Utf8 => 1,
            IndexSpaceKind::Bytes => ch.len_utf8(),
        }
    }

    /// Length of the whole `text` in this space.
    pub fn len(self, text: &str) -> usize {
        match self {
            IndexSpaceKind::Utf16 => text.chars().map(char::len_utf16).sum(),
            IndexSpaceKind::Utf8 => text.chars().count(),
            IndexSpaceKind::Bytes => text.len(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            IndexSpaceKind::Utf16 => "utf16",
            IndexSpaceKind::Utf8 => "utf8",
            IndexSpaceKind::Bytes => "bytes",
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Type-level tag for an index space. Implemented only by [`Utf16`], [`Utf8`] and [`Bytes`].
pub trait IndexSpace:
    sealed::Sealed + fmt::Debug + Clone + Copy + PartialEq + Eq + std::hash::Hash + Default
{
    const KIND: IndexSpaceKind;
}

macro_rules! index_space {
    ($(#[$doc:meta])* $name:ident => $kind:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl IndexSpace for $name {
            const KIND: IndexSpaceKind = IndexSpaceKind::$kind;
        }
    };
}

index_space!(
    /// UTF-16 code-unit offsets.
    Utf16 => Utf16
);
index_space!(
    /// Code-point offsets into UTF-8 text.
    Utf8 => Utf8
);
index_space!(
    /// UTF-8 byte offsets.
    Bytes => Bytes
);

/// Half-open span `[start, end)` measured in the index space `S`.
///
/// Spans of different spaces are different types, so a UTF-16 selection cannot be passed where
/// a code-point span is expected. Nothing here checks `start <= end`; conversion does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Span<S: IndexSpace> {
    pub start: usize,
    pub end: usize,
    #[serde(skip)]
    space: PhantomData<S>,
}

pub type Utf16Span = Span<Utf16>;
pub type Utf8Span = Span<Utf8>;
pub type ByteSpan = Span<Bytes>;

impl<S: IndexSpace> Span<S> {
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start,
            end,
            space: PhantomData,
        }
    }

    pub fn empty(at: usize) -> Self {
        Span::new(at, at)
    }

    /// The span covering all of `text`.
    pub fn full(text: &str) -> Self {
        Span::new(0, S::KIND.len(text))
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn kind(&self) -> IndexSpaceKind {
        S::KIND
    }
}

impl<S: IndexSpace> From<(usize, usize)> for Span<S> {
    fn from((start, end): (usize, usize)) -> Self {
        Span::new(start, end)
    }
}

impl<S: IndexSpace> From<Span<S>> for (usize, usize) {
    fn from(span: Span<S>) -> Self {
        (span.start, span.end)
    }
}

impl<S: IndexSpace> fmt::Display for Span<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}..{})", S::KIND.name(), self.start, self.end)
    }
}
