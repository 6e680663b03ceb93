use crate::span::IndexSpaceKind;

/// One code point of a text together with its width in every index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointRun {
    pub ch: char,
    /// 1..=4
    pub utf8_len: usize,
    /// 1 inside the BMP, 2 for a surrogate pair.
    pub utf16_len: usize,
}

impl CodePointRun {
    pub fn new(ch: char) -> Self {
        CodePointRun {
            ch,
            utf8_len: ch.len_utf8(),
            utf16_len: ch.len_utf16(),
        }
    }

    pub fn width(&self, kind: IndexSpaceKind) -> usize {
        kind.width(self.ch)
    }

    pub fn is_supplementary(&self) -> bool {
        self.utf16_len == 2
    }
}

/// Walks `text` in order, one run per code point.
pub fn code_point_runs(text: &str) -> impl Iterator<Item = CodePointRun> + '_ {
    text.chars().map(CodePointRun::new)
}
