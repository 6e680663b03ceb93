use crate::{CodePointRun, IndexSpaceKind, code_point_runs};

#[test]
fn test_run_widths() {
    let cases = [('a', 1, 1), ('é', 2, 1), ('一', 3, 1), ('😁', 4, 2)];
    for (ch, utf8_len, utf16_len) in cases {
        let run = CodePointRun::new(ch);
        assert_eq!(run.utf8_len, utf8_len, "{ch:?}");
        assert_eq!(run.utf16_len, utf16_len, "{ch:?}");
        assert_eq!(run.width(IndexSpaceKind::Bytes), utf8_len);
        assert_eq!(run.width(IndexSpaceKind::Utf16), utf16_len);
        assert_eq!(run.width(IndexSpaceKind::Utf8), 1);
        assert_eq!(IndexSpaceKind::Utf16.width(ch), utf16_len);
    }
}

#[test]
fn test_supplementary_detection() {
    assert!(CodePointRun::new('😁').is_supplementary());
    assert!(CodePointRun::new('𝄞').is_supplementary());
    assert!(!CodePointRun::new('\u{FFFF}').is_supplementary());
}

#[test]
fn test_runs_follow_text_order() {
    let runs: Vec<char> = code_point_runs("a😁b").map(|run| run.ch).collect();
    assert_eq!(runs, vec!['a', '😁', 'b']);
    assert_eq!(code_point_runs("").count(), 0);
}
