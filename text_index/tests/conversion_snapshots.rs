mod common;

use text_index::{
    ByteSpan, ConvertOptions, Utf16Span, convert_indices_bmp_to_utf8, convert_span,
};

fn render(text: &str, span: Utf16Span) -> String {
    let utf8 = convert_indices_bmp_to_utf8(text, span)
        .unwrap_or_else(|e| panic!("conversion failed for {text}: {e}"));
    let bytes: ByteSpan = convert_span(text, utf8, &ConvertOptions::default())
        .unwrap_or_else(|e| panic!("conversion failed for {text}: {e}"));
    format!("\"{text}\" {span} => {utf8} => {bytes}")
}

#[test]
fn supplementary_conversion_table() {
    common::init_tracing();

    let cases = [
        ("😁 Hello World.", Utf16Span::new(3, 8)),
        ("😁 Hell😁 World.", Utf16Span::new(3, 9)),
        ("😁 Hello😁World.", Utf16Span::new(3, 8)),
        ("😁 Hell😁😁World.", Utf16Span::new(3, 9)),
    ];
    let rendered = cases
        .iter()
        .map(|&(text, span)| render(text, span))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(rendered, @r#"
    "😁 Hello World." utf16[3..8) => utf8[2..7) => bytes[5..10)
    "😁 Hell😁 World." utf16[3..9) => utf8[2..7) => bytes[5..13)
    "😁 Hello😁World." utf16[3..8) => utf8[2..7) => bytes[5..10)
    "😁 Hell😁😁World." utf16[3..9) => utf8[2..7) => bytes[5..13)
    "#);
}
