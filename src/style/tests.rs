use owo_colors::OwoColorize;
use rstest::rstest;

use super::*;

#[rstest]
#[case(r#""yellow""#, Color::Yellow)]
#[case(r#""bright-red""#, Color::BrightRed)]
#[case(r#""default""#, Color::Default)]
fn test_color_deserialize(#[case] input: &str, #[case] expected: Color) {
    assert_eq!(json::from_str::<Color>(input).unwrap(), expected);
}

#[test]
fn test_color_deserialize_unknown() {
    assert!(json::from_str::<Color>(r##""#102030""##).is_err());
    assert!(json::from_str::<Color>("42").is_err());
}

#[test]
fn test_style_deserialize() {
    let style: Style = json::from_str(r#"{"modes": ["bold", "underline"], "foreground": "cyan"}"#).unwrap();
    assert_eq!(
        style,
        Style::new().modes(vec![Mode::Bold, Mode::Underline]).foreground(Color::Cyan)
    );
    assert!(!style.is_plain());
    assert!(Style::default().is_plain());
}

#[test]
fn test_style_rejects_unknown_mode() {
    assert!(json::from_str::<Style>(r#"{"modes": ["blink"]}"#).is_err());
}

#[test]
fn test_plain_style_renders_text_unchanged() {
    let style = owo_colors::Style::from(&Style::new());
    assert_eq!("text".style(style).to_string(), "text");
}

#[test]
fn test_style_renders_escape_sequences() {
    let style = owo_colors::Style::from(&Style::new().modes(vec![Mode::Bold]).foreground(Color::Red));
    assert_eq!(
        "text".style(style).to_string(),
        format!("{}", "text".style(owo_colors::Style::new().bold().red()))
    );
}
