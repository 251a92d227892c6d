//! Property tests for line wrapping

use proptest::prelude::*;
use render_model::{wrap_text, FontStyle, TextMeasure};

fn measure(bold: bool, font_size: f32) -> TextMeasure {
    let style = if bold { FontStyle::Bold } else { FontStyle::Normal };
    TextMeasure::new(style, font_size)
}

proptest! {
    #[test]
    fn test_lines_fit_unless_single_character(
        text in "[a-zA-Z\u{C0}-\u{FF}\u{2014}\u{2022} ,.\n-]{0,300}",
        max_width in 5.0f32..200.0,
        bold in any::<bool>(),
        font_size in 8.0f32..24.0,
    ) {
        let measure = measure(bold, font_size);
        for line in wrap_text(&text, max_width, &measure) {
            prop_assert!(
                measure.width(&line) <= max_width || line.chars().count() == 1,
                "line {:?} is {}mm wide, limit {}mm",
                line,
                measure.width(&line),
                max_width
            );
        }
    }

    #[test]
    fn test_more_text_never_needs_fewer_lines(
        text in "[a-zA-Z\u{C0}-\u{FF} ]{0,200}",
        extra in "[a-zA-Z\u{C0}-\u{FF} ]{0,60}",
        max_width in 20.0f32..170.0,
    ) {
        let measure = measure(false, 12.0);
        let before = wrap_text(&text, max_width, &measure).len();
        let after = wrap_text(&format!("{text}{extra}"), max_width, &measure).len();
        prop_assert!(after >= before);
    }

    #[test]
    fn test_wrapping_keeps_every_word(text in "[a-z\u{E0}-\u{FF}]{1,12}( [a-z\u{E0}-\u{FF}]{1,12}){0,30}") {
        let lines = wrap_text(&text, 80.0, &measure(false, 12.0));
        let rejoined = lines.join(" ");
        prop_assert_eq!(
            rejoined.split_whitespace().collect::<Vec<_>>(),
            text.split_whitespace().collect::<Vec<_>>()
        );
    }
}
