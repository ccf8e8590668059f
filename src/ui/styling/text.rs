//! Text size presets and label measurement

use core::fmt::Write;

use embedded_graphics::mono_font::{MonoFont, ascii::FONT_5X8, ascii::FONT_6X10, ascii::FONT_10X20};
use serde::{Deserialize, Serialize};

/// Maximum length of an axis or highlight label (characters)
pub const MAX_LABEL_LENGTH: usize = 24;

/// Fixed-capacity label text, so relayout never grows the heap per label.
pub type LabelText = heapless::String<MAX_LABEL_LENGTH>;

/// Build a [`LabelText`], truncating anything past [`MAX_LABEL_LENGTH`].
pub fn label_text(text: &str) -> LabelText {
    let mut label = LabelText::new();
    for c in text.chars() {
        if label.push(c).is_err() {
            break;
        }
    }
    label
}

/// Format `value` into a [`LabelText`], with `precision` decimals if given.
///
/// Values whose positional form does not fit fall back to scientific
/// notation, which always fits, so the text never shows a cut-off number.
pub fn value_text(value: f64, precision: Option<usize>) -> LabelText {
    let mut text = LabelText::new();
    let written = match precision {
        Some(precision) => write!(text, "{:.*}", precision, value),
        None => write!(text, "{}", value),
    };

    if written.is_err() {
        text.clear();
        let _ = match precision {
            Some(precision) => write!(text, "{:.*e}", precision, value),
            None => write!(text, "{:e}", value),
        };
    }

    text
}

/// Text size variants
///
/// Provides three preset text sizes with corresponding embedded-graphics fonts:
/// - `Small`: 5x8 font
/// - `Medium`: 6x10 font (default)
/// - `Large`: 10x20 font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_5X8,
            TextSize::Medium => &FONT_6X10,
            TextSize::Large => &FONT_10X20,
        }
    }

    /// Height of one line of text in pixels
    pub fn line_height(&self) -> u32 {
        self.font().character_size.height
    }

    /// Rendered width of `text` in pixels
    pub fn text_width(&self, text: &str) -> u32 {
        let font = self.font();
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return 0;
        }
        chars * font.character_size.width + (chars - 1) * font.character_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_text_truncates() {
        let long = "0123456789012345678901234567890";
        assert_eq!(label_text(long).len(), MAX_LABEL_LENGTH);
        assert_eq!(label_text("Mon").as_str(), "Mon");
    }

    #[test]
    fn test_value_text_positional_when_it_fits() {
        assert_eq!(value_text(7.5, None).as_str(), "7.5");
        assert_eq!(value_text(-25.0, None).as_str(), "-25");
        assert_eq!(value_text(2.26, Some(1)).as_str(), "2.3");
    }

    #[test]
    fn test_value_text_large_values_use_exponent() {
        assert_eq!(value_text(1e24, None).as_str(), "1e24");
        assert_eq!(value_text(1e25, None).as_str(), "1e25");
        assert_eq!(value_text(-1.5e30, Some(1)).as_str(), "-1.5e30");
        assert_eq!(value_text(f64::MAX, None).as_str(), "1.7976931348623157e308");
        assert_eq!(value_text(f64::MIN, None).as_str(), "-1.7976931348623157e308");
    }

    #[test]
    fn test_text_width_uses_font_metrics() {
        assert_eq!(TextSize::Medium.text_width(""), 0);
        assert_eq!(TextSize::Medium.text_width("abc"), 18);
        assert_eq!(TextSize::Large.line_height(), 20);
    }
}
