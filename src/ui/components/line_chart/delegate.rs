//! Host-supplied chart customisation

use crate::ui::styling::{LabelText, value_text};

/// Callbacks the chart uses for label text and highlight gating.
///
/// The host passes an implementation to [`LineChart::new`](super::LineChart::new);
/// the chart owns it and asks it again on every relayout.
pub trait LineChartDelegate {
    /// Title for the X-axis label of sample `index`, or `None` for no label.
    fn title_for_sample(&self, index: usize) -> Option<LabelText>;

    /// Text for `value`, used for Y-axis labels and the highlighted sample.
    fn format_value(&self, value: f64) -> LabelText;

    /// Whether sample `index` may be highlighted by touch.
    fn should_highlight(&self, index: usize) -> bool;
}

/// Delegate for charts without host customisation
///
/// No X-axis titles, plain `Display` formatting, and highlighting refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDelegate;

impl LineChartDelegate for DefaultDelegate {
    fn title_for_sample(&self, _index: usize) -> Option<LabelText> {
        None
    }

    fn format_value(&self, value: f64) -> LabelText {
        value_text(value, None)
    }

    fn should_highlight(&self, _index: usize) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delegate() {
        let delegate = DefaultDelegate;

        assert_eq!(delegate.title_for_sample(0), None);
        assert_eq!(delegate.format_value(7.5).as_str(), "7.5");
        assert_eq!(delegate.format_value(-25.0).as_str(), "-25");
        assert!(!delegate.should_highlight(2));
    }

    #[test]
    fn test_default_delegate_never_cuts_values() {
        let delegate = DefaultDelegate;

        assert_eq!(delegate.format_value(1e24).as_str(), "1e24");
        assert_eq!(delegate.format_value(1e25).as_str(), "1e25");
        assert_eq!(delegate.format_value(-3.25e40).as_str(), "-3.25e40");
    }
}
