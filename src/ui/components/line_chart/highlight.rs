//! Touch highlight state machine
//!
//! `Idle` until a press or drag lands near a sample the delegate approves;
//! back to `Idle` on release or cancel. Transitions happen synchronously with
//! the touch event.

use log::trace;

use super::delegate::LineChartDelegate;
use super::mapper::nearest_sample_index;

/// Which sample, if any, is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightState {
    #[default]
    Idle,
    Highlighted(usize),
}

impl HighlightState {
    /// Highlighted sample index
    pub fn index(&self) -> Option<usize> {
        match self {
            HighlightState::Idle => None,
            HighlightState::Highlighted(index) => Some(*index),
        }
    }

    /// Next state after a press or drag at canvas X `x`.
    ///
    /// Moves to the nearest sample when the delegate approves it, otherwise
    /// keeps the current state.
    pub fn on_pointer<L>(self, x: f32, abscissas: &[f32], delegate: &L) -> Self
    where
        L: LineChartDelegate + ?Sized,
    {
        match nearest_sample_index(x, abscissas) {
            Some(index) if delegate.should_highlight(index) => {
                trace!("Highlighting sample {} at x={}", index, x);
                HighlightState::Highlighted(index)
            }
            Some(index) => {
                trace!("Delegate refused highlight of sample {}", index);
                self
            }
            None => self,
        }
    }

    /// Next state after a release or cancel
    pub fn on_release(self) -> Self {
        HighlightState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::LabelText;

    /// Approves every sample except `refused`
    struct Gate {
        refused: Option<usize>,
    }

    impl LineChartDelegate for Gate {
        fn title_for_sample(&self, _index: usize) -> Option<LabelText> {
            None
        }

        fn format_value(&self, _value: f64) -> LabelText {
            LabelText::new()
        }

        fn should_highlight(&self, index: usize) -> bool {
            Some(index) != self.refused
        }
    }

    const ABSCISSAS: [f32; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

    #[test]
    fn test_press_then_release() {
        let gate = Gate { refused: None };

        let state = HighlightState::Idle.on_pointer(52.0, &ABSCISSAS, &gate);
        assert_eq!(state, HighlightState::Highlighted(2));

        assert_eq!(state.on_release(), HighlightState::Idle);
        assert_eq!(HighlightState::Idle.on_release(), HighlightState::Idle);
    }

    #[test]
    fn test_drag_moves_highlight() {
        let gate = Gate { refused: None };

        let state = HighlightState::Highlighted(2).on_pointer(80.0, &ABSCISSAS, &gate);
        assert_eq!(state.index(), Some(3));
    }

    #[test]
    fn test_refused_sample_keeps_state() {
        let gate = Gate { refused: Some(3) };

        let state = HighlightState::Highlighted(1).on_pointer(74.0, &ABSCISSAS, &gate);
        assert_eq!(state, HighlightState::Highlighted(1));

        let state = HighlightState::Idle.on_pointer(74.0, &ABSCISSAS, &gate);
        assert_eq!(state, HighlightState::Idle);
    }

    #[test]
    fn test_no_samples_keeps_state() {
        let gate = Gate { refused: None };
        assert_eq!(
            HighlightState::Idle.on_pointer(10.0, &[], &gate),
            HighlightState::Idle
        );
    }
}
