//! Seat: one input-focus domain.
//!
//! A seat groups one keyboard/pointer pair and tracks two things: which
//! output its focus lives on, and which view (window), if any, currently
//! holds keyboard focus. Views themselves are managed elsewhere; the seat
//! only holds a [`ViewId`] together with the output that view sits on.
//!
//! Invariant: `focused_output` is [`OutputRef::Sentinel`] exactly while zero
//! outputs are connected. Whoever connects or disconnects outputs is
//! responsible for repointing seats accordingly.

use crate::domain::registry::{OutputId, OutputRef};

/// Opaque handle to a view (window) owned by the window management layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub u64);

/// What the seat's keyboard focus currently rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeatFocus {
    /// Nothing is focused; the focus-stack logic decides what comes next.
    #[default]
    None,
    /// A view is focused, along with the output it currently sits on.
    View { view: ViewId, output: OutputId },
}

/// One input-focus context.
#[derive(Debug)]
pub struct Seat {
    name: String,
    /// The output this seat considers current. Sentinel iff no outputs exist.
    pub focused_output: OutputRef,
    /// The focused view, if focus rests on a view at all.
    pub focus: SeatFocus,
}

impl Seat {
    /// Creates a seat with sentinel focus (no outputs connected yet).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            focused_output: OutputRef::Sentinel,
            focus: SeatFocus::None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points keyboard focus at `view` on `output`.
    pub fn focus_view(&mut self, view: ViewId, output: OutputId) {
        self.focus = SeatFocus::View { view, output };
    }

    /// Drops keyboard focus without touching the focused output.
    pub fn clear_focus(&mut self) {
        self.focus = SeatFocus::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::output::Output;
    use crate::domain::registry::OutputRegistry;

    #[test]
    fn test_new_seat_starts_on_sentinel_with_no_focus() {
        let seat = Seat::new("seat0");
        assert_eq!(seat.focused_output, OutputRef::Sentinel);
        assert_eq!(seat.focus, SeatFocus::None);
    }

    #[test]
    fn test_focus_view_records_view_and_its_output() {
        // Arrange
        let mut registry = OutputRegistry::new();
        let output = registry.insert(Output::new("DP-1"));
        let mut seat = Seat::new("seat0");

        // Act
        seat.focus_view(ViewId(7), output);

        // Assert
        assert_eq!(
            seat.focus,
            SeatFocus::View {
                view: ViewId(7),
                output
            }
        );
    }

    #[test]
    fn test_clear_focus_keeps_focused_output() {
        let mut registry = OutputRegistry::new();
        let output = registry.insert(Output::new("DP-1"));
        let mut seat = Seat::new("seat0");
        seat.focused_output = OutputRef::Connected(output);
        seat.focus_view(ViewId(1), output);

        seat.clear_focus();

        assert_eq!(seat.focus, SeatFocus::None);
        assert_eq!(seat.focused_output, OutputRef::Connected(output));
    }
}
