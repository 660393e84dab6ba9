//! Output domain entity.
//!
//! An [`Output`] represents one connected display: a stable name, the mode
//! list advertised by the hardware (in discovery order), and the mode it is
//! currently driven at, if any. Geometric placement lives in the
//! [`ScreenMap`](crate::domain::layout::ScreenMap); list membership and
//! identity live in the [`OutputRegistry`](crate::domain::registry::OutputRegistry).

use crate::domain::mode::Mode;

/// One display managed by the compositor.
#[derive(Debug, Clone)]
pub struct Output {
    name: String,
    /// Advertised modes in discovery order. The order is stable: mode indexes
    /// shown to the user stay valid for the lifetime of the output.
    modes: Vec<Mode>,
    /// The mode the display is currently driven at. `None` until a mode has
    /// been applied. May be a custom mode that is absent from `modes`.
    current_mode: Option<Mode>,
}

impl Output {
    /// Creates an output with no advertised modes and no current mode.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modes: Vec::new(),
            current_mode: None,
        }
    }

    /// Creates an output from a discovered mode list.
    ///
    /// The current mode is seeded from the hardware-preferred mode, falling
    /// back to the first listed mode. An empty list leaves the output with no
    /// current mode.
    pub fn with_modes(name: impl Into<String>, modes: Vec<Mode>) -> Self {
        let seed = modes
            .iter()
            .find(|m| m.preferred)
            .or_else(|| modes.first())
            .copied();
        Self {
            name: name.into(),
            modes,
            current_mode: seed,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The advertised mode list in stable discovery order.
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    /// Appends a mode to the advertised list.
    pub fn add_mode(&mut self, mode: Mode) {
        self.modes.push(mode);
    }

    pub fn current_mode(&self) -> Option<Mode> {
        self.current_mode
    }

    /// Records `mode` as the one the display is now driven at.
    ///
    /// Callers must only do this after the hardware commit succeeded; the
    /// negotiation protocol depends on `current_mode` always naming a mode
    /// that is known to work.
    pub fn set_current_mode(&mut self, mode: Mode) {
        self.current_mode = Some(mode);
    }

    /// The hardware-preferred mode, if the display reports one.
    pub fn preferred_mode(&self) -> Option<Mode> {
        self.modes.iter().find(|m| m.preferred).copied()
    }
}
