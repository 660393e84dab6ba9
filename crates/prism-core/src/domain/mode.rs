//! Video mode value type.
//!
//! A [`Mode`] is one timing configuration a display can be driven at. Refresh
//! rates are carried in millihertz, the convention used by display protocols,
//! so fractional rates such as 59.940 Hz survive without floating point.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One display timing: resolution plus refresh rate.
///
/// Modes are immutable values. An output advertises a list of them in
/// discovery order, with at most one flagged as hardware-preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mode {
    /// Horizontal resolution in pixels.
    pub width: u32,
    /// Vertical resolution in pixels.
    pub height: u32,
    /// Refresh rate in millihertz (60 Hz == 60_000).
    pub refresh_mhz: u32,
    /// `true` if the display reports this as its preferred mode.
    #[serde(default)]
    pub preferred: bool,
}

impl Mode {
    /// Creates a non-preferred mode.
    pub fn new(width: u32, height: u32, refresh_mhz: u32) -> Self {
        Self {
            width,
            height,
            refresh_mhz,
            preferred: false,
        }
    }

    /// Returns `true` if `other` drives the display with identical timings.
    ///
    /// The `preferred` flag is presentation metadata and is ignored: a custom
    /// mode that duplicates a listed mode's timings *is* that mode as far as
    /// the hardware is concerned.
    pub fn same_timings(&self, other: &Mode) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.refresh_mhz == other.refresh_mhz
    }
}

impl fmt::Display for Mode {
    /// Renders as `1920x1080@60.000 Hz`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}@{}.{:03} Hz",
            self.width,
            self.height,
            self.refresh_mhz / 1000,
            self.refresh_mhz % 1000
        )
    }
}
