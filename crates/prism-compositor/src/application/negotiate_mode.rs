//! Mode negotiation: enumerating and applying display modes with rollback.
//!
//! Mode changes are the one hardware operation in the control plane that can
//! genuinely fail: a display may reject timings it advertised, a cable may
//! not carry the bandwidth. The only safe contract is *never leave the output
//! worse off than before the attempt*, so every apply carries a mandatory
//! compensating action:
//!
//! ```text
//! commit(new) ──ok──► record new as current
//!      │
//!      └─fail──► commit(prior)   (must succeed; prior was just working)
//! ```
//!
//! A failed rollback means the invariant "`current_mode` names a working
//! mode" has been violated from outside; there is no sane state to continue
//! in, so the process logs and aborts rather than limping along with a dead
//! display.

use std::fmt::Write as _;
use std::sync::Arc;

use prism_core::{CommandError, Mode, OutputId, OutputRegistry};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// A hardware (or virtual) mode-set rejection.
#[derive(Debug, Error)]
#[error("mode commit rejected: {0}")]
pub struct CommitError(pub String);

/// The hardware-facing seam: attempts to drive an output at a mode.
///
/// Blocking from the control plane's perspective: the call returns only once
/// the configuration is known to have been accepted or rejected.
pub trait ModeCommit: Send + Sync {
    fn commit(&self, output: OutputId, mode: Mode) -> Result<(), CommitError>;
}

/// Produces the `list-modes` report for one output.
///
/// One line per advertised mode, in stable discovery order:
/// `index: WIDTHxHEIGHT@RATE Hz [(current)] [(preferred)]`. The current
/// marker compares timings only, so a custom mode that duplicates a listed
/// mode's timings marks that line. Read-only; a stale handle yields an empty
/// report.
pub fn list_modes(registry: &OutputRegistry, output: OutputId) -> String {
    let Some(entry) = registry.get(output) else {
        return String::new();
    };

    let current = entry.current_mode();
    let mut report = String::new();
    for (index, mode) in entry.modes().iter().enumerate() {
        let is_current = current.is_some_and(|c| c.same_timings(mode));
        writeln!(
            report,
            "{index}: {mode}{}{}",
            if is_current { " (current)" } else { "" },
            if mode.preferred { " (preferred)" } else { "" },
        )
        .expect("writing to a String cannot fail");
    }
    report
}

/// The mode-negotiation use case.
pub struct ModeNegotiator {
    backend: Arc<dyn ModeCommit>,
}

impl ModeNegotiator {
    pub fn new(backend: Arc<dyn ModeCommit>) -> Self {
        Self { backend }
    }

    /// `set-mode <index>`: applies the mode at `index` in the advertised
    /// list.
    ///
    /// An index beyond the list is a silent no-op; the enumeration simply
    /// locates no such mode. Commit failure rolls back (see module docs) and
    /// is reported through logging, not as a command error.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidValue`] when the output has no current
    /// mode: without a known-working mode there is nothing to roll back to,
    /// so the attempt is refused up front.
    pub fn set_mode(
        &self,
        registry: &mut OutputRegistry,
        output: OutputId,
        index: usize,
    ) -> Result<(), CommandError> {
        let Some(entry) = registry.get(output) else {
            return Ok(());
        };
        let Some(mode) = entry.modes().get(index).copied() else {
            debug!(index, "set-mode: no advertised mode at index");
            return Ok(());
        };
        self.apply_with_rollback(registry, output, mode)
    }

    /// `set-mode-custom <width> <height> <refresh-mhz>`: applies
    /// caller-supplied timings that need not appear in the advertised list.
    ///
    /// Same apply/rollback contract as [`set_mode`](Self::set_mode).
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidValue`] for zero width, height, or
    /// refresh, and when the output has no current mode to fall back to.
    pub fn set_mode_custom(
        &self,
        registry: &mut OutputRegistry,
        output: OutputId,
        width: u32,
        height: u32,
        refresh_mhz: u32,
    ) -> Result<(), CommandError> {
        if width == 0 || height == 0 || refresh_mhz == 0 {
            return Err(CommandError::InvalidValue(format!(
                "custom mode {width}x{height}@{refresh_mhz}mHz has a zero component"
            )));
        }
        self.apply_with_rollback(registry, output, Mode::new(width, height, refresh_mhz))
    }

    /// Commits `mode`, reverting to the previously working mode on rejection.
    fn apply_with_rollback(
        &self,
        registry: &mut OutputRegistry,
        output: OutputId,
        mode: Mode,
    ) -> Result<(), CommandError> {
        let Some(entry) = registry.get(output) else {
            return Ok(());
        };
        let name = entry.name().to_string();
        let Some(prior) = entry.current_mode() else {
            return Err(CommandError::InvalidValue(format!(
                "output {name} has no working mode to fall back to"
            )));
        };

        match self.backend.commit(output, mode) {
            Ok(()) => {
                if let Some(entry) = registry.get_mut(output) {
                    entry.set_current_mode(mode);
                }
                info!(output = %name, %mode, "mode applied");
                Ok(())
            }
            Err(commit_err) => {
                warn!(output = %name, %mode, %commit_err, "mode rejected, rolling back");
                if let Err(rollback_err) = self.backend.commit(output, prior) {
                    // The prior mode was driving the display moments ago; if
                    // it no longer commits, state tracking has diverged from
                    // the hardware and nothing downstream can be trusted.
                    error!(output = %name, %rollback_err, "rollback commit failed");
                    panic!("rollback to previously working mode failed: {rollback_err}");
                }
                Ok(())
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
