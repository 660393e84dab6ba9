//! Seat-level output commands: focus switching and view relocation.
//!
//! This use case is the heart of the control plane. It receives resolved
//! command tokens, consults the [`resolve_output`] chain for a target, and
//! mutates seat state while delegating the visual consequences to the
//! injected collaborators.
//!
//! # Architecture
//!
//! The use case depends only on traits ([`Arranger`], [`TransactionScheduler`],
//! [`ViewHost`]) and domain types. All scene-graph implementations are
//! injected at construction time, making both operations fully unit-testable.
//!
//! # Ordering guarantee
//!
//! When a view moves between outputs, the source output is re-arranged before
//! the destination, and both before the transaction starts; the transaction
//! must observe final geometry on both sides.

use std::sync::Arc;

use prism_core::{CommandError, OutputId, OutputRef, SeatFocus, ViewId};
use tracing::debug;

use crate::application::resolve_output::resolve_output;
use crate::application::state::CompositorState;

/// Recomputes window geometry for one output.
///
/// Side-effecting but idempotent; calling it on an output whose contents did
/// not change is wasteful, not wrong.
pub trait Arranger: Send + Sync {
    fn arrange_views(&self, output: OutputId);
}

/// Begins an atomic visual-update commit.
///
/// How multiple pending updates are batched into one commit is the
/// scheduler's business; the control plane only signals that current state is
/// consistent and worth presenting.
pub trait TransactionScheduler: Send + Sync {
    fn start_transaction(&self);
}

/// Reparents views between outputs.
///
/// The window management layer owns views; the control plane only tells it
/// where a view should live next.
pub trait ViewHost: Send + Sync {
    fn send_to_output(&self, view: ViewId, output: OutputId);
}

/// The focus-switching and view-relocation use case.
pub struct SeatCommands {
    arranger: Arc<dyn Arranger>,
    transactions: Arc<dyn TransactionScheduler>,
    views: Arc<dyn ViewHost>,
}

impl SeatCommands {
    pub fn new(
        arranger: Arc<dyn Arranger>,
        transactions: Arc<dyn TransactionScheduler>,
        views: Arc<dyn ViewHost>,
    ) -> Self {
        Self {
            arranger,
            transactions,
            views,
        }
    }

    /// `focus-output <token>`: moves the seat's focus to the resolved output.
    ///
    /// Silent no-op while the sentinel is focused (there is nothing to switch
    /// to) and when resolution finds nothing that way. Keyboard focus is
    /// cleared so the focus-stack logic can pick the right view on the new
    /// output.
    ///
    /// # Errors
    ///
    /// Propagates [`CommandError::InvalidOutputIndicator`] from resolution;
    /// seat state is untouched in that case.
    pub fn focus_output(
        &self,
        state: &mut CompositorState,
        token: &str,
    ) -> Result<(), CommandError> {
        let Some(current) = state.seat.focused_output.connected() else {
            return Ok(());
        };

        let Some(target) = resolve_output(&state.registry, &state.layout, current, token)? else {
            return Ok(());
        };

        debug!(
            seat = state.seat.name(),
            to = state.registry.get(target).map(|o| o.name()),
            "focus-output"
        );

        state.seat.focused_output = OutputRef::Connected(target);
        state.seat.clear_focus();
        self.transactions.start_transaction();
        Ok(())
    }

    /// `send-to-output <token>`: moves the focused view to the resolved
    /// output.
    ///
    /// Silent no-op while the sentinel is focused, when focus is not a view,
    /// when resolution finds nothing, and when the destination is the output
    /// the view already sits on (idempotent; no transaction is started).
    ///
    /// Otherwise the view is reparented, keyboard focus is cleared, and both
    /// affected outputs are re-arranged (source first, then destination)
    /// before the transaction starts.
    ///
    /// # Errors
    ///
    /// Propagates [`CommandError::InvalidOutputIndicator`] from resolution;
    /// no state changes in that case.
    pub fn send_to_output(
        &self,
        state: &mut CompositorState,
        token: &str,
    ) -> Result<(), CommandError> {
        let Some(current) = state.seat.focused_output.connected() else {
            return Ok(());
        };

        let SeatFocus::View { view, output: source } = state.seat.focus else {
            // Focus is empty or rests on something that isn't a view.
            return Ok(());
        };

        let Some(target) = resolve_output(&state.registry, &state.layout, current, token)? else {
            return Ok(());
        };

        if target == source {
            return Ok(());
        }

        debug!(
            seat = state.seat.name(),
            view = view.0,
            to = state.registry.get(target).map(|o| o.name()),
            "send-to-output"
        );

        self.views.send_to_output(view, target);
        state.seat.clear_focus();

        // Source lost a view, destination gained one; both layouts are stale
        // until re-arranged.
        self.arranger.arrange_views(source);
        self.arranger.arrange_views(target);
        self.transactions.start_transaction();
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
