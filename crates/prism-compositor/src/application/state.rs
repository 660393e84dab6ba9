//! Shared mutable state of the compositor control thread.
//!
//! Everything here is owned by exactly one thread, the compositor's event
//! dispatch loop, and every command handler runs synchronously to completion
//! on it, so no locking is needed or wanted. Collaborators that *are* shared
//! (arrangement, transactions, the view host) live behind `Arc<dyn Trait>`
//! seams on the use-case structs instead.

use prism_core::{OutputRegistry, ScreenMap, Seat};

/// The registry, placement table, and seat the command handlers operate on.
#[derive(Debug)]
pub struct CompositorState {
    /// Sole owner of all live outputs.
    pub registry: OutputRegistry,
    /// Where each output sits in the shared layout space.
    pub layout: ScreenMap,
    /// The single seat this build drives. Multi-seat stays a per-handler
    /// parameter decision for later; nothing below this struct assumes one.
    pub seat: Seat,
}

impl CompositorState {
    /// Creates empty state: no outputs, sentinel focus.
    pub fn new(seat_name: impl Into<String>) -> Self {
        Self {
            registry: OutputRegistry::new(),
            layout: ScreenMap::new(),
            seat: Seat::new(seat_name),
        }
    }
}
