//! Application layer: the use cases behind the command surface.
//!
//! Everything here operates on [`state::CompositorState`] synchronously and
//! reaches the outside world only through the collaborator traits defined
//! next to the use case that needs them.

pub mod dispatch;
pub mod negotiate_mode;
pub mod resolve_output;
pub mod seat_commands;
pub mod state;
