//! Pure domain entities: outputs, modes, spatial layout, and seats.
//!
//! Nothing in here touches the OS, the display hardware, or an async
//! runtime; it is all plain data and queries, which keeps it unit-testable
//! and reusable from both the compositor and any future remote-control
//! tooling.

pub mod layout;
pub mod mode;
pub mod output;
pub mod registry;
pub mod seat;
