//! # prism-core
//!
//! Shared library for the Prism compositor containing the output registry,
//! layout geometry, seat state, and the command grammar.
//!
//! This crate is used by the compositor process and by tooling that needs to
//! reason about output arrangement. It has zero dependencies on OS APIs,
//! display protocols, or async runtimes.
//!
//! # Architecture overview
//!
//! Prism drives several displays ("outputs") from a single control thread.
//! Users address outputs three ways: by cyclic order (`next`/`previous`), by
//! compass direction (`left`/`right`/`up`/`down`), or by exact name
//! (`DP-1`). This crate defines:
//!
//! - **`domain`** – Pure state with no OS dependencies. The central piece is
//!   the [`OutputRegistry`]: an ordered, generation-checked arena of live
//!   outputs with a sentinel standing in while none are connected. Next to
//!   it sit the [`ScreenMap`] (where each output lies in the shared 2D
//!   space) and the [`Seat`] (which output/view holds focus).
//!
//! - **`command`** – The vocabulary of the textual command surface: logical
//!   directions, the exact-argument-count contract, and the error taxonomy
//!   reported back to controlling clients.

pub mod command;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `prism_core::OutputRegistry` instead of the full module path.
pub use command::{ensure_arg_count, CommandError, Direction};
pub use domain::layout::{Point, Rect, ScreenMap, SpatialDirection};
pub use domain::mode::Mode;
pub use domain::output::Output;
pub use domain::registry::{OutputId, OutputRef, OutputRegistry};
pub use domain::seat::{Seat, SeatFocus, ViewId};
