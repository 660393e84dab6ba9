//! Mode-commit backends.
//!
//! The application layer talks to display hardware exclusively through the
//! [`ModeCommit`](crate::application::negotiate_mode::ModeCommit) trait. Two
//! implementations live here:
//!
//! - [`virt::VirtualBackend`] accepts everything; it backs the headless
//!   harness where no real hardware exists.
//! - [`mock::MockBackend`] records commits and rejects on demand; it backs
//!   the rollback tests.
//!
//! A KMS/DRM backend would slot in as a third module implementing the same
//! trait; nothing above this layer would change.

pub mod mock;
pub mod virt;
