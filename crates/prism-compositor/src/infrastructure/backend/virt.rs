//! Virtual mode-commit backend.
//!
//! Drives no hardware at all: every commit is accepted and logged. This is
//! what the headless harness runs against, and it doubles as the reference
//! for how trivially a backend can satisfy the [`ModeCommit`] contract.

use prism_core::{Mode, OutputId};
use tracing::info;

use crate::application::negotiate_mode::{CommitError, ModeCommit};

/// A backend that accepts every mode unconditionally.
#[derive(Debug, Default)]
pub struct VirtualBackend;

impl VirtualBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ModeCommit for VirtualBackend {
    fn commit(&self, output: OutputId, mode: Mode) -> Result<(), CommitError> {
        info!(?output, %mode, "virtual backend committed mode");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Output, OutputRegistry};

    #[test]
    fn test_virtual_backend_accepts_any_mode() {
        let mut registry = OutputRegistry::new();
        let id = registry.insert(Output::new("VIRT-1"));
        let backend = VirtualBackend::new();

        assert!(backend.commit(id, Mode::new(1920, 1080, 60_000)).is_ok());
        assert!(backend.commit(id, Mode::new(1, 1, 1)).is_ok());
    }
}
