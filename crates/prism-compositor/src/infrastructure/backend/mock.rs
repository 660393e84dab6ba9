//! Mock mode-commit backend for testing.
//!
//! Allows tests to reject specific commits and inspect exactly what the
//! negotiation protocol attempted, without any display hardware. Failures
//! are programmed per upcoming call, which makes the rollback sequence
//! (apply fails and revert succeeds, or both fail) easy to stage.

use std::sync::Mutex;

use prism_core::{Mode, OutputId};

use crate::application::negotiate_mode::{CommitError, ModeCommit};

/// A [`ModeCommit`] implementation that records calls and fails on demand.
#[derive(Debug, Default)]
pub struct MockBackend {
    commits: Mutex<Vec<(OutputId, Mode)>>,
    /// Number of upcoming commits to reject.
    fail_count: Mutex<u32>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `count` commits fail before accepting again.
    pub fn fail_next(&self, count: u32) {
        *self.fail_count.lock().expect("lock poisoned") = count;
    }

    /// Every commit attempted so far, in order, including rejected ones.
    pub fn commits(&self) -> Vec<(OutputId, Mode)> {
        self.commits.lock().expect("lock poisoned").clone()
    }

    /// Number of commits attempted so far.
    pub fn commit_count(&self) -> usize {
        self.commits.lock().expect("lock poisoned").len()
    }
}

impl ModeCommit for MockBackend {
    fn commit(&self, output: OutputId, mode: Mode) -> Result<(), CommitError> {
        self.commits.lock().expect("lock poisoned").push((output, mode));

        let mut remaining = self.fail_count.lock().expect("lock poisoned");
        if *remaining > 0 {
            *remaining -= 1;
            return Err(CommitError(format!("injected failure for {mode}")));
        }
        Ok(())
    }
}
