//! In-process scene collaborators for the headless harness.
//!
//! The real window-management stack (layout engine, transaction scheduler,
//! surface tree) is a separate concern; the harness only needs something that
//! honors the collaborator traits and leaves an observable trace. These
//! implementations track just enough state to make the command surface's
//! effects visible in logs and assertable in integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use prism_core::{OutputId, ViewId};
use tracing::debug;

use crate::application::seat_commands::{Arranger, TransactionScheduler, ViewHost};

/// Tracks which output every known view sits on.
#[derive(Debug, Default)]
pub struct ViewTable {
    assignments: Mutex<HashMap<ViewId, OutputId>>,
}

impl ViewTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `view` on `output` (initial mapping, not a relocation).
    pub fn map_view(&self, view: ViewId, output: OutputId) {
        self.assignments
            .lock()
            .expect("lock poisoned")
            .insert(view, output);
    }

    /// The output `view` currently sits on, if the view is known.
    pub fn output_of(&self, view: ViewId) -> Option<OutputId> {
        self.assignments
            .lock()
            .expect("lock poisoned")
            .get(&view)
            .copied()
    }

    /// All views currently on `output`.
    pub fn views_on(&self, output: OutputId) -> Vec<ViewId> {
        self.assignments
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|(_, o)| **o == output)
            .map(|(v, _)| *v)
            .collect()
    }
}

impl ViewHost for ViewTable {
    fn send_to_output(&self, view: ViewId, output: OutputId) {
        debug!(view = view.0, ?output, "view reparented");
        self.assignments
            .lock()
            .expect("lock poisoned")
            .insert(view, output);
    }
}

/// Arranger that logs and counts arrangement requests per output.
#[derive(Debug, Default)]
pub struct LoggingArranger {
    requests: Mutex<Vec<OutputId>>,
}

impl LoggingArranger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every output that was asked to re-arrange, in request order.
    pub fn requests(&self) -> Vec<OutputId> {
        self.requests.lock().expect("lock poisoned").clone()
    }
}

impl Arranger for LoggingArranger {
    fn arrange_views(&self, output: OutputId) {
        debug!(?output, "arrange requested");
        self.requests.lock().expect("lock poisoned").push(output);
    }
}

/// Transaction scheduler that only counts how often one was started.
#[derive(Debug, Default)]
pub struct CountingTransactions {
    started: AtomicU64,
}

impl CountingTransactions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of transactions started so far.
    pub fn started(&self) -> u64 {
        self.started.load(Ordering::Relaxed)
    }
}

impl TransactionScheduler for CountingTransactions {
    fn start_transaction(&self) {
        let n = self.started.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(transaction = n, "transaction started");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Output, OutputRegistry};

    fn two_outputs() -> (OutputRegistry, OutputId, OutputId) {
        let mut registry = OutputRegistry::new();
        let a = registry.insert(Output::new("A"));
        let b = registry.insert(Output::new("B"));
        (registry, a, b)
    }

    #[test]
    fn test_view_table_tracks_reparenting() {
        // Arrange
        let (_registry, a, b) = two_outputs();
        let table = ViewTable::new();
        table.map_view(ViewId(1), a);

        // Act
        table.send_to_output(ViewId(1), b);

        // Assert
        assert_eq!(table.output_of(ViewId(1)), Some(b));
        assert!(table.views_on(a).is_empty());
        assert_eq!(table.views_on(b), vec![ViewId(1)]);
    }

    #[test]
    fn test_view_table_unknown_view_has_no_output() {
        let table = ViewTable::new();
        assert_eq!(table.output_of(ViewId(42)), None);
    }

    #[test]
    fn test_logging_arranger_records_request_order() {
        let (_registry, a, b) = two_outputs();
        let arranger = LoggingArranger::new();

        arranger.arrange_views(a);
        arranger.arrange_views(b);
        arranger.arrange_views(a);

        assert_eq!(arranger.requests(), vec![a, b, a]);
    }

    #[test]
    fn test_counting_transactions_counts() {
        let transactions = CountingTransactions::new();
        assert_eq!(transactions.started(), 0);
        transactions.start_transaction();
        transactions.start_transaction();
        assert_eq!(transactions.started(), 2);
    }
}
