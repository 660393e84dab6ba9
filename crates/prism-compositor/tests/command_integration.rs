//! Integration tests for the focus and relocation pipeline.
//!
//! These tests exercise the application layer of prism-compositor end-to-end:
//! `CommandDispatcher` + `SeatCommands` + the real scene infrastructure
//! (`ViewTable`, `LoggingArranger`, `CountingTransactions`).

use std::sync::Arc;

use prism_compositor::application::dispatch::CommandDispatcher;
use prism_compositor::application::negotiate_mode::ModeNegotiator;
use prism_compositor::application::seat_commands::SeatCommands;
use prism_compositor::application::state::CompositorState;
use prism_compositor::infrastructure::backend::virt::VirtualBackend;
use prism_compositor::infrastructure::scene::{
    CountingTransactions, LoggingArranger, ViewTable,
};
use prism_core::{
    CommandError, Mode, Output, OutputId, OutputRef, Rect, SeatFocus, ViewId,
};

struct Harness {
    state: CompositorState,
    ids: Vec<OutputId>,
    dispatcher: CommandDispatcher,
    views: Arc<ViewTable>,
    arranger: Arc<LoggingArranger>,
    transactions: Arc<CountingTransactions>,
}

/// Outputs A, B, C side by side, seat focused on B.
fn make_harness() -> Harness {
    let mut state = CompositorState::new("seat0");
    let ids: Vec<OutputId> = ["A", "B", "C"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let id = state.registry.insert(Output::with_modes(
                *name,
                vec![Mode {
                    width: 1920,
                    height: 1080,
                    refresh_mhz: 60_000,
                    preferred: true,
                }],
            ));
            state.layout.place(
                id,
                Rect {
                    x: 1920 * i as i32,
                    y: 0,
                    width: 1920,
                    height: 1080,
                },
            );
            id
        })
        .collect();
    state.seat.focused_output = OutputRef::Connected(ids[1]);

    let views = Arc::new(ViewTable::new());
    let arranger = Arc::new(LoggingArranger::new());
    let transactions = Arc::new(CountingTransactions::new());

    let dispatcher = CommandDispatcher::new(
        SeatCommands::new(
            Arc::clone(&arranger) as _,
            Arc::clone(&transactions) as _,
            Arc::clone(&views) as _,
        ),
        ModeNegotiator::new(Arc::new(VirtualBackend::new()) as _),
    );

    Harness {
        state,
        ids,
        dispatcher,
        views,
        arranger,
        transactions,
    }
}

// ── focus-output ──────────────────────────────────────────────────────────────

#[test]
fn test_focus_next_from_middle_lands_on_last() {
    let mut h = make_harness();

    h.dispatcher
        .dispatch(&mut h.state, &["focus-output", "next"])
        .unwrap();

    assert_eq!(h.state.seat.focused_output, OutputRef::Connected(h.ids[2]));
    assert_eq!(h.transactions.started(), 1);
}

#[test]
fn test_focus_previous_from_first_wraps_to_last() {
    let mut h = make_harness();
    h.state.seat.focused_output = OutputRef::Connected(h.ids[0]);

    h.dispatcher
        .dispatch(&mut h.state, &["focus-output", "previous"])
        .unwrap();

    assert_eq!(h.state.seat.focused_output, OutputRef::Connected(h.ids[2]));
}

#[test]
fn test_focus_by_nonexistent_name_fails_and_preserves_focus() {
    let mut h = make_harness();

    let err = h
        .dispatcher
        .dispatch(&mut h.state, &["focus-output", "nonexistent-name"])
        .unwrap_err();

    assert_eq!(
        err,
        CommandError::InvalidOutputIndicator("nonexistent-name".to_string())
    );
    assert_eq!(h.state.seat.focused_output, OutputRef::Connected(h.ids[1]));
    assert_eq!(h.transactions.started(), 0);
}

#[test]
fn test_focus_spatially_across_the_row() {
    let mut h = make_harness();

    h.dispatcher
        .dispatch(&mut h.state, &["focus-output", "left"])
        .unwrap();
    assert_eq!(h.state.seat.focused_output, OutputRef::Connected(h.ids[0]));

    // Nothing further left: silent no-op.
    h.dispatcher
        .dispatch(&mut h.state, &["focus-output", "left"])
        .unwrap();
    assert_eq!(h.state.seat.focused_output, OutputRef::Connected(h.ids[0]));
}

// ── send-to-output ────────────────────────────────────────────────────────────

#[test]
fn test_send_to_output_moves_view_and_arranges_both_sides() {
    // Arrange – view 7 lives on B and has keyboard focus.
    let mut h = make_harness();
    h.views.map_view(ViewId(7), h.ids[1]);
    h.state.seat.focus_view(ViewId(7), h.ids[1]);

    // Act
    h.dispatcher
        .dispatch(&mut h.state, &["send-to-output", "C"])
        .unwrap();

    // Assert – the view moved, source was arranged before destination, and
    // exactly one transaction covers both.
    assert_eq!(h.views.output_of(ViewId(7)), Some(h.ids[2]));
    assert_eq!(h.arranger.requests(), vec![h.ids[1], h.ids[2]]);
    assert_eq!(h.transactions.started(), 1);
    assert_eq!(h.state.seat.focus, SeatFocus::None);
}

#[test]
fn test_send_to_current_output_is_idempotent() {
    // Arrange
    let mut h = make_harness();
    h.views.map_view(ViewId(7), h.ids[1]);
    h.state.seat.focus_view(ViewId(7), h.ids[1]);

    // Act – B is where the view already lives.
    h.dispatcher
        .dispatch(&mut h.state, &["send-to-output", "B"])
        .unwrap();

    // Assert – nothing moved, nothing was arranged, no transaction started.
    assert_eq!(h.views.output_of(ViewId(7)), Some(h.ids[1]));
    assert!(h.arranger.requests().is_empty());
    assert_eq!(h.transactions.started(), 0);
    assert_ne!(h.state.seat.focus, SeatFocus::None);
}

#[test]
fn test_send_without_focused_view_is_silent_noop() {
    let mut h = make_harness();

    let result = h
        .dispatcher
        .dispatch(&mut h.state, &["send-to-output", "next"]);

    assert_eq!(result, Ok(None));
    assert_eq!(h.transactions.started(), 0);
}

// ── Argument-count contract through the dispatcher ────────────────────────────

#[test]
fn test_arity_violations_are_distinct_errors() {
    let mut h = make_harness();

    assert_eq!(
        h.dispatcher.dispatch(&mut h.state, &["send-to-output"]),
        Err(CommandError::NotEnoughArguments)
    );
    assert_eq!(
        h.dispatcher
            .dispatch(&mut h.state, &["send-to-output", "next", "now"]),
        Err(CommandError::TooManyArguments)
    );
    assert_eq!(h.transactions.started(), 0);
}

#[test]
fn test_unknown_command_does_not_mutate_state() {
    let mut h = make_harness();

    let err = h
        .dispatcher
        .dispatch(&mut h.state, &["swap-outputs", "A", "B"])
        .unwrap_err();

    assert_eq!(err, CommandError::UnknownCommand("swap-outputs".to_string()));
    assert_eq!(h.state.seat.focused_output, OutputRef::Connected(h.ids[1]));
}
