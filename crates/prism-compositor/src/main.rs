//! Prism compositor headless entry point.
//!
//! Wires the control plane to virtual infrastructure and drives it from
//! stdin: one whitespace-tokenized command per line, reports on stdout,
//! errors echoed back the way a controlling client would see them.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()          -- TOML roster of virtual outputs
//!  └─ seed CompositorState   -- registry + layout + seat
//!  └─ CommandDispatcher      -- focus / relocation / mode negotiation
//!       ├─ LoggingArranger        (arrangement stub)
//!       ├─ CountingTransactions   (transaction stub)
//!       ├─ ViewTable              (view host stub)
//!       └─ VirtualBackend         (mode commits always succeed)
//! ```
//!
//! The harness also stands in for the focus-stack logic that a full window
//! manager provides: whenever a command leaves keyboard focus empty, it
//! focuses some view living on the focused output.

use std::sync::Arc;

use tokio::io::AsyncBufReadExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use prism_compositor::application::dispatch::CommandDispatcher;
use prism_compositor::application::negotiate_mode::ModeNegotiator;
use prism_compositor::application::seat_commands::SeatCommands;
use prism_compositor::application::state::CompositorState;
use prism_compositor::infrastructure::backend::virt::VirtualBackend;
use prism_compositor::infrastructure::scene::{CountingTransactions, LoggingArranger, ViewTable};
use prism_compositor::infrastructure::storage::config::{load_config, CompositorConfig, OutputEntry};
use prism_core::{Mode, Output, Rect, SeatFocus, ViewId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Prism compositor starting (headless)");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            warn!("could not load config, using defaults: {e}");
            CompositorConfig::default()
        }
    };

    // ── Seed the output roster ────────────────────────────────────────────────
    let roster = if config.outputs.is_empty() {
        info!("no outputs configured, seeding a single virtual output");
        vec![OutputEntry {
            name: "VIRT-1".to_string(),
            x: 0,
            y: 0,
            modes: vec![Mode {
                width: 1920,
                height: 1080,
                refresh_mhz: 60_000,
                preferred: true,
            }],
        }]
    } else {
        config.outputs.clone()
    };

    let mut state = CompositorState::new(config.compositor.seat_name.clone());
    let views = Arc::new(ViewTable::new());

    for entry in roster {
        let output = Output::with_modes(entry.name.clone(), entry.modes);
        // Placement size follows the seeded mode; a modeless output keeps an
        // empty box and stays invisible to spatial resolution.
        let (width, height) = output
            .current_mode()
            .map(|m| (m.width, m.height))
            .unwrap_or((0, 0));
        let id = state.registry.insert(output);
        state.layout.place(
            id,
            Rect {
                x: entry.x,
                y: entry.y,
                width,
                height,
            },
        );
        info!(name = %entry.name, x = entry.x, y = entry.y, "output seeded");
    }

    state.seat.focused_output = state.registry.first();

    // Give the seat something to relocate: one demo view on the first output.
    if let Some(first) = state.seat.focused_output.connected() {
        views.map_view(ViewId(1), first);
        state.seat.focus_view(ViewId(1), first);
    }

    // ── Wire the dispatcher ───────────────────────────────────────────────────
    let arranger = Arc::new(LoggingArranger::new());
    let transactions = Arc::new(CountingTransactions::new());
    let backend = Arc::new(VirtualBackend::new());

    let dispatcher = CommandDispatcher::new(
        SeatCommands::new(
            Arc::clone(&arranger) as _,
            Arc::clone(&transactions) as _,
            Arc::clone(&views) as _,
        ),
        ModeNegotiator::new(backend as _),
    );

    info!(
        outputs = state.registry.len(),
        seat = state.seat.name(),
        "Prism ready.  Commands: focus-output, send-to-output, list-modes, set-mode, set-mode-custom.  Ctrl-C to exit."
    );

    // ── Command loop ──────────────────────────────────────────────────────────
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break; // stdin closed
                };
                let argv: Vec<&str> = line.split_whitespace().collect();
                if argv.is_empty() {
                    continue;
                }

                match dispatcher.dispatch(&mut state, &argv) {
                    Ok(Some(report)) => print!("{report}"),
                    Ok(None) => {}
                    Err(e) => println!("error: {e}"),
                }

                // Focus-stack stand-in: re-focus some view on the focused
                // output when a command cleared keyboard focus.
                if state.seat.focus == SeatFocus::None {
                    if let Some(current) = state.seat.focused_output.connected() {
                        if let Some(view) = views.views_on(current).first().copied() {
                            state.seat.focus_view(view, current);
                        }
                    }
                }
            }
        }
    }

    info!(
        transactions = transactions.started(),
        arrangements = arranger.requests().len(),
        "Prism compositor stopped"
    );
    Ok(())
}
