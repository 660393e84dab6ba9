//! The exposed command surface.
//!
//! A controlling client sends pre-tokenized commands; this module routes them
//! to the use cases. The contract is strict and checked in a fixed order:
//! exact argument count first, then numeric parsing, then resolution; a
//! command with the wrong arity never resolves or mutates anything.
//!
//! | command           | args | behavior                                    |
//! |-------------------|------|---------------------------------------------|
//! | `focus-output`    | 1    | move seat focus to the resolved output      |
//! | `send-to-output`  | 1    | move the focused view to the resolved output|
//! | `list-modes`      | 0    | report the focused output's mode list       |
//! | `set-mode`        | 1    | apply the advertised mode at an index       |
//! | `set-mode-custom` | 3    | apply caller-supplied width/height/refresh  |
//!
//! Mode commands act on the seat's currently focused output; while the
//! sentinel is focused they are silent no-ops like everything else.

use prism_core::{ensure_arg_count, CommandError};
use tracing::debug;

use crate::application::negotiate_mode::{list_modes, ModeNegotiator};
use crate::application::seat_commands::SeatCommands;
use crate::application::state::CompositorState;

/// Routes commands from the controlling surface to the use cases.
pub struct CommandDispatcher {
    seat_commands: SeatCommands,
    negotiator: ModeNegotiator,
}

impl CommandDispatcher {
    pub fn new(seat_commands: SeatCommands, negotiator: ModeNegotiator) -> Self {
        Self {
            seat_commands,
            negotiator,
        }
    }

    /// Executes one command.
    ///
    /// Returns `Ok(Some(text))` for commands that produce a report
    /// (`list-modes`), `Ok(None)` for commands that only mutate state,
    /// including every silent no-op case.
    ///
    /// # Errors
    ///
    /// All [`CommandError`] kinds propagate to the caller with no partial
    /// mutation; the caller shows them on the controlling surface.
    pub fn dispatch(
        &self,
        state: &mut CompositorState,
        argv: &[&str],
    ) -> Result<Option<String>, CommandError> {
        let Some((&name, args)) = argv.split_first() else {
            return Err(CommandError::NotEnoughArguments);
        };

        debug!(command = name, args = args.len(), "dispatch");

        match name {
            "focus-output" => {
                ensure_arg_count(args.len(), 1)?;
                self.seat_commands.focus_output(state, args[0])?;
                Ok(None)
            }
            "send-to-output" => {
                ensure_arg_count(args.len(), 1)?;
                self.seat_commands.send_to_output(state, args[0])?;
                Ok(None)
            }
            "list-modes" => {
                ensure_arg_count(args.len(), 0)?;
                match state.seat.focused_output.connected() {
                    Some(output) => Ok(Some(list_modes(&state.registry, output))),
                    None => Ok(None),
                }
            }
            "set-mode" => {
                ensure_arg_count(args.len(), 1)?;
                let index: usize = args[0].parse()?;
                let Some(output) = state.seat.focused_output.connected() else {
                    return Ok(None);
                };
                self.negotiator.set_mode(&mut state.registry, output, index)?;
                Ok(None)
            }
            "set-mode-custom" => {
                ensure_arg_count(args.len(), 3)?;
                let width: u32 = args[0].parse()?;
                let height: u32 = args[1].parse()?;
                let refresh_mhz: u32 = args[2].parse()?;
                let Some(output) = state.seat.focused_output.connected() else {
                    return Ok(None);
                };
                self.negotiator
                    .set_mode_custom(&mut state.registry, output, width, height, refresh_mhz)?;
                Ok(None)
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
