//! Output resolution: maps a user-supplied token to a concrete output.
//!
//! The token grammar is tried in a fixed priority order:
//!
//! 1. Logical direction (`next` / `previous`): cyclic registry order with
//!    wraparound at both ends.
//! 2. Spatial direction (`left` / `right` / `up` / `down`): nearest output
//!    in that compass direction from the center of the current output's box.
//! 3. Exact output name (`DP-1`).
//!
//! A token that matches none of the three is an
//! [`CommandError::InvalidOutputIndicator`]. Spatial lookups that find
//! nothing (or start from an output with an empty box) are *not* errors: they
//! resolve to `None` and the calling command becomes a silent no-op.

use prism_core::{CommandError, Direction, OutputId, OutputRegistry, ScreenMap, SpatialDirection};

/// Resolves `token` to an output, relative to `current`.
///
/// Returns `Ok(Some(id))` on a match, `Ok(None)` when the token was
/// understood but nothing lies that way, and an error when the token is not
/// an output indicator at all.
///
/// `current` must be a live output; callers handle the sentinel before
/// resolving (there is nothing to be "next of" with zero outputs). A stale
/// `current` resolves to `None` rather than panicking, mirroring the
/// registry's own tolerance of dead handles.
pub fn resolve_output(
    registry: &OutputRegistry,
    layout: &ScreenMap,
    current: OutputId,
    token: &str,
) -> Result<Option<OutputId>, CommandError> {
    if let Ok(direction) = token.parse::<Direction>() {
        let target = match direction {
            Direction::Next => registry.next_after(current),
            Direction::Previous => registry.prev_before(current),
        };
        return Ok(target);
    }

    if let Ok(direction) = token.parse::<SpatialDirection>() {
        let own_box = layout.bounding_box(current);
        if own_box.is_empty() {
            // No geometry to search from; the command no-ops.
            return Ok(None);
        }
        return Ok(layout.adjacent_in_direction(direction, current, own_box.center()));
    }

    match registry.find_by_name(token) {
        Some(id) => Ok(Some(id)),
        None => Err(CommandError::InvalidOutputIndicator(token.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Mode, Output, Rect};

    /// Three outputs in registry order A, B, C, placed left to right.
    fn three_in_a_row() -> (OutputRegistry, ScreenMap, Vec<OutputId>) {
        let mut registry = OutputRegistry::new();
        let mut layout = ScreenMap::new();
        let ids: Vec<OutputId> = ["A", "B", "C"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let id = registry.insert(Output::with_modes(
                    *name,
                    vec![Mode::new(1920, 1080, 60_000)],
                ));
                layout.place(
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
        (registry, layout, ids)
    }

    // ── Logical directions ────────────────────────────────────────────────────

    #[test]
    fn test_next_resolves_to_following_output() {
        let (registry, layout, ids) = three_in_a_row();
        let hit = resolve_output(&registry, &layout, ids[1], "next").unwrap();
        assert_eq!(hit, Some(ids[2]));
    }

    #[test]
    fn test_next_wraps_from_last_to_first() {
        let (registry, layout, ids) = three_in_a_row();
        let hit = resolve_output(&registry, &layout, ids[2], "next").unwrap();
        assert_eq!(hit, Some(ids[0]));
    }

    #[test]
    fn test_previous_wraps_from_first_to_last() {
        let (registry, layout, ids) = three_in_a_row();
        let hit = resolve_output(&registry, &layout, ids[0], "previous").unwrap();
        assert_eq!(hit, Some(ids[2]));
    }

    #[test]
    fn test_next_then_previous_returns_to_start() {
        let (registry, layout, ids) = three_in_a_row();
        for start in ids {
            let there = resolve_output(&registry, &layout, start, "next")
                .unwrap()
                .unwrap();
            let back = resolve_output(&registry, &layout, there, "previous")
                .unwrap()
                .unwrap();
            assert_eq!(back, start, "next/previous must be cyclic inverses");
        }
    }

    #[test]
    fn test_single_output_next_and_previous_resolve_to_itself() {
        let mut registry = OutputRegistry::new();
        let layout = ScreenMap::new();
        let only = registry.insert(Output::new("only"));

        assert_eq!(
            resolve_output(&registry, &layout, only, "next").unwrap(),
            Some(only)
        );
        assert_eq!(
            resolve_output(&registry, &layout, only, "previous").unwrap(),
            Some(only)
        );
    }

    // ── Spatial directions ────────────────────────────────────────────────────

    #[test]
    fn test_spatial_right_resolves_to_adjacent_output() {
        let (registry, layout, ids) = three_in_a_row();
        let hit = resolve_output(&registry, &layout, ids[0], "right").unwrap();
        assert_eq!(hit, Some(ids[1]));
    }

    #[test]
    fn test_spatial_miss_is_silent_none_not_error() {
        let (registry, layout, ids) = three_in_a_row();
        // Nothing lies left of the leftmost output.
        let hit = resolve_output(&registry, &layout, ids[0], "left").unwrap();
        assert_eq!(hit, None);
    }

    #[test]
    fn test_spatial_from_empty_box_is_silent_none() {
        // Arrange: the current output has no placement at all.
        let mut registry = OutputRegistry::new();
        let mut layout = ScreenMap::new();
        let unplaced = registry.insert(Output::new("floating"));
        let placed = registry.insert(Output::new("placed"));
        layout.place(
            placed,
            Rect {
                x: 0,
                y: 0,
                width: 1920,
                height: 1080,
            },
        );

        // Act / Assert – understood token, but no geometry to search from.
        let hit = resolve_output(&registry, &layout, unplaced, "right").unwrap();
        assert_eq!(hit, None);
    }

    // ── Name resolution ───────────────────────────────────────────────────────

    #[test]
    fn test_exact_name_resolves() {
        let (registry, layout, ids) = three_in_a_row();
        let hit = resolve_output(&registry, &layout, ids[0], "C").unwrap();
        assert_eq!(hit, Some(ids[2]));
    }

    #[test]
    fn test_unmatched_token_is_invalid_output_indicator() {
        let (registry, layout, ids) = three_in_a_row();
        let err = resolve_output(&registry, &layout, ids[0], "DP-404").unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidOutputIndicator("DP-404".to_string())
        );
    }

    #[test]
    fn test_name_matching_is_case_sensitive() {
        let (registry, layout, ids) = three_in_a_row();
        let err = resolve_output(&registry, &layout, ids[0], "a").unwrap_err();
        assert!(matches!(err, CommandError::InvalidOutputIndicator(_)));
    }

    // ── Priority order ────────────────────────────────────────────────────────

    #[test]
    fn test_direction_token_shadows_output_named_like_a_direction() {
        // Arrange: an output unfortunately named "left". The token "left"
        // must still be treated as a spatial direction, never a name.
        let mut registry = OutputRegistry::new();
        let mut layout = ScreenMap::new();
        let a = registry.insert(Output::new("A"));
        let trap = registry.insert(Output::new("left"));
        layout.place(
            a,
            Rect {
                x: 0,
                y: 0,
                width: 1920,
                height: 1080,
            },
        );
        layout.place(
            trap,
            Rect {
                x: 1920,
                y: 0,
                width: 1920,
                height: 1080,
            },
        );

        // Act – nothing lies to the left of A, so spatial resolution misses.
        let hit = resolve_output(&registry, &layout, a, "left").unwrap();

        // Assert – silent miss, not a name match on the "left" output.
        assert_eq!(hit, None);
    }
}
