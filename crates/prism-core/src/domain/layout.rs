//! Spatial layout of outputs in the shared coordinate space.
//!
//! Every output occupies a rectangle in one global 2D space (the usual
//! multi-monitor arrangement). The [`ScreenMap`] answers the two geometric
//! questions the control plane needs: "what box does this output occupy?" and
//! "which output lies nearest in a given compass direction from a point?".
//!
//! How the boxes get their values (layout configuration, auto-arrangement) is
//! someone else's problem; this module only stores and queries them. An
//! output without a placement, or with a zero-sized one, has an empty box
//! and is invisible to spatial queries.

use std::str::FromStr;

use crate::domain::registry::OutputId;

/// A point in the shared layout space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A rectangle in the shared layout space.
///
/// `x`/`y` are the top-left corner; a zero width or height makes the
/// rectangle empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const EMPTY: Rect = Rect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Returns the rightmost X coordinate (exclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Returns the bottommost Y coordinate (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// A rectangle with zero width or height covers no area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Center point, rounded toward the top-left.
    pub fn center(&self) -> Point {
        Point {
            x: self.x + (self.width / 2) as i32,
            y: self.y + (self.height / 2) as i32,
        }
    }

    /// Returns `true` if this rectangle shares area with `other`.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Compass direction over the layout space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpatialDirection {
    Up,
    Down,
    Left,
    Right,
}

impl FromStr for SpatialDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(SpatialDirection::Up),
            "down" => Ok(SpatialDirection::Down),
            "left" => Ok(SpatialDirection::Left),
            "right" => Ok(SpatialDirection::Right),
            _ => Err(()),
        }
    }
}

/// Placement table: output → rectangle in the shared space.
///
/// Placements keep insertion order so that queries are deterministic when two
/// candidates score identically.
#[derive(Debug, Default)]
pub struct ScreenMap {
    placements: Vec<(OutputId, Rect)>,
}

impl ScreenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or replaces the placement of `output`.
    pub fn place(&mut self, output: OutputId, rect: Rect) {
        match self.placements.iter_mut().find(|(id, _)| *id == output) {
            Some((_, existing)) => *existing = rect,
            None => self.placements.push((output, rect)),
        }
    }

    /// Drops the placement of `output`, if any.
    pub fn remove(&mut self, output: OutputId) {
        self.placements.retain(|(id, _)| *id != output);
    }

    /// The bounding box of `output`, or [`Rect::EMPTY`] when it has none.
    ///
    /// The sentinel output never has a placement, so its box is always empty.
    pub fn bounding_box(&self, output: OutputId) -> Rect {
        self.placements
            .iter()
            .find(|(id, _)| *id == output)
            .map(|(_, rect)| *rect)
            .unwrap_or(Rect::EMPTY)
    }

    /// Finds the nearest output in compass direction `dir` from `point`.
    ///
    /// `from` is excluded from the search, as is every output with an empty
    /// box. A candidate must lie entirely beyond `point` along the direction
    /// axis. Candidates whose perpendicular extent overlaps `from`'s box are
    /// preferred over ones that would require a diagonal jump; remaining ties
    /// go to the smaller axis gap, then to placement order.
    pub fn adjacent_in_direction(
        &self,
        dir: SpatialDirection,
        from: OutputId,
        point: Point,
    ) -> Option<OutputId> {
        let from_box = self.bounding_box(from);

        let mut best: Option<(bool, i32, OutputId)> = None;
        for (id, rect) in &self.placements {
            if *id == from || rect.is_empty() {
                continue;
            }

            // Axis gap from the point to the candidate's near edge; negative
            // means the candidate is not in the requested direction.
            let gap = match dir {
                SpatialDirection::Right => rect.x - point.x,
                SpatialDirection::Left => point.x - rect.right(),
                SpatialDirection::Down => rect.y - point.y,
                SpatialDirection::Up => point.y - rect.bottom(),
            };
            if gap < 0 {
                continue;
            }

            let aligned = match dir {
                SpatialDirection::Left | SpatialDirection::Right => {
                    ranges_overlap(from_box.y, from_box.bottom(), rect.y, rect.bottom())
                }
                SpatialDirection::Up | SpatialDirection::Down => {
                    ranges_overlap(from_box.x, from_box.right(), rect.x, rect.right())
                }
            };

            // Sort key: aligned candidates first, then nearest. Strict
            // comparison keeps the earliest placement on exact ties.
            let key = (!aligned, gap);
            if best.map_or(true, |(b_misaligned, b_gap, _)| key < (b_misaligned, b_gap)) {
                best = Some((!aligned, gap, *id));
            }
        }

        best.map(|(_, _, id)| id)
    }
}

/// Returns `true` if the 1-D intervals `[a_start, a_end)` and
/// `[b_start, b_end)` overlap.
///
/// Used to decide whether a candidate output shares any perpendicular extent
/// with the box the search started from; touching at a single coordinate is
/// not overlap.
fn ranges_overlap(a_start: i32, a_end: i32, b_start: i32, b_end: i32) -> bool {
    a_start < b_end && b_start < a_end
}
