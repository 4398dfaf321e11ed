//! An ordered sequence of grid cells with a movable cursor.

use roam_core::Point;

use crate::error::PathError;

/// A route through the grid: at least one cell, walked by a cursor.
///
/// The step sequence is immutable; only the cursor moves. The cursor
/// starts on the first cell and always references a contained element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Point>,
    cursor: usize,
}

impl Path {
    /// Create a path from an ordered cell sequence. Fails on an empty
    /// sequence.
    pub fn new(steps: Vec<Point>) -> Result<Self, PathError> {
        if steps.is_empty() {
            return Err(PathError::EmptyPath);
        }
        Ok(Self { steps, cursor: 0 })
    }

    /// The first cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.steps[0]
    }

    /// The last cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.steps[self.steps.len() - 1]
    }

    /// Number of cells, including both endpoints. Always at least 1.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// The cell the cursor is on.
    #[inline]
    pub fn current_step(&self) -> Point {
        self.steps[self.cursor]
    }

    /// Advance the cursor one cell and return the new current cell.
    /// Fails when the cursor is already on the last cell.
    pub fn step_forward(&mut self) -> Result<Point, PathError> {
        self.try_step_forward()
            .ok_or(PathError::ExhaustedCursor { forward: true })
    }

    /// Advance the cursor one cell, or `None` when already at the end.
    pub fn try_step_forward(&mut self) -> Option<Point> {
        if self.cursor + 1 >= self.steps.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.steps[self.cursor])
    }

    /// Move the cursor back one cell and return the new current cell.
    /// Fails when the cursor is already on the first cell.
    pub fn step_backward(&mut self) -> Result<Point, PathError> {
        self.try_step_backward()
            .ok_or(PathError::ExhaustedCursor { forward: false })
    }

    /// Move the cursor back one cell, or `None` when already at the
    /// start.
    pub fn try_step_backward(&mut self) -> Option<Point> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.steps[self.cursor])
    }

    /// Iterate over every cell from start to end, regardless of where the
    /// cursor currently is.
    pub fn steps(&self) -> impl Iterator<Item = Point> + '_ {
        self.steps.iter().copied()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.steps.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Path {
    /// Deserializes the step sequence; the cursor resets to the start.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let steps = Vec::<Point>::deserialize(deserializer)?;
        Path::new(steps).map_err(serde::de::Error::custom)
    }
}
