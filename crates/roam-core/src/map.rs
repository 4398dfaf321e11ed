//! The walkability-grid abstraction consumed by the search algorithms.
//!
//! [`GridMap`] is the minimal capability set a map must offer: extents, a
//! per-cell walkability predicate, the row-major cell/index bijection, and
//! neighbor enumeration. [`WalkMap`] is a concrete implementation backed by
//! a boolean grid, parseable from ASCII art.

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;

/// A rectangular grid with per-cell walkability.
///
/// Cells are addressed by [`Point`] with `(0, 0)` in the top-left corner
/// and identified interchangeably by their row-major index
/// `y * width + x`.
pub trait GridMap {
    /// Grid width in cells.
    fn width(&self) -> i32;

    /// Grid height in cells.
    fn height(&self) -> i32;

    /// Whether the cell at `p` can be entered. Out-of-bounds points are
    /// never walkable.
    fn is_walkable(&self, p: Point) -> bool;

    /// Whether `p` lies inside the grid.
    #[inline]
    fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width() && p.y >= 0 && p.y < self.height()
    }

    /// Total number of cells.
    #[inline]
    fn cell_count(&self) -> usize {
        (self.width() as usize) * (self.height() as usize)
    }

    /// Row-major index of `p`. Only meaningful for in-bounds points.
    #[inline]
    fn index_for(&self, p: Point) -> usize {
        (p.y * self.width() + p.x) as usize
    }

    /// Inverse of [`index_for`](Self::index_for).
    #[inline]
    fn point_for(&self, index: usize) -> Point {
        let w = self.width() as usize;
        Point::new((index % w) as i32, (index / w) as i32)
    }

    /// Append the in-bounds neighbors of `p` to `buf` — the 4 cardinal
    /// ones, or all 8 when `diagonals` is true. The caller clears `buf`.
    fn adjacent(&self, p: Point, diagonals: bool, buf: &mut Vec<Point>) {
        if diagonals {
            for n in p.neighbors_8() {
                if self.contains(n) {
                    buf.push(n);
                }
            }
        } else {
            for n in p.neighbors_4() {
                if self.contains(n) {
                    buf.push(n);
                }
            }
        }
    }
}

/// A walkability grid backed by a boolean buffer.
///
/// Freshly constructed maps are entirely unwalkable; carve floor with
/// [`set_walkable`](Self::set_walkable) or build from ASCII art via
/// [`parse`](Self::parse), where `#` is wall and `.` is floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkMap {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl WalkMap {
    /// Create a new map with every cell unwalkable.
    pub fn new(width: i32, height: i32) -> Self {
        let (w, h) = (width.max(0), height.max(0));
        Self {
            width: w,
            height: h,
            cells: vec![false; (w * h) as usize],
        }
    }

    /// Create a new map with walkability decided per cell by `f`.
    pub fn walkable_from(width: i32, height: i32, mut f: impl FnMut(Point) -> bool) -> Self {
        let mut map = Self::new(width, height);
        for i in 0..map.cells.len() {
            map.cells[i] = f(map.point_for(i));
        }
        map
    }

    /// Parse a map from ASCII art: `#` is wall, `.` is floor.
    ///
    /// Lines are separated by `'\n'` and must all have the same width.
    /// Leading/trailing whitespace is trimmed from the whole string but
    /// not from individual lines.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        let mut cells = Vec::with_capacity(s.len());
        let mut x: i32 = 0;
        let mut y: i32 = 0;
        let mut w: i32 = -1;

        for ch in s.chars() {
            match ch {
                '\n' => {
                    if w >= 0 && x != w {
                        return Err(MapError::InconsistentWidth(s.to_string()));
                    }
                    w = x;
                    x = 0;
                    y += 1;
                }
                '#' => {
                    cells.push(false);
                    x += 1;
                }
                '.' => {
                    cells.push(true);
                    x += 1;
                }
                _ => {
                    return Err(MapError::InvalidGlyph {
                        ch,
                        pos: Point::new(x, y),
                    });
                }
            }
        }
        if w >= 0 && x != w {
            return Err(MapError::InconsistentWidth(s.to_string()));
        }
        let width = if w >= 0 { w } else { x };
        let height = if cells.is_empty() { 0 } else { y + 1 };

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Set the walkability of the cell at `p`. Does nothing if out of
    /// bounds.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) {
        if !self.contains(p) {
            return;
        }
        let i = self.index_for(p);
        self.cells[i] = walkable;
    }
}

impl GridMap for WalkMap {
    #[inline]
    fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        self.contains(p) && self.cells[self.index_for(p)]
    }
}

impl FromStr for WalkMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, MapError> {
        Self::parse(s)
    }
}

impl fmt::Display for WalkMap {
    /// Render back to the ASCII form accepted by [`WalkMap::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..self.width {
                let i = self.index_for(Point::new(x, y));
                f.write_str(if self.cells[i] { "." } else { "#" })?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WalkMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WalkMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        WalkMap::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing a map from ASCII art.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Lines have inconsistent widths.
    InconsistentWidth(String),
    /// A character other than `#`, `.` or newline was found.
    InvalidGlyph { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth(s) => write!(f, "map has inconsistent line widths:\n{s}"),
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "map contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
#####
#...#
#.#.#
#####";

    #[test]
    fn parse_and_extents() {
        let map = WalkMap::parse(ROOM).unwrap();
        assert_eq!(map.width(), 5);
        assert_eq!(map.height(), 4);
        assert_eq!(map.cell_count(), 20);
    }

    #[test]
    fn parse_walkability() {
        let map = WalkMap::parse(ROOM).unwrap();
        assert!(!map.is_walkable(Point::new(0, 0)));
        assert!(map.is_walkable(Point::new(1, 1)));
        assert!(!map.is_walkable(Point::new(2, 2)));
        assert!(map.is_walkable(Point::new(3, 2)));
        // Out of bounds is never walkable.
        assert!(!map.is_walkable(Point::new(-1, 0)));
        assert!(!map.is_walkable(Point::new(5, 1)));
    }

    #[test]
    fn parse_rejects_inconsistent_widths() {
        assert!(matches!(
            WalkMap::parse("###\n##"),
            Err(MapError::InconsistentWidth(_))
        ));
    }

    #[test]
    fn parse_rejects_invalid_glyph() {
        let err = WalkMap::parse("##\n#@").unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidGlyph {
                ch: '@',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn display_round_trips() {
        let map = WalkMap::parse(ROOM).unwrap();
        assert_eq!(map.to_string(), ROOM);
        assert_eq!(WalkMap::parse(&map.to_string()).unwrap(), map);
    }

    #[test]
    fn from_str_works() {
        let map: WalkMap = ROOM.parse().unwrap();
        assert_eq!(map.width(), 5);
    }

    #[test]
    fn index_bijection_on_non_square_map() {
        let map = WalkMap::new(7, 3);
        for i in 0..map.cell_count() {
            let p = map.point_for(i);
            assert!(map.contains(p));
            assert_eq!(map.index_for(p), i);
        }
        assert_eq!(map.index_for(Point::new(3, 2)), 17);
    }

    #[test]
    fn set_walkable() {
        let mut map = WalkMap::new(3, 3);
        assert!(!map.is_walkable(Point::new(1, 1)));
        map.set_walkable(Point::new(1, 1), true);
        assert!(map.is_walkable(Point::new(1, 1)));
        // Out of bounds is ignored.
        map.set_walkable(Point::new(9, 9), true);
        assert!(!map.is_walkable(Point::new(9, 9)));
    }

    #[test]
    fn walkable_from_predicate() {
        let map = WalkMap::walkable_from(4, 4, |p| p.x == p.y);
        assert!(map.is_walkable(Point::new(2, 2)));
        assert!(!map.is_walkable(Point::new(1, 2)));
    }

    #[test]
    fn adjacent_cardinal_filters_bounds() {
        let map = WalkMap::new(3, 3);
        let mut buf = Vec::new();
        map.adjacent(Point::new(0, 0), false, &mut buf);
        assert_eq!(buf.len(), 2);
        assert!(buf.contains(&Point::new(1, 0)));
        assert!(buf.contains(&Point::new(0, 1)));
    }

    #[test]
    fn adjacent_with_diagonals() {
        let map = WalkMap::new(3, 3);
        let mut buf = Vec::new();
        map.adjacent(Point::new(1, 1), true, &mut buf);
        assert_eq!(buf.len(), 8);

        buf.clear();
        map.adjacent(Point::new(0, 0), true, &mut buf);
        assert_eq!(buf.len(), 3);
        assert!(buf.contains(&Point::new(1, 1)));
    }
}
