//! Grid-aware cursor movement.
//!
//! Rows differ in length and contain placeholder gaps, so a step is not
//! plain arithmetic: horizontal steps wrap between rows, vertical steps clamp
//! to the target row, and a landing on a placeholder snaps to the nearest key.
//! Nothing here looks at page contents.

use crate::layout::{Layout, is_placeholder};
use crate::{Error, Result};

/// Step magnitude that jumps to the first/last row or column instead.
pub const JUMP: i32 = 100;

/// How a landing on a placeholder is resolved within the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolve {
    /// Nearest key, looking in both directions.
    #[default]
    Nearest,
    /// Nearest key at or left of the landing column.
    LeftOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
    pub key: char,
}

impl Cursor {
    /// The first key of the layout.
    pub fn home(layout: &Layout) -> Self {
        Self::new(0, 0, ' ').moved(layout, -JUMP, -JUMP)
    }

    fn new(x: usize, y: usize, key: char) -> Self {
        Self { x, y, key }
    }

    /// Cursor on `key`, retrying with the case-inverted key.
    pub fn at_key(layout: &Layout, key: char) -> Result<Self> {
        let key = layout.resolve_key(key).ok_or(Error::KeyNotFound(key))?;
        let (x, y) = layout.key_position(key).ok_or(Error::KeyNotFound(key))?;
        Ok(Self::new(x, y, key))
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn moved(self, layout: &Layout, dx: i32, dy: i32) -> Self {
        // jumping to the end of a row should land on its last key, not beyond
        let resolve = if dx >= JUMP {
            Resolve::LeftOnly
        } else {
            Resolve::Nearest
        };
        self.moved_with(layout, dx, dy, resolve)
    }

    pub fn moved_with(self, layout: &Layout, dx: i32, dy: i32, resolve: Resolve) -> Self {
        let height = layout.height() as i64;
        let last_col = |y: i64| layout.row(y as usize).len() as i64 - 1;

        let mut y = if dy <= -JUMP {
            0
        } else if dy >= JUMP {
            height - 1
        } else {
            (self.y as i64 + dy as i64).clamp(0, height - 1)
        };
        // a jump searches inwards from the edge it snapped to
        let mut travel = if dy.abs() >= JUMP { -dy.signum() } else { dy.signum() };

        let mut x = self.x as i64;
        if dx <= -JUMP {
            x = 0;
        } else if dx >= JUMP {
            x = last_col(y);
        } else if dx != 0 {
            x += dx as i64;
            if travel == 0 {
                travel = dx.signum();
            }
            if x < 0 {
                if y > 0 {
                    y -= 1;
                    x = last_col(y);
                } else {
                    x = 0;
                }
            } else if x > last_col(y) {
                if y < height - 1 {
                    y += 1;
                    x = 0;
                } else {
                    x = last_col(y);
                }
            }
        } else {
            x = x.min(last_col(y));
        }

        let prefer_right = dx > 0 && dx < JUMP;
        let x = x.max(0) as usize;
        let y = y as usize;

        for row in rows_from(y, travel, layout.height()) {
            let found = if row == y {
                nearest_key(layout.row(row), x, resolve, prefer_right)
            } else {
                nearest_key(layout.row(row), x, Resolve::Nearest, prefer_right)
            };
            if let Some(col) = found {
                return Self::new(col, row, layout.row(row)[col]);
            }
        }

        // nothing reachable in the direction of travel
        self
    }
}

/// Row `start`, then the rows further along `travel`.
fn rows_from(start: usize, travel: i32, height: usize) -> Box<dyn Iterator<Item = usize>> {
    if travel < 0 {
        Box::new((0..=start).rev())
    } else {
        Box::new(start..height)
    }
}

/// Column of the key nearest to `x` in `row`, widening the search one column
/// at a time. Ties go left unless `prefer_right` is set.
fn nearest_key(row: &[char], x: usize, resolve: Resolve, prefer_right: bool) -> Option<usize> {
    if row.is_empty() {
        return None;
    }
    let x = x.min(row.len() - 1);
    let is_key = |col: usize| !is_placeholder(row[col]);

    for distance in 0..row.len() {
        let left = x.checked_sub(distance).filter(|&col| is_key(col));
        if resolve == Resolve::LeftOnly {
            if left.is_some() {
                return left;
            }
            continue;
        }
        let right = Some(x + distance).filter(|&col| col < row.len() && is_key(col));
        let (first, second) = if prefer_right {
            (right, left)
        } else {
            (left, right)
        };
        if let Some(col) = first.or(second) {
            return Some(col);
        }
    }
    None
}
