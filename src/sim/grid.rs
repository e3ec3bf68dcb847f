//! Tile grid and block lookup
//!
//! A grid is `NUM_ROWS` rows of `NUM_COLUMNS` tiles. Levels are authored
//! without the floor row; it is synthesized from the first row so ceiling
//! gaps line up with floor gaps and falling bodies wrap around.

use crate::consts::*;
use crate::error::LevelError;

/// Immutable tile grid for one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<bool>>,
}

impl Grid {
    /// Number of rows a level author supplies (floor row excluded)
    pub const AUTHORED_ROWS: usize = NUM_ROWS - 1;

    /// Build a grid from authored rows. `' '` is empty, anything else solid.
    ///
    /// `level` only labels errors.
    pub fn from_rows<S: AsRef<str>>(level: usize, rows: &[S]) -> Result<Self, LevelError> {
        if rows.len() != Self::AUTHORED_ROWS {
            return Err(LevelError::RowCount {
                level,
                expected: Self::AUTHORED_ROWS,
                found: rows.len(),
            });
        }

        let mut parsed = Vec::with_capacity(NUM_ROWS);
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let width = text.chars().count();
            if width != NUM_COLUMNS {
                return Err(LevelError::RowWidth {
                    level,
                    row,
                    expected: NUM_COLUMNS,
                    found: width,
                });
            }
            parsed.push(text.chars().map(|c| c != ' ').collect::<Vec<_>>());
        }
        let floor = parsed[0].clone();
        parsed.push(floor);

        Ok(Self { rows: parsed })
    }

    /// Is the tile at `(row, col)` solid (false when out of range)
    pub fn is_solid(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Iterate `(row, col)` of every solid tile
    pub fn solid_tiles(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, solid)| **solid)
                .map(move |(col, _)| (row, col))
        })
    }

    /// Columns whose top row is open (robots drop in through these)
    pub fn open_top_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..NUM_COLUMNS).filter(|&col| !self.is_solid(0, col))
    }
}

/// Is there a solid block at world coordinates `(x, y)`
///
/// Row 0 is never solid so robots can fall in from above the screen.
pub fn block_at(grid: &Grid, x: i32, y: i32) -> bool {
    let col = (x - LEVEL_X_OFFSET).div_euclid(TILE_SIZE);
    let row = y.div_euclid(TILE_SIZE);
    if row <= 0 || row >= NUM_ROWS as i32 {
        return false;
    }
    if col < 0 || col >= NUM_COLUMNS as i32 {
        return false;
    }
    grid.is_solid(row as usize, col as usize)
}
