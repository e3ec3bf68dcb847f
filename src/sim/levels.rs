//! Level table
//!
//! Levels cycle modulo the table length, so play continues indefinitely
//! with the difficulty curve doing the work.

use std::path::Path;

use super::grid::Grid;
use crate::error::{ConfigError, LevelError};

const EMPTY: &str = "                            ";

/// Built-in level layouts (floor row is synthesized from row 0)
pub const BUILTIN_LEVELS: [[&str; Grid::AUTHORED_ROWS]; 3] = [
    [
        "XXXXX     XXXXXXXX     XXXXX",
        EMPTY,
        EMPTY,
        EMPTY,
        EMPTY,
        "   XXXXXXX        XXXXXXX   ",
        EMPTY,
        EMPTY,
        EMPTY,
        "   XXXXXXXXXXXXXXXXXXXXXX   ",
        EMPTY,
        EMPTY,
        EMPTY,
        "XXXXXXXXX          XXXXXXXXX",
        EMPTY,
        EMPTY,
        EMPTY,
    ],
    [
        "XXXX    XXXXXXXXXXXX    XXXX",
        EMPTY,
        EMPTY,
        EMPTY,
        EMPTY,
        "    XXXXXXXXXXXXXXXXXXXX    ",
        EMPTY,
        EMPTY,
        EMPTY,
        "XXXXXX                XXXXXX",
        "      X              X      ",
        "       X            X       ",
        "        X          X        ",
        "         X        X         ",
        EMPTY,
        EMPTY,
        EMPTY,
    ],
    [
        "XXXX    XXXX    XXXX    XXXX",
        EMPTY,
        EMPTY,
        EMPTY,
        EMPTY,
        "  XXXXXXXX        XXXXXXXX  ",
        EMPTY,
        EMPTY,
        EMPTY,
        "XXXX      XXXXXXXX      XXXX",
        EMPTY,
        EMPTY,
        EMPTY,
        "    XXXXXX        XXXXXX    ",
        EMPTY,
        EMPTY,
        EMPTY,
    ],
];

/// Validated, non-empty list of level grids
#[derive(Debug, Clone)]
pub struct LevelTable {
    grids: Vec<Grid>,
}

impl LevelTable {
    /// Wrap already-built grids; the table must not be empty
    pub fn from_grids(grids: Vec<Grid>) -> Result<Self, LevelError> {
        if grids.is_empty() {
            return Err(LevelError::EmptyTable);
        }
        Ok(Self { grids })
    }

    /// Validate every layout up front; any malformed level rejects the table
    pub fn from_layouts<S: AsRef<str>>(levels: &[Vec<S>]) -> Result<Self, LevelError> {
        let grids = levels
            .iter()
            .enumerate()
            .map(|(i, rows)| Grid::from_rows(i, rows.as_slice()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_grids(grids)
    }

    /// The levels shipped with the game
    pub fn builtin() -> Self {
        let grids = BUILTIN_LEVELS
            .iter()
            .enumerate()
            .map(|(i, rows)| Grid::from_rows(i, &rows[..]))
            .collect::<Result<Vec<_>, _>>()
            .expect("built-in levels are well formed");
        Self { grids }
    }

    /// Parse a JSON array of levels, each an array of row strings
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let levels: Vec<Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::from_layouts(&levels)?)
    }

    /// Load a JSON level file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json(&json)?;
        log::info!("Loaded {} levels from {}", table.len(), path.display());
        Ok(table)
    }

    /// Grid for a level index, cycling through the table
    pub fn grid_for(&self, level: u32) -> &Grid {
        &self.grids[level as usize % self.grids.len()]
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::builtin()
    }
}
