//! Nonogram Maker
//!
//! Draw nonogram (picture logic) puzzles on a grid of cells and save them to a
//! plain-text document that also carries the row and column clues.
//!
//! # Features
//!
//! - **Grid model**: a fixed-size boolean grid with checked cell access
//! - **Clue projection**: run-length clues for any row or column
//! - **Text documents**: lossless save/load of the grid, clues included for readers
//!
//! # Example
//!
//! ```
//! use nonogram_maker::NonogramModel;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut model = NonogramModel::new(2, 3)?;
//! model.set_cell(0, 0, true)?;
//! model.set_cell(0, 2, true)?;
//!
//! assert_eq!(model.project_row(0)?, vec![1, 1]);
//! assert_eq!(model.project_row(1)?, vec![0]);
//!
//! let text = model.serialize();
//! assert_eq!(NonogramModel::parse(&text)?, model);
//! # Ok(())
//! # }
//! ```

pub mod clues;
pub mod error;
pub mod model;
pub mod session;

pub use clues::{project, ClueLine, PuzzleClues};
pub use error::{Error, Result};
pub use model::NonogramModel;
pub use session::{CellBinding, Command, MenuAction, Persist, Reply, Session};

/// Startup configuration for an editing session
///
/// Mirrors the three startup parameters of the editor: the initial grid size
/// and the on-screen size of one cell.
///
/// # Examples
///
/// ```
/// let cfg = nonogram_maker::MakerConfig::default();
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MakerConfig {
    /// Initial number of rows
    pub rows: usize,
    /// Initial number of columns
    pub cols: usize,
    /// Size of one cell in pixels. The model never reads it; front ends do
    /// (the `show` command uses it as characters per cell).
    pub cell_size: u32,
}

impl Default for MakerConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            cell_size: 30,
        }
    }
}

impl MakerConfig {
    pub fn new(rows: usize, cols: usize, cell_size: u32) -> Self {
        Self {
            rows,
            cols,
            cell_size,
        }
    }

    /// Check the configuration before a session is built from it
    pub fn validate(&self) -> Result<()> {
        if self.rows < 1 || self.cols < 1 {
            return Err(Error::InvalidDimension(format!(
                "rows and columns must be at least 1 (got {}x{})",
                self.rows, self.cols
            )));
        }
        if self.cell_size < 1 {
            return Err(Error::InvalidConfig("cell size must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Create a session on an empty grid sized by `config`
pub fn new_session(config: MakerConfig) -> Result<Session> {
    Session::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MakerConfig::default();
        assert_eq!(config.rows, 10);
        assert_eq!(config.cols, 10);
        assert_eq!(config.cell_size, 30);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            MakerConfig::new(0, 5, 20).validate(),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            MakerConfig::new(5, 5, 0).validate(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_new_session() {
        let s = new_session(MakerConfig::new(3, 4, 16)).unwrap();
        assert_eq!(s.model().num_rows(), 3);
        assert_eq!(s.model().num_cols(), 4);
        assert_eq!(s.config().cell_size, 16);
    }
}
