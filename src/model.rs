//! The nonogram grid model and its text document format.
//!
//! A document looks like this for a 2x3 grid:
//!
//! ```text
//! 2 3
//! 1 1
//! 0
//! 1
//! 0
//! 1
//! 101
//! 000
//! ```
//!
//! The header holds `rows cols`, followed by one clue line per row, one clue
//! line per column and finally one line of `1`/`0` characters per row. Clue
//! lines are derived data: they are written for human readers and skipped
//! when a document is parsed.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};
use sha2::{Digest, Sha256};

use crate::clues::{project, ClueLine, PuzzleClues};
use crate::{Error, Result};

const FILLED_CELL_CHAR: char = '1';
const EMPTY_CELL_CHAR: char = '0';

/// A rectangular grid of filled/empty cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonogramModel {
    cells: Vec<bool>,
    num_rows: usize,
    num_cols: usize,
}

impl NonogramModel {
    /// Create an empty grid. Both dimensions must be at least 1.
    pub fn new(num_rows: usize, num_cols: usize) -> Result<Self> {
        let len = checked_cell_count(num_rows, num_cols)?;
        Ok(Self {
            cells: vec![false; len],
            num_rows,
            num_cols,
        })
    }

    /// Parse a puzzle document.
    ///
    /// The header must be exactly two space-separated integers, each at least
    /// 1. Clue lines are skipped without being checked. In the data lines only
    /// the first `num_cols` characters are read; `'1'` is a filled cell and
    /// any other character is empty.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let header = lines
            .next()
            .ok_or_else(|| Error::InvalidDimension("missing header line".to_string()))?;
        let (num_rows, num_cols) = parse_header(header)?;
        checked_cell_count(num_rows, num_cols)?;

        let mut line_no = 1;
        for _ in 0..num_rows + num_cols {
            line_no += 1;
            lines
                .next()
                .ok_or(Error::UnexpectedEndOfInput { line: line_no })?;
        }

        // Cells are only pushed once their characters have been read, so the
        // allocation never outgrows the input.
        let mut cells = Vec::new();
        for _ in 0..num_rows {
            line_no += 1;
            let line = lines
                .next()
                .ok_or(Error::UnexpectedEndOfInput { line: line_no })?;
            let mut chars = line.chars();
            for _ in 0..num_cols {
                let ch = chars
                    .next()
                    .ok_or(Error::UnexpectedEndOfInput { line: line_no })?;
                cells.push(ch == FILLED_CELL_CHAR);
            }
        }

        debug!("parsed {}x{} puzzle ({} lines)", num_rows, num_cols, line_no);
        Ok(Self {
            cells,
            num_rows,
            num_cols,
        })
    }

    /// Read and parse a puzzle document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::StorageError(format!("{}: {}", path.display(), e)))?;
        let model = Self::parse(&text)?;
        info!(
            "loaded {}x{} puzzle from {}",
            model.num_rows,
            model.num_cols,
            path.display()
        );
        Ok(model)
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Owned copy of all cells in row-major order.
    pub fn grid(&self) -> Vec<bool> {
        self.cells.clone()
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.offset(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Number of filled cells in the whole grid
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Clue sequence of row `row`
    pub fn project_row(&self, row: usize) -> Result<Vec<usize>> {
        if row >= self.num_rows {
            return Err(self.out_of_range(row, 0));
        }
        Ok(project(self.row_slice(row)))
    }

    /// Clue sequence of column `col`, read top to bottom
    pub fn project_col(&self, col: usize) -> Result<Vec<usize>> {
        if col >= self.num_cols {
            return Err(self.out_of_range(0, col));
        }
        Ok(project(&self.column(col)))
    }

    /// Clues for every row and column
    pub fn clues(&self) -> PuzzleClues {
        PuzzleClues {
            rows: (0..self.num_rows)
                .map(|r| project(self.row_slice(r)))
                .collect(),
            cols: (0..self.num_cols)
                .map(|c| project(&self.column(c)))
                .collect(),
        }
    }

    /// Render the puzzle document. Lines are separated by `\n` and the last
    /// line has no terminator.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Write the puzzle document to `path`, replacing any existing file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.serialize())
            .map_err(|e| Error::StorageError(format!("{}: {}", path.display(), e)))?;
        info!(
            "saved {}x{} puzzle to {}",
            self.num_rows,
            self.num_cols,
            path.display()
        );
        Ok(())
    }

    /// Hex SHA-256 of the serialized document
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.serialize().as_bytes());
        hex::encode(hasher.finalize())
    }

    fn row_slice(&self, row: usize) -> &[bool] {
        let start = row * self.num_cols;
        &self.cells[start..start + self.num_cols]
    }

    fn column(&self, col: usize) -> Vec<bool> {
        (0..self.num_rows)
            .map(|row| self.cells[row * self.num_cols + col])
            .collect()
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.num_rows || col >= self.num_cols {
            return Err(self.out_of_range(row, col));
        }
        Ok(row * self.num_cols + col)
    }

    fn out_of_range(&self, row: usize, col: usize) -> Error {
        Error::IndexOutOfRange {
            row,
            col,
            rows: self.num_rows,
            cols: self.num_cols,
        }
    }
}

impl fmt::Display for NonogramModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clues = self.clues();
        write!(f, "{} {}", self.num_rows, self.num_cols)?;
        for clue in clues.rows.iter().chain(clues.cols.iter()) {
            write!(f, "\n{}", ClueLine(clue))?;
        }
        for row in 0..self.num_rows {
            f.write_str("\n")?;
            for &filled in self.row_slice(row) {
                let ch = if filled { FILLED_CELL_CHAR } else { EMPTY_CELL_CHAR };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

impl FromStr for NonogramModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    // Trailing separators are tolerated, leading and doubled ones are not.
    let tokens: Vec<&str> = line.trim_end_matches(' ').split(' ').collect();
    if tokens.len() != 2 {
        return Err(Error::InvalidDimension(format!(
            "header must be `rows cols`, got {:?}",
            line
        )));
    }
    let parse = |tok: &str| {
        tok.parse::<usize>().map_err(|_| {
            Error::InvalidDimension(format!("{:?} is not a valid dimension", tok))
        })
    };
    Ok((parse(tokens[0])?, parse(tokens[1])?))
}

fn checked_cell_count(num_rows: usize, num_cols: usize) -> Result<usize> {
    if num_rows < 1 || num_cols < 1 {
        return Err(Error::InvalidDimension(format!(
            "rows and columns must be at least 1 (got {}x{})",
            num_rows, num_cols
        )));
    }
    let too_large =
        || Error::InvalidDimension(format!("{}x{} grid is too large", num_rows, num_cols));
    // The clue section holds rows + cols lines.
    num_rows.checked_add(num_cols).ok_or_else(too_large)?;
    num_rows.checked_mul(num_cols).ok_or_else(too_large)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NonogramModel {
        let mut m = NonogramModel::new(2, 3).unwrap();
        m.set_cell(0, 0, true).unwrap();
        m.set_cell(0, 2, true).unwrap();
        m
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(NonogramModel::new(0, 3), Err(Error::InvalidDimension(_))));
        assert!(matches!(NonogramModel::new(3, 0), Err(Error::InvalidDimension(_))));
        assert!(matches!(
            NonogramModel::new(usize::MAX, 2),
            Err(Error::InvalidDimension(_))
        ));
    }

    #[test]
    fn new_grid_is_empty() {
        let m = NonogramModel::new(4, 5).unwrap();
        assert_eq!(m.num_rows(), 4);
        assert_eq!(m.num_cols(), 5);
        assert_eq!(m.grid(), vec![false; 20]);
    }

    #[test]
    fn set_cell_touches_only_target() {
        let mut m = NonogramModel::new(3, 3).unwrap();
        m.set_cell(1, 2, true).unwrap();
        assert!(m.get_cell(1, 2).unwrap());
        let filled: Vec<usize> = m
            .grid()
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(filled, vec![5]);
    }

    #[test]
    fn cell_access_out_of_range() {
        let mut m = NonogramModel::new(2, 3).unwrap();
        assert!(matches!(
            m.get_cell(2, 0),
            Err(Error::IndexOutOfRange { row: 2, col: 0, rows: 2, cols: 3 })
        ));
        assert!(matches!(m.set_cell(0, 3, true), Err(Error::IndexOutOfRange { .. })));
        assert!(matches!(m.project_row(2), Err(Error::IndexOutOfRange { .. })));
        assert!(matches!(m.project_col(3), Err(Error::IndexOutOfRange { .. })));
    }

    #[test]
    fn grid_is_a_copy() {
        let m = sample();
        let mut g = m.grid();
        g[1] = true;
        assert!(!m.get_cell(0, 1).unwrap());
    }

    #[test]
    fn projections_of_sample() {
        let m = sample();
        assert_eq!(m.project_row(0).unwrap(), vec![1, 1]);
        assert_eq!(m.project_row(1).unwrap(), vec![0]);
        assert_eq!(m.project_col(0).unwrap(), vec![1]);
        assert_eq!(m.project_col(1).unwrap(), vec![0]);
        assert_eq!(m.project_col(2).unwrap(), vec![1]);
    }

    #[test]
    fn serialize_sample() {
        let text = sample().serialize();
        assert_eq!(text, "2 3\n1 1\n0\n1\n0\n1\n101\n000");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn parse_ignores_clue_lines() {
        let text = "2 3\ngarbage\n\nx\ny\nz\n101\n000\n";
        let m = NonogramModel::parse(text).unwrap();
        assert_eq!(m, sample());
    }

    #[test]
    fn parse_reads_only_leading_chars() {
        let text = "1 2\n0\n0\n0\n1x999";
        let m = NonogramModel::parse(text).unwrap();
        assert_eq!(m.grid(), vec![true, false]);
    }

    #[test]
    fn parse_malformed_header() {
        for text in ["", "3", "3 4 5", "3  4", " 3 4", "a b", "-1 3", "0 3\n", "3 0\n"] {
            assert!(
                matches!(NonogramModel::parse(text), Err(Error::InvalidDimension(_))),
                "header {:?}",
                text
            );
        }
    }

    #[test]
    fn parse_huge_header_is_invalid_dimension() {
        let text = format!("{} 1\n0\n0\n0", usize::MAX);
        assert!(matches!(
            NonogramModel::parse(&text),
            Err(Error::InvalidDimension(_))
        ));
        let text = format!("1 {}\n0\n0\n0", usize::MAX);
        assert!(matches!(
            NonogramModel::parse(&text),
            Err(Error::InvalidDimension(_))
        ));
    }

    #[test]
    fn parse_accepts_trailing_header_spaces() {
        let m = NonogramModel::parse("1 1 \n1\n1\n1").unwrap();
        assert_eq!(m.num_rows(), 1);
        assert_eq!(m.num_cols(), 1);
        assert!(m.get_cell(0, 0).unwrap());
    }

    #[test]
    fn parse_truncated_clues() {
        let text = "3 4\n1\n1\n1\n1\n1\n0000\n0000\n0000";
        assert!(matches!(
            NonogramModel::parse(text),
            Err(Error::UnexpectedEndOfInput { .. })
        ));
    }

    #[test]
    fn parse_short_data_line() {
        let text = "2 3\n0\n0\n0\n0\n0\n000\n00";
        assert!(matches!(
            NonogramModel::parse(text),
            Err(Error::UnexpectedEndOfInput { line: 8 })
        ));
    }

    #[test]
    fn parse_missing_data_line() {
        let text = "2 3\n0\n0\n0\n0\n0\n000";
        assert!(matches!(
            NonogramModel::parse(text),
            Err(Error::UnexpectedEndOfInput { line: 8 })
        ));
    }

    #[test]
    fn parse_accepts_crlf() {
        let text = "2 3\r\n1 1\r\n0\r\n1\r\n0\r\n1\r\n101\r\n000\r\n";
        assert_eq!(text.parse::<NonogramModel>().unwrap(), sample());
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = sample();
        let mut b = sample();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
        b.set_cell(1, 1, true).unwrap();
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
