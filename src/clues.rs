//! Run-length clue projection
//!
//! A row or column of cells is projected onto the classic nonogram clue: the
//! lengths of its maximal runs of filled cells, in order. A line without any
//! filled cell projects to `[0]`, never to an empty list.

use serde::Serialize;
use std::fmt;

/// Project a line of cells onto its clue sequence.
///
/// ```
/// use nonogram_maker::clues::project;
///
/// assert_eq!(project(&[true, true, false, true]), vec![2, 1]);
/// assert_eq!(project(&[false, false]), vec![0]);
/// ```
pub fn project(cells: &[bool]) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut current = 0usize;
    for &filled in cells {
        if filled {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }
    if runs.is_empty() {
        runs.push(0);
    }
    runs
}

/// Borrowed view of a clue sequence that renders as space-separated integers
/// (`"3 1 2"`), the form used by the puzzle document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClueLine<'a>(pub &'a [usize]);

impl fmt::Display for ClueLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

/// Row and column clues of a whole puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleClues {
    /// One clue sequence per row, top to bottom
    pub rows: Vec<Vec<usize>>,
    /// One clue sequence per column, left to right
    pub cols: Vec<Vec<usize>>,
}

impl PuzzleClues {
    /// Total number of filled cells implied by the row clues
    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().sum()
    }
}

impl fmt::Display for PuzzleClues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows:")?;
        for (i, clue) in self.rows.iter().enumerate() {
            writeln!(f, "  {:>3}: {}", i, ClueLine(clue))?;
        }
        writeln!(f, "cols:")?;
        for (i, clue) in self.cols.iter().enumerate() {
            writeln!(f, "  {:>3}: {}", i, ClueLine(clue))?;
        }
        Ok(())
    }
}
