//! Grid layouts: symbols placed at integer `(column, row)` coordinates.
//!
//! A layout is pure data. Cells are stored row-major; a cell is either empty or holds
//! exactly one [`Symbol`], and no symbol appears twice.

use std::collections::HashMap;
use std::fmt;

use crate::error::LayoutError;

/// One token of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol(pub char);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol(c)
    }
}

/// Marks an empty cell in textual layouts.
pub const EMPTY_CELL: char = '.';

/// The keypad, one string per row, top to bottom.
pub const KEYPAD_ROWS: [&str; 4] = ["abcde", "fghij", "klmno", ".123."];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    width: usize,
    height: usize,
    cells: Vec<Option<Symbol>>,
}

impl GridLayout {
    /// Build a layout from rows of cells, top row first.
    pub fn from_rows(rows: Vec<Vec<Option<Symbol>>>) -> Result<Self, LayoutError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut seen: HashMap<Symbol, (usize, usize)> = HashMap::new();
        let mut cells = Vec::with_capacity(width * height);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(LayoutError::RaggedRow { row, expected: width, found: cols.len() });
            }
            for (column, cell) in cols.into_iter().enumerate() {
                if let Some(symbol) = cell {
                    if let Some(&(first_column, first_row)) = seen.get(&symbol) {
                        return Err(LayoutError::DuplicateSymbol {
                            symbol,
                            first_column,
                            first_row,
                            column,
                            row,
                        });
                    }
                    seen.insert(symbol, (column, row));
                }
                cells.push(cell);
            }
        }
        Ok(Self { width, height, cells })
    }

    /// Parse a layout from text: one row per line, one cell per character,
    /// [`EMPTY_CELL`] for an empty cell.
    ///
    /// Blank lines and lines starting with `#` are ignored; surrounding whitespace is
    /// trimmed.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<Vec<Option<Symbol>>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| {
                line.chars().map(|c| if c == EMPTY_CELL { None } else { Some(Symbol(c)) }).collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// The knight-keypad layout: `a..o` on three full rows, `1 2 3` on the bottom row
    /// with both bottom corners empty.
    pub fn keypad() -> Self {
        // The constant is well-formed; a failure here is a bug in `KEYPAD_ROWS`.
        match Self::parse(&KEYPAD_ROWS.join("\n")) {
            Ok(layout) => layout,
            Err(e) => unreachable!("keypad layout is malformed: {e}"),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The symbol at `(column, row)`, or `None` if the cell is empty or out of bounds.
    pub fn get(&self, column: usize, row: usize) -> Option<Symbol> {
        if column >= self.width || row >= self.height {
            return None;
        }
        self.cells[row * self.width + column]
    }

    /// Like [`get`](Self::get), for signed coordinates produced by applying an offset.
    pub fn get_signed(&self, column: isize, row: isize) -> Option<Symbol> {
        let column = usize::try_from(column).ok()?;
        let row = usize::try_from(row).ok()?;
        self.get(column, row)
    }

    /// Occupied cells as `(column, row, symbol)`, in row-major reading order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Symbol)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|symbol| (i % self.width, i / self.width, symbol))
        })
    }

    /// The alphabet in reading order.
    pub fn alphabet(&self) -> Vec<Symbol> {
        self.occupied().map(|(_, _, s)| s).collect()
    }
}

impl fmt::Display for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for column in 0..self.width {
                let c = self.get(column, row).map_or(EMPTY_CELL, |s| s.0);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypad_alphabet_is_reading_order() {
        let kp = GridLayout::keypad();
        let alphabet: String = kp.alphabet().iter().map(|s| s.0).collect();
        assert_eq!(alphabet, "abcdefghijklmno123");
        assert_eq!((kp.width(), kp.height()), (5, 4));
    }

    #[test]
    fn keypad_corners_are_empty() {
        let kp = GridLayout::keypad();
        assert_eq!(kp.get(0, 3), None);
        assert_eq!(kp.get(4, 3), None);
        assert_eq!(kp.get(1, 3), Some(Symbol('1')));
        assert_eq!(kp.get(0, 0), Some(Symbol('a')));
        assert_eq!(kp.get(5, 0), None);
        assert_eq!(kp.get_signed(-1, 0), None);
    }

    #[test]
    fn parse_round_trips_through_display() {
        let kp = GridLayout::keypad();
        let parsed = GridLayout::parse(&kp.to_string()).unwrap();
        assert_eq!(parsed, kp);
    }

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let layout = GridLayout::parse("# tiny\n\n ab \n.c\n").unwrap();
        assert_eq!(layout.width(), 2);
        assert_eq!(layout.height(), 2);
        assert_eq!(layout.get(1, 1), Some(Symbol('c')));
        assert_eq!(layout.get(0, 1), None);
    }

    #[test]
    fn rejects_malformed_layouts() {
        assert_eq!(GridLayout::parse(""), Err(LayoutError::Empty));
        assert_eq!(
            GridLayout::parse("abc\nde"),
            Err(LayoutError::RaggedRow { row: 1, expected: 3, found: 2 })
        );
        assert_eq!(
            GridLayout::parse("ab\nba"),
            Err(LayoutError::DuplicateSymbol {
                symbol: Symbol('b'),
                first_column: 1,
                first_row: 0,
                column: 0,
                row: 1,
            })
        );
    }
}
