use std::fmt;

use serde::Serialize;

use crate::excel::CellValue;

/// Row and column count of a sheet's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

/// A rectangular grid anchored at A1. Every row holds exactly `shape().cols` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    data: Vec<Vec<CellValue>>,
    max_cols: usize,
}

impl Sheet {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            max_cols: 0,
        }
    }

    /// A `rows` x `cols` grid of empty cells.
    pub fn with_shape(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![vec![CellValue::Empty; cols]; rows],
            max_cols: cols,
        }
    }

    /// Builds a sheet from ragged rows, padding short rows with empty cells.
    pub fn from_rows<R, V>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let mut data: Vec<Vec<CellValue>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let max_cols = data.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut data {
            row.resize(max_cols, CellValue::Empty);
        }

        Self { data, max_cols }
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.data.len(), self.max_cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.data.get(row).and_then(|r| r.get(col))
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: CellValue) {
        self.data[row][col] = value;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.data.iter().map(Vec::as_slice)
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::empty()
    }
}
