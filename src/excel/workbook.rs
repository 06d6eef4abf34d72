use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use indexmap::IndexMap;
use indexmap::map::Iter;
use tracing::debug;

use crate::error::LoadError;
use crate::excel::convert::data_to_cell_value;
use crate::excel::Sheet;

/// Every sheet of a workbook, in workbook order, keyed by sheet name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sheets: IndexMap<String, Sheet>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, name: impl Into<String>, sheet: Sheet) -> Self {
        self.insert(name, sheet);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, sheet: Sheet) {
        self.sheets.insert(name.into(), sheet);
    }

    pub fn get(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, Sheet> {
        self.sheets.iter()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Sheet);
    type IntoIter = Iter<'a, String, Sheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read every sheet of the workbook at `path`.
///
/// No header row or index column is inferred: cell A1 is row 0, column 0 of the grid.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Document, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = workbook.sheet_names().to_vec();
    let mut document = Document {
        sheets: IndexMap::with_capacity(sheet_names.len()),
    };

    for name in &sheet_names {
        let range = workbook
            .worksheet_range(name)
            .map_err(|source| LoadError::Sheet {
                path: path.to_path_buf(),
                sheet: name.clone(),
                source,
            })?;

        let sheet = create_sheet_from_range(&range);
        debug!(sheet = %name, shape = %sheet.shape(), "loaded worksheet");
        document.insert(name.clone(), sheet);
    }

    debug!(path = %path.display(), sheets = document.len(), "loaded workbook");

    Ok(document)
}

// calamine ranges start at the first used cell; shift them back so the grid starts at A1
fn create_sheet_from_range(range: &Range<Data>) -> Sheet {
    let (Some((start_row, start_col)), Some((end_row, end_col))) = (range.start(), range.end())
    else {
        return Sheet::empty();
    };

    let height = end_row as usize + 1;
    let width = end_col as usize + 1;
    let mut sheet = Sheet::with_shape(height, width);

    for (row_idx, col_idx, cell) in range.used_cells() {
        let row = start_row as usize + row_idx;
        let col = start_col as usize + col_idx;
        sheet.set(row, col, data_to_cell_value(cell));
    }

    sheet
}
