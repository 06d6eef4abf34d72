use std::path::PathBuf;

use thiserror::Error;

/// A workbook could not be turned into a [`Document`](crate::excel::Document).
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Unable to parse Excel file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Unable to read worksheet '{sheet}' in {}", path.display())]
    Sheet {
        path: PathBuf,
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::Open { path, .. }
            | LoadError::Sheet { path, .. } => path,
        }
    }
}

/// The command line did not match either invocation form.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    #[error(
        "expected 2 file paths, or the 7 (or 9) arguments git passes to an external diff driver; got {count}"
    )]
    WrongArity { count: usize },
}
