pub mod cli;
pub mod diff;
pub mod error;
pub mod excel;
pub mod report;
pub mod utils;

pub use diff::{DiffReport, Finding, Side, compare};
pub use error::{ArgumentError, LoadError};
pub use excel::{CellValue, Document, Shape, Sheet, load};
