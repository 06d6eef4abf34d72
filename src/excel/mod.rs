mod cell;
mod convert;
mod sheet;
mod workbook;

pub use cell::CellValue;
pub use sheet::{Shape, Sheet};
pub use workbook::{Document, load};
