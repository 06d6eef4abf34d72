pub mod helpers;

pub use helpers::{cell_reference, column_letter};
