mod compare;
mod finding;

pub use compare::compare;
pub use finding::{DiffReport, Finding, Side};
