mod json;
mod palette;
mod text;

pub use json::write_json_report;
pub use palette::Palette;
pub use text::{render_finding, write_text_report};

/// How each side of the comparison is named in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sources<'a> {
    pub old: &'a str,
    pub new: &'a str,
}
