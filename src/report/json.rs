use std::io::{self, Write};

use serde::Serialize;

use crate::diff::{DiffReport, Finding, Side};
use crate::excel::{CellValue, Shape};
use crate::report::Sources;
use crate::utils::{cell_reference, column_letter};

#[derive(Debug, Serialize)]
struct JsonSummary {
    sheets_only_in: usize,
    shape_changes: usize,
    cell_changes: usize,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum JsonFinding<'a> {
    SheetOnlyIn {
        sheet: &'a str,
        side: Side,
        file: &'a str,
    },
    ShapeChanged {
        sheet: &'a str,
        old: Shape,
        new: Shape,
    },
    CellChanged {
        sheet: &'a str,
        cell: String,
        row: usize,
        column: String,
        old: &'a CellValue,
        new: &'a CellValue,
    },
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    old: &'a str,
    new: &'a str,
    differences: bool,
    summary: JsonSummary,
    findings: Vec<JsonFinding<'a>>,
}

fn to_json_finding<'a>(finding: &'a Finding, sources: &Sources<'a>) -> JsonFinding<'a> {
    match finding {
        Finding::SheetOnlyIn { side, sheet } => JsonFinding::SheetOnlyIn {
            sheet,
            side: *side,
            file: match side {
                Side::Old => sources.old,
                Side::New => sources.new,
            },
        },
        Finding::ShapeChanged { sheet, old, new } => JsonFinding::ShapeChanged {
            sheet,
            old: *old,
            new: *new,
        },
        Finding::CellChanged {
            sheet,
            row,
            col,
            old,
            new,
        } => JsonFinding::CellChanged {
            sheet,
            cell: cell_reference(*row, *col),
            row: row + 1,
            column: column_letter(*col),
            old,
            new,
        },
    }
}

/// Write the report as a single pretty-printed JSON object followed by a newline.
pub fn write_json_report<W: Write>(
    w: &mut W,
    report: &DiffReport,
    sources: &Sources<'_>,
) -> io::Result<()> {
    let json_report = JsonReport {
        old: sources.old,
        new: sources.new,
        differences: report.has_differences(),
        summary: JsonSummary {
            sheets_only_in: report.count_sheets_only_in(),
            shape_changes: report.count_shape_changes(),
            cell_changes: report.count_cell_changes(),
        },
        findings: report
            .findings
            .iter()
            .map(|f| to_json_finding(f, sources))
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *w, &json_report)?;
    w.write_all(b"\n")?;

    Ok(())
}
