use std::io::{self, Write};

use crate::diff::{DiffReport, Finding, Side};
use crate::report::{Palette, Sources};
use crate::utils::column_letter;

/// Write one line per finding.
pub fn write_text_report<W: Write>(
    w: &mut W,
    report: &DiffReport,
    sources: &Sources<'_>,
    palette: Palette,
) -> io::Result<()> {
    for finding in &report.findings {
        writeln!(w, "{}", render_finding(finding, sources, palette))?;
    }

    Ok(())
}

pub fn render_finding(finding: &Finding, sources: &Sources<'_>, palette: Palette) -> String {
    match finding {
        Finding::SheetOnlyIn { side, sheet } => {
            let file = match side {
                Side::Old => palette.old(sources.old),
                Side::New => palette.new(sources.new),
            };
            format!("Sheet {} is only in {}", palette.sheet(sheet), file)
        }
        Finding::ShapeChanged { sheet, old, new } => format!(
            "Sheet {} has a different shape: {} --> {}",
            palette.sheet(sheet),
            palette.old(old),
            palette.new(new)
        ),
        Finding::CellChanged {
            sheet,
            row,
            col,
            old,
            new,
        } => format!(
            "Sheet {} cell {}{} has changed: {} --> {}",
            palette.sheet(sheet),
            palette.coord(column_letter(*col)),
            palette.coord(row + 1),
            palette.old(old),
            palette.new(new)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::{CellValue, Shape};

    const SOURCES: Sources<'static> = Sources {
        old: "old.xlsx",
        new: "new.xlsx",
    };

    fn render(finding: Finding) -> String {
        render_finding(&finding, &SOURCES, Palette::plain())
    }

    #[test]
    fn sheet_only_in_names_the_file() {
        assert_eq!(
            render(Finding::SheetOnlyIn {
                side: Side::Old,
                sheet: "Data".into()
            }),
            "Sheet Data is only in old.xlsx"
        );
        assert_eq!(
            render(Finding::SheetOnlyIn {
                side: Side::New,
                sheet: "Sheet2".into()
            }),
            "Sheet Sheet2 is only in new.xlsx"
        );
    }

    #[test]
    fn shape_line() {
        assert_eq!(
            render(Finding::ShapeChanged {
                sheet: "Sheet1".into(),
                old: Shape::new(2, 2),
                new: Shape::new(3, 2),
            }),
            "Sheet Sheet1 has a different shape: (2, 2) --> (3, 2)"
        );
    }

    #[test]
    fn cell_line_uses_letters_and_one_based_rows() {
        assert_eq!(
            render(Finding::CellChanged {
                sheet: "Sheet1".into(),
                row: 0,
                col: 1,
                old: CellValue::Number(1.0),
                new: CellValue::Number(1.5),
            }),
            "Sheet Sheet1 cell B1 has changed: 1 --> 1.5"
        );
    }

    #[test]
    fn writes_every_finding() {
        let report = DiffReport {
            findings: vec![
                Finding::SheetOnlyIn {
                    side: Side::New,
                    sheet: "Sheet2".into(),
                },
                Finding::CellChanged {
                    sheet: "Sheet1".into(),
                    row: 9,
                    col: 26,
                    old: CellValue::Empty,
                    new: CellValue::Text("x".into()),
                },
            ],
        };

        let mut out = Vec::new();
        write_text_report(&mut out, &report, &SOURCES, Palette::plain()).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sheet Sheet2 is only in new.xlsx\nSheet Sheet1 cell AA10 has changed: (empty) --> x\n"
        );
    }
}
