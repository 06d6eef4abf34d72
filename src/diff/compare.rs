use tracing::{debug, trace};

use crate::diff::{DiffReport, Finding, Side};
use crate::excel::{Document, Sheet};

/// Compare `old` against `new`.
///
/// Findings come out as: sheets only in `old`, sheets only in `new` (each in their own
/// document's order), then, for every sheet in both, in `old`'s order, either a single
/// shape change or the changed cells in row-major order. Cells are never compared across
/// sheets whose shapes differ.
pub fn compare(old: &Document, new: &Document) -> DiffReport {
    let mut findings = Vec::new();

    for name in old.sheet_names().filter(|name| !new.contains(name)) {
        findings.push(Finding::SheetOnlyIn {
            side: Side::Old,
            sheet: name.to_string(),
        });
    }

    for name in new.sheet_names().filter(|name| !old.contains(name)) {
        findings.push(Finding::SheetOnlyIn {
            side: Side::New,
            sheet: name.to_string(),
        });
    }

    for (name, old_sheet) in old {
        let Some(new_sheet) = new.get(name) else {
            continue;
        };
        compare_sheet(name, old_sheet, new_sheet, &mut findings);
    }

    let report = DiffReport { findings };
    debug!(
        sheets_only_in = report.count_sheets_only_in(),
        shape_changes = report.count_shape_changes(),
        cell_changes = report.count_cell_changes(),
        "comparison finished"
    );

    report
}

fn compare_sheet(name: &str, old: &Sheet, new: &Sheet, findings: &mut Vec<Finding>) {
    let (old_shape, new_shape) = (old.shape(), new.shape());

    if old_shape != new_shape {
        trace!(sheet = name, old = %old_shape, new = %new_shape, "shape changed");
        findings.push(Finding::ShapeChanged {
            sheet: name.to_string(),
            old: old_shape,
            new: new_shape,
        });
        return;
    }

    for (row, (old_row, new_row)) in old.rows().zip(new.rows()).enumerate() {
        for (col, (old_cell, new_cell)) in old_row.iter().zip(new_row).enumerate() {
            if old_cell == new_cell {
                continue;
            }

            trace!(
                sheet = name,
                row,
                col,
                old_type = old_cell.type_name(),
                new_type = new_cell.type_name(),
                "cell changed"
            );
            findings.push(Finding::CellChanged {
                sheet: name.to_string(),
                row,
                col,
                old: old_cell.clone(),
                new: new_cell.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::{CellValue, Shape};

    fn doc(sheets: &[(&str, Sheet)]) -> Document {
        sheets
            .iter()
            .fold(Document::new(), |d, (name, sheet)| d.with_sheet(*name, sheet.clone()))
    }

    fn grid(rows: Vec<Vec<CellValue>>) -> Sheet {
        Sheet::from_rows(rows)
    }

    #[test]
    fn identical_documents_have_no_findings() {
        let a = doc(&[(
            "Sheet1",
            grid(vec![vec![1.into(), 2.into()], vec![3.into(), 4.into()]]),
        )]);
        let report = compare(&a, &a.clone());
        assert!(report.findings.is_empty());
        assert!(!report.has_differences());
    }

    #[test]
    fn old_only_sheets_come_before_new_only_sheets() {
        let a = doc(&[("Keep", Sheet::empty()), ("Gone", Sheet::empty())]);
        let b = doc(&[("Added", Sheet::empty()), ("Keep", Sheet::empty())]);

        let report = compare(&a, &b);

        assert_eq!(
            report.findings,
            vec![
                Finding::SheetOnlyIn {
                    side: Side::Old,
                    sheet: "Gone".to_string()
                },
                Finding::SheetOnlyIn {
                    side: Side::New,
                    sheet: "Added".to_string()
                },
            ]
        );
    }

    #[test]
    fn shape_change_suppresses_cell_comparison() {
        let a = doc(&[("S", grid(vec![vec!["a".into()], vec!["b".into()]]))]);
        let b = doc(&[("S", grid(vec![vec!["x".into()], vec!["y".into()], vec!["z".into()]]))]);

        let report = compare(&a, &b);

        assert_eq!(
            report.findings,
            vec![Finding::ShapeChanged {
                sheet: "S".to_string(),
                old: Shape::new(2, 1),
                new: Shape::new(3, 1),
            }]
        );
    }

    #[test]
    fn cells_are_reported_row_major() {
        let a = doc(&[("S", grid(vec![vec![1.into(), 2.into()], vec![3.into(), 4.into()]]))]);
        let b = doc(&[("S", grid(vec![vec![1.into(), 5.into()], vec![6.into(), 4.into()]]))]);

        let coords: Vec<(usize, usize)> = compare(&a, &b)
            .findings
            .iter()
            .filter_map(|f| match f {
                Finding::CellChanged { row, col, .. } => Some((*row, *col)),
                _ => None,
            })
            .collect();

        assert_eq!(coords, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn empty_grids_compare_equal() {
        let a = doc(&[("S", Sheet::with_shape(0, 0))]);
        assert!(!compare(&a, &a).has_differences());
    }

    #[test]
    fn missing_versus_zero_is_a_change() {
        let a = doc(&[("S", grid(vec![vec![CellValue::Empty]]))]);
        let b = doc(&[("S", grid(vec![vec![0.into()]]))]);

        let report = compare(&a, &b);

        assert_eq!(report.count_cell_changes(), 1);
        assert_eq!(report.findings[0].sheet(), "S");
    }
}
