use serde::Serialize;

use crate::excel::{CellValue, Shape};

/// Which of the two compared documents something belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Old,
    New,
}

/// One reported unit of difference. `row` and `col` are zero-based.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    SheetOnlyIn {
        side: Side,
        sheet: String,
    },
    ShapeChanged {
        sheet: String,
        old: Shape,
        new: Shape,
    },
    CellChanged {
        sheet: String,
        row: usize,
        col: usize,
        old: CellValue,
        new: CellValue,
    },
}

impl Finding {
    pub fn sheet(&self) -> &str {
        match self {
            Finding::SheetOnlyIn { sheet, .. }
            | Finding::ShapeChanged { sheet, .. }
            | Finding::CellChanged { sheet, .. } => sheet,
        }
    }
}

/// Everything `compare` found, in a deterministic order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffReport {
    pub findings: Vec<Finding>,
}

impl DiffReport {
    pub fn has_differences(&self) -> bool {
        !self.findings.is_empty()
    }

    pub fn count_sheets_only_in(&self) -> usize {
        self.count(|f| matches!(f, Finding::SheetOnlyIn { .. }))
    }

    pub fn count_shape_changes(&self) -> usize {
        self.count(|f| matches!(f, Finding::ShapeChanged { .. }))
    }

    pub fn count_cell_changes(&self) -> usize {
        self.count(|f| matches!(f, Finding::CellChanged { .. }))
    }

    fn count(&self, pred: impl Fn(&Finding) -> bool) -> usize {
        self.findings.iter().filter(|f| pred(f)).count()
    }
}
