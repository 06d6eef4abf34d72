#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

/// A cell to write into a generated fixture. `Blank` leaves the cell unwritten.
#[derive(Debug, Clone, Copy)]
pub enum Fx {
    Num(f64),
    Str(&'static str),
    Bool(bool),
    Blank,
}

pub type FixtureSheet = (&'static str, Vec<Vec<Fx>>);

/// Write an .xlsx with the given sheets, in order, and return its path.
pub fn write_workbook(dir: &Path, file_name: &str, sheets: &[FixtureSheet]) -> PathBuf {
    let path = dir.join(file_name);
    let mut workbook = Workbook::new();

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).expect("valid sheet name");

        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    Fx::Num(n) => {
                        worksheet.write_number(r, c, *n).expect("write number");
                    }
                    Fx::Str(s) => {
                        worksheet.write_string(r, c, *s).expect("write string");
                    }
                    Fx::Bool(b) => {
                        worksheet.write_boolean(r, c, *b).expect("write boolean");
                    }
                    Fx::Blank => {}
                }
            }
        }
    }

    workbook.save(&path).expect("save fixture workbook");
    path
}

pub fn numbers(rows: &[&[f64]]) -> Vec<Vec<Fx>> {
    rows.iter()
        .map(|row| row.iter().map(|n| Fx::Num(*n)).collect())
        .collect()
}
