/// Spreadsheet column letters for a zero-based column index (0 -> A, 26 -> AA).
#[must_use]
pub fn column_letter(index: usize) -> String {
    let mut col_name = String::new();
    let mut n = index + 1;

    while n > 0 {
        let remainder = (n - 1) % 26;
        col_name.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }

    col_name
}

// Format a zero-based (row, col) as an A1-style reference (e.g., (0, 1) -> B1)
#[must_use]
pub fn cell_reference(row: usize, col: usize) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letter_columns() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(1), "B");
        assert_eq!(column_letter(25), "Z");
    }

    #[test]
    fn multi_letter_columns() {
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
        assert_eq!(column_letter(51), "AZ");
        assert_eq!(column_letter(52), "BA");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
        assert_eq!(column_letter(16_383), "XFD");
    }

    #[test]
    fn references_are_one_based_rows() {
        assert_eq!(cell_reference(0, 0), "A1");
        assert_eq!(cell_reference(0, 1), "B1");
        assert_eq!(cell_reference(9, 27), "AB10");
    }
}
