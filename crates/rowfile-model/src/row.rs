/// Field separator used by both the input and output line formats.
pub const DELIMITER: char = ',';

/// One record: a pair of integers parsed from a single input line.
///
/// Rows have value equality only; two rows with the same fields are
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub first: i32,
    pub second: i32,
}

impl Row {
    #[must_use]
    pub const fn new(first: i32, second: i32) -> Self {
        Self { first, second }
    }
}

#[cfg(test)]
mod tests {
    use super::Row;

    #[test]
    fn rows_compare_by_value() {
        assert_eq!(Row::new(1, 2), Row::new(1, 2));
        assert_ne!(Row::new(1, 2), Row::new(2, 1));
    }

    #[test]
    fn full_signed_range_is_representable() {
        let row = Row::new(i32::MIN, i32::MAX);
        assert_eq!(row.first, i32::MIN);
        assert_eq!(row.second, i32::MAX);
    }
}
