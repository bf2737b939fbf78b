use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("row {row} is out of range for {len} aliases")]
    RowOutOfRange { row: usize, len: usize },
    #[error("unknown column index {0}")]
    UnknownColumn(usize),
    #[error("alias '{title}' was not found right after it was added")]
    MissingAfterInsert { title: String },
    #[error("alias title must not be empty")]
    EmptyTitle,
}

#[cfg(test)]
mod tests {
    use super::AliasError;

    #[test]
    fn formats_row_out_of_range() {
        let err = AliasError::RowOutOfRange { row: 7, len: 3 };
        assert_eq!(err.to_string(), "row 7 is out of range for 3 aliases");
    }

    #[test]
    fn formats_missing_after_insert() {
        let err = AliasError::MissingAfterInsert {
            title: "feat".into(),
        };
        assert_eq!(
            err.to_string(),
            "alias 'feat' was not found right after it was added"
        );
    }
}
