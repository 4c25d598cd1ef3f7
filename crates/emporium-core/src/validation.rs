//! Required-column checks.

use log::debug;

use crate::error::{EmporiumError, EmporiumResult};
use crate::table::QuoteTable;

/// Names from `required` that are not columns of `table`, in request order.
pub fn missing_columns<S: AsRef<str>>(table: &QuoteTable, required: &[S]) -> Vec<String> {
    required
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !table.has_column(name))
        .map(str::to_string)
        .collect()
}

/// Checks that every name in `required` is a column of `table`.
///
/// Returns `Ok(true)` when all are present. Otherwise fails with
/// [`EmporiumError::MissingColumn`] naming the first absent column and
/// listing all of them.
pub fn required_column_check<S: AsRef<str>>(
    table: &QuoteTable,
    required: &[S],
) -> EmporiumResult<bool> {
    let missing = missing_columns(table, required);
    if missing.is_empty() {
        return Ok(true);
    }
    debug!("required column check failed, missing {:?}", missing);
    Err(EmporiumError::missing_columns(missing))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> QuoteTable {
        QuoteTable::from_columns([("mark_back", vec![100.0]), ("mark_front", vec![50.0])])
            .unwrap()
    }

    #[test]
    fn test_all_present() {
        assert!(required_column_check(&table(), &["mark_back", "mark_front"]).unwrap());
    }

    #[test]
    fn test_empty_requirement() {
        let none: [&str; 0] = [];
        assert!(required_column_check(&table(), &none).unwrap());
    }

    #[test]
    fn test_reports_first_and_all_missing() {
        let err = required_column_check(
            &table(),
            &["mark_back", "strike", "mark_front", "underlying"],
        )
        .unwrap_err();
        match err {
            EmporiumError::MissingColumn { column, missing } => {
                assert_eq!(column, "strike");
                assert_eq!(missing, vec!["strike", "underlying"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_accepts_owned_names() {
        let names = vec!["mark_back".to_string()];
        assert!(required_column_check(&table(), &names).unwrap());
    }
}
