//! Projection of the record list into display rows.

use crate::models::work_record::WorkRecord;

pub const EMPTY_PLACEHOLDER: &str = "まだ作業記録がありません";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRow<'a> {
    Placeholder,
    Record(&'a WorkRecord),
}

/// Rows newest first; a single placeholder row when there are no records.
pub fn render(records: &[WorkRecord]) -> Vec<ListRow<'_>> {
    if records.is_empty() {
        return vec![ListRow::Placeholder];
    }

    records.iter().rev().map(ListRow::Record).collect()
}
