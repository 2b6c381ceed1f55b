use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display-ready projection of the leading rows of a dataset.
///
/// Columns are always the full dataset schema, even for zero rows, so the
/// consumer never has to special-case an absent table. Sorting and
/// filtering happen client-side over the rows supplied here; `page_size`
/// is a presentation parameter only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TableView {
    /// Column headers in schema order
    pub columns: Vec<String>,
    /// Stringified cell values, one inner vector per row
    pub rows: Vec<Vec<String>>,
    /// Whether the consumer may sort client-side
    pub sortable: bool,
    /// Whether the consumer may filter client-side
    pub filterable: bool,
    /// Suggested pagination page size
    pub page_size: u32,
}
