use common::TableView;
use model::{Dataset, TransactionRecord};

/// Maximum number of raw rows projected into the table view.
pub const TABLE_ROW_LIMIT: usize = 20;

/// Pagination page size declared to the consumer. Presentation only.
const TABLE_PAGE_SIZE: u32 = 10;

/// Projects the first [`TABLE_ROW_LIMIT`] rows of the raw dataset into a
/// display-ready view.
///
/// Rows keep their input order and columns are exactly the dataset schema.
/// An empty dataset produces a view with zero rows but the full column
/// set.
pub fn render_table(dataset: &Dataset) -> TableView {
    let rows = dataset
        .rows()
        .iter()
        .take(TABLE_ROW_LIMIT)
        .map(record_cells)
        .collect();

    TableView {
        columns: dataset.columns().iter().map(|c| c.to_string()).collect(),
        rows,
        sortable: true,
        filterable: true,
        page_size: TABLE_PAGE_SIZE,
    }
}

fn record_cells(record: &TransactionRecord) -> Vec<String> {
    vec![
        record.date.format("%Y-%m-%d").to_string(),
        record.product_category.clone(),
        record.operation_type.clone(),
        record.quantity.to_string(),
        format!("{:.2}", record.revenue),
        format!("{:.2}", record.cost),
        format!("{:.2}", record.profit),
        record.employee.clone(),
        record.warehouse_zone.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32) -> TransactionRecord {
        TransactionRecord {
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            product_category: "Electronics".to_string(),
            operation_type: "shipment".to_string(),
            quantity: 5,
            revenue: 1234.5,
            cost: 1000.0,
            profit: 234.5,
            employee: "Petrov".to_string(),
            warehouse_zone: "Zone B".to_string(),
        }
    }

    #[test]
    fn test_row_limit() {
        let dataset = Dataset::new((1..=28).map(record).collect());
        let view = render_table(&dataset);
        assert_eq!(view.rows.len(), TABLE_ROW_LIMIT);
    }

    #[test]
    fn test_fewer_rows_than_limit() {
        let dataset = Dataset::new(vec![record(1), record(2)]);
        let view = render_table(&dataset);
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn test_empty_dataset_keeps_columns() {
        let view = render_table(&Dataset::empty());
        assert!(view.rows.is_empty());
        assert_eq!(view.columns.len(), 9);
        assert_eq!(view.columns[0], "date");
        assert_eq!(view.columns[8], "warehouse_zone");
    }

    #[test]
    fn test_cells_match_schema_order() {
        let dataset = Dataset::new(vec![record(15)]);
        let view = render_table(&dataset);
        let cells = &view.rows[0];
        assert_eq!(cells.len(), view.columns.len());
        assert_eq!(cells[0], "2026-01-15");
        assert_eq!(cells[1], "Electronics");
        assert_eq!(cells[3], "5");
        assert_eq!(cells[4], "1234.50");
        assert_eq!(cells[8], "Zone B");
    }

    #[test]
    fn test_presentation_flags() {
        let view = render_table(&Dataset::empty());
        assert!(view.sortable);
        assert!(view.filterable);
        assert_eq!(view.page_size, 10);
    }
}
