//! CSV bootstrap import
//!
//! Loads product listings from a CSV export at startup. A row that fails to
//! insert is logged and skipped so one bad listing does not abort the whole
//! import; malformed numeric fields fall back to 0.

use shared::models::ProductCreate;
use sqlx::SqlitePool;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Column order: title, manufacturer, price, code, warranty, link,
/// category, description, image, store
const EXPECTED_COLUMNS: usize = 10;

/// Import products from a CSV file (first row is the header).
/// Returns the number of rows inserted.
pub async fn import_products_from_csv(pool: &SqlitePool, path: &str) -> Result<usize, BoxError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut imported = 0usize;

    for (index, record) in reader.records().enumerate() {
        // data rows start at line 2, after the header
        let line = index + 2;
        let record = record?;
        if record.len() != EXPECTED_COLUMNS {
            return Err(format!("row {line} has wrong number of columns").into());
        }

        let product = ProductCreate {
            title: record[0].to_string(),
            manufacturer: record[1].to_string(),
            price: record[2].parse().unwrap_or(0),
            code: record[3].to_string(),
            warranty: record[4].parse().unwrap_or(0),
            link: record[5].to_string(),
            category: record[6].to_string(),
            description: record[7].to_string(),
            image: record[8].to_string(),
            store: record[9].to_string(),
        };

        match crate::db::products::insert(pool, &product).await {
            Ok(_) => imported += 1,
            Err(e) => tracing::warn!("failed to insert product at row {line}: {e}"),
        }
    }

    Ok(imported)
}
