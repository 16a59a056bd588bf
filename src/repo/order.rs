use crate::models::Order;
use chrono::NaiveDate;
use rusqlite::Connection;
use thiserror::Error;

/// Errors crossing the order-store boundary.
///
/// The pipeline itself is total; everything that can fail lives here so
/// the front end can tell the operator what went wrong instead of
/// silently showing an empty board.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("order store unavailable: {0}")]
    Connection(#[source] rusqlite::Error),
    #[error("order query failed: {0}")]
    Query(#[source] rusqlite::Error),
}

/// Order repository for store reads
///
/// The store is written by the intake system; this side only reads.
pub struct OrderRepo;

impl OrderRepo {
    /// Read the full order snapshot.
    ///
    /// Rows come back in due-date order as a convenience only; the
    /// pipeline re-sorts and assumes nothing about snapshot order.
    pub fn fetch_all(conn: &Connection) -> Result<Vec<Order>, FetchError> {
        let mut stmt = conn
            .prepare(
                "SELECT id, product_name, quantity, detail, due_date, expiry_primary,
                        expiry_secondary, requirements, customer_name, reception_number,
                        preparer_id, departed
                 FROM orders
                 ORDER BY due_date ASC",
            )
            .map_err(FetchError::Connection)?;

        let rows = stmt
            .query_map([], |row| {
                let due: String = row.get(4)?;
                let due_date = NaiveDate::parse_from_str(&due, "%Y-%m-%d").map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        4,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
                Ok(Order {
                    id: Some(row.get(0)?),
                    product_name: row.get(1)?,
                    quantity: row.get(2)?,
                    detail: row.get(3)?,
                    due_date,
                    expiry_primary: row.get(5)?,
                    expiry_secondary: row.get(6)?,
                    requirements: row.get(7)?,
                    customer_name: row.get(8)?,
                    reception_number: row.get(9)?,
                    group_color_index: None,
                    preparer_id: row.get(10)?,
                    departed: row.get(11)?,
                })
            })
            .map_err(FetchError::Query)?;

        let mut orders = Vec::new();
        for row in rows {
            orders.push(row.map_err(FetchError::Query)?);
        }
        log::debug!("fetched {} orders from store", orders.len());
        Ok(orders)
    }

    /// Total row count, regardless of filters.
    pub fn count_all(conn: &Connection) -> Result<i64, FetchError> {
        conn.query_row("SELECT COUNT(*) FROM orders", [], |row| row.get(0))
            .map_err(FetchError::Query)
    }
}
