use std::sync::Arc;

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::models::feedback::{FeedbackItem, FeedbackUpload};
use crate::object_id;


#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("collection name is not a valid identifier: {0:?}")]
    InvalidCollection(String),
}

/// Exact-match filters applied to the listing before pagination.
#[derive(Debug, Default, Clone)]
pub struct FeedbackFilter {
    pub rating: Option<i32>,
    pub customer: Option<String>,
    pub product: Option<String>,
    pub vendor: Option<String>,
}

/// Feedback store over a single rusqlite connection. Cloning shares the
/// connection; one table per collection, named by `StoreConfig`.
#[derive(Debug, Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    collection: String,
}

impl Database {
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        if !is_identifier(&config.collection) {
            return Err(StoreError::InvalidCollection(config.collection.clone()));
        }
        let conn = Connection::open(&config.connection_string)?;
        info!(
            "store connection established at {} (database: {}, collection: {})",
            config.connection_string, config.database, config.collection
        );
        Ok(Database {
            conn: Arc::new(Mutex::new(conn)),
            collection: config.collection.clone(),
        })
    }

    pub async fn create_schema(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().await;
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id TEXT PRIMARY KEY,
                rating INTEGER NOT NULL,
                product TEXT NOT NULL,
                vendor TEXT NOT NULL,
                customer TEXT,
                feedback TEXT
            );",
            self.collection
        ))?;
        Ok(())
    }

    /// Persist one document; the store assigns the id and hands it back.
    pub async fn insert(&self, request: &FeedbackUpload) -> Result<String, StoreError> {
        let id = object_id::generate();
        let conn = self.conn.lock().await;
        conn.execute(
            &format!(
                "INSERT INTO {} (id, rating, product, vendor, customer, feedback)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                self.collection
            ),
            params![
                id,
                request.rating,
                request.product,
                request.vendor,
                request.customer,
                request.feedback
            ],
        )?;
        debug!("document inserted: {}", id);
        Ok(id)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<FeedbackItem>, StoreError> {
        let conn = self.conn.lock().await;
        let item = conn
            .query_row(
                &format!(
                    "SELECT id, rating, product, vendor, customer, feedback
                     FROM {} WHERE id = ?1",
                    self.collection
                ),
                [id],
                row_to_item,
            )
            .optional()?;
        Ok(item)
    }

    /// One page of documents sorted by id descending, plus the count of all
    /// documents matching the filter. An offset past the end yields an empty
    /// page with the total untouched.
    pub async fn find_page(
        &self,
        filter: &FeedbackFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<FeedbackItem>, i64), StoreError> {
        let (where_clause, filter_params) = filter_clause(filter);
        let conn = self.conn.lock().await;

        let total: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}{}", self.collection, where_clause),
            params_from_iter(filter_params.clone()),
            |row| row.get(0),
        )?;

        let mut stmt = conn.prepare(&format!(
            "SELECT id, rating, product, vendor, customer, feedback
             FROM {}{} ORDER BY id DESC LIMIT ? OFFSET ?",
            self.collection, where_clause
        ))?;
        let mut query_params = filter_params;
        query_params.push(Value::Integer(limit));
        query_params.push(Value::Integer(offset));

        let rows = stmt.query_map(params_from_iter(query_params), row_to_item)?;
        let mut documents = Vec::new();
        for row in rows {
            documents.push(row?);
        }
        debug!("fetched {} of {} documents", documents.len(), total);
        Ok((documents, total))
    }
}

fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<FeedbackItem> {
    Ok(FeedbackItem {
        id: row.get(0)?,
        rating: row.get(1)?,
        product: row.get(2)?,
        vendor: row.get(3)?,
        customer: row.get(4)?,
        feedback: row.get(5)?,
    })
}

fn filter_clause(filter: &FeedbackFilter) -> (String, Vec<Value>) {
    let mut clauses = Vec::new();
    let mut params = Vec::new();
    if let Some(rating) = filter.rating {
        clauses.push("rating = ?");
        params.push(Value::Integer(rating as i64));
    }
    if let Some(customer) = &filter.customer {
        clauses.push("customer = ?");
        params.push(Value::Text(customer.clone()));
    }
    if let Some(product) = &filter.product {
        clauses.push("product = ?");
        params.push(Value::Text(product.clone()));
    }
    if let Some(vendor) = &filter.vendor {
        clauses.push("vendor = ?");
        params.push(Value::Text(vendor.clone()));
    }

    if clauses.is_empty() {
        (String::new(), params)
    } else {
        (format!(" WHERE {}", clauses.join(" AND ")), params)
    }
}

// Collection names come from configuration, but they are spliced into SQL,
// so they must be plain identifiers.
fn is_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
