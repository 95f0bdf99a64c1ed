//! SQLite persistence for classified documents and their extracted fields.
//!
//! One `documents` table holds every ingested document; each extractable
//! document type gets its own field table keyed by `document_id`. Absent
//! fields are stored as NULL, mirroring the omission contract of the
//! extractors.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::{FromRow, Row};
use tracing::debug;

use crate::error::StorageError;
use crate::models::document::{DocumentType, FieldMap};

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A stored document row.
#[derive(Debug, Clone, FromRow)]
pub struct DocumentRecord {
    /// Generated document identifier.
    pub id: i64,
    /// Original file path or upload name.
    pub file_path: String,
    /// Snake_case document type label.
    pub document_type: String,
    /// Full extracted text.
    pub raw_text: String,
}

impl DocumentRecord {
    /// The stored label parsed back into the taxonomy; unrecognized labels
    /// written by older schema versions read as `unknown`.
    pub fn doc_type(&self) -> DocumentType {
        DocumentType::from_str(&self.document_type).unwrap_or(DocumentType::Unknown)
    }
}

/// Schema statements, run idempotently on open.
const MIGRATIONS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS documents (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        file_path TEXT NOT NULL,
        document_type TEXT NOT NULL,
        raw_text TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS invoice (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        document_id INTEGER NOT NULL,
        invoice_number TEXT,
        invoice_date TEXT,
        total_amount TEXT,
        vendor_name TEXT,
        FOREIGN KEY(document_id) REFERENCES documents(id)
    )",
    "CREATE TABLE IF NOT EXISTS purchase_order (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        document_id INTEGER NOT NULL,
        po_number TEXT,
        po_date TEXT,
        total_amount TEXT,
        buyer_name TEXT,
        FOREIGN KEY(document_id) REFERENCES documents(id)
    )",
    "CREATE TABLE IF NOT EXISTS driver_license (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        document_id INTEGER NOT NULL,
        name TEXT,
        dl_number TEXT,
        dob TEXT,
        FOREIGN KEY(document_id) REFERENCES documents(id)
    )",
    "CREATE TABLE IF NOT EXISTS passport (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        document_id INTEGER NOT NULL,
        name TEXT,
        passport_number TEXT,
        FOREIGN KEY(document_id) REFERENCES documents(id)
    )",
    "CREATE TABLE IF NOT EXISTS w2 (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        document_id INTEGER NOT NULL,
        ssn TEXT,
        wages TEXT,
        ein TEXT,
        FOREIGN KEY(document_id) REFERENCES documents(id)
    )",
    "CREATE TABLE IF NOT EXISTS pay_stub (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        document_id INTEGER NOT NULL,
        employer TEXT,
        employee TEXT,
        payroll_id TEXT,
        cycle TEXT,
        pay_rate TEXT,
        pay_date TEXT,
        gross_pay TEXT,
        net_pay TEXT,
        FOREIGN KEY(document_id) REFERENCES documents(id)
    )",
    "CREATE TABLE IF NOT EXISTS flood_form (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        document_id INTEGER NOT NULL,
        borrower TEXT,
        lender TEXT,
        determination_address TEXT,
        county TEXT,
        form_type TEXT,
        FOREIGN KEY(document_id) REFERENCES documents(id)
    )",
];

/// Field-table insert statement and the FieldMap keys bound to its columns,
/// in column order. `Unknown` has no field table.
fn field_table(doc_type: DocumentType) -> Option<(&'static str, &'static [&'static str])> {
    match doc_type {
        DocumentType::Invoice => Some((
            "INSERT INTO invoice (document_id, invoice_number, invoice_date, total_amount, vendor_name)
             VALUES (?, ?, ?, ?, ?)",
            &["invoice_number", "invoice_date", "total_amount", "vendor_name"],
        )),
        DocumentType::PurchaseOrder => Some((
            "INSERT INTO purchase_order (document_id, po_number, po_date, total_amount, buyer_name)
             VALUES (?, ?, ?, ?, ?)",
            &["po_number", "po_date", "total_amount", "buyer_name"],
        )),
        DocumentType::DriverLicense => Some((
            "INSERT INTO driver_license (document_id, name, dl_number, dob)
             VALUES (?, ?, ?, ?)",
            &["name", "dl_number", "DOB"],
        )),
        DocumentType::Passport => Some((
            "INSERT INTO passport (document_id, name, passport_number)
             VALUES (?, ?, ?)",
            &["name", "passport_number"],
        )),
        DocumentType::W2 => Some((
            "INSERT INTO w2 (document_id, ssn, wages, ein)
             VALUES (?, ?, ?, ?)",
            &["ssn", "wages", "ein"],
        )),
        DocumentType::PayStub => Some((
            "INSERT INTO pay_stub (document_id, employer, employee, payroll_id, cycle, pay_rate, pay_date, gross_pay, net_pay)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            &["employer", "employee", "payroll_id", "cycle", "pay_rate", "pay_date", "gross_pay", "net_pay"],
        )),
        DocumentType::FloodForm => Some((
            "INSERT INTO flood_form (document_id, borrower, lender, determination_address, county, form_type)
             VALUES (?, ?, ?, ?, ?, ?)",
            &["borrower", "lender", "determination_address", "county", "form_type"],
        )),
        DocumentType::Unknown => None,
    }
}

/// SQLite-backed document store.
pub struct DocumentStore {
    pool: SqlitePool,
}

impl DocumentStore {
    /// Open a store at the given connection URL and run migrations.
    ///
    /// A URL like `sqlite:documents.db?mode=rwc` creates the file on first
    /// use; see [`DocumentStore::in_memory`] for ephemeral databases.
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        let store = Self { pool };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    ///
    /// In-memory SQLite databases are per-connection, so the pool is capped
    /// at a single connection to keep every query on the same database.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.run_migrations().await?;
        Ok(store)
    }

    async fn run_migrations(&self) -> Result<()> {
        for statement in MIGRATIONS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| StorageError::Migration(e.to_string()))?;
        }
        Ok(())
    }

    /// Insert a classified document and return its generated id.
    pub async fn insert_document(
        &self,
        file_path: &str,
        doc_type: DocumentType,
        raw_text: &str,
    ) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO documents (file_path, document_type, raw_text) VALUES (?, ?, ?)",
        )
        .bind(file_path)
        .bind(doc_type.as_str())
        .bind(raw_text)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("stored document {id} ({})", doc_type);
        Ok(id)
    }

    /// Store extracted fields in the table for `doc_type`.
    ///
    /// Keys absent from the map insert NULL; `Unknown` documents have no
    /// field table and the call is a no-op.
    pub async fn insert_fields(
        &self,
        document_id: i64,
        doc_type: DocumentType,
        fields: &FieldMap,
    ) -> Result<()> {
        let Some((sql, keys)) = field_table(doc_type) else {
            return Ok(());
        };

        let mut query = sqlx::query(sql).bind(document_id);
        for key in keys {
            query = query.bind(fields.get(*key).map(String::as_str));
        }
        query.execute(&self.pool).await?;

        debug!("stored {} fields for document {document_id}", fields.len());
        Ok(())
    }

    /// All stored documents in insertion order.
    pub async fn list_documents(&self) -> Result<Vec<DocumentRecord>> {
        let records = sqlx::query_as::<_, DocumentRecord>(
            "SELECT id, file_path, document_type, raw_text FROM documents ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Number of stored documents.
    pub async fn document_count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) FROM documents")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get(0))
    }
}
