//! Quote repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over canonical `quotes` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `Quote::validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - `created_at` is written once on insert and never updated.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::quote::{Quote, QuoteId, QuoteValidationError};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const QUOTE_SELECT_SQL: &str = "SELECT
    uuid,
    text,
    note,
    color_index,
    created_at
FROM quotes";

const REQUIRED_COLUMNS: &[&str] = &["uuid", "text", "note", "color_index", "created_at"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for quote persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(QuoteValidationError),
    Db(DbError),
    NotFound(QuoteId),
    InvalidData(String),
    /// Connection has not been migrated to the latest schema.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "quote not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted quote data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<QuoteValidationError> for RepoError {
    fn from(value: QuoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Sort direction over the creation timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Descending by `created_at`; feed and journal grid default.
    #[default]
    NewestFirst,
    /// Ascending by `created_at`.
    OldestFirst,
}

impl SortOrder {
    // The uuid tiebreak flips with the direction so the two orders are
    // exact reverses of each other even on equal timestamps.
    fn sql_order_clause(self) -> &'static str {
        match self {
            Self::NewestFirst => "created_at DESC, uuid DESC",
            Self::OldestFirst => "created_at ASC, uuid ASC",
        }
    }
}

/// Query options for listing quotes.
#[derive(Debug, Clone, Default)]
pub struct QuoteListQuery {
    pub order: SortOrder,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for quote CRUD operations.
pub trait QuoteRepository {
    fn insert_quote(&self, quote: &Quote) -> RepoResult<QuoteId>;
    fn update_quote(&self, quote: &Quote) -> RepoResult<()>;
    fn get_quote(&self, id: QuoteId) -> RepoResult<Option<Quote>>;
    fn list_quotes(&self, query: &QuoteListQuery) -> RepoResult<Vec<Quote>>;
    fn delete_quote(&self, id: QuoteId) -> RepoResult<()>;
    fn count_quotes(&self) -> RepoResult<u64>;
}

/// SQLite-backed quote repository.
pub struct SqliteQuoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuoteRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    ///
    /// Rejects connections whose schema version or table shape does not
    /// match what this binary was built against.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl QuoteRepository for SqliteQuoteRepository<'_> {
    fn insert_quote(&self, quote: &Quote) -> RepoResult<QuoteId> {
        quote.validate()?;

        self.conn.execute(
            "INSERT INTO quotes (
                uuid,
                text,
                note,
                color_index,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                quote.uuid.to_string(),
                quote.text.as_str(),
                quote.note.as_str(),
                quote.color_index as i64,
                quote.created_at,
            ],
        )?;

        Ok(quote.uuid)
    }

    fn update_quote(&self, quote: &Quote) -> RepoResult<()> {
        quote.validate()?;

        // created_at is deliberately absent from the SET list.
        let changed = self.conn.execute(
            "UPDATE quotes
             SET
                text = ?1,
                note = ?2,
                color_index = ?3,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?4;",
            params![
                quote.text.as_str(),
                quote.note.as_str(),
                quote.color_index as i64,
                quote.uuid.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(quote.uuid));
        }

        Ok(())
    }

    fn get_quote(&self, id: QuoteId) -> RepoResult<Option<Quote>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{QUOTE_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_quote_row(row)?));
        }

        Ok(None)
    }

    fn list_quotes(&self, query: &QuoteListQuery) -> RepoResult<Vec<Quote>> {
        let mut sql = format!(
            "{QUOTE_SELECT_SQL} ORDER BY {}",
            query.order.sql_order_clause()
        );
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut quotes = Vec::new();

        while let Some(row) = rows.next()? {
            quotes.push(parse_quote_row(row)?);
        }

        Ok(quotes)
    }

    fn delete_quote(&self, id: QuoteId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM quotes WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn count_quotes(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM quotes;", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'quotes'
        );",
        [],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable("quotes"));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('quotes');")?;
    let mut rows = stmt.query([])?;
    let mut present = Vec::new();
    while let Some(row) = rows.next()? {
        present.push(row.get::<_, String>(0)?);
    }

    for column in REQUIRED_COLUMNS {
        if !present.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: "quotes",
                column,
            });
        }
    }

    Ok(())
}

fn parse_quote_row(row: &Row<'_>) -> RepoResult<Quote> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in quotes.uuid"))
    })?;

    let color_raw: i64 = row.get("color_index")?;
    let color_index = usize::try_from(color_raw).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid color_index value `{color_raw}` in quotes.color_index"
        ))
    })?;

    let quote = Quote {
        uuid,
        text: row.get("text")?,
        note: row.get("note")?,
        created_at: row.get("created_at")?,
        color_index,
    };
    quote.validate()?;
    Ok(quote)
}
