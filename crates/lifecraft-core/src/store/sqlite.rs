use super::ProgressStore;
use crate::error::{LifecraftError, Result};
use crate::progress::ModuleProgress;
use crate::types::{ModuleId, Role, UserId};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS module_progress (
    user_id               TEXT    NOT NULL,
    module_id             TEXT    NOT NULL,
    status                TEXT    NOT NULL DEFAULT 'not_started',
    current_stage         TEXT,
    completion_percentage INTEGER NOT NULL DEFAULT 0,
    completed_at          TEXT,
    created_at            TEXT    NOT NULL,
    updated_at            TEXT    NOT NULL,
    PRIMARY KEY (user_id, module_id)
);

CREATE TABLE IF NOT EXISTS user_roles (
    user_id TEXT PRIMARY KEY,
    role    TEXT NOT NULL DEFAULT 'user'
);
"#;

const SELECT_COLUMNS: &str = "user_id, module_id, status, current_stage, \
     completion_percentage, completed_at, created_at, updated_at";

/// Raw row as stored; converted into a [`ModuleProgress`] outside the
/// rusqlite callback so domain errors surface as `LifecraftError`.
struct Row {
    user_id: String,
    module_id: String,
    status: String,
    current_stage: Option<String>,
    completion_percentage: i64,
    completed_at: Option<String>,
    created_at: String,
    updated_at: String,
}

impl Row {
    fn from_sql(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            user_id: row.get(0)?,
            module_id: row.get(1)?,
            status: row.get(2)?,
            current_stage: row.get(3)?,
            completion_percentage: row.get(4)?,
            completed_at: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }

    fn into_progress(self) -> Result<ModuleProgress> {
        let completion_percentage = u8::try_from(self.completion_percentage)
            .ok()
            .filter(|p| *p <= 100)
            .ok_or_else(|| {
                LifecraftError::MalformedProgress(format!(
                    "stored percentage {} for module '{}'",
                    self.completion_percentage, self.module_id
                ))
            })?;
        Ok(ModuleProgress {
            user_id: UserId::parse(self.user_id)?,
            module_id: self.module_id.parse()?,
            status: self.status.parse()?,
            current_stage: self.current_stage,
            completion_percentage,
            completed_at: self.completed_at.as_deref().map(parse_ts).transpose()?,
            created_at: parse_ts(&self.created_at)?,
            updated_at: parse_ts(&self.updated_at)?,
        })
    }
}

fn format_ts(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn parse_ts(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| LifecraftError::MalformedProgress(format!("bad timestamp '{raw}': {e}")))
}

// ---------------------------------------------------------------------------
// SqliteStore
// ---------------------------------------------------------------------------

/// Relational progress store backed by a single SQLite connection.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create the database at `path` and ensure the schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            crate::io::ensure_dir(parent)?;
        }
        Self::init(Connection::open(path)?)
    }

    pub fn in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ProgressStore for SqliteStore {
    fn list(&self, user: &UserId) -> Result<Vec<ModuleProgress>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM module_progress WHERE user_id = ?1"
        ))?;
        let rows = stmt
            .query_map(params![user.as_str()], Row::from_sql)?
            .collect::<rusqlite::Result<Vec<Row>>>()?;
        rows.into_iter().map(Row::into_progress).collect()
    }

    fn get(&self, user: &UserId, module: ModuleId) -> Result<Option<ModuleProgress>> {
        let row = self
            .conn()
            .query_row(
                &format!(
                    "SELECT {SELECT_COLUMNS} FROM module_progress \
                     WHERE user_id = ?1 AND module_id = ?2"
                ),
                params![user.as_str(), module.as_str()],
                Row::from_sql,
            )
            .optional()?;
        row.map(Row::into_progress).transpose()
    }

    fn upsert(&self, record: &ModuleProgress) -> Result<()> {
        self.conn().execute(
            r#"
            INSERT INTO module_progress (user_id, module_id, status, current_stage,
                                         completion_percentage, completed_at,
                                         created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT (user_id, module_id) DO UPDATE SET
                status                = excluded.status,
                current_stage         = excluded.current_stage,
                completion_percentage = excluded.completion_percentage,
                completed_at          = excluded.completed_at,
                updated_at            = excluded.updated_at
            "#,
            params![
                record.user_id.as_str(),
                record.module_id.as_str(),
                record.status.as_str(),
                record.current_stage,
                record.completion_percentage as i64,
                record.completed_at.as_ref().map(format_ts),
                format_ts(&record.created_at),
                format_ts(&record.updated_at),
            ],
        )?;
        Ok(())
    }

    fn delete_user(&self, user: &UserId) -> Result<usize> {
        let removed = self.conn().execute(
            "DELETE FROM module_progress WHERE user_id = ?1",
            params![user.as_str()],
        )?;
        Ok(removed)
    }

    fn role(&self, user: &UserId) -> Result<Role> {
        let raw: Option<String> = self
            .conn()
            .query_row(
                "SELECT role FROM user_roles WHERE user_id = ?1",
                params![user.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        match raw {
            Some(r) => r.parse(),
            None => Ok(Role::User),
        }
    }

    fn set_role(&self, user: &UserId, role: Role) -> Result<()> {
        self.conn().execute(
            "INSERT INTO user_roles (user_id, role) VALUES (?1, ?2) \
             ON CONFLICT (user_id) DO UPDATE SET role = excluded.role",
            params![user.as_str(), role.as_str()],
        )?;
        Ok(())
    }
}
