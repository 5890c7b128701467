use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn open_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)
        .with_context(|| format!("failed to open db: {}", db_path.display()))?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign key enforcement")?;
    Ok(conn)
}

pub fn init_db(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent dir: {}", parent.display()))?;
    }

    let conn = open_connection(db_path)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS record_source (
            kind        TEXT PRIMARY KEY,
            source_path TEXT NOT NULL,
            row_count   INTEGER NOT NULL,
            imported_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS record_column (
            kind        TEXT NOT NULL,
            col_idx     INTEGER NOT NULL,
            name        TEXT NOT NULL,
            PRIMARY KEY (kind, col_idx),
            FOREIGN KEY (kind) REFERENCES record_source(kind)
        );

        CREATE TABLE IF NOT EXISTS record_cell (
            kind        TEXT NOT NULL,
            row_idx     INTEGER NOT NULL,
            col_idx     INTEGER NOT NULL,
            value       TEXT,
            PRIMARY KEY (kind, row_idx, col_idx),
            FOREIGN KEY (kind) REFERENCES record_source(kind)
        );

        CREATE TABLE IF NOT EXISTS column_selection (
            kind        TEXT NOT NULL,
            position    INTEGER NOT NULL,
            name        TEXT NOT NULL,
            PRIMARY KEY (kind, position)
        );

        CREATE INDEX IF NOT EXISTS idx_record_cell_kind_row
            ON record_cell(kind, row_idx);
        ",
    )
    .context("failed to initialize schema")?;

    Ok(())
}
