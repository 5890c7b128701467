use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::domain::entities::record::{RecordKind, TabularData};
use crate::infra::sqlite::schema::{init_db, open_connection};
use crate::usecase::ports::repo::RecordSourceMeta;

pub fn insert_column_names(
    tx: &rusqlite::Transaction<'_>,
    kind: RecordKind,
    columns: &[String],
) -> Result<()> {
    let mut insert_column = tx
        .prepare("INSERT INTO record_column(kind, col_idx, name) VALUES (?1, ?2, ?3)")
        .context("failed to prepare column insert")?;

    for (col_idx, name) in columns.iter().enumerate() {
        insert_column
            .execute(params![kind.as_str(), col_idx as i64, name])
            .context("failed to insert column")?;
    }

    Ok(())
}

/// Replaces the stored snapshot for `kind` in one transaction.
pub fn replace_records(
    db_path: &Path,
    kind: RecordKind,
    source_path: &str,
    data: &TabularData,
) -> Result<i64> {
    if data.columns.is_empty() {
        anyhow::bail!("{kind} import has no header row")
    }

    init_db(db_path)?;
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start import transaction")?;

    for table in ["record_cell", "record_column", "record_source"] {
        tx.execute(
            &format!("DELETE FROM {table} WHERE kind = ?1"),
            [kind.as_str()],
        )
        .with_context(|| format!("failed to clear {table} for {kind}"))?;
    }

    let row_count = data.rows.len() as i64;
    tx.execute(
        "INSERT INTO record_source(kind, source_path, row_count) VALUES (?1, ?2, ?3)",
        params![kind.as_str(), source_path, row_count],
    )
    .context("failed to insert record source")?;

    insert_column_names(&tx, kind, &data.columns)?;

    let mut insert_cell = tx
        .prepare(
            "INSERT INTO record_cell(kind, row_idx, col_idx, value) VALUES (?1, ?2, ?3, ?4)",
        )
        .context("failed to prepare cell insert")?;

    for (row_idx, row) in data.rows.iter().enumerate() {
        for col_idx in 0..data.columns.len() {
            let value = row.get(col_idx).cloned().flatten();
            insert_cell
                .execute(params![kind.as_str(), row_idx as i64, col_idx as i64, value])
                .context("failed to insert cell")?;
        }
    }
    drop(insert_cell);

    tx.commit().context("failed to commit import transaction")?;

    tracing::info!(%kind, rows = row_count, source = %source_path, "stored records");
    Ok(row_count)
}

/// Loads the stored snapshot for `kind`, or `None` if nothing was imported.
pub fn load_records(db_path: &Path, kind: RecordKind) -> Result<Option<TabularData>> {
    init_db(db_path)?;
    let conn = open_connection(db_path)?;

    let row_count: Option<i64> = conn
        .query_row(
            "SELECT row_count FROM record_source WHERE kind = ?1",
            [kind.as_str()],
            |row| row.get(0),
        )
        .optional()
        .context("failed to query record source")?;
    let Some(row_count) = row_count else {
        return Ok(None);
    };

    let mut columns_stmt = conn
        .prepare(
            "SELECT name
             FROM record_column
             WHERE kind = ?1
             ORDER BY col_idx ASC",
        )
        .context("failed to prepare columns query")?;
    let columns = columns_stmt
        .query_map([kind.as_str()], |row| row.get::<_, String>(0))
        .context("failed to query columns")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to collect columns")?;
    drop(columns_stmt);

    let mut rows = vec![vec![None; columns.len()]; row_count.max(0) as usize];

    let mut cell_stmt = conn
        .prepare(
            "SELECT row_idx, col_idx, value
             FROM record_cell
             WHERE kind = ?1
             ORDER BY row_idx ASC, col_idx ASC",
        )
        .context("failed to prepare cell query")?;
    let mut cells = cell_stmt
        .query([kind.as_str()])
        .context("failed to run cell query")?;

    while let Some(row) = cells.next().context("failed to read cell row")? {
        let row_idx: i64 = row.get(0).context("failed to read row_idx")?;
        let col_idx: i64 = row.get(1).context("failed to read col_idx")?;
        let value: Option<String> = row.get(2).context("failed to read value")?;

        if let Some(dest_cell) = rows
            .get_mut(row_idx as usize)
            .and_then(|dest_row| dest_row.get_mut(col_idx as usize))
        {
            *dest_cell = value;
        }
    }

    Ok(Some(TabularData { columns, rows }))
}

pub fn list_sources(db_path: &Path) -> Result<Vec<RecordSourceMeta>> {
    init_db(db_path)?;
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT kind, source_path, row_count, imported_at
             FROM record_source
             ORDER BY kind ASC",
        )
        .context("failed to prepare source list query")?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, String>(3)?,
            ))
        })
        .context("failed to query record sources")?;

    let mut sources = Vec::new();
    for row in rows {
        let (kind, source_path, row_count, imported_at) =
            row.context("failed to read record source row")?;
        let kind = RecordKind::from_str(&kind)?;
        sources.push(RecordSourceMeta {
            kind,
            source_path,
            row_count,
            imported_at,
        });
    }

    Ok(sources)
}

pub fn save_column_selection(db_path: &Path, kind: RecordKind, columns: &[String]) -> Result<()> {
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start column selection transaction")?;

    tx.execute(
        "DELETE FROM column_selection WHERE kind = ?1",
        [kind.as_str()],
    )
    .context("failed to clear existing column selection")?;

    let mut insert_stmt = tx
        .prepare(
            "INSERT INTO column_selection(kind, position, name)
             VALUES (?1, ?2, ?3)",
        )
        .context("failed to prepare column selection insert")?;

    for (position, name) in columns.iter().enumerate() {
        insert_stmt
            .execute(params![kind.as_str(), position as i64, name])
            .context("failed to insert column selection")?;
    }

    drop(insert_stmt);
    tx.commit()
        .context("failed to commit column selection updates")?;
    Ok(())
}

pub fn load_column_selection(db_path: &Path, kind: RecordKind) -> Result<Vec<String>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT name
             FROM column_selection
             WHERE kind = ?1
             ORDER BY position ASC",
        )
        .context("failed to prepare column selection query")?;

    let selection = stmt
        .query_map([kind.as_str()], |row| row.get::<_, String>(0))
        .context("failed to query column selection")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to read column selection")?;

    Ok(selection)
}
