//! SQLite-backed implementation of [`OpeningRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, TypeInfo, ValueRef};
use std::time::SystemTime;

use super::Database;
use crate::persistence::traits::OpeningRepository;
use crate::persistence::{
    Branches, EvalScore, MoveRecord, OpeningEntry, PersistenceError, PositionRecord,
};

/// Row type for move queries, mapped via `sqlx::FromRow`.
#[derive(sqlx::FromRow)]
struct MoveRow {
    move_san: String,
    name: String,
    kind: String,
    priority: i64,
    branches: String,
}

impl From<MoveRow> for MoveRecord {
    fn from(r: MoveRow) -> Self {
        Self {
            move_san: r.move_san,
            name: r.name,
            kind: r.kind,
            priority: r.priority,
            branches: Branches::from_encoded(r.branches),
        }
    }
}

/// SQLite implementation of [`OpeningRepository`].
pub struct SqliteOpeningRepository {
    db: Database,
}

impl SqliteOpeningRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl OpeningRepository for SqliteOpeningRepository {
    async fn save_entry(&self, entry: &OpeningEntry) -> Result<(), PersistenceError> {
        let position = &entry.position;

        // Rolled back on drop if any statement below fails.
        let mut tx = self.db.pool().begin().await?;

        let upsert = sqlx::query(
            r#"
            INSERT INTO positions (fen, san, name_ko, name_en, eval, "desc")
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (fen) DO UPDATE SET
                san = excluded.san,
                name_ko = excluded.name_ko,
                name_en = excluded.name_en,
                eval = excluded.eval,
                "desc" = excluded."desc"
            "#,
        )
        .bind(&position.fen)
        .bind(&position.san)
        .bind(&position.name_ko)
        .bind(&position.name_en);
        let upsert = match &position.eval {
            EvalScore::Integer(value) => upsert.bind(*value),
            EvalScore::Number(value) => upsert.bind(*value),
            EvalScore::Text(text) => upsert.bind(text),
        };
        upsert.bind(&position.desc).execute(&mut *tx).await?;

        sqlx::query("DELETE FROM moves WHERE parent_fen = ?")
            .bind(&position.fen)
            .execute(&mut *tx)
            .await?;

        for mv in &entry.moves {
            sqlx::query(
                r#"
                INSERT INTO moves (parent_fen, move_san, name, type, priority, branches)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&position.fen)
            .bind(&mv.move_san)
            .bind(&mv.name)
            .bind(&mv.kind)
            .bind(mv.priority)
            .bind(mv.branches.as_encoded())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn load_position(&self, fen: &str) -> Result<Option<PositionRecord>, PersistenceError> {
        let row: Option<SqliteRow> = sqlx::query(
            r#"SELECT fen, san, name_ko, name_en, eval, "desc" FROM positions WHERE fen = ?"#,
        )
        .bind(fen)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(decode_position).transpose()
    }

    async fn list_moves(&self, fen: &str) -> Result<Vec<MoveRecord>, PersistenceError> {
        let rows: Vec<MoveRow> = sqlx::query_as(
            r#"
            SELECT move_san, name, type AS kind, priority, branches
            FROM moves
            WHERE parent_fen = ?
            ORDER BY priority ASC, rowid ASC
            "#,
        )
        .bind(fen)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.into_iter().map(MoveRecord::from).collect())
    }

    async fn modified_at(&self) -> Result<Option<SystemTime>, PersistenceError> {
        self.db.modified_at().await
    }
}

fn decode_position(row: &SqliteRow) -> Result<PositionRecord, PersistenceError> {
    Ok(PositionRecord {
        fen: row.try_get("fen")?,
        san: row.try_get("san")?,
        name_ko: row.try_get("name_ko")?,
        name_en: row.try_get("name_en")?,
        eval: decode_eval(row)?,
        desc: row.try_get("desc")?,
    })
}

/// The `eval` column is untyped; dispatch on the storage class of the value.
fn decode_eval(row: &SqliteRow) -> Result<EvalScore, PersistenceError> {
    let storage_class = row.try_get_raw("eval")?.type_info().name().to_string();
    match storage_class.as_str() {
        "REAL" => Ok(EvalScore::Number(row.try_get::<f64, _>("eval")?)),
        "INTEGER" => Ok(EvalScore::Integer(row.try_get::<i64, _>("eval")?)),
        "TEXT" => Ok(EvalScore::Text(row.try_get::<String, _>("eval")?)),
        other => Err(PersistenceError::InvalidRecord(format!(
            "eval stored as {other}"
        ))),
    }
}
