//! Repository for the `prompts` table.

use moodboard_core::types::{DbId, ImageId};
use sqlx::PgPool;

use crate::models::prompt::{CreatePrompt, Prompt, PromptRow, UpdatePrompt};

/// Column list for prompts queries, aliased to domain names.
const COLUMNS: &str = "serial_nos AS serial_no, sno AS image_id, \
    image_prompts AS text, prompt_feedback AS feedback";

/// Advisory lock key held while a prompt insert resyncs the serial sequence.
const SERIAL_LOCK_KEY: i64 = 0x6d6f_6f64_0001;

/// Point reads, point updates, and inserts for prompts. Prompts are never
/// deleted.
pub struct PromptRepo;

impl PromptRepo {
    /// List all prompts for an image, ordered by serial number ascending.
    pub async fn list_for_image(
        pool: &PgPool,
        image_id: ImageId,
    ) -> Result<Vec<Prompt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompts
             WHERE sno = $1
             ORDER BY serial_nos ASC"
        );
        sqlx::query_as::<_, PromptRow>(&query)
            .bind(image_id)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(Prompt::try_from)
            .collect()
    }

    /// Find a prompt by its serial number.
    pub async fn find_by_id(
        pool: &PgPool,
        serial_no: DbId,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE serial_nos = $1");
        sqlx::query_as::<_, PromptRow>(&query)
            .bind(serial_no)
            .fetch_optional(pool)
            .await?
            .map(Prompt::try_from)
            .transpose()
    }

    /// Rewrite text and feedback of an existing prompt in one statement.
    ///
    /// Never inserts. Returns the number of rows affected (0 when the
    /// serial number matches nothing).
    pub async fn update(
        pool: &PgPool,
        serial_no: DbId,
        input: &UpdatePrompt,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE prompts
             SET image_prompts = $1, prompt_feedback = $2
             WHERE serial_nos = $3",
        )
        .bind(&input.text)
        .bind(input.feedback.as_str())
        .bind(serial_no)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Insert a new prompt with `GOOD` feedback. The serial number is
    /// assigned by the database. Returns the created row.
    ///
    /// Rows imported with explicit serial numbers leave the sequence behind,
    /// so it is moved past the current maximum first. Concurrent adds are
    /// serialized on a transaction-scoped advisory lock.
    pub async fn create(pool: &PgPool, input: &CreatePrompt) -> Result<Prompt, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SERIAL_LOCK_KEY)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('prompts', 'serial_nos'), \
                    COALESCE(MAX(serial_nos), 0) + 1, false) \
             FROM prompts",
        )
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "INSERT INTO prompts (sno, image_prompts, prompt_feedback)
             VALUES ($1, $2, 'GOOD')
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PromptRow>(&query)
            .bind(input.image_id)
            .bind(&input.text)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Prompt::try_from(row)
    }
}
