use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::application::ApplicationRow;

/// Fields of an application the client controls; ids and timestamps belong
/// to the store.
#[derive(Debug)]
pub struct ApplicationFields {
    pub company: String,
    pub role: String,
    pub status: String,
    pub applied_date: NaiveDate,
    pub link: Option<String>,
}

pub async fn insert_application(
    pool: &PgPool,
    fields: &ApplicationFields,
) -> Result<ApplicationRow, sqlx::Error> {
    let row = sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications (id, company, role, status, applied_date, link)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&fields.company)
    .bind(&fields.role)
    .bind(&fields.status)
    .bind(fields.applied_date)
    .bind(&fields.link)
    .fetch_one(pool)
    .await?;

    info!("Inserted application {} ({})", row.id, row.company);
    Ok(row)
}

/// Returns every application, newest submission first.
pub async fn list_applications(pool: &PgPool) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    Ok(sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?)
}

/// Replaces the client-controlled fields of an application.
/// Returns `None` when no row has the given id.
pub async fn update_application(
    pool: &PgPool,
    id: Uuid,
    fields: &ApplicationFields,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    Ok(sqlx::query_as::<_, ApplicationRow>(
        r#"
        UPDATE applications
        SET company = $2, role = $3, status = $4, applied_date = $5, link = $6,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&fields.company)
    .bind(&fields.role)
    .bind(&fields.status)
    .bind(fields.applied_date)
    .bind(&fields.link)
    .fetch_optional(pool)
    .await?)
}

/// Returns whether a row was actually removed.
pub async fn delete_application(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM applications WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        info!("Deleted application {id}");
    }
    Ok(deleted)
}
