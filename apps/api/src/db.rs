use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Schema DDL, one statement per entry (Postgres rejects multi-statement prepares).
/// Every statement is `IF NOT EXISTS`, so applying the schema twice is a no-op.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id            BIGSERIAL PRIMARY KEY,
        username      VARCHAR(150) NOT NULL UNIQUE,
        email         VARCHAR(150) NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at    TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS interviews (
        id          BIGSERIAL PRIMARY KEY,
        user_id     BIGINT NOT NULL REFERENCES users (id),
        job_role    VARCHAR(100) NOT NULL,
        stage       VARCHAR(20) NOT NULL DEFAULT 'HR'
                    CHECK (stage IN ('HR', 'Behavioral', 'Technical')),
        total_score DOUBLE PRECISION NOT NULL DEFAULT 0.0,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS answers (
        id            BIGSERIAL PRIMARY KEY,
        interview_id  BIGINT NOT NULL REFERENCES interviews (id),
        question      TEXT NOT NULL,
        answer_text   TEXT NOT NULL,
        score         DOUBLE PRECISION NOT NULL,
        feedback      TEXT NOT NULL,
        star_detected TEXT NOT NULL,
        stage         VARCHAR(20) NOT NULL
                      CHECK (stage IN ('HR', 'Behavioral', 'Technical')),
        created_at    TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_interviews_user_id ON interviews (user_id)",
    "CREATE INDEX IF NOT EXISTS idx_answers_interview_id ON answers (interview_id)",
];

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
