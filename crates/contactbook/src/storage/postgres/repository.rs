//! PostgreSQL repository implementation.
//!
//! Implements `ContactRepository` from `contactbook_core::storage` on a `sqlx` pool.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use contactbook_core::contact::{Contact, ContactPayload};
use contactbook_core::storage::{ContactRepository, RepositoryError, Result};

use super::error::map_sqlx_error;
use super::schema;

use crate::config::Config;

type ContactRow = (i64, String, String);

fn row_to_contact((id, name, email): ContactRow) -> Contact {
    Contact { id, name, email }
}

/// PostgreSQL-based repository implementation.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Debug, Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    /// Opens the connection pool described by `config` and ensures the schema exists.
    pub async fn connect(config: &Config) -> Result<Self> {
        let url = config
            .postgres_url
            .as_deref()
            .ok_or_else(|| RepositoryError::ConnectionFailed("POSTGRES_URL is not set".into()))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect(url)
            .await
            .map_err(map_sqlx_error)?;

        let repo = Self::from_pool(pool);
        repo.migrate().await?;

        Ok(repo)
    }

    /// Wraps an already opened pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs the schema statement to create the contacts table.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(schema::CREATE_TABLES)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    /// Closes the pool, waiting for borrowed connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn create_contact(&self, payload: &ContactPayload) -> Result<i64> {
        let (id,) = sqlx::query_as::<_, (i64,)>(schema::INSERT_CONTACT)
            .bind(&payload.name)
            .bind(&payload.email)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        tracing::debug!(contact_id = id, "Inserted contact row");

        Ok(id)
    }

    async fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
        let row = sqlx::query_as::<_, ContactRow>(schema::SELECT_CONTACT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(row_to_contact))
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        let rows = sqlx::query_as::<_, ContactRow>(schema::SELECT_ALL_CONTACTS)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(row_to_contact).collect())
    }

    async fn update_contact(&self, id: i64, payload: &ContactPayload) -> Result<u64> {
        let result = sqlx::query(schema::UPDATE_CONTACT)
            .bind(id)
            .bind(&payload.name)
            .bind(&payload.email)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete_contact(&self, id: i64) -> Result<u64> {
        let result = sqlx::query(schema::DELETE_CONTACT)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query(schema::PING)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
