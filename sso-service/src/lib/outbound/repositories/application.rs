use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::Application;
use crate::domain::auth::ports::ApplicationRepository;

pub struct PostgresApplicationRepository {
    pool: PgPool,
}

impl PostgresApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PostgresApplicationRepository {
    async fn find_by_id(&self, id: AppId) -> Result<Option<Application>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, secret
            FROM applications
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        Ok(row.map(|r| Application {
            id: AppId(r.get("id")),
            name: r.get("name"),
            secret: r.get("secret"),
        }))
    }
}
