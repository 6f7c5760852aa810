use std::sync::Arc;

use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    survey::{
        ports::SurveyRepository,
        value_objects::{SurveyField, SurveyGroupStats},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresSurveyRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresSurveyRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct GroupRow {
    value: Option<String>,
    q1: i64,
    q2: i64,
    q3: i64,
    q4: i64,
    count: i64,
}

impl SurveyRepository for PostgresSurveyRepository {
    async fn stats_by_field(&self, field: SurveyField) -> Result<Vec<SurveyGroupStats>, CoreError> {
        // The column comes from a closed enum, never from user input.
        let column = field.column();
        let stmt = Statement::from_string(
            DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT
                  {column}::text AS value,
                  COALESCE(SUM(q1), 0)::bigint AS q1,
                  COALESCE(SUM(q2), 0)::bigint AS q2,
                  COALESCE(SUM(q3), 0)::bigint AS q3,
                  COALESCE(SUM(q4), 0)::bigint AS q4,
                  COUNT(q1) AS count
                FROM survey
                GROUP BY {column}
                ORDER BY {column} NULLS LAST
                "#
            ),
        );

        let rows = GroupRow::find_by_statement(stmt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to aggregate survey by {}: {}", column, e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(rows
            .into_iter()
            .map(|row| SurveyGroupStats {
                value: row.value,
                q1: row.q1,
                q2: row.q2,
                q3: row.q3,
                q4: row.q4,
                count: row.count,
            })
            .collect())
    }
}
