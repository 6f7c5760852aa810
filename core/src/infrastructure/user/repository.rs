use std::sync::Arc;

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, sea_query::Expr,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{
            entities::{User, UserSummary},
            ports::UserRepository,
        },
    },
    entity::users::{Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn fetch_users(&self) -> Result<Vec<UserSummary>, CoreError> {
        let users = Entity::find()
            .order_by_asc(Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch users: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(users
            .into_iter()
            .map(|model| UserSummary::from(User::from(model)))
            .collect())
    }

    async fn get_by_id(&self, user_id: i32) -> Result<Option<User>, CoreError> {
        let user = Entity::find_by_id(user_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get user: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(user.map(User::from))
    }

    async fn toggle_active(&self, user_id: i32) -> Result<Option<User>, CoreError> {
        let rows = Entity::update_many()
            .col_expr(Column::Active, Expr::col(Column::Active).not())
            .filter(Column::Id.eq(user_id))
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to toggle user activity: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(rows.into_iter().next().map(User::from))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, QueryTrait};

    use super::*;
    use crate::entity::users::Model;

    fn user_model(id: i32, active: bool) -> Model {
        Model {
            id,
            role_id: Some(2),
            email: format!("user{id}@amonic.com"),
            password: "secret".to_string(),
            firstname: "Karim".to_string(),
            lastname: "Omar".to_string(),
            office_id: Some(1),
            birthdate: None,
            active,
        }
    }

    #[test]
    fn toggle_negates_in_a_single_update() {
        let sql = Entity::update_many()
            .col_expr(Column::Active, Expr::col(Column::Active).not())
            .filter(Column::Id.eq(3))
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.starts_with(r#"UPDATE "users" SET "active" = NOT "active""#), "{sql}");
        assert!(sql.ends_with(r#"WHERE "users"."id" = 3"#), "{sql}");
    }

    #[tokio::test]
    async fn list_drops_passwords() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(1, true), user_model(2, false)]])
            .into_connection();
        let repository = PostgresUserRepository::new(Arc::new(db));

        let users = repository.fetch_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "user1@amonic.com");
        assert!(!users[1].active);
    }

    #[tokio::test]
    async fn toggle_returns_the_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(3, false)]])
            .append_query_results([Vec::<Model>::new()])
            .into_connection();
        let repository = PostgresUserRepository::new(Arc::new(db));

        let toggled = repository.toggle_active(3).await.unwrap();
        assert_eq!(toggled.map(|u| u.active), Some(false));

        assert_eq!(repository.toggle_active(4).await.unwrap(), None);
    }
}
