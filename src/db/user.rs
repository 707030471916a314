use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, user::DBUserCreate};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, SqlErr,
};

/// Inserts a user row on any connection, so registration can run it inside
/// its transaction.
pub(crate) async fn insert_user<C: ConnectionTrait>(
    conn: &C,
    payload: DBUserCreate,
) -> Result<UserModel, AppError> {
    let now = Utc::now();
    let am = UserActive {
        user_id: Set(payload.user_id),
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        email: Set(payload.email),
        phone: Set(payload.phone),
        password: Set(payload.password_hash),
        is_staff: Set(payload.is_staff),
        is_superuser: Set(payload.is_superuser),
        created_at: Set(now),
        updated_at: Set(now),
    };

    match am.insert(conn).await {
        Ok(user) => Ok(user),
        Err(err) => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::AlreadyExists),
            _ => Err(err.into()),
        },
    }
}

impl DatabaseService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id.to_string())
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }
}
