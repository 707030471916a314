use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, organisation::DBOrganisationCreate};
use crate::utils::ids::generate_org_id;
use chrono::Utc;
use entity::organisation::{
    ActiveModel as OrganisationActive, Entity as Organisation, Model as OrganisationModel,
};
use entity::user_organisation::{ActiveModel as MembershipActive, Entity as Membership};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use tracing::warn;

/// Fresh ids are drawn from a 16^5 space; redraw this many times on a hit.
const MAX_ORG_ID_ATTEMPTS: usize = 5;

pub(crate) async fn org_id_exists<C: ConnectionTrait>(conn: &C, org_id: &str) -> Result<bool, AppError> {
    Ok(Organisation::find_by_id(org_id.to_string()).count(conn).await? > 0)
}

pub(crate) async fn insert_organisation<C: ConnectionTrait>(
    conn: &C,
    payload: DBOrganisationCreate,
) -> Result<OrganisationModel, AppError> {
    let mut org_id = None;
    for _ in 0..MAX_ORG_ID_ATTEMPTS {
        let candidate = generate_org_id();
        if !org_id_exists(conn, &candidate).await? {
            org_id = Some(candidate);
            break;
        }
        warn!("organisation id {candidate} already taken, drawing another");
    }
    let org_id = org_id.ok_or_else(|| AppError::Internal("could not allocate an organisation id".into()))?;

    let now = Utc::now();
    let am = OrganisationActive {
        org_id: Set(org_id),
        name: Set(payload.name),
        description: Set(payload.description),
        created_at: Set(now),
        updated_at: Set(now),
    };
    match am.insert(conn).await {
        Ok(org) => Ok(org),
        Err(err) => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::AlreadyExists),
            _ => Err(err.into()),
        },
    }
}

pub(crate) async fn is_member<C: ConnectionTrait>(conn: &C, user_id: &str, org_id: &str) -> Result<bool, AppError> {
    Ok(Membership::find()
        .filter(entity::user_organisation::Column::UserId.eq(user_id))
        .filter(entity::user_organisation::Column::OrgId.eq(org_id))
        .count(conn)
        .await?
        > 0)
}

/// Links a user to an organisation. Linking an existing member is a no-op.
pub(crate) async fn add_member<C: ConnectionTrait>(conn: &C, user_id: &str, org_id: &str) -> Result<(), AppError> {
    if is_member(conn, user_id, org_id).await? {
        return Ok(());
    }
    let res = Membership::insert(MembershipActive {
        user_id: Set(user_id.to_string()),
        org_id: Set(org_id.to_string()),
        created_at: Set(Utc::now()),
    })
    .exec_without_returning(conn)
    .await;

    match res {
        Ok(_) => Ok(()),
        Err(err) => match err.sql_err() {
            // lost a race against the same insert
            Some(SqlErr::UniqueConstraintViolation(_)) => Ok(()),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                Err(AppError::BadRequest("Related record missing".to_string()))
            }
            _ => Err(err.into()),
        },
    }
}

/// Creates an organisation and makes `member_id` its first member.
pub(crate) async fn create_organisation_with_member<C: ConnectionTrait>(
    conn: &C,
    payload: DBOrganisationCreate,
    member_id: &str,
) -> Result<OrganisationModel, AppError> {
    let org = insert_organisation(conn, payload).await?;
    add_member(conn, member_id, &org.org_id).await?;
    Ok(org)
}

impl DatabaseService {
    pub async fn get_organisation(&self, org_id: &str) -> Result<OrganisationModel, AppError> {
        Ok(Organisation::find_by_id(org_id.to_string())
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Organisation not found".into()))?)
    }

    /// The organisation, but only when `user_id` is a member of it.
    pub async fn get_organisation_for_member(
        &self,
        user_id: &str,
        org_id: &str,
    ) -> Result<Option<OrganisationModel>, AppError> {
        if !is_member(&self.database_connection, user_id, org_id).await? {
            return Ok(None);
        }
        Ok(Organisation::find_by_id(org_id.to_string())
            .one(&self.database_connection)
            .await?)
    }

    pub async fn is_member(&self, user_id: &str, org_id: &str) -> Result<bool, AppError> {
        is_member(&self.database_connection, user_id, org_id).await
    }

    pub async fn list_organisations_for_user(&self, user_id: &str) -> Result<Vec<OrganisationModel>, AppError> {
        Ok(Organisation::find()
            .inner_join(Membership)
            .filter(entity::user_organisation::Column::UserId.eq(user_id))
            .order_by_asc(entity::organisation::Column::CreatedAt)
            .order_by_asc(entity::organisation::Column::OrgId)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn create_organisation_for_member(
        &self,
        payload: DBOrganisationCreate,
        member_id: &str,
    ) -> Result<OrganisationModel, AppError> {
        let txn = self.database_connection.begin().await?;
        let org = create_organisation_with_member(&txn, payload, member_id).await?;
        txn.commit().await?;
        Ok(org)
    }

    /// Both records must exist; membership is idempotent.
    pub async fn add_user_to_organisation(&self, org_id: &str, user_id: &str) -> Result<(), AppError> {
        self.get_organisation(org_id).await?;
        self.get_user_by_id(user_id).await?;
        add_member(&self.database_connection, user_id, org_id).await
    }
}
