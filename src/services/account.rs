//! Registration and login.
//!
//! Registration is two explicit steps run in one transaction: insert the
//! user, then create the user's personal organisation and link them to it.

use crate::db::{database_service::DatabaseService, organisation, user};
use crate::types::error::AppError;
use crate::types::organisation::{default_organisation_name, DBOrganisationCreate};
use crate::types::token::AuthPayload;
use crate::types::user::{normalize_email, DBUserCreate, Registration, UserView};
use crate::utils::ids::generate_user_id;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::token::TokenService;
use entity::organisation::Model as OrganisationModel;
use entity::user::Model as UserModel;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Privileges {
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl Privileges {
    pub fn superuser() -> Self {
        Privileges { is_staff: true, is_superuser: true }
    }
}

/// Creates the user and their default organisation atomically.
pub async fn create_account(
    db: &DatabaseService,
    registration: Registration,
    privileges: Privileges,
) -> Result<(UserModel, OrganisationModel), AppError> {
    let email = normalize_email(&registration.email);
    if db.user_exists_by_email(&email).await? {
        return Err(AppError::AlreadyExists);
    }

    let password_hash = hash_password(&registration.password).map_err(|e| {
        error!("password hashing failed: {e}");
        AppError::Internal("password hashing failed".into())
    })?;

    let txn = db.begin().await?;

    let user = user::insert_user(
        &txn,
        DBUserCreate {
            user_id: generate_user_id(),
            first_name: registration.first_name,
            last_name: registration.last_name,
            email,
            phone: registration.phone,
            password_hash,
            is_staff: privileges.is_staff,
            is_superuser: privileges.is_superuser,
        },
    )
    .await?;

    let org = organisation::create_organisation_with_member(
        &txn,
        DBOrganisationCreate {
            name: default_organisation_name(&user.first_name),
            description: None,
        },
        &user.user_id,
    )
    .await?;

    txn.commit().await?;
    info!(user_id = %user.user_id, org_id = %org.org_id, "registered {}", user.full_name());
    Ok((user, org))
}

pub async fn register(
    db: &DatabaseService,
    tokens: &TokenService,
    registration: Registration,
) -> Result<AuthPayload<UserView>, AppError> {
    let (user, _) = create_account(db, registration, Privileges::default()).await?;
    let access_token = tokens.issue_access_token(&user.user_id)?;
    Ok(AuthPayload { access_token, user: UserView::from(&user) })
}

/// Every credential problem collapses to `AuthenticationFailed`.
pub async fn login(
    db: &DatabaseService,
    tokens: &TokenService,
    email: &str,
    password: &str,
) -> Result<AuthPayload<UserView>, AppError> {
    let user = match db.get_user_by_email(&normalize_email(email)).await {
        Ok(user) => user,
        Err(AppError::NotFound) => return Err(AppError::AuthenticationFailed),
        Err(e) => return Err(e),
    };

    match verify_password(password, &user.password) {
        Ok(true) => {}
        Ok(false) => return Err(AppError::AuthenticationFailed),
        Err(e) => {
            warn!(user_id = %user.user_id, "stored password hash unreadable: {e}");
            return Err(AppError::AuthenticationFailed);
        }
    }

    let access_token = tokens.issue_access_token(&user.user_id)?;
    Ok(AuthPayload { access_token, user: UserView::from(&user) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn registration(email: &str) -> Registration {
        Registration {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: email.into(),
            password: "password123".into(),
            phone: None,
        }
    }

    #[actix_web::test]
    async fn account_comes_with_a_personal_organisation() {
        let db = DatabaseService::in_memory().await.unwrap();
        let (user, org) = create_account(&db, registration("john@example.com"), Privileges::default())
            .await
            .unwrap();

        assert_eq!(org.name, "John's Organisation");
        assert!(db.is_member(&user.user_id, &org.org_id).await.unwrap());
        assert!(!user.is_staff);
    }

    #[actix_web::test]
    async fn duplicate_email_is_rejected_case_insensitively_on_domain() {
        let db = DatabaseService::in_memory().await.unwrap();
        create_account(&db, registration("john@example.com"), Privileges::default()).await.unwrap();

        let err = create_account(&db, registration("john@EXAMPLE.com"), Privileges::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists));
    }

    #[actix_web::test]
    async fn superuser_privileges_are_stored() {
        let db = DatabaseService::in_memory().await.unwrap();
        let (user, _) = create_account(&db, registration("root@example.com"), Privileges::superuser())
            .await
            .unwrap();
        assert!(user.is_staff && user.is_superuser);
    }

    #[actix_web::test]
    async fn login_checks_the_password() {
        let db = DatabaseService::in_memory().await.unwrap();
        let tokens = TokenService::new("secret", Duration::minutes(30));
        register(&db, &tokens, registration("john@example.com")).await.unwrap();

        let ok = login(&db, &tokens, "john@example.com", "password123").await.unwrap();
        assert_eq!(ok.user.email, "john@example.com");
        assert!(tokens.verify_access_token(&ok.access_token).is_ok());

        let bad = login(&db, &tokens, "john@example.com", "nope").await.unwrap_err();
        assert!(matches!(bad, AppError::AuthenticationFailed));

        let unknown = login(&db, &tokens, "ghost@example.com", "password123").await.unwrap_err();
        assert!(matches!(unknown, AppError::AuthenticationFailed));
    }
}
