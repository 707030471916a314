use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

pub const NOT_AUTHENTICATED_DETAIL: &str = "Authentication credentials were not provided.";

#[derive(Debug, Error)]
pub enum AppError {
    // endpoint-level responses with fixed bodies
    #[error("validation error on {field}: {message}")]
    Validation { field: String, message: String },
    #[error("registration unsuccessful")]
    RegistrationFailed,
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error("authentication credentials were not provided")]
    NotAuthenticated,
    #[error("token not valid")]
    InvalidToken,
    #[error("organisation not found")]
    OrganisationNotFound,
    #[error("user not added to organisation")]
    NotModified,

    // standard web stuffs
    #[error("already exists")]
    AlreadyExists,
    #[error("not found")]
    NotFound,
    #[error("bad request: {0}")]
    BadRequest(String),

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct FieldError<'a> {
    field: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct ValidationBody<'a> {
    errors: [FieldError<'a>; 1],
}

#[derive(Serialize)]
struct StatusBody<'a> {
    status: &'a str,
    message: &'a str,
    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
}

#[derive(Serialize)]
struct DetailBody<'a> {
    detail: &'a str,
    code: &'a str,
}

impl AppError {
    fn from_db(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    fn status_body(&self) -> StatusBody<'static> {
        let (status, message, status_code) = match self {
            Self::RegistrationFailed => ("Bad request", "Registration unsuccessful", None),
            Self::AuthenticationFailed => ("Bad request", "Authentication failed", Some(401)),
            Self::OrganisationNotFound => ("failed", "Organisation not found", None),
            Self::NotModified => ("failed", "User NOT added to organisation", None),
            Self::AlreadyExists => ("failed", "Already exists", None),
            Self::NotFound => ("failed", "Not found", None),
            Self::BadRequest(_) => ("Bad request", "Client error", None),
            _ => ("error", "Internal server error", None),
        };
        StatusBody { status, message, status_code }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::RegistrationFailed | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::AuthenticationFailed | Self::NotAuthenticated | Self::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::OrganisationNotFound | Self::NotFound => StatusCode::NOT_FOUND,
            Self::NotModified => StatusCode::NOT_MODIFIED,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut res = HttpResponse::build(self.status_code());
        match self {
            Self::Validation { field, message } => res.json(ValidationBody {
                errors: [FieldError { field, message }],
            }),
            Self::NotAuthenticated => res.json(DetailBody {
                detail: NOT_AUTHENTICATED_DETAIL,
                code: "not_authenticated",
            }),
            Self::InvalidToken => res.json(DetailBody {
                detail: NOT_AUTHENTICATED_DETAIL,
                code: "token_not_valid",
            }),
            _ => res.json(self.status_body()),
        }
    }
}
