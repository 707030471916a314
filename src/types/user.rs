use crate::types::validation::FieldErrors;
use entity::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Public projection of a user. The password hash never leaves the db layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<&UserModel> for UserView {
    fn from(user: &UserModel) -> Self {
        UserView {
            user_id: user.user_id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
        }
    }
}

/// Insert payload for the db layer; the password is already hashed.
#[derive(Debug, Clone)]
pub struct DBUserCreate {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// Validated registration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

const REQUIRED: &str = "This field is required.";
const BLANK: &str = "This field may not be blank.";
const NULL: &str = "This field may not be null.";
const NOT_A_STRING: &str = "Not a valid string.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

/// `(rust field, wire field, blank allowed)` in declaration order. Error
/// reporting depends on this order.
const REGISTRATION_FIELDS: [(&str, &str, bool); 5] = [
    ("first_name", "firstName", false),
    ("last_name", "lastName", false),
    ("email", "email", false),
    ("password", "password", false),
    ("phone", "phone", true),
];

#[derive(Debug, Default, Validate)]
pub struct RegisterRequest {
    #[validate(
        required(message = "This field is required."),
        length(max = 60, message = "Ensure this field has no more than 60 characters.")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "This field is required."),
        length(max = 60, message = "Ensure this field has no more than 60 characters.")
    )]
    pub last_name: Option<String>,
    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address."),
        length(max = 60, message = "Ensure this field has no more than 60 characters.")
    )]
    pub email: Option<String>,
    #[validate(required(message = "This field is required."))]
    pub password: Option<String>,
    #[validate(length(max = 15, message = "Ensure this field has no more than 15 characters."))]
    pub phone: Option<String>,
}

impl RegisterRequest {
    /// Coerces a parsed body into typed fields, then runs the field
    /// validators. Type and blank checks happen during coercion so each field
    /// reports at most one kind of problem first.
    pub fn validate_payload(payload: &Value) -> Result<Registration, FieldErrors> {
        let mut errors = FieldErrors::default();

        let Value::Object(map) = payload else {
            errors.push(
                "non_field_errors",
                format!("Invalid data. Expected a dictionary, but got {}.", json_type_name(payload)),
            );
            return Err(errors);
        };

        let mut request = RegisterRequest::default();
        for (rust_name, wire_name, allow_blank) in REGISTRATION_FIELDS {
            let value = match coerce_field(map, wire_name, allow_blank) {
                Ok(value) => value,
                Err(message) => {
                    errors.push(wire_name, message);
                    continue;
                }
            };
            match rust_name {
                "first_name" => request.first_name = value,
                "last_name" => request.last_name = value,
                "email" => request.email = value,
                "password" => request.password = value,
                _ => request.phone = value,
            }
        }

        // validator's `email` rule takes single-label domains like `a@b`
        if let Some(email) = request.email.as_deref() {
            if !has_qualified_domain(email) {
                errors.push("email", INVALID_EMAIL);
            }
        }

        if let Err(validation) = request.validate() {
            let fields: Vec<(&str, &str)> = REGISTRATION_FIELDS
                .iter()
                .map(|(rust_name, wire_name, _)| (*rust_name, *wire_name))
                .collect();
            errors.absorb(&validation, &fields);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        match request {
            RegisterRequest {
                first_name: Some(first_name),
                last_name: Some(last_name),
                email: Some(email),
                password: Some(password),
                phone,
            } => Ok(Registration { first_name, last_name, email, password, phone }),
            _ => {
                // unreachable once required() has passed
                errors.push("non_field_errors", REQUIRED);
                Err(errors)
            }
        }
    }
}

/// Reads one field the way a DRF `CharField` would: trims strings,
/// stringifies numbers, rejects null and non-scalar values.
fn coerce_field(map: &Map<String, Value>, key: &str, allow_blank: bool) -> Result<Option<String>, &'static str> {
    let text = match map.get(key) {
        None => return Ok(None),
        Some(Value::Null) => return Err(NULL),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => return Err(NOT_A_STRING),
    };
    if text.is_empty() && !allow_blank {
        return Err(BLANK);
    }
    Ok(Some(text))
}

fn has_qualified_domain(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if domain.eq_ignore_ascii_case("localhost") {
        return true;
    }
    match domain.rsplit_once('.') {
        Some((head, tld)) => !head.is_empty() && tld.len() >= 2,
        None => false,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Lower-cases the domain part of an address, leaving the local part intact.
pub fn normalize_email(email: &str) -> String {
    match email.trim().rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.trim().to_string(),
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// `None` when either field is missing or not a string; the caller treats
    /// that as bad credentials.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        serde_json::from_value(payload.clone()).ok()
    }
}
