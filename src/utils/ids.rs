use uuid::Uuid;

pub const ORG_ID_PREFIX: &str = "org-";
pub const ORG_ID_HEX_LEN: usize = 5;

pub fn generate_user_id() -> String {
    Uuid::new_v4().to_string()
}

/// `org-` followed by the first five hex digits of a v4 UUID.
///
/// Only 16^5 values exist, so callers must check for an existing id before
/// inserting (see `db::organisation::insert_organisation`).
pub fn generate_org_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{ORG_ID_PREFIX}{}", &hex[..ORG_ID_HEX_LEN])
}
