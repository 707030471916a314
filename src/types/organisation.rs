use entity::organisation::Model as OrganisationModel;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationView {
    pub org_id: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<&OrganisationModel> for OrganisationView {
    fn from(org: &OrganisationModel) -> Self {
        OrganisationView {
            org_id: org.org_id.clone(),
            name: org.name.clone(),
            description: org.description.clone(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct OrganisationList {
    pub organisations: Vec<OrganisationView>,
}

#[derive(Debug, Clone)]
pub struct DBOrganisationCreate {
    pub name: String,
    pub description: Option<String>,
}

/// `POST /api/organisations` body. Both fields are optional; non-string
/// values are ignored.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ROrganisationCreate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ROrganisationCreate {
    pub fn from_payload(payload: &Value) -> Self {
        let text = |key: &str| payload.get(key).and_then(Value::as_str).map(str::to_string);
        ROrganisationCreate {
            name: text("name"),
            description: text("description"),
        }
    }

    /// Missing or blank names fall back to `"<first name>'s Organisation"`.
    pub fn into_create(self, first_name: &str) -> DBOrganisationCreate {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| default_organisation_name(first_name));
        DBOrganisationCreate { name, description: self.description }
    }
}

pub fn default_organisation_name(first_name: &str) -> String {
    format!("{first_name}'s Organisation")
}

/// `POST /api/organisations/{orgId}/users` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ROrganisationAddUser {
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_defaults_to_owner_first_name() {
        let create = ROrganisationCreate::from_payload(&json!({})).into_create("Jane");
        assert_eq!(create.name, "Jane's Organisation");
        assert_eq!(create.description, None);

        let blank = ROrganisationCreate::from_payload(&json!({"name": "  "})).into_create("Jane");
        assert_eq!(blank.name, "Jane's Organisation");
    }

    #[test]
    fn explicit_name_and_description_are_kept() {
        let create = ROrganisationCreate::from_payload(&json!({"name": "Acme", "description": "tools"}))
            .into_create("Jane");
        assert_eq!(create.name, "Acme");
        assert_eq!(create.description.as_deref(), Some("tools"));
    }

    #[test]
    fn view_uses_camel_case_keys() {
        let view = OrganisationView { org_id: "org-abcde".into(), name: "Acme".into(), description: None };
        let value = serde_json::to_value(view).unwrap();
        assert_eq!(value["orgId"], "org-abcde");
        assert!(value["description"].is_null());
    }
}
