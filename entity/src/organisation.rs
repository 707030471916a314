use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organisation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub org_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_organisation::Entity")]
    UserOrganisation,
}

impl Related<super::user_organisation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserOrganisation.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_organisation::Relation::User.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::user_organisation::Relation::Organisation.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
