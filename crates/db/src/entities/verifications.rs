//! `SeaORM` Entity for the verifications table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "verifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub verification_number: i64,
    pub description: String,
    pub verification_date: Date,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::journal_entries::Entity")]
    JournalEntries,
    #[sea_orm(has_many = "super::verification_metadata::Entity")]
    VerificationMetadata,
    #[sea_orm(has_many = "super::verification_files::Entity")]
    VerificationFiles,
}

impl Related<super::journal_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JournalEntries.def()
    }
}

impl Related<super::verification_metadata::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VerificationMetadata.def()
    }
}

impl Related<super::verification_files::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VerificationFiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
