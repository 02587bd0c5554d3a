//! `SeaORM` Entity for the journal entries table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "journal_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub verification_id: Uuid,
    /// Order of the line within its verification.
    pub position: i32,
    pub account: i32,
    pub debit: Decimal,
    pub credit: Decimal,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::verifications::Entity",
        from = "Column::VerificationId",
        to = "super::verifications::Column::Id"
    )]
    Verifications,
}

impl Related<super::verifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Verifications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
