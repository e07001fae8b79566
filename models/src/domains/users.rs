use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{Gender, UserRole};

/// Club member profile. `id` is the subject id issued by the identity provider.
///
/// The lifetime counters are a cache over the match history and are only
/// brought back in line by an explicit recompute.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub gender: Gender,
    pub role: UserRole,
    pub is_enabled: bool,
    pub total_points: i64,
    pub total_matches: i64,
    pub won_matches: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
