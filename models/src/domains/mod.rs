//! `SeaORM` entities for the club's persistent records.

pub mod matches;
pub mod sea_orm_active_enums;
pub mod users;
