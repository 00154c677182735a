//! SeaORM entity model used by the database storage backend.
//!
//! Maps to the `employees` table created by `database_storage`. Dates are kept
//! as `YYYY-MM-DD` text and the salary as integer cents, for portability.

use sea_orm::entity::prelude::*;

/// Employees table entity model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Auto-increment row id
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    pub department: String,
    pub salary_cents: i64,
    /// `YYYY-MM-DD`
    pub hire_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
