//! Department database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Department;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: String,
    /// Optimistic concurrency token
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee::Entity")]
    Employees,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Department {
    fn from(model: Model) -> Self {
        Department {
            id: model.id,
            name: model.name,
            location: model.location,
            version: model.version,
        }
    }
}
