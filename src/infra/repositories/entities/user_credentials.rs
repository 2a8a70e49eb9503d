//! User credentials database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::UserCredentials;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_credentials")]
pub struct Model {
    #[sea_orm(column_type = "String(StringLen::N(25))", nullable)]
    pub firstname: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(25))", nullable)]
    pub lastname: Option<String>,
    pub dob: Option<Date>,
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_type = "String(StringLen::N(50))"
    )]
    pub email: String,
    #[sea_orm(column_type = "String(StringLen::N(15))", nullable, unique)]
    pub phone_number: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for UserCredentials {
    fn from(model: Model) -> Self {
        UserCredentials {
            email: model.email,
            firstname: model.firstname,
            lastname: model.lastname,
            dob: model.dob,
            phone_number: model.phone_number,
        }
    }
}
