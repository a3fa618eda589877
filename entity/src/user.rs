use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub username: String,
    /// Argon2id PHC string, never the plaintext password.
    pub password_hash: String,
    /// `USER` or `ADMIN`.
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rental_order::Entity")]
    RentalOrder,
}

impl Related<super::rental_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RentalOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
