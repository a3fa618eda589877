use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price_per_day: Decimal,
    pub available: bool,
    /// Order currently holding the car. Not a foreign key, the order table
    /// already references the car.
    pub current_order_id: Option<i32>,
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
