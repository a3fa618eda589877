use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rental_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Cleared when the order is rejected.
    pub user_id: Option<i32>,
    /// Cleared when the order is rejected or the car is deleted.
    pub car_id: Option<i32>,
    pub start_date: Date,
    pub end_date: Date,
    pub total_price: Decimal,
    /// One of `PENDING`, `PAID`, `ACTIVE`, `COMPLETED`, `REJECTED`.
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::car::Entity",
        from = "Column::CarId",
        to = "super::car::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Car,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
