use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251019_000001_create_user_table::User, m20251019_000002_create_car_table::Car};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RentalOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(RentalOrder::Id))
                    .col(integer_null(RentalOrder::UserId))
                    .col(integer_null(RentalOrder::CarId))
                    .col(date(RentalOrder::StartDate))
                    .col(date(RentalOrder::EndDate))
                    .col(decimal_len(RentalOrder::TotalPrice, 10, 2))
                    .col(string_len(RentalOrder::Status, 16))
                    .col(
                        timestamp_with_time_zone(RentalOrder::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_order_user_id")
                            .from(RentalOrder::Table, RentalOrder::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_order_car_id")
                            .from(RentalOrder::Table, RentalOrder::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rental_order_user_id")
                    .table(RentalOrder::Table)
                    .col(RentalOrder::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RentalOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RentalOrder {
    Table,
    Id,
    UserId,
    CarId,
    StartDate,
    EndDate,
    TotalPrice,
    Status,
    CreatedAt,
}
