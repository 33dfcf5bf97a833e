//! Create restaurant_pizzas table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_restaurants::Restaurants;
use super::m20240101_000002_create_pizzas::Pizzas;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RestaurantPizzas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RestaurantPizzas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RestaurantPizzas::Price)
                            .integer()
                            .not_null()
                            .check(Expr::col(RestaurantPizzas::Price).gt(0)),
                    )
                    .col(ColumnDef::new(RestaurantPizzas::PizzaId).integer().not_null())
                    .col(
                        ColumnDef::new(RestaurantPizzas::RestaurantId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_pizzas_pizza")
                            .from(RestaurantPizzas::Table, RestaurantPizzas::PizzaId)
                            .to(Pizzas::Table, Pizzas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_pizzas_restaurant")
                            .from(RestaurantPizzas::Table, RestaurantPizzas::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_restaurant_pizzas_restaurant")
                    .table(RestaurantPizzas::Table)
                    .col(RestaurantPizzas::RestaurantId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RestaurantPizzas::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum RestaurantPizzas {
    Table,
    Id,
    Price,
    PizzaId,
    RestaurantId,
}
