use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub time: Time,
    pub aircraft_id: i32,
    pub route_id: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub economy_price: Decimal,
    pub confirmed: bool,
    pub flight_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aircrafts::Entity",
        from = "Column::AircraftId",
        to = "super::aircrafts::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Aircrafts,
    #[sea_orm(
        belongs_to = "super::routes::Entity",
        from = "Column::RouteId",
        to = "super::routes::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Routes,
    #[sea_orm(has_many = "super::tickets::Entity")]
    Tickets,
}

impl Related<super::aircrafts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aircrafts.def()
    }
}

impl Related<super::routes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Routes.def()
    }
}

impl Related<super::tickets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tickets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
