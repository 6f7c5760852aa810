use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "routes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub departure_airport_id: i32,
    pub arrival_airport_id: i32,
    pub distance: i32,
    pub flight_time: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::airports::Entity",
        from = "Column::DepartureAirportId",
        to = "super::airports::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    DepartureAirport,
    #[sea_orm(
        belongs_to = "super::airports::Entity",
        from = "Column::ArrivalAirportId",
        to = "super::airports::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    ArrivalAirport,
    #[sea_orm(has_many = "super::schedules::Entity")]
    Schedules,
}

impl Related<super::schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
