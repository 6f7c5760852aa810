use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub schedule_id: i32,
    pub cabin_type_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub passport_number: Option<String>,
    pub passport_country_id: Option<i32>,
    pub booking_reference: String,
    pub confirmed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schedules::Entity",
        from = "Column::ScheduleId",
        to = "super::schedules::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Schedules,
    #[sea_orm(has_many = "super::amenities_tickets::Entity")]
    AmenitiesTickets,
}

impl Related<super::schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl Related<super::amenities_tickets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AmenitiesTickets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
