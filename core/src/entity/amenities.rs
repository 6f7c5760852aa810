use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "amenities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub service: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::amenities_tickets::Entity")]
    AmenitiesTickets,
}

impl Related<super::amenities_tickets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AmenitiesTickets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
