use sea_orm::{ActiveValue::Set, Order};

use crate::{
    domain::schedule::{
        entities::{Aircraft, Schedule},
        sort::{SortDirection, SortField},
    },
    entity::{aircrafts, schedules},
};

impl From<schedules::Model> for Schedule {
    fn from(model: schedules::Model) -> Self {
        Self {
            id: model.id,
            flight_number: model.flight_number,
            date: model.date,
            time: model.time,
            route_id: model.route_id,
            aircraft_id: model.aircraft_id,
            economy_price: model.economy_price,
            confirmed: model.confirmed,
        }
    }
}

impl From<Schedule> for schedules::ActiveModel {
    fn from(schedule: Schedule) -> Self {
        Self {
            id: Set(schedule.id),
            date: Set(schedule.date),
            time: Set(schedule.time),
            aircraft_id: Set(schedule.aircraft_id),
            route_id: Set(schedule.route_id),
            economy_price: Set(schedule.economy_price),
            confirmed: Set(schedule.confirmed),
            flight_number: Set(schedule.flight_number),
        }
    }
}

impl From<aircrafts::Model> for Aircraft {
    fn from(model: aircrafts::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            make_model: model.make_model,
            total_seats: model.total_seats,
            economy_seats: model.economy_seats,
            business_seats: model.business_seats,
        }
    }
}

pub fn sort_column(field: SortField) -> schedules::Column {
    match field {
        SortField::Date => schedules::Column::Date,
        SortField::EconomyPrice => schedules::Column::EconomyPrice,
        SortField::Confirmed => schedules::Column::Confirmed,
    }
}

pub fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}
