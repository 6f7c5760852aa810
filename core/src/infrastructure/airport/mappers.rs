use crate::{domain::airport::entities::Airport, entity::airports};

impl From<airports::Model> for Airport {
    fn from(model: airports::Model) -> Self {
        Self {
            id: model.id,
            country_id: model.country_id,
            iata_code: model.iata_code,
            name: model.name,
        }
    }
}
