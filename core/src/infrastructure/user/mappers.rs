use crate::{domain::user::entities::User, entity::users};

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            role_id: model.role_id,
            email: model.email,
            firstname: model.firstname,
            lastname: model.lastname,
            office_id: model.office_id,
            birthdate: model.birthdate,
            active: model.active,
        }
    }
}
