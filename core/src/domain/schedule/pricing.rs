//! Cabin-class fares derived from the economy base price.

use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::domain::{common::entities::app_errors::CoreError, schedule::value_objects::CabinClass};

impl CabinClass {
    /// Business is 35% above economy; first is a further 30% above business.
    pub fn multiplier(self) -> Decimal {
        let business = Decimal::new(135, 2);
        match self {
            CabinClass::Economy => Decimal::ONE,
            CabinClass::Business => business,
            CabinClass::First => business * Decimal::new(130, 2),
        }
    }
}

/// Applies the cabin multiplier and truncates to whole currency units.
pub fn final_price(base_price: Decimal, cabin_class: CabinClass) -> Result<i64, CoreError> {
    base_price
        .checked_mul(cabin_class.multiplier())
        .map(|price| price.floor())
        .and_then(|price| price.to_i64())
        .ok_or_else(|| CoreError::validation(format!("price {base_price} is out of range")))
}
