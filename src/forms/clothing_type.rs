use std::collections::HashMap;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::clothing_type::NewClothingType;

fn no_negative_overrides(pricing: &HashMap<i32, Option<i64>>) -> Result<(), ValidationError> {
    if pricing.values().any(|price| price.is_some_and(|p| p < 0)) {
        return Err(ValidationError::new("negative_override"));
    }
    Ok(())
}

#[derive(Deserialize, Validate)]
/// Payload shared by clothing type create and update. Pricing maps a
/// service id to an optional per-type override; a null value means the
/// service base price applies.
pub struct SaveClothingTypeForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = no_negative_overrides))]
    pub pricing: HashMap<i32, Option<i64>>,
}

impl From<&SaveClothingTypeForm> for NewClothingType {
    fn from(form: &SaveClothingTypeForm) -> Self {
        NewClothingType::new(form.name.clone(), form.pricing.clone())
    }
}
