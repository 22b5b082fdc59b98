use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::NewCustomer;

#[derive(Deserialize, Validate)]
pub struct AddCustomerForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(email)]
    pub email: Option<String>,
    pub address: Option<String>,
}

impl From<&AddCustomerForm> for NewCustomer {
    fn from(form: &AddCustomerForm) -> Self {
        NewCustomer::new(
            form.name.clone(),
            form.phone.clone(),
            form.email.clone(),
            form.address.clone(),
        )
    }
}
