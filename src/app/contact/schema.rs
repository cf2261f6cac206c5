use serde::{Deserialize, Serialize};

use crate::domain::contact::{
    field::{optional_field, RequiredField},
    ContactSubmission,
};

/// Every field is optional on the wire so that a missing value is reported as a
/// validation failure rather than a parse failure.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContactRequestBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl TryFrom<ContactRequestBody> for ContactSubmission {
    type Error = String;
    fn try_from(value: ContactRequestBody) -> Result<Self, Self::Error> {
        let name = required("name", value.name)?;
        let email = required("email", value.email)?;
        let message = required("message", value.message)?;
        Ok(Self {
            name,
            email,
            phone: optional_field(value.phone),
            subject: optional_field(value.subject),
            message,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<RequiredField, String> {
    RequiredField::try_from(value.unwrap_or_default()).map_err(|e| format!("{field}: {e}"))
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ContactResponseBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
