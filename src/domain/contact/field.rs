use derive_more::Display;

/// Text a visitor must fill in: present and not blank.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", _0)]
pub struct RequiredField(String);

impl TryFrom<String> for RequiredField {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err("field is empty".into());
        }

        Ok(Self(value))
    }
}

impl AsRef<str> for RequiredField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Blank optional text is treated the same as a missing value.
pub fn optional_field(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
