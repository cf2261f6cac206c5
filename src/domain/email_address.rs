use derive_more::Display;
use validator::validate_email;

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", _0)]
pub struct EmailAddress(String);

impl TryFrom<String> for EmailAddress {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if validate_email(&value) {
            Ok(Self(value))
        } else {
            Err(format!("{value:?} is not a valid email address"))
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An address with a display name, rendered as `Name <address>`.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{} <{}>", name, address)]
pub struct Mailbox {
    name: String,
    address: EmailAddress,
}

impl Mailbox {
    pub fn new(name: impl Into<String>, address: EmailAddress) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}
