pub mod field;

use self::field::RequiredField;

/// One contact-form payload, alive for the duration of a single request.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: RequiredField,
    pub email: RequiredField,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: RequiredField,
}

impl ContactSubmission {
    /// `Nuevo mensaje de contacto de {name}`, with ` - {subject}` appended when one was given.
    pub fn subject_line(&self) -> String {
        match &self.subject {
            Some(subject) => format!("Nuevo mensaje de contacto de {} - {}", self.name, subject),
            None => format!("Nuevo mensaje de contacto de {}", self.name),
        }
    }
}
