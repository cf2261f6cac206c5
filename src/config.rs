use std::time::Duration;

use secrecy::Secret;
use serde::Deserialize;

use crate::domain::email_address::{EmailAddress, Mailbox};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub contact: ContactSettings,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub authorization_token: Secret<String>,
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

/// Who contact-form emails come from and which inbox receives them.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSettings {
    pub sender_name: String,
    pub sender_email: String,
    pub recipient_email: String,
}

impl ContactSettings {
    pub fn sender(&self) -> Result<Mailbox, String> {
        let address = EmailAddress::try_from(self.sender_email.clone())?;
        Ok(Mailbox::new(self.sender_name.clone(), address))
    }

    pub fn recipient(&self) -> Result<EmailAddress, String> {
        EmailAddress::try_from(self.recipient_email.clone())
    }
}

/// The possible runtime environments for the application.
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

/// Layers `configuration/base.yaml`, the environment file picked by `APP_ENVIRONMENT`,
/// `APP_`-prefixed variables and finally `RESEND_API_KEY`.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(e.to_string()))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option(
            "email_client.authorization_token",
            std::env::var("RESEND_API_KEY").ok(),
        )?
        .build()?;

    settings.try_deserialize::<Settings>()
}
