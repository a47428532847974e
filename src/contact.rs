use std::{fmt, future::Future};

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{config::RelayConfig, data::PROFILE};

pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const VALIDATION_MESSAGE: &str = "Please fill required fields.";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully.";
pub const FAILURE_MESSAGE: &str = "Failed to send. Try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field is empty: {0}")]
    MissingField(Field),
    #[error("relay is not configured, missing {}", .0.join(", "))]
    Unconfigured(Vec<&'static str>),
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("relay rejected the message with status {0}")]
    Rejected(http::StatusCode),
}

impl ContactError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ContactError::MissingField(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Required fields are name, email and message. Only emptiness is checked.
    pub fn validate(&self) -> Result<(), ContactError> {
        [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map_or(Ok(()), |(field, _)| Err(ContactError::MissingField(field)))
    }

    fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nSubject: {}\nMessage: {}",
            self.name.trim(),
            self.email.trim(),
            self.subject.trim(),
            self.message.trim()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
    pub to_email: String,
}

/// Request body understood by the relay's send endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayPayload {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl RelayPayload {
    pub fn new(config: &RelayConfig, form: &ContactForm) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                from_name: form.name.trim().to_string(),
                from_email: form.email.trim().to_string(),
                subject: form.subject.trim().to_string(),
                message: form.body(),
                to_name: PROFILE.name.to_string(),
                to_email: PROFILE.email.to_string(),
            },
        }
    }
}

/// The third-party service that turns a payload into an e-mail.
pub trait EmailRelay {
    fn send(&self, payload: &RelayPayload) -> impl Future<Output = Result<(), ContactError>> + Send;
}

/// Validates, then issues exactly one relay call. Invalid forms and missing
/// configuration never reach the relay.
pub async fn submit<R: EmailRelay>(
    relay: &R,
    config: &RelayConfig,
    form: &ContactForm,
) -> Result<(), ContactError> {
    form.validate()?;
    let missing = config.missing();
    if !missing.is_empty() {
        return Err(ContactError::Unconfigured(missing));
    }
    relay.send(&RelayPayload::new(config, form)).await
}

#[cfg(feature = "ssr")]
pub use relay::EmailJsRelay;

#[cfg(feature = "ssr")]
mod relay {
    use super::*;

    pub struct EmailJsRelay {
        client: reqwest::Client,
        endpoint: String,
    }

    impl EmailJsRelay {
        pub fn new(client: reqwest::Client) -> Self {
            Self {
                client,
                endpoint: RELAY_ENDPOINT.to_string(),
            }
        }

        pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
            self.endpoint = endpoint.into();
            self
        }
    }

    impl EmailRelay for EmailJsRelay {
        async fn send(&self, payload: &RelayPayload) -> Result<(), ContactError> {
            let response = self
                .client
                .post(&self.endpoint)
                .json(payload)
                .send()
                .await
                .map_err(|e| ContactError::Transport(e.to_string()))?;
            let status = response.status();
            if status.is_success() {
                Ok(())
            } else {
                Err(ContactError::Rejected(status))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Invalid,
    Sent,
    Failed,
}

impl ContactStatus {
    pub fn from_result(result: &Result<(), ContactError>) -> Self {
        match result {
            Ok(()) => ContactStatus::Sent,
            Err(e) if e.is_validation() => ContactStatus::Invalid,
            Err(_) => ContactStatus::Failed,
        }
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            ContactStatus::Idle | ContactStatus::Sending => None,
            ContactStatus::Invalid => Some(VALIDATION_MESSAGE),
            ContactStatus::Sent => Some(SUCCESS_MESSAGE),
            ContactStatus::Failed => Some(FAILURE_MESSAGE),
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, ContactStatus::Invalid | ContactStatus::Failed)
    }
}

/// A transient status message that clears itself after `lifetime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    status: ContactStatus,
    posted_at: DateTime<Utc>,
    lifetime: TimeDelta,
}

impl Notice {
    pub fn new(status: ContactStatus, posted_at: DateTime<Utc>, lifetime: TimeDelta) -> Self {
        Self {
            status,
            posted_at,
            lifetime,
        }
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    pub fn current(&self, now: DateTime<Utc>) -> Option<&'static str> {
        if now - self.posted_at >= self.lifetime {
            None
        } else {
            self.status.message()
        }
    }
}
