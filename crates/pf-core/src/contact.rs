//! Contact form payload
//!
//! Builds the request body for the form-collection endpoint. Sending it is up
//! to the host.

use url::form_urlencoded;

use crate::error::ContactError;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Values entered by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Where submissions go and which field ids they map to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEndpoint {
    pub form_id: String,
    pub name_entry: String,
    pub email_entry: String,
    pub message_entry: String,
}

impl Default for ContactEndpoint {
    fn default() -> Self {
        Self {
            form_id: "1FAIpQLSdlSe516OWIK0t9A-3PBpN6TU8YJh3QRGHamS5HXvuEJkUVLw".to_string(),
            name_entry: "entry.1406986934".to_string(),
            email_entry: "entry.654459799".to_string(),
            message_entry: "entry.846955755".to_string(),
        }
    }
}

impl ContactEndpoint {
    pub fn endpoint_url(&self) -> String {
        format!("https://docs.google.com/forms/d/e/{}/formResponse", self.form_id)
    }
}

/// Ready-to-send POST request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub url: String,
    pub content_type: &'static str,
    pub body: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validate and encode the form for `endpoint`
    pub fn submission(&self, endpoint: &ContactEndpoint) -> Result<ContactSubmission, ContactError> {
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        let message = required("message", &self.message)?;

        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair(&endpoint.name_entry, name)
            .append_pair(&endpoint.email_entry, email)
            .append_pair(&endpoint.message_entry, message)
            .finish();

        Ok(ContactSubmission {
            url: endpoint.endpoint_url(),
            content_type: FORM_CONTENT_TYPE,
            body,
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ContactError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ContactError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}
