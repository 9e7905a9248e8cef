//! Contact form business logic.
//!
//! Validates contact form submissions and keeps accepted inquiries in a
//! session-local inbox. Nothing is sent anywhere; the inbox lives as long as
//! the [`ContactDesk`] that owns it.

use crate::{
    entities::{Inquiry, Subject},
    errors::{Error, Result},
};
use chrono::Utc;
use tracing::info;

/// Raw contact form fields as typed by the visitor.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    /// Sender's name
    pub name: String,
    /// Sender's email address
    pub email: String,
    /// Subject selector value (e.g., "support")
    pub subject: String,
    /// Message body
    pub message: String,
}

/// Accepts contact form submissions.
#[derive(Debug, Default)]
pub struct ContactDesk {
    inbox: Vec<Inquiry>,
}

impl ContactDesk {
    /// Creates a desk with an empty inbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a submission, returning the stored inquiry.
    ///
    /// Fields are trimmed before validation.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The name or message is empty
    /// - The email is not of the form `local@domain.tld`
    /// - The subject is not one of the form's options
    pub fn submit(&mut self, form: ContactForm) -> Result<&Inquiry> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInquiry {
                field: "name",
                reason: "cannot be empty".to_string(),
            });
        }

        let email = form.email.trim();
        if !is_plausible_email(email) {
            return Err(Error::InvalidInquiry {
                field: "email",
                reason: format!("'{email}' is not a valid email address"),
            });
        }

        let subject: Subject = form.subject.parse().map_err(|()| Error::InvalidInquiry {
            field: "subject",
            reason: format!("'{}' is not a known subject", form.subject.trim()),
        })?;

        let message = form.message.trim();
        if message.is_empty() {
            return Err(Error::InvalidInquiry {
                field: "message",
                reason: "cannot be empty".to_string(),
            });
        }

        let inquiry = Inquiry {
            name: name.to_string(),
            email: email.to_string(),
            subject,
            message: message.to_string(),
            received_at: Utc::now(),
        };
        info!(subject = subject.as_str(), "Contact inquiry received");

        self.inbox.push(inquiry);
        let stored = self.inbox.len() - 1;
        Ok(&self.inbox[stored])
    }

    /// Accepted inquiries, oldest first.
    #[must_use]
    pub fn inquiries(&self) -> &[Inquiry] {
        &self.inbox
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_submit_valid_inquiry() {
        let mut desk = ContactDesk::new();
        let before = Utc::now();
        let inquiry = desk
            .submit(form(
                "  Asha ",
                "asha@example.com",
                "support",
                "My fern is drooping.",
            ))
            .unwrap()
            .clone();

        assert_eq!(inquiry.name, "Asha");
        assert_eq!(inquiry.subject, Subject::Support);
        assert!(inquiry.received_at >= before);
        assert_eq!(desk.inquiries().len(), 1);
        assert_eq!(desk.inquiries()[0], inquiry);
    }

    #[test]
    fn test_submit_rejects_bad_fields() {
        let mut desk = ContactDesk::new();

        let result = desk.submit(form("", "a@b.co", "order", "hi"));
        assert!(matches!(result, Err(Error::InvalidInquiry { field: "name", .. })));

        for email in ["", "no-at-sign", "@example.com", "a@nodot", "a@b@c.com", "a b@c.com", "a@.com"] {
            let result = desk.submit(form("Sam", email, "order", "hi"));
            assert!(
                matches!(result, Err(Error::InvalidInquiry { field: "email", .. })),
                "accepted {email:?}"
            );
        }

        let result = desk.submit(form("Sam", "sam@example.com", "complaint", "hi"));
        assert!(matches!(result, Err(Error::InvalidInquiry { field: "subject", .. })));

        let result = desk.submit(form("Sam", "sam@example.com", "other", "   "));
        assert!(matches!(result, Err(Error::InvalidInquiry { field: "message", .. })));

        assert!(desk.inquiries().is_empty());
    }

    #[test]
    fn test_subject_parsing_is_case_insensitive() {
        let mut desk = ContactDesk::new();
        let inquiry = desk
            .submit(form("Lee", "lee@shop.in", " Wholesale ", "Bulk pricing?"))
            .unwrap();
        assert_eq!(inquiry.subject, Subject::Wholesale);
        assert_eq!(inquiry.subject.to_string(), "Wholesale inquiry");
    }
}
