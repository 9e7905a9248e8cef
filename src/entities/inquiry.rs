//! Contact inquiry entity - A message submitted through the contact form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Topics offered in the contact form's subject selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    /// Question about my order
    Order,
    /// Product inquiry
    Product,
    /// Plant care support
    Support,
    /// Wholesale inquiry
    Wholesale,
    /// Other
    Other,
}

impl Subject {
    /// All subjects in the order the form lists them.
    pub const ALL: [Self; 5] = [
        Self::Order,
        Self::Product,
        Self::Support,
        Self::Wholesale,
        Self::Other,
    ];

    /// Form value for this subject.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Product => "product",
            Self::Support => "support",
            Self::Wholesale => "wholesale",
            Self::Other => "other",
        }
    }

    /// Label shown in the subject selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Order => "Question about my order",
            Self::Product => "Product inquiry",
            Self::Support => "Plant care support",
            Self::Wholesale => "Wholesale inquiry",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subject {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|subject| subject.as_str() == wanted)
            .ok_or(())
    }
}

/// A validated, accepted contact form submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    /// Sender's name
    pub name: String,
    /// Sender's email address
    pub email: String,
    /// Selected topic
    pub subject: Subject,
    /// Message body
    pub message: String,
    /// When the inquiry was accepted
    pub received_at: DateTime<Utc>,
}
