//! Contact command - submits the contact form.

use crate::{
    core::ContactForm,
    entities::Subject,
    errors::{Error, Result},
    shell::ShellData,
};

/// `contact <name>|<email>|<subject>|<message>`
///
/// # Errors
/// Returns an error only for failures other than form validation.
pub fn submit(data: &mut ShellData, args: &str) -> Result<String> {
    let fields: Vec<&str> = args.splitn(4, '|').collect();
    let [name, email, subject, message] = fields.as_slice() else {
        let subjects: Vec<&str> = Subject::ALL.iter().map(|s| s.as_str()).collect();
        return Ok(format!(
            "❌ Usage: contact <name>|<email>|<subject>|<message>\nSubjects: {}",
            subjects.join(", ")
        ));
    };

    let form = ContactForm {
        name: (*name).to_string(),
        email: (*email).to_string(),
        subject: (*subject).to_string(),
        message: (*message).to_string(),
    };

    match data.contact.submit(form) {
        Ok(inquiry) => Ok(format!(
            "✅ Thanks {}! Your message about \"{}\" was received. We'll reply to {} soon.",
            inquiry.name, inquiry.subject, inquiry.email
        )),
        Err(e @ Error::InvalidInquiry { .. }) => Ok(format!("❌ {e}")),
        Err(e) => Err(e),
    }
}
