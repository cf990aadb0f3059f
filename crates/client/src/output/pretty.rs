//! Pretty output formatting.

use contactbook_core::contact::{Contact, ContactMessage};

/// Format a contact for display.
pub fn format_contact(contact: &Contact) -> String {
    format!(
        "{}\n  ID: {}\n  Email: {}",
        contact.name, contact.id, contact.email
    )
}

/// Format contacts for display.
pub fn format_contacts(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }
    let mut output = format!("CONTACTS ({})\n", contacts.len());
    output.push_str(&"-".repeat(40));
    for contact in contacts {
        output.push_str(&format!("\n{}", format_contact(contact)));
        output.push('\n');
    }
    output
}

/// Format a mutation response for display.
pub fn format_message(message: &ContactMessage) -> String {
    format!("{} (ID: {})", message.message, message.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_contact() {
        let contact = Contact::new(1, "Ada", "ada@x.io");

        assert_eq!(format_contact(&contact), "Ada\n  ID: 1\n  Email: ada@x.io");
    }

    #[test]
    fn test_format_contacts_empty() {
        assert_eq!(format_contacts(&[]), "No contacts found.");
    }

    #[test]
    fn test_format_contacts_lists_each_contact() {
        let contacts = vec![
            Contact::new(1, "Ada", "ada@x.io"),
            Contact::new(2, "Alan", "alan@x.io"),
        ];

        let output = format_contacts(&contacts);

        assert!(output.starts_with("CONTACTS (2)"));
        assert!(output.contains("Ada\n  ID: 1"));
        assert!(output.contains("Alan\n  ID: 2"));
    }

    #[test]
    fn test_format_message() {
        let message = ContactMessage::new(4, "Contact created successfully");

        assert_eq!(
            format_message(&message),
            "Contact created successfully (ID: 4)"
        );
    }
}
