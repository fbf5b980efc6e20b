use async_trait::async_trait;
use email_address::EmailAddress;

use crate::contact::domain::entities::ContactMessage;
use crate::shared::validation::{check_length, ValidationErrors};

const NAME_MAX: usize = 100;
const MESSAGE_MIN: usize = 10;
const MESSAGE_MAX: usize = 5000;

//
// ──────────────────────────────────────────────────────────
// Submit Contact Message Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SubmitContactMessageCommand {
    name: String,
    email: String,
    message: String,
}

impl SubmitContactMessageCommand {
    /// Trims every field and reports all failing fields at once.
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ValidationErrors> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        let mut errors = ValidationErrors::new();
        check_length(&mut errors, "name", name, 1, NAME_MAX);
        if email.is_empty() {
            errors.add("email", "email is required");
        } else if !EmailAddress::is_valid(email) {
            errors.add("email", "email is not a valid address");
        }
        check_length(&mut errors, "message", message, MESSAGE_MIN, MESSAGE_MAX);
        errors.into_result()?;

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitContactMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<ContactMessage, SubmitContactMessageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_command_is_trimmed() {
        let command =
            SubmitContactMessageCommand::new("  Ada ", " ada@example.com ", "  Hello there, Ada here ")
                .unwrap();

        assert_eq!(command.name(), "Ada");
        assert_eq!(command.email(), "ada@example.com");
        assert_eq!(command.message(), "Hello there, Ada here");
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let errors = SubmitContactMessageCommand::new("", "not-an-email", "short").unwrap_err();

        assert!(errors.has("name"));
        assert!(errors.has("email"));
        assert!(errors.has("message"));
        assert_eq!(errors.fields().len(), 3);
    }

    #[test]
    fn test_length_bounds() {
        let long_name = "n".repeat(101);
        let errors =
            SubmitContactMessageCommand::new(&long_name, "a@b.co", "exactly10!").unwrap_err();
        assert!(errors.has("name"));
        assert!(!errors.has("message"));

        let long_message = "m".repeat(5001);
        let errors = SubmitContactMessageCommand::new("Ada", "a@b.co", &long_message).unwrap_err();
        assert_eq!(errors.fields().len(), 1);
        assert!(errors.has("message"));

        assert!(SubmitContactMessageCommand::new("A", "a@b.co", &"m".repeat(5000)).is_ok());
    }
}
