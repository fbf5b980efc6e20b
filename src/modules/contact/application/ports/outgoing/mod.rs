pub mod contact_message_repository;

pub use contact_message_repository::{ContactMessageRepository, ContactRepositoryError};

#[cfg(test)]
pub use contact_message_repository::MockContactMessageRepository;
