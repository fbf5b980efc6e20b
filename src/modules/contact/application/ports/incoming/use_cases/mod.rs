pub mod manage_contact_messages;
pub mod submit_contact_message;

pub use manage_contact_messages::{ContactMessagesError, ManageContactMessagesUseCase};
pub use submit_contact_message::{
    SubmitContactMessageCommand, SubmitContactMessageError, SubmitContactMessageUseCase,
};
