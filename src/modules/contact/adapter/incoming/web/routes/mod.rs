pub mod admin_contact_messages;
pub mod submit_contact_message;

pub use admin_contact_messages::{
    delete_contact_message_handler, get_contact_messages_handler,
    update_contact_message_handler, UpdateContactMessageRequest,
};
pub use submit_contact_message::{submit_contact_message_handler, SubmitContactMessageRequest};
