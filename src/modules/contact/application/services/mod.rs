pub mod manage_contact_messages_service;
pub mod submit_contact_message_service;

pub use manage_contact_messages_service::ManageContactMessagesService;
pub use submit_contact_message_service::SubmitContactMessageService;
