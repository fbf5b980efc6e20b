pub mod entities;
pub mod slug;
