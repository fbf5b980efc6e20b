pub mod catalog;
pub mod ranking;
