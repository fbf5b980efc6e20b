pub mod collection;
pub mod record_rules;

pub use collection::ContentCollection;
pub use record_rules::AdminRecord;
