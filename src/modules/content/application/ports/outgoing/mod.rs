mod content_query;

pub use content_query::{ContentQuery, ContentQueryError};

#[cfg(test)]
pub use content_query::MockContentQuery;
