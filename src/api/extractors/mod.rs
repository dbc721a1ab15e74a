//! Custom request extractors.

mod user_id;
mod validated_query;

pub use user_id::UserIdPath;
pub use validated_query::ValidatedQuery;
