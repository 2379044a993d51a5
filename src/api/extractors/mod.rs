//! Custom request extractors.

mod admin;
mod validated_json;

pub use admin::AdminUser;
pub use validated_json::ValidatedJson;
