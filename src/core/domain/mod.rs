//! Domain types.

mod api_key;
mod ordinal;

pub use api_key::ApiKey;
pub use ordinal::Ordinal;
