pub mod form_or_json;

pub use form_or_json::FormOrJson;
