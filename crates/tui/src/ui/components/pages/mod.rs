mod data_privacy_component;
mod placeholder_component;

pub use data_privacy_component::{DataPrivacyComponent, REQUIRED_FIELD_ERROR, required_error};
pub use placeholder_component::PlaceholderComponent;
