mod selector_field_component;
mod state;
mod suggestion_engine;

pub use selector_field_component::SelectorFieldComponent;
pub use state::{SELECTOR_FIELD_NAME, SELECTOR_PLACEHOLDER, SelectorFieldState, SuggestionPopup};
pub use suggestion_engine::SuggestionEngine;
