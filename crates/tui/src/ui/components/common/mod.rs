pub mod input_field;
pub mod text_input;

pub use input_field::{InputField, InputFieldProps, InputKind, TextField, render_input_field};
pub use text_input::TextInputState;
