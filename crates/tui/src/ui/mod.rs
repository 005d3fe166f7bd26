//! UI layer: components, layout root, runtime, theme and pointer routing.

pub mod components;
pub mod main_component;
pub mod pointer;
pub mod runtime;
pub mod theme;
