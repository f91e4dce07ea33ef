pub mod component;
pub mod property_editor;

pub use component::VisualEditor;
