pub mod builder;
pub mod visual_editor;
