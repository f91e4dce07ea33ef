//! The property-driven page model: component registry, per-instance
//! property stores, selection, form generation and the update dispatcher,
//! tied together by [`Editor`].

pub mod canvas;
pub mod config;
pub mod dispatch;
pub mod editor;
pub mod error;
pub mod form;
pub mod properties;
pub mod registry;
pub mod render;
pub mod selection;
pub mod upload;

pub use canvas::{Canvas, Instance, InstanceId};
pub use config::{BuilderConfig, PaletteEntry};
pub use dispatch::Applied;
pub use editor::{DragState, Editor, EditorEvent, Panel};
pub use error::BuilderError;
pub use form::{ChoiceOption, Control, ControlKind, PropertyForm};
pub use properties::{Properties, Property, PropertyStore};
pub use registry::{ComponentType, ComponentTypeDefinition};
pub use render::{Hook, RenderNode};
pub use selection::Selection;
pub use upload::ImageUpload;
