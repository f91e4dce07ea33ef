//! Shared helpers for the integration tests.

#![allow(dead_code)]

use page_builder::builder::{ComponentType, Editor, EditorEvent, InstanceId};

/// Drags a palette entry onto the canvas the way the UI does and returns
/// the id of the placed instance.
pub fn drop_component(editor: &mut Editor, type_token: &str) -> Option<InstanceId> {
    let before = editor.canvas().ids();
    editor.handle(EditorEvent::DragStart(type_token.to_string()));
    editor.handle(EditorEvent::DragOver);
    editor.handle(EditorEvent::Drop);
    editor.handle(EditorEvent::DragEnd);
    editor
        .canvas()
        .ids()
        .into_iter()
        .find(|id| !before.contains(id))
}

pub fn selected_count(editor: &Editor) -> usize {
    editor
        .canvas()
        .iter()
        .filter(|instance| editor.is_selected(instance.id()))
        .count()
}

pub fn component_type(index: usize) -> ComponentType {
    ComponentType::ALL[index % ComponentType::ALL.len()]
}
