use dioxus::prelude::*;
use super::property_editor::PropertyControl;
use crate::builder::{BuilderConfig, Editor, EditorEvent, InstanceId, PaletteEntry};

/// Forwards one UI event to the shared editor.
pub(crate) fn send_event(mut editor: Signal<Editor>, event: EditorEvent) {
    editor.write().handle(event);
}

#[component]
pub fn VisualEditor() -> Element {
    let config = try_use_context::<BuilderConfig>().unwrap_or_default();
    use_context_provider(move || Signal::new(Editor::new(config)));

    rsx! {
        div {
            class: "visual-editor",
            style: "display: flex; height: 100vh; font-family: system-ui;",

            div {
                class: "toolbox",
                style: "width: 220px; padding: 16px; border-right: 1px solid #ddd; background: #fafafa;",
                h2 { style: "margin: 0 0 16px 0; font-size: 18px;", "Components" }

                Palette {}

                div { style: "margin-top: 24px;",
                    h3 { style: "margin: 0 0 8px 0; font-size: 14px;", "Instructions" }
                    p { style: "font-size: 12px; color: #666; line-height: 1.4;",
                        "Drag components onto the canvas"
                        br {}
                        "Click a component to edit it"
                        br {}
                        "Click empty canvas to deselect"
                    }
                }
            }

            // Center - Canvas
            div {
                class: "canvas-wrapper",
                style: "flex: 1; background: #f0f0f0; overflow-y: auto; padding: 24px;",
                Canvas {}
            }

            // Right sidebar - Properties
            div {
                class: "properties",
                style: "width: 300px; border-left: 1px solid #ddd; overflow-y: auto;",
                PropertiesPanel {}
            }
        }
    }
}

#[component]
fn Palette() -> Element {
    let editor = use_context::<Signal<Editor>>();
    let (entries, dragging) = {
        let state = editor.read();
        (state.config().palette.clone(), state.drag().dragging.clone())
    };

    rsx! {
        div {
            class: "component-buttons",
            style: "display: flex; flex-direction: column; gap: 8px;",
            for entry in entries {
                PaletteItem {
                    key: "{entry.type_token}",
                    dragging: dragging.as_deref() == Some(entry.type_token.as_str()),
                    entry: entry.clone(),
                }
            }
        }
    }
}

#[component]
fn PaletteItem(entry: PaletteEntry, dragging: bool) -> Element {
    let editor = use_context::<Signal<Editor>>();
    let token = entry.type_token.clone();
    let opacity = if dragging { "0.5" } else { "1" };

    rsx! {
        div {
            class: "builder-component",
            draggable: "true",
            style: "padding: 10px 12px; background: white; border: 1px solid #ccc; border-radius: 4px; cursor: grab; opacity: {opacity};",
            ondragstart: move |_| send_event(editor, EditorEvent::DragStart(token.clone())),
            ondragend: move |_| send_event(editor, EditorEvent::DragEnd),
            "{entry.label}"
        }
    }
}

#[component]
fn Canvas() -> Element {
    let editor = use_context::<Signal<Editor>>();
    let (ids, hint, drop_active) = {
        let state = editor.read();
        (
            state.canvas().ids(),
            state.canvas_hint().map(str::to_string),
            state.drag().drop_active,
        )
    };
    let border = if drop_active { "2px dashed #4a6bff" } else { "2px dashed transparent" };

    rsx! {
        div {
            id: "canvas-area",
            class: "canvas",
            style: "min-height: 100%; background: white; border: {border}; padding: 16px; box-sizing: border-box;",
            ondragover: move |e| {
                e.prevent_default();
                if !editor.read().drag().drop_active {
                    send_event(editor, EditorEvent::DragOver);
                }
            },
            ondragleave: move |_| send_event(editor, EditorEvent::DragLeave),
            ondrop: move |e| {
                e.prevent_default();
                send_event(editor, EditorEvent::Drop);
            },
            onclick: move |_| send_event(editor, EditorEvent::ClickEmptyCanvas),

            if let Some(hint) = hint {
                p {
                    class: "canvas-default-message",
                    style: "color: #999; text-align: center; padding: 48px 0;",
                    // Only clicks on the canvas itself count as empty-canvas clicks
                    onclick: move |e| e.stop_propagation(),
                    "{hint}"
                }
            }

            for id in ids {
                InstanceView { key: "{id}", instance_id: id }
            }
        }
    }
}

#[component]
fn InstanceView(instance_id: InstanceId) -> Element {
    let editor = use_context::<Signal<Editor>>();
    let (markup, type_id, properties_json, is_selected) = {
        let state = editor.read();
        let Some(instance) = state.instance(instance_id) else {
            return rsx! {};
        };
        (
            instance.markup(),
            instance.type_id().to_string(),
            instance.properties().to_json().to_string(),
            state.is_selected(instance_id),
        )
    };

    let class = if is_selected { "canvas-element selected" } else { "canvas-element" };
    let outline = if is_selected { "2px solid #4a6bff" } else { "1px dashed #ccc" };

    rsx! {
        div {
            id: "{instance_id}",
            class: "{class}",
            "data-type": "{type_id}",
            "data-properties": "{properties_json}",
            style: "position: relative; margin: 8px 0; outline: {outline}; cursor: pointer;",
            onclick: move |e| {
                e.stop_propagation();
                send_event(editor, EditorEvent::ClickInstance(instance_id));
            },

            div { class: "element-content", dangerous_inner_html: "{markup}" }

            div {
                class: "element-actions",
                style: "position: absolute; top: 4px; right: 4px; display: flex; gap: 4px;",
                button {
                    class: "edit-btn",
                    title: "Edit",
                    onclick: move |e| {
                        e.stop_propagation();
                        send_event(editor, EditorEvent::ClickInstance(instance_id));
                    },
                    "Edit"
                }
                button {
                    class: "delete-btn",
                    title: "Delete",
                    style: "background: #f44336; color: white; border: none; border-radius: 4px; cursor: pointer;",
                    onclick: move |e| {
                        e.stop_propagation();
                        send_event(editor, EditorEvent::DeleteInstance(instance_id));
                    },
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn PropertiesPanel() -> Element {
    let editor = use_context::<Signal<Editor>>();
    let state = editor.read();

    let Some(form) = state.panel().form().cloned() else {
        let message = state.config().placeholder_message.clone();
        return rsx! {
            p {
                class: "properties-default-message",
                style: "color: slate; text-align: center; padding: 32px;",
                "{message}"
            }
        };
    };
    drop(state);
    let instance_id = form.instance;

    rsx! {
        div { class: "properties-panel",
            div { class: "property-group",
                h1 { style: "color:slate;text-align:center; margin: 24px 0 12px 0; font-size: 18px;", "{form.title}" }

                div {
                    class: "property-control",
                    style: "display:flex;flex-direction:column;padding-inline:12px;margin-bottom:12px;",
                    label { "Component Type" }
                    input { r#type: "text", value: "{form.type_id}", readonly: true }
                }

                for control in form.controls.iter().cloned() {
                    PropertyControl {
                        key: "{instance_id}-{control.label}",
                        instance_id,
                        control,
                    }
                }
            }

            div { style: "margin-top: 24px; padding-inline: 12px",
                button {
                    onclick: move |_| send_event(editor, EditorEvent::DeleteInstance(instance_id)),
                    style: "width: 100%; padding: 8px; cursor: pointer;
                            background: #f44336; color: white; border: none; border-radius: 4px;",
                    "Delete Component"
                }
            }
        }
    }
}
