use dioxus::prelude::*;
use super::component::send_event;
use crate::builder::{Control, ControlKind, Editor, EditorEvent, ImageUpload, InstanceId};

/// One labeled row of the property panel.
#[component]
pub fn PropertyControl(instance_id: InstanceId, control: Control) -> Element {
    let editor = use_context::<Signal<Editor>>();
    let property = control.property;
    let value = control.value.clone();

    // Live controls write through on every keystroke
    let edit = move |value: String| {
        send_event(
            editor,
            EditorEvent::Edit {
                instance: instance_id,
                property,
                value,
            },
        )
    };

    let input = match control.kind {
        ControlKind::Text => rsx! {
            input {
                r#type: "text",
                class: "property-input",
                value: "{value}",
                oninput: move |e| edit(e.value()),
            }
        },
        ControlKind::MultiLine { rows } => rsx! {
            textarea {
                class: "property-input",
                rows: "{rows}",
                value: "{value}",
                oninput: move |e| edit(e.value()),
            }
        },
        ControlKind::Color { .. } => rsx! {
            input {
                r#type: "color",
                class: "property-input",
                value: "{value}",
                oninput: move |e| edit(e.value()),
            }
        },
        ControlKind::Number => rsx! {
            input {
                r#type: "number",
                class: "property-input",
                value: "{value}",
                oninput: move |e| edit(e.value()),
            }
        },
        ControlKind::Choice(options) => rsx! {
            select {
                class: "property-input",
                onchange: move |e| edit(e.value()),
                for choice in options.iter() {
                    option {
                        value: "{choice.value}",
                        selected: choice.value == value,
                        "{choice.label}"
                    }
                }
            }
        },
        ControlKind::ImageUrl => rsx! {
            input {
                r#type: "text",
                id: "image-url-input",
                class: "property-input",
                value: "{value}",
                oninput: move |e| send_event(editor, EditorEvent::EditImageUrl {
                    instance: instance_id,
                    value: e.value(),
                }),
            }
            button {
                class: "apply-url-btn",
                style: "margin-top: 4px; cursor: pointer;",
                onclick: move |_| send_event(editor, EditorEvent::ApplyImageUrl(instance_id)),
                "Apply URL"
            }
        },
        ControlKind::FilePicker { accept, preview } => rsx! {
            input {
                r#type: "file",
                class: "image-upload",
                accept: "{accept}",
                onchange: move |e| upload_image(editor, instance_id, e),
            }
            div {
                class: "image-preview-container",
                style: "margin-top: 12px; display: flex; flex-direction: column;",
                label { "Image Preview" }
                img {
                    class: "image-preview",
                    src: "{preview}",
                    alt: "Preview",
                    style: "max-width: 100%; border: 1px solid #ddd;",
                }
            }
        },
    };

    rsx! {
        div {
            class: "property-control",
            style: "display:flex;flex-direction:column;padding-inline:12px;margin-bottom:12px;",
            label { "{control.label}" }
            {input}
        }
    }
}

/// Reads the first picked file off the event loop and hands the bytes back
/// as an `ImageLoaded` event. The read outlives this control, so moving the
/// selection mid-read still lands the image; the editor drops it if the
/// instance is gone.
fn upload_image(editor: Signal<Editor>, instance: InstanceId, evt: FormEvent) {
    let Some(engine) = evt.files() else {
        return;
    };
    let Some(file_name) = engine.files().into_iter().next() else {
        return;
    };

    let task = spawn_forever(async move {
        match engine.read_file(&file_name).await {
            Some(bytes) => send_event(
                editor,
                EditorEvent::ImageLoaded(ImageUpload {
                    instance,
                    file_name,
                    bytes,
                }),
            ),
            None => tracing::warn!(file = %file_name, "could not read picked image"),
        }
    });
    if task.is_none() {
        tracing::warn!(%instance, "no runtime to read picked image on");
    }
}
