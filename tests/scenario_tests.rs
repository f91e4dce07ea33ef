//! End-to-end editing scenarios driven through typed editor events.

mod common;

use common::drop_component;
use page_builder::builder::{
    registry, Applied, ComponentType, ControlKind, Editor, EditorEvent, Hook, Panel, Property,
    PropertyForm, Selection,
};
use pretty_assertions::assert_eq;

#[test]
fn button_background_edit_is_stored_and_rendered() {
    let mut editor = Editor::default();
    let id = drop_component(&mut editor, "button").unwrap();

    let props = editor.instance(id).unwrap().properties();
    assert_eq!(props.get("button-text"), Some("Click Me"));
    assert_eq!(props.get("bg-color"), Some("#4a6bff"));

    editor.handle(EditorEvent::ClickInstance(id));
    editor.handle(EditorEvent::Edit {
        instance: id,
        property: Property::BgColor,
        value: "#ff0000".into(),
    });

    let instance = editor.instance(id).unwrap();
    assert_eq!(instance.properties().get("bg-color"), Some("#ff0000"));
    let button = instance.rendered().unwrap().find(Hook::ButtonElement).unwrap();
    assert_eq!(button.style_value("background-color"), Some("#ff0000"));
    assert!(instance.markup().contains("background-color: #ff0000;"));
}

#[test]
fn text_selection_shows_only_text_controls() {
    let mut editor = Editor::default();
    let header = drop_component(&mut editor, "header").unwrap();
    let text = drop_component(&mut editor, "text").unwrap();

    assert_eq!(editor.canvas().ids(), vec![header, text]);
    let types: Vec<&str> = editor.canvas().iter().map(|i| i.type_id()).collect();
    assert_eq!(types, ["header", "text"]);

    editor.handle(EditorEvent::ClickInstance(text));
    let form = editor.panel().form().unwrap();
    assert_eq!(form.type_id, "text");
    let properties: Vec<Property> = form.controls.iter().map(|c| c.property).collect();
    assert_eq!(
        properties,
        [
            Property::BgColor,
            Property::Heading,
            Property::Paragraph,
            Property::TextAlign,
            Property::TextColor,
        ]
    );
    assert!(form.control(Property::LogoText).is_none());
}

#[test]
fn image_url_apply_updates_store_render_and_preview() {
    let url = "https://example.com/a.png";
    let mut editor = Editor::default();
    let id = drop_component(&mut editor, "image").unwrap();
    editor.handle(EditorEvent::ClickInstance(id));

    editor.handle(EditorEvent::EditImageUrl {
        instance: id,
        value: url.into(),
    });
    editor.handle(EditorEvent::ApplyImageUrl(id));

    let instance = editor.instance(id).unwrap();
    assert_eq!(instance.properties().get("src"), Some(url));
    let img = instance.rendered().unwrap().find(Hook::ImageContent).unwrap();
    assert_eq!(img.attr("src"), Some(url));
    assert_eq!(editor.panel().form().unwrap().preview(), Some(url));
}

#[test]
fn clicking_empty_canvas_clears_selection() {
    let mut editor = Editor::default();
    let id = drop_component(&mut editor, "section").unwrap();
    editor.handle(EditorEvent::ClickInstance(id));
    assert!(editor.is_selected(id));

    editor.handle(EditorEvent::ClickEmptyCanvas);

    assert_eq!(editor.selection(), Selection::None);
    assert_eq!(editor.panel(), &Panel::Placeholder);
    assert!(!editor.is_selected(id));
    assert_eq!(
        editor.config().placeholder_message,
        "Select a component to edit its properties"
    );
}

#[test]
fn edited_value_reappears_in_regenerated_form() {
    let mut editor = Editor::default();
    let id = drop_component(&mut editor, "header").unwrap();
    editor.edit(id, "menu-2", "Pricing".into());

    editor.handle(EditorEvent::ClickInstance(id));
    let form = editor.panel().form().unwrap();
    assert_eq!(form.control(Property::Menu2).unwrap().value, "Pricing");
    assert_eq!(
        editor.instance(id).unwrap().properties().get("menu-2"),
        Some("Pricing")
    );

    // A freshly rendered form agrees with the one in the panel.
    assert_eq!(&PropertyForm::render(editor.instance(id).unwrap()), form);
}

#[test]
fn unrecognized_property_is_stored_without_visual_change() {
    let mut editor = Editor::default();
    let id = drop_component(&mut editor, "section").unwrap();
    let before = editor.instance(id).unwrap().markup();

    let applied = editor.edit(id, "font-family", "serif".into());

    assert_eq!(applied, Some(Applied::StoredOnly));
    let instance = editor.instance(id).unwrap();
    assert_eq!(instance.properties().get("font-family"), Some("serif"));
    assert_eq!(instance.markup(), before);
    assert_eq!(instance.properties().to_json()["font-family"], "serif");
}

#[test]
fn delete_of_other_instance_keeps_selection() {
    let mut editor = Editor::default();
    let kept = drop_component(&mut editor, "button").unwrap();
    let removed = drop_component(&mut editor, "image").unwrap();
    editor.handle(EditorEvent::ClickInstance(kept));
    let panel = editor.panel().clone();

    editor.handle(EditorEvent::DeleteInstance(removed));

    assert!(editor.is_selected(kept));
    assert_eq!(editor.panel(), &panel);
    assert_eq!(editor.canvas().ids(), vec![kept]);
}

#[test]
fn stale_upload_after_delete_is_ignored() {
    let mut editor = Editor::default();
    let id = drop_component(&mut editor, "image").unwrap();
    let other = drop_component(&mut editor, "image").unwrap();
    editor.handle(EditorEvent::ClickInstance(id));
    editor.handle(EditorEvent::DeleteInstance(id));

    editor.handle(EditorEvent::ImageLoaded(page_builder::builder::ImageUpload {
        instance: id,
        file_name: "late.png".into(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }));

    assert_eq!(editor.canvas().ids(), vec![other]);
    assert_eq!(
        editor.instance(other).unwrap().properties().get("src"),
        Some("https://via.placeholder.com/800x400")
    );
    assert_eq!(editor.panel(), &Panel::Placeholder);
}

#[test]
fn registry_template_matches_freshly_dropped_markup() {
    let mut editor = Editor::default();
    for ty in ComponentType::ALL {
        let id = drop_component(&mut editor, ty.as_str()).unwrap();
        assert_eq!(
            editor.instance(id).unwrap().markup(),
            registry::lookup(ty.as_str()).template
        );
    }
}

#[test]
fn image_form_exposes_upload_picker() {
    let mut editor = Editor::default();
    let id = drop_component(&mut editor, "image").unwrap();
    editor.handle(EditorEvent::ClickInstance(id));

    let form = editor.panel().form().unwrap();
    let picker = form
        .controls
        .iter()
        .find(|c| matches!(c.kind, ControlKind::FilePicker { .. }))
        .unwrap();
    assert_eq!(picker.property, Property::Src);
    assert_eq!(
        picker.kind,
        ControlKind::FilePicker {
            accept: "image/*",
            preview: "https://via.placeholder.com/800x400".into(),
        }
    );
}
