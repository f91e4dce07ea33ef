use super::canvas::{Canvas, Instance, InstanceId};
use super::config::BuilderConfig;
use super::dispatch::{self, Applied};
use super::form::PropertyForm;
use super::properties::Property;
use super::registry;
use super::selection::Selection;
use super::upload::ImageUpload;

/// What the property panel currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum Panel {
    Placeholder,
    Form(PropertyForm),
}

impl Panel {
    pub fn form(&self) -> Option<&PropertyForm> {
        match self {
            Panel::Form(form) => Some(form),
            Panel::Placeholder => None,
        }
    }

    fn form_for_mut(&mut self, id: InstanceId) -> Option<&mut PropertyForm> {
        match self {
            Panel::Form(form) if form.instance == id => Some(form),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    /// Palette token of the entry being dragged.
    pub dragging: Option<String>,
    /// The canvas has a drag hovering over it.
    pub drop_active: bool,
}

/// Input from the host UI.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorEvent {
    DragStart(String),
    DragEnd,
    DragOver,
    DragLeave,
    Drop,
    ClickInstance(InstanceId),
    ClickEmptyCanvas,
    DeleteInstance(InstanceId),
    Edit {
        instance: InstanceId,
        property: Property,
        value: String,
    },
    EditImageUrl {
        instance: InstanceId,
        value: String,
    },
    ApplyImageUrl(InstanceId),
    ImageLoaded(ImageUpload),
}

/// Application context for one builder session.
#[derive(Clone, Debug)]
pub struct Editor {
    config: BuilderConfig,
    canvas: Canvas,
    selection: Selection,
    panel: Panel,
    drag: DragState,
    hint_visible: bool,
    next_id: u64,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

impl Editor {
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            config,
            canvas: Canvas::default(),
            selection: Selection::default(),
            panel: Panel::Placeholder,
            drag: DragState::default(),
            hint_visible: true,
            next_id: 0,
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn instance(&self, id: InstanceId) -> Option<&Instance> {
        self.canvas.get(id)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_selected(&self, id: InstanceId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Hint shown on the canvas until the first component lands.
    pub fn canvas_hint(&self) -> Option<&str> {
        self.hint_visible.then_some(self.config.canvas_hint.as_str())
    }

    pub fn handle(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::DragStart(token) => self.drag.dragging = Some(token),
            EditorEvent::DragEnd => self.drag.dragging = None,
            EditorEvent::DragOver => self.drag.drop_active = true,
            EditorEvent::DragLeave => self.drag.drop_active = false,
            EditorEvent::Drop => {
                self.drag.drop_active = false;
                match self.drag.dragging.take() {
                    Some(token) => {
                        self.add_instance(&token);
                    }
                    None => tracing::debug!("drop without a dragged palette entry"),
                }
            }
            EditorEvent::ClickInstance(id) => {
                self.select_instance(id);
            }
            EditorEvent::ClickEmptyCanvas => self.click_empty_canvas(),
            EditorEvent::DeleteInstance(id) => {
                self.delete_instance(id);
            }
            EditorEvent::Edit {
                instance,
                property,
                value,
            } => {
                self.edit(instance, property.as_str(), value);
            }
            EditorEvent::EditImageUrl { instance, value } => self.edit_image_url(instance, value),
            EditorEvent::ApplyImageUrl(instance) => {
                self.apply_image_url(instance);
            }
            EditorEvent::ImageLoaded(upload) => {
                self.complete_upload(upload);
            }
        }
    }

    /// Places a new instance of `type_token` at the end of the canvas.
    ///
    /// Unknown tokens place nothing.
    pub fn add_instance(&mut self, type_token: &str) -> Option<InstanceId> {
        let definition = registry::lookup(type_token);
        if definition.is_empty() {
            tracing::warn!(type_token, "ignoring drop of unknown component type");
            return None;
        }

        let id = InstanceId(self.next_id);
        self.next_id += 1;
        self.canvas.push(Instance::from_definition(id, definition));
        self.hint_visible = false;
        tracing::debug!(instance = %id, type_token, "added instance");
        Some(id)
    }

    /// Selects `id` and shows its form. Ids not on the canvas are ignored.
    pub fn select_instance(&mut self, id: InstanceId) -> bool {
        let Some(instance) = self.canvas.get(id) else {
            tracing::debug!(instance = %id, "ignoring selection of missing instance");
            return false;
        };

        self.panel = Panel::Form(PropertyForm::render(instance));
        if let Some(previous) = self.selection.select(id) {
            tracing::debug!(instance = %id, previous = %previous, "selection moved");
        }
        true
    }

    pub fn click_empty_canvas(&mut self) {
        self.selection.clear();
        self.panel = Panel::Placeholder;
    }

    /// Removes `id` from the canvas; returns whether it was there.
    pub fn delete_instance(&mut self, id: InstanceId) -> bool {
        if self.canvas.remove(id).is_none() {
            return false;
        }
        if self.selection.forget(id) {
            self.panel = Panel::Placeholder;
        }
        tracing::debug!(instance = %id, "deleted instance");
        true
    }

    /// Routes an edit through the dispatcher and mirrors it into the open
    /// form. Returns `None` when the instance is gone.
    pub fn edit(&mut self, id: InstanceId, property: &str, value: String) -> Option<Applied> {
        let Some(instance) = self.canvas.get_mut(id) else {
            tracing::debug!(instance = %id, property, "ignoring edit of missing instance");
            return None;
        };

        let applied = dispatch::apply(instance, property, value);
        if let Applied::Rendered(key) = applied {
            if let (Some(form), Some(value)) = (
                self.panel.form_for_mut(id),
                instance.properties().field(key),
            ) {
                form.sync(key, value);
            }
        }
        Some(applied)
    }

    pub fn edit_image_url(&mut self, id: InstanceId, value: String) {
        if let Some(form) = self.panel.form_for_mut(id) {
            form.set_url_buffer(value);
        }
    }

    /// Commits the pending URL field of the open image form as `src`.
    pub fn apply_image_url(&mut self, id: InstanceId) -> Option<Applied> {
        let url = self.panel.form_for_mut(id)?.url_buffer()?.to_string();
        self.edit(id, Property::Src.as_str(), url)
    }

    /// Lands a finished file read. A read whose instance was deleted in the
    /// meantime is dropped.
    pub fn complete_upload(&mut self, upload: ImageUpload) -> bool {
        if !self.canvas.contains(upload.instance) {
            tracing::warn!(
                instance = %upload.instance,
                file = %upload.file_name,
                "discarding upload for deleted instance"
            );
            return false;
        }
        let data_url = upload.to_data_url();
        self.edit(upload.instance, Property::Src.as_str(), data_url).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::render::Hook;

    fn drag_and_drop(editor: &mut Editor, token: &str) {
        editor.handle(EditorEvent::DragStart(token.into()));
        editor.handle(EditorEvent::DragOver);
        editor.handle(EditorEvent::Drop);
        editor.handle(EditorEvent::DragEnd);
    }

    #[test]
    fn drop_places_dragged_type_and_hides_hint() {
        let mut editor = Editor::default();
        assert!(editor.canvas_hint().is_some());

        editor.handle(EditorEvent::DragStart("button".into()));
        editor.handle(EditorEvent::DragOver);
        assert!(editor.drag().drop_active);
        editor.handle(EditorEvent::Drop);

        assert!(!editor.drag().drop_active);
        assert_eq!(editor.drag().dragging, None);
        assert_eq!(editor.canvas().len(), 1);
        assert_eq!(editor.canvas_hint(), None);
        assert_eq!(editor.selection(), Selection::None);
    }

    #[test]
    fn drag_leave_clears_drop_highlight() {
        let mut editor = Editor::default();
        editor.handle(EditorEvent::DragOver);
        editor.handle(EditorEvent::DragLeave);
        assert!(!editor.drag().drop_active);
    }

    #[test]
    fn drop_without_drag_adds_nothing() {
        let mut editor = Editor::default();
        editor.handle(EditorEvent::Drop);
        assert!(editor.canvas().is_empty());
    }

    #[test]
    fn unknown_type_places_nothing() {
        let mut editor = Editor::default();
        drag_and_drop(&mut editor, "carousel");
        assert!(editor.canvas().is_empty());
        assert!(editor.canvas_hint().is_some());
        assert_eq!(editor.add_instance("carousel"), None);
    }

    #[test]
    fn ids_are_unique_even_after_delete() {
        let mut editor = Editor::default();
        let a = editor.add_instance("text").unwrap();
        editor.delete_instance(a);
        let b = editor.add_instance("text").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn selecting_missing_instance_is_ignored() {
        let mut editor = Editor::default();
        assert!(!editor.select_instance(InstanceId(42)));
        assert_eq!(editor.selection(), Selection::None);
        assert_eq!(editor.panel(), &Panel::Placeholder);
    }

    #[test]
    fn edit_refreshes_open_form() {
        let mut editor = Editor::default();
        let id = editor.add_instance("section").unwrap();
        editor.handle(EditorEvent::ClickInstance(id));
        editor.handle(EditorEvent::Edit {
            instance: id,
            property: Property::SectionTitle,
            value: "Pricing".into(),
        });

        let form = editor.panel().form().unwrap();
        assert_eq!(form.control(Property::SectionTitle).unwrap().value, "Pricing");
        let node = editor.instance(id).unwrap().rendered().unwrap();
        assert_eq!(node.find(Hook::SectionTitle).unwrap().text.as_deref(), Some("Pricing"));
    }

    #[test]
    fn edit_of_unselected_instance_leaves_panel_alone() {
        let mut editor = Editor::default();
        let shown = editor.add_instance("button").unwrap();
        let other = editor.add_instance("button").unwrap();
        editor.select_instance(shown);
        let before = editor.panel().clone();

        editor.edit(other, "button-text", "Buy".into());
        assert_eq!(editor.panel(), &before);
    }

    #[test]
    fn edit_of_missing_instance_is_none() {
        let mut editor = Editor::default();
        assert_eq!(editor.edit(InstanceId(9), "src", "x".into()), None);
    }

    #[test]
    fn url_field_applies_only_on_request() {
        let mut editor = Editor::default();
        let id = editor.add_instance("image").unwrap();
        editor.select_instance(id);

        editor.handle(EditorEvent::EditImageUrl {
            instance: id,
            value: "https://example.com/b.png".into(),
        });
        assert_eq!(
            editor.instance(id).unwrap().properties().get("src"),
            Some("https://via.placeholder.com/800x400")
        );

        editor.handle(EditorEvent::ApplyImageUrl(id));
        assert_eq!(
            editor.instance(id).unwrap().properties().get("src"),
            Some("https://example.com/b.png")
        );
    }

    #[test]
    fn upload_lands_as_data_url_and_updates_form() {
        let mut editor = Editor::default();
        let id = editor.add_instance("image").unwrap();
        editor.select_instance(id);

        editor.handle(EditorEvent::ImageLoaded(ImageUpload {
            instance: id,
            file_name: "pixel.png".into(),
            bytes: b"ab".to_vec(),
        }));

        let expected = "data:image/png;base64,YWI=";
        let instance = editor.instance(id).unwrap();
        assert_eq!(instance.properties().get("src"), Some(expected));
        let img = instance.rendered().unwrap().find(Hook::ImageContent).unwrap();
        assert_eq!(img.attr("src"), Some(expected));
        let form = editor.panel().form().unwrap();
        assert_eq!(form.preview(), Some(expected));
        assert_eq!(form.url_buffer(), Some(expected));
    }

    #[test]
    fn upload_lands_after_selection_moved_away() {
        let mut editor = Editor::default();
        let first = editor.add_instance("image").unwrap();
        let second = editor.add_instance("image").unwrap();
        editor.select_instance(first);
        editor.select_instance(second);

        let landed = editor.complete_upload(ImageUpload {
            instance: first,
            file_name: "late.gif".into(),
            bytes: b"ab".to_vec(),
        });
        assert!(landed);
        assert_eq!(
            editor.instance(first).unwrap().properties().get("src"),
            Some("data:image/gif;base64,YWI=")
        );
        let form = editor.panel().form().unwrap();
        assert_eq!(form.instance, second);
        assert_eq!(form.preview(), Some("https://via.placeholder.com/800x400"));

        editor.click_empty_canvas();
        assert!(editor.complete_upload(ImageUpload {
            instance: second,
            file_name: "later.png".into(),
            bytes: b"ab".to_vec(),
        }));
        assert_eq!(
            editor.instance(second).unwrap().properties().get("src"),
            Some("data:image/png;base64,YWI=")
        );
    }

    #[test]
    fn clearing_a_color_shows_its_fallback_in_the_open_form() {
        let mut editor = Editor::default();
        let id = editor.add_instance("header").unwrap();
        editor.select_instance(id);
        editor.handle(EditorEvent::Edit {
            instance: id,
            property: Property::TextColor,
            value: String::new(),
        });

        assert_eq!(editor.instance(id).unwrap().properties().get("text-color"), Some(""));
        let form = editor.panel().form().unwrap();
        assert_eq!(form.control(Property::TextColor).unwrap().value, "#333333");
    }

    #[test]
    fn dropped_instance_matches_registry_definition() {
        let mut editor = Editor::default();
        let id = editor.add_instance("section").unwrap();
        let definition = registry::lookup("section");
        let instance = editor.instance(id).unwrap();
        assert_eq!(instance.markup(), definition.template);
        assert_eq!(instance.properties().typed(), &definition.default_properties);
    }

    #[test]
    fn upload_after_delete_is_dropped() {
        let mut editor = Editor::default();
        let id = editor.add_instance("image").unwrap();
        editor.select_instance(id);
        editor.delete_instance(id);

        let landed = editor.complete_upload(ImageUpload {
            instance: id,
            file_name: "late.png".into(),
            bytes: vec![1, 2, 3],
        });
        assert!(!landed);
        assert!(editor.canvas().is_empty());
        assert_eq!(editor.panel(), &Panel::Placeholder);
    }
}
