use super::canvas::{Instance, InstanceId};
use super::properties::{Property, PropertyStore};
use super::registry::ComponentType;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const TEXT_ALIGN_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { value: "left", label: "Left" },
    ChoiceOption { value: "center", label: "Center" },
    ChoiceOption { value: "right", label: "Right" },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    MultiLine { rows: u8 },
    /// Color picker; an empty stored value shows `fallback` instead.
    Color { fallback: &'static str },
    Number,
    Choice(&'static [ChoiceOption]),
    /// URL field that only takes effect through the "Apply URL" action.
    ImageUrl,
    FilePicker { accept: &'static str, preview: String },
}

impl ControlKind {
    /// Live controls forward every change straight to the dispatcher.
    pub fn is_live(&self) -> bool {
        !matches!(self, ControlKind::ImageUrl | ControlKind::FilePicker { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    pub property: Property,
    pub label: &'static str,
    pub kind: ControlKind,
    pub value: String,
}

/// Everything the property panel shows for one selected instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyForm {
    pub instance: InstanceId,
    pub type_id: String,
    pub title: String,
    pub controls: Vec<Control>,
}

impl PropertyForm {
    pub fn render(instance: &Instance) -> Self {
        let controls = match instance.component_type() {
            Some(ty) => controls_for(ty, instance.properties()),
            None => Vec::new(),
        };
        Self {
            instance: instance.id(),
            type_id: instance.type_id().to_string(),
            title: format!("{} Properties", capitalize(instance.type_id())),
            controls,
        }
    }

    pub fn control(&self, property: Property) -> Option<&Control> {
        self.controls.iter().find(|c| c.property == property)
    }

    /// Pending text of the image URL field.
    pub fn url_buffer(&self) -> Option<&str> {
        self.controls
            .iter()
            .find(|c| c.kind == ControlKind::ImageUrl)
            .map(|c| c.value.as_str())
    }

    pub fn set_url_buffer(&mut self, value: String) {
        if let Some(control) = self.controls.iter_mut().find(|c| c.kind == ControlKind::ImageUrl) {
            control.value = value;
        }
    }

    pub fn preview(&self) -> Option<&str> {
        self.controls.iter().find_map(|c| match &c.kind {
            ControlKind::FilePicker { preview, .. } => Some(preview.as_str()),
            _ => None,
        })
    }

    /// Mirrors a stored change into every control bound to `property`,
    /// including the image preview and URL field when `src` changes.
    pub fn sync(&mut self, property: Property, value: &str) {
        for control in self.controls.iter_mut().filter(|c| c.property == property) {
            match &mut control.kind {
                ControlKind::FilePicker { preview, .. } => *preview = value.to_string(),
                ControlKind::Color { fallback } if value.is_empty() => {
                    control.value = fallback.to_string()
                }
                _ => control.value = value.to_string(),
            }
        }
    }
}

fn controls_for(ty: ComponentType, props: &PropertyStore) -> Vec<Control> {
    let value = |key: Property| props.field(key).unwrap_or_default().to_string();
    let text = |key, label| Control {
        property: key,
        label,
        kind: ControlKind::Text,
        value: value(key),
    };
    let multi_line = |key, label| Control {
        property: key,
        label,
        kind: ControlKind::MultiLine { rows: 4 },
        value: value(key),
    };
    let number = |key, label| Control {
        property: key,
        label,
        kind: ControlKind::Number,
        value: value(key),
    };
    // Empty colors fall back to the type's usual shade.
    let color = |key, label, fallback: &'static str| {
        let current = value(key);
        Control {
            property: key,
            label,
            kind: ControlKind::Color { fallback },
            value: if current.is_empty() { fallback.to_string() } else { current },
        }
    };

    match ty {
        ComponentType::Header => vec![
            color(Property::BgColor, "Background Color", "#f8f9fa"),
            text(Property::LogoText, "Logo Text"),
            text(Property::Menu1, "Menu Item 1"),
            text(Property::Menu2, "Menu Item 2"),
            text(Property::Menu3, "Menu Item 3"),
            color(Property::TextColor, "Text Color", "#333333"),
        ],
        ComponentType::Text => vec![
            color(Property::BgColor, "Background Color", "#ffffff"),
            text(Property::Heading, "Heading"),
            multi_line(Property::Paragraph, "Paragraph"),
            Control {
                property: Property::TextAlign,
                label: "Text Alignment",
                kind: ControlKind::Choice(TEXT_ALIGN_OPTIONS),
                value: value(Property::TextAlign),
            },
            color(Property::TextColor, "Text Color", "#333333"),
        ],
        ComponentType::Image => vec![
            Control {
                property: Property::Src,
                label: "Image URL",
                kind: ControlKind::ImageUrl,
                value: value(Property::Src),
            },
            text(Property::Alt, "Alt Text"),
            text(Property::Width, "Width"),
            number(Property::BorderRadius, "Border Radius (px)"),
            Control {
                property: Property::Src,
                label: "Upload Image",
                kind: ControlKind::FilePicker {
                    accept: "image/*",
                    preview: value(Property::Src),
                },
                value: String::new(),
            },
        ],
        ComponentType::Button => vec![
            text(Property::ButtonText, "Button Text"),
            color(Property::BgColor, "Background Color", "#4a6bff"),
            color(Property::TextColor, "Text Color", "#ffffff"),
            text(Property::Padding, "Padding"),
            number(Property::BorderRadius, "Border Radius (px)"),
        ],
        ComponentType::Section => vec![
            text(Property::SectionTitle, "Section Title"),
            multi_line(Property::SectionText, "Section Text"),
            color(Property::BgColor, "Background Color", "#f0f7ff"),
            text(Property::Padding, "Padding"),
        ],
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
