use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use super::error::BuilderError;
use super::registry::{self, ComponentType};

/// Every property name any built-in component understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    LogoText,
    Menu1,
    Menu2,
    Menu3,
    BgColor,
    TextColor,
    Heading,
    Paragraph,
    TextAlign,
    Src,
    Alt,
    Width,
    BorderRadius,
    ButtonText,
    Padding,
    SectionTitle,
    SectionText,
}

impl Property {
    pub const ALL: [Property; 17] = [
        Property::LogoText,
        Property::Menu1,
        Property::Menu2,
        Property::Menu3,
        Property::BgColor,
        Property::TextColor,
        Property::Heading,
        Property::Paragraph,
        Property::TextAlign,
        Property::Src,
        Property::Alt,
        Property::Width,
        Property::BorderRadius,
        Property::ButtonText,
        Property::Padding,
        Property::SectionTitle,
        Property::SectionText,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Property::LogoText => "logo-text",
            Property::Menu1 => "menu-1",
            Property::Menu2 => "menu-2",
            Property::Menu3 => "menu-3",
            Property::BgColor => "bg-color",
            Property::TextColor => "text-color",
            Property::Heading => "heading",
            Property::Paragraph => "paragraph",
            Property::TextAlign => "text-align",
            Property::Src => "src",
            Property::Alt => "alt",
            Property::Width => "width",
            Property::BorderRadius => "border-radius",
            Property::ButtonText => "button-text",
            Property::Padding => "padding",
            Property::SectionTitle => "section-title",
            Property::SectionText => "section-text",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Property {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| BuilderError::UnknownProperty(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderProperties {
    pub logo_text: String,
    pub menu_1: String,
    pub menu_2: String,
    pub menu_3: String,
    pub bg_color: String,
    pub text_color: String,
}

impl Default for HeaderProperties {
    fn default() -> Self {
        Self {
            logo_text: "Logo".into(),
            menu_1: "Home".into(),
            menu_2: "About".into(),
            menu_3: "Contact".into(),
            bg_color: "#f8f9fa".into(),
            text_color: "#333".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextProperties {
    pub heading: String,
    pub paragraph: String,
    pub text_align: String,
    pub text_color: String,
    pub bg_color: String,
}

impl Default for TextProperties {
    fn default() -> Self {
        Self {
            heading: "About Us".into(),
            paragraph: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nullam in dui mauris. \
                        Vivamus hendrerit arcu sed erat molestie vehicula."
                .into(),
            text_align: "left".into(),
            text_color: "#333".into(),
            bg_color: "#ffffff".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageProperties {
    pub src: String,
    pub alt: String,
    pub width: String,
    /// Raw number, rendered with a `px` suffix.
    pub border_radius: String,
}

impl Default for ImageProperties {
    fn default() -> Self {
        Self {
            src: "https://via.placeholder.com/800x400".into(),
            alt: "Sample Image".into(),
            width: "100%".into(),
            border_radius: "4".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonProperties {
    pub button_text: String,
    pub bg_color: String,
    pub text_color: String,
    pub padding: String,
    /// Raw number, rendered with a `px` suffix.
    pub border_radius: String,
}

impl Default for ButtonProperties {
    fn default() -> Self {
        Self {
            button_text: "Click Me".into(),
            bg_color: "#4a6bff".into(),
            text_color: "#ffffff".into(),
            padding: "12px 30px".into(),
            border_radius: "4".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionProperties {
    pub section_title: String,
    pub section_text: String,
    pub bg_color: String,
    pub padding: String,
}

impl Default for SectionProperties {
    fn default() -> Self {
        Self {
            section_title: "Section Title".into(),
            section_text: "This is a content section. You can add any components inside it.".into(),
            bg_color: "#f0f7ff".into(),
            padding: "40px 20px".into(),
        }
    }
}

/// Typed property record, one variant per component type.
///
/// `Unknown` is what an unrecognized palette token gets: no fields at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Properties {
    Header(HeaderProperties),
    Text(TextProperties),
    Image(ImageProperties),
    Button(ButtonProperties),
    Section(SectionProperties),
    Unknown,
}

impl Properties {
    pub fn defaults(ty: ComponentType) -> Self {
        match ty {
            ComponentType::Header => Properties::Header(HeaderProperties::default()),
            ComponentType::Text => Properties::Text(TextProperties::default()),
            ComponentType::Image => Properties::Image(ImageProperties::default()),
            ComponentType::Button => Properties::Button(ButtonProperties::default()),
            ComponentType::Section => Properties::Section(SectionProperties::default()),
        }
    }

    pub fn component_type(&self) -> Option<ComponentType> {
        match self {
            Properties::Header(_) => Some(ComponentType::Header),
            Properties::Text(_) => Some(ComponentType::Text),
            Properties::Image(_) => Some(ComponentType::Image),
            Properties::Button(_) => Some(ComponentType::Button),
            Properties::Section(_) => Some(ComponentType::Section),
            Properties::Unknown => None,
        }
    }

    /// Property names this type defines, in definition order.
    pub fn keys(&self) -> &'static [Property] {
        use Property::*;
        match self {
            Properties::Header(_) => &[LogoText, Menu1, Menu2, Menu3, BgColor, TextColor],
            Properties::Text(_) => &[Heading, Paragraph, TextAlign, TextColor, BgColor],
            Properties::Image(_) => &[Src, Alt, Width, BorderRadius],
            Properties::Button(_) => &[ButtonText, BgColor, TextColor, Padding, BorderRadius],
            Properties::Section(_) => &[SectionTitle, SectionText, BgColor, Padding],
            Properties::Unknown => &[],
        }
    }

    pub fn field(&self, key: Property) -> Option<&str> {
        let field = match (self, key) {
            (Properties::Header(p), Property::LogoText) => Some(&p.logo_text),
            (Properties::Header(p), Property::Menu1) => Some(&p.menu_1),
            (Properties::Header(p), Property::Menu2) => Some(&p.menu_2),
            (Properties::Header(p), Property::Menu3) => Some(&p.menu_3),
            (Properties::Header(p), Property::BgColor) => Some(&p.bg_color),
            (Properties::Header(p), Property::TextColor) => Some(&p.text_color),

            (Properties::Text(p), Property::Heading) => Some(&p.heading),
            (Properties::Text(p), Property::Paragraph) => Some(&p.paragraph),
            (Properties::Text(p), Property::TextAlign) => Some(&p.text_align),
            (Properties::Text(p), Property::TextColor) => Some(&p.text_color),
            (Properties::Text(p), Property::BgColor) => Some(&p.bg_color),

            (Properties::Image(p), Property::Src) => Some(&p.src),
            (Properties::Image(p), Property::Alt) => Some(&p.alt),
            (Properties::Image(p), Property::Width) => Some(&p.width),
            (Properties::Image(p), Property::BorderRadius) => Some(&p.border_radius),

            (Properties::Button(p), Property::ButtonText) => Some(&p.button_text),
            (Properties::Button(p), Property::BgColor) => Some(&p.bg_color),
            (Properties::Button(p), Property::TextColor) => Some(&p.text_color),
            (Properties::Button(p), Property::Padding) => Some(&p.padding),
            (Properties::Button(p), Property::BorderRadius) => Some(&p.border_radius),

            (Properties::Section(p), Property::SectionTitle) => Some(&p.section_title),
            (Properties::Section(p), Property::SectionText) => Some(&p.section_text),
            (Properties::Section(p), Property::BgColor) => Some(&p.bg_color),
            (Properties::Section(p), Property::Padding) => Some(&p.padding),

            _ => None,
        };
        field.map(String::as_str)
    }

    fn field_mut(&mut self, key: Property) -> Option<&mut String> {
        match (self, key) {
            (Properties::Header(p), Property::LogoText) => Some(&mut p.logo_text),
            (Properties::Header(p), Property::Menu1) => Some(&mut p.menu_1),
            (Properties::Header(p), Property::Menu2) => Some(&mut p.menu_2),
            (Properties::Header(p), Property::Menu3) => Some(&mut p.menu_3),
            (Properties::Header(p), Property::BgColor) => Some(&mut p.bg_color),
            (Properties::Header(p), Property::TextColor) => Some(&mut p.text_color),

            (Properties::Text(p), Property::Heading) => Some(&mut p.heading),
            (Properties::Text(p), Property::Paragraph) => Some(&mut p.paragraph),
            (Properties::Text(p), Property::TextAlign) => Some(&mut p.text_align),
            (Properties::Text(p), Property::TextColor) => Some(&mut p.text_color),
            (Properties::Text(p), Property::BgColor) => Some(&mut p.bg_color),

            (Properties::Image(p), Property::Src) => Some(&mut p.src),
            (Properties::Image(p), Property::Alt) => Some(&mut p.alt),
            (Properties::Image(p), Property::Width) => Some(&mut p.width),
            (Properties::Image(p), Property::BorderRadius) => Some(&mut p.border_radius),

            (Properties::Button(p), Property::ButtonText) => Some(&mut p.button_text),
            (Properties::Button(p), Property::BgColor) => Some(&mut p.bg_color),
            (Properties::Button(p), Property::TextColor) => Some(&mut p.text_color),
            (Properties::Button(p), Property::Padding) => Some(&mut p.padding),
            (Properties::Button(p), Property::BorderRadius) => Some(&mut p.border_radius),

            (Properties::Section(p), Property::SectionTitle) => Some(&mut p.section_title),
            (Properties::Section(p), Property::SectionText) => Some(&mut p.section_text),
            (Properties::Section(p), Property::BgColor) => Some(&mut p.bg_color),
            (Properties::Section(p), Property::Padding) => Some(&mut p.padding),

            _ => None,
        }
    }

    /// Overwrites one field. Returns `false` when this type has no such field.
    pub fn set_field(&mut self, key: Property, value: String) -> bool {
        match self.field_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        name.parse::<Property>().ok().and_then(|key| self.field(key))
    }

    pub fn entries(&self) -> Vec<(Property, &str)> {
        self.keys()
            .iter()
            .filter_map(|&key| self.field(key).map(|value| (key, value)))
            .collect()
    }
}

/// The property values owned by one placed instance.
///
/// Names the component type defines live in the typed record; anything else
/// the dispatcher receives is kept in `unrecognized` and never rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyStore {
    typed: Properties,
    unrecognized: BTreeMap<String, String>,
}

impl PropertyStore {
    pub fn create(type_id: &str) -> Self {
        Self::from_defaults(registry::lookup(type_id).default_properties)
    }

    pub fn from_defaults(typed: Properties) -> Self {
        Self {
            typed,
            unrecognized: BTreeMap::new(),
        }
    }

    pub fn typed(&self) -> &Properties {
        &self.typed
    }

    pub fn component_type(&self) -> Option<ComponentType> {
        self.typed.component_type()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.typed
            .get(name)
            .or_else(|| self.unrecognized.get(name).map(String::as_str))
    }

    pub fn field(&self, key: Property) -> Option<&str> {
        self.typed.field(key)
    }

    /// Stores `value` under `name` and returns the typed key when the
    /// component type defines that name.
    pub fn set(&mut self, name: &str, value: String) -> Option<Property> {
        if let Ok(key) = name.parse::<Property>() {
            if self.typed.field(key).is_some() {
                self.typed.set_field(key, value);
                return Some(key);
            }
        }
        self.unrecognized.insert(name.to_string(), value);
        None
    }

    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .typed
            .entries()
            .into_iter()
            .map(|(key, value)| (key.as_str(), value))
            .collect();
        entries.extend(
            self.unrecognized
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
        entries
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries()
            .into_iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        Value::Object(map)
    }
}
