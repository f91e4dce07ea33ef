use std::fmt;
use std::str::FromStr;

use super::error::BuilderError;
use super::properties::Properties;
use super::render;

/// The built-in component types a palette entry can place on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Header,
    Text,
    Image,
    Button,
    Section,
}

impl ComponentType {
    pub const ALL: [ComponentType; 5] = [
        ComponentType::Header,
        ComponentType::Text,
        ComponentType::Image,
        ComponentType::Button,
        ComponentType::Section,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Header => "header",
            ComponentType::Text => "text",
            ComponentType::Image => "image",
            ComponentType::Button => "button",
            ComponentType::Section => "section",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| BuilderError::UnknownComponentType(s.to_string()))
    }
}

/// Template markup and default properties for one component type.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentTypeDefinition {
    pub type_id: String,
    pub template: String,
    pub default_properties: Properties,
}

impl ComponentTypeDefinition {
    pub fn component_type(&self) -> Option<ComponentType> {
        self.default_properties.component_type()
    }

    pub fn is_empty(&self) -> bool {
        self.template.is_empty()
    }
}

/// Looks up the definition for a palette token.
///
/// Unknown tokens get an empty template and no defaults instead of an error,
/// so a stray drop degrades to placing nothing.
pub fn lookup(type_id: &str) -> ComponentTypeDefinition {
    let default_properties = match type_id.parse::<ComponentType>() {
        Ok(ty) => Properties::defaults(ty),
        Err(err) => {
            tracing::debug!(%err, "falling back to empty component definition");
            Properties::Unknown
        }
    };

    let template = render::render(&default_properties)
        .map(|node| node.to_html())
        .unwrap_or_default();

    ComponentTypeDefinition {
        type_id: type_id.to_string(),
        template,
        default_properties,
    }
}
