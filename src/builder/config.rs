use serde::{Deserialize, Serialize};
use tracing::Level;

use super::error::{BuilderError, Result};
use super::registry::ComponentType;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    #[serde(rename = "type")]
    pub type_token: String,
    pub label: String,
}

impl PaletteEntry {
    pub fn new(type_token: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            type_token: type_token.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BuilderConfig {
    pub log_level: String,
    pub placeholder_message: String,
    pub canvas_hint: String,
    pub palette: Vec<PaletteEntry>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        let palette = ComponentType::ALL
            .into_iter()
            .map(|ty| {
                let label = match ty {
                    ComponentType::Header => "Header",
                    ComponentType::Text => "Text Block",
                    ComponentType::Image => "Image",
                    ComponentType::Button => "Button",
                    ComponentType::Section => "Section",
                };
                PaletteEntry::new(ty.as_str(), label)
            })
            .collect();

        Self {
            log_level: "info".into(),
            placeholder_message: "Select a component to edit its properties".into(),
            canvas_hint: "Drag components here to start building".into(),
            palette,
        }
    }
}

impl BuilderConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn log_level(&self) -> Result<Level> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| BuilderError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_lists_builtins_in_order() {
        let config = BuilderConfig::default();
        let tokens: Vec<&str> = config.palette.iter().map(|e| e.type_token.as_str()).collect();
        assert_eq!(tokens, ["header", "text", "image", "button", "section"]);
        assert_eq!(config.palette[1].label, "Text Block");
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config = BuilderConfig::from_json(r#"{ "canvas-hint": "Drop here" }"#).unwrap();
        assert_eq!(config.canvas_hint, "Drop here");
        assert_eq!(config.placeholder_message, BuilderConfig::default().placeholder_message);
        assert_eq!(config.palette.len(), 5);
    }

    #[test]
    fn palette_entries_use_type_key() {
        let config = BuilderConfig::from_json(
            r#"{ "palette": [ { "type": "button", "label": "CTA" } ] }"#,
        )
        .unwrap();
        assert_eq!(config.palette, vec![PaletteEntry::new("button", "CTA")]);
    }

    #[test]
    fn malformed_json_is_invalid_config() {
        let err = BuilderConfig::from_json("{ palette: }").unwrap_err();
        assert!(matches!(err, BuilderError::InvalidConfig(_)));
    }

    #[test]
    fn log_level_parses_or_reports() {
        let mut config = BuilderConfig::default();
        assert_eq!(config.log_level().unwrap(), Level::INFO);
        config.log_level = "debug".into();
        assert_eq!(config.log_level().unwrap(), Level::DEBUG);
        config.log_level = "loud".into();
        assert!(matches!(config.log_level(), Err(BuilderError::InvalidLogLevel(l)) if l == "loud"));
    }

    #[test]
    fn misspelled_log_level_is_reported_not_swallowed() {
        let config = BuilderConfig::from_json(r#"{ "log-level": "verbose" }"#).unwrap();
        let err = config.log_level().unwrap_err();
        assert!(err.to_string().contains("verbose"), "{err}");
    }

    #[test]
    fn bundled_config_parses() {
        let config = BuilderConfig::from_json(include_str!("../../assets/builder.json")).unwrap();
        assert!(config.log_level().is_ok());
        assert!(!config.palette.is_empty());
    }
}
