use dioxus::prelude::*;
use page_builder::builder::BuilderConfig;
use page_builder::visual_editor::VisualEditor;
use tracing::Level;

const BUILDER_CONFIG: &str = include_str!("../assets/builder.json");

fn main() {
    let (config, config_error) = match BuilderConfig::from_json(BUILDER_CONFIG) {
        Ok(config) => (config, None),
        Err(err) => (BuilderConfig::default(), Some(err)),
    };

    let (level, level_error) = match config.log_level() {
        Ok(level) => (level, None),
        Err(err) => (Level::INFO, Some(err)),
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("failed to initialize logger: {err}");
    }
    if let Some(err) = config_error {
        tracing::warn!(%err, "falling back to default builder config");
    }
    if let Some(err) = level_error {
        tracing::warn!(%err, "falling back to info log level");
    }

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    rsx! { VisualEditor {} }
}
