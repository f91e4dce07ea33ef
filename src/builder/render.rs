//! Derives the visible subtree of a placed component from its properties.
//!
//! Each template is a small fixed tree with named hook points. Rendering
//! builds the tree and runs every property through [`visual_effect`], so the
//! output is always a pure function of the stored properties.

use std::borrow::Cow;
use std::fmt::Write as _;

use super::properties::{Properties, Property};
use super::registry::ComponentType;

/// A named element inside a template that properties write into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hook {
    HeaderRoot,
    HeaderLogo,
    NavItem(u8),
    TextRoot,
    TextHeading,
    TextParagraph,
    ImageContent,
    ButtonElement,
    SectionRoot,
    SectionTitle,
    SectionText,
}

impl Hook {
    pub fn name(self) -> Cow<'static, str> {
        match self {
            Hook::HeaderRoot => "header-root".into(),
            Hook::HeaderLogo => "header-logo".into(),
            Hook::NavItem(n) => format!("nav-item-{n}").into(),
            Hook::TextRoot => "text-root".into(),
            Hook::TextHeading => "text-heading".into(),
            Hook::TextParagraph => "text-paragraph".into(),
            Hook::ImageContent => "image-content".into(),
            Hook::ButtonElement => "button-element".into(),
            Hook::SectionRoot => "section-root".into(),
            Hook::SectionTitle => "section-title".into(),
            Hook::SectionText => "section-text".into(),
        }
    }
}

/// Which hooks an effect touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Hook(Hook),
    /// Every header menu link.
    NavItems,
}

impl Target {
    fn matches(self, hook: Hook) -> bool {
        match self {
            Target::Hook(h) => h == hook,
            Target::NavItems => matches!(hook, Hook::NavItem(_)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Text,
    Attr(&'static str),
    Style(&'static str),
    /// Inline style with the raw number suffixed by `px`.
    StylePx(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisualEffect {
    pub target: Target,
    pub mutation: Mutation,
}

impl VisualEffect {
    const fn new(target: Target, mutation: Mutation) -> Self {
        Self { target, mutation }
    }

    pub fn apply(&self, node: &mut RenderNode, value: &str) {
        let mutation = self.mutation;
        node.for_each_target_mut(self.target, &mut |n: &mut RenderNode| match mutation {
            Mutation::Text => n.set_text(value),
            Mutation::Attr(name) => n.set_attr(name, value),
            Mutation::Style(name) => n.set_style(name, value),
            Mutation::StylePx(name) => n.set_style(name, &format!("{value}px")),
        });
    }
}

/// The (component type, property) → visual change table.
pub fn visual_effect(ty: ComponentType, key: Property) -> Option<VisualEffect> {
    use Mutation::{Attr, Style, StylePx, Text};

    let one = |hook| Target::Hook(hook);
    let effect = match (ty, key) {
        (ComponentType::Header, Property::LogoText) => VisualEffect::new(one(Hook::HeaderLogo), Text),
        (ComponentType::Header, Property::Menu1) => VisualEffect::new(one(Hook::NavItem(1)), Text),
        (ComponentType::Header, Property::Menu2) => VisualEffect::new(one(Hook::NavItem(2)), Text),
        (ComponentType::Header, Property::Menu3) => VisualEffect::new(one(Hook::NavItem(3)), Text),
        (ComponentType::Header, Property::BgColor) => {
            VisualEffect::new(one(Hook::HeaderRoot), Style("background-color"))
        }
        (ComponentType::Header, Property::TextColor) => VisualEffect::new(Target::NavItems, Style("color")),

        (ComponentType::Text, Property::Heading) => VisualEffect::new(one(Hook::TextHeading), Text),
        (ComponentType::Text, Property::Paragraph) => VisualEffect::new(one(Hook::TextParagraph), Text),
        (ComponentType::Text, Property::TextAlign) => {
            VisualEffect::new(one(Hook::TextRoot), Style("text-align"))
        }
        (ComponentType::Text, Property::TextColor) => VisualEffect::new(one(Hook::TextRoot), Style("color")),
        (ComponentType::Text, Property::BgColor) => {
            VisualEffect::new(one(Hook::TextRoot), Style("background-color"))
        }

        (ComponentType::Image, Property::Src) => VisualEffect::new(one(Hook::ImageContent), Attr("src")),
        (ComponentType::Image, Property::Alt) => VisualEffect::new(one(Hook::ImageContent), Attr("alt")),
        (ComponentType::Image, Property::Width) => VisualEffect::new(one(Hook::ImageContent), Style("width")),
        (ComponentType::Image, Property::BorderRadius) => {
            VisualEffect::new(one(Hook::ImageContent), StylePx("border-radius"))
        }

        (ComponentType::Button, Property::ButtonText) => VisualEffect::new(one(Hook::ButtonElement), Text),
        (ComponentType::Button, Property::BgColor) => {
            VisualEffect::new(one(Hook::ButtonElement), Style("background-color"))
        }
        (ComponentType::Button, Property::TextColor) => {
            VisualEffect::new(one(Hook::ButtonElement), Style("color"))
        }
        (ComponentType::Button, Property::Padding) => {
            VisualEffect::new(one(Hook::ButtonElement), Style("padding"))
        }
        (ComponentType::Button, Property::BorderRadius) => {
            VisualEffect::new(one(Hook::ButtonElement), StylePx("border-radius"))
        }

        (ComponentType::Section, Property::SectionTitle) => VisualEffect::new(one(Hook::SectionTitle), Text),
        (ComponentType::Section, Property::SectionText) => VisualEffect::new(one(Hook::SectionText), Text),
        (ComponentType::Section, Property::BgColor) => {
            VisualEffect::new(one(Hook::SectionRoot), Style("background-color"))
        }
        (ComponentType::Section, Property::Padding) => {
            VisualEffect::new(one(Hook::SectionRoot), Style("padding"))
        }

        _ => return None,
    };
    Some(effect)
}

/// One element of a rendered component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderNode {
    pub tag: &'static str,
    pub class: &'static str,
    pub hook: Option<Hook>,
    pub attrs: Vec<(&'static str, String)>,
    pub style: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: "",
            hook: None,
            attrs: Vec::new(),
            style: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    fn with_class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    fn with_hook(mut self, hook: Hook) -> Self {
        self.hook = Some(hook);
        self
    }

    fn with_attr(mut self, name: &'static str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    fn with_style(mut self, name: &'static str, value: &str) -> Self {
        self.set_style(name, value);
        self
    }

    fn with_child(mut self, child: RenderNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn set_text(&mut self, value: &str) {
        self.text = Some(value.to_string());
    }

    pub fn set_attr(&mut self, name: &'static str, value: &str) {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name, value.to_string())),
        }
    }

    pub fn set_style(&mut self, name: &'static str, value: &str) {
        match self.style.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.style.push((name, value.to_string())),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn style_value(&self, name: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn find(&self, hook: Hook) -> Option<&RenderNode> {
        if self.hook == Some(hook) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(hook))
    }

    fn for_each_target_mut(&mut self, target: Target, f: &mut dyn FnMut(&mut RenderNode)) {
        if self.hook.is_some_and(|hook| target.matches(hook)) {
            f(self);
        }
        for child in &mut self.children {
            child.for_each_target_mut(target, f);
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.class.is_empty() {
            let _ = write!(out, " class=\"{}\"", self.class);
        }
        if let Some(hook) = self.hook {
            let _ = write!(out, " data-hook=\"{}\"", hook.name());
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
        }
        if !self.style.is_empty() {
            let style = self
                .style
                .iter()
                .map(|(k, v)| format!("{k}: {v};"))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(out, " style=\"{}\"", escape_attr(&style));
        }

        if is_void(self.tag) {
            out.push_str(" />");
            return;
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape_text(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "br" | "hr" | "input")
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

/// Static skeleton for a component type, before any property is applied.
pub fn template(ty: ComponentType) -> RenderNode {
    match ty {
        ComponentType::Header => {
            let nav_item = |n| {
                RenderNode::new("li").with_child(
                    RenderNode::new("a")
                        .with_class("nav-item")
                        .with_hook(Hook::NavItem(n))
                        .with_attr("href", "#"),
                )
            };
            RenderNode::new("header")
                .with_class("header-component")
                .with_hook(Hook::HeaderRoot)
                .with_style("padding", "20px")
                .with_style("display", "flex")
                .with_style("justify-content", "space-between")
                .with_style("align-items", "center")
                .with_child(
                    RenderNode::new("div")
                        .with_class("header-logo")
                        .with_hook(Hook::HeaderLogo)
                        .with_style("font-size", "24px")
                        .with_style("font-weight", "bold"),
                )
                .with_child(
                    RenderNode::new("nav").with_class("header-nav").with_child(
                        RenderNode::new("ul")
                            .with_style("display", "flex")
                            .with_style("list-style", "none")
                            .with_style("gap", "20px")
                            .with_child(nav_item(1))
                            .with_child(nav_item(2))
                            .with_child(nav_item(3)),
                    ),
                )
        }
        ComponentType::Text => RenderNode::new("div")
            .with_class("text-component")
            .with_hook(Hook::TextRoot)
            .with_style("padding", "40px 20px")
            .with_style("max-width", "800px")
            .with_style("margin", "0 auto")
            .with_child(
                RenderNode::new("h2")
                    .with_class("text-heading")
                    .with_hook(Hook::TextHeading),
            )
            .with_child(
                RenderNode::new("p")
                    .with_class("text-paragraph")
                    .with_hook(Hook::TextParagraph),
            ),
        ComponentType::Image => RenderNode::new("div")
            .with_class("image-component")
            .with_style("padding", "20px")
            .with_style("text-align", "center")
            .with_child(
                RenderNode::new("img")
                    .with_class("image-content")
                    .with_hook(Hook::ImageContent)
                    .with_style("max-width", "100%")
                    .with_style("height", "auto"),
            ),
        ComponentType::Button => RenderNode::new("div")
            .with_class("button-container")
            .with_style("padding", "20px")
            .with_style("text-align", "center")
            .with_child(
                RenderNode::new("button")
                    .with_class("button-element")
                    .with_hook(Hook::ButtonElement)
                    .with_style("border", "none")
                    .with_style("font-size", "16px")
                    .with_style("cursor", "pointer"),
            ),
        ComponentType::Section => RenderNode::new("div")
            .with_class("section-component")
            .with_hook(Hook::SectionRoot)
            .with_style("margin", "20px 0")
            .with_child(
                RenderNode::new("h2")
                    .with_class("section-title")
                    .with_hook(Hook::SectionTitle),
            )
            .with_child(
                RenderNode::new("p")
                    .with_class("section-text")
                    .with_hook(Hook::SectionText),
            ),
    }
}

/// Builds the subtree for a set of properties. Unknown types render nothing.
pub fn render(properties: &Properties) -> Option<RenderNode> {
    let ty = properties.component_type()?;
    let mut node = template(ty);
    for (key, value) in properties.entries() {
        if let Some(effect) = visual_effect(ty, key) {
            effect.apply(&mut node, value);
        }
    }
    Some(node)
}
