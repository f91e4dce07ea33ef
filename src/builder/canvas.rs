use std::fmt;

use super::properties::PropertyStore;
use super::registry::{self, ComponentType, ComponentTypeDefinition};
use super::render::{self, RenderNode};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element-{}", self.0)
    }
}

/// A component placed on the canvas.
///
/// `properties` is the source of truth; `rendered` is re-derived from it
/// whenever a property with a visual effect changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    id: InstanceId,
    type_id: String,
    properties: PropertyStore,
    rendered: Option<RenderNode>,
}

impl Instance {
    pub fn new(id: InstanceId, type_id: &str) -> Self {
        Self::from_definition(id, registry::lookup(type_id))
    }

    /// Builds an instance from an already looked-up definition.
    pub fn from_definition(id: InstanceId, definition: ComponentTypeDefinition) -> Self {
        let properties = PropertyStore::from_defaults(definition.default_properties);
        let rendered = render::render(properties.typed());
        Self {
            id,
            type_id: definition.type_id,
            properties,
            rendered,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn component_type(&self) -> Option<ComponentType> {
        self.properties.component_type()
    }

    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    pub(crate) fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }

    pub fn rendered(&self) -> Option<&RenderNode> {
        self.rendered.as_ref()
    }

    pub fn markup(&self) -> String {
        self.rendered
            .as_ref()
            .map(RenderNode::to_html)
            .unwrap_or_default()
    }

    pub(crate) fn rerender(&mut self) {
        self.rendered = render::render(self.properties.typed());
    }
}

/// Placed instances in visual order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Canvas {
    instances: Vec<Instance>,
}

impl Canvas {
    pub fn push(&mut self, instance: Instance) {
        self.instances.push(instance);
    }

    /// Removes an instance, keeping the order of the rest.
    pub fn remove(&mut self, id: InstanceId) -> Option<Instance> {
        let index = self.instances.iter().position(|i| i.id == id)?;
        Some(self.instances.remove(index))
    }

    pub fn get(&self, id: InstanceId) -> Option<&Instance> {
        self.instances.iter().find(|i| i.id == id)
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut Instance> {
        self.instances.iter_mut().find(|i| i.id == id)
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instance> {
        self.instances.iter()
    }

    pub fn ids(&self) -> Vec<InstanceId> {
        self.instances.iter().map(Instance::id).collect()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
