use super::canvas::Instance;
use super::properties::Property;
use super::render::visual_effect;

/// What an edit did to an instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    /// Stored and re-rendered; the property's hook now shows the new value.
    Rendered(Property),
    /// Stored only; the type has no visual effect for that name.
    StoredOnly,
}

/// Writes `value` under `property` and refreshes the rendered subtree when
/// the (type, property) pair has a visual effect.
pub fn apply(instance: &mut Instance, property: &str, value: String) -> Applied {
    let key = instance.properties_mut().set(property, value);
    let effect = instance
        .component_type()
        .zip(key)
        .and_then(|(ty, key)| visual_effect(ty, key).map(|_| key));

    match effect {
        Some(key) => {
            instance.rerender();
            tracing::debug!(instance = %instance.id(), property = %key, "applied property");
            Applied::Rendered(key)
        }
        None => {
            tracing::debug!(
                instance = %instance.id(),
                property,
                "stored property without visual effect"
            );
            Applied::StoredOnly
        }
    }
}
