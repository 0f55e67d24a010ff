//! vCard document container.

use super::collection::PropertyList;
use super::property::Property;

/// A vCard: an ordered list of properties.
///
/// `BEGIN`, `VERSION`, and `END` are written by the serializer and are not
/// stored here.
#[derive(Debug, Default)]
pub struct VCard {
    properties: Vec<Box<dyn Property>>,
}

impl VCard {
    /// Creates an empty vCard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property.
    pub fn add_property(&mut self, property: impl Property + 'static) {
        self.properties.push(Box::new(property));
    }

    /// Appends every property of a list, keeping its order.
    pub fn add_properties<P: Property + 'static>(&mut self, list: PropertyList<P>) {
        self.properties
            .extend(list.into_iter().map(|p| Box::new(p) as Box<dyn Property>));
    }

    /// Returns the properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &dyn Property> {
        self.properties.iter().map(AsRef::as_ref)
    }

    /// Returns the first property with the given name (case-insensitive).
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&dyn Property> {
        self.properties()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Returns the number of stored properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
