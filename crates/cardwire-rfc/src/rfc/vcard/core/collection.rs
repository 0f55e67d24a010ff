//! Ordered property collections with validating insertion.

use std::ops::Index;

use super::property::{FromRaw, NullProperty, Property};
use crate::error::RfcResult;
use crate::rfc::vcard::build::SerializeOptions;

/// An ordered list of properties of one type.
///
/// Every insertion builds the property from raw input first, so the list
/// only ever holds validated properties. Insertion order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyList<P> {
    items: Vec<P>,
}

impl<P> Default for PropertyList<P> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<P: FromRaw> PropertyList<P> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a property from raw input and appends it.
    ///
    /// Returns the length of the list after insertion.
    ///
    /// # Errors
    /// Returns the construction error; the list is left unchanged.
    pub fn push(&mut self, raw: impl Into<P::Raw>) -> RfcResult<usize> {
        let property = P::from_raw(raw.into())?;
        self.items.push(property);
        Ok(self.items.len())
    }

    /// Builds and appends several properties in order.
    ///
    /// Returns the length of the list after insertion.
    ///
    /// # Errors
    /// Returns the first construction error. Nothing is appended unless
    /// every item is valid.
    pub fn push_all<I>(&mut self, raws: I) -> RfcResult<usize>
    where
        I: IntoIterator,
        I::Item: Into<P::Raw>,
    {
        let built = raws
            .into_iter()
            .map(|raw| P::from_raw(raw.into()))
            .collect::<RfcResult<Vec<_>>>()?;
        self.items.extend(built);
        Ok(self.items.len())
    }

    /// Builds a list from raw inputs.
    ///
    /// # Errors
    /// Returns the first construction error.
    pub fn try_from_raw<I>(raws: I) -> RfcResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<P::Raw>,
    {
        let mut list = Self::new();
        list.push_all(raws)?;
        Ok(list)
    }
}

impl<P> PropertyList<P> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&P> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.items.iter()
    }

    /// Consumes the list, returning the properties in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<P> {
        self.items
    }
}

impl<P: Property> PropertyList<P> {
    /// Returns the first property, or a [`NullProperty`] if the list is empty.
    #[must_use]
    pub fn first_or_null(&self) -> &dyn Property {
        match self.items.first() {
            Some(p) => p,
            None => &NullProperty,
        }
    }

    /// Returns the most preferred property.
    ///
    /// The lowest PREF wins; properties without PREF rank after those with
    /// one, and ties keep insertion order. An empty list yields a
    /// [`NullProperty`].
    #[must_use]
    pub fn preferred(&self) -> &dyn Property {
        match self
            .items
            .iter()
            .min_by_key(|p| p.pref().unwrap_or(i64::MAX))
        {
            Some(p) => p,
            None => &NullProperty,
        }
    }

    /// Serializes every property in order.
    #[must_use]
    pub fn serialize_with(&self, options: &SerializeOptions) -> String {
        self.items
            .iter()
            .map(|p| p.serialize_with(options))
            .collect()
    }
}

impl<P> Index<usize> for PropertyList<P> {
    type Output = P;

    fn index(&self, index: usize) -> &P {
        &self.items[index]
    }
}

impl<'a, P> IntoIterator for &'a PropertyList<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<P> IntoIterator for PropertyList<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
