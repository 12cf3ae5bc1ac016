//! Registered attribute accessors per entity type.

use std::collections::BTreeMap;
use std::fmt;

use super::SortValue;
use crate::error::{CoreError, CoreResult};

/// Reads one attribute of an entity. `None` means the attribute is unset.
pub type Accessor<T> = fn(&T) -> Option<SortValue>;

/// Maps attribute names to accessors for one entity type.
pub struct AttributeTable<T> {
    entity: &'static str,
    accessors: BTreeMap<&'static str, Accessor<T>>,
}

impl<T> AttributeTable<T> {
    /// Creates an empty table for the named entity.
    #[must_use]
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            accessors: BTreeMap::new(),
        }
    }

    /// Registers an accessor under `name`, replacing any previous one.
    #[must_use]
    pub fn with(mut self, name: &'static str, accessor: Accessor<T>) -> Self {
        self.accessors.insert(name, accessor);
        self
    }

    /// Name of the entity this table describes.
    #[must_use]
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Registered attribute names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.accessors.keys().copied()
    }

    /// Looks up the accessor for `name`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownAttribute` if nothing is registered under
    /// `name`. The failure is logged since it points at a wiring mistake.
    pub fn resolve(&self, name: &str) -> CoreResult<Accessor<T>> {
        self.accessors.get(name).copied().ok_or_else(|| {
            tracing::error!(entity = self.entity, attribute = name, "Unknown sort attribute");
            CoreError::unknown_attribute(self.entity, name)
        })
    }
}

impl<T> Clone for AttributeTable<T> {
    fn clone(&self) -> Self {
        Self {
            entity: self.entity,
            accessors: self.accessors.clone(),
        }
    }
}

impl<T> fmt::Debug for AttributeTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeTable")
            .field("entity", &self.entity)
            .field("attributes", &self.accessors.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Entities that publish an attribute table for column sorting.
pub trait Sortable: Sized {
    /// Returns the attribute table for this entity type.
    fn attribute_table() -> AttributeTable<Self>;
}
