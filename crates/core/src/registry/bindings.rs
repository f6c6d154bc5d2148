use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
};

use crate::repository::{Labeled, LoggingRepository, Record, Repository};

use super::{RegistryError, Result};

/// Construction rule for one element type.
type Factory<T> = Box<dyn Fn() -> Box<dyn Repository<T>> + Send + Sync>;

struct Binding {
    element: &'static str,
    /// A `Factory<T>` for the element type this binding is keyed by.
    factory: Box<dyn Any + Send + Sync>,
}

/// Binding key for the repository capability of `T`.
fn capability_key<T: Record>() -> TypeId {
    TypeId::of::<dyn Repository<T>>()
}

/// Collects bindings before freezing them into a [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    bindings: HashMap<TypeId, Binding>,
}

impl RegistryBuilder {
    /// Creates a new builder with no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the repository capability of `T` to a logging decorator around
    /// whatever `base` builds.
    ///
    /// `base` runs once per [`Registry::resolve`] call, so every unit of work
    /// gets its own instance. Call diagnostics name the base by
    /// [`Labeled::LABEL`] of `B`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyBound`] if `T` already has a binding.
    pub fn bind_decorated<T, B, F>(mut self, base: F) -> Result<Self>
    where
        T: Record,
        B: Repository<T> + Labeled + 'static,
        F: Fn() -> B + Send + Sync + 'static,
    {
        let key = capability_key::<T>();
        if self.bindings.contains_key(&key) {
            return Err(RegistryError::AlreadyBound { element: T::NAME });
        }

        let factory: Factory<T> = Box::new(move || -> Box<dyn Repository<T>> {
            Box::new(LoggingRepository::<T, B>::new(base()))
        });

        tracing::debug!(element = T::NAME, implementation = B::LABEL, "Bound repository");
        self.bindings.insert(
            key,
            Binding {
                element: T::NAME,
                factory: Box::new(factory),
            },
        );

        Ok(self)
    }

    /// Freezes the bindings.
    pub fn build(self) -> Registry {
        Registry {
            bindings: self.bindings,
        }
    }
}

/// Immutable set of repository bindings, keyed by element type.
///
/// Resolution only reads the map, so a registry can be shared behind an
/// `Arc` and resolved from many requests at once.
pub struct Registry {
    bindings: HashMap<TypeId, Binding>,
}

impl Registry {
    /// Starts a new [`RegistryBuilder`].
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Constructs a fresh decorated repository for `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unbound`] if nothing was bound for `T`.
    pub fn resolve<T: Record>(&self) -> Result<Box<dyn Repository<T>>> {
        self.bindings
            .get(&capability_key::<T>())
            .and_then(|binding| binding.factory.downcast_ref::<Factory<T>>())
            .map(|factory| factory())
            .ok_or(RegistryError::Unbound { element: T::NAME })
    }

    /// Returns true if `T` has a binding.
    pub fn is_bound<T: Record>(&self) -> bool {
        self.bindings.contains_key(&capability_key::<T>())
    }

    /// Number of bound element types.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements: Vec<_> = self.bindings.values().map(|b| b.element).collect();
        elements.sort_unstable();
        f.debug_struct("Registry")
            .field("bindings", &elements)
            .finish()
    }
}
