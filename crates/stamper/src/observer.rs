use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};
use userstamp_core::{ActorContext, StampRegistry, Stampable};

use crate::stamper::{StampOutcome, Stamper};

/// A record type registered for stamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StampedType {
    id: TypeId,
    name: &'static str,
}

impl StampedType {
    /// Identify record type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The type's name as reported by [`type_name`].
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Build a list of [`StampedType`]s from type names.
///
/// ```ignore
/// observer.register_stamped_types(stamped_types![Comment, Post]);
/// ```
#[macro_export]
macro_rules! stamped_types {
    ($($ty:ty),* $(,)?) => {
        [$($crate::StampedType::of::<$ty>()),*]
    };
}

/// Pre-validation hook for the record types it has been told to observe.
///
/// The persistence layer calls [`before_validation`](Self::before_validation)
/// once per save attempt. Records of unregistered types pass through
/// untouched.
#[derive(Debug, Clone)]
pub struct StampObserver {
    stamper: Stamper,
    observed: HashMap<TypeId, &'static str>,
}

impl StampObserver {
    /// Create an observer with no registered types.
    pub fn new(stamper: Stamper) -> Self {
        Self {
            stamper,
            observed: HashMap::new(),
        }
    }

    /// Start building an observer.
    pub fn builder() -> StampObserverBuilder {
        StampObserverBuilder::new()
    }

    /// The stamper invoked for observed types.
    pub fn stamper(&self) -> &Stamper {
        &self.stamper
    }

    /// Wire each of `types` to receive stamping.
    pub fn register_stamped_types(&mut self, types: impl IntoIterator<Item = StampedType>) {
        for ty in types {
            if self.observed.insert(ty.id, ty.name).is_none() {
                info!(
                    record_type = ty.name,
                    "observing record type for userstamps"
                );
            }
        }
    }

    /// Register a single record type.
    pub fn observe<T: ?Sized + 'static>(&mut self) {
        self.register_stamped_types([StampedType::of::<T>()]);
    }

    /// Whether record type `T` is registered.
    pub fn observes<T: ?Sized + 'static>(&self) -> bool {
        self.observed.contains_key(&TypeId::of::<T>())
    }

    /// Names of all observed record types, in no particular order.
    pub fn observed_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.observed.values().copied()
    }

    /// Stamp `record` if its type is observed.
    pub fn before_validation<R, C>(&self, record: &mut R, ctx: &C) -> StampOutcome
    where
        R: Stampable + 'static,
        R::Actor: Clone,
        C: ActorContext<Actor = R::Actor> + ?Sized,
    {
        if !self.observes::<R>() {
            debug!(record_type = type_name::<R>(), "record type not observed");
            return StampOutcome::default();
        }
        self.stamper.before_validation(record, ctx)
    }
}

/// Fluent builder for a [`StampObserver`].
///
/// Without an explicit registry the observer reads the process-wide one.
#[derive(Debug, Default)]
pub struct StampObserverBuilder {
    registry: Option<Arc<StampRegistry>>,
    types: Vec<StampedType>,
}

impl StampObserverBuilder {
    /// Create a builder with no types and no explicit registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read names from `registry` instead of the process-wide registry.
    #[must_use]
    pub fn registry(mut self, registry: Arc<StampRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Observe record type `T`.
    #[must_use]
    pub fn observe<T: ?Sized + 'static>(mut self) -> Self {
        self.types.push(StampedType::of::<T>());
        self
    }

    /// Observe every type in `types`.
    #[must_use]
    pub fn stamped_types(mut self, types: impl IntoIterator<Item = StampedType>) -> Self {
        self.types.extend(types);
        self
    }

    /// Build the observer, registering every collected type.
    pub fn build(self) -> StampObserver {
        let stamper = self.registry.map_or_else(Stamper::global, Stamper::new);
        let mut observer = StampObserver::new(stamper);
        observer.register_stamped_types(self.types);
        observer
    }
}
