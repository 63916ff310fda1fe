use std::collections::HashMap;
use std::fmt;

/// Whether an accessor is part of a context's public surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    /// Implementation-internal, still reachable when lookups include internals.
    Internal,
}

/// Ambient per-request state that can name the acting user.
///
/// Accessors are addressed by name so the accessor used for stamping can be
/// configured without the context knowing about it.
pub trait ActorContext {
    /// The identity produced by this context's accessors.
    type Actor;

    /// Whether the context has an accessor called `name`.
    ///
    /// Internal accessors count only when `include_internal` is `true`.
    fn responds_to(&self, name: &str, include_internal: bool) -> bool;

    /// Invoke accessor `name` with no arguments.
    ///
    /// Returns `None` if there is no such accessor or the accessor reports
    /// that nobody is acting.
    fn call_accessor(&self, name: &str) -> Option<Self::Actor>;
}

type AccessorFn<A> = Box<dyn Fn() -> Option<A> + Send + Sync>;

/// A named zero-argument accessor registered on a [`RequestContext`].
pub struct Accessor<A> {
    visibility: Visibility,
    call: AccessorFn<A>,
}

impl<A> Accessor<A> {
    /// Wrap `call` as an accessor with the given visibility.
    pub fn new(
        visibility: Visibility,
        call: impl Fn() -> Option<A> + Send + Sync + 'static,
    ) -> Self {
        Self {
            visibility,
            call: Box::new(call),
        }
    }

    /// Whether the accessor is public or internal.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Invoke the accessor; `None` means nobody is acting.
    pub fn call(&self) -> Option<A> {
        (self.call)()
    }
}

impl<A> fmt::Debug for Accessor<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}

/// A request context assembled from named accessors.
///
/// Handlers build one per request and hand it to the stamper alongside the
/// record being saved.
#[derive(Debug)]
pub struct RequestContext<A> {
    accessors: HashMap<String, Accessor<A>>,
}

impl<A> Default for RequestContext<A> {
    fn default() -> Self {
        Self {
            accessors: HashMap::new(),
        }
    }
}

impl<A> RequestContext<A> {
    /// Create a context with no accessors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a public accessor.
    #[must_use]
    pub fn with_accessor(
        mut self,
        name: impl Into<String>,
        call: impl Fn() -> Option<A> + Send + Sync + 'static,
    ) -> Self {
        self.accessors
            .insert(name.into(), Accessor::new(Visibility::Public, call));
        self
    }

    /// Register an internal accessor.
    #[must_use]
    pub fn with_internal_accessor(
        mut self,
        name: impl Into<String>,
        call: impl Fn() -> Option<A> + Send + Sync + 'static,
    ) -> Self {
        self.accessors
            .insert(name.into(), Accessor::new(Visibility::Internal, call));
        self
    }

    /// Register a public accessor that always yields `actor`.
    #[must_use]
    pub fn with_actor(self, name: impl Into<String>, actor: A) -> Self
    where
        A: Clone + Send + Sync + 'static,
    {
        self.with_accessor(name, move || Some(actor.clone()))
    }

    /// Look up an accessor by name regardless of visibility.
    pub fn accessor(&self, name: &str) -> Option<&Accessor<A>> {
        self.accessors.get(name)
    }
}

impl<A> ActorContext for RequestContext<A> {
    type Actor = A;

    fn responds_to(&self, name: &str, include_internal: bool) -> bool {
        match self.accessors.get(name) {
            Some(accessor) => include_internal || accessor.visibility() == Visibility::Public,
            None => false,
        }
    }

    fn call_accessor(&self, name: &str) -> Option<A> {
        self.accessors.get(name).and_then(Accessor::call)
    }
}
