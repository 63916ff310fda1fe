use std::any::type_name;
use std::sync::Arc;

use tracing::debug;
use userstamp_core::{ActorContext, StampRegistry, Stampable};

use crate::resolve::resolve_actor;

/// What a single [`Stamper::before_validation`] call did.
///
/// Purely diagnostic; the save path does not need to look at it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StampOutcome {
    /// An actor was found on the context.
    pub actor_resolved: bool,
    /// The creator field was written.
    pub creator_stamped: bool,
    /// The updater field was written.
    pub updater_stamped: bool,
}

impl StampOutcome {
    /// Whether any field was written.
    pub fn stamped(&self) -> bool {
        self.creator_stamped || self.updater_stamped
    }
}

/// Writes the acting user into creator/updater fields before validation.
///
/// Field and accessor names come from a [`StampRegistry`], read once per call.
#[derive(Debug, Clone)]
pub struct Stamper {
    registry: Arc<StampRegistry>,
}

impl Default for Stamper {
    fn default() -> Self {
        Self::global()
    }
}

impl Stamper {
    /// A stamper reading names from `registry`.
    pub fn new(registry: Arc<StampRegistry>) -> Self {
        Self { registry }
    }

    /// A stamper reading the process-wide registry.
    pub fn global() -> Self {
        Self::new(StampRegistry::global())
    }

    /// The registry this stamper reads.
    pub fn registry(&self) -> &Arc<StampRegistry> {
        &self.registry
    }

    /// Stamp `record` with the actor found on `ctx`.
    ///
    /// - No actor: nothing is written.
    /// - New record with the creator field: creator is overwritten.
    /// - Changed record with the updater field: updater is overwritten.
    ///
    /// The last two are independent, so a new record with pending changes
    /// gets both stamps.
    ///
    /// The updater check runs after the creator write. A record whose dirty
    /// tracking counts that write as a change (such as
    /// [`JsonRecord`](userstamp_core::JsonRecord)) therefore gets the updater
    /// stamp too, even when it was saved with no edits of its own.
    pub fn before_validation<R, C>(&self, record: &mut R, ctx: &C) -> StampOutcome
    where
        R: Stampable + ?Sized,
        R::Actor: Clone,
        C: ActorContext<Actor = R::Actor> + ?Sized,
    {
        let config = self.registry.snapshot();
        let record_type = type_name::<R>();

        let Some(actor) = resolve_actor(ctx, &config.actor_accessor) else {
            debug!(record_type, accessor = %config.actor_accessor, "no actor; skipping stamps");
            return StampOutcome::default();
        };

        let mut outcome = StampOutcome {
            actor_resolved: true,
            ..StampOutcome::default()
        };

        if record.accepts_field(&config.creator_field) && record.is_new_record() {
            record.assign_field(&config.creator_field, actor.clone());
            outcome.creator_stamped = true;
            debug!(record_type, field = %config.creator_field, "stamped creator");
        }

        if record.accepts_field(&config.updater_field) && record.is_changed() {
            record.assign_field(&config.updater_field, actor);
            outcome.updater_stamped = true;
            debug!(record_type, field = %config.updater_field, "stamped updater");
        }

        outcome
    }
}
