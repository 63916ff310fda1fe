use tracing::debug;
use userstamp_core::ActorContext;

/// Find the acting user through the accessor called `accessor`.
///
/// Internal accessors count. Returns `None` when the context has no such
/// accessor or the accessor reports that nobody is acting; neither case is
/// an error.
pub fn resolve_actor<C>(ctx: &C, accessor: &str) -> Option<C::Actor>
where
    C: ActorContext + ?Sized,
{
    if !ctx.responds_to(accessor, true) {
        debug!(accessor, "context has no actor accessor");
        return None;
    }
    let actor = ctx.call_accessor(accessor);
    if actor.is_none() {
        debug!(accessor, "actor accessor reported no actor");
    }
    actor
}
