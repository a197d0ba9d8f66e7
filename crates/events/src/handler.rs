use farmstand_core::Aggregate;

/// Execute an aggregate command deterministically (no IO, no async).
///
/// The canonical lifecycle:
///
/// 1. **Decide**: `aggregate.handle(command)` returns events (pure, no mutation)
/// 2. **Evolve**: each event is applied via `aggregate.apply(event)`
///
/// The emitted events are returned so the caller can publish them to
/// observers. An empty event list means the command was accepted but changed
/// nothing.
pub fn execute<A>(aggregate: &mut A, command: &A::Command) -> Result<Vec<A::Event>, A::Error>
where
    A: Aggregate,
{
    let events = A::handle(aggregate, command)?;
    for ev in &events {
        A::apply(aggregate, ev);
    }
    Ok(events)
}
