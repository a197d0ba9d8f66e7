//! `farmstand-events` — event abstraction and in-process distribution.
//!
//! Events are how state changes become observable: the session applies them to
//! the cart, then publishes them so presentation-layer observers can re-render.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod handler;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use handler::execute;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
