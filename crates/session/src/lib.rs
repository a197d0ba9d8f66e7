//! Storefront application layer.
//!
//! A [`StorefrontSession`] is the session-scoped owned structure that holds all
//! per-visit mutable state — the cart and the active section — instead of
//! ambient static globals. It resolves products through the shared catalog,
//! runs the cart aggregate's decide/evolve cycle, and publishes committed
//! events so presentation-layer observers can re-render.

pub mod nav;
pub mod session;
pub mod view;

pub use nav::{Section, SectionNav};
pub use session::StorefrontSession;
pub use view::{CartLineView, CartView};
