use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use farmstand_cart::{AddItem, Cart, CartCommand, CartEvent, RemoveItem, SetQuantity};
use farmstand_catalog::Catalog;
use farmstand_core::{CartId, DomainError, DomainResult, ProductId, SessionId};
use farmstand_events::{EventBus, EventEnvelope, InMemoryEventBus, Subscription, execute};

use crate::nav::{Section, SectionNav};
use crate::view::CartView;

/// Per-visit application state: the cart, the active section, and the bus
/// observers are notified through.
///
/// One session is owned by one logical thread of control; all mutation goes
/// through `&mut self`. State lives exactly as long as the session value and
/// is never persisted.
#[derive(Debug)]
pub struct StorefrontSession {
    session_id: SessionId,
    catalog: Arc<Catalog>,
    cart: Cart,
    nav: SectionNav,
    bus: Arc<InMemoryEventBus<EventEnvelope<CartEvent>>>,
    sequence: u64,
}

impl StorefrontSession {
    /// Start a session with an empty cart over the given catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let session_id = SessionId::new();
        let cart = Cart::new(CartId::new());
        tracing::info!(%session_id, cart_id = %cart.id_typed(), "storefront session started");

        Self {
            session_id,
            catalog,
            cart,
            nav: SectionNav::new(),
            bus: Arc::new(InMemoryEventBus::new()),
            sequence: 0,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn active_section(&self) -> Section {
        self.nav.active()
    }

    /// Register an observer. Every committed cart event is delivered as an
    /// envelope with a per-cart monotonic sequence number.
    pub fn subscribe(&self) -> Subscription<EventEnvelope<CartEvent>> {
        self.bus.subscribe()
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// The product is resolved through the catalog; this is the only layer at
    /// which an id without a product can be observed, so unknown ids surface
    /// here as `NotFound`.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> DomainResult<()> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(DomainError::not_found)?
            .clone();

        tracing::debug!(%product_id, "add_to_cart");
        self.dispatch(CartCommand::AddItem(AddItem {
            cart_id: self.cart.id_typed(),
            product,
            occurred_at: Utc::now(),
        }))
    }

    /// Remove a line from the cart. Absent ids are a no-op, not an error.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> DomainResult<()> {
        tracing::debug!(%product_id, "remove_from_cart");
        self.dispatch(CartCommand::RemoveItem(RemoveItem {
            cart_id: self.cart.id_typed(),
            product_id,
            occurred_at: Utc::now(),
        }))
    }

    /// Set a line's quantity. Zero removes the line; negative values are
    /// rejected; absent ids are a no-op.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> DomainResult<()> {
        tracing::debug!(%product_id, quantity, "set_quantity");
        self.dispatch(CartCommand::SetQuantity(SetQuantity {
            cart_id: self.cart.id_typed(),
            product_id,
            quantity,
            occurred_at: Utc::now(),
        }))
    }

    /// Request navigation to a section by anchor id.
    ///
    /// Updates the active indicator and returns the section so the caller can
    /// run the scroll effect; unknown anchors are a silent no-op.
    pub fn navigate_to(&mut self, anchor: &str) -> Option<Section> {
        let section = self.nav.request(anchor);
        match section {
            Some(section) => tracing::debug!(%section, "navigated"),
            None => tracing::debug!(anchor, "ignoring navigation to unknown section"),
        }
        section
    }

    /// The cart as the storefront displays it, derived from current state.
    pub fn view(&self) -> CartView {
        CartView::from_cart(&self.cart)
    }

    /// Initiate checkout: validate the cart is non-empty and hand back the
    /// order summary. Order submission is outside this system's boundary, so
    /// the cart is left untouched.
    pub fn checkout(&self) -> DomainResult<CartView> {
        if self.cart.is_empty() {
            return Err(DomainError::validation("cannot check out an empty cart"));
        }
        let view = self.view();
        tracing::info!(
            session_id = %self.session_id,
            items = view.badge,
            total = view.total,
            "checkout initiated"
        );
        Ok(view)
    }

    fn dispatch(&mut self, command: CartCommand) -> DomainResult<()> {
        let events = execute(&mut self.cart, &command)?;

        for event in events {
            self.sequence += 1;
            let envelope = EventEnvelope::new(
                Uuid::now_v7(),
                self.cart.id_typed(),
                self.sequence,
                event,
            );
            // Notification is lossy: the cart has already changed, observers
            // that miss an event re-read the view.
            if self.bus.publish(envelope).is_err() {
                tracing::warn!(session_id = %self.session_id, "event bus unavailable; notification dropped");
            }
        }

        Ok(())
    }
}
