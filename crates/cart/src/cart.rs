use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use farmstand_catalog::Product;
use farmstand_core::{Aggregate, AggregateRoot, CartId, DomainError, ProductId, ValueObject};
use farmstand_events::Event;

/// Cart line: a product snapshot plus the quantity in the cart.
///
/// The product's fields are copied in at insertion time rather than held by
/// reference; the catalog is immutable, so the copy can never go stale.
/// Invariant: `quantity >= 1` — a line that would reach quantity 0 is removed
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Price × quantity for this line.
    pub fn subtotal(&self) -> u64 {
        self.product.price * u64::from(self.quantity)
    }
}

impl ValueObject for CartLine {}

/// Aggregate root: Cart.
///
/// Created empty at session start, mutated only through commands, discarded
/// with the session. Lines keep insertion order: the order in which distinct
/// products were first added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLine>,
    version: u64,
}

impl Cart {
    /// Create an empty cart. Empty carts are immediately usable; there is no
    /// separate creation command.
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct line items (the cart badge count).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id() == product_id)
    }

    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.line(product_id).map(|l| l.quantity)
    }

    /// Sum of price × quantity over all lines. Never stored; recomputed from
    /// current state on every call.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem.
///
/// Carries the full product snapshot; the cart does not reach back into the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub cart_id: CartId,
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: SetQuantity.
///
/// `quantity` is signed at the command boundary so that out-of-domain input
/// is rejected explicitly instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetQuantity {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
    SetQuantity(SetQuantity),
}

/// Event: ItemAdded. The line enters the cart with quantity 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub cart_id: CartId,
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChanged {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    QuantityChanged(QuantityChanged),
    ItemRemoved(ItemRemoved),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item_added",
            CartEvent::QuantityChanged(_) => "cart.quantity_changed",
            CartEvent::ItemRemoved(_) => "cart.item_removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::QuantityChanged(e) => e.occurred_at,
            CartEvent::ItemRemoved(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => {
                self.lines.push(CartLine {
                    product: e.product.clone(),
                    quantity: 1,
                });
            }
            CartEvent::QuantityChanged(e) => {
                if let Some(line) = self
                    .lines
                    .iter_mut()
                    .find(|l| l.product_id() == e.product_id)
                {
                    line.quantity = e.quantity;
                }
            }
            CartEvent::ItemRemoved(e) => {
                self.lines.retain(|l| l.product_id() != e.product_id);
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddItem(cmd) => self.handle_add(cmd),
            CartCommand::RemoveItem(cmd) => self.handle_remove(cmd),
            CartCommand::SetQuantity(cmd) => self.handle_set_quantity(cmd),
        }
    }
}

impl Cart {
    fn ensure_cart_id(&self, cart_id: CartId) -> Result<(), DomainError> {
        if self.id != cart_id {
            return Err(DomainError::invariant("cart_id mismatch"));
        }
        Ok(())
    }

    fn handle_add(&self, cmd: &AddItem) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        match self.line(cmd.product.id) {
            Some(line) => {
                let quantity = line.quantity.checked_add(1).ok_or_else(|| {
                    DomainError::validation("quantity limit reached for this line")
                })?;
                Ok(vec![CartEvent::QuantityChanged(QuantityChanged {
                    cart_id: cmd.cart_id,
                    product_id: cmd.product.id,
                    quantity,
                    occurred_at: cmd.occurred_at,
                })])
            }
            None => Ok(vec![CartEvent::ItemAdded(ItemAdded {
                cart_id: cmd.cart_id,
                product: cmd.product.clone(),
                occurred_at: cmd.occurred_at,
            })]),
        }
    }

    fn handle_remove(&self, cmd: &RemoveItem) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        // Removing an absent line is a no-op, not an error.
        if self.line(cmd.product_id).is_none() {
            return Ok(vec![]);
        }

        Ok(vec![CartEvent::ItemRemoved(ItemRemoved {
            cart_id: cmd.cart_id,
            product_id: cmd.product_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_set_quantity(&self, cmd: &SetQuantity) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        if cmd.quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        if cmd.quantity > i64::from(u32::MAX) {
            return Err(DomainError::validation("quantity out of range"));
        }

        // Quantity 0 means removal: a cart never holds a zero-quantity line.
        if cmd.quantity == 0 {
            return self.handle_remove(&RemoveItem {
                cart_id: cmd.cart_id,
                product_id: cmd.product_id,
                occurred_at: cmd.occurred_at,
            });
        }

        // Updating an absent line is a no-op, not an error.
        if self.line(cmd.product_id).is_none() {
            return Ok(vec![]);
        }

        Ok(vec![CartEvent::QuantityChanged(QuantityChanged {
            cart_id: cmd.cart_id,
            product_id: cmd.product_id,
            quantity: cmd.quantity as u32,
            occurred_at: cmd.occurred_at,
        })])
    }
}
