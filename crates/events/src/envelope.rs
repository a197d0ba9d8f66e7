use serde::{Deserialize, Serialize};
use uuid::Uuid;

use farmstand_core::CartId;

/// Envelope for a committed event, carrying stream metadata.
///
/// This is the unit published to observers after an event has been applied.
///
/// Notes:
/// - `sequence_number` is monotonically increasing per cart stream; observers
///   can use it to detect missed or duplicate deliveries.
/// - `payload` is the domain event itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    cart_id: CartId,

    /// Monotonically increasing position in the cart's event stream.
    sequence_number: u64,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(event_id: Uuid, cart_id: CartId, sequence_number: u64, payload: E) -> Self {
        Self {
            event_id,
            cart_id,
            sequence_number,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
