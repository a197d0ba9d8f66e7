//! Cart domain module.
//!
//! This crate contains the business rules for the shopping cart, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod cart;

pub use cart::{
    AddItem, Cart, CartCommand, CartEvent, CartLine, ItemAdded, ItemRemoved, QuantityChanged,
    RemoveItem, SetQuantity,
};

pub use farmstand_core::CartId;
