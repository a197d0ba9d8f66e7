//! End-to-end session flow over the builtin catalog.

use std::sync::Arc;

use farmstand_catalog::Catalog;
use farmstand_core::{DomainError, ProductId};
use farmstand_events::Event;
use farmstand_session::{Section, StorefrontSession};

fn session() -> StorefrontSession {
    StorefrontSession::new(Arc::new(Catalog::builtin()))
}

#[test]
fn shopping_flow_keeps_views_consistent() {
    let mut session = session();
    assert!(session.view().is_empty());

    // Linden Honey twice, Raspberry Preserve once.
    session.add_to_cart(ProductId::new(1)).unwrap();
    session.add_to_cart(ProductId::new(1)).unwrap();
    session.add_to_cart(ProductId::new(3)).unwrap();

    let view = session.view();
    assert_eq!(view.badge, 2);
    assert_eq!(view.lines[0].name, "Linden Honey");
    assert_eq!(view.lines[0].quantity, 2);
    assert_eq!(view.lines[0].subtotal, 700);
    assert_eq!(view.lines[1].name, "Raspberry Preserve");
    assert_eq!(view.total, 700 + 180);

    session.set_quantity(ProductId::new(1), 0).unwrap();
    let view = session.view();
    assert_eq!(view.badge, 1);
    assert_eq!(view.total, 180);

    session.remove_from_cart(ProductId::new(3)).unwrap();
    assert!(session.view().is_empty());
    assert_eq!(session.view().total, 0);
}

#[test]
fn observers_receive_enveloped_events_in_order() {
    let mut session = session();
    let subscription = session.subscribe();

    session.add_to_cart(ProductId::new(1)).unwrap();
    session.add_to_cart(ProductId::new(1)).unwrap();
    session.set_quantity(ProductId::new(1), 0).unwrap();

    let first = subscription.try_recv().unwrap();
    let second = subscription.try_recv().unwrap();
    let third = subscription.try_recv().unwrap();

    assert_eq!(first.sequence_number(), 1);
    assert_eq!(second.sequence_number(), 2);
    assert_eq!(third.sequence_number(), 3);

    assert_eq!(first.payload().event_type(), "cart.item_added");
    assert_eq!(second.payload().event_type(), "cart.quantity_changed");
    assert_eq!(third.payload().event_type(), "cart.item_removed");

    for envelope in [&first, &second, &third] {
        assert_eq!(envelope.cart_id(), session.cart().id_typed());
    }
}

#[test]
fn no_op_operations_publish_nothing() {
    let mut session = session();
    let subscription = session.subscribe();

    session.remove_from_cart(ProductId::new(99)).unwrap();
    session.set_quantity(ProductId::new(99), 4).unwrap();

    assert!(subscription.try_recv().is_err());
    assert!(session.view().is_empty());
}

#[test]
fn adding_an_unknown_product_is_not_found() {
    let mut session = session();

    let err = session.add_to_cart(ProductId::new(99)).unwrap_err();
    assert_eq!(err, DomainError::NotFound);
    assert!(session.view().is_empty());
}

#[test]
fn negative_quantity_is_rejected_and_state_is_unchanged() {
    let mut session = session();
    session.add_to_cart(ProductId::new(2)).unwrap();
    let before = session.view();

    let err = session.set_quantity(ProductId::new(2), -3).unwrap_err();
    match err {
        DomainError::Validation(_) => {}
        _ => panic!("Expected Validation error for negative quantity"),
    }
    assert_eq!(session.view(), before);
}

#[test]
fn navigation_tracks_the_last_known_section() {
    let mut session = session();
    assert_eq!(session.active_section(), Section::Home);

    assert_eq!(session.navigate_to("delivery"), Some(Section::Delivery));
    assert_eq!(session.active_section(), Section::Delivery);

    // Unknown anchors change nothing.
    assert_eq!(session.navigate_to("warehouse"), None);
    assert_eq!(session.active_section(), Section::Delivery);
}

#[test]
fn checkout_requires_a_non_empty_cart() {
    let mut session = session();

    let err = session.checkout().unwrap_err();
    match err {
        DomainError::Validation(_) => {}
        _ => panic!("Expected Validation error for empty-cart checkout"),
    }

    session.add_to_cart(ProductId::new(8)).unwrap();
    let summary = session.checkout().unwrap();
    assert_eq!(summary.total, 220);

    // Checkout initiation leaves the cart untouched.
    assert_eq!(session.view(), summary);
}
