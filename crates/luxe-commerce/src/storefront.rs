//! Storefront session: the one owner of cart, wishlist and checkout state.
//!
//! Every mutation goes through [`Storefront`], which logs a structured entry
//! and notifies subscribers with the resulting [`CartEvent`]. Presentation code
//! re-reads state through [`Storefront::snapshot`] after each notification.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use luxe_observability::{SessionId, StructuredLogger};

use crate::cart::{CartEvent, CartManager, CartSnapshot, LineKey};
use crate::catalog::{Catalog, Product};
use crate::checkout::{
    CheckoutFlow, CheckoutStep, Order, OrderSummary, PaymentDetails, ShippingDetails,
};
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::ids::OrderNumber;
use crate::money::Money;
use crate::search::ProductFilter;

/// Handle returned by [`Storefront::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&CartEvent)>;

/// A shopper's session over a shared catalog.
pub struct Storefront {
    catalog: Arc<Catalog>,
    cart: CartManager,
    checkout: CheckoutFlow,
    config: StoreConfig,
    logger: StructuredLogger,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Storefront {
    /// Open a session, rejecting a config whose currency differs from the
    /// catalog's.
    pub fn new(catalog: Arc<Catalog>, config: StoreConfig) -> Result<Self, CommerceError> {
        if let Some(currency) = catalog.currency() {
            if currency != config.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: config.currency.code().to_string(),
                });
            }
        }
        Ok(Self::assemble(catalog, config))
    }

    fn assemble(catalog: Arc<Catalog>, config: StoreConfig) -> Self {
        let logger = StructuredLogger::new(SessionId::generate())
            .with_format(config.log_format)
            .with_min_level(config.log_level)
            .for_component("storefront");

        Self {
            catalog,
            cart: CartManager::from_config(&config),
            checkout: CheckoutFlow::new(),
            config,
            logger,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Session over the built-in catalog with default settings.
    pub fn builtin() -> Self {
        Self::assemble(Arc::new(Catalog::builtin()), StoreConfig::default())
    }

    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger.for_component("storefront");
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn checkout(&self) -> &CheckoutFlow {
        &self.checkout
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    fn lookup(&self, product_id: &str) -> Result<Arc<Product>, CommerceError> {
        self.catalog
            .find_by_id(product_id)
            .cloned()
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))
    }

    // Cart

    pub fn add_to_cart(
        &mut self,
        product: &Arc<Product>,
        quantity: i64,
        color: Option<&str>,
        size: Option<&str>,
    ) -> Option<CartEvent> {
        let event = self.cart.add_to_cart(product, quantity, color, size);
        if event.is_none() {
            self.logger
                .warn_builder("add ignored: currency differs from cart")
                .field("product_id", product.id.as_str())
                .field("currency", product.price.currency.code())
                .emit();
        }
        self.record(event)
    }

    /// Add a catalog product by id.
    pub fn add_to_cart_by_id(
        &mut self,
        product_id: &str,
        quantity: i64,
        color: Option<&str>,
        size: Option<&str>,
    ) -> Result<Option<CartEvent>, CommerceError> {
        let product = self.lookup(product_id)?;
        Ok(self.add_to_cart(&product, quantity, color, size))
    }

    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> Option<CartEvent> {
        let event = self.cart.update_quantity(product_id, quantity);
        self.record(event)
    }

    pub fn remove_from_cart(&mut self, product_id: &str) -> Option<CartEvent> {
        let event = self.cart.remove_from_cart(product_id);
        self.record(event)
    }

    pub fn update_line(&mut self, key: &LineKey, quantity: i64) -> Option<CartEvent> {
        let event = self.cart.update_line(key, quantity);
        self.record(event)
    }

    pub fn remove_line(&mut self, key: &LineKey) -> Option<CartEvent> {
        let event = self.cart.remove_line(key);
        self.record(event)
    }

    pub fn clear_cart(&mut self) -> Option<CartEvent> {
        let event = self.cart.clear_cart();
        self.record(event)
    }

    pub fn cart_count(&self) -> i64 {
        self.cart.get_cart_count()
    }

    pub fn cart_total(&self) -> Money {
        self.cart.get_cart_total()
    }

    // Wishlist

    pub fn add_to_wishlist(&mut self, product: &Arc<Product>) -> Option<CartEvent> {
        let event = self.cart.add_to_wishlist(product);
        self.record(event)
    }

    pub fn add_to_wishlist_by_id(
        &mut self,
        product_id: &str,
    ) -> Result<Option<CartEvent>, CommerceError> {
        let product = self.lookup(product_id)?;
        Ok(self.add_to_wishlist(&product))
    }

    pub fn remove_from_wishlist(&mut self, product_id: &str) -> Option<CartEvent> {
        let event = self.cart.remove_from_wishlist(product_id);
        self.record(event)
    }

    /// Flip wishlist membership; returns the new membership.
    pub fn toggle_wishlist_by_id(&mut self, product_id: &str) -> Result<bool, CommerceError> {
        let product = self.lookup(product_id)?;
        let saved = self.cart.toggle_wishlist(&product);
        let event = if saved {
            CartEvent::WishlistAdded { product_id: product.id.clone() }
        } else {
            CartEvent::WishlistRemoved { product_id: product.id.clone() }
        };
        self.record(Some(event));
        Ok(saved)
    }

    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.cart.is_in_wishlist(product_id)
    }

    // Subscriptions

    /// Register a listener called after every effective change.
    pub fn subscribe(&mut self, listener: impl FnMut(&CartEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` for an unknown id.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() < len_before
    }

    fn record(&mut self, event: Option<CartEvent>) -> Option<CartEvent> {
        let event = event?;

        self.logger
            .info_builder(event.name())
            .field_opt("product_id", event.product_id().map(|id| id.as_str()))
            .field_i64("cart_count", self.cart.get_cart_count())
            .field_i64("revision", self.cart.revision() as i64)
            .emit();

        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
        Some(event)
    }

    // Views

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::capture(&self.cart)
    }

    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary::for_cart(&self.cart, &self.config)
    }

    pub fn filter_products(&self, filter: &ProductFilter) -> Vec<Arc<Product>> {
        filter.apply(self.catalog.list_products())
    }

    /// Quick search using the configured suggestion limit.
    pub fn search(&self, query: &str) -> Vec<Arc<Product>> {
        self.catalog.search(query, self.config.search_limit)
    }

    /// A fresh filter bounded by the configured price ceiling.
    pub fn default_filter(&self) -> ProductFilter {
        ProductFilter::from_config(&self.config)
    }

    // Checkout

    pub fn set_shipping_details(&mut self, details: ShippingDetails) {
        self.checkout.set_shipping(details);
    }

    pub fn set_payment_details(&mut self, details: PaymentDetails) {
        self.checkout.set_payment(details);
    }

    pub fn advance_checkout(&mut self) -> Result<CheckoutStep, CommerceError> {
        let step = self.checkout.advance()?;
        self.logger
            .debug_builder("checkout_advanced")
            .field("step", step.as_str())
            .emit();
        Ok(step)
    }

    pub fn checkout_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        self.checkout.go_back()
    }

    /// Place the order for the current cart.
    ///
    /// Waits out the configured placement delay, then snapshots the cart into
    /// an [`Order`], clears the cart and resets the checkout flow. The delay
    /// has no failure path.
    pub async fn place_order(&mut self) -> Result<Order, CommerceError> {
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        if self.checkout.step != CheckoutStep::Review {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.checkout.step.as_str().to_string(),
                to: "placed".to_string(),
            });
        }
        let missing: Vec<&str> = self
            .checkout
            .shipping
            .missing_fields()
            .into_iter()
            .chain(self.checkout.payment.missing_fields())
            .collect();
        if !missing.is_empty() {
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        }

        let started = Instant::now();
        tokio::time::sleep(self.config.order_placement_delay()).await;

        let order = Order::from_cart(
            OrderNumber::generate(),
            &self.cart,
            self.order_summary(),
            self.checkout.shipping.clone(),
            self.checkout.payment.masked_card_number(),
        );

        self.logger
            .info_builder("order_placed")
            .field("order", order.number.as_str())
            .field_i64("items", order.item_count)
            .field("total", order.summary.total.display())
            .duration_ms("placement", started.elapsed())
            .emit();

        self.record(Some(CartEvent::OrderPlaced {
            order_number: order.number.clone(),
        }));
        let cleared = self.cart.clear_cart();
        self.record(cleared);
        self.checkout.reset();

        Ok(order)
    }
}

impl fmt::Debug for Storefront {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storefront")
            .field("session", self.logger.session_id())
            .field("cart", &self.cart)
            .field("checkout", &self.checkout)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use luxe_observability::LogSink;

    use super::*;

    fn quiet() -> Storefront {
        Storefront::builtin().with_logger(StructuredLogger::disabled())
    }

    #[test]
    fn test_by_id_wrappers_report_unknown_products() {
        let mut store = quiet();
        assert_eq!(
            store.add_to_cart_by_id("999", 1, None, None),
            Err(CommerceError::ProductNotFound("999".to_string()))
        );
        assert!(store.add_to_wishlist_by_id("999").is_err());
        assert!(store.toggle_wishlist_by_id("999").is_err());
        assert_eq!(store.cart_count(), 0);
    }

    #[test]
    fn test_subscribers_see_every_change() {
        let mut store = quiet();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |event| sink.borrow_mut().push(event.name()));

        store.add_to_cart_by_id("1", 1, Some("Black"), None).unwrap();
        store.add_to_cart_by_id("1", 1, Some("Black"), None).unwrap();
        store.update_quantity("1", 5);
        store.update_quantity("missing", 5);
        store.toggle_wishlist_by_id("2").unwrap();

        assert_eq!(
            *seen.borrow(),
            vec!["item_added", "item_merged", "quantity_updated", "wishlist_added"]
        );

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.clear_cart();
        assert_eq!(seen.borrow().len(), 4);
    }

    #[test]
    fn test_mutations_are_logged() {
        let (sink, lines) = LogSink::capture();
        let logger = StructuredLogger::new(SessionId::from_string("sess-test")).with_sink(sink);
        let mut store = Storefront::builtin().with_logger(logger);

        store.add_to_cart_by_id("3", 2, None, Some("50ml")).unwrap();

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        let entry: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(entry["message"], "item_added");
        assert_eq!(entry["component"], "storefront");
        assert_eq!(entry["product_id"], "3");
        assert_eq!(entry["cart_count"], 2);
        assert_eq!(entry["session_id"], "sess-test");
    }

    #[test]
    fn test_snapshot_reflects_latest_state() {
        let mut store = quiet();
        store.add_to_cart_by_id("6", 1, Some("Gold/Brown"), None).unwrap();
        store.add_to_wishlist_by_id("5").unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.item_count, 1);
        assert_eq!(snapshot.total, Money::usd(24999));
        assert_eq!(snapshot.wishlist.len(), 1);
        assert_eq!(snapshot.revision, store.cart().revision());
    }

    #[test]
    fn test_search_uses_configured_limit() {
        let config = StoreConfig {
            search_limit: 2,
            ..StoreConfig::default()
        };
        let store = Storefront::new(Arc::new(Catalog::builtin()), config)
            .unwrap()
            .with_logger(StructuredLogger::disabled());
        assert_eq!(store.search("a").len(), 2);
    }

    #[test]
    fn test_config_currency_must_match_catalog() {
        let config = StoreConfig::from_toml_str("currency = \"EUR\"\n").unwrap();
        let result = Storefront::new(Arc::new(Catalog::builtin()), config);
        assert!(matches!(
            result,
            Err(CommerceError::CurrencyMismatch { ref expected, ref got })
                if expected == "USD" && got == "EUR"
        ));
    }
}
