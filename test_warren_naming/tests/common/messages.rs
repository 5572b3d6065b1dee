use warren_naming::{NamingPolicy, TypeNamingOverride, TypeRegistry};

/// Message without any naming override.
pub struct Order;

/// Message with a queue name override and an empty exchange name override.
pub struct Invoice;

/// Message with an exchange name override only.
pub struct Refund;

/// Message with both overrides.
pub struct Payment;

/// Registers explicit identities and overrides for all test messages.
pub fn make_registry() -> TypeRegistry {
    TypeRegistry::new()
        .with_identity::<Order>("Order")
        .with_identity::<Invoice>("Invoice")
        .with_identity::<Refund>("Refund")
        .with_identity::<Payment>("Payment")
        .with_override::<Invoice>(
            TypeNamingOverride::none()
                .with_queue_name("inv_q")
                .with_exchange_name(""),
        )
        .with_override::<Refund>(TypeNamingOverride::none().with_exchange_name("refunds_x"))
        .with_override::<Payment>(
            TypeNamingOverride::none()
                .with_exchange_name("payments_x")
                .with_queue_name("payments_q"),
        )
}

/// Builds a policy over [`make_registry`] with default strategies.
pub fn make_policy() -> NamingPolicy {
    NamingPolicy::builder()
        .with_registry(make_registry())
        .build()
        .expect("a policy with a registry should always build")
}
