#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(test, deny(warnings))]

/// Exposes the message type handle that all naming strategies accept.
mod message;
pub use self::message::MessageType;

/// Exposes an application configuration section.
mod settings;
pub use self::settings::{ENV_PREFIX, NamingConfig, NamingConfigError};

/// Exposes the naming policy itself, along with its strategy contract.
mod policy;
pub use self::policy::builder::{NamingPolicyBuilder, NamingPolicyError};
pub use self::policy::strategy::{
    ConsumerTagStrategy, ErrorExchangeNameStrategy, ErrorQueueNameStrategy,
    ExchangeNameStrategy, QueueNameStrategy, RpcExchangeNameStrategy,
    RpcReturnQueueNameStrategy, RpcRoutingKeyStrategy, TopicStrategy,
};
pub use self::policy::{NamingPolicy, SubscriptionNames};

/// Exposes the collaborators that the naming policy consults: type identity
/// resolution and per-type metadata lookup.
mod resolve {
    pub mod identity;
    pub mod metadata;
    pub mod registry;
}
pub use self::resolve::identity::{TypeIdentityResolver, TypeNameResolver};
pub use self::resolve::metadata::{NoOverrides, TypeMetadataLookup};
pub use self::resolve::registry::TypeRegistry;

/// Exposes the read-only input records consumed by the naming strategies.
mod repr {
    pub mod delivery;
    pub mod overrides;
}
pub use self::repr::delivery::DeliveryContext;
pub use self::repr::overrides::TypeNamingOverride;

/// Exposes the globally unique token used for per-call broker names.
mod token;
pub use self::token::{Hyphenated, Simple, UniqueToken};

/// Name of the default dead-letter queue for messages that failed processing.
pub const DEFAULT_ERROR_QUEUE: &str = "EasyNetQ_Default_Error_Queue";

/// Prefix of the per-routing-key error exchanges.
pub const DEFAULT_ERROR_EXCHANGE_PREFIX: &str = "ErrorExchange_";

/// Name of the shared RPC exchange.
pub const DEFAULT_RPC_EXCHANGE: &str = "easy_net_q_rpc";

/// Prefix of the per-call RPC return queues.
pub const DEFAULT_RPC_RETURN_QUEUE_PREFIX: &str = "easynetq.response.";

/// Separator placed between a base queue name and a subscriber ID.
pub const QUEUE_SUBSCRIBER_SEPARATOR: &str = "_";
