use crate::{
    DeliveryContext, MessageType, NamingConfig, QUEUE_SUBSCRIBER_SEPARATOR, TypeIdentityResolver,
    TypeMetadataLookup, UniqueToken,
};
use std::sync::Arc;

/// Derives the exchange name for a message type.
pub type ExchangeNameStrategy = Arc<dyn Fn(&MessageType) -> String + Send + Sync>;

/// Derives the topic (routing key) for publishing a message type.
pub type TopicStrategy = Arc<dyn Fn(&MessageType) -> String + Send + Sync>;

/// Derives the queue name for a message type and a subscriber ID.
pub type QueueNameStrategy = Arc<dyn Fn(&MessageType, &str) -> String + Send + Sync>;

/// Derives the routing key for RPC requests of a message type.
pub type RpcRoutingKeyStrategy = Arc<dyn Fn(&MessageType) -> String + Send + Sync>;

/// Produces the name of the default error queue.
pub type ErrorQueueNameStrategy = Arc<dyn Fn() -> String + Send + Sync>;

/// Derives the error exchange name from the context of a failed delivery.
pub type ErrorExchangeNameStrategy = Arc<dyn Fn(&DeliveryContext) -> String + Send + Sync>;

/// Produces the name of the shared RPC exchange.
pub type RpcExchangeNameStrategy = Arc<dyn Fn() -> String + Send + Sync>;

/// Produces the name of an RPC return queue.
pub type RpcReturnQueueNameStrategy = Arc<dyn Fn() -> String + Send + Sync>;

/// Produces a consumer tag.
pub type ConsumerTagStrategy = Arc<dyn Fn() -> String + Send + Sync>;

/// The collaborators that the type-aware default strategies consult.
#[derive(Clone)]
pub(crate) struct Collaborators {
    pub(crate) identity: Arc<dyn TypeIdentityResolver>,
    pub(crate) metadata: Arc<dyn TypeMetadataLookup>,
}

pub(crate) fn default_exchange_name(collaborators: &Collaborators) -> ExchangeNameStrategy {
    let Collaborators { identity, metadata } = collaborators.clone();

    Arc::new(move |message_type: &MessageType| {
        match metadata.naming_override(message_type).exchange_name() {
            Some(exchange_name) => exchange_name.to_string(),
            None => identity.serialize(message_type),
        }
    })
}

pub(crate) fn default_topic(config: &NamingConfig) -> TopicStrategy {
    let topic: Arc<str> = Arc::from(config.topic());

    Arc::new(move |_: &MessageType| topic.to_string())
}

/// The empty subscriber ID only suppresses the separator when an override
/// supplies the queue name; the fallback always appends it.
pub(crate) fn default_queue_name(collaborators: &Collaborators) -> QueueNameStrategy {
    let Collaborators { identity, metadata } = collaborators.clone();

    Arc::new(move |message_type: &MessageType, subscriber_id: &str| {
        match metadata.naming_override(message_type).queue_name() {
            Some(queue_name) if subscriber_id.is_empty() => queue_name.to_string(),
            Some(queue_name) => compose_queue_name(queue_name, subscriber_id),
            None => compose_queue_name(&identity.serialize(message_type), subscriber_id),
        }
    })
}

pub(crate) fn default_rpc_routing_key(collaborators: &Collaborators) -> RpcRoutingKeyStrategy {
    let identity = Arc::clone(&collaborators.identity);

    Arc::new(move |message_type: &MessageType| identity.serialize(message_type))
}

pub(crate) fn default_error_queue_name(config: &NamingConfig) -> ErrorQueueNameStrategy {
    let error_queue: Arc<str> = Arc::from(config.error_queue());

    Arc::new(move || error_queue.to_string())
}

pub(crate) fn default_error_exchange_name(config: &NamingConfig) -> ErrorExchangeNameStrategy {
    let prefix: Arc<str> = Arc::from(config.error_exchange_prefix());

    Arc::new(move |context: &DeliveryContext| format!("{}{}", prefix, context.routing_key()))
}

pub(crate) fn default_rpc_exchange_name(config: &NamingConfig) -> RpcExchangeNameStrategy {
    let rpc_exchange: Arc<str> = Arc::from(config.rpc_exchange());

    Arc::new(move || rpc_exchange.to_string())
}

pub(crate) fn default_rpc_return_queue_name(config: &NamingConfig) -> RpcReturnQueueNameStrategy {
    let prefix: Arc<str> = Arc::from(config.rpc_return_queue_prefix());

    Arc::new(move || format!("{}{}", prefix, UniqueToken::random().hyphenated()))
}

pub(crate) fn default_consumer_tag() -> ConsumerTagStrategy {
    Arc::new(|| UniqueToken::random().hyphenated().to_string())
}

fn compose_queue_name(base: &str, subscriber_id: &str) -> String {
    format!("{}{}{}", base, QUEUE_SUBSCRIBER_SEPARATOR, subscriber_id)
}
