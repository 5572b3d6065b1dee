use self::strategy::{
    Collaborators, ConsumerTagStrategy, ErrorExchangeNameStrategy, ErrorQueueNameStrategy,
    ExchangeNameStrategy, QueueNameStrategy, RpcExchangeNameStrategy, RpcReturnQueueNameStrategy,
    RpcRoutingKeyStrategy, TopicStrategy,
};
use crate::{
    DeliveryContext, MessageType, NamingConfig, NamingPolicyBuilder, NoOverrides,
    TypeIdentityResolver,
};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tracing::debug;

pub mod builder;
pub mod strategy;

/// Derives every broker-facing name that a messaging client needs: exchange,
/// queue, and topic names for message types, error-handling names, RPC names,
/// and consumer tags.
///
/// ## Strategies
///
/// The policy is a table of independent strategies, one per kind of name.
/// Each strategy starts out with a default and may be replaced individually
/// using the `with_*` methods. Replacing one strategy never affects the
/// others.
///
/// | Kind                  | Default                                               |
/// |-----------------------|-------------------------------------------------------|
/// | exchange name         | override exchange name, else type identity            |
/// | topic                 | configured topic (empty by default)                   |
/// | queue name            | see [`queue_name`](NamingPolicy::queue_name)          |
/// | RPC routing key       | type identity                                         |
/// | error queue name      | `EasyNetQ_Default_Error_Queue`                        |
/// | error exchange name   | `ErrorExchange_` + original routing key               |
/// | RPC exchange name     | `easy_net_q_rpc`                                      |
/// | RPC return queue name | `easynetq.response.` + fresh [`UniqueToken`](crate::UniqueToken) |
/// | consumer tag          | fresh [`UniqueToken`](crate::UniqueToken)             |
///
/// The fixed names are configurable via [`NamingConfig`].
///
/// ## Sharing
///
/// All `with_*` methods consume the policy, so all configuration happens
/// before the policy is shared. Cloning is cheap, and a policy may be used
/// concurrently from any number of threads.
#[derive(Clone)]
pub struct NamingPolicy {
    exchange_name: ExchangeNameStrategy,
    topic: TopicStrategy,
    queue_name: QueueNameStrategy,
    rpc_routing_key: RpcRoutingKeyStrategy,
    error_queue_name: ErrorQueueNameStrategy,
    error_exchange_name: ErrorExchangeNameStrategy,
    rpc_exchange_name: RpcExchangeNameStrategy,
    rpc_return_queue_name: RpcReturnQueueNameStrategy,
    consumer_tag: ConsumerTagStrategy,
}

/// Bundles the names that a single subscriber needs to bind its queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionNames {
    exchange: String,
    queue: String,
    topic: String,
}

impl NamingPolicy {
    /// Creates a policy with default strategies that resolve type identities
    /// using the given resolver and know of no naming overrides.
    pub fn new(identity_resolver: impl TypeIdentityResolver + 'static) -> Self {
        let collaborators = Collaborators {
            identity: Arc::new(identity_resolver),
            metadata: Arc::new(NoOverrides),
        };

        Self::assemble(&collaborators, &NamingConfig::default())
    }

    /// Creates a new [`NamingPolicyBuilder`].
    pub fn builder() -> NamingPolicyBuilder {
        NamingPolicyBuilder::new()
    }

    pub(crate) fn assemble(collaborators: &Collaborators, config: &NamingConfig) -> Self {
        debug!(
            error_queue = config.error_queue(),
            error_exchange_prefix = config.error_exchange_prefix(),
            rpc_exchange = config.rpc_exchange(),
            rpc_return_queue_prefix = config.rpc_return_queue_prefix(),
            topic = config.topic(),
            "Assembled naming policy",
        );

        Self {
            exchange_name: strategy::default_exchange_name(collaborators),
            topic: strategy::default_topic(config),
            queue_name: strategy::default_queue_name(collaborators),
            rpc_routing_key: strategy::default_rpc_routing_key(collaborators),
            error_queue_name: strategy::default_error_queue_name(config),
            error_exchange_name: strategy::default_error_exchange_name(config),
            rpc_exchange_name: strategy::default_rpc_exchange_name(config),
            rpc_return_queue_name: strategy::default_rpc_return_queue_name(config),
            consumer_tag: strategy::default_consumer_tag(),
        }
    }
}

impl NamingPolicy {
    /// Re-creates this policy with the given exchange name strategy.
    pub fn with_exchange_name<F>(self, strategy: F) -> Self
    where
        F: Fn(&MessageType) -> String + Send + Sync + 'static,
    {
        announce_replacement("exchange_name");

        Self {
            exchange_name: Arc::new(strategy),
            ..self
        }
    }

    /// Re-creates this policy with the given topic strategy.
    pub fn with_topic<F>(self, strategy: F) -> Self
    where
        F: Fn(&MessageType) -> String + Send + Sync + 'static,
    {
        announce_replacement("topic");

        Self {
            topic: Arc::new(strategy),
            ..self
        }
    }

    /// Re-creates this policy with the given queue name strategy.
    pub fn with_queue_name<F>(self, strategy: F) -> Self
    where
        F: Fn(&MessageType, &str) -> String + Send + Sync + 'static,
    {
        announce_replacement("queue_name");

        Self {
            queue_name: Arc::new(strategy),
            ..self
        }
    }

    /// Re-creates this policy with the given RPC routing key strategy.
    pub fn with_rpc_routing_key<F>(self, strategy: F) -> Self
    where
        F: Fn(&MessageType) -> String + Send + Sync + 'static,
    {
        announce_replacement("rpc_routing_key");

        Self {
            rpc_routing_key: Arc::new(strategy),
            ..self
        }
    }

    /// Re-creates this policy with the given error queue name strategy.
    pub fn with_error_queue_name<F>(self, strategy: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        announce_replacement("error_queue_name");

        Self {
            error_queue_name: Arc::new(strategy),
            ..self
        }
    }

    /// Re-creates this policy with the given error exchange name strategy.
    pub fn with_error_exchange_name<F>(self, strategy: F) -> Self
    where
        F: Fn(&DeliveryContext) -> String + Send + Sync + 'static,
    {
        announce_replacement("error_exchange_name");

        Self {
            error_exchange_name: Arc::new(strategy),
            ..self
        }
    }

    /// Re-creates this policy with the given RPC exchange name strategy.
    pub fn with_rpc_exchange_name<F>(self, strategy: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        announce_replacement("rpc_exchange_name");

        Self {
            rpc_exchange_name: Arc::new(strategy),
            ..self
        }
    }

    /// Re-creates this policy with the given RPC return queue name strategy.
    ///
    /// Every outstanding RPC call declares its own return queue, so the given
    /// strategy must produce a distinct name on every invocation.
    pub fn with_rpc_return_queue_name<F>(self, strategy: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        announce_replacement("rpc_return_queue_name");

        Self {
            rpc_return_queue_name: Arc::new(strategy),
            ..self
        }
    }

    /// Re-creates this policy with the given consumer tag strategy.
    ///
    /// The given strategy must produce a distinct tag on every invocation.
    pub fn with_consumer_tag<F>(self, strategy: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        announce_replacement("consumer_tag");

        Self {
            consumer_tag: Arc::new(strategy),
            ..self
        }
    }
}

impl NamingPolicy {
    /// Exposes the current exchange name strategy, e.g. for wrapping it into a
    /// replacement strategy.
    pub fn exchange_name_strategy(&self) -> ExchangeNameStrategy {
        Arc::clone(&self.exchange_name)
    }

    /// Exposes the current topic strategy.
    pub fn topic_strategy(&self) -> TopicStrategy {
        Arc::clone(&self.topic)
    }

    /// Exposes the current queue name strategy, e.g. for wrapping it into a
    /// replacement strategy.
    pub fn queue_name_strategy(&self) -> QueueNameStrategy {
        Arc::clone(&self.queue_name)
    }

    /// Exposes the current RPC routing key strategy.
    pub fn rpc_routing_key_strategy(&self) -> RpcRoutingKeyStrategy {
        Arc::clone(&self.rpc_routing_key)
    }
}

impl NamingPolicy {
    /// Derives the exchange name for the given message type.
    ///
    /// By default, this is the exchange name from the type's naming override,
    /// if it is non-empty, or else the type identity.
    pub fn exchange_name(&self, message_type: &MessageType) -> String {
        (self.exchange_name)(message_type)
    }

    /// Derives the topic (routing key) for publishing the given message type.
    pub fn topic(&self, message_type: &MessageType) -> String {
        (self.topic)(message_type)
    }

    /// Derives the queue name for the given message type and subscriber ID.
    ///
    /// By default:
    ///
    /// - If the type's naming override has a non-empty queue name, the result
    ///   is that name when `subscriber_id` is empty, or otherwise that name,
    ///   an underscore, and the `subscriber_id`.
    /// - Otherwise, the result is always the type identity, an underscore, and
    ///   the `subscriber_id`, even when the latter is empty. Existing
    ///   deployments rely on the trailing underscore.
    pub fn queue_name(&self, message_type: &MessageType, subscriber_id: &str) -> String {
        (self.queue_name)(message_type, subscriber_id)
    }

    /// Derives the routing key for RPC requests of the given message type.
    pub fn rpc_routing_key(&self, message_type: &MessageType) -> String {
        (self.rpc_routing_key)(message_type)
    }

    /// Reports the name of the default error queue.
    pub fn error_queue_name(&self) -> String {
        (self.error_queue_name)()
    }

    /// Derives the name of the exchange that receives messages which failed
    /// processing. By default, each original routing key gets its own error
    /// exchange.
    pub fn error_exchange_name(&self, context: &DeliveryContext) -> String {
        (self.error_exchange_name)(context)
    }

    /// Reports the name of the shared RPC exchange.
    pub fn rpc_exchange_name(&self) -> String {
        (self.rpc_exchange_name)()
    }

    /// Produces a fresh RPC return queue name. Never cached: every call yields
    /// a new name.
    pub fn rpc_return_queue_name(&self) -> String {
        (self.rpc_return_queue_name)()
    }

    /// Produces a fresh consumer tag. Never cached: every call yields a new
    /// tag.
    pub fn consumer_tag(&self) -> String {
        (self.consumer_tag)()
    }
}

impl NamingPolicy {
    /// Derives the exchange name for the message type `T`.
    pub fn exchange_name_of<T>(&self) -> String
    where
        T: ?Sized + 'static,
    {
        self.exchange_name(&MessageType::of::<T>())
    }

    /// Derives the queue name for the message type `T` and the given
    /// subscriber ID.
    pub fn queue_name_of<T>(&self, subscriber_id: &str) -> String
    where
        T: ?Sized + 'static,
    {
        self.queue_name(&MessageType::of::<T>(), subscriber_id)
    }

    /// Derives all names that the given subscriber needs to consume messages
    /// of type `T`.
    pub fn subscription<T>(&self, subscriber_id: &str) -> SubscriptionNames
    where
        T: ?Sized + 'static,
    {
        let message_type = MessageType::of::<T>();

        SubscriptionNames {
            exchange: self.exchange_name(&message_type),
            queue: self.queue_name(&message_type, subscriber_id),
            topic: self.topic(&message_type),
        }
    }
}

impl Debug for NamingPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamingPolicy")
            .field("error_queue_name", &self.error_queue_name())
            .field("rpc_exchange_name", &self.rpc_exchange_name())
            .finish_non_exhaustive()
    }
}

impl SubscriptionNames {
    /// Reports the exchange to bind to.
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /// Reports the queue to consume from.
    pub fn queue(&self) -> &str {
        &self.queue
    }

    /// Reports the binding key.
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

fn announce_replacement(strategy: &'static str) {
    debug!(strategy, "Replaced naming strategy");
}
