use std::sync::Arc;

/// Describes the delivery of a message that failed processing, as reported by
/// the transport layer. The [`routing_key`](DeliveryContext::routing_key) is
/// the only part consulted by the default naming strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryContext {
    routing_key: Arc<str>,
    exchange: Option<Arc<str>>,
    queue: Option<Arc<str>>,
    consumer_tag: Option<Arc<str>>,
    delivery_tag: Option<u64>,
    redelivered: bool,
}

impl DeliveryContext {
    /// Creates a delivery context for a message originally published under the
    /// given routing key.
    pub fn new(routing_key: impl AsRef<str>) -> Self {
        Self {
            routing_key: Arc::from(routing_key.as_ref()),
            exchange: None,
            queue: None,
            consumer_tag: None,
            delivery_tag: None,
            redelivered: false,
        }
    }

    /// Re-creates this context with the name of the exchange the message was
    /// published to.
    pub fn with_exchange(self, exchange: impl AsRef<str>) -> Self {
        Self {
            exchange: Some(Arc::from(exchange.as_ref())),
            ..self
        }
    }

    /// Re-creates this context with the name of the queue the message was
    /// consumed from.
    pub fn with_queue(self, queue: impl AsRef<str>) -> Self {
        Self {
            queue: Some(Arc::from(queue.as_ref())),
            ..self
        }
    }

    /// Re-creates this context with the tag of the consumer that received the
    /// message.
    pub fn with_consumer_tag(self, consumer_tag: impl AsRef<str>) -> Self {
        Self {
            consumer_tag: Some(Arc::from(consumer_tag.as_ref())),
            ..self
        }
    }

    /// Re-creates this context with the broker-assigned delivery tag.
    pub fn with_delivery_tag(self, delivery_tag: u64) -> Self {
        Self {
            delivery_tag: Some(delivery_tag),
            ..self
        }
    }

    /// Re-creates this context with the given `redelivered` flag.
    pub fn with_redelivered(self, redelivered: bool) -> Self {
        Self {
            redelivered,
            ..self
        }
    }
}

impl DeliveryContext {
    /// Reports the routing key under which the message was originally
    /// published.
    pub fn routing_key(&self) -> &str {
        &self.routing_key
    }

    /// Reports the exchange the message was published to, if known.
    pub fn exchange(&self) -> Option<&str> {
        self.exchange.as_deref()
    }

    /// Reports the queue the message was consumed from, if known.
    pub fn queue(&self) -> Option<&str> {
        self.queue.as_deref()
    }

    /// Reports the tag of the consumer that received the message, if known.
    pub fn consumer_tag(&self) -> Option<&str> {
        self.consumer_tag.as_deref()
    }

    /// Reports the broker-assigned delivery tag, if known.
    pub fn delivery_tag(&self) -> Option<u64> {
        self.delivery_tag
    }

    /// Reports whether the broker flagged the message as redelivered.
    pub fn redelivered(&self) -> bool {
        self.redelivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn minimal() {
        // When
        let context = DeliveryContext::new("orders.created");

        // Then
        assert_eq!(context.routing_key(), "orders.created");
        assert_eq!(context.exchange(), None);
        assert_eq!(context.queue(), None);
        assert_eq!(context.consumer_tag(), None);
        assert_eq!(context.delivery_tag(), None);
        assert!(!context.redelivered());
    }

    #[test]
    fn full() {
        // When
        let context = DeliveryContext::new("orders.created")
            .with_exchange("orders")
            .with_queue("orders_billing")
            .with_consumer_tag("tag")
            .with_delivery_tag(42)
            .with_redelivered(true);

        // Then
        assert_eq!(context.routing_key(), "orders.created");
        assert_eq!(context.exchange(), Some("orders"));
        assert_eq!(context.queue(), Some("orders_billing"));
        assert_eq!(context.consumer_tag(), Some("tag"));
        assert_eq!(context.delivery_tag(), Some(42));
        assert!(context.redelivered());
    }
}
