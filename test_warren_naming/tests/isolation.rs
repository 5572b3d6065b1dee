mod common;

#[cfg(test)]
mod tests {
    use crate::common::messages::{Invoice, Order, make_policy};
    use crate::common::names::{ERROR_QUEUE, RPC_EXCHANGE, RPC_RETURN_QUEUE_PREFIX};
    use pretty_assertions::assert_eq;
    use warren_naming::{DeliveryContext, MessageType, NamingPolicy};

    /// Captures the deterministic outputs of every strategy.
    fn snapshot(policy: &NamingPolicy) -> Vec<String> {
        let order = MessageType::of::<Order>();
        let invoice = MessageType::of::<Invoice>();

        vec![
            policy.exchange_name(&order),
            policy.exchange_name(&invoice),
            policy.topic(&order),
            policy.queue_name(&order, "billing"),
            policy.queue_name(&invoice, ""),
            policy.rpc_routing_key(&invoice),
            policy.error_queue_name(),
            policy.error_exchange_name(&DeliveryContext::new("Order")),
            policy.rpc_exchange_name(),
        ]
    }

    #[test]
    fn replacing_exchange_name_only_affects_exchange_names() {
        // Given
        let original = make_policy();
        let expected_output = {
            let mut names = snapshot(&original);
            names[0] = "custom_x".to_string();
            names[1] = "custom_x".to_string();
            names
        };

        // When
        let replaced = make_policy().with_exchange_name(|_| "custom_x".to_string());

        // Then
        assert_eq!(snapshot(&replaced), expected_output);
        assert_eq!(snapshot(&original)[0], "Order");
    }

    #[test]
    fn replacing_queue_name_only_affects_queue_names() {
        // Given
        let original = make_policy();
        let expected_output = {
            let mut names = snapshot(&original);
            names[3] = "Order:billing".to_string();
            names[4] = "Invoice:".to_string();
            names
        };

        // When
        let replaced = make_policy().with_queue_name(|message_type, subscriber_id| {
            format!("{}:{}", message_type.short_name(), subscriber_id)
        });

        // Then
        assert_eq!(snapshot(&replaced), expected_output);
    }

    #[test]
    fn replacing_constants_only_affects_constants() {
        // Given
        let original = make_policy();
        let expected_output = {
            let mut names = snapshot(&original);
            names[6] = "errors".to_string();
            names[8] = "rpc".to_string();
            names
        };

        // When
        let replaced = make_policy()
            .with_error_queue_name(|| "errors".to_string())
            .with_rpc_exchange_name(|| "rpc".to_string());

        // Then
        assert_eq!(snapshot(&replaced), expected_output);
        assert_eq!(original.error_queue_name(), ERROR_QUEUE);
        assert_eq!(original.rpc_exchange_name(), RPC_EXCHANGE);
    }

    #[test]
    fn replacing_unique_names_leaves_deterministic_names() {
        // Given
        let original = make_policy();

        // When
        let replaced = make_policy()
            .with_consumer_tag(|| "tag".to_string())
            .with_rpc_return_queue_name(|| "reply".to_string());

        // Then
        assert_eq!(snapshot(&replaced), snapshot(&original));
        assert_eq!(replaced.consumer_tag(), "tag");
        assert_eq!(replaced.rpc_return_queue_name(), "reply");
        assert!(
            original
                .rpc_return_queue_name()
                .starts_with(RPC_RETURN_QUEUE_PREFIX)
        );
    }

    #[test]
    fn wrapping_a_default_strategy() {
        // Given
        let policy = make_policy();
        let default_exchange_name = policy.exchange_name_strategy();

        // When
        let wrapped = policy.with_exchange_name(move |message_type| {
            format!("app.{}", default_exchange_name(message_type))
        });

        // Then
        assert_eq!(wrapped.exchange_name_of::<Order>(), "app.Order");
        assert_eq!(wrapped.queue_name_of::<Order>("billing"), "Order_billing");
    }

    #[test]
    fn clones_are_independent() {
        // Given
        let original = make_policy();

        // When
        let replaced = original
            .clone()
            .with_topic(|message_type| format!("{}.#", message_type.short_name()))
            .with_error_exchange_name(|context| format!("dlx.{}", context.routing_key()));

        // Then
        assert_eq!(original.topic(&MessageType::of::<Order>()), "");
        assert_eq!(replaced.topic(&MessageType::of::<Order>()), "Order.#");
        assert_eq!(
            replaced.error_exchange_name(&DeliveryContext::new("Order")),
            "dlx.Order",
        );
        assert_eq!(
            original.error_exchange_name(&DeliveryContext::new("Order")),
            "ErrorExchange_Order",
        );
    }
}
