mod common;

#[cfg(test)]
mod tests {
    use crate::common::messages::make_policy;
    use crate::common::names::{
        ERROR_EXCHANGE_PREFIX, ERROR_QUEUE, RPC_EXCHANGE, RPC_RETURN_QUEUE_PREFIX,
        is_hyphenated_uuid,
    };
    use pretty_assertions::{assert_eq, assert_ne};
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;
    use warren_naming::DeliveryContext;

    #[test]
    fn error_queue_is_constant() {
        // Given
        let policy_a = make_policy();
        let policy_b = make_policy();

        // Then
        assert_eq!(policy_a.error_queue_name(), ERROR_QUEUE);
        assert_eq!(policy_a.error_queue_name(), policy_a.error_queue_name());
        assert_eq!(policy_a.error_queue_name(), policy_b.error_queue_name());
    }

    #[test]
    fn rpc_exchange_is_constant() {
        // Given
        let policy = make_policy();

        // Then
        assert_eq!(policy.rpc_exchange_name(), RPC_EXCHANGE);
        assert_eq!(policy.rpc_exchange_name(), policy.rpc_exchange_name());
    }

    #[test]
    fn error_exchange_per_routing_key() {
        // Given
        let policy = make_policy();
        let context_a = DeliveryContext::new("Order").with_queue("Order_billing");
        let context_b = DeliveryContext::new("Invoice")
            .with_exchange("Invoice")
            .with_redelivered(true);

        // When
        let exchange_a = policy.error_exchange_name(&context_a);
        let exchange_b = policy.error_exchange_name(&context_b);

        // Then
        assert_ne!(exchange_a, exchange_b);
        assert!(exchange_a.starts_with(ERROR_EXCHANGE_PREFIX));
        assert!(exchange_b.starts_with(ERROR_EXCHANGE_PREFIX));
        assert_eq!(exchange_a, "ErrorExchange_Order");
        assert_eq!(exchange_b, "ErrorExchange_Invoice");
    }

    #[test]
    fn error_exchange_for_empty_routing_key() {
        // Given
        let policy = make_policy();

        // When
        let exchange = policy.error_exchange_name(&DeliveryContext::new(""));

        // Then
        assert_eq!(exchange, ERROR_EXCHANGE_PREFIX);
    }

    #[test]
    fn rpc_return_queues_are_fresh() {
        // Given
        let policy = make_policy();

        // When
        let queue_a = policy.rpc_return_queue_name();
        let queue_b = policy.rpc_return_queue_name();

        // Then
        assert_ne!(queue_a, queue_b);
        for queue in [&queue_a, &queue_b] {
            let token = queue
                .strip_prefix(RPC_RETURN_QUEUE_PREFIX)
                .expect("return queue should carry the prefix");
            assert!(is_hyphenated_uuid(token), "unexpected token in '{}'", queue);
        }
    }

    #[test]
    fn consumer_tags_are_pairwise_distinct() {
        // Given
        let policy = make_policy();

        // When
        let tags = (0..100_000)
            .map(|_| policy.consumer_tag())
            .collect::<HashSet<_>>();

        // Then
        assert_eq!(tags.len(), 100_000);
        assert!(tags.iter().all(|tag| is_hyphenated_uuid(tag)));
    }

    #[test]
    fn concurrent_unique_names() {
        // Given
        let policy = Arc::new(make_policy());
        let threads = 8;
        let per_thread = 10_000;

        // When
        let handles = (0..threads)
            .map(|_| {
                let policy = Arc::clone(&policy);
                thread::spawn(move || {
                    (0..per_thread)
                        .flat_map(|_| [policy.consumer_tag(), policy.rpc_return_queue_name()])
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();
        let names = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect::<HashSet<_>>();

        // Then
        assert_eq!(names.len(), threads * per_thread * 2);
    }

    #[test]
    fn concurrent_deterministic_names() {
        // Given
        let policy = Arc::new(make_policy());

        // When
        let handles = (0..4)
            .map(|index| {
                let policy = Arc::clone(&policy);
                thread::spawn(move || {
                    let subscriber_id = format!("sub{}", index);
                    (
                        subscriber_id.clone(),
                        policy.queue_name_of::<crate::common::messages::Invoice>(&subscriber_id),
                        policy.exchange_name_of::<crate::common::messages::Order>(),
                    )
                })
            })
            .collect::<Vec<_>>();

        // Then
        for handle in handles {
            let (subscriber_id, queue, exchange) = handle.join().unwrap();
            assert_eq!(queue, format!("inv_q_{}", subscriber_id));
            assert_eq!(exchange, "Order");
        }
    }
}
