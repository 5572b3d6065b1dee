use serde::Deserialize;
use std::sync::Arc;

/// Carries explicit exchange and/or queue names that an application attaches
/// to a specific message type, taking precedence over the computed defaults.
///
/// An empty name is indistinguishable from an absent one: both make the
/// [`NamingPolicy`](crate::NamingPolicy) fall back to the computed default.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypeNamingOverride {
    #[serde(alias = "exchange")]
    exchange_name: Option<Arc<str>>,
    #[serde(alias = "queue")]
    queue_name: Option<Arc<str>>,
}

impl TypeNamingOverride {
    /// Creates an empty override, which means "no override".
    pub fn none() -> Self {
        Self::default()
    }

    /// Re-creates this override with the given exchange name.
    pub fn with_exchange_name(self, exchange_name: impl AsRef<str>) -> Self {
        Self {
            exchange_name: Some(Arc::from(exchange_name.as_ref())),
            ..self
        }
    }

    /// Re-creates this override with the given queue name.
    pub fn with_queue_name(self, queue_name: impl AsRef<str>) -> Self {
        Self {
            queue_name: Some(Arc::from(queue_name.as_ref())),
            ..self
        }
    }
}

impl TypeNamingOverride {
    /// Reports the overriding exchange name, if one is set and non-empty.
    pub fn exchange_name(&self) -> Option<&str> {
        self.exchange_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Reports the overriding queue name, if one is set and non-empty.
    pub fn queue_name(&self) -> Option<&str> {
        self.queue_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Reports whether this override carries no usable names at all.
    pub fn is_empty(&self) -> bool {
        self.exchange_name().is_none() && self.queue_name().is_none()
    }
}
