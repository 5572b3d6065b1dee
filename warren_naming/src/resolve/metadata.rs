use crate::{MessageType, TypeIdentityResolver, TypeNamingOverride};
use std::collections::HashMap;
use std::sync::Arc;

/// Looks up the [`TypeNamingOverride`] attached to a [`MessageType`].
///
/// A lookup never fails: an unrecognized type yields the empty override, which
/// the [`NamingPolicy`](crate::NamingPolicy) treats as "no override".
pub trait TypeMetadataLookup: Send + Sync {
    /// Returns the naming override for the given message type.
    fn naming_override(&self, message_type: &MessageType) -> TypeNamingOverride;
}

impl<F> TypeMetadataLookup for F
where
    F: Fn(&MessageType) -> TypeNamingOverride + Send + Sync,
{
    fn naming_override(&self, message_type: &MessageType) -> TypeNamingOverride {
        self(message_type)
    }
}

/// A [`TypeMetadataLookup`] that knows of no overrides.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoOverrides;

impl TypeMetadataLookup for NoOverrides {
    fn naming_override(&self, _message_type: &MessageType) -> TypeNamingOverride {
        TypeNamingOverride::none()
    }
}

/// A [`TypeMetadataLookup`] over the named overrides of a
/// [`NamingConfig`](crate::NamingConfig). A name matches a type when it equals
/// the identity produced by the given resolver, or the full type name, ignoring
/// ASCII and Unicode case.
pub(crate) struct ConfiguredOverrides {
    identity: Arc<dyn TypeIdentityResolver>,
    overrides: HashMap<Arc<str>, TypeNamingOverride>,
}

impl ConfiguredOverrides {
    pub(crate) fn new(
        identity: Arc<dyn TypeIdentityResolver>,
        overrides: HashMap<Arc<str>, TypeNamingOverride>,
    ) -> Self {
        let overrides = overrides
            .into_iter()
            .map(|(name, naming_override)| (override_key(&name), naming_override))
            .collect();

        Self {
            identity,
            overrides,
        }
    }
}

impl TypeMetadataLookup for ConfiguredOverrides {
    fn naming_override(&self, message_type: &MessageType) -> TypeNamingOverride {
        if self.overrides.is_empty() {
            return TypeNamingOverride::none();
        }

        self.overrides
            .get(&override_key(&self.identity.serialize(message_type)))
            .or_else(|| self.overrides.get(&override_key(message_type.name())))
            .cloned()
            .unwrap_or_default()
    }
}

/// Normalizes the name under which an override is stored and looked up, so
/// that lower-cased keys from environment variables still match.
pub(crate) fn override_key(name: &str) -> Arc<str> {
    Arc::from(name.to_lowercase())
}
