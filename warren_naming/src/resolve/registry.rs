use crate::resolve::metadata::override_key;
use crate::{
    MessageType, NamingConfig, TypeIdentityResolver, TypeMetadataLookup, TypeNameResolver,
    TypeNamingOverride,
};
use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// A static registry of message types, assembled once at startup, that serves
/// both as a [`TypeIdentityResolver`] and as a [`TypeMetadataLookup`].
///
/// ## Identities
///
/// A type registered via [`with_identity`](TypeRegistry::with_identity) is
/// serialized to the given explicit identity. Any other type is serialized by
/// the fallback [`TypeNameResolver`].
///
/// ## Overrides
///
/// Overrides may be attached to a type directly
/// ([`with_override`](TypeRegistry::with_override)) or by name
/// ([`with_named_override`](TypeRegistry::with_named_override)), the latter
/// being what a [`NamingConfig`] provides. A named override applies to a type
/// whose identity (explicit or fallback) or full type name equals the name,
/// ignoring case.
/// Per field, a direct override wins over a named one.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    identities: HashMap<TypeId, Arc<str>>,
    overrides: HashMap<TypeId, TypeNamingOverride>,
    named_overrides: HashMap<Arc<str>, TypeNamingOverride>,
    fallback: TypeNameResolver,
}

impl TypeRegistry {
    /// Creates an empty registry that resolves every type by its full type
    /// name and knows of no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the named overrides from the
    /// given configuration.
    pub fn from_config(config: &NamingConfig) -> Self {
        config
            .overrides()
            .iter()
            .fold(Self::new(), |registry, (name, naming_override)| {
                registry.with_named_override(name.as_ref(), naming_override.clone())
            })
    }

    /// Re-creates this registry with the given explicit identity for the
    /// message type `T`.
    pub fn with_identity<T>(mut self, identity: impl AsRef<str>) -> Self
    where
        T: ?Sized + 'static,
    {
        let identity = identity.as_ref();

        debug!(
            message_type = type_name::<T>(),
            identity, "Registered message type identity",
        );

        self.identities
            .insert(TypeId::of::<T>(), Arc::from(identity));

        self
    }

    /// Re-creates this registry with the given naming override for the message
    /// type `T`.
    pub fn with_override<T>(mut self, naming_override: TypeNamingOverride) -> Self
    where
        T: ?Sized + 'static,
    {
        debug!(
            message_type = type_name::<T>(),
            exchange_name = naming_override.exchange_name(),
            queue_name = naming_override.queue_name(),
            "Registered message type naming override",
        );

        self.overrides.insert(TypeId::of::<T>(), naming_override);

        self
    }

    /// Re-creates this registry with the given naming override for the message
    /// type known under the given name (identity or full type name).
    ///
    /// The name is matched when the override is looked up, so it may refer to
    /// an identity that is registered later.
    pub fn with_named_override(
        mut self,
        name: impl AsRef<str>,
        naming_override: TypeNamingOverride,
    ) -> Self {
        let name = name.as_ref();

        debug!(
            name,
            exchange_name = naming_override.exchange_name(),
            queue_name = naming_override.queue_name(),
            "Registered named naming override",
        );

        self.named_overrides.insert(override_key(name), naming_override);

        self
    }

    /// Re-creates this registry with the given resolver for types that have no
    /// explicit identity.
    pub fn with_fallback(self, fallback: TypeNameResolver) -> Self {
        Self { fallback, ..self }
    }
}

impl TypeRegistry {
    /// Reports whether the given message type has an explicit identity in this
    /// registry.
    pub fn contains(&self, message_type: &MessageType) -> bool {
        self.identities.contains_key(&message_type.id())
    }

    /// Reports the explicit identity of the given message type, if any.
    pub fn identity(&self, message_type: &MessageType) -> Option<&str> {
        self.identities.get(&message_type.id()).map(|identity| &**identity)
    }

    fn find_named_override(&self, message_type: &MessageType) -> Option<&TypeNamingOverride> {
        if self.named_overrides.is_empty() {
            return None;
        }

        self.named_overrides
            .get(&override_key(&self.serialize(message_type)))
            .or_else(|| self.named_overrides.get(&override_key(message_type.name())))
    }
}

impl TypeIdentityResolver for TypeRegistry {
    fn serialize(&self, message_type: &MessageType) -> String {
        match self.identity(message_type) {
            Some(identity) => identity.to_string(),
            None => self.fallback.serialize(message_type),
        }
    }
}

impl TypeMetadataLookup for TypeRegistry {
    fn naming_override(&self, message_type: &MessageType) -> TypeNamingOverride {
        let direct = self.overrides.get(&message_type.id());
        let named = self.find_named_override(message_type);

        trace!(
            message_type = message_type.name(),
            direct = direct.is_some(),
            named = named.is_some(),
            "Looked up naming override",
        );

        let (direct, named) = match (direct, named) {
            (None, None) => return TypeNamingOverride::none(),
            (Some(direct), None) => return direct.clone(),
            (None, Some(named)) => return named.clone(),
            (Some(direct), Some(named)) => (direct, named),
        };

        let mut merged = TypeNamingOverride::none();

        if let Some(exchange_name) = direct.exchange_name().or(named.exchange_name()) {
            merged = merged.with_exchange_name(exchange_name);
        }

        if let Some(queue_name) = direct.queue_name().or(named.queue_name()) {
            merged = merged.with_queue_name(queue_name);
        }

        merged
    }
}
