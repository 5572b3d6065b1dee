use crate::MessageType;

/// Turns a [`MessageType`] into a string identifier.
///
/// Implementations must be deterministic and stable across process restarts:
/// independently deployed producers and consumers derive the same exchange
/// and queue names only if they serialize the same type to the same string.
pub trait TypeIdentityResolver: Send + Sync {
    /// Serializes the given message type into its identity string.
    fn serialize(&self, message_type: &MessageType) -> String;
}

impl<F> TypeIdentityResolver for F
where
    F: Fn(&MessageType) -> String + Send + Sync,
{
    fn serialize(&self, message_type: &MessageType) -> String {
        self(message_type)
    }
}

/// Resolves the identity of a message type to its compiler-provided type name
/// (e.g. `"billing::events::Invoice"`).
///
/// This is stable for every process built from the same sources with the same
/// toolchain, which covers the common case of a single service talking to
/// itself. Services built separately should agree on explicit identities
/// instead (see [`TypeRegistry`](crate::TypeRegistry)).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TypeNameResolver {
    short: bool,
}

impl TypeNameResolver {
    /// Creates a resolver that reports the full type path.
    pub fn full() -> Self {
        Self { short: false }
    }

    /// Creates a resolver that reports only the last path segment of the type
    /// (e.g. `"Invoice"`).
    pub fn short() -> Self {
        Self { short: true }
    }
}

impl TypeIdentityResolver for TypeNameResolver {
    fn serialize(&self, message_type: &MessageType) -> String {
        if self.short {
            message_type.short_name().to_string()
        } else {
            message_type.name().to_string()
        }
    }
}
