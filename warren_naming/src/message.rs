use std::any::{TypeId, type_name};
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

/// Identifies a logical message type for the purpose of naming broker
/// topology.
///
/// A [`MessageType`] is a cheap, copyable pair of the [`TypeId`] and the
/// compiler-provided type name. Equality and hashing consider only the
/// [`TypeId`], so two handles of the same Rust type are always interchangeable.
#[derive(Clone, Copy)]
pub struct MessageType {
    id: TypeId,
    name: &'static str,
}

impl MessageType {
    /// Creates the handle for the message type `T`.
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Creates the handle for the type of the given message value.
    pub fn of_val<T>(_message: &T) -> Self
    where
        T: ?Sized + 'static,
    {
        Self::of::<T>()
    }
}

impl MessageType {
    /// Reports the [`TypeId`] of this message type.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Reports the compiler-provided name of this message type, e.g.
    /// `"billing::events::Invoice"`.
    ///
    /// The exact output of [`type_name`] is stable only within a given build,
    /// so producers and consumers that are compiled separately should prefer
    /// explicit identities (see [`TypeRegistry`](crate::TypeRegistry)).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reports the last path segment of [`name`](MessageType::name), e.g.
    /// `"Invoice"` for `"billing::events::Invoice"`. Generic arguments are
    /// retained as-is.
    pub fn short_name(&self) -> &'static str {
        let path_end = self.name.find('<').unwrap_or(self.name.len());

        match self.name[..path_end].rfind("::") {
            Some(index) => &self.name[index + 2..],
            None => self.name,
        }
    }
}

impl PartialEq for MessageType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MessageType {}

impl Hash for MessageType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for MessageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

impl Debug for MessageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MessageType").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::{assert_eq, assert_ne};

    struct Order;
    struct Envelope<T>(T);

    #[test]
    fn same_type_is_equal() {
        // When
        let a = MessageType::of::<Order>();
        let b = MessageType::of_val(&Order);

        // Then
        assert_eq!(a, b);
        assert_eq!(a.id(), TypeId::of::<Order>());
    }

    #[test]
    fn different_types_are_not_equal() {
        // When
        let a = MessageType::of::<Order>();
        let b = MessageType::of::<Envelope<Order>>();

        // Then
        assert_ne!(a, b);
    }

    #[test]
    fn short_name() {
        // Given
        let plain = MessageType::of::<Order>();
        let generic = MessageType::of::<Envelope<Order>>();
        let builtin = MessageType::of::<u32>();

        // Then
        assert_eq!(plain.short_name(), "Order");
        assert!(generic.short_name().starts_with("Envelope<"));
        assert!(generic.short_name().ends_with("::Order>"));
        assert_eq!(builtin.short_name(), "u32");
    }

    #[test]
    fn display_is_full_name() {
        // Given
        let message_type = MessageType::of::<Order>();

        // Then
        assert_eq!(message_type.to_string(), type_name::<Order>());
        assert!(message_type.name().ends_with("::Order"));
    }
}
