use std::any::type_name;
use std::fmt::{Debug, Display, Formatter};
use uuid::Uuid;

/// A random 128-bit token (UUID version 4) with a few textual representations,
/// intended for broker-visible names that must never collide: RPC return
/// queues, consumer tags, and the like.
///
/// Generation draws from the operating system's random source and shares no
/// mutable state, so tokens may be generated concurrently from any number of
/// threads.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UniqueToken {
    uuid: Uuid,
}

impl UniqueToken {
    /// Generates a fresh random [`UniqueToken`].
    pub fn random() -> Self {
        Self {
            uuid: Uuid::new_v4(),
        }
    }

    /// Returns a [`Hyphenated`] version of this [`UniqueToken`].
    pub fn hyphenated(&self) -> Hyphenated<'_> {
        Hyphenated(self)
    }

    /// Returns a [`Simple`] version of this [`UniqueToken`].
    pub fn simple(&self) -> Simple<'_> {
        Simple(self)
    }

    /// Exposes the underlying [`Uuid`].
    pub fn as_uuid(&self) -> &Uuid {
        &self.uuid
    }
}

impl From<Uuid> for UniqueToken {
    fn from(uuid: Uuid) -> Self {
        Self { uuid }
    }
}

impl Display for UniqueToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.hyphenated(), f)
    }
}

impl Debug for UniqueToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("uuid", &self.hyphenated())
            .finish()
    }
}

/// A wrapped [`UniqueToken`] that implements [`Display`] in the canonical
/// lower-case UUID form, e.g. `67e55044-10b1-426f-9247-bb680e5fe0c8`. Writes
/// exactly thirty-six ASCII characters.
pub struct Hyphenated<'a>(&'a UniqueToken);

impl<'a> Display for Hyphenated<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0.uuid.hyphenated(), f)
    }
}

impl<'a> Debug for Hyphenated<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// A wrapped [`UniqueToken`] that implements [`Display`] as an unbroken run of
/// lower-case hexadecimal digits. Writes exactly thirty-two ASCII characters.
pub struct Simple<'a>(&'a UniqueToken);

impl<'a> Display for Simple<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0.uuid.simple(), f)
    }
}

impl<'a> Debug for Simple<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
