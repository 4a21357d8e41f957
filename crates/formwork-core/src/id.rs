//! Record identity and the `FormData` marker for persisted-shape values.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a separately-persisted record.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generate a new random identity.
    #[must_use]
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }

    /// The all-zero identity used by freshly defaulted records before
    /// they are assigned a real one.
    #[must_use]
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Whether this is the all-zero identity.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for EntityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// The persisted-shape value a widget edits.
///
/// Everything that flows through a widget's `data` slot implements this.
/// The one behavior beyond `Clone` is identity refresh: when a list
/// combinator duplicates an item, the copy must never share an id with
/// the original, so types that carry an identity field override
/// [`FormData::reassign_id`]. Types without identity keep the default
/// no-op.
pub trait FormData: Clone {
    /// Replace the identity field with a freshly generated one, if this
    /// type carries identity.
    fn reassign_id(&mut self) {}
}

impl FormData for String {}
impl FormData for bool {}
impl FormData for f64 {}
impl FormData for i64 {}

impl<T: Clone> FormData for Option<T> {}

impl<T: FormData> FormData for Vec<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_differ() {
        assert_ne!(EntityId::fresh(), EntityId::fresh());
    }

    #[test]
    fn nil_round_trips_through_display() {
        let id = EntityId::nil();
        assert!(id.is_nil());
        let parsed: EntityId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn scalar_reassign_is_a_noop() {
        let mut value = String::from("kitchen");
        value.reassign_id();
        assert_eq!(value, "kitchen");
    }
}
