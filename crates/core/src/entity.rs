//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same entity iff their identifiers match. Entities whose
/// identity is not yet known (e.g. not persisted) are never the same entity as
/// anything else.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, if one has been assigned.
    fn id(&self) -> Option<&Self::Id>;

    /// Identity comparison.
    fn same_entity(&self, other: &Self) -> bool {
        match (self.id(), other.id()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Thing {
        id: Option<u32>,
        label: &'static str,
    }

    impl Entity for Thing {
        type Id = u32;

        fn id(&self) -> Option<&u32> {
            self.id.as_ref()
        }
    }

    #[test]
    fn matching_ids_are_same_entity() {
        let a = Thing { id: Some(7), label: "a" };
        let b = Thing { id: Some(7), label: "b" };
        assert_ne!(a.label, b.label);
        assert!(a.same_entity(&b));
    }

    #[test]
    fn missing_ids_are_never_same_entity() {
        let a = Thing { id: None, label: "x" };
        let b = Thing { id: None, label: "x" };
        let c = Thing { id: Some(1), label: "x" };
        assert!(!a.same_entity(&b));
        assert!(!a.same_entity(&a));
        assert!(!a.same_entity(&c));
        assert!(!c.same_entity(&a));
    }
}
