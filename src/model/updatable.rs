//! Identity and content predicates for diffable elements.
//!
//! The diff engine never looks inside an element. It asks two questions:
//!
//! 1. **Identity**: do these two elements represent the same logical entity
//!    across the two snapshots?
//! 2. **Content**: would these two elements display identically?
//!
//! Keeping the two apart is what lets the engine report a *reload* for an
//! element that persisted but changed, instead of a delete followed by an
//! insert.

use std::fmt;

/// Capability pair the sequence comparison engine needs from an element type.
///
/// `same_identity` must be an equivalence relation (reflexive, symmetric,
/// transitive). Violations do not panic, but the resulting edit set is
/// meaningless. `same_content` is only consulted for elements that already
/// share an identity.
///
/// # Example
///
/// ```
/// use array_updater::Updatable;
///
/// struct Park {
///     id: &'static str,
///     name: &'static str,
/// }
///
/// impl Updatable for Park {
///     fn same_identity(&self, other: &Self) -> bool {
///         self.id == other.id
///     }
///
///     fn same_content(&self, other: &Self) -> bool {
///         self.id == other.id && self.name == other.name
///     }
/// }
/// ```
pub trait Updatable {
    /// True if `self` and `other` are the same logical entity.
    fn same_identity(&self, other: &Self) -> bool;

    /// True if `self` and `other` are indistinguishable in all displayed attributes.
    fn same_content(&self, other: &Self) -> bool;
}

impl<T: Updatable + ?Sized> Updatable for &T {
    fn same_identity(&self, other: &Self) -> bool {
        (**self).same_identity(*other)
    }

    fn same_content(&self, other: &Self) -> bool {
        (**self).same_content(*other)
    }
}

impl<T: Updatable + ?Sized> Updatable for Box<T> {
    fn same_identity(&self, other: &Self) -> bool {
        (**self).same_identity(other)
    }

    fn same_content(&self, other: &Self) -> bool {
        (**self).same_content(other)
    }
}

/// Scalars have no identity beyond their value, so both predicates are `==`.
macro_rules! impl_updatable_by_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl Updatable for $t {
                #[inline]
                fn same_identity(&self, other: &Self) -> bool {
                    self == other
                }

                #[inline]
                fn same_content(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_updatable_by_value!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool, String, str,
);

/// Wrapper that treats full value equality as both identity and content.
///
/// This is the single-predicate mode: an element that changes in any way is
/// reported as a delete plus an insert, never as a reload. Use it only for
/// types without a stable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByValue<T>(pub T);

impl<T> ByValue<T> {
    /// Unwrap the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: PartialEq> Updatable for ByValue<T> {
    fn same_identity(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn same_content(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: fmt::Display> fmt::Display for ByValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Keyed {
        id: u32,
        label: &'static str,
    }

    impl Updatable for Keyed {
        fn same_identity(&self, other: &Self) -> bool {
            self.id == other.id
        }

        fn same_content(&self, other: &Self) -> bool {
            self.id == other.id && self.label == other.label
        }
    }

    #[test]
    fn test_scalars_compare_by_value() {
        assert!(3_i32.same_identity(&3));
        assert!(!3_i32.same_content(&4));
        assert!("a".same_identity("a"));
        assert!(String::from("x").same_content(&String::from("x")));
    }

    #[test]
    fn test_identity_weaker_than_content() {
        let a = Keyed { id: 1, label: "Great Smoky Mountains" };
        let b = Keyed { id: 1, label: "Great Smokies" };
        assert!(a.same_identity(&b));
        assert!(!a.same_content(&b));
    }

    #[test]
    fn test_references_forward() {
        let a = Keyed { id: 7, label: "x" };
        let b = Keyed { id: 7, label: "y" };
        assert!(<&Keyed as Updatable>::same_identity(&&a, &&b));
        assert!(!Box::new(a).same_content(&Box::new(b)));
    }

    #[test]
    fn test_by_value_collapses_predicates() {
        let a = ByValue(vec![1, 2]);
        let b = ByValue(vec![1, 2, 3]);
        assert!(!a.same_identity(&b));
        assert!(a.same_content(&a.clone()));
        assert_eq!(a.into_inner(), vec![1, 2]);
    }
}
