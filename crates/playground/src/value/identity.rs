//! Handle identity, as opposed to field equality

use std::rc::Rc;

use super::VideoMode;

/// Identity comparison for share-semantics types.
///
/// Two values are identical when they denote the same storage location.
/// Field values play no part: two separately built instances with equal
/// fields are never identical.
pub trait Identity {
    /// Do `self` and `other` refer to the same instance?
    fn is_identical(&self, other: &Self) -> bool;

    /// Negation of [`is_identical`](Identity::is_identical).
    fn is_not_identical(&self, other: &Self) -> bool {
        !self.is_identical(other)
    }
}

impl Identity for VideoMode {
    fn is_identical(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_identical() {
        let a = VideoMode::new();
        let b = a.clone();
        assert!(a.is_identical(&b));
        assert!(!a.is_not_identical(&b));
    }

    #[test]
    fn test_equal_fields_not_identical() {
        let a = VideoMode::new();
        let b = VideoMode::new();
        assert_eq!(a.snapshot(), b.snapshot());
        assert!(a.is_not_identical(&b));
    }

    #[test]
    fn test_self_identical() {
        let a = VideoMode::new();
        assert!(a.is_identical(&a));
    }
}
