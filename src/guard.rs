use crate::Optional;
use core::any::{self, Any};

/// Reports whether `value` is an [`Optional`] of any payload type.
///
/// This looks at the static type of the argument. For type-erased values use
/// [`narrow`], which needs the payload type but works through `dyn Any`.
pub fn is_optional<V: ?Sized>(_value: &V) -> bool {
    // type names are only compared against each other within one build
    let Some(path) = any::type_name::<Optional<()>>().strip_suffix("<()>") else {
        return false;
    };
    any::type_name::<V>()
        .strip_prefix(path)
        .is_some_and(|rest| rest.starts_with('<'))
}

/// Narrows an erased value to `&Optional<T>`, absent when it is something else.
pub fn narrow<T: 'static>(value: &dyn Any) -> Optional<&Optional<T>> {
    Optional::from(value.downcast_ref::<Optional<T>>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present;

    #[test]
    fn recognizes_optionals() {
        assert!(is_optional(&present(1)));
        assert!(is_optional(&Optional::<&str>::ABSENT));
        assert!(is_optional(&present(present(1u8))));
        assert!(!is_optional(&1));
        assert!(!is_optional(&Some(1)));
        assert!(!is_optional("Optional<i32>"));
        assert!(!is_optional(&[present(1)]));
    }

    #[test]
    fn narrows_erased_values() {
        let erased: &dyn Any = &present(7_i32);
        assert_eq!(narrow::<i32>(erased), present(&present(7)));
        assert_eq!(narrow::<u64>(erased), Optional::ABSENT);

        let not_optional: &dyn Any = &7_i32;
        assert!(narrow::<i32>(not_optional).is_absent());
    }
}
