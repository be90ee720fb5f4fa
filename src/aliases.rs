//! Option-style spellings for callers coming from `Some`/`None` code.

use crate::Optional;

pub type Maybe<T> = Optional<T>;

pub const fn some<T>(value: T) -> Maybe<T> {
    Optional::present(value)
}

pub const fn none<T>() -> Maybe<T> {
    Optional::ABSENT
}
