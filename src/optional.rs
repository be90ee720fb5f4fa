use crate::error::{self, ValueAbsent};
use core::fmt;
use core::ops::Deref;
use core::option;

// absent is declared first so the derived ordering puts it below every present value
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Repr<T> {
    Absent,
    Present(T),
}

/// Either holds exactly one value or holds nothing.
///
/// The two states are only reachable through [`present`], [`Optional::ABSENT`]
/// and [`from_nullable`]. Every combinator is expressed through
/// [`Optional::match_with`], the single place that looks at the state.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Optional<T>(Repr<T>);

/// Wraps `value`, whatever it is. `0`, `""` and `false` are all present.
pub const fn present<T>(value: T) -> Optional<T> {
    Optional::present(value)
}

pub const fn absent<T>() -> Optional<T> {
    Optional::ABSENT
}

/// Bridges a native `Option` into the container: `None` becomes absent,
/// anything else is present.
pub fn from_nullable<T>(value: Option<T>) -> Optional<T> {
    Optional::from_nullable(value)
}

impl<T> Optional<T> {
    /// The one absent value. It carries no payload, so it is the same
    /// constant for every `T`.
    pub const ABSENT: Self = Self(Repr::Absent);

    pub const fn present(value: T) -> Self {
        Self(Repr::Present(value))
    }

    pub const fn absent() -> Self {
        Self::ABSENT
    }

    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::present(value),
            None => Self::ABSENT,
        }
    }

    /// Calls exactly one of the two branches and returns its result.
    ///
    /// `on_present` receives the wrapped value; `on_absent` receives nothing.
    /// The other branch is never called.
    pub fn match_with<U, P, A>(self, on_present: P, on_absent: A) -> U
    where
        P: FnOnce(T) -> U,
        A: FnOnce() -> U,
    {
        match self.0 {
            Repr::Present(value) => on_present(value),
            Repr::Absent => on_absent(),
        }
    }

    /// Borrowing view of the container, so the by-reference combinators can
    /// go through [`match_with`](Self::match_with) without moving the value.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self.0 {
            Repr::Present(ref value) => Optional::present(value),
            Repr::Absent => Optional::ABSENT,
        }
    }

    pub fn as_deref(&self) -> Optional<&T::Target>
    where
        T: Deref,
    {
        self.as_ref().map(Deref::deref)
    }

    pub fn is_present(&self) -> bool {
        self.as_ref().match_with(|_| true, || false)
    }

    /// `false` when absent. A panic inside `predicate` is not caught.
    pub fn is_present_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.as_ref().match_with(predicate, || false)
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns the value, or panics with `message` verbatim.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self.try_expect(message) {
            Ok(value) => value,
            Err(err) => error::absent_failed(err),
        }
    }

    #[track_caller]
    pub fn unwrap(self) -> T {
        self.expect(error::UNWRAP_ABSENT)
    }

    pub fn try_expect(self, message: &str) -> Result<T, ValueAbsent<'_>> {
        self.ok_or_else(|| ValueAbsent::new(message))
    }

    pub fn try_unwrap(self) -> Result<T, ValueAbsent<'static>> {
        self.ok_or(ValueAbsent::new(error::UNWRAP_ABSENT))
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.match_with(|value| value, || default)
    }

    pub fn unwrap_or_else<F>(self, on_absent: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.match_with(|value| value, on_absent)
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.match_with(|value| value, T::default)
    }

    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        self.match_with(|value| Optional::present(mapper(value)), || Optional::ABSENT)
    }

    pub fn map_or<U, F>(self, default: U, mapper: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.match_with(mapper, || default)
    }

    pub fn map_or_else<U, D, F>(self, on_absent: D, mapper: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        self.match_with(mapper, on_absent)
    }

    pub fn map_or_default<U, F>(self, mapper: F) -> U
    where
        F: FnOnce(T) -> U,
        U: Default,
    {
        self.match_with(mapper, U::default)
    }

    /// Runs `on_present` for its side effect and hands `self` back untouched.
    pub fn inspect<F>(self, on_present: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.as_ref().match_with(on_present, || ());
        self
    }

    /// `other` if `self` is present, absent otherwise. The value in `self` is dropped.
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        self.match_with(|_| other, || Optional::ABSENT)
    }

    /// Monadic bind. `mapper` returns an `Optional` itself, nothing is wrapped for it.
    pub fn and_then<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.match_with(mapper, || Optional::ABSENT)
    }

    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.and_then(|value| if predicate(&value) { Self::present(value) } else { Self::ABSENT })
    }

    pub fn or(self, other: Self) -> Self {
        self.match_with(Self::present, || other)
    }

    pub fn or_else<F>(self, on_absent: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.match_with(Self::present, on_absent)
    }

    /// Whichever side is present when exactly one is; absent otherwise.
    pub fn xor(self, other: Self) -> Self {
        match (self.is_present(), other.is_present()) {
            (true, false) => self,
            (false, true) => other,
            _ => Self::ABSENT,
        }
    }

    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        self.zip_with(other, |a, b| (a, b))
    }

    pub fn zip_with<U, R, F>(self, other: Optional<U>, f: F) -> Optional<R>
    where
        F: FnOnce(T, U) -> R,
    {
        self.and_then(|a| other.map(|b| f(a, b)))
    }

    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        self.match_with(Ok, || Err(err))
    }

    pub fn ok_or_else<E, F>(self, err_fn: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.match_with(Ok, || Err(err_fn()))
    }

    /// Back to the native representation, for boundaries that cannot carry
    /// the container (encoders, FFI-ish code, `?` on `Option`).
    pub fn to_nullable(self) -> Option<T> {
        self.match_with(Some, || None)
    }

    pub fn iter(&self) -> option::IntoIter<&T> {
        self.as_ref().to_nullable().into_iter()
    }
}

impl<T> Optional<&T> {
    pub fn copied(self) -> Optional<T>
    where
        T: Copy,
    {
        self.map(|value| *value)
    }

    pub fn cloned(self) -> Optional<T>
    where
        T: Clone,
    {
        self.map(Clone::clone)
    }
}

impl<T, U> Optional<(T, U)> {
    pub fn unzip(self) -> (Optional<T>, Optional<U>) {
        self.match_with(
            |(a, b)| (Optional::present(a), Optional::present(b)),
            || (Optional::ABSENT, Optional::ABSENT),
        )
    }
}

impl<T> Optional<Optional<T>> {
    pub fn flatten(self) -> Optional<T> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Optional<Result<T, E>> {
    pub fn transpose(self) -> Result<Optional<T>, E> {
        self.match_with(|result| result.map(Optional::present), || Ok(Optional::ABSENT))
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::ABSENT
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.to_nullable()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_nullable().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_ref().to_nullable() {
            Some(value) => write!(f, "Some({value})"),
            None => f.write_str("None"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_ref().to_nullable() {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}
