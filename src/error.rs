use thiserror::Error;

pub(crate) const UNWRAP_ABSENT: &str = "called `Optional::unwrap()` on an absent value";

/// A value was assumed present, but the [`Optional`](crate::Optional) held nothing.
///
/// The display output is the message and nothing else, so a caller-supplied
/// message passed to [`Optional::expect`](crate::Optional::expect) surfaces verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct ValueAbsent<'a> {
    message: &'a str,
}

impl<'a> ValueAbsent<'a> {
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }

    pub const fn message(&self) -> &'a str {
        self.message
    }
}

#[cold]
#[track_caller]
pub(crate) fn absent_failed(err: ValueAbsent<'_>) -> ! {
    panic!("{err}")
}
