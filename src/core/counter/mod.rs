pub mod inner;

pub use inner::Inner;

use tracing::instrument;

/// Integer counter with post-increment semantics, optionally owning an [`Inner`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Counter {
    value: i32,
    inner: Option<Inner>,
}

impl Counter {
    pub fn new() -> Self {
        tracing::info!("Creating a new counter without an inner instance");
        Self::default()
    }

    pub fn with_inner(inner: Inner) -> Self {
        tracing::info!("Creating a new counter with inner value: {}", inner.value);
        Self {
            value: 0,
            inner: Some(inner),
        }
    }

    /// Returns the value held before the call, then adds one.
    ///
    /// Overflow wraps around to `i32::MIN`.
    #[instrument(name = "increment_counter", level = "debug", skip(self))]
    pub fn increment(&mut self) -> i32 {
        let previous = self.value;
        self.value = previous.wrapping_add(1);
        tracing::info!("Counter incremented to: {}", self.value);
        previous
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn inner(&self) -> Option<&Inner> {
        self.inner.as_ref()
    }
}

#[cfg(test)]
impl Counter {
    pub(crate) fn with_value(value: i32) -> Self {
        Self { value, inner: None }
    }
}
