//! Lazy, memoized attribute cells.
//!
//! Project metadata (config, project name, repository URL) is expensive or
//! fallible to compute, so it is resolved on first access and cached for the
//! lifetime of the owning instance. `Attr<T>` is that cache slot: compute
//! once via a producer, overwrite explicitly via [`Attr::set`].
//!
//! The same type serves fields on [`ProjectContext`] and fields a plugin
//! declares on its own struct - there is nothing context-specific about it.
//!
//! [`ProjectContext`]: crate::core::context::ProjectContext

/// A per-instance lazily-computed value.
///
/// State is either unset or computed. Once computed, the value is returned
/// on every subsequent read without re-invoking the producer, until the
/// caller overwrites it with [`set`](Attr::set) or resets it with
/// [`clear`](Attr::clear).
#[derive(Debug, Clone, Default)]
pub struct Attr<T> {
    value: Option<T>,
}

impl<T> Attr<T> {
    /// Create an unset attribute.
    pub const fn unset() -> Self {
        Attr { value: None }
    }

    /// Get the cached value, if computed.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Whether a value has been computed or explicitly set.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Unconditionally overwrite the cached value, bypassing any producer.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Drop the cached value; the next read re-invokes the producer.
    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Get the cached value, computing it with `init` on first access.
    pub fn get_or_init(&mut self, init: impl FnOnce() -> T) -> &T {
        if self.value.is_none() {
            self.value = Some(init());
        }
        self.value.as_ref().unwrap()
    }

    /// Fallible variant of [`get_or_init`](Attr::get_or_init).
    ///
    /// On producer error nothing is stored and the error propagates. Errors
    /// are fatal to the whole run at this layer, so a failed producer is
    /// never observed twice in practice.
    pub fn get_or_try_init<E>(
        &mut self,
        init: impl FnOnce() -> Result<T, E>,
    ) -> Result<&T, E> {
        if self.value.is_none() {
            self.value = Some(init()?);
        }
        Ok(self.value.as_ref().unwrap())
    }

    /// Take the cached value out, leaving the attribute unset.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }
}
