use thiserror::Error;

/// A value was rejected because the container already holds as many
/// elements as its limit allows.
///
/// The rejected value is handed back, see [`CapacityError::into_inner`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("capacity limit of {limit} reached")]
pub struct CapacityError<T> {
    value: T,
    limit: usize,
}

impl<T> CapacityError<T> {
    /// The limit that was in force when the value was rejected.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the rejected value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Accept `value` if one more element fits under `limit`.
///
/// A `limit` of 0 means unlimited.
#[cfg(any(feature = "queue", feature = "stack"))]
pub(crate) fn check_capacity<T>(value: T, len: usize, limit: usize) -> Result<T, CapacityError<T>> {
    if limit > 0 && len + 1 > limit {
        log::debug!("rejecting value, {} elements already at the limit of {}", len, limit);
        return Err(CapacityError { value, limit });
    }
    Ok(value)
}

/// `true` if `len` elements leave no room under `limit`. The limit may have
/// been lowered below `len`, which also counts as full.
#[cfg(any(feature = "queue", feature = "stack"))]
pub(crate) fn is_full(len: usize, limit: usize) -> bool {
    limit > 0 && len >= limit
}
