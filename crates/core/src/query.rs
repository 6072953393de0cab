//! Generic filtering over any homogeneous sequence.

use crate::error::{LedgerError, LedgerResult};

/// Returns the elements of `data` that satisfy `predicate`, in input order.
///
/// An empty match is an **error** (`LedgerError::EmptyResult`), not an empty
/// `Vec`. Callers composing this with other lookups must handle that case
/// explicitly rather than treating "no matches" as success.
pub fn find_by<T, F>(data: &[T], predicate: F) -> LedgerResult<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let matches: Vec<T> = data.iter().filter(|v| predicate(v)).cloned().collect();

    if matches.is_empty() {
        return Err(LedgerError::EmptyResult);
    }

    Ok(matches)
}
