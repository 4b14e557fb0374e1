//! Result normalisation: bound values → labelled, deduplicated entities.
//!
//! A raw endpoint reply is reduced to the values bound in it, each value is
//! given a display label, and labels are deduplicated in first-seen order.
//! Nothing here fails: an unreadable or empty reply is an empty result.

pub mod dedup;
pub mod label;
pub mod turtle;

use crate::types::ResultSet;

/// Normalise the reply to a list-kind query into a [`ResultSet`].
pub fn normalize_list(body: &str) -> ResultSet {
    dedup::deduplicate(turtle::bound_values(body))
}

/// Normalise the reply to a single-value query: the first bound value, if
/// any.
pub fn normalize_single(body: &str) -> Option<String> {
    turtle::bound_values(body).into_iter().next()
}
