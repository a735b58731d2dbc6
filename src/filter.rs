//! Name filtering
//!
//! Pure, order-preserving, case-insensitive substring match on the user's
//! name. Results are indices into the input slice so callers never clone
//! records to narrow the view.

use crate::model::User;

/// Check whether a name matches the query, case-insensitively.
///
/// An empty or whitespace-only query matches everything.
pub fn matches_name(name: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Indices of `users` whose name matches `query`, in input order.
pub fn filter_indices(users: &[User], query: &str) -> Vec<usize> {
    users
        .iter()
        .enumerate()
        .filter(|(_, user)| matches_name(&user.name, query))
        .map(|(idx, _)| idx)
        .collect()
}
