//! Prime sizing for bucket arrays.
//!
//! Both maps keep their capacity prime so that `hash % capacity` spreads keys
//! evenly and quadratic probing reaches half of the table before repeating.

/// Returns true if `candidate` is prime.
///
/// Trial division by odd factors up to the square root.
#[must_use]
pub fn is_prime(candidate: usize) -> bool {
    if candidate == 2 || candidate == 3 {
        return true;
    }

    if candidate < 2 || candidate % 2 == 0 {
        return false;
    }

    let mut factor: usize = 3;
    while factor.checked_mul(factor).is_some_and(|square| square <= candidate) {
        if candidate % factor == 0 {
            return false;
        }
        factor = factor.saturating_add(2);
    }

    true
}

/// Returns the smallest odd prime reachable from `capacity` by stepping upward.
///
/// An even `capacity` is bumped to the next odd number first, so
/// `next_prime(2)` is 3, not 2.
#[must_use]
pub fn next_prime(capacity: usize) -> usize {
    let mut candidate = if capacity % 2 == 0 { capacity.saturating_add(1) } else { capacity };

    while !is_prime(candidate) {
        candidate = candidate.saturating_add(2);
    }

    candidate
}

/// Keeps an already prime `capacity`, otherwise rounds it up with [`next_prime`].
#[must_use]
pub(crate) fn prime_at_least(capacity: usize) -> usize {
    if is_prime(capacity) { capacity } else { next_prime(capacity) }
}
