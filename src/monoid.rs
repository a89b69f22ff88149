// Copyright 2025 Cowboy AI, LLC.

//! The monoid contract shared by every composable value in this crate.
//!
//! A monoid is a type with an associative `append` and a neutral `identity`:
//!
//! ```text
//! append(a, identity) == a == append(identity, a)
//! append(append(a, b), c) == append(a, append(b, c))
//! ```
//!
//! Commutativity is not required. `append` is fallible so that operands which
//! cannot be combined (different units, different bucket counts) surface as a
//! [`MonoidError`](crate::MonoidError) instead of being coerced. Lawful
//! implementations never fail when one operand is the identity.

use crate::errors::MonoidResult;

/// An immutable value with an associative combine and a neutral element.
pub trait Monoid: Sized {
    /// The neutral element of the monoid.
    fn identity() -> Self;

    /// Combine `self` with `other` into a new value. Neither operand changes.
    fn append(&self, other: &Self) -> MonoidResult<Self>;

    /// Fold any number of values, starting from the identity.
    fn concat_all<I>(values: I) -> MonoidResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        values
            .into_iter()
            .try_fold(Self::identity(), |acc, value| acc.append(&value))
    }
}
