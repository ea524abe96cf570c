//! `Array.prototype.at`-style lookups for Rust slices.
//!
//! JavaScript's `at` method addresses an array from either end: `arr.at(0)` is
//! the first element, `arr.at(-1)` the last. This crate reproduces that lookup
//! rule for `&[T]` - including its less obvious corners - as a total,
//! panic-free operation returning `Option<&T>`.
//!
//! # Lookup rules
//!
//! For a sequence of length `L`, the rules apply in this order:
//!
//! | Index argument        | Result                                    |
//! |-----------------------|-------------------------------------------|
//! | not a number          | element `0` (`None` when empty)           |
//! | magnitude > `L`       | `None`                                    |
//! | negative `i`          | element `L + i` (counting from the end)   |
//! | non-negative `i`      | element `i` (`None` when `i == L`)        |
//!
//! # Example
//!
//! ```
//! use array_at::{At, at};
//!
//! let seq = vec![1, 2, 3];
//!
//! assert_eq!(at(&seq, 0), Some(&1));
//! assert_eq!(at(&seq, -1), Some(&3));
//! assert_eq!(at(&seq, 4), None);
//!
//! // Method form, available on anything that derefs to a slice.
//! assert_eq!(seq.at(-2), Some(&2));
//! ```
//!
//! Since the source semantics accept *any* value as the index, the index
//! argument is an [`Index`] rather than a bare integer. Integers convert into
//! it losslessly; strings and chars convert to the "not a number" case:
//!
//! ```
//! use array_at::at;
//!
//! let seq = [1, 2, 3];
//! assert_eq!(at(&seq, "notanumber"), Some(&1));
//! ```
//!
//! # Gotchas
//!
//! - **Non-numeric fallback**: a non-numeric index returns the *first*
//!   element, not `None`. That is the documented upstream behavior (a
//!   non-number is treated as "no index given") and is preserved here
//!   verbatim, quirky as it is.
//! - **Boundary asymmetry**: `at(&seq, -L)` is the first element, but
//!   `at(&seq, L)` is `None`. The magnitude check only rejects indices
//!   strictly beyond `L`; the positive edge falls through to direct access,
//!   which has no element to find.
//! - Fractional numbers are not accepted as indices. The upstream rule for
//!   them was never pinned down, so `Index` offers no `f64` conversion rather
//!   than guessing at truncation semantics.

use core::fmt;

/// An index argument: either a (possibly negative) number, or anything else.
///
/// Mirrors the dynamically-typed original, where the index could be any
/// runtime value. Integers convert via `From`; so do `&str` and `char`, which
/// land on [`Index::NotANumber`]. Entry points take `impl Into<Index>`, so
/// call sites pass plain literals:
///
/// ```
/// use array_at::{Index, at};
///
/// assert_eq!(Index::from(-2i32), Index::Number(-2));
/// assert_eq!(Index::from("first, please"), Index::NotANumber);
///
/// let seq = ['a', 'b', 'c'];
/// assert_eq!(at(&seq, -2i64), Some(&'b'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Index {
    /// A numeric index. Negative values count backward from the end.
    Number(i64),
    /// A non-numeric argument; treated as "no index given".
    NotANumber,
}

static_assertions::assert_eq_size!(Index, [i64; 2]);

macro_rules! index_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Index {
                #[inline]
                fn from(value: $ty) -> Self {
                    Index::Number(value as i64)
                }
            }
        )*
    };
}

// Only lossless conversions: every one of these fits in i64.
index_from_int!(i8, i16, i32, i64, isize, u8, u16, u32);

impl From<&str> for Index {
    #[inline]
    fn from(_: &str) -> Self {
        Index::NotANumber
    }
}

impl From<char> for Index {
    #[inline]
    fn from(_: char) -> Self {
        Index::NotANumber
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Number(n) => write!(f, "{n}"),
            Index::NotANumber => f.write_str("NaN"),
        }
    }
}

/// Looks up an element by forward or reverse position.
///
/// Total over all inputs: never panics, never allocates, never mutates
/// `seq`. Out-of-range and non-numeric arguments produce the designed
/// fallbacks described in the [crate docs](crate), not errors.
///
/// ```
/// use array_at::at;
///
/// let seq = [10, 20, 30];
/// assert_eq!(at(&seq, 2), Some(&30));
/// assert_eq!(at(&seq, -3), Some(&10)); // -L reaches the front...
/// assert_eq!(at(&seq, 3), None);       // ...but +L is out of bounds
/// ```
pub fn at<T, I>(seq: &[T], index: I) -> Option<&T>
where
    I: Into<Index>,
{
    let n = match index.into() {
        Index::NotANumber => return seq.first(),
        Index::Number(n) => n,
    };
    // unsigned_abs keeps i64::MIN from overflowing the magnitude check.
    if n.unsigned_abs() > seq.len() as u64 {
        return None;
    }
    if n < 0 {
        // Magnitude is at most len here, so this cannot underflow.
        return seq.get(seq.len() - n.unsigned_abs() as usize);
    }
    // n == len falls through to get(), which has nothing there.
    seq.get(n as usize)
}

/// Method-form access: `seq.at(-1)` instead of `at(&seq, -1)`.
///
/// Blanket-implemented for `[T]`, so the method is available on slices,
/// `Vec<T>`, arrays, and boxed slices through deref coercion. Agrees with
/// [`at`] for every input.
pub trait At {
    type Item;

    /// See [`at`].
    fn at<I: Into<Index>>(&self, index: I) -> Option<&Self::Item>;
}

impl<T> At for [T] {
    type Item = T;

    #[inline]
    fn at<I: Into<Index>>(&self, index: I) -> Option<&T> {
        at(self, index)
    }
}
