//! Ones-complement wrappers over the platform's twos-complement integers,
//! for debugging and displaying flag-like values in binary form.
//!
//! Integers carry no display width of their own: `0b0011` and `0b11` are the
//! same number, and the native `!` turns a pattern into a negative number.
//! This crate keeps every pattern non-negative, gives zero a width of one
//! column, and lets a collection of related patterns share the width of its
//! widest member, so that leading zeros become meaningful.
//!
//! Example usage:
//! ```
//! use bitlogic::{all_of, one_of, BitSequence};
//!
//! let flags: BitSequence = [0b11101100000111u32, 0b10000000000000].into_iter().collect();
//! assert_eq!(flags.display_width(), 14);
//! assert_eq!(flags.format(&flags[1]), "10000000000000");
//!
//! // the single high bit of the second pattern is one of the first's flags
//! assert!(all_of(&flags[1], &flags[0]));
//! assert!(one_of(&flags[1], &flags[0]));
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod membership;
pub mod pattern;
pub mod sequence;
pub mod value;

pub use membership::{all_of, any_of, diff, matches, morethanone_of, none_of, one_of};
pub use pattern::{bit_length, bit_mask, format_binary, invert, BitPattern};
pub use sequence::BitSequence;
pub use value::{BitValue, Bits, InvalidValue};
