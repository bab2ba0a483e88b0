use std::{
    fmt,
    ops::{Index, IndexMut},
    slice,
};

use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{
    distributions::{Bernoulli, Distribution},
    Rng,
};

use crate::pattern::{bit_length, bit_mask, format_binary, BitPattern};

/// An ordered collection of bit patterns sharing one display width.
///
/// The shared width is the bit length of the widest element (at least one
/// column), and is recomputed from the current contents on every use, so any
/// mutation shows up in later widths, masks and formatted strings. Within
/// that width leading zeros are significant: a zero column means "flag
/// absent", not "position does not exist".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitSequence {
    values: Vec<BigUint>,
}

impl BitSequence {
    pub fn new() -> BitSequence {
        BitSequence { values: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn push<T: Into<BigUint>>(&mut self, value: T) {
        self.values.push(value.into());
    }

    pub fn iter(&self) -> slice::Iter<'_, BigUint> {
        self.values.iter()
    }

    /// Bit length of the widest element, never below one.
    pub fn display_width(&self) -> u64 {
        self.values.iter().map(|v| bit_length(v)).max().unwrap_or(1).max(1)
    }

    /// All-ones pattern spanning [`display_width`](Self::display_width).
    pub fn full_mask(&self) -> BigUint {
        bit_mask(&BigUint::zero(), self.display_width())
    }

    /// Renders `x` zero-padded to the shared width. A value wider than the
    /// sequence keeps all of its digits.
    pub fn format<T: BitPattern + ?Sized>(&self, x: &T) -> String {
        format_binary(x, Some(self.display_width()))
    }

    /// Ones-complement of `x` across the whole shared width, so positions
    /// the value itself never reaches still flip. At an unchanged width,
    /// inverting twice returns `x`.
    pub fn invert(&self, x: &BigUint) -> BigUint {
        x ^ self.full_mask()
    }

    /// Append `new_patterns` patterns drawn uniformly from `[0, 2^width)`.
    pub fn generate_uniform<R: Rng>(&mut self, rng: &mut R, new_patterns: usize, width: u64) {
        self.values.reserve(new_patterns);
        for _ in 0..new_patterns {
            self.values.push(rng.gen_biguint(width));
        }
    }

    /// Append `new_patterns` patterns of `width` bits, where each bit is set
    /// with a chance of `p`, 0.0 <= `p` <= 1.0.
    pub fn bernoulli<R: Rng>(&mut self, rng: &mut R, new_patterns: usize, width: u64, p: f64) {
        self.values.reserve(new_patterns);
        let dist = Bernoulli::new(p).unwrap();
        for _ in 0..new_patterns {
            let mut pattern = BigUint::zero();
            for bit in 0..width {
                if dist.sample(rng) {
                    pattern.set_bit(bit, true);
                }
            }
            self.values.push(pattern);
        }
    }
}

impl From<Vec<BigUint>> for BitSequence {
    fn from(values: Vec<BigUint>) -> BitSequence {
        BitSequence { values }
    }
}

impl<T: Into<BigUint>> FromIterator<T> for BitSequence {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> BitSequence {
        BitSequence { values: iter.into_iter().map(Into::into).collect() }
    }
}

impl<T: Into<BigUint>> Extend<T> for BitSequence {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter.into_iter().map(Into::into));
    }
}

impl Index<usize> for BitSequence {
    type Output = BigUint;

    fn index(&self, index: usize) -> &BigUint {
        &self.values[index]
    }
}

impl IndexMut<usize> for BitSequence {
    fn index_mut(&mut self, index: usize) -> &mut BigUint {
        &mut self.values[index]
    }
}

impl<'a> IntoIterator for &'a BitSequence {
    type Item = &'a BigUint;
    type IntoIter = slice::Iter<'a, BigUint>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.display_width() as usize;
        for v in &self.values {
            writeln!(f, "{:0width$b}", v, width = width)?;
        }
        Ok(())
    }
}
