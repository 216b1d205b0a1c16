//! Defines the [`multi_replace`] operator and its variants.
//!
//! Every element of `values` equal to `keys[i]` is replaced by `replacements[i]`,
//! where `i` is the _first_ index whose key matches. Elements matching no key
//! are passed through unchanged.
//!
//! Two strategies are available and are observably identical:
//! * [`ReplaceStrategy::Scan`]: a linear scan of `keys` per element, `O(n*m)`
//!   without auxiliary memory. Fastest for few keys.
//! * [`ReplaceStrategy::Hash`]: a [`ReplaceMap`] is built once from `keys`, and
//!   each element is looked up in it, `O(n + m)`.
//!
//! # Example
//! ```
//! use multireplace::compute::replace::multi_replace;
//!
//! let values = [1u64, 2, 3, 2, 5];
//! let result = multi_replace(&values, &[2, 5], &[20, 50]).unwrap();
//! assert_eq!(result, vec![1, 20, 3, 20, 50]);
//! ```
use std::collections::HashMap;
use std::iter::FromIterator;

use ahash::RandomState;
use log::{debug, trace};
use multiversion::multiversion;

use crate::{
    array::UIntArray,
    datatypes::PrimitiveType,
    error::{Error, Result},
    types::NativeType,
};

macro_rules! new_state {
    () => {
        RandomState::with_seeds(0, 0, 0, 0)
    };
}

/// Maximum number of keys for which [`ReplaceStrategy::Auto`] scans the keys
/// instead of building a [`ReplaceMap`].
pub const SCAN_THRESHOLD: usize = 16;

/// How [`multi_replace_with`] looks up each value against the keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplaceStrategy {
    /// [`ReplaceStrategy::Scan`] up to [`SCAN_THRESHOLD`] keys, [`ReplaceStrategy::Hash`] otherwise.
    Auto,
    /// Linear scan of the keys per value.
    Scan,
    /// One-time [`ReplaceMap`], one lookup per value.
    Hash,
}

impl Default for ReplaceStrategy {
    fn default() -> Self {
        Self::Auto
    }
}

impl ReplaceStrategy {
    /// Resolves [`ReplaceStrategy::Auto`] to a concrete strategy for `len` values and `keys` keys.
    #[inline]
    pub fn resolve(self, len: usize, keys: usize) -> Self {
        match self {
            Self::Auto if len == 0 || keys <= SCAN_THRESHOLD => Self::Scan,
            Self::Auto => Self::Hash,
            other => other,
        }
    }
}

/// A mapping from each key to its first replacement.
///
/// Building it costs `O(m)` for `m` keys; applying it costs one lookup per
/// value. Build it once to apply the same replacement to many arrays.
/// # Example
/// ```
/// use multireplace::compute::replace::ReplaceMap;
///
/// let map = ReplaceMap::try_new(&[7u32, 7], &[100, 200]).unwrap();
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.apply(&[7, 8]), vec![100, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct ReplaceMap<T: NativeType> {
    map: HashMap<T, T, RandomState>,
}

impl<T: NativeType> ReplaceMap<T> {
    /// Returns a new [`ReplaceMap`] mapping `keys[i]` to `replacements[i]`.
    /// When a key is repeated, its first replacement is kept.
    /// # Errors
    /// Errors with [`Error::DimensionMismatch`] iff `keys` and `replacements`
    /// have different lengths.
    pub fn try_new(keys: &[T], replacements: &[T]) -> Result<Self> {
        Error::check_dimensions(keys.len(), replacements.len())?;
        Ok(Self::from_checked(keys, replacements))
    }

    // `keys` and `replacements` must have the same length.
    fn from_checked(keys: &[T], replacements: &[T]) -> Self {
        let map = Self::from_iter(keys.iter().copied().zip(replacements.iter().copied()));
        debug!(
            "built replace map of {} from {} keys ({} distinct)",
            T::PRIMITIVE,
            keys.len(),
            map.len()
        );
        map
    }

    /// The replacement of `value`, if `value` is a key.
    #[inline]
    pub fn get(&self, value: &T) -> Option<T> {
        self.map.get(value).copied()
    }

    /// The replacement of `value`, or `value` itself when it is not a key.
    #[inline]
    pub fn replace(&self, value: T) -> T {
        lookup_map(&self.map, value)
    }

    /// The number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether this map has no keys, in which case it is the identity.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns a new vector with every value replaced according to this map.
    pub fn apply(&self, values: &[T]) -> Vec<T> {
        replace_map(&self.map, values)
    }

    /// Replaces every value of `values` according to this map, in place.
    pub fn apply_assign(&self, values: &mut [T]) {
        replace_map_assign(&self.map, values)
    }
}

impl<T: NativeType> FromIterator<(T, T)> for ReplaceMap<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = HashMap::with_capacity_and_hasher(iter.size_hint().0, new_state!());
        for (key, replacement) in iter {
            map.entry(key).or_insert(replacement);
        }
        Self { map }
    }
}

#[inline]
fn lookup_scan<T: NativeType>(value: T, keys: &[T], replacements: &[T]) -> T {
    keys.iter()
        .zip(replacements.iter())
        .find(|(key, _)| **key == value)
        .map(|(_, replacement)| *replacement)
        .unwrap_or(value)
}

#[inline]
fn lookup_map<T: NativeType>(map: &HashMap<T, T, RandomState>, value: T) -> T {
    map.get(&value).copied().unwrap_or(value)
}

#[multiversion]
#[clone(target = "x86_64+sse3+ssse3+avx+avx2")]
fn replace_scan<T: NativeType>(values: &[T], keys: &[T], replacements: &[T]) -> Vec<T> {
    values
        .iter()
        .map(|value| lookup_scan(*value, keys, replacements))
        .collect()
}

#[multiversion]
#[clone(target = "x86_64+sse3+ssse3+avx+avx2")]
fn replace_scan_assign<T: NativeType>(values: &mut [T], keys: &[T], replacements: &[T]) {
    values
        .iter_mut()
        .for_each(|value| *value = lookup_scan(*value, keys, replacements));
}

#[multiversion]
#[clone(target = "x86_64+aes+sse3+ssse3+avx+avx2")]
fn replace_map<T: NativeType>(map: &HashMap<T, T, RandomState>, values: &[T]) -> Vec<T> {
    values.iter().map(|value| lookup_map(map, *value)).collect()
}

#[multiversion]
#[clone(target = "x86_64+aes+sse3+ssse3+avx+avx2")]
fn replace_map_assign<T: NativeType>(map: &HashMap<T, T, RandomState>, values: &mut [T]) {
    values
        .iter_mut()
        .for_each(|value| *value = lookup_map(map, *value));
}

/// Returns a new vector where each value equal to `keys[i]` is replaced by
/// `replacements[i]`, for the smallest such `i`. Values that are not keys are
/// copied unchanged.
///
/// The lookup strategy is chosen from the number of keys; see [`ReplaceStrategy::Auto`].
/// # Errors
/// Errors with [`Error::DimensionMismatch`] iff `keys` and `replacements` have
/// different lengths, independently of `values`.
/// # Example
/// ```
/// use multireplace::compute::replace::multi_replace;
///
/// // the first match wins
/// let result = multi_replace(&[7u8], &[7, 7], &[100, 200]).unwrap();
/// assert_eq!(result, vec![100]);
///
/// assert!(multi_replace(&[7u8], &[7, 7], &[100]).is_err());
/// ```
pub fn multi_replace<T: NativeType>(values: &[T], keys: &[T], replacements: &[T]) -> Result<Vec<T>> {
    multi_replace_with(values, keys, replacements, ReplaceStrategy::Auto)
}

/// Same as [`multi_replace`], forcing [`ReplaceStrategy::Scan`].
pub fn multi_replace_scan<T: NativeType>(
    values: &[T],
    keys: &[T],
    replacements: &[T],
) -> Result<Vec<T>> {
    multi_replace_with(values, keys, replacements, ReplaceStrategy::Scan)
}

/// Same as [`multi_replace`], forcing [`ReplaceStrategy::Hash`].
pub fn multi_replace_hash<T: NativeType>(
    values: &[T],
    keys: &[T],
    replacements: &[T],
) -> Result<Vec<T>> {
    multi_replace_with(values, keys, replacements, ReplaceStrategy::Hash)
}

/// Same as [`multi_replace`], with an explicit [`ReplaceStrategy`].
pub fn multi_replace_with<T: NativeType>(
    values: &[T],
    keys: &[T],
    replacements: &[T],
    strategy: ReplaceStrategy,
) -> Result<Vec<T>> {
    Error::check_dimensions(keys.len(), replacements.len())?;

    let strategy = strategy.resolve(values.len(), keys.len());
    trace!(
        "multi_replace of {} values over {} keys ({}) using {:?}",
        values.len(),
        keys.len(),
        T::PRIMITIVE,
        strategy
    );

    Ok(match strategy {
        ReplaceStrategy::Scan => replace_scan(values, keys, replacements),
        _ => ReplaceMap::from_checked(keys, replacements).apply(values),
    })
}

/// In-place version of [`multi_replace`]: each value of `values` is replaced
/// by the first replacement of its key.
///
/// Each value is looked up exactly once, so a replacement that is itself a
/// key is not replaced again.
/// # Errors
/// Errors with [`Error::DimensionMismatch`] iff `keys` and `replacements` have
/// different lengths, in which case `values` is left untouched.
/// # Example
/// ```
/// use multireplace::compute::replace::multi_replace_assign;
///
/// let mut values = vec![1u16, 2];
/// multi_replace_assign(&mut values, &[1, 2], &[2, 3]).unwrap();
/// assert_eq!(values, vec![2, 3]);
/// ```
pub fn multi_replace_assign<T: NativeType>(
    values: &mut [T],
    keys: &[T],
    replacements: &[T],
) -> Result<()> {
    Error::check_dimensions(keys.len(), replacements.len())?;

    let strategy = ReplaceStrategy::Auto.resolve(values.len(), keys.len());
    trace!(
        "multi_replace_assign of {} values over {} keys ({}) using {:?}",
        values.len(),
        keys.len(),
        T::PRIMITIVE,
        strategy
    );

    match strategy {
        ReplaceStrategy::Scan => replace_scan_assign(values, keys, replacements),
        _ => ReplaceMap::from_checked(keys, replacements).apply_assign(values),
    };
    Ok(())
}

macro_rules! primitive {
    ($values:expr, $keys:expr, $replacements:expr) => {{
        multi_replace($values, $keys, $replacements).map(UIntArray::from)
    }};
}

/// Dynamically-typed version of [`multi_replace`].
/// # Errors
/// This function errors when:
/// * the arrays do not share the same [`PrimitiveType`]
/// * `keys` and `replacements` have different lengths
/// # Example
/// ```
/// use multireplace::array::UIntArray;
/// use multireplace::compute::replace::multi_replace_dyn;
///
/// let values = UIntArray::from(vec![1u32, 2, 3]);
/// let keys = UIntArray::from(vec![3u32]);
/// let replacements = UIntArray::from(vec![30u32]);
///
/// let result = multi_replace_dyn(&values, &keys, &replacements).unwrap();
/// assert_eq!(result, UIntArray::from(vec![1u32, 2, 30]));
/// ```
pub fn multi_replace_dyn(
    values: &UIntArray,
    keys: &UIntArray,
    replacements: &UIntArray,
) -> Result<UIntArray> {
    match (values, keys, replacements) {
        (UIntArray::UInt8(v), UIntArray::UInt8(k), UIntArray::UInt8(r)) => primitive!(v, k, r),
        (UIntArray::UInt16(v), UIntArray::UInt16(k), UIntArray::UInt16(r)) => primitive!(v, k, r),
        (UIntArray::UInt32(v), UIntArray::UInt32(k), UIntArray::UInt32(r)) => primitive!(v, k, r),
        (UIntArray::UInt64(v), UIntArray::UInt64(k), UIntArray::UInt64(r)) => primitive!(v, k, r),
        _ => Err(Error::InvalidArgumentError(format!(
            "Arrays must have the same physical type, got \"{}\", \"{}\" and \"{}\"",
            values.data_type(),
            keys.data_type(),
            replacements.data_type()
        ))),
    }
}

/// Checks if arrays of type `data_type` can be used in [`multi_replace_dyn`].
///
/// # Examples
/// ```
/// use multireplace::compute::replace::can_multi_replace;
/// use multireplace::datatypes::PrimitiveType;
///
/// assert_eq!(can_multi_replace(&PrimitiveType::UInt64), true);
/// ```
pub fn can_multi_replace(data_type: &PrimitiveType) -> bool {
    matches!(
        data_type,
        PrimitiveType::UInt8 | PrimitiveType::UInt16 | PrimitiveType::UInt32 | PrimitiveType::UInt64
    )
}
