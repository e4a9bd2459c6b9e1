//! Order-preserving collection helpers
//!
//! All helpers rely on `PartialEq` only, so they work for values that are not
//! hashable (floats, nested vectors) at quadratic cost.

use serde::{Deserialize, Serialize};

use crate::error::{CommonError, Result};

/// Either a single value or a group of values, flattened by [`extract_subelements`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Item(T),
    Group(Vec<T>),
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Item(value)
    }
}

/// First value that differs from `T::default()`, or the last value if none does
///
/// Returns `None` only for an empty input.
pub fn coalesce<T, I>(values: I) -> Option<T>
where
    T: Default + PartialEq,
    I: IntoIterator<Item = T>,
{
    let empty = T::default();
    let mut last = None;
    for value in values {
        if value != empty {
            return Some(value);
        }
        last = Some(value);
    }
    last
}

/// Unique values in order of first appearance
#[must_use]
pub fn distinct<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
    }
    unique
}

/// Values of `alfa` that are absent from `beta`, optionally de-duplicated
#[must_use]
pub fn diff_list<T: PartialEq + Clone>(alfa: &[T], beta: &[T], unique: bool) -> Vec<T> {
    let diff: Vec<T> = alfa
        .iter()
        .filter(|item| !beta.contains(item))
        .cloned()
        .collect();
    if unique {
        distinct(&diff)
    } else {
        diff
    }
}

/// Unique values present in both slices, in `alfa` order
#[must_use]
pub fn common_uniques<T: PartialEq + Clone>(alfa: &[T], beta: &[T]) -> Vec<T> {
    let common: Vec<T> = alfa
        .iter()
        .filter(|item| beta.contains(item))
        .cloned()
        .collect();
    distinct(&common)
}

/// True if every value of `alfa` occurs in `beta`
#[must_use]
pub fn is_subset<T: PartialEq>(alfa: &[T], beta: &[T]) -> bool {
    alfa.iter().all(|item| beta.contains(item))
}

/// Split a slice into consecutive chunks of `size` (the last may be shorter)
///
/// # Errors
/// Returns `CommonError::InvalidArgument` if `size` is zero
pub fn split_sequence<T>(items: &[T], size: usize) -> Result<std::slice::Chunks<'_, T>> {
    if size == 0 {
        return Err(CommonError::invalid_argument("chunk size must be positive"));
    }
    Ok(items.chunks(size))
}

/// Flatten one level of grouping, optionally keeping unique values only
#[must_use]
pub fn extract_subelements<T: PartialEq + Clone>(items: &[Nested<T>], unique: bool) -> Vec<T> {
    let mut flat = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Nested::Item(value) => flat.push(value.clone()),
            Nested::Group(values) => flat.extend(values.iter().cloned()),
        }
    }
    if unique {
        distinct(&flat)
    } else {
        flat
    }
}
