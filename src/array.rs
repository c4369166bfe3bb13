//! Slice and collection helpers.
//!
//! The typed helpers (`array_move`, `count_occurrences`, `descartes`,
//! `partition`, `group_by`) work on any `T`. The field-keyed helpers
//! (`pluck`, `sort_by`, `group_by_field`) work on JSON objects, where the
//! grouping key is only known at runtime.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::KitError;

/// Move the item at `old_index` to `new_index`.
///
/// When `new_index` lies past the end, the vector is padded with
/// `T::default()` so the moved item lands exactly at `new_index`.
///
/// ```
/// let mut v = vec![1, 2, 3, 4, 5];
/// koolkit::array::array_move(&mut v, 1, 3).unwrap();
/// assert_eq!(v, [1, 3, 4, 2, 5]);
/// ```
pub fn array_move<T: Default>(
    array: &mut Vec<T>,
    old_index: usize,
    new_index: usize,
) -> Result<(), KitError> {
    let len = array.len();
    if old_index >= len {
        return Err(KitError::IndexOutOfRange { index: old_index, len });
    }
    if new_index >= len {
        let padded = new_index
            .checked_add(1)
            .ok_or(KitError::IndexOutOfRange { index: new_index, len })?;
        array
            .try_reserve(padded - len)
            .map_err(|_| KitError::IndexOutOfRange { index: new_index, len })?;
        array.resize_with(padded, T::default);
    }
    let item = array.remove(old_index);
    array.insert(new_index, item);
    Ok(())
}

/// Number of elements equal to `value`.
pub fn count_occurrences<T: PartialEq>(items: &[T], value: &T) -> usize {
    items.iter().filter(|v| *v == value).count()
}

/// Cartesian product of `sets`. The first set varies slowest.
pub fn descartes<T: Clone>(sets: &[Vec<T>]) -> Vec<Vec<T>> {
    sets.iter().fold(vec![Vec::new()], |acc, set| {
        acc.iter()
            .flat_map(|prefix| {
                set.iter().map(move |item| {
                    let mut row = prefix.clone();
                    row.push(item.clone());
                    row
                })
            })
            .collect()
    })
}

/// Curried split: the returned closure sorts items into
/// `(rejected, accepted)` according to `pred`, keeping input order.
pub fn partition<T, F>(pred: F) -> impl Fn(Vec<T>) -> (Vec<T>, Vec<T>)
where
    F: Fn(&T) -> bool,
{
    move |items| {
        let mut rejected = Vec::new();
        let mut accepted = Vec::new();
        for item in items {
            if pred(&item) {
                accepted.push(item);
            } else {
                rejected.push(item);
            }
        }
        (rejected, accepted)
    }
}

/// The `key` field of every object; `Null` where the field is absent.
pub fn pluck(objs: &[Value], key: &str) -> Vec<Value> {
    objs.iter()
        .map(|obj| obj.get(key).cloned().unwrap_or(Value::Null))
        .collect()
}

/// Stable in-place sort of JSON objects by the `key` field.
pub fn sort_by(array: &mut [Value], key: &str) {
    array.sort_by(|a, b| compare_fields(a.get(key), b.get(key)));
}

fn compare_fields(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(f64::NAN), y.as_f64().unwrap_or(f64::NAN));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

/// Group `items` by `key_fn`, preserving input order inside each group.
pub fn group_by<T, K, F, I>(items: I, key_fn: F) -> BTreeMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    groups
}

/// Group JSON objects by the string form of their `key` field.
///
/// Strings are used verbatim, other values by their JSON text, and a
/// missing field groups under `"undefined"`.
pub fn group_by_field<I>(values: I, key: &str) -> Map<String, Value>
where
    I: IntoIterator<Item = Value>,
{
    let grouped = group_by(values, |v| match v.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "undefined".to_string(),
    });
    grouped
        .into_iter()
        .map(|(k, items)| (k, Value::Array(items)))
        .collect()
}
