//! Collection assertions for test suites, driven by any [`Comparator`].

use std::cmp::Ordering;

use itertools::Itertools;

use crate::{
    comparator::{Comparator, Verdict},
    error::{Error, Result},
};

/// Stable sort of `items`. The comparator has to order `items` totally: elements whose
/// verdict is only `Different` have no defined place.
pub fn sort<C>(cmp: &C, items: &mut [&C::Item]) -> Result<()>
where
    C: Comparator + ?Sized,
{
    let mut error = None;
    items.sort_by(|a, b| match cmp.ordering(a, b) {
        Ok(ordering) => ordering,
        Err(err) => {
            if error.is_none() {
                error = Some(err);
            }
            Ordering::Equal
        }
    });
    error.map_or(Ok(()), Err)
}

/// Whether every adjacent pair is in order. Neighbours whose verdict is only
/// `Different` have no direction, so they fail with [`Error::Unordered`].
pub fn is_sorted<C>(cmp: &C, items: &[&C::Item]) -> Result<bool>
where
    C: Comparator + ?Sized,
{
    for (a, b) in items.iter().tuple_windows() {
        match cmp.compare(a, b)? {
            Verdict::Different => return Err(Error::Unordered(cmp.name().to_owned())),
            verdict => {
                if verdict.into_ordering()? == Ordering::Greater {
                    return Ok(false);
                }
            }
        }
    }
    Ok(true)
}

/// Pairs every expected element with an equal, not yet paired actual element.
///
/// Returns the indexes of expected elements left without a partner and the indexes of
/// actual elements nobody asked for.
pub fn unmatched<C>(
    cmp: &C,
    actual: &[&C::Item],
    expected: &[&C::Item],
) -> Result<(Vec<usize>, Vec<usize>)>
where
    C: Comparator + ?Sized,
{
    let mut taken = vec![false; actual.len()];
    let mut missing = Vec::new();

    'expected: for (i, e) in expected.iter().enumerate() {
        for (j, a) in actual.iter().enumerate() {
            if !taken[j] && cmp.compare(a, e)?.is_equal() {
                taken[j] = true;
                continue 'expected;
            }
        }
        missing.push(i);
    }

    let unexpected = taken.iter().positions(|t| !t).collect();
    Ok((missing, unexpected))
}

pub fn contains_exactly_in_any_order<C>(
    cmp: &C,
    actual: &[&C::Item],
    expected: &[&C::Item],
) -> Result<bool>
where
    C: Comparator + ?Sized,
{
    let (missing, unexpected) = unmatched(cmp, actual, expected)?;
    Ok(missing.is_empty() && unexpected.is_empty())
}

/// Panics unless `actual` and `expected` hold the same elements under `cmp`.
#[track_caller]
pub fn assert_equivalent<C>(cmp: &C, actual: &[&C::Item], expected: &[&C::Item])
where
    C: Comparator + ?Sized,
{
    match unmatched(cmp, actual, expected) {
        Ok((missing, unexpected)) => assert!(
            missing.is_empty() && unexpected.is_empty(),
            "{}: expected elements {:?} not found, actual elements {:?} not expected",
            cmp.name(),
            missing,
            unexpected
        ),
        Err(err) => panic!("{}: {}", cmp.name(), err),
    }
}
