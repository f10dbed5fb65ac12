// This file is part of Gear.

// Copyright (C) 2025 Gear Technologies Inc.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Checkers of the algebraic laws of [`Cut`] and [`Range`], shared by the
//! crate property tests and by dependants which wrap their own value types.

use crate::{BoundType, Cut, Range};
use core::{cmp::Ordering, fmt::Debug, ops::RangeBounds};

/// Checks the cut order: antisymmetry, agreement with `==`, and that
/// moving a cut right can only make it less-than fewer values.
pub fn test_cuts<T: Ord + Debug>(a: &Cut<T>, b: &Cut<T>, values: &[T]) {
    assert_eq!(a.cmp(b), b.cmp(a).reverse());
    assert_eq!(a == b, a.cmp(b) == Ordering::Equal);
    assert_eq!(a.endpoint().is_ok(), a.is_bounded());

    let (lesser, greater) = if a <= b { (a, b) } else { (b, a) };
    for value in values {
        if greater.is_less_than(value) {
            assert!(
                lesser.is_less_than(value),
                "{lesser:?} ≤ {greater:?} at {value:?}"
            );
        }
    }
}

/// Checks the laws involving a single valid `range`.
pub fn test_range<T: Ord + Clone + Debug>(range: &Range<T>, values: &[T]) {
    log::debug!("{range:?}");
    assert!(!range.is_invalid());

    let bounds = range.to_bounds().expect("valid range has std bounds");
    for value in values {
        assert_eq!(
            range.contains(value),
            RangeBounds::<T>::contains(&bounds, value),
            "{value:?}"
        );
        assert_eq!(
            range.contains(value),
            range.lower_cut().is_less_than(value) && !range.upper_cut().is_less_than(value)
        );
        if range.is_empty() {
            assert!(!range.contains(value));
        }
    }
    assert_eq!(
        range.contains_all(values),
        values.iter().all(|v| range.contains(v))
    );

    assert_eq!(range.has_lower_bound(), range.lower_endpoint().is_some());
    assert_eq!(range.has_upper_bound(), range.upper_endpoint().is_some());
    assert_eq!(
        range.has_lower_bound(),
        !range.lower_bound_type().is_unbounded()
    );
    assert_eq!(
        range.has_upper_bound(),
        !range.upper_bound_type().is_unbounded()
    );

    assert!(range.encloses(range));
    assert!(range.is_connected(range));
    assert_eq!(range.intersection(range), *range);
    assert_eq!(range.span(range), *range);
    assert_eq!(range.intersection(&Range::all()), *range);
    assert_eq!(range.span(&Range::all()), Range::all());
}

/// Checks the laws involving two valid ranges.
pub fn test_pair<T: Ord + Clone + Debug>(a: &Range<T>, b: &Range<T>, values: &[T]) {
    log::debug!("{a:?} and {b:?}");

    assert_eq!(a.is_connected(b), b.is_connected(a));
    if a.encloses(b) {
        assert!(a.is_connected(b));
        if b.encloses(a) {
            assert_eq!(a, b);
        }
    }

    let intersection = a.try_intersection(b);
    assert_eq!(intersection.is_ok(), a.is_connected(b));
    assert_eq!(a.intersection(b), b.intersection(a));
    match intersection {
        Ok(intersection) => {
            assert!(a.encloses(&intersection));
            assert!(b.encloses(&intersection));
            for value in values {
                assert_eq!(
                    intersection.contains(value),
                    a.contains(value) && b.contains(value)
                );
            }
        }
        Err(err) => {
            assert!(err.is_disconnected_ranges());
            assert!(a.intersection(b).is_invalid());
        }
    }

    let span = a.span(b);
    assert_eq!(span, b.span(a));
    assert!(span.encloses(a));
    assert!(span.encloses(b));
    for value in values {
        if a.contains(value) || b.contains(value) {
            assert!(span.contains(value));
        }
    }

    let overlapping = a.lower_cut() < b.upper_cut() && b.lower_cut() < a.upper_cut();
    let gap = a.try_gap(b);
    assert_eq!(gap.is_err(), overlapping);
    assert_eq!(a.gap(b), b.gap(a));
    match gap {
        Ok(gap) => {
            assert!(gap.is_connected(a));
            assert!(gap.is_connected(b));
            for value in values {
                if gap.contains(value) {
                    assert!(!a.contains(value) && !b.contains(value));
                }
            }
        }
        Err(err) => assert!(err.is_disconnected_ranges()),
    }
}

/// Checks the laws involving three valid ranges.
pub fn test_triple<T: Ord + Clone + Debug>(a: &Range<T>, b: &Range<T>, c: &Range<T>) {
    log::debug!("{a:?}, {b:?} and {c:?}");

    if a.encloses(b) && b.encloses(c) {
        assert!(a.encloses(c));
    }

    let left = a.try_intersection(b).and_then(|ab| ab.try_intersection(c));
    let right = b.try_intersection(c).and_then(|bc| a.try_intersection(&bc));
    assert_eq!(left.is_ok(), right.is_ok());
    if let (Ok(left), Ok(right)) = (left, right) {
        assert_eq!(left, right);
    }

    assert_eq!(a.span(b).span(c), a.span(&b.span(c)));
}

/// Checks that [`Range::new`] agrees with the named constructors.
pub fn test_new<T: Ord + Clone + Debug>(lower: T, upper: T) {
    use BoundType::*;

    let pairs = [
        (Open, Open, Range::open(lower.clone(), upper.clone())),
        (Open, Closed, Range::open_closed(lower.clone(), upper.clone())),
        (Closed, Open, Range::closed_open(lower.clone(), upper.clone())),
        (Closed, Closed, Range::closed(lower.clone(), upper.clone())),
    ];
    for (lower_type, upper_type, named) in pairs {
        let range = Range::new(lower.clone(), lower_type, upper.clone(), upper_type);
        assert_eq!(range.is_invalid(), named.is_invalid());
        assert_eq!(range, named);
        if !range.is_invalid() {
            assert_eq!(range.lower_bound_type(), lower_type);
            assert_eq!(range.upper_bound_type(), upper_type);
            assert_eq!(range.lower_endpoint(), Some(&lower));
            assert_eq!(range.upper_endpoint(), Some(&upper));
        }
    }
}
