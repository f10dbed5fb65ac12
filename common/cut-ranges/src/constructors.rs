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

//! Named [`Range`] constructors.
//!
//! Each constructor only picks the pair of cuts and hands it to
//! [`Range::try_from_cuts`], so validation lives in one place.

use crate::{bound::BoundType, cut::Cut, error::RangeError, range::Range};

impl<T: Ord> Range<T> {
    /// `(lower..upper)`, i.e. `{x | lower < x < upper}`.
    ///
    /// Fails if `lower >= upper`.
    pub fn try_open(lower: T, upper: T) -> Result<Self, RangeError<T>> {
        Self::try_from_cuts(Cut::AboveValue(lower), Cut::BelowValue(upper))
    }

    /// Same as [`Range::try_open`], but returns [`Range::invalid`] on failure.
    pub fn open(lower: T, upper: T) -> Self {
        Self::try_open(lower, upper).unwrap_or_else(|_| Self::invalid())
    }

    /// `[lower..upper]`, i.e. `{x | lower <= x <= upper}`.
    ///
    /// Fails if `lower > upper`.
    pub fn try_closed(lower: T, upper: T) -> Result<Self, RangeError<T>> {
        Self::try_from_cuts(Cut::BelowValue(lower), Cut::AboveValue(upper))
    }

    /// Same as [`Range::try_closed`], but returns [`Range::invalid`] on failure.
    pub fn closed(lower: T, upper: T) -> Self {
        Self::try_closed(lower, upper).unwrap_or_else(|_| Self::invalid())
    }

    /// `[lower..upper)`, i.e. `{x | lower <= x < upper}`.
    ///
    /// Fails if `lower > upper`.
    pub fn try_closed_open(lower: T, upper: T) -> Result<Self, RangeError<T>> {
        Self::try_from_cuts(Cut::BelowValue(lower), Cut::BelowValue(upper))
    }

    /// Same as [`Range::try_closed_open`], but returns [`Range::invalid`] on failure.
    pub fn closed_open(lower: T, upper: T) -> Self {
        Self::try_closed_open(lower, upper).unwrap_or_else(|_| Self::invalid())
    }

    /// `(lower..upper]`, i.e. `{x | lower < x <= upper}`.
    ///
    /// Fails if `lower > upper`.
    pub fn try_open_closed(lower: T, upper: T) -> Result<Self, RangeError<T>> {
        Self::try_from_cuts(Cut::AboveValue(lower), Cut::AboveValue(upper))
    }

    /// Same as [`Range::try_open_closed`], but returns [`Range::invalid`] on failure.
    pub fn open_closed(lower: T, upper: T) -> Self {
        Self::try_open_closed(lower, upper).unwrap_or_else(|_| Self::invalid())
    }

    /// Range from `lower` to `upper`, each side either open or closed.
    ///
    /// Fails with [`RangeError::UnexpectedBoundType`] if any side is
    /// [`BoundType::Unbounded`]: use [`Range::up_to`], [`Range::down_to`]
    /// or [`Range::all`] for those.
    pub fn try_new(
        lower: T,
        lower_type: BoundType,
        upper: T,
        upper_type: BoundType,
    ) -> Result<Self, RangeError<T>> {
        let lower = Cut::lower(lower, lower_type)?;
        let upper = Cut::upper(upper, upper_type)?;
        Self::try_from_cuts(lower, upper)
    }

    /// Same as [`Range::try_new`], but returns [`Range::invalid`] on failure.
    pub fn new(lower: T, lower_type: BoundType, upper: T, upper_type: BoundType) -> Self {
        Self::try_new(lower, lower_type, upper, upper_type).unwrap_or_else(|_| Self::invalid())
    }

    /// `(-∞..upper)`, i.e. `{x | x < upper}`.
    pub fn less_than(upper: T) -> Self {
        Self::from_cuts(Cut::BelowAll, Cut::BelowValue(upper))
    }

    /// `(-∞..upper]`, i.e. `{x | x <= upper}`.
    pub fn at_most(upper: T) -> Self {
        Self::from_cuts(Cut::BelowAll, Cut::AboveValue(upper))
    }

    /// `(lower..+∞)`, i.e. `{x | x > lower}`.
    pub fn greater_than(lower: T) -> Self {
        Self::from_cuts(Cut::AboveValue(lower), Cut::AboveAll)
    }

    /// `[lower..+∞)`, i.e. `{x | x >= lower}`.
    pub fn at_least(lower: T) -> Self {
        Self::from_cuts(Cut::BelowValue(lower), Cut::AboveAll)
    }

    /// `(-∞..+∞)`, every value of `T`.
    pub fn all() -> Self {
        Self::from_cuts(Cut::BelowAll, Cut::AboveAll)
    }

    /// `[value..value]`, the range holding only `value`.
    pub fn singleton(value: T) -> Self
    where
        T: Clone,
    {
        Self::closed(value.clone(), value)
    }

    /// No lower bound, up to `endpoint` which is either open or closed.
    ///
    /// Fails with [`RangeError::UnexpectedBoundType`] for [`BoundType::Unbounded`].
    pub fn try_up_to(endpoint: T, bound_type: BoundType) -> Result<Self, RangeError<T>> {
        Self::try_from_cuts(Cut::BelowAll, Cut::upper(endpoint, bound_type)?)
    }

    /// Same as [`Range::try_up_to`], but returns [`Range::invalid`] on failure.
    pub fn up_to(endpoint: T, bound_type: BoundType) -> Self {
        Self::try_up_to(endpoint, bound_type).unwrap_or_else(|_| Self::invalid())
    }

    /// From `endpoint`, which is either open or closed, with no upper bound.
    ///
    /// Fails with [`RangeError::UnexpectedBoundType`] for [`BoundType::Unbounded`].
    pub fn try_down_to(endpoint: T, bound_type: BoundType) -> Result<Self, RangeError<T>> {
        Self::try_from_cuts(Cut::lower(endpoint, bound_type)?, Cut::AboveAll)
    }

    /// Same as [`Range::try_down_to`], but returns [`Range::invalid`] on failure.
    pub fn down_to(endpoint: T, bound_type: BoundType) -> Self {
        Self::try_down_to(endpoint, bound_type).unwrap_or_else(|_| Self::invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_matches_named_constructors() {
        use BoundType::*;

        assert_eq!(Range::new(1, Open, 7, Open), Range::open(1, 7));
        assert_eq!(Range::new(1, Open, 7, Closed), Range::open_closed(1, 7));
        assert_eq!(Range::new(1, Closed, 7, Closed), Range::closed(1, 7));
        assert_eq!(Range::new(1, Closed, 7, Open), Range::closed_open(1, 7));

        assert!(
            Range::try_new(1, Unbounded, 7, Open)
                .unwrap_err()
                .is_unexpected_bound_type()
        );
        assert!(Range::new(1, Closed, 7, Unbounded).is_invalid());
        assert!(
            Range::try_new(7, Closed, 1, Closed)
                .unwrap_err()
                .is_invalid_construction()
        );
    }

    #[test]
    fn up_to_and_down_to() {
        assert_eq!(Range::up_to(7, BoundType::Closed), Range::at_most(7));
        assert_eq!(Range::up_to(7, BoundType::Open), Range::less_than(7));
        assert!(Range::up_to(7, BoundType::Unbounded).is_invalid());
        assert!(
            Range::try_up_to(7, BoundType::Unbounded)
                .unwrap_err()
                .is_unexpected_bound_type()
        );

        assert_eq!(Range::down_to(1, BoundType::Closed), Range::at_least(1));
        assert_eq!(Range::down_to(1, BoundType::Open), Range::greater_than(1));
        assert!(Range::down_to(1, BoundType::Unbounded).is_invalid());
        assert!(
            Range::try_down_to(1, BoundType::Unbounded)
                .unwrap_err()
                .is_unexpected_bound_type()
        );
    }

    #[test]
    fn degenerate_shapes() {
        assert!(Range::closed(3, 3).contains(&3));
        assert_eq!(Range::singleton(3), Range::closed(3, 3));
        assert!(Range::closed_open(3, 3).is_empty());
        assert!(Range::open_closed(3, 3).is_empty());

        let err = Range::try_open(3, 3).unwrap_err();
        assert!(err.is_invalid_construction());
        assert!(Range::open(3, 3).is_invalid());
        assert!(Range::open(10, 5).is_invalid());
        assert!(Range::closed(10, 5).is_invalid());
        assert!(Range::closed_open(10, 5).is_invalid());
        assert!(Range::open_closed(10, 5).is_invalid());
    }
}
