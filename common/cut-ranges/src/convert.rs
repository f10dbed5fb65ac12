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

//! Conversions between [`Range`] and the `core::ops` range types.

use crate::{cut::Cut, error::RangeError, range::Range};
use core::ops::{self, Bound, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

impl<T: Ord> From<RangeFull> for Range<T> {
    fn from(_: RangeFull) -> Self {
        Self::all()
    }
}

impl<T: Ord> From<RangeFrom<T>> for Range<T> {
    fn from(range: RangeFrom<T>) -> Self {
        Self::at_least(range.start)
    }
}

impl<T: Ord> From<RangeTo<T>> for Range<T> {
    fn from(range: RangeTo<T>) -> Self {
        Self::less_than(range.end)
    }
}

impl<T: Ord> From<RangeToInclusive<T>> for Range<T> {
    fn from(range: RangeToInclusive<T>) -> Self {
        Self::at_most(range.end)
    }
}

impl<T: Ord> TryFrom<ops::Range<T>> for Range<T> {
    type Error = RangeError<T>;

    fn try_from(range: ops::Range<T>) -> Result<Self, Self::Error> {
        Self::try_closed_open(range.start, range.end)
    }
}

impl<T: Ord> TryFrom<RangeInclusive<T>> for Range<T> {
    type Error = RangeError<T>;

    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        Self::try_closed(start, end)
    }
}

impl<T: Ord> TryFrom<(Bound<T>, Bound<T>)> for Range<T> {
    type Error = RangeError<T>;

    fn try_from((start, end): (Bound<T>, Bound<T>)) -> Result<Self, Self::Error> {
        let lower = match start {
            Bound::Included(value) => Cut::BelowValue(value),
            Bound::Excluded(value) => Cut::AboveValue(value),
            Bound::Unbounded => Cut::BelowAll,
        };
        let upper = match end {
            Bound::Included(value) => Cut::AboveValue(value),
            Bound::Excluded(value) => Cut::BelowValue(value),
            Bound::Unbounded => Cut::AboveAll,
        };
        Self::try_from_cuts(lower, upper)
    }
}
