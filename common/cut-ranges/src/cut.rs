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

//! [`Cut`] definition: the boundary token every [`Range`](crate::Range) is made of.

use crate::{bound::BoundType, error::RangeError};
use alloc::{format, string::String};
use core::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    ops::Bound,
};
#[cfg(feature = "codec")]
use parity_scale_codec::{Decode, Encode};
#[cfg(feature = "codec")]
use scale_info::TypeInfo;

/// A unique way of cutting the line of `T` values into two parts.
///
/// A cut lies either between all values and negative infinity, between all
/// values and positive infinity, right below some value or right above it.
/// A range is then nothing more than a pair of cuts: the values lying right
/// of the lower cut and left of the upper one.
///
/// Cuts are totally ordered (see [`Ord`] impl):
/// - [`Cut::BelowAll`] is the unique minimum, [`Cut::AboveAll`] the unique maximum;
/// - value cuts are ordered by their endpoints;
/// - for the same endpoint `v`, `BelowValue(v) < AboveValue(v)`.
///
/// The last rule is what makes open and closed sides fall out of plain cut
/// comparison: `[1..` starts before `(1..`, and `..1)` ends before `..1]`.
#[derive(Debug, Clone, Copy, derive_more::IsVariant)]
#[cfg_attr(feature = "codec", derive(Encode, Decode, TypeInfo))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cut<T> {
    /// Below every value, `-∞`. Valid only as a lower cut.
    BelowAll,
    /// Above every value, `+∞`. Valid only as an upper cut.
    AboveAll,
    /// Right below the value: closed lower bound `[v` or open upper bound `v)`.
    BelowValue(T),
    /// Right above the value: open lower bound `(v` or closed upper bound `v]`.
    AboveValue(T),
}

impl<T> Cut<T> {
    /// Returns the endpoint value of the cut.
    ///
    /// Returns [`RangeError::UnboundedSide`] for [`Cut::BelowAll`] and [`Cut::AboveAll`].
    pub fn endpoint(&self) -> Result<&T, RangeError<T>> {
        match self {
            Self::BelowValue(value) | Self::AboveValue(value) => Ok(value),
            Self::BelowAll | Self::AboveAll => Err(RangeError::UnboundedSide),
        }
    }

    /// Returns the endpoint value of the cut, consuming it.
    pub fn into_endpoint(self) -> Option<T> {
        match self {
            Self::BelowValue(value) | Self::AboveValue(value) => Some(value),
            Self::BelowAll | Self::AboveAll => None,
        }
    }

    /// Returns `true` if the cut has an endpoint value.
    pub fn is_bounded(&self) -> bool {
        match self {
            Self::BelowValue(_) | Self::AboveValue(_) => true,
            Self::BelowAll | Self::AboveAll => false,
        }
    }

    /// Bound type of the cut when it is used as the lower side of a range.
    ///
    /// Returns [`RangeError::UnboundedCut`] for [`Cut::BelowAll`] and [`Cut::AboveAll`].
    pub fn type_as_lower_bound(&self) -> Result<BoundType, RangeError<T>> {
        match self {
            Self::BelowValue(_) => Ok(BoundType::Closed),
            Self::AboveValue(_) => Ok(BoundType::Open),
            Self::BelowAll | Self::AboveAll => Err(RangeError::UnboundedCut),
        }
    }

    /// Bound type of the cut when it is used as the upper side of a range.
    ///
    /// Returns [`RangeError::UnboundedCut`] for [`Cut::BelowAll`] and [`Cut::AboveAll`].
    pub fn type_as_upper_bound(&self) -> Result<BoundType, RangeError<T>> {
        match self {
            Self::BelowValue(_) => Ok(BoundType::Open),
            Self::AboveValue(_) => Ok(BoundType::Closed),
            Self::BelowAll | Self::AboveAll => Err(RangeError::UnboundedCut),
        }
    }

    /// Makes the lower cut for `value` with the given bound type.
    ///
    /// Returns [`RangeError::UnexpectedBoundType`] for [`BoundType::Unbounded`],
    /// because an unbounded side has no place for `value`.
    pub fn lower(value: T, bound_type: BoundType) -> Result<Self, RangeError<T>> {
        match bound_type {
            BoundType::Closed => Ok(Self::BelowValue(value)),
            BoundType::Open => Ok(Self::AboveValue(value)),
            BoundType::Unbounded => Err(RangeError::UnexpectedBoundType),
        }
    }

    /// Makes the upper cut for `value` with the given bound type.
    ///
    /// Returns [`RangeError::UnexpectedBoundType`] for [`BoundType::Unbounded`].
    pub fn upper(value: T, bound_type: BoundType) -> Result<Self, RangeError<T>> {
        match bound_type {
            BoundType::Closed => Ok(Self::AboveValue(value)),
            BoundType::Open => Ok(Self::BelowValue(value)),
            BoundType::Unbounded => Err(RangeError::UnexpectedBoundType),
        }
    }

    /// The cut as the start of a std range, `None` if it cannot be a lower cut.
    pub fn as_lower_bound(&self) -> Option<Bound<&T>> {
        match self {
            Self::BelowAll => Some(Bound::Unbounded),
            Self::BelowValue(value) => Some(Bound::Included(value)),
            Self::AboveValue(value) => Some(Bound::Excluded(value)),
            Self::AboveAll => None,
        }
    }

    /// The cut as the end of a std range, `None` if it cannot be an upper cut.
    pub fn as_upper_bound(&self) -> Option<Bound<&T>> {
        match self {
            Self::AboveAll => Some(Bound::Unbounded),
            Self::BelowValue(value) => Some(Bound::Excluded(value)),
            Self::AboveValue(value) => Some(Bound::Included(value)),
            Self::BelowAll => None,
        }
    }

    /// Short variant name, used in log records where `T` may not be printable.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::BelowAll => "BelowAll",
            Self::AboveAll => "AboveAll",
            Self::BelowValue(_) => "BelowValue",
            Self::AboveValue(_) => "AboveValue",
        }
    }

    pub(crate) fn display_as_lower(&self) -> AsLowerBound<'_, T> {
        AsLowerBound(self)
    }

    pub(crate) fn display_as_upper(&self) -> AsUpperBound<'_, T> {
        AsUpperBound(self)
    }
}

impl<T: Ord> Cut<T> {
    /// Returns `true` if the cut lies strictly left of `value`.
    ///
    /// Note the asymmetry: `BelowValue(v)` is left of `v` itself, while
    /// `AboveValue(v)` is not.
    pub fn is_less_than(&self, value: &T) -> bool {
        match self {
            Self::BelowAll => true,
            Self::AboveAll => false,
            Self::BelowValue(endpoint) => endpoint <= value,
            Self::AboveValue(endpoint) => endpoint < value,
        }
    }
}

impl<T: Display> Cut<T> {
    /// Bracket notation of the cut used as a lower bound: `[v`, `(v` or `(-∞`.
    ///
    /// Returns an empty string for [`Cut::AboveAll`], which never starts a range.
    pub fn describe_as_lower_bound(&self) -> String {
        format!("{}", self.display_as_lower())
    }

    /// Bracket notation of the cut used as an upper bound: `v)`, `v]` or `+∞)`.
    ///
    /// Returns an empty string for [`Cut::BelowAll`], which never ends a range.
    pub fn describe_as_upper_bound(&self) -> String {
        format!("{}", self.display_as_upper())
    }
}

impl<T: Ord> Ord for Cut<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::BelowAll, Self::BelowAll) | (Self::AboveAll, Self::AboveAll) => Ordering::Equal,
            (Self::BelowAll, _) | (_, Self::AboveAll) => Ordering::Less,
            (Self::AboveAll, _) | (_, Self::BelowAll) => Ordering::Greater,
            (Self::BelowValue(a), Self::BelowValue(b))
            | (Self::AboveValue(a), Self::AboveValue(b)) => a.cmp(b),
            (Self::BelowValue(a), Self::AboveValue(b)) => a.cmp(b).then(Ordering::Less),
            (Self::AboveValue(a), Self::BelowValue(b)) => a.cmp(b).then(Ordering::Greater),
        }
    }
}

impl<T: Ord> PartialOrd for Cut<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> PartialEq for Cut<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl<T: Ord> Eq for Cut<T> {}

/// [`Display`] adapter rendering a cut as a lower bound.
pub(crate) struct AsLowerBound<'a, T>(&'a Cut<T>);

impl<T: Display> Display for AsLowerBound<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Cut::BelowAll => f.write_str("(-∞"),
            Cut::BelowValue(value) => write!(f, "[{value}"),
            Cut::AboveValue(value) => write!(f, "({value}"),
            Cut::AboveAll => Ok(()),
        }
    }
}

/// [`Display`] adapter rendering a cut as an upper bound.
pub(crate) struct AsUpperBound<'a, T>(&'a Cut<T>);

impl<T: Display> Display for AsUpperBound<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Cut::AboveAll => f.write_str("+∞)"),
            Cut::BelowValue(value) => write!(f, "{value})"),
            Cut::AboveValue(value) => write!(f, "{value}]"),
            Cut::BelowAll => Ok(()),
        }
    }
}
