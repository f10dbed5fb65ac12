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

//! [`Range`] definition and the set algebra over it.

use crate::{
    bound::BoundType,
    cut::Cut,
    error::{RangeError, SetOperation},
};
use core::{
    borrow::Borrow,
    fmt::{self, Display, Formatter},
    ops::Bound,
};

/// A contiguous span of `T` values, described by a pair of [`Cut`]s.
///
/// Each side may be open, closed or unbounded, which gives nine shapes:
///
/// | Shape       | Notation    | Values                |
/// |-------------|-------------|-----------------------|
/// | open        | `(a..b)`    | `{x \| a < x < b}`    |
/// | closed      | `[a..b]`    | `{x \| a <= x <= b}`  |
/// | open-closed | `(a..b]`    | `{x \| a < x <= b}`   |
/// | closed-open | `[a..b)`    | `{x \| a <= x < b}`   |
/// | greater     | `(a..+∞)`   | `{x \| x > a}`        |
/// | at least    | `[a..+∞)`   | `{x \| x >= a}`       |
/// | less        | `(-∞..b)`   | `{x \| x < b}`        |
/// | at most     | `(-∞..b]`   | `{x \| x <= b}`       |
/// | all         | `(-∞..+∞)`  | `{x}`                 |
///
/// Endpoints may coincide only if at least one side is closed: `[a..a]` is
/// a singleton, `[a..a)` and `(a..a]` are empty, `(a..a)` cannot be built.
///
/// Every operation that cannot produce a range comes in two flavours: the
/// `try_*` one returns a [`RangeError`], the plain one returns the
/// [`Range::invalid`] sentinel instead. Both share the same implementation.
///
/// Equality is structural: `(1..4)` and `[2..3]` are different ranges even
/// though they hold the same integers, and so are `[3..3)` and `(3..3]`.
#[derive(Clone, Copy, Debug)]
pub struct Range<T> {
    lower: Cut<T>,
    upper: Cut<T>,
    invalid: bool,
}

impl<T> Range<T> {
    /// Returns the explicitly invalid range.
    ///
    /// It stands for "no range" where a range must be returned but none can
    /// be constructed. The sentinel has no meaningful bounds: it contains
    /// nothing, is neither empty nor connected to anything, and any set
    /// operation on it fails with [`RangeError::InvalidOperand`].
    pub const fn invalid() -> Self {
        Self {
            lower: Cut::BelowAll,
            upper: Cut::BelowAll,
            invalid: true,
        }
    }

    /// Returns whether `self` is the [`Range::invalid`] sentinel.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Lower cut of the range.
    pub fn lower_cut(&self) -> &Cut<T> {
        &self.lower
    }

    /// Upper cut of the range.
    pub fn upper_cut(&self) -> &Cut<T> {
        &self.upper
    }

    /// Decomposes the range into its lower and upper cuts.
    pub fn into_cuts(self) -> (Cut<T>, Cut<T>) {
        (self.lower, self.upper)
    }

    /// Returns `true` if the range has a lower endpoint.
    pub fn has_lower_bound(&self) -> bool {
        self.lower.is_bounded()
    }

    /// Returns `true` if the range has an upper endpoint.
    pub fn has_upper_bound(&self) -> bool {
        self.upper.is_bounded()
    }

    /// Lower endpoint, `None` if the range is unbounded below.
    pub fn lower_endpoint(&self) -> Option<&T> {
        self.try_lower_endpoint().ok()
    }

    /// Lower endpoint, [`RangeError::UnboundedSide`] if the range is unbounded below.
    pub fn try_lower_endpoint(&self) -> Result<&T, RangeError<T>> {
        self.lower.endpoint()
    }

    /// Upper endpoint, `None` if the range is unbounded above.
    pub fn upper_endpoint(&self) -> Option<&T> {
        self.try_upper_endpoint().ok()
    }

    /// Upper endpoint, [`RangeError::UnboundedSide`] if the range is unbounded above.
    pub fn try_upper_endpoint(&self) -> Result<&T, RangeError<T>> {
        self.upper.endpoint()
    }

    /// Type of the lower bound, [`BoundType::Unbounded`] if there is none.
    pub fn lower_bound_type(&self) -> BoundType {
        self.try_lower_bound_type().unwrap_or(BoundType::Unbounded)
    }

    /// Type of the lower bound, [`RangeError::UnboundedCut`] if there is none.
    pub fn try_lower_bound_type(&self) -> Result<BoundType, RangeError<T>> {
        self.lower.type_as_lower_bound()
    }

    /// Type of the upper bound, [`BoundType::Unbounded`] if there is none.
    pub fn upper_bound_type(&self) -> BoundType {
        self.try_upper_bound_type().unwrap_or(BoundType::Unbounded)
    }

    /// Type of the upper bound, [`RangeError::UnboundedCut`] if there is none.
    pub fn try_upper_bound_type(&self) -> Result<BoundType, RangeError<T>> {
        self.upper.type_as_upper_bound()
    }

    /// Std bounds of the range, e.g. to query a `BTreeMap` with it.
    /// Returns `None` for the invalid sentinel.
    pub fn to_bounds(&self) -> Option<(Bound<&T>, Bound<&T>)> {
        if self.invalid {
            return None;
        }
        Some((self.lower.as_lower_bound()?, self.upper.as_upper_bound()?))
    }
}

impl<T: Ord> Range<T> {
    /// Builds a range from two cuts.
    ///
    /// Fails with [`RangeError::InvalidConstruction`] if `lower > upper`,
    /// if `lower` is [`Cut::AboveAll`] or if `upper` is [`Cut::BelowAll`].
    pub fn try_from_cuts(lower: Cut<T>, upper: Cut<T>) -> Result<Self, RangeError<T>> {
        if lower > upper || lower.is_above_all() || upper.is_below_all() {
            log::trace!(
                "Rejected range construction from {} and {} cuts",
                lower.kind(),
                upper.kind()
            );
            return Err(RangeError::InvalidConstruction { lower, upper });
        }

        Ok(Self {
            lower,
            upper,
            invalid: false,
        })
    }

    /// Same as [`Range::try_from_cuts`], but returns [`Range::invalid`] on failure.
    pub fn from_cuts(lower: Cut<T>, upper: Cut<T>) -> Self {
        Self::try_from_cuts(lower, upper).unwrap_or_else(|_| Self::invalid())
    }

    /// Returns `true` for ranges of the form `[v..v)` or `(v..v]`.
    ///
    /// `(v..v)` is not covered, because such range cannot be constructed.
    pub fn is_empty(&self) -> bool {
        !self.invalid && self.lower == self.upper
    }

    /// Returns `true` if `value` is within the bounds of the range.
    ///
    /// For example, `[0..2)` contains `1` but not `2`.
    pub fn contains(&self, value: &T) -> bool {
        !self.invalid && self.lower.is_less_than(value) && !self.upper.is_less_than(value)
    }

    /// Returns `true` if every value in `values` is contained in the range.
    ///
    /// Holds for an empty sequence, unless the range is invalid.
    pub fn contains_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        !self.invalid
            && values
                .into_iter()
                .all(|value| self.contains(value.borrow()))
    }

    /// Returns `true` if the bounds of `other` do not extend outside the
    /// bounds of `self`.
    ///
    /// - `[3..6]` encloses `[4..5]`, `(3..6)` and the empty `[4..4)`;
    /// - `(3..6]` does not enclose `[3..6]`;
    /// - `[4..5]` does not enclose `(3..6)`, although over integers it holds
    ///   every value of the latter.
    ///
    /// Enclosure is a partial order (reflexive, antisymmetric, transitive)
    /// and implies connectedness.
    pub fn encloses(&self, other: &Self) -> bool {
        self.both_valid(other) && self.lower <= other.lower && self.upper >= other.upper
    }

    /// Returns `true` if some (possibly empty) range is enclosed by both
    /// `self` and `other`.
    ///
    /// - `[2..4)` and `[5..7)` are not connected;
    /// - `[2..4)` and `[3..5)` are connected, both enclose `[3..4)`;
    /// - `[2..4)` and `[4..6)` are connected, both enclose the empty `[4..4)`.
    ///
    /// Reflexive and symmetric, but not transitive: `[2..4)` and `[4..6)`
    /// are connected, `[4..6)` and `[6..8)` are connected, while `[2..4)`
    /// and `[6..8)` are not.
    pub fn is_connected(&self, other: &Self) -> bool {
        self.both_valid(other) && self.lower <= other.upper && other.lower <= self.upper
    }

    fn both_valid(&self, other: &Self) -> bool {
        !self.invalid && !other.invalid
    }

    fn check_operands(&self, other: &Self) -> Result<(), RangeError<T>> {
        if self.both_valid(other) {
            Ok(())
        } else {
            log::trace!("Set operation on an invalid range");
            Err(RangeError::InvalidOperand)
        }
    }
}

impl<T: Ord + Clone> Range<T> {
    /// Returns the maximal range enclosed by both `self` and `other`.
    ///
    /// For example, `[1..5]` and `(3..7)` intersect in `(3..5]`; `[1..5)` and
    /// `[5..7)` intersect in the empty `[5..5)`.
    ///
    /// The intersection exists if and only if the ranges are connected,
    /// otherwise [`RangeError::DisconnectedRanges`] is returned. The operation
    /// is commutative, associative and idempotent, with [`Range::all`] as
    /// identity.
    pub fn try_intersection(&self, other: &Self) -> Result<Self, RangeError<T>> {
        self.check_operands(other)?;

        let lower_cmp = self.lower.cmp(&other.lower);
        let upper_cmp = self.upper.cmp(&other.upper);

        if lower_cmp.is_ge() && upper_cmp.is_le() {
            return Ok(self.clone());
        }
        if lower_cmp.is_le() && upper_cmp.is_ge() {
            return Ok(other.clone());
        }

        let lower = if lower_cmp.is_ge() {
            &self.lower
        } else {
            &other.lower
        };
        let upper = if upper_cmp.is_le() {
            &self.upper
        } else {
            &other.upper
        };

        if lower > upper {
            log::trace!(
                "Intersection of disconnected ranges: {} cut above {} cut",
                lower.kind(),
                upper.kind()
            );
            return Err(RangeError::DisconnectedRanges {
                operation: SetOperation::Intersection,
                first: self.clone(),
                second: other.clone(),
            });
        }

        Self::try_from_cuts(lower.clone(), upper.clone())
    }

    /// Same as [`Range::try_intersection`], but returns [`Range::invalid`] on failure.
    pub fn intersection(&self, other: &Self) -> Self {
        self.try_intersection(other).unwrap_or_else(|_| Self::invalid())
    }

    /// Returns the maximal range lying between `self` and `other`.
    ///
    /// For example, the gap between `[1..5]` and `(7..10)` is `(5..7]`; the
    /// gap between the adjacent `[1..5)` and `[5..7)` is the empty `[5..5)`.
    ///
    /// The gap exists if and only if the intersection of the ranges is empty
    /// or undefined, otherwise [`RangeError::DisconnectedRanges`] is returned.
    /// The operation is commutative.
    pub fn try_gap(&self, other: &Self) -> Result<Self, RangeError<T>> {
        self.check_operands(other)?;

        if self.lower < other.upper && other.lower < self.upper {
            log::trace!("Gap between overlapping ranges");
            return Err(RangeError::DisconnectedRanges {
                operation: SetOperation::Gap,
                first: self.clone(),
                second: other.clone(),
            });
        }

        // Ties on the lower cut put the range with the lower upper cut first,
        // so that `a.gap(b) == b.gap(a)`.
        let self_first = (&self.lower, &self.upper) <= (&other.lower, &other.upper);
        let (first, second) = if self_first {
            (self, other)
        } else {
            (other, self)
        };

        Self::try_from_cuts(first.upper.clone(), second.lower.clone())
    }

    /// Same as [`Range::try_gap`], but returns [`Range::invalid`] on failure.
    pub fn gap(&self, other: &Self) -> Self {
        self.try_gap(other).unwrap_or_else(|_| Self::invalid())
    }

    /// Returns the minimal range enclosing both `self` and `other`.
    ///
    /// For example, the span of `[1..3]` and `(5..7)` is `[1..7)`.
    ///
    /// For connected ranges the span is their union; otherwise it also holds
    /// values contained by neither. Commutative, associative and idempotent.
    /// Fails only with [`RangeError::InvalidOperand`].
    pub fn try_span(&self, other: &Self) -> Result<Self, RangeError<T>> {
        self.check_operands(other)?;

        let lower_cmp = self.lower.cmp(&other.lower);
        let upper_cmp = self.upper.cmp(&other.upper);

        if lower_cmp.is_le() && upper_cmp.is_ge() {
            return Ok(self.clone());
        }
        if lower_cmp.is_ge() && upper_cmp.is_le() {
            return Ok(other.clone());
        }

        let lower = if lower_cmp.is_le() {
            &self.lower
        } else {
            &other.lower
        };
        let upper = if upper_cmp.is_ge() {
            &self.upper
        } else {
            &other.upper
        };

        Self::try_from_cuts(lower.clone(), upper.clone())
    }

    /// Same as [`Range::try_span`], but returns [`Range::invalid`] on failure.
    pub fn span(&self, other: &Self) -> Self {
        self.try_span(other).unwrap_or_else(|_| Self::invalid())
    }
}

impl<T: Ord> PartialEq for Range<T> {
    fn eq(&self, other: &Self) -> bool {
        self.lower == other.lower && self.upper == other.upper
    }
}

impl<T: Ord> Eq for Range<T> {}

impl<T: Display> Display for Range<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.invalid {
            return f.write_str("invalid");
        }
        write!(
            f,
            "{}..{}",
            self.lower.display_as_lower(),
            self.upper.display_as_upper()
        )
    }
}
