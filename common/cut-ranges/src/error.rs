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

//! [`RangeError`] and related definitions.

use crate::{cut::Cut, range::Range};
use core::fmt::{Debug, Display};

/// Set operation which has a geometric precondition on its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SetOperation {
    /// Requires connected operands.
    #[display("intersection")]
    Intersection,
    /// Requires operands with an empty intersection.
    #[display("gap")]
    Gap,
}

impl SetOperation {
    /// How the operands of a failed operation relate to each other.
    pub fn violation(&self) -> &'static str {
        match self {
            Self::Intersection => "disconnected",
            Self::Gap => "overlapping",
        }
    }
}

/// Errors returned by the error-reporting (`try_*`) half of the API.
///
/// Every fallible operation also has a panic-free twin, which collapses
/// the error into [`Range::invalid`].
#[derive(Debug, Clone, derive_more::Display, derive_more::IsVariant)]
#[display(bound(T: Display))]
pub enum RangeError<T> {
    /// Endpoint value of an unbounded side was requested.
    #[display("range unbounded on this side")]
    UnboundedSide,
    /// Bound type of an unbounded side was requested.
    #[display("unbounded cut")]
    UnboundedCut,
    /// The cuts do not describe a range: lower cut is above the upper one,
    /// or an infinite cut is placed on the wrong side.
    #[display("invalid range: {}..{}", lower.display_as_lower(), upper.display_as_upper())]
    #[display(bound(T: Display))]
    InvalidConstruction {
        /// Rejected lower cut.
        lower: Cut<T>,
        /// Rejected upper cut.
        upper: Cut<T>,
    },
    /// Operands do not satisfy the precondition of `operation`:
    /// disconnected for an intersection, overlapping for a gap.
    #[display("{operation} is undefined for {} ranges {first} and {second}", operation.violation())]
    DisconnectedRanges {
        /// Failed operation.
        operation: SetOperation,
        /// Left operand.
        first: Range<T>,
        /// Right operand.
        second: Range<T>,
    },
    /// [`BoundType::Unbounded`](crate::BoundType::Unbounded) was given where
    /// an endpoint is going to be placed.
    #[display("unexpected bound type")]
    UnexpectedBoundType,
    /// One of the operands is the [`Range::invalid`] sentinel.
    #[display("operation on an invalid range")]
    InvalidOperand,
}

impl<T: Debug + Display> core::error::Error for RangeError<T> {}
