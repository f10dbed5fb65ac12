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

//! Interval algebra over any totally ordered type.
//!
//! A [`Range`] is a contiguous span of values of some [`Ord`] type, for
//! example "integers from 1 to 100 inclusive". Each side of a range is open,
//! closed or unbounded, which gives nine shapes from `(a..b)` to `(-∞..+∞)`.
//!
//! Internally a range is a pair of [`Cut`]s, and every query and set
//! operation ([`Range::contains`], [`Range::encloses`],
//! [`Range::is_connected`], [`Range::intersection`], [`Range::gap`],
//! [`Range::span`]) reduces to comparing cuts, so open, closed, empty and
//! unbounded sides never need special cases.
//!
//! ```
//! use cut_ranges::Range;
//!
//! let range = Range::closed(1, 10);
//! assert!(range.contains(&1) && range.contains(&10));
//! assert_eq!(range.intersection(&Range::open(0, 20)), range);
//! assert_eq!(Range::less_than(2).gap(&Range::open(4, 8)), Range::closed(2, 4));
//! assert_eq!(Range::closed_open(4, 4).to_string(), "[4..4)");
//! assert!(Range::open(3, 3).is_invalid());
//! ```
//!
//! Fallible operations come in pairs: `try_*` returns a [`RangeError`],
//! while the plain variant returns the [`Range::invalid`] sentinel.
//!
//! Value types should be immutable, and their [`Ord`] must be consistent
//! with [`Eq`]: "equal" throughout this crate means `cmp` returns `Equal`.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

mod bound;
mod constructors;
mod convert;
mod cut;
#[cfg(any(feature = "codec", feature = "serde"))]
mod encoding;
mod error;
mod range;

#[cfg(any(feature = "mock", test))]
pub mod mock;


pub use bound::BoundType;
pub use cut::Cut;
pub use error::{RangeError, SetOperation};
pub use range::Range;
