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

//! SCALE codec and serde support for [`Range`].
//!
//! A range is encoded as its pair of cuts. The [`Range::invalid`] sentinel
//! is encoded as `(BelowAll, BelowAll)` and decodes back to the sentinel;
//! any other pair must form a valid range, otherwise decoding fails.

use crate::{cut::Cut, range::Range};

const INVALID_CUTS: &str = "invalid range cuts";

fn from_encoded_cuts<T: Ord>(lower: Cut<T>, upper: Cut<T>) -> Option<Range<T>> {
    if lower.is_below_all() && upper.is_below_all() {
        return Some(Range::invalid());
    }

    Range::try_from_cuts(lower, upper).ok()
}

#[cfg(feature = "codec")]
mod codec {
    use super::*;
    use parity_scale_codec::{Decode, Encode, Error, Input, Output};
    use scale_info::{Path, Type, TypeInfo, build::Fields, type_params};

    impl<T: Encode> Encode for Range<T> {
        fn size_hint(&self) -> usize {
            self.lower_cut().size_hint() + self.upper_cut().size_hint()
        }

        fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
            self.lower_cut().encode_to(dest);
            self.upper_cut().encode_to(dest);
        }
    }

    impl<T: Decode + Ord> Decode for Range<T> {
        fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
            let lower = Cut::decode(input)?;
            let upper = Cut::decode(input)?;
            from_encoded_cuts(lower, upper).ok_or_else(|| Error::from(INVALID_CUTS))
        }
    }

    impl<T: TypeInfo + 'static> TypeInfo for Range<T> {
        type Identity = Self;

        fn type_info() -> Type {
            Type::builder()
                .path(Path::new("Range", module_path!()))
                .type_params(type_params!(T))
                .composite(
                    Fields::named()
                        .field(|f| f.ty::<Cut<T>>().name("lower").type_name("Cut<T>"))
                        .field(|f| f.ty::<Cut<T>>().name("upper").type_name("Cut<T>")),
                )
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

    impl<T: Serialize> Serialize for Range<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            (self.lower_cut(), self.upper_cut()).serialize(serializer)
        }
    }

    impl<'de, T: Deserialize<'de> + Ord> Deserialize<'de> for Range<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let (lower, upper) = <(Cut<T>, Cut<T>)>::deserialize(deserializer)?;
            from_encoded_cuts(lower, upper).ok_or_else(|| D::Error::custom(INVALID_CUTS))
        }
    }
}
