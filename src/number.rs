// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

use ordered_float::OrderedFloat;

use super::constants::*;

/// A JSON number, stored as its decoded double-precision magnitude.
///
/// The non-finite extensions `NaN`, `Infinity` and `-Infinity` are
/// first-class values here; they render back as the same bare keywords.
/// Two numerically equal literals with different spellings (`1.0` vs `1e0`)
/// compare equal because only the decoded value is kept.
#[derive(Clone, Copy, Default)]
pub struct Number(f64);

impl Number {
    pub fn new(v: f64) -> Number {
        Number(v)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    pub fn is_infinite(&self) -> bool {
        self.0.is_infinite()
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// True if the value is finite, integral and small enough that an i64
    /// holds it exactly. Such values print without a fractional part.
    pub(crate) fn as_exact_i64(&self) -> Option<i64> {
        if self.0.is_finite() && self.0.trunc() == self.0 && self.0.abs() < MAX_SAFE_INTEGER {
            Some(self.0 as i64)
        } else {
            None
        }
    }

    /// Append the textual form to `buf`: bare keywords for non-finite
    /// values, integer form for exactly-representable integral values,
    /// shortest round-trip float form otherwise.
    pub(crate) fn write_to(&self, buf: &mut String) {
        if self.0.is_nan() {
            buf.push_str(NAN_LITERAL);
        } else if self.0.is_infinite() {
            if self.0 < 0.0 {
                buf.push_str(NEG_INFINITY_LITERAL);
            } else {
                buf.push_str(INFINITY_LITERAL);
            }
        } else if let Some(v) = self.as_exact_i64() {
            let mut buffer = itoa::Buffer::new();
            buf.push_str(buffer.format(v));
        } else {
            let mut buffer = ryu::Buffer::new();
            buf.push_str(buffer.format(self.0));
        }
    }

    // NaN equals NaN and -0.0 equals 0.0, so that a parsed document always
    // equals its re-serialized reading.
    fn normalized(&self) -> OrderedFloat<f64> {
        if self.0 == 0.0 {
            OrderedFloat(0.0)
        } else {
            OrderedFloat(self.0)
        }
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Number {
        Number(v)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Number {
        Number(v as f64)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized().cmp(&other.normalized())
    }
}

impl Debug for Number {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.debug_tuple("Number").field(&self.0).finish()
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut buf = String::new();
        self.write_to(&mut buf);
        f.write_str(&buf)
    }
}
