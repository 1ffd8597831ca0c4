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

//! `jsonview` reads JSON text into an in-memory value tree and writes it
//! back out as compact JSON, pretty-printed JSON or best-effort YAML.
//!
//! The reader accepts an extended grammar: on top of standard JSON it
//! understands the bare numeric literals `NaN`, `Infinity` and
//! `-Infinity`. Objects keep their members in document order and keep
//! duplicate keys, so a document round-trips through
//! [`parse_value`] and [`serialize_compact`] byte-for-byte up to
//! whitespace and escape normalization.
//!
//! ```
//! use jsonview::{parse_value, serialize_compact};
//!
//! let value = parse_value(br#"{"b": 1, "a": [NaN, "\uae77"]}"#).unwrap();
//! assert_eq!(serialize_compact(&value), "{\"b\":1,\"a\":[NaN,\"\u{ae77}\"]}");
//! ```

#![allow(clippy::uninlined_format_args)]

mod constants;
mod error;
mod lexer;
mod number;
mod parser;
mod ser;
mod util;
mod value;
mod yaml;

pub use constants::DEFAULT_MAX_NESTING;
pub use error::Error;
pub use error::LexErrorCode;
pub use error::ParseErrorCode;
pub use error::Result;
pub use number::Number;
pub use parser::parse_value;
pub use parser::parse_value_standard_mode;
pub use parser::parse_value_with_limit;
pub use parser::ParseMode;
pub use ser::serialize_compact;
pub use ser::serialize_pretty;
pub use ser::serialize_pretty_indent;
pub use ser::PRETTY_INDENT;
pub use value::Object;
pub use value::Value;
pub use yaml::serialize_yaml;
pub use yaml::serialize_yaml_indent;
pub use yaml::YAML_INDENT;
