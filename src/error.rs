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

use std::fmt::Display;
use std::fmt::Formatter;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported while reading a JSON document.
///
/// Lex errors come from malformed tokens, syntax errors from grammar
/// violations. Both carry the byte offset of the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Lex(LexErrorCode, usize),
    Syntax(ParseErrorCode, usize),
}

impl Error {
    /// The byte offset at which the input was rejected.
    pub fn position(&self) -> usize {
        match self {
            Error::Lex(_, pos) => *pos,
            Error::Syntax(_, pos) => *pos,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Lex(code, pos) => write!(f, "{}, pos {}", code, pos),
            Error::Syntax(code, pos) => write!(f, "{}, pos {}", code, pos),
        }
    }
}

impl std::error::Error for Error {}

/// A malformed token: bad escape, truncated literal, unrecognized bare word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorCode {
    UnexpectedEndOfInput,
    UnterminatedString,
    UnrecognizedToken,
    InvalidNumberValue,
    InvalidStringValue,
    InvalidEscaped(u8),
    InvalidHex(u8),
    UnexpectedEndOfHexEscape,
}

impl Display for LexErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LexErrorCode::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
            LexErrorCode::UnterminatedString => write!(f, "unterminated string"),
            LexErrorCode::UnrecognizedToken => write!(f, "unrecognized token"),
            LexErrorCode::InvalidNumberValue => write!(f, "invalid number"),
            LexErrorCode::InvalidStringValue => write!(f, "invalid string"),
            LexErrorCode::InvalidEscaped(c) => {
                write!(f, "invalid escaped character: {}", *c as char)
            }
            LexErrorCode::InvalidHex(c) => write!(f, "invalid hexadecimal: {}", *c as char),
            LexErrorCode::UnexpectedEndOfHexEscape => {
                write!(f, "unexpected end of hexadecimal escape")
            }
        }
    }
}

/// A grammar violation found while assembling tokens into a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorCode {
    InvalidEOF,
    ExpectedSomeValue,
    ExpectedColon,
    ExpectedArrayCommaOrEnd,
    ExpectedObjectCommaOrEnd,
    UnexpectedTrailingComma,
    UnexpectedTrailingCharacters,
    KeyMustBeAString,
    NestingTooDeep,
}

impl Display for ParseErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorCode::InvalidEOF => write!(f, "EOF while parsing a value"),
            ParseErrorCode::ExpectedSomeValue => write!(f, "expected value"),
            ParseErrorCode::ExpectedColon => write!(f, "expected `:`"),
            ParseErrorCode::ExpectedArrayCommaOrEnd => write!(f, "expected `,` or `]`"),
            ParseErrorCode::ExpectedObjectCommaOrEnd => write!(f, "expected `,` or `}}`"),
            ParseErrorCode::UnexpectedTrailingComma => write!(f, "trailing comma"),
            ParseErrorCode::UnexpectedTrailingCharacters => write!(f, "trailing characters"),
            ParseErrorCode::KeyMustBeAString => write!(f, "key must be a string"),
            ParseErrorCode::NestingTooDeep => write!(f, "nesting too deep"),
        }
    }
}
