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

use std::borrow::Cow;

use super::constants::*;
use super::error::Error;
use super::error::LexErrorCode;
use super::error::Result;
use super::number::Number;
use super::parser::ParseMode;
use super::util::decode_string;

/// A single lexical unit together with the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token<'a> {
    pub(crate) kind: TokenKind<'a>,
    pub(crate) pos: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind<'a> {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,
    /// A string literal with all escape sequences already resolved.
    /// Borrows from the input when the literal contains no escapes.
    String(Cow<'a, str>),
    /// A numeric literal, decoded. Covers the extended non-finite
    /// keywords `NaN`, `Infinity` and `-Infinity`.
    Number(Number),
    True,
    False,
    Null,
    Eof,
}

/// Produces tokens on demand in a single forward pass over the input.
///
/// Tokens are pulled one at a time by the parser; nothing is materialized
/// beyond the token currently being scanned, so memory stays proportional
/// to the largest single token rather than the whole document.
pub(crate) struct Lexer<'a> {
    buf: &'a [u8],
    idx: usize,
    mode: ParseMode,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(buf: &'a [u8], mode: ParseMode) -> Lexer<'a> {
        Lexer { buf, idx: 0, mode }
    }

    pub(crate) fn next_token(&mut self) -> Result<Token<'a>> {
        self.skip_whitespace();
        let pos = self.idx;
        let c = match self.peek() {
            Some(c) => c,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    pos,
                })
            }
        };
        let kind = match c {
            b'{' => {
                self.step();
                TokenKind::LeftBrace
            }
            b'}' => {
                self.step();
                TokenKind::RightBrace
            }
            b'[' => {
                self.step();
                TokenKind::LeftBracket
            }
            b']' => {
                self.step();
                TokenKind::RightBracket
            }
            b':' => {
                self.step();
                TokenKind::Colon
            }
            b',' => {
                self.step();
                TokenKind::Comma
            }
            b'"' => self.scan_string()?,
            b'-' | b'0'..=b'9' => self.scan_number()?,
            c if c.is_ascii_alphabetic() => self.scan_keyword()?,
            _ => return Err(self.lex_error(LexErrorCode::UnrecognizedToken, pos)),
        };
        Ok(Token { kind, pos })
    }

    /// Offset of the first non-whitespace byte still unconsumed, if any.
    /// Used by the parser to reject content after the root value.
    pub(crate) fn rest_pos(&mut self) -> Option<usize> {
        self.skip_whitespace();
        if self.idx < self.buf.len() {
            Some(self.idx)
        } else {
            None
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.buf.get(self.idx).copied()
    }

    #[inline]
    fn step(&mut self) {
        self.idx += 1;
    }

    #[inline]
    fn step_by(&mut self, n: usize) {
        self.idx += n;
    }

    #[inline]
    fn check_next(&self, c: u8) -> bool {
        self.peek() == Some(c)
    }

    #[inline]
    fn check_next_either(&self, c1: u8, c2: u8) -> bool {
        matches!(self.peek(), Some(c) if c == c1 || c == c2)
    }

    #[inline]
    fn step_digits(&mut self) -> usize {
        let mut len = 0;
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            len += 1;
            self.step();
        }
        len
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !matches!(c, b' ' | b'\t' | b'\n' | b'\r') {
                break;
            }
            self.step();
        }
    }

    fn lex_error(&self, code: LexErrorCode, pos: usize) -> Error {
        Error::Lex(code, pos)
    }

    // Where digits were required but missing: report truncation at
    // end-of-input, a malformed number otherwise.
    fn digit_error(&self) -> Error {
        if self.idx >= self.buf.len() {
            Error::Lex(LexErrorCode::UnexpectedEndOfInput, self.idx)
        } else {
            Error::Lex(LexErrorCode::InvalidNumberValue, self.idx)
        }
    }

    /// Scan a numeric literal: optional `-`, digits, optional fraction,
    /// optional exponent. A leading minus immediately followed by
    /// `Infinity` forms the compound non-finite keyword in extended mode.
    fn scan_number(&mut self) -> Result<TokenKind<'a>> {
        let start_idx = self.idx;
        if self.check_next(b'-') {
            self.step();
            if self.check_next(b'I') {
                return self.scan_negative_infinity(start_idx);
            }
        }

        if self.step_digits() == 0 {
            return Err(self.digit_error());
        }
        if self.check_next(b'.') {
            self.step();
            if self.step_digits() == 0 {
                return Err(self.digit_error());
            }
        }
        if self.check_next_either(b'e', b'E') {
            self.step();
            if self.check_next_either(b'+', b'-') {
                self.step();
            }
            if self.step_digits() == 0 {
                return Err(self.digit_error());
            }
        }

        let s = &self.buf[start_idx..self.idx];
        match fast_float2::parse(s) {
            Ok(v) => Ok(TokenKind::Number(Number::new(v))),
            Err(_) => Err(self.lex_error(LexErrorCode::InvalidNumberValue, start_idx)),
        }
    }

    fn scan_negative_infinity(&mut self, start_idx: usize) -> Result<TokenKind<'a>> {
        if self.mode == ParseMode::Strict {
            return Err(self.lex_error(LexErrorCode::InvalidNumberValue, start_idx));
        }
        let rest = &self.buf[self.idx..];
        if rest.len() >= INFINITY_LITERAL.len()
            && &rest[..INFINITY_LITERAL.len()] == INFINITY_LITERAL.as_bytes()
        {
            self.step_by(INFINITY_LITERAL.len());
            Ok(TokenKind::Number(Number::new(f64::NEG_INFINITY)))
        } else {
            Err(self.lex_error(LexErrorCode::InvalidNumberValue, start_idx))
        }
    }

    /// Recognize bare keywords as whole words: `true`, `false`, `null`,
    /// plus `NaN` and `Infinity` in extended mode. Anything else
    /// identifier-like is rejected at its starting offset.
    fn scan_keyword(&mut self) -> Result<TokenKind<'a>> {
        let start_idx = self.idx;
        while let Some(c) = self.peek() {
            if !c.is_ascii_alphabetic() {
                break;
            }
            self.step();
        }
        let word = &self.buf[start_idx..self.idx];
        match word {
            b"true" => Ok(TokenKind::True),
            b"false" => Ok(TokenKind::False),
            b"null" => Ok(TokenKind::Null),
            _ => {
                if self.mode == ParseMode::Extended {
                    if word == NAN_LITERAL.as_bytes() {
                        return Ok(TokenKind::Number(Number::new(f64::NAN)));
                    }
                    if word == INFINITY_LITERAL.as_bytes() {
                        return Ok(TokenKind::Number(Number::new(f64::INFINITY)));
                    }
                }
                Err(self.lex_error(LexErrorCode::UnrecognizedToken, start_idx))
            }
        }
    }

    /// Scan a string literal. The first pass finds the closing quote and
    /// counts escapes; the second pass resolves escapes only when any are
    /// present, otherwise the text is borrowed as-is.
    fn scan_string(&mut self) -> Result<TokenKind<'a>> {
        // step over the opening quote
        self.step();
        let start_idx = self.idx;
        let mut escapes = 0;

        loop {
            let c = match self.peek() {
                Some(c) => c,
                None => {
                    return Err(self.lex_error(LexErrorCode::UnterminatedString, self.idx));
                }
            };
            match c {
                b'\\' => {
                    let escape_pos = self.idx;
                    self.step();
                    escapes += 1;
                    match self.peek() {
                        Some(b'u') => {
                            self.step();
                            // a short hex escape must not run past the
                            // closing quote
                            if self.buf.len() - self.idx < UNICODE_LEN {
                                return Err(self.lex_error(
                                    LexErrorCode::UnexpectedEndOfHexEscape,
                                    escape_pos,
                                ));
                            }
                            self.step_by(UNICODE_LEN);
                        }
                        Some(_) => self.step(),
                        None => {
                            return Err(
                                self.lex_error(LexErrorCode::UnterminatedString, self.idx)
                            );
                        }
                    }
                }
                b'"' => {
                    self.step();
                    break;
                }
                _ => self.step(),
            }
        }

        // the string body, quotes excluded
        let data = &self.buf[start_idx..self.idx - 1];

        let val = if escapes > 0 {
            let len = data.len() - escapes;
            let mut pos = start_idx;
            let s = decode_string(data, len, &mut pos)?;
            Cow::Owned(s)
        } else {
            std::str::from_utf8(data)
                .map(Cow::Borrowed)
                .map_err(|_| self.lex_error(LexErrorCode::InvalidStringValue, start_idx))?
        };
        Ok(TokenKind::String(val))
    }
}
