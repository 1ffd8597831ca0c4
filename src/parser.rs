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

use super::constants::DEFAULT_MAX_NESTING;
use super::error::Error;
use super::error::ParseErrorCode;
use super::error::Result;
use super::lexer::Lexer;
use super::lexer::Token;
use super::lexer::TokenKind;
use super::value::Object;
use super::value::Value;

/// Which grammar the reader accepts.
///
/// `Extended` is standard JSON plus the bare non-finite numeric literals
/// `NaN`, `Infinity` and `-Infinity`. `Strict` rejects those, so that
/// documents meant for external JSON consumers can be validated as such.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    #[default]
    Extended,
    Strict,
}

/// Parse extended JSON text into a `Value` tree.
pub fn parse_value(buf: &[u8]) -> Result<Value<'_>> {
    let mut parser = Parser::new(buf, ParseMode::Extended, DEFAULT_MAX_NESTING);
    parser.parse()
}

/// Parse standard JSON text, rejecting the non-finite literal extensions.
pub fn parse_value_standard_mode(buf: &[u8]) -> Result<Value<'_>> {
    let mut parser = Parser::new(buf, ParseMode::Strict, DEFAULT_MAX_NESTING);
    parser.parse()
}

/// Parse with an explicit grammar mode and nesting limit.
pub fn parse_value_with_limit(buf: &[u8], mode: ParseMode, max_nesting: usize) -> Result<Value<'_>> {
    let mut parser = Parser::new(buf, mode, max_nesting);
    parser.parse()
}

/// Recursive-descent parser over the lexer's token stream.
///
/// One token of lookahead is enough for the grammar; `peeked` holds it.
/// Nesting depth is tracked explicitly so that adversarially deep
/// documents fail deterministically instead of exhausting the call stack.
struct Parser<'a> {
    lexer: Lexer<'a>,
    peeked: Option<Token<'a>>,
    depth: usize,
    max_nesting: usize,
}

impl<'a> Parser<'a> {
    fn new(buf: &'a [u8], mode: ParseMode, max_nesting: usize) -> Parser<'a> {
        Parser {
            lexer: Lexer::new(buf, mode),
            peeked: None,
            depth: 0,
            max_nesting,
        }
    }

    fn parse(&mut self) -> Result<Value<'a>> {
        let val = self.parse_json_value()?;
        if let Some(tok) = self.peeked.take() {
            if tok.kind != TokenKind::Eof {
                return Err(self.error(ParseErrorCode::UnexpectedTrailingCharacters, tok.pos));
            }
        }
        if let Some(pos) = self.lexer.rest_pos() {
            return Err(self.error(ParseErrorCode::UnexpectedTrailingCharacters, pos));
        }
        Ok(val)
    }

    fn parse_json_value(&mut self) -> Result<Value<'a>> {
        let tok = self.next_token()?;
        match tok.kind {
            TokenKind::Null => Ok(Value::Null),
            TokenKind::True => Ok(Value::Bool(true)),
            TokenKind::False => Ok(Value::Bool(false)),
            TokenKind::Number(n) => Ok(Value::Number(n)),
            TokenKind::String(s) => Ok(Value::String(s)),
            TokenKind::LeftBracket => self.parse_json_array(tok.pos),
            TokenKind::LeftBrace => self.parse_json_object(tok.pos),
            TokenKind::Eof => Err(self.error(ParseErrorCode::InvalidEOF, tok.pos)),
            _ => Err(self.error(ParseErrorCode::ExpectedSomeValue, tok.pos)),
        }
    }

    #[inline]
    fn next_token(&mut self) -> Result<Token<'a>> {
        match self.peeked.take() {
            Some(tok) => Ok(tok),
            None => self.lexer.next_token(),
        }
    }

    #[inline]
    fn peek_token(&mut self) -> Result<&Token<'a>> {
        if self.peeked.is_none() {
            self.peeked = Some(self.lexer.next_token()?);
        }
        match self.peeked {
            Some(ref tok) => Ok(tok),
            // filled just above
            None => unreachable!(),
        }
    }

    fn error(&self, code: ParseErrorCode, pos: usize) -> Error {
        Error::Syntax(code, pos)
    }

    fn enter_nested(&mut self, pos: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_nesting {
            return Err(self.error(ParseErrorCode::NestingTooDeep, pos));
        }
        Ok(())
    }

    fn parse_json_array(&mut self, pos: usize) -> Result<Value<'a>> {
        self.enter_nested(pos)?;

        let mut first = true;
        let mut values = Vec::new();

        loop {
            let (kind_is_end, kind_is_comma, kind_is_eof, tok_pos) = {
                let tok = self.peek_token()?;
                (
                    tok.kind == TokenKind::RightBracket,
                    tok.kind == TokenKind::Comma,
                    tok.kind == TokenKind::Eof,
                    tok.pos,
                )
            };

            if kind_is_end {
                self.next_token()?;
                break;
            }
            if kind_is_eof {
                return Err(self.error(ParseErrorCode::InvalidEOF, tok_pos));
            }

            if !first {
                if !kind_is_comma {
                    return Err(self.error(ParseErrorCode::ExpectedArrayCommaOrEnd, tok_pos));
                }
                self.next_token()?;

                // a closing bracket right after the comma is a trailing comma
                let tok = self.peek_token()?;
                if tok.kind == TokenKind::RightBracket {
                    let pos = tok.pos;
                    return Err(self.error(ParseErrorCode::UnexpectedTrailingComma, pos));
                }
            }
            first = false;

            let value = self.parse_json_value()?;
            values.push(value);
        }
        self.depth -= 1;
        Ok(Value::Array(values))
    }

    fn parse_json_object(&mut self, pos: usize) -> Result<Value<'a>> {
        self.enter_nested(pos)?;

        let mut first = true;
        let mut obj = Object::new();

        loop {
            let (kind_is_end, kind_is_comma, kind_is_eof, tok_pos) = {
                let tok = self.peek_token()?;
                (
                    tok.kind == TokenKind::RightBrace,
                    tok.kind == TokenKind::Comma,
                    tok.kind == TokenKind::Eof,
                    tok.pos,
                )
            };

            if kind_is_end {
                self.next_token()?;
                break;
            }
            if kind_is_eof {
                return Err(self.error(ParseErrorCode::InvalidEOF, tok_pos));
            }

            if !first {
                if !kind_is_comma {
                    return Err(self.error(ParseErrorCode::ExpectedObjectCommaOrEnd, tok_pos));
                }
                self.next_token()?;

                let tok = self.peek_token()?;
                if tok.kind == TokenKind::RightBrace {
                    let pos = tok.pos;
                    return Err(self.error(ParseErrorCode::UnexpectedTrailingComma, pos));
                }
            }
            first = false;

            // member keys must be string literals
            let tok = self.next_token()?;
            let key = match tok.kind {
                TokenKind::String(s) => s,
                TokenKind::Eof => return Err(self.error(ParseErrorCode::InvalidEOF, tok.pos)),
                _ => return Err(self.error(ParseErrorCode::KeyMustBeAString, tok.pos)),
            };

            let tok = self.next_token()?;
            if tok.kind != TokenKind::Colon {
                return Err(self.error(ParseErrorCode::ExpectedColon, tok.pos));
            }

            let value = self.parse_json_value()?;
            obj.insert(key, value);
        }
        self.depth -= 1;
        Ok(Value::Object(obj))
    }
}
