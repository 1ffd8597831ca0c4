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

use super::constants::*;
use super::error::Error;
use super::error::LexErrorCode;

#[allow(clippy::zero_prefixed_literal)]
static HEX: [u8; 256] = {
    const __: u8 = 255; // not a hex digit
    [
        //   1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 0
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 1
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 2
        00, 01, 02, 03, 04, 05, 06, 07, 08, 09, __, __, __, __, __, __, // 3
        __, 10, 11, 12, 13, 14, 15, __, __, __, __, __, __, __, __, __, // 4
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 5
        __, 10, 11, 12, 13, 14, 15, __, __, __, __, __, __, __, __, __, // 6
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 7
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 8
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 9
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // A
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // B
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // C
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // D
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // E
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // F
    ]
};

/// Decode the body of a string literal that is known to contain escape
/// sequences. `len` is the expected decoded byte length, `idx` the absolute
/// offset of `data` in the source text, advanced as bytes are consumed so
/// that errors point at the offending escape.
pub(crate) fn decode_string(mut data: &[u8], len: usize, idx: &mut usize) -> Result<String, Error> {
    let mut buf = Vec::with_capacity(len);
    let mut str_buf = String::with_capacity(4);
    while !data.is_empty() {
        *idx += 1;
        let byte = data[0];
        if byte == b'\\' {
            data = &data[1..];
            data = decode_escaped(data, idx, &mut str_buf)?;
            buf.extend_from_slice(str_buf.as_bytes());
            str_buf.clear();
        } else {
            buf.push(byte);
            data = &data[1..];
        }
    }
    String::from_utf8(buf).map_err(|_| Error::Lex(LexErrorCode::InvalidStringValue, *idx))
}

fn decode_escaped<'a>(
    mut data: &'a [u8],
    idx: &mut usize,
    str_buf: &mut String,
) -> Result<&'a [u8], Error> {
    if data.is_empty() {
        return Err(Error::Lex(LexErrorCode::UnexpectedEndOfInput, *idx));
    }

    let byte = data[0];
    *idx += 1;
    data = &data[1..];
    match byte {
        b'\\' => str_buf.push(BS),
        b'"' => str_buf.push(QU),
        b'/' => str_buf.push(SD),
        b'b' => str_buf.push(BB),
        b'f' => str_buf.push(FF),
        b'n' => str_buf.push(NN),
        b'r' => str_buf.push(RR),
        b't' => str_buf.push(TT),
        b'u' => {
            let mut numbers = [0u8; UNICODE_LEN];
            data = read_hex_digits(data, idx, &mut numbers)?;
            let hex = decode_hex_escape(&numbers, idx)?;

            let c = match hex {
                0xDC00..=0xDFFF => {
                    // Low surrogate without preceding high surrogate
                    encode_invalid_unicode(&numbers, str_buf);
                    return Ok(data);
                }

                // Non-BMP characters are encoded as a sequence of two hex
                // escapes, representing UTF-16 surrogates.
                n1 @ 0xD800..=0xDBFF => {
                    // High surrogate - check for following low surrogate
                    if data.len() < 2 || data[0] != b'\\' || data[1] != b'u' {
                        encode_invalid_unicode(&numbers, str_buf);
                        return Ok(data);
                    }
                    *idx += 2;
                    data = &data[2..];

                    let mut lower_numbers = [0u8; UNICODE_LEN];
                    data = read_hex_digits(data, idx, &mut lower_numbers)?;
                    let n2 = decode_hex_escape(&lower_numbers, idx)?;
                    if !(0xDC00..=0xDFFF).contains(&n2) {
                        encode_invalid_unicode(&numbers, str_buf);
                        encode_invalid_unicode(&lower_numbers, str_buf);
                        return Ok(data);
                    }

                    #[allow(clippy::precedence)]
                    let n = (((n1 - 0xD800) as u32) << 10 | (n2 - 0xDC00) as u32) + 0x1_0000;

                    match char::from_u32(n) {
                        Some(ch) => ch,
                        None => {
                            encode_invalid_unicode(&numbers, str_buf);
                            encode_invalid_unicode(&lower_numbers, str_buf);
                            return Ok(data);
                        }
                    }
                }

                // Regular Unicode code points
                n => match char::from_u32(n as u32) {
                    Some(ch) => ch,
                    None => {
                        encode_invalid_unicode(&numbers, str_buf);
                        return Ok(data);
                    }
                },
            };
            str_buf.push(c);
        }
        other => return Err(Error::Lex(LexErrorCode::InvalidEscaped(other), *idx)),
    }
    Ok(data)
}

#[inline]
fn read_hex_digits<'a>(
    data: &'a [u8],
    idx: &mut usize,
    numbers: &mut [u8; UNICODE_LEN],
) -> Result<&'a [u8], Error> {
    if data.len() < UNICODE_LEN {
        return Err(Error::Lex(LexErrorCode::UnexpectedEndOfHexEscape, *idx));
    }
    numbers.copy_from_slice(&data[..UNICODE_LEN]);
    *idx += UNICODE_LEN;
    Ok(&data[UNICODE_LEN..])
}

// https://datatracker.ietf.org/doc/html/rfc8259#section-8.2
// RFC8259 allow invalid Unicode
#[inline]
fn encode_invalid_unicode(numbers: &[u8], str_buf: &mut String) {
    str_buf.push('\\');
    str_buf.push('u');
    for n in numbers {
        str_buf.push((*n).into());
    }
}

#[inline]
fn decode_hex_val(val: u8) -> Option<u16> {
    let n = HEX[val as usize] as u16;
    if n == 255 {
        None
    } else {
        Some(n)
    }
}

#[inline]
fn decode_hex_escape(numbers: &[u8], idx: &usize) -> Result<u16, Error> {
    let mut n = 0;
    for number in numbers {
        if let Some(hex) = decode_hex_val(*number) {
            n = (n << 4) + hex;
        } else {
            return Err(Error::Lex(LexErrorCode::InvalidHex(*number), *idx));
        }
    }
    Ok(n)
}
