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

use jsonview::parse_value;
use jsonview::parse_value_standard_mode;
use jsonview::parse_value_with_limit;
use jsonview::serialize_compact;
use jsonview::Error;
use jsonview::LexErrorCode;
use jsonview::ParseMode;
use jsonview::Value;

fn test_parse_ok(input: &str, expected: &str) {
    let value = parse_value(input.as_bytes()).unwrap();
    assert_eq!(serialize_compact(&value), expected, "input: {}", input);
}

fn test_parse_err(input: &str, expected: &str) {
    let err = parse_value(input.as_bytes()).unwrap_err();
    assert_eq!(err.to_string(), expected, "input: {}", input);
}

#[test]
fn test_parse_scalars() {
    test_parse_ok("null", "null");
    test_parse_ok("  true ", "true");
    test_parse_ok("false", "false");
    test_parse_ok("0", "0");
    test_parse_ok("-1", "-1");
    test_parse_ok("123.45e6", "123450000");
    test_parse_ok("0.5", "0.5");
    test_parse_ok("1e308", "1e308");
    test_parse_ok(r#""hello""#, r#""hello""#);
    test_parse_ok(r#""""#, r#""""#);
}

#[test]
fn test_parse_containers() {
    test_parse_ok("[]", "[]");
    test_parse_ok("{}", "{}");
    test_parse_ok("[ 1 , 2 ,\t3\n]", "[1,2,3]");
    test_parse_ok(
        r#"{"a": [-1, true, {"b" :  0.5, "c": "\uae77"}, null]}"#,
        "{\"a\":[-1,true,{\"b\":0.5,\"c\":\"\u{ae77}\"},null]}",
    );
    test_parse_ok(
        r#"{"a": {"b": {"c": [[[]]]}}}"#,
        r#"{"a":{"b":{"c":[[[]]]}}}"#,
    );
}

#[test]
fn test_parse_non_finite() {
    test_parse_ok("NaN", "NaN");
    test_parse_ok("Infinity", "Infinity");
    test_parse_ok("-Infinity", "-Infinity");
    test_parse_ok("[NaN, Infinity, -Infinity]", "[NaN,Infinity,-Infinity]");
    test_parse_ok(r#"{"a": NaN}"#, r#"{"a":NaN}"#);

    // non-finite keywords are case-sensitive whole words
    test_parse_err("nan", "unrecognized token, pos 0");
    test_parse_err("INFINITY", "unrecognized token, pos 0");
    test_parse_err("Infinityy", "unrecognized token, pos 0");
    test_parse_err("-Inf", "invalid number, pos 0");
}

#[test]
fn test_parse_string_escapes() {
    test_parse_ok(r#""a\nb\tc""#, "\"a\\nb\\tc\"");
    test_parse_ok(r#""\u0041\u0042""#, r#""AB""#);
    // surrogate pair combines into one astral character
    test_parse_ok(r#""\uD834\uDD1E""#, "\"\u{1d11e}\"");
    // an unpaired surrogate survives as its literal escape text
    test_parse_ok(r#""\uD800x""#, r#""\\uD800x""#);

    match parse_value(br#""a\qb""#) {
        Err(Error::Lex(LexErrorCode::InvalidEscaped(c), _)) => assert_eq!(c, b'q'),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_member_order_and_duplicates() {
    // members stay in document order, never sorted
    test_parse_ok(r#"{"z": 1, "a": 2, "m": 3}"#, r#"{"z":1,"a":2,"m":3}"#);
    // duplicate keys are all kept
    test_parse_ok(r#"{"x": 1, "x": 2, "x": 3}"#, r#"{"x":1,"x":2,"x":3}"#);

    let value = parse_value(br#"{"x": 1, "x": 2}"#).unwrap();
    match value {
        Value::Object(ref obj) => {
            assert_eq!(obj.len(), 2);
            // lookup finds the first match
            assert_eq!(obj.get("x").and_then(|v| v.as_f64()), Some(1.0));
        }
        _ => panic!("expected object"),
    }
}

#[test]
fn test_parse_errors() {
    test_parse_err("", "EOF while parsing a value, pos 0");
    test_parse_err("[1, 2", "EOF while parsing a value, pos 5");
    test_parse_err(r#"{"a":"#, "EOF while parsing a value, pos 5");
    test_parse_err(r#"{"a""#, "expected `:`, pos 4");
    test_parse_err(r#"{"a" 1}"#, "expected `:`, pos 5");
    test_parse_err("[1 2]", "expected `,` or `]`, pos 3");
    test_parse_err(r#"{"a":1 "b":2}"#, "expected `,` or `}`, pos 7");
    test_parse_err(",1", "expected value, pos 0");
    test_parse_err("[,1]", "expected value, pos 1");

    test_parse_err("nul", "unrecognized token, pos 0");
    test_parse_err("truefalse", "unrecognized token, pos 0");
    test_parse_err("'a'", "unrecognized token, pos 0");
    test_parse_err(r#""abc"#, "unterminated string, pos 4");
    test_parse_err(r#""\u12""#, "unexpected end of hexadecimal escape, pos 1");
    test_parse_err("1.", "unexpected end of input, pos 2");
    test_parse_err("1e+", "unexpected end of input, pos 3");
    test_parse_err("-", "unexpected end of input, pos 1");
    test_parse_err("1.x", "invalid number, pos 2");
}

#[test]
fn test_trailing_commas_rejected() {
    test_parse_err("[1,]", "trailing comma, pos 3");
    test_parse_err("[1, 2, ]", "trailing comma, pos 7");
    test_parse_err(r#"{"a": 1,}"#, "trailing comma, pos 8");
    test_parse_err(r#"{"a": [1,], "b": 2}"#, "trailing comma, pos 9");
}

#[test]
fn test_unquoted_keys_rejected() {
    test_parse_err("{a: 1}", "key must be a string, pos 1");
    test_parse_err("{1: 2}", "key must be a string, pos 1");
    test_parse_err("{null: 2}", "key must be a string, pos 1");
    test_parse_err("{[]: 2}", "key must be a string, pos 1");
}

#[test]
fn test_trailing_content_rejected() {
    test_parse_err("null a", "trailing characters, pos 5");
    test_parse_err("1 2", "trailing characters, pos 2");
    test_parse_err("[1] [2]", "trailing characters, pos 4");
    test_parse_err(r#"{"a":1} x"#, "trailing characters, pos 8");
    test_parse_err("1x", "trailing characters, pos 1");

    // trailing whitespace alone is fine
    test_parse_ok("[1] \n\t ", "[1]");
}

#[test]
fn test_standard_mode() {
    // standard mode still reads ordinary documents
    let value = parse_value_standard_mode(br#"{"a": [1, 0.5, "b"]}"#).unwrap();
    assert_eq!(serialize_compact(&value), r#"{"a":[1,0.5,"b"]}"#);

    // but rejects the non-finite extensions
    let err = parse_value_standard_mode(b"NaN").unwrap_err();
    assert_eq!(err.to_string(), "unrecognized token, pos 0");
    let err = parse_value_standard_mode(b"[Infinity]").unwrap_err();
    assert_eq!(err.to_string(), "unrecognized token, pos 1");
    let err = parse_value_standard_mode(b"-Infinity").unwrap_err();
    assert_eq!(err.to_string(), "invalid number, pos 0");
}

#[test]
fn test_nesting_limit() {
    let value = parse_value_with_limit(b"[[[1]]]", ParseMode::Extended, 3).unwrap();
    assert_eq!(serialize_compact(&value), "[[[1]]]");

    let err = parse_value_with_limit(b"[[[[1]]]]", ParseMode::Extended, 3).unwrap_err();
    assert_eq!(err.to_string(), "nesting too deep, pos 3");
    assert_eq!(err.position(), 3);

    // objects count against the same limit
    let err = parse_value_with_limit(br#"{"a": {"b": [1]}}"#, ParseMode::Extended, 2).unwrap_err();
    assert_eq!(err.to_string(), "nesting too deep, pos 12");
}

#[test]
fn test_error_position() {
    let err = parse_value(b"[1,]").unwrap_err();
    assert_eq!(err.position(), 3);
    let err = parse_value(b"").unwrap_err();
    assert_eq!(err.position(), 0);
}
