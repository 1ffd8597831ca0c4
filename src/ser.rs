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

use super::value::Value;

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Default number of spaces per nesting level for pretty output.
pub const PRETTY_INDENT: usize = 2;

/// Render a `Value` tree as the shortest JSON text this engine's own
/// reader accepts. Non-finite numbers come out as the bare keywords
/// `NaN`, `Infinity` and `-Infinity`, which strict external JSON parsers
/// will reject; everything else is strict JSON. Member and element order
/// is preserved exactly.
pub fn serialize_compact(value: &Value<'_>) -> String {
    let mut buf = String::new();
    write_compact(value, &mut buf);
    buf
}

/// Render a `Value` tree with one member or element per line, indented
/// two spaces per nesting level.
pub fn serialize_pretty(value: &Value<'_>) -> String {
    serialize_pretty_indent(value, PRETTY_INDENT)
}

/// Like `serialize_pretty` with an explicit indent unit.
pub fn serialize_pretty_indent(value: &Value<'_>, indent: usize) -> String {
    let mut buf = String::new();
    write_pretty(value, indent, 0, &mut buf);
    buf
}

pub(crate) fn write_compact(value: &Value<'_>, buf: &mut String) {
    match value {
        Value::Null => buf.push_str("null"),
        Value::Bool(v) => buf.push_str(if *v { "true" } else { "false" }),
        Value::Number(n) => n.write_to(buf),
        Value::String(s) => write_escaped_string(s, buf),
        Value::Array(values) => {
            buf.push('[');
            for (i, v) in values.iter().enumerate() {
                if i > 0 {
                    buf.push(',');
                }
                write_compact(v, buf);
            }
            buf.push(']');
        }
        Value::Object(obj) => {
            buf.push('{');
            for (i, (k, v)) in obj.iter().enumerate() {
                if i > 0 {
                    buf.push(',');
                }
                write_escaped_string(k, buf);
                buf.push(':');
                write_compact(v, buf);
            }
            buf.push('}');
        }
    }
}

fn write_pretty(value: &Value<'_>, indent: usize, depth: usize, buf: &mut String) {
    match value {
        Value::Array(values) if !values.is_empty() => {
            buf.push_str("[\n");
            for (i, v) in values.iter().enumerate() {
                if i > 0 {
                    buf.push_str(",\n");
                }
                push_indent(buf, indent, depth + 1);
                write_pretty(v, indent, depth + 1, buf);
            }
            buf.push('\n');
            push_indent(buf, indent, depth);
            buf.push(']');
        }
        Value::Object(obj) if !obj.is_empty() => {
            buf.push_str("{\n");
            for (i, (k, v)) in obj.iter().enumerate() {
                if i > 0 {
                    buf.push_str(",\n");
                }
                push_indent(buf, indent, depth + 1);
                write_escaped_string(k, buf);
                buf.push_str(": ");
                write_pretty(v, indent, depth + 1, buf);
            }
            buf.push('\n');
            push_indent(buf, indent, depth);
            buf.push('}');
        }
        // scalars and empty containers render as in compact form
        _ => write_compact(value, buf),
    }
}

#[inline]
fn push_indent(buf: &mut String, indent: usize, depth: usize) {
    for _ in 0..indent * depth {
        buf.push(' ');
    }
}

/// Escape a decoded string back into a JSON literal. Control characters,
/// `"` and `\` are escaped; everything else, non-ASCII included, is
/// emitted as literal UTF-8.
fn write_escaped_string(s: &str, buf: &mut String) {
    buf.push('"');
    for c in s.chars() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            '\u{8}' => buf.push_str("\\b"),
            '\u{c}' => buf.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let n = c as u32;
                buf.push_str("\\u00");
                buf.push(HEX_CHARS[(n >> 4) as usize] as char);
                buf.push(HEX_CHARS[(n & 0xF) as usize] as char);
            }
            c => buf.push(c),
        }
    }
    buf.push('"');
}
