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

use std::io::Write;

use goldenfile::Mint;
use jsonview::parse_value;
use jsonview::serialize_compact;
use jsonview::serialize_pretty;
use jsonview::serialize_yaml;

// For finite documents both JSON forms must be plain JSON: an external
// strict reader has to accept them and see the same document.
#[test]
fn test_output_readable_by_strict_readers() {
    let inputs = [
        r#"{"a": [-1, true, {"b": 0.5, "c": "x"}, null]}"#,
        r#"[0, -1, 0.5, 1e308, 123.45e6]"#,
        r#"{"z": 1, "a": 2, "z": 3}"#,
        "\"a\\nb\\tc\\\"d\\\\e\"",
        r#"[[[]], {}, ""]"#,
    ];
    for input in inputs {
        let value = parse_value(input.as_bytes()).unwrap();
        let reference: serde_json::Value = serde_json::from_str(input).unwrap();

        let compact = serialize_compact(&value);
        let reread: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(reread, reference, "compact, input: {}", input);

        let pretty = serialize_pretty(&value);
        let reread: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(reread, reference, "pretty, input: {}", input);
    }
}

#[test]
fn test_compact_idempotent() {
    let inputs = [
        r#"{"a": [ -1, true , {"b": 0.5}, null]}"#,
        "[NaN, Infinity, -Infinity]",
        r#"{"x": 1, "x": 2}"#,
    ];
    for input in inputs {
        let value = parse_value(input.as_bytes()).unwrap();
        let compact = serialize_compact(&value);
        let reparsed = parse_value(compact.as_bytes()).unwrap();
        assert_eq!(reparsed, value, "input: {}", input);
        assert_eq!(serialize_compact(&reparsed), compact, "input: {}", input);
    }
}

#[test]
fn test_pretty_reparses_to_same_tree() {
    let input = r#"{"a": [1, {"b": [true, null]}, []], "c": {}, "d": NaN}"#;
    let value = parse_value(input.as_bytes()).unwrap();
    let pretty = serialize_pretty(&value);
    assert_eq!(parse_value(pretty.as_bytes()).unwrap(), value);
    for line in pretty.lines() {
        assert_eq!(line.trim_end(), line);
    }
}

#[test]
fn test_serializer_goldenfiles() {
    let mut mint = Mint::new("tests/it/testdata");
    let mut file = mint.new_goldenfile("serializer.txt").unwrap();

    let inputs = [
        r#"{"a": [-1, true, null]}"#,
        "[NaN, Infinity, -Infinity]",
        r#"{"b": 1, "a": {}, "b": 2}"#,
    ];
    for input in inputs {
        let value = parse_value(input.as_bytes()).unwrap();
        writeln!(file, "---------- Input ----------").unwrap();
        writeln!(file, "{}", input).unwrap();
        writeln!(file, "---------- Compact ----------").unwrap();
        writeln!(file, "{}", serialize_compact(&value)).unwrap();
        writeln!(file, "---------- Pretty ----------").unwrap();
        writeln!(file, "{}", serialize_pretty(&value)).unwrap();
        writeln!(file, "---------- Yaml ----------").unwrap();
        // the YAML writer terminates its own last line
        write!(file, "{}", serialize_yaml(&value)).unwrap();
    }
}
