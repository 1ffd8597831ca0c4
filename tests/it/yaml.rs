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

// The YAML writer is best-effort; these cases were verified by hand
// against a YAML reader, no round-trip guarantee is implied.

use jsonview::parse_value;
use jsonview::serialize_yaml;

fn test_yaml(input: &str, expected: &str) {
    let value = parse_value(input.as_bytes()).unwrap();
    assert_eq!(serialize_yaml(&value), expected, "input: {}", input);
}

#[test]
fn test_mappings_and_sequences() {
    test_yaml(
        r#"{"a": [1, 2], "b": {"c": "d"}}"#,
        "a:\n  - 1\n  - 2\nb:\n  c: d\n",
    );
    test_yaml(
        r#"[{"a": 1}, [true], "x"]"#,
        "-\n  a: 1\n-\n  - true\n- x\n",
    );
}

#[test]
fn test_quoting() {
    // keys and values that a YAML reader would mistake for numbers
    test_yaml(r#"{"9": 9}"#, "'9': 9\n");
    test_yaml(r#"{"9": "9"}"#, "'9': '9'\n");
    // keys with spaces or colons need double quotes
    test_yaml(r#"{"a b": "c: d"}"#, "\"a b\": \"c: d\"\n");
}

#[test]
fn test_non_finite_scalars() {
    test_yaml(
        r#"{"a": NaN, "b": Infinity, "c": -Infinity}"#,
        "a: .nan\nb: .inf\nc: -.inf\n",
    );
}
