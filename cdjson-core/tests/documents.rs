use cdjson_core::{parse, parse_with, ErrorKind, Kind, ParseOptions, Value};
use test_case::test_case;

#[test]
fn single_member_map() {
    let root = parse(r#"{"a": 1}"#).unwrap();
    assert_eq!(root.kind(), Kind::Map);
    assert_eq!(root.map_size().unwrap(), 1);
    assert_eq!(root.map_get("a").unwrap(), Some(&Value::Integer(1)));
}

#[test]
fn array_inside_map() {
    let root = parse(r#"{"x": [1, 2, 3]}"#).unwrap();
    let xs = root.map_get("x").unwrap().unwrap();
    assert_eq!(xs.array_size().unwrap(), 3);
    assert_eq!(xs.array_get(2).unwrap(), &Value::Integer(3));
}

#[test]
fn nested_map() {
    let root = parse(r#"{"n": {"inner": "hi"}}"#).unwrap();
    let inner = root
        .map_get("n")
        .unwrap()
        .unwrap()
        .map_get("inner")
        .unwrap()
        .unwrap();
    assert_eq!(inner.as_str().unwrap(), "hi");
}

#[test]
fn missing_value_is_rejected_at_dispatch() {
    let err = parse(r#"{"a": }"#).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedValueStart { found: Some('}') });
    assert_eq!(err.span.unwrap().lo, 6);
}

#[test]
fn ten_elements_fit_but_eleven_do_not() {
    let ten = parse("[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]").unwrap();
    assert_eq!(ten.array_size().unwrap(), 10);

    let err = parse("[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]").unwrap_err();
    assert_eq!(err.kind, ErrorKind::CapacityExceeded { capacity: 10 });
}

#[test]
fn eleven_members_exceed_map_capacity() {
    let members: Vec<String> = (0..11).map(|i| format!("\"k{i}\": {i}")).collect();
    let src = format!("{{{}}}", members.join(", "));
    let err = parse(&src).unwrap_err();
    assert_eq!(err.kind, ErrorKind::CapacityExceeded { capacity: 10 });
}

#[test]
fn unbounded_containers_grow() {
    let items: Vec<String> = (0..100).map(|i| i.to_string()).collect();
    let src = format!("[{}]", items.join(","));
    let root = parse_with(&src, &ParseOptions::unbounded()).unwrap();
    assert_eq!(root.array_size().unwrap(), 100);
    assert_eq!(root.array_get(99).unwrap().as_integer().unwrap(), 99);
    assert_eq!(root.as_array().unwrap().capacity(), None);
}

#[test]
fn encounter_order_is_preserved() {
    let root = parse(
        r#"
        {
            "zeta": 1,
            "alpha": "two",
            "mid": [3, "four", {"five": 5}],
            "alpha": 6
        }
        "#,
    )
    .unwrap();

    let map = root.as_map().unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid", "alpha"]);
    assert_eq!(root.map_get("alpha").unwrap().unwrap().as_str().unwrap(), "two");

    let mid = root.map_get("mid").unwrap().unwrap().as_array().unwrap();
    let kinds: Vec<Kind> = mid.iter().map(Value::kind).collect();
    assert_eq!(kinds, [Kind::Integer, Kind::String, Kind::Map]);
}

#[test_case("[1, 2, 3,]", 3; "array")]
#[test_case(r#"{"a": 1, "b": 2,}"#, 2; "map")]
#[test_case("[ , ]", 0 => panics; "lone comma")]
fn trailing_comma_is_accepted(src: &str, len: usize) {
    let root = parse(src).unwrap();
    let size = match root.kind() {
        Kind::Array => root.array_size().unwrap(),
        Kind::Map => root.map_size().unwrap(),
        _ => unreachable!(),
    };
    assert_eq!(size, len);
}

#[test_case("", None; "empty input")]
#[test_case("-1", Some('-'); "negative integer")]
#[test_case("true", Some('t'); "boolean")]
#[test_case("null", Some('n'); "null")]
#[test_case("[1, x]", Some('x'); "bare word in array")]
#[test_case("}", Some('}'); "closing brace")]
fn unexpected_value_start(src: &str, found: Option<char>) {
    let err = parse(src).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedValueStart { found });
}

#[test_case(r#"{"a" 1}"#, ':', Some('1'); "missing colon")]
#[test_case(r#"{1: 1}"#, '"', Some('1'); "unquoted key")]
#[test_case(r#""open"#, '"', None; "unterminated string")]
#[test_case(r#"{"a": 1"#, '"', None; "unterminated map")]
fn structural_mismatch(src: &str, expected: char, found: Option<char>) {
    let err = parse(src).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Expected { expected, found });
}

#[test]
fn wrong_accessor_is_a_type_mismatch() {
    let root = parse(r#"{"a": [1]}"#).unwrap();
    let err = root.map_get("a").unwrap().unwrap().as_str().unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Kind::String,
            found: Kind::Array
        }
    );
    assert_eq!(err.to_string(), "expected string but the value is array");
}

#[test]
fn absent_key_is_not_an_error() {
    let root = parse(r#"{"a": 1}"#).unwrap();
    assert_eq!(root.map_get("b").unwrap(), None);
}

#[test]
fn index_past_end_is_rejected() {
    let root = parse("[1, 2]").unwrap();
    let err = root.array_get(2).unwrap_err();
    assert_eq!(err.kind, ErrorKind::IndexOutOfBounds { index: 2, len: 2 });
}

#[test]
fn deep_nesting_hits_the_depth_limit() {
    let src = format!("{}{}", "[".repeat(600), "]".repeat(600));
    let err = parse(&src).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DepthLimitExceeded { limit: 512 });
}

#[test]
fn deep_nesting_within_the_limit_parses_and_drops() {
    let src = format!("{}1{}", "[".repeat(500), "]".repeat(500));
    let root = parse(&src).unwrap();
    let mut value = &root;
    for _ in 0..500 {
        value = value.array_get(0).unwrap();
    }
    assert_eq!(value.as_integer().unwrap(), 1);
    drop(root);
}

#[test]
fn dump_of_parsed_document() {
    let root = parse(r#"{"a": [1, "b"], "c": {}}"#).unwrap();
    assert_eq!(
        root.dump().to_string(),
        "{ \"a\": [1, \"b\",  ],\n\"c\": {  },\n }"
    );
}
