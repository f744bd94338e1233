use serde_jsonh::{jsonh, parse_value, JsonhMap, JsonhValue, Number};

#[test]
fn test_jsonh_macro_null() {
    let value = jsonh!(null);
    assert_eq!(value, JsonhValue::Null);
}

#[test]
fn test_jsonh_macro_booleans() {
    assert_eq!(jsonh!(true), JsonhValue::Bool(true));
    assert_eq!(jsonh!(false), JsonhValue::Bool(false));
}

#[test]
fn test_jsonh_macro_numbers() {
    assert_eq!(jsonh!(42), JsonhValue::Number(Number::Float(42.0)));
    assert_eq!(jsonh!(3.5), JsonhValue::Number(Number::Float(3.5)));
    assert_eq!(jsonh!(-123), JsonhValue::Number(Number::Float(-123.0)));
}

#[test]
fn test_jsonh_macro_strings() {
    assert_eq!(jsonh!("hello"), JsonhValue::String("hello".to_string()));
    assert_eq!(jsonh!(""), JsonhValue::String(String::new()));
}

#[test]
fn test_jsonh_macro_arrays() {
    assert_eq!(jsonh!([]), JsonhValue::Array(vec![]));

    let arr = jsonh!([1, "two", null]);
    match arr {
        JsonhValue::Array(items) => {
            assert_eq!(items.len(), 3);
            assert_eq!(items[0], JsonhValue::Number(Number::Float(1.0)));
            assert_eq!(items[1], JsonhValue::String("two".to_string()));
            assert_eq!(items[2], JsonhValue::Null);
        }
        _ => panic!("Expected array"),
    }
}

#[test]
fn test_jsonh_macro_objects() {
    assert_eq!(jsonh!({}), JsonhValue::Object(JsonhMap::new()));

    let obj = jsonh!({
        "name": "Ada",
        "scores": [1, 2, 3],
        "meta": { "draft": true }
    });
    let map = obj.as_object().unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Ada"));
    assert_eq!(
        map.get("scores").and_then(|v| v.as_array()).map(|s| s.len()),
        Some(3)
    );
}

#[test]
fn test_macro_matches_parser_output() {
    let built = jsonh!({
        "a": 1,
        "b": [true, null],
        "c": "text"
    });
    let parsed = parse_value("a: 1\nb: [true, null]\nc: text").unwrap();
    assert_eq!(built, parsed);
}
