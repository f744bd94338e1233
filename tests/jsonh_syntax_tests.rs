//! Scenario tests for the JSONH syntax: token streams, comments, the four
//! string forms, number literals, braceless objects, depth limits, and
//! truncated input.

use serde_jsonh::{
    find_property_value, from_str, parse_value, parse_value_with_options, tokenize,
    tokenize_with_options, Error, JsonhOptions, JsonhValue, JsonhVersion, Number, Token,
    TokenKind,
};

fn tokens(source: &str) -> Vec<Token> {
    tokenize(source).map(|result| result.unwrap()).collect()
}

fn string_value(source: &str) -> String {
    match parse_value(source).unwrap() {
        JsonhValue::String(s) => s,
        other => panic!("expected string, got {:?}", other),
    }
}

#[test]
fn test_basic_object_token_stream() {
    assert_eq!(
        tokens("{\n  \"a\": \"b\"\n}"),
        vec![
            Token::empty(TokenKind::StartObject),
            Token::new(TokenKind::PropertyName, "a"),
            Token::new(TokenKind::String, "b"),
            Token::empty(TokenKind::EndObject),
        ]
    );
}

#[test]
fn test_comment_forms() {
    let tokens = tokens("# hash\n// line\n/* block */\n/=* nestable *=/\n1");
    let comments: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Comment)
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(comments, vec![" hash", " line", " block ", " nestable "]);
}

#[test]
fn test_nestable_block_comments() {
    let input = "/* */\n/=* *=/\n/==*/=**=/*==/\n/=*/==**==/*=/\n0";
    let tokens = tokens(input);
    let comments: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Comment)
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(comments, vec![" ", " ", "/=**=/", "/==**==/"]);
    assert_eq!(
        tokens.last().unwrap(),
        &Token::new(TokenKind::Number, "0")
    );
}

#[test]
fn test_nestable_comment_is_v2_only() {
    let options = JsonhOptions::new().with_version(JsonhVersion::V1);
    let result: Vec<_> = tokenize_with_options("/=* *=/ 0", options).collect();
    assert!(result.iter().any(|t| t.is_err()));
}

#[test]
fn test_unterminated_block_comment() {
    assert!(matches!(
        parse_value("/* never closed"),
        Err(Error::UnexpectedEof { .. })
    ));
}

#[test]
fn test_lone_slash_is_an_error() {
    assert!(matches!(
        parse_value("/ 1"),
        Err(Error::UnexpectedChar { .. })
    ));
}

#[test]
fn test_quoteless_named_literal_upgrade() {
    let value = parse_value("[nulla, null b, null, @null]").unwrap();
    assert_eq!(
        value,
        JsonhValue::Array(vec![
            JsonhValue::String("nulla".to_string()),
            JsonhValue::String("null b".to_string()),
            JsonhValue::Null,
            JsonhValue::String("null".to_string()),
        ])
    );
}

#[test]
fn test_quoteless_trimming() {
    let value = parse_value("[  padded value  , second ]").unwrap();
    assert_eq!(
        value,
        JsonhValue::Array(vec![
            JsonhValue::String("padded value".to_string()),
            JsonhValue::String("second".to_string()),
        ])
    );
}

#[test]
fn test_empty_quoteless_string_is_an_error() {
    assert!(parse_value("[,]").is_err());
    assert!(parse_value("{:1}").is_err());
}

#[test]
fn test_braceless_object() {
    let value = parse_value("a: b\nc: d").unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object.get("a").and_then(|v| v.as_str()), Some("b"));
    assert_eq!(object.get("c").and_then(|v| v.as_str()), Some("d"));
}

#[test]
fn test_braceless_object_name_keeps_internal_whitespace() {
    let value = parse_value("a b: c d").unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.get("a b").and_then(|v| v.as_str()), Some("c d"));
}

#[test]
fn test_braceless_object_inside_array_is_an_error() {
    assert!(matches!(
        parse_value("[ a: b\n c: d ]"),
        Err(Error::NestedBracelessObject { .. })
    ));
}

#[test]
fn test_braceless_object_emits_synthetic_braces() {
    let kinds: Vec<TokenKind> = tokens("a: 1").iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::StartObject,
            TokenKind::PropertyName,
            TokenKind::Number,
            TokenKind::EndObject,
        ]
    );
}

#[test]
fn test_number_as_braceless_property_name() {
    let value = parse_value("1: one").unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.get("1").and_then(|v| v.as_str()), Some("one"));
}

#[test]
fn test_named_literal_property_names() {
    let value = parse_value("{null: 1, true: 2}").unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.get("null").and_then(|v| v.as_i64()), Some(1));
    assert_eq!(object.get("true").and_then(|v| v.as_i64()), Some(2));
}

#[test]
fn test_multiline_string_stripping() {
    assert_eq!(
        string_value("\"\"\"  \n  hello world\n  \"\"\""),
        "hello world"
    );
    // without the trailing newline-then-whitespace nothing is stripped
    assert_eq!(
        string_value("\"\"\"\n  hello world  \"\"\""),
        "\n  hello world  "
    );
}

#[test]
fn test_multiline_string_common_indent() {
    let value = string_value("\"\"\"\n    first\n      second\n    \"\"\"");
    assert_eq!(value, "first\n  second");
}

#[test]
fn test_multiline_string_partial_quote_runs() {
    assert_eq!(string_value("\"\"\"ab\"\"cd\"\"\""), "ab\"\"cd");
    assert_eq!(string_value("'''it''s'''"), "it''s");
}

#[test]
fn test_single_and_double_quoted_strings() {
    assert_eq!(string_value("\"hello\""), "hello");
    assert_eq!(string_value("'hello'"), "hello");
    assert_eq!(string_value("\"\""), "");
    assert_eq!(string_value("''"), "");
    assert_eq!(string_value("\" padded \""), " padded ");
}

#[test]
fn test_escape_sequences() {
    assert_eq!(string_value(r#""\\""#), "\\");
    assert_eq!(string_value(r#""\n\r\t\b\f\v""#), "\n\r\t\u{8}\u{c}\u{b}");
    assert_eq!(string_value(r#""\0\a\e""#), "\0\u{7}\u{1b}");
    assert_eq!(string_value(r#""\x41\u00e9""#), "Aé");
    assert_eq!(string_value(r#""\q""#), "q");
}

#[test]
fn test_unicode_escape_forms_agree() {
    let long_form = string_value(r#""\U0001F47D""#);
    let surrogate_pair = string_value(r#""\uD83D\uDC7D""#);
    assert_eq!(long_form, "👽");
    assert_eq!(surrogate_pair, "👽");
}

#[test]
fn test_unpaired_high_surrogate_is_an_error() {
    assert!(matches!(
        parse_value(r#""\uD83D""#),
        Err(Error::MalformedEscape { .. })
    ));
}

#[test]
fn test_wrong_hex_digit_count_is_an_error() {
    assert!(matches!(
        parse_value(r#""\u12""#),
        Err(Error::MalformedEscape { .. })
    ));
    assert!(matches!(
        parse_value(r#""\xZ1""#),
        Err(Error::MalformedEscape { .. })
    ));
}

#[test]
fn test_escaped_newline_is_removed() {
    assert_eq!(string_value("\"a\\\nb\""), "ab");
    assert_eq!(string_value("\"a\\\r\nb\""), "ab");
}

#[test]
fn test_quoteless_escapes() {
    // an escaped reserved character joins the quoteless string
    assert_eq!(string_value(r"[a\,b]"), "a,b");
    // escaping defeats the named-literal upgrade
    let value = parse_value(r"[nul\l]").unwrap();
    assert_eq!(
        value,
        JsonhValue::Array(vec![JsonhValue::String("null".to_string())])
    );
}

#[test]
fn test_verbatim_strings() {
    assert_eq!(string_value(r#"@"C:\temp""#), r"C:\temp");
    assert_eq!(string_value(r"[@a\b]"), r"a\b");
}

#[test]
fn test_verbatim_must_touch_its_string() {
    assert!(parse_value("@ null").is_err());
    assert!(parse_value("@# comment").is_err());
    assert!(parse_value("@").is_err());
}

#[test]
fn test_verbatim_is_plain_text_in_v1() {
    let options = JsonhOptions::new().with_version(JsonhVersion::V1);
    let value = parse_value_with_options("[@null]", options).unwrap();
    assert_eq!(
        value,
        JsonhValue::Array(vec![JsonhValue::String("@null".to_string())])
    );
}

#[test]
fn test_number_literals() {
    let value = parse_value("[42, -1.5, +.25, 1e-2, 0xFF, 0b101, 0o17, 1_000]").unwrap();
    let numbers: Vec<f64> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();
    assert_eq!(numbers, vec![42.0, -1.5, 0.25, 0.01, 255.0, 5.0, 15.0, 1000.0]);
}

#[test]
fn test_hex_exponent_laws() {
    assert_eq!(from_str::<i64>("0x5e3").unwrap(), 1507);
    assert_eq!(from_str::<i64>("0x5e+3").unwrap(), 5000);
    assert_eq!(from_str::<String>("0xe+2").unwrap(), "0xe+2");
}

#[test]
fn test_fractional_exponent() {
    let value: f64 = from_str("1.2e3.4").unwrap();
    assert_eq!(value.trunc(), 3014.0);
}

#[test]
fn test_malformed_numbers_become_quoteless_strings() {
    let value = parse_value("[e+2, 0xe+2, 0oe+2, 0be+2, 0x0e+, 0b0e+_1]").unwrap();
    let strings: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        strings,
        vec!["e+2", "0xe+2", "0oe+2", "0be+2", "0x0e+", "0b0e+_1"]
    );
}

#[test]
fn test_bare_dot_and_zero_e_are_strings() {
    let value = parse_value("[., -., 0e, 1_, 1._5]").unwrap();
    let strings: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(strings, vec![".", "-.", "0e", "1_", "1._5"]);
}

#[test]
fn test_number_followed_by_text_is_a_quoteless_string() {
    assert_eq!(string_value("[12 monkeys]"), "12 monkeys");
    // whitespace between is preserved as written
    assert_eq!(string_value("[12  monkeys]"), "12  monkeys");
}

#[test]
fn test_number_before_newline_stays_a_number() {
    let value = parse_value("[12\n, 13]").unwrap();
    assert_eq!(
        value,
        JsonhValue::Array(vec![
            JsonhValue::Number(Number::Float(12.0)),
            JsonhValue::Number(Number::Float(13.0)),
        ])
    );
}

#[test]
fn test_underscore_placement() {
    let value = parse_value("[100__000, 0b_100, 1_0.5_0]").unwrap();
    let numbers: Vec<f64> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();
    assert_eq!(numbers, vec![100_000.0, 4.0, 10.5]);

    // leading underscore never starts a number
    assert_eq!(string_value("[_1]"), "_1");
}

#[test]
fn test_max_depth() {
    let three_deep = "{\"a\": {\"b\": {\"c\": 1}}}";
    let options = JsonhOptions::new().with_max_depth(2);
    assert!(matches!(
        parse_value_with_options(three_deep, options),
        Err(Error::DepthExceeded { .. })
    ));

    let options = JsonhOptions::new().with_max_depth(3);
    assert!(parse_value_with_options(three_deep, options).is_ok());
}

#[test]
fn test_primitives_do_not_count_toward_depth() {
    let options = JsonhOptions::new().with_max_depth(1);
    assert!(parse_value_with_options("[1, 2, 3]", options).is_ok());
}

#[test]
fn test_incomplete_inputs() {
    let options = JsonhOptions::new().with_incomplete_inputs(true);

    let value = parse_value_with_options("[1, [2", options).unwrap();
    assert_eq!(
        value,
        JsonhValue::Array(vec![
            JsonhValue::Number(Number::Float(1.0)),
            JsonhValue::Array(vec![JsonhValue::Number(Number::Float(2.0))]),
        ])
    );

    let value = parse_value_with_options("{\"a\": 1", options).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 1);

    // a dangling `name:` is dropped with its container
    let value = parse_value_with_options("{\"a\":", options).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 0);
}

#[test]
fn test_unclosed_container_is_an_error_by_default() {
    assert!(matches!(
        parse_value("[1, 2"),
        Err(Error::UnexpectedEof { .. })
    ));
    assert!(matches!(
        parse_value("{\"a\": 1"),
        Err(Error::UnexpectedEof { .. })
    ));
}

#[test]
fn test_missing_colon_is_an_error() {
    assert!(matches!(
        parse_value("{\"a\" 1}"),
        Err(Error::UnexpectedChar { .. })
    ));
}

#[test]
fn test_single_element_mode() {
    let options = JsonhOptions::new().with_parse_single_element(true);
    assert!(matches!(
        parse_value_with_options("[1] [2]", options),
        Err(Error::ExpectedSingleElement { .. })
    ));
    // trailing comments and whitespace are fine
    assert!(parse_value_with_options("[1] # done\n  ", options).is_ok());
}

#[test]
fn test_duplicate_keys_last_write_wins() {
    let value = parse_value("{ a:1, c:2, a:3 }").unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object.get("a").and_then(|v| v.as_i64()), Some(3));
    assert_eq!(object.get("c").and_then(|v| v.as_i64()), Some(2));
}

#[test]
fn test_commas_are_optional() {
    let value = parse_value("[1 2 3]").unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);

    let value = parse_value("{a: 1 b: 2}").unwrap();
    assert_eq!(value.as_object().unwrap().len(), 2);
}

#[test]
fn test_find_property_value_skips_nested_names() {
    let jsonh = "{\n  \"a\": \"1\",\n  \"b\": {\n    \"c\": \"2\"\n  },\n  \"c\": \"3\"\n}";
    assert!(find_property_value(jsonh, "c"));
    assert!(find_property_value(jsonh, "a"));
    assert!(!find_property_value(jsonh, "d"));
    assert!(!find_property_value("[1, 2]", "a"));
}

#[test]
fn test_comments_are_allowed_everywhere() {
    let jsonh = "/* before */ { /* in */ a /* mid */ : /* value */ 1 /* after */ } // end";
    let value = parse_value(jsonh).unwrap();
    assert_eq!(
        value.as_object().unwrap().get("a").and_then(|v| v.as_i64()),
        Some(1)
    );
}

#[test]
fn test_crlf_and_unicode_newlines_end_quoteless_strings() {
    let value = parse_value("a: b\r\nc: d").unwrap();
    assert_eq!(
        value.as_object().unwrap().get("a").and_then(|v| v.as_str()),
        Some("b")
    );

    let value = parse_value("a: b\u{2028}c: d").unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.get("a").and_then(|v| v.as_str()), Some("b"));
    assert_eq!(object.get("c").and_then(|v| v.as_str()), Some("d"));
}

#[test]
fn test_token_stream_is_balanced() {
    let jsonh = "{a: [1, {b: 2}], c: {d: [[3]]}}";
    let mut depth: i64 = 0;
    for token in tokens(jsonh) {
        match token.kind {
            TokenKind::StartObject | TokenKind::StartArray => depth += 1,
            TokenKind::EndObject | TokenKind::EndArray => {
                depth -= 1;
                assert!(depth >= 0, "depth went negative");
            }
            _ => {}
        }
    }
    assert_eq!(depth, 0);
}

#[test]
fn test_property_name_is_followed_by_an_element() {
    let jsonh = "{a: /* gap */ 1, b: [2], c: {}}";
    let tokens = tokens(jsonh);
    for (index, token) in tokens.iter().enumerate() {
        if token.kind == TokenKind::PropertyName {
            let next_element = tokens[index + 1..]
                .iter()
                .find(|t| t.kind != TokenKind::Comment)
                .expect("property name must be followed by an element");
            assert!(matches!(
                next_element.kind,
                TokenKind::StartObject
                    | TokenKind::StartArray
                    | TokenKind::String
                    | TokenKind::Number
                    | TokenKind::True
                    | TokenKind::False
                    | TokenKind::Null
            ));
        }
    }
}
