#[macro_export]
macro_rules! jsonh {
    // Handle null
    (null) => {
        $crate::JsonhValue::Null
    };

    // Handle true
    (true) => {
        $crate::JsonhValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::JsonhValue::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::JsonhValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::JsonhValue::Array(vec![$($crate::jsonh!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::JsonhValue::Object($crate::JsonhMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonhMap::new();
        $(
            object.insert($key.to_string(), $crate::jsonh!($value));
        )*
        $crate::JsonhValue::Object(object)
    }};

    // Fallback for any other expression
    ($other:expr) => {
        $crate::JsonhValue::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{JsonhMap, JsonhValue, Number};

    #[test]
    fn test_jsonh_macro_primitives() {
        assert_eq!(jsonh!(null), JsonhValue::Null);
        assert_eq!(jsonh!(true), JsonhValue::Bool(true));
        assert_eq!(jsonh!(false), JsonhValue::Bool(false));
        assert_eq!(jsonh!(42), JsonhValue::Number(Number::Float(42.0)));
        assert_eq!(jsonh!(3.5), JsonhValue::Number(Number::Float(3.5)));
        assert_eq!(jsonh!("hello"), JsonhValue::String("hello".to_string()));
    }

    #[test]
    fn test_jsonh_macro_arrays() {
        assert_eq!(jsonh!([]), JsonhValue::Array(vec![]));

        let arr = jsonh!([1, 2, 3]);
        match arr {
            JsonhValue::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], JsonhValue::Number(Number::Float(1.0)));
                assert_eq!(vec[2], JsonhValue::Number(Number::Float(3.0)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_jsonh_macro_objects() {
        assert_eq!(jsonh!({}), JsonhValue::Object(JsonhMap::new()));

        let obj = jsonh!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            JsonhValue::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(
                    map.get("name"),
                    Some(&JsonhValue::String("Alice".to_string()))
                );
                assert_eq!(
                    map.get("age"),
                    Some(&JsonhValue::Number(Number::Float(30.0)))
                );
            }
            _ => panic!("Expected object"),
        }
    }
}
