//! Human-readable rendering of a tree, for inspection only. Strings are written verbatim and every
//! entry is followed by a separator, so the output is generally not valid JSON.

use std::fmt;

use crate::value::Value;

/// [`fmt::Display`] adapter returned by [`Value::dump`].
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a> {
    value: &'a Value,
}

impl<'a> Dump<'a> {
    pub(crate) fn new(value: &'a Value) -> Self {
        Dump { value }
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Map(map) => {
            f.write_str("{ ")?;
            for (key, value) in map.iter() {
                write!(f, "\"{key}\": ")?;
                write_value(f, value)?;
                f.write_str(",\n")?;
            }
            f.write_str(" }")
        }
        Value::Array(array) => {
            f.write_str("[")?;
            for value in array {
                write_value(f, value)?;
                f.write_str(", ")?;
            }
            f.write_str(" ]")
        }
        Value::String(s) => write!(f, "\"{s}\""),
        Value::Integer(i) => write!(f, "{i}"),
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.value)
    }
}

#[cfg(test)]
mod tests {
    use crate::value::{Array, Map, Value};

    #[test]
    fn scalars() {
        assert_eq!(Value::Integer(42).dump().to_string(), "42");
        assert_eq!(Value::from("hi").dump().to_string(), "\"hi\"");
    }

    #[test]
    fn empty_containers() {
        assert_eq!(Value::from(Map::new()).dump().to_string(), "{  }");
        assert_eq!(Value::from(Array::new()).dump().to_string(), "[ ]");
    }

    #[test]
    fn nested() {
        let mut array = Array::new();
        array.push(Value::Integer(1)).unwrap();
        array.push("b".into()).unwrap();
        let mut map = Map::new();
        map.insert("xs", array.into()).unwrap();
        map.insert("n", Value::Integer(3)).unwrap();

        assert_eq!(
            Value::from(map).dump().to_string(),
            "{ \"xs\": [1, \"b\",  ],\n\"n\": 3,\n }"
        );
    }
}
