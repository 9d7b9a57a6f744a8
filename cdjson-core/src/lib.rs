//! A small reader for a JSON-like document format. The input is turned into a tree of
//! [`Value`]s which can then be inspected through typed, fail-fast accessors.
//!
//! Only a subset of JSON is understood: maps, arrays, strings and non-negative integers. Strings
//! are taken verbatim up to the next `"`; escape sequences are not decoded. There are no floats,
//! booleans or `null`. The grammar is also looser than JSON in that commas between entries are
//! optional, so trailing commas are accepted.
//!
//! Every failure is fatal for the call that hit it. A parse either produces a complete tree or an
//! [`Error`] describing the first problem found, with the [`Span`] it was found at; there is no
//! recovery and no partial result.
//!
//! ```
//! let root = cdjson_core::parse(r#"{"x": [1, 2, 3]}"#).unwrap();
//! let xs = root.map_get("x").unwrap().unwrap();
//! assert_eq!(xs.array_size().unwrap(), 3);
//! assert_eq!(xs.array_get(2).unwrap().as_integer().unwrap(), 3);
//! ```

mod dump;
mod error;
mod parser;
mod span;
mod tokenizer;
mod value;

pub use dump::Dump;
pub use error::{Error, ErrorKind};
pub use parser::{ParseOptions, Parser, DEFAULT_CONTAINER_CAPACITY, DEFAULT_MAX_DEPTH};
pub use span::Span;
pub use tokenizer::Tokenizer;
pub use value::{Array, Kind, Map, Value};

/// Parse `text` with the default [`ParseOptions`]: containers hold at most
/// [`DEFAULT_CONTAINER_CAPACITY`] entries.
pub fn parse(text: &str) -> Result<Value, Error> {
    parse_with(text, &ParseOptions::default())
}

/// Parse `text` into a new tree. Content after the first complete value is ignored.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Value, Error> {
    Parser::new(text, *options).parse()
}
