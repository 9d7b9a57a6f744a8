//! Recursive-descent parser. The grammar is LL(1): every decision is made on the next significant
//! character, and the cursor never moves backwards.
//!
//! ```text
//! value   := map | string | array | integer
//! map     := '{' ( pair (',' pair)* )? '}'
//! pair    := '"' STRINGLEXEME '"' ':' value
//! array   := '[' ( value (',' value)* )? ']'
//! string  := '"' STRINGLEXEME '"'
//! integer := DIGITRUN
//! ```
//!
//! The separator is optional inside containers, so a trailing comma before the closing bracket is
//! accepted, as are members with no comma between them.

use tracing::*;

use crate::error::{Error, ErrorKind};
use crate::tokenizer::Tokenizer;
use crate::value::{Array, Map, Value};

/// Capacity of every map and array built by the parser unless configured otherwise.
pub const DEFAULT_CONTAINER_CAPACITY: usize = 10;
/// Maximum container nesting unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Entries allowed per map or array. `None` lets containers grow without bound.
    pub container_capacity: Option<usize>,
    /// How many containers may be open at once.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            container_capacity: Some(DEFAULT_CONTAINER_CAPACITY),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Default options with growable containers.
    pub fn unbounded() -> Self {
        ParseOptions {
            container_capacity: None,
            ..Self::default()
        }
    }
}

#[derive(Debug)]
pub struct Parser<'src> {
    tokens: Tokenizer<'src>,
    options: ParseOptions,
    depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(src: &'src str, options: ParseOptions) -> Self {
        Parser {
            tokens: Tokenizer::new(src),
            options,
            depth: 0,
        }
    }

    /// Parse one value starting at the cursor. Anything after it is left unread.
    pub fn parse(mut self) -> Result<Value, Error> {
        let value = self.parse_value()?;
        if self.tokens.lookahead().is_some() {
            debug!(
                pos = self.tokens.position(),
                "ignoring trailing input after the root value"
            );
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, Error> {
        let found = self.tokens.lookahead();
        trace!(?found, pos = self.tokens.position(), "value");
        match found {
            Some('{') => self.parse_map(),
            Some('"') => self.parse_string(),
            Some('[') => self.parse_array(),
            Some(c) if c.is_ascii_digit() => self.parse_integer(),
            found => Err(Error::at(
                ErrorKind::UnexpectedValueStart { found },
                self.tokens.current_span(),
            )),
        }
    }

    fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= self.options.max_depth {
            return Err(Error::at(
                ErrorKind::DepthLimitExceeded {
                    limit: self.options.max_depth,
                },
                self.tokens.current_span(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn skip_separator(&mut self) -> Result<(), Error> {
        if self.tokens.lookahead() == Some(',') {
            self.tokens.expect_and_consume(',')?;
        }
        Ok(())
    }

    fn parse_map(&mut self) -> Result<Value, Error> {
        self.enter()?;
        self.tokens.expect_and_consume('{')?;

        let mut map = Map::bounded(self.options.container_capacity);

        while self.tokens.lookahead() != Some('}') {
            let entry_start = self.tokens.position();

            self.tokens.expect_and_consume('"')?;
            let key = self.tokens.take_string_lexeme();
            self.tokens.expect_and_consume('"')?;

            self.tokens.expect_and_consume(':')?;

            let value = self.parse_value()?;
            map.insert(key, value)
                .map_err(|e| e.or_at(self.tokens.span_from(entry_start)))?;

            self.skip_separator()?;
        }

        self.tokens.expect_and_consume('}')?;
        self.leave();

        Ok(Value::Map(map))
    }

    fn parse_array(&mut self) -> Result<Value, Error> {
        self.enter()?;
        self.tokens.expect_and_consume('[')?;

        let mut array = Array::bounded(self.options.container_capacity);

        while self.tokens.lookahead() != Some(']') {
            let element_start = self.tokens.position();

            let value = self.parse_value()?;
            array
                .push(value)
                .map_err(|e| e.or_at(self.tokens.span_from(element_start)))?;

            self.skip_separator()?;
        }

        self.tokens.expect_and_consume(']')?;
        self.leave();

        Ok(Value::Array(array))
    }

    fn parse_string(&mut self) -> Result<Value, Error> {
        self.tokens.expect_and_consume('"')?;
        let value = self.tokens.take_string_lexeme();
        self.tokens.expect_and_consume('"')?;
        Ok(Value::String(value))
    }

    fn parse_integer(&mut self) -> Result<Value, Error> {
        self.tokens.take_integer_lexeme().map(Value::Integer)
    }
}
