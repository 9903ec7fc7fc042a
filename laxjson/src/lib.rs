//! Parser for a relaxed JSON dialect. Plain JSON, plus the small comforts
//! hand-written documents tend to accumulate.
//!
//! On top of standard JSON the dialect accepts:
//!
//! - `//` comments, running to the end of the line;
//! - a trailing comma after the last item of an array or object;
//! - bare `[a-zA-Z_]+` words as strings, both as values and as object keys;
//! - the literals `NaN`, `Infinity` and `-Infinity`.
//!
//! Documents parse into a [`Value`] tree whose objects keep their keys in
//! insertion order.
//!
//! ```
//! use laxjson::Value;
//!
//! let value = laxjson::parse(
//!     r#"{
//!         ids: [1, 2, 3,], // still growing
//!         "name": "sample",
//!     }"#,
//! )?;
//! assert_eq!(value.get("name"), Some(&Value::String("sample".to_string())));
//! # Ok::<(), laxjson::ParseError>(())
//! ```

#![forbid(unsafe_code)]

mod cursor;
mod error;
mod lexer;
mod parser;
mod value;

pub use cursor::Location;
pub use error::{ErrorKind, ParseError};
pub use value::{Map, Value};

/// Parses a single document.
///
/// The input must hold exactly one value, surrounded by nothing but
/// whitespace and comments. Values may nest at most 128 levels deep.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parser::parse(input)
}
