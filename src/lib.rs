//! # Morsel - Parser Combinator Engine
//!
//! A small library for building parsing primitives and composing them into
//! grammars, then running the composed parser against a string or file to
//! get either a parsed value or a precisely located error.
//!
//! Morsel emphasizes:
//!
//! - **Zero panics**: all match failures are handled through `Result` types
//! - **Positioned errors**: failures carry a source label, row, column, and
//!   a display column for caret alignment
//! - **Safe backtracking**: a failed match never leaves the cursor advanced
//! - **Composability**: grammar trees are reference-counted, immutable, and
//!   reusable across parse calls
//!
//! ```
//! use morsel::{and, alpha, digit, or, parse, repeat};
//!
//! // identifier: letter followed by zero or more letters or digits
//! let ident = and(alpha(), repeat(or(alpha(), digit())));
//! let value = parse("x7y", &ident).unwrap();
//! assert_eq!(value.flatten(), "x7y");
//!
//! let err = parse("7xy", &ident).unwrap_err();
//! assert_eq!(err.message, "expected alphabetic character encountered '7'");
//! ```

pub mod cursor;
pub mod engine;
pub mod error;
pub mod parser;
pub mod value;

pub use cursor::{Checkpoint, Cursor};
pub use engine::{parse, parse_from_file};
pub use error::{Error, ParseError};
pub use parser::{Parser, alpha, and, any, char, digit, many, or, repeat, string};
pub use value::Value;
