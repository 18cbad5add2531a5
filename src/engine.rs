use crate::cursor::Cursor;
use crate::error::{Error, ParseError};
use crate::parser::Parser;
use crate::value::Value;
use std::io::Read;

const ANY_ERR_EOF: &str = "expected character encountered end of input";

impl Parser {
    /// Attempt to match this parser at the cursor's current position.
    ///
    /// On success the cursor has consumed exactly the matched input; on
    /// failure it is restored to where the attempt began, so alternatives
    /// can be tried from the same position. The returned error snapshots
    /// the position where the attempt broke, including the tab column of
    /// the offending character.
    pub fn eval(&self, cursor: &mut Cursor) -> Result<Value, ParseError> {
        match self {
            Parser::Any => match cursor.peek() {
                Some(c) => Ok(consume(cursor, c)),
                None => Err(ParseError::new(cursor, ANY_ERR_EOF)),
            },
            Parser::Alpha => eval_class(cursor, "alphabetic character", |c| {
                c.is_ascii_alphabetic()
            }),
            Parser::Digit => eval_class(cursor, "digit", |c| c.is_ascii_digit()),
            Parser::Char(expected) => {
                let entry = cursor.save();
                match cursor.peek() {
                    Some(c) if c == *expected => Ok(consume(cursor, c)),
                    Some(c) => {
                        cursor.advance_tab_col(1);
                        let err = ParseError::new(
                            cursor,
                            format!("expected '{}' encountered '{}'", expected, c),
                        );
                        cursor.restore(entry);
                        Err(err)
                    }
                    None => Err(ParseError::new(
                        cursor,
                        format!("expected '{}' encountered end of input", expected),
                    )),
                }
            }
            Parser::Str(expected) => {
                let entry = cursor.save();
                for want in expected.chars() {
                    match cursor.peek() {
                        Some(c) if c == want => {
                            consume(cursor, c);
                        }
                        Some(c) => {
                            cursor.advance_tab_col(1);
                            let err = ParseError::new(
                                cursor,
                                format!("expected \"{}\" encountered '{}'", expected, c),
                            );
                            cursor.restore(entry);
                            return Err(err);
                        }
                        None => {
                            let err = ParseError::new(
                                cursor,
                                format!("expected \"{}\" encountered end of input", expected),
                            );
                            cursor.restore(entry);
                            return Err(err);
                        }
                    }
                }
                Ok(Value::Text(expected.clone()))
            }
            Parser::Or(x, y) => {
                let entry = cursor.save();
                match x.eval(cursor) {
                    Ok(value) => Ok(value),
                    Err(_) => {
                        cursor.restore(entry);
                        y.eval(cursor)
                    }
                }
            }
            Parser::And(x, y) => {
                let first = x.eval(cursor)?;
                let second = y.eval(cursor)?;
                Ok(Value::Pair(Box::new(first), Box::new(second)))
            }
            Parser::Many(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    values.push(item.eval(cursor)?);
                }
                Ok(Value::List(values))
            }
            Parser::Repeat(p) => {
                let mut values = Vec::new();
                loop {
                    let attempt = cursor.save();
                    match p.eval(cursor) {
                        // A success that consumed nothing would repeat
                        // identically forever; discard it and stop.
                        Ok(_) if cursor.save() == attempt => break,
                        Ok(value) => values.push(value),
                        Err(_) => {
                            cursor.restore(attempt);
                            break;
                        }
                    }
                }
                Ok(Value::List(values))
            }
        }
    }
}

/// Consume one character that `peek` already produced, accounting one unit
/// of display width for it.
fn consume(cursor: &mut Cursor, c: char) -> Value {
    cursor.advance();
    cursor.advance_tab_col(1);
    Value::Text(c.to_string())
}

fn eval_class(
    cursor: &mut Cursor,
    what: &str,
    pred: impl Fn(char) -> bool,
) -> Result<Value, ParseError> {
    let entry = cursor.save();
    match cursor.peek() {
        Some(c) if pred(c) => Ok(consume(cursor, c)),
        Some(c) => {
            cursor.advance_tab_col(1);
            let err = ParseError::new(cursor, format!("expected {} encountered '{}'", what, c));
            cursor.restore(entry);
            Err(err)
        }
        None => Err(ParseError::new(
            cursor,
            format!("expected {} encountered end of input", what),
        )),
    }
}

/// Run `parser` once against an in-memory string.
///
/// The cursor lives only for the duration of the call; the parser tree is
/// borrowed and stays reusable across parses.
pub fn parse(text: &str, parser: &Parser) -> Result<Value, ParseError> {
    let mut cursor = Cursor::from_text(text);
    parser.eval(&mut cursor)
}

/// Run `parser` once against the full contents of `reader`.
///
/// `name` labels the source in error messages, typically the file name.
pub fn parse_from_file(
    name: &str,
    reader: &mut impl Read,
    parser: &Parser,
) -> Result<Value, Error> {
    let mut cursor = Cursor::from_reader(name, reader).map_err(|source| Error::Io {
        name: name.to_string(),
        source,
    })?;
    Ok(parser.eval(&mut cursor)?)
}
