use std::rc::Rc;

/// An immutable description of a grammar rule.
///
/// Composite variants hold reference-counted children, so the same subtree
/// can appear under several composites without being rebuilt. Trees are
/// read-only after construction and reusable across parse calls.
///
/// `Many` matches a fixed list of children in order. True zero-or-more
/// repetition is the separate [`Repeat`] variant, built with [`repeat`].
///
/// [`Repeat`]: Parser::Repeat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parser {
    /// Any single character.
    Any,
    /// A single ASCII alphabetic character.
    Alpha,
    /// A single ASCII digit.
    Digit,
    /// One exact character.
    Char(char),
    /// An exact string, matched atomically.
    Str(String),
    /// Ordered choice: try the first child, fall back to the second.
    Or(Rc<Parser>, Rc<Parser>),
    /// Sequence of two children; both must match.
    And(Rc<Parser>, Rc<Parser>),
    /// Fixed sequence of children; all must match in order.
    Many(Vec<Rc<Parser>>),
    /// Zero or more matches of the child; never fails.
    Repeat(Rc<Parser>),
}

/// Match any single character.
pub fn any() -> Rc<Parser> {
    Rc::new(Parser::Any)
}

/// Match a single ASCII alphabetic character.
pub fn alpha() -> Rc<Parser> {
    Rc::new(Parser::Alpha)
}

/// Match a single ASCII digit.
pub fn digit() -> Rc<Parser> {
    Rc::new(Parser::Digit)
}

/// Match exactly the character `c`.
pub fn char(c: char) -> Rc<Parser> {
    Rc::new(Parser::Char(c))
}

/// Match exactly the string `s`, atomically: a partial match consumes
/// nothing.
pub fn string(s: &str) -> Rc<Parser> {
    Rc::new(Parser::Str(s.to_string()))
}

/// Try `x` first; if it fails, backtrack and try `y`.
pub fn or(x: Rc<Parser>, y: Rc<Parser>) -> Rc<Parser> {
    Rc::new(Parser::Or(x, y))
}

/// Match `x` then `y`, producing both values in order.
pub fn and(x: Rc<Parser>, y: Rc<Parser>) -> Rc<Parser> {
    Rc::new(Parser::And(x, y))
}

/// Match every parser in `items` in order.
pub fn many(items: impl IntoIterator<Item = Rc<Parser>>) -> Rc<Parser> {
    Rc::new(Parser::Many(items.into_iter().collect()))
}

/// Match `p` zero or more times, collecting every value produced.
pub fn repeat(p: Rc<Parser>) -> Rc<Parser> {
    Rc::new(Parser::Repeat(p))
}
