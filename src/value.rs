use std::fmt;

/// The data produced by a successful match.
///
/// Primitives produce `Text`; sequencing produces a `Pair` of the two child
/// values in order; `many`/`repeat` produce a `List`. The tree mirrors the
/// shape of the parser that matched, so callers can destructure it the same
/// way they composed the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Pair(Box<Value>, Box<Value>),
    List(Vec<Value>),
}

impl Value {
    /// The matched text, if this is a `Text` leaf.
    pub fn text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Concatenate all matched text in match order.
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(&self, out: &mut String) {
        match self {
            Value::Text(s) => out.push_str(s),
            Value::Pair(x, y) => {
                x.collect_into(out);
                y.collect_into(out);
            }
            Value::List(items) => {
                for item in items {
                    item.collect_into(out);
                }
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flatten())
    }
}
