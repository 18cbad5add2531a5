use std::io::{self, Read};

/// Characters of the source label kept before truncation kicks in.
const LABEL_MAX_LEN: usize = 10;

/// A value-type snapshot of the cursor's scan state.
///
/// Returned by [`Cursor::save`] and consumed by [`Cursor::restore`], so
/// speculative match attempts can nest without clobbering each other's
/// checkpoints. `row`, `col` and `tab_col` are 1-based; `offset` is a
/// 0-based index into the character buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub offset: usize,
    pub row: usize,
    pub col: usize,
    /// Display column used to align error carets. Tracks terminal width
    /// independently of `col`, so callers can account for multi-width
    /// characters such as tab stops.
    pub tab_col: usize,
}

impl Checkpoint {
    fn start() -> Self {
        Checkpoint {
            offset: 0,
            row: 1,
            col: 1,
            tab_col: 1,
        }
    }
}

/// Owns the source text and the mutable scan position for a single parse.
///
/// The buffer is fully materialized before matching begins; `peek` never
/// performs I/O. A failed match restores the cursor through a saved
/// [`Checkpoint`], so failure leaves no net advancement.
#[derive(Debug)]
pub struct Cursor {
    buffer: Vec<char>,
    label: String,
    state: Checkpoint,
}

impl Cursor {
    /// Create a cursor over an in-memory string.
    ///
    /// The display label is the literal text wrapped in quotes, truncated
    /// to its first ten characters with a `...` suffix when longer.
    pub fn from_text(text: &str) -> Self {
        Cursor {
            buffer: text.chars().collect(),
            label: display_label(text),
            state: Checkpoint::start(),
        }
    }

    /// Create a cursor by reading the full contents of `reader`.
    ///
    /// `name` becomes the display label verbatim, typically a file name.
    pub fn from_reader(name: &str, reader: &mut impl Read) -> io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Cursor {
            buffer: text.chars().collect(),
            label: name.to_string(),
            state: Checkpoint::start(),
        })
    }

    /// The character at the current offset, or `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.buffer.get(self.state.offset).copied()
    }

    /// Consume the character returned by the last successful [`peek`].
    ///
    /// A newline advances the row and resets both column counters to 1;
    /// any other character advances offset and column together. The tab
    /// column is never advanced here. Consumers account display width
    /// separately via [`advance_tab_col`].
    ///
    /// [`peek`]: Cursor::peek
    /// [`advance_tab_col`]: Cursor::advance_tab_col
    pub fn advance(&mut self) {
        match self.peek() {
            Some('\n') => {
                self.state.offset += 1;
                self.state.row += 1;
                self.state.col = 1;
                self.state.tab_col = 1;
            }
            Some(_) => {
                self.state.offset += 1;
                self.state.col += 1;
            }
            None => {}
        }
    }

    /// Add `n` to the tab column without touching offset, row or column.
    pub fn advance_tab_col(&mut self, n: usize) {
        self.state.tab_col += n;
    }

    /// Snapshot the current scan state.
    pub fn save(&self) -> Checkpoint {
        self.state
    }

    /// Roll the scan state back to a previously saved checkpoint.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.state = checkpoint;
    }

    /// The display label used in error messages.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the cursor has consumed the entire buffer.
    pub fn at_end(&self) -> bool {
        self.state.offset >= self.buffer.len()
    }
}

fn display_label(text: &str) -> String {
    let truncated = text.chars().count() > LABEL_MAX_LEN;
    let head: String = text.chars().take(LABEL_MAX_LEN).collect();
    if truncated {
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", head)
    }
}
