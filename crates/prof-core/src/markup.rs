//! Narrative markup: `**text**` marks emphasized text.
//!
//! [`spans`] walks the narrative lazily and yields alternating plain and
//! emphasized runs. A delimiter with no partner later in the text is kept
//! literally as part of a plain run, so `"a **b"` renders as written.

/// Delimiter that opens and closes an emphasized run.
pub const DELIMITER: &str = "**";

/// A run of narrative text with a single style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// The text of the run, without delimiters.
    pub text: &'a str,
    /// Whether the run sits between a pair of delimiters.
    pub emphasized: bool,
}

impl<'a> Span<'a> {
    /// A plain run.
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            emphasized: false,
        }
    }

    /// An emphasized run.
    pub fn strong(text: &'a str) -> Self {
        Self {
            text,
            emphasized: true,
        }
    }
}

/// Iterator over the styled runs of a narrative. See [`spans`].
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    rest: &'a str,
    emphasized: bool,
}

/// Tokenize narrative text into styled runs. Empty runs are skipped.
pub fn spans(text: &str) -> Spans<'_> {
    Spans {
        rest: text,
        emphasized: false,
    }
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        loop {
            if self.rest.is_empty() {
                return None;
            }

            if self.emphasized {
                // An emphasized run is only entered once its closer is known.
                let end = self.rest.find(DELIMITER).unwrap_or(self.rest.len());
                let text = &self.rest[..end];
                self.rest = self.rest.get(end + DELIMITER.len()..).unwrap_or("");
                self.emphasized = false;
                if !text.is_empty() {
                    return Some(Span::strong(text));
                }
                continue;
            }

            let Some(open) = self.rest.find(DELIMITER) else {
                let text = self.rest;
                self.rest = "";
                return Some(Span::plain(text));
            };

            let after_open = &self.rest[open + DELIMITER.len()..];
            if !after_open.contains(DELIMITER) {
                // Unmatched opener: the remainder renders literally.
                let text = self.rest;
                self.rest = "";
                return Some(Span::plain(text));
            }

            let text = &self.rest[..open];
            self.rest = after_open;
            self.emphasized = true;
            if !text.is_empty() {
                return Some(Span::plain(text));
            }
        }
    }
}

/// Number of visible characters once delimiters are removed.
pub fn visible_len(text: &str) -> usize {
    spans(text).map(|s| s.text.chars().count()).sum()
}

/// The styled runs covering only the first `visible` characters.
///
/// Used for progressive reveal, so a half-shown emphasized word is already
/// emphasized.
pub fn reveal(text: &str, visible: usize) -> Vec<Span<'_>> {
    let mut remaining = visible;
    let mut out = Vec::new();
    for span in spans(text) {
        if remaining == 0 {
            break;
        }
        match span.text.char_indices().nth(remaining) {
            Some((cut, _)) => {
                out.push(Span {
                    text: &span.text[..cut],
                    emphasized: span.emphasized,
                });
                remaining = 0;
            }
            None => {
                remaining -= span.text.chars().count();
                out.push(span);
            }
        }
    }
    out
}

/// The narrative with paired delimiters removed.
pub fn plain_text(text: &str) -> String {
    spans(text).map(|s| s.text).collect()
}
