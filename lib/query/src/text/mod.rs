mod block;
mod form;

pub use form::render_query;
pub(crate) use form::print_query;

use rdf_scribe_model::Namespace;

const INDENT: &str = "  ";

/// Line-oriented output buffer with indentation tracking.
///
/// The printer carries the outermost query's namespace list for the whole
/// walk, so terms inside sub-queries compact against the same prefixes.
pub(crate) struct Printer<'a> {
    out: String,
    level: usize,
    namespaces: &'a [Namespace],
}

impl<'a> Printer<'a> {
    pub(crate) fn new(namespaces: &'a [Namespace]) -> Self {
        Self {
            out: String::new(),
            level: 0,
            namespaces,
        }
    }

    /// Emits one line at the current indentation.
    pub(crate) fn line(&mut self, text: &str) {
        for _ in 0..self.level {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Emits a line opening a bracket (`header` must end with `{`) and
    /// indents one level.
    pub(crate) fn open(&mut self, header: &str) {
        self.line(header);
        self.level += 1;
    }

    /// Dedents one level and closes the bracket.
    pub(crate) fn close(&mut self) {
        self.level = self.level.saturating_sub(1);
        self.line("}");
    }

    pub(crate) fn namespaces(&self) -> &'a [Namespace] {
        self.namespaces
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}
