//! Text assembly for query rendering.

const INDENT_SIZE: usize = 4;

/// Accumulates query text in either compact or pretty layout.
///
/// A line break is a `\n` in pretty mode and a single space in compact mode.
/// Indentation is written lazily, just before the first token of a line,
/// and only in pretty mode.
#[derive(Debug)]
pub(crate) struct Renderer {
    pretty: bool,
    buffer: String,
    indent: usize,
    at_line_start: bool,
}

impl Renderer {
    pub(crate) const fn new(pretty: bool) -> Self {
        Self {
            pretty,
            buffer: String::new(),
            indent: 0,
            at_line_start: false,
        }
    }

    pub(crate) fn append(&mut self, text: &str) -> &mut Self {
        if self.pretty && self.at_line_start && self.indent > 0 {
            self.buffer.push_str(&" ".repeat(self.indent));
        }
        self.at_line_start = false;
        self.buffer.push_str(text);
        self
    }

    pub(crate) fn new_line(&mut self) -> &mut Self {
        self.buffer.push(if self.pretty { '\n' } else { ' ' });
        self.at_line_start = true;
        self
    }

    pub(crate) fn increase_indent(&mut self) -> &mut Self {
        self.indent += INDENT_SIZE;
        self
    }

    pub(crate) fn decrease_indent(&mut self) -> &mut Self {
        self.indent = self.indent.saturating_sub(INDENT_SIZE);
        self
    }

    pub(crate) fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_layout() {
        let mut renderer = Renderer::new(false);
        renderer.append("SELECT").increase_indent();
        renderer.new_line().append("a").append(",");
        renderer.new_line().append("b");
        renderer.decrease_indent().new_line().append("FROM t");
        assert_eq!(renderer.build(), "SELECT a, b FROM t");
    }

    #[test]
    fn test_pretty_layout() {
        let mut renderer = Renderer::new(true);
        renderer.append("SELECT").increase_indent();
        renderer.new_line().append("a").append(",");
        renderer.new_line().append("b");
        renderer.decrease_indent().new_line().append("FROM t");
        assert_eq!(renderer.build(), "SELECT\n    a,\n    b\nFROM t");
    }

    #[test]
    fn test_decrease_indent_never_underflows() {
        let mut renderer = Renderer::new(true);
        renderer.decrease_indent().new_line().append("x");
        assert_eq!(renderer.build(), "\nx");
    }
}
