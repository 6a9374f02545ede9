//! Append-only output buffer.
//!
//! GLSL output carries no indentation: scoping is expressed purely with braces, so the writer only needs to
//! append text and hand the buffer back at the end of a pass.

use std::fmt::{self, Write as _};

/// Buffer that collects the rendered source of one pass.
#[derive(Debug, Default)]
pub struct SourceWriter {
    /// The output buffer
    output: String,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a string
    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Append formatted text (`format_args!`)
    pub fn writef(&mut self, args: fmt::Arguments<'_>) {
        // Writing into a String cannot fail.
        let _ = self.output.write_fmt(args);
    }

    /// Text written so far
    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Get the rendered output
    pub fn finish(self) -> String {
        self.output
    }
}
