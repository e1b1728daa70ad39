//! Indented C source writer.

use rustc_hash::FxHashSet;
use synth_ir::{Name, StringInterner};

/// Output buffer for one C unit.
///
/// Tracks indentation and which one-off sections (layout, prototypes) have
/// already been written.
pub struct CWriter<'a> {
    interner: &'a StringInterner,
    indent: usize,
    output: String,
    emitted: FxHashSet<&'static str>,
}

impl<'a> CWriter<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        CWriter {
            interner,
            indent: 0,
            output: String::with_capacity(1024),
            emitted: FxHashSet::default(),
        }
    }

    #[inline]
    pub fn resolve(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    /// Turn a source name into a C identifier.
    ///
    /// Non-alphanumeric characters become `_`; a leading digit gets a `_`
    /// prefix.
    pub fn mangle(&self, name: Name) -> String {
        mangle_str(self.interner.lookup(name))
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write a line with indentation and newline.
    pub fn writeln(&mut self, s: &str) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
        self.output.push_str(s);
        self.output.push('\n');
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Run `emit` unless a section named `key` was already written.
    pub fn once(&mut self, key: &'static str, emit: impl FnOnce(&mut Self)) {
        if self.emitted.insert(key) {
            emit(self);
        }
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

pub(crate) fn mangle_str(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 1);
    if s.starts_with(|c: char| c.is_ascii_digit()) {
        result.push('_');
    }
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            result.push(c);
        } else {
            result.push('_');
        }
    }
    result
}

/// Quote `s` as a C string literal.
pub(crate) fn c_string_literal(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}
