//! Pretty-printer for value trees
//!
//! Renders a parsed tree back to indented text for diagnostics.
//! Optional ANSI color, off by default:
//! - strings red, numbers yellow, booleans green, null magenta
//! - object keys bright blue, braces and brackets cyan

use colored::{Color, Colorize};

use super::value::Value;

/// Renders a [`Value`] tree to indented text.
#[derive(Debug, Clone)]
pub struct PrettyPrinter {
    indent: usize,
    colored: bool,
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self {
            indent: 2,
            colored: false,
        }
    }
}

impl PrettyPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indent width in spaces (default 2).
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    /// Enables or disables ANSI color (default off).
    pub fn colored(mut self, on: bool) -> Self {
        self.colored = on;
        self
    }

    /// Renders the tree. The output ends without a trailing newline.
    pub fn render(&self, value: &Value) -> String {
        let mut out = String::new();
        self.render_value(value, 0, &mut out);
        out
    }

    fn render_value(&self, value: &Value, depth: usize, out: &mut String) {
        match value {
            Value::Null => out.push_str(&self.paint("null".to_string(), Color::Magenta)),
            Value::Bool(b) => out.push_str(&self.paint(b.to_string(), Color::Green)),
            Value::Number(n) => out.push_str(&self.paint(n.to_string(), Color::Yellow)),
            Value::String(s) => {
                let quoted = format!("\"{}\"", escape_string(s));
                out.push_str(&self.paint(quoted, Color::Red));
            }
            Value::Array(elements) => {
                if elements.is_empty() {
                    out.push_str(&self.paint("[]".to_string(), Color::Cyan));
                    return;
                }
                out.push_str(&self.paint("[".to_string(), Color::Cyan));
                out.push('\n');
                for (i, element) in elements.iter().enumerate() {
                    self.pad(depth + 1, out);
                    self.render_value(element, depth + 1, out);
                    if i + 1 < elements.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                self.pad(depth, out);
                out.push_str(&self.paint("]".to_string(), Color::Cyan));
            }
            Value::Object(members) => {
                if members.is_empty() {
                    out.push_str(&self.paint("{}".to_string(), Color::Cyan));
                    return;
                }
                out.push_str(&self.paint("{".to_string(), Color::Cyan));
                out.push('\n');
                for (i, (key, member)) in members.iter().enumerate() {
                    self.pad(depth + 1, out);
                    let quoted = format!("\"{}\"", escape_string(key));
                    out.push_str(&self.paint(quoted, Color::BrightBlue));
                    out.push_str(": ");
                    self.render_value(member, depth + 1, out);
                    if i + 1 < members.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                self.pad(depth, out);
                out.push_str(&self.paint("}".to_string(), Color::Cyan));
            }
        }
    }

    fn pad(&self, depth: usize, out: &mut String) {
        for _ in 0..depth * self.indent {
            out.push(' ');
        }
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.colored {
            text.color(color).to_string()
        } else {
            text
        }
    }
}

/// Re-escapes a string for JSON output.
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
