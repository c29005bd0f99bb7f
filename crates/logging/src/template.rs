//! Message template rendering for backends
//!
//! The facade hands templates and arguments to sinks verbatim; sinks that
//! produce text call [`render`] to bind placeholders. Named placeholders
//! bind to arguments positionally in order of first appearance, repeated
//! names reuse their binding, and all-digit placeholders index the
//! argument list directly.

use crate::Args;
use std::fmt::Write;

/// Interpolate `template` with `args`.
///
/// `{{` and `}}` escape literal braces. A `:format` suffix inside a
/// placeholder is ignored for binding purposes. Placeholders with no
/// matching argument render verbatim, braces included.
pub fn render(template: &str, args: Args<'_>) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut names: Vec<&str> = Vec::new();
    let mut chars = template.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        match ch {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }
                // Scan to the closing brace; an unterminated placeholder
                // renders verbatim.
                let mut end = None;
                for (i, c) in chars.by_ref() {
                    if c == '}' {
                        end = Some(i);
                        break;
                    }
                }
                let Some(end) = end else {
                    out.push_str(&template[start..]);
                    break;
                };
                let placeholder = &template[start + 1..end];
                let name = placeholder.split(':').next().unwrap_or(placeholder);
                match bind(name, &mut names, args.len()) {
                    Some(index) => {
                        let _ = write!(out, "{}", args[index]);
                    }
                    None => out.push_str(&template[start..=end]),
                }
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(ch),
        }
    }
    out
}

fn bind<'t>(name: &'t str, names: &mut Vec<&'t str>, arg_count: usize) -> Option<usize> {
    if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
        let index: usize = name.parse().ok()?;
        return (index < arg_count).then_some(index);
    }
    let index = match names.iter().position(|n| *n == name) {
        Some(index) => index,
        None => {
            names.push(name);
            names.len() - 1
        }
    };
    (index < arg_count).then_some(index)
}
