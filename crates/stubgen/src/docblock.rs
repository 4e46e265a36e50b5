//! Doc comment re-indentation.

/// Re-emit a `/** ... */` doc comment at the given indentation depth.
///
/// Lines are stripped of their original leading whitespace and re-aligned so
/// that continuation lines starting with `*` line up under the opening
/// delimiter. The comment text itself is carried through unchanged.
pub fn render_doc_block(doc: &str, indent: &str) -> String {
    let mut out = String::new();
    for (i, line) in doc.lines().enumerate() {
        let trimmed = line.trim();
        out.push_str(indent);
        if i > 0 && trimmed.starts_with('*') {
            out.push(' ');
        }
        out.push_str(trimmed);
        out.push('\n');
    }
    out
}
