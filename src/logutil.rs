//! Log sanitization for raw user input so command logs stay single-line.

/// Escape a raw command line for logging: control characters become visible
/// escapes and anything past `MAX_PREVIEW` chars is cut with an ellipsis, so a
/// pasted blob cannot flood the log.
pub fn escape_log(s: &str) -> String {
    const MAX_PREVIEW: usize = 80;
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 4);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_log;

    #[test]
    fn escapes_control_characters() {
        assert_eq!(escape_log("go\nnorth\t"), "go\\nnorth\\t");
        assert_eq!(escape_log("\x07q"), "\\x07q");
    }

    #[test]
    fn truncates_long_input() {
        let long = "x".repeat(200);
        let escaped = escape_log(&long);
        assert!(escaped.chars().count() <= 81);
        assert!(escaped.ends_with('…'));
    }
}
