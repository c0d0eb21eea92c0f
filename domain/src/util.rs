//! String helpers for log lines and error messages.

/// Cut `s` to at most `max_bytes`, backing off to the previous UTF-8
/// character boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let end = (0..=max_bytes)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    &s[..end]
}

/// Single-line preview of multi-line model output for log messages.
///
/// Whitespace runs (newlines included) collapse to one space; the result is
/// cut to `max_bytes` with `...` appended when anything was dropped.
pub fn preview(s: &str, max_bytes: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    let cut = truncate_str(&flat, max_bytes);
    if cut.len() < flat.len() {
        format!("{}...", cut)
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("MATCH (n) RETURN n;", 9), "MATCH (n)");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_str("MATCH", 10), "MATCH");
        assert_eq!(truncate_str("", 10), "");
    }

    #[test]
    fn truncate_backs_off_inside_multibyte_char() {
        // 'é' is 2 bytes; cutting at 2 lands inside it
        let s = "xé;";
        assert_eq!(truncate_str(s, 2), "x");
        assert_eq!(truncate_str(s, 3), "xé");
    }

    #[test]
    fn preview_flattens_lines() {
        let raw = "Here is the query:\n\nMATCH (n)\n  RETURN n";
        assert_eq!(preview(raw, 200), "Here is the query: MATCH (n) RETURN n");
    }

    #[test]
    fn preview_marks_truncation() {
        assert_eq!(preview("MATCH (n) RETURN n", 9), "MATCH (n)...");
        assert_eq!(preview("MATCH (n)", 9), "MATCH (n)");
    }
}
