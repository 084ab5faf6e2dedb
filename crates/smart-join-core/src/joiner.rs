//! Line joining.
//!
//! [`join_lines`] folds a sequence of physical lines into one logical line:
//!
//! - a trailing `-` is treated as a soft-wrap hyphen and removed (`"exam-" + "ple"` →
//!   `"example"`), unless it follows a decimal digit (`"9-" + "10"` → `"9-10"`)
//! - otherwise a single space is inserted when either boundary character is narrow-script
//!   (ASCII), and nothing is inserted between two wide-script characters (e.g. CJK)
//!
//! The first line keeps its leading whitespace; every following line is trimmed on both ends.

/// Returns `true` if `c` is a narrow-script character (code point `0x00..=0x7F`).
///
/// Narrow-script text separates words with spaces; anything else is treated as wide-script.
pub fn is_narrow_script(c: char) -> bool {
    c.is_ascii()
}

/// A missing boundary character behaves like a narrow-script one.
fn wants_space(boundary: Option<char>) -> bool {
    boundary.is_none_or(is_narrow_script)
}

/// Join `lines` (terminators already stripped) into a single string.
///
/// A single line is returned with trailing whitespace removed. An empty slice yields an empty
/// string.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut lines = lines.iter().map(AsRef::<str>::as_ref);
    let Some(first) = lines.next() else {
        return String::new();
    };

    let mut accum = first.trim_end().to_string();
    for line in lines {
        append_line(&mut accum, line.trim());
    }
    accum
}

/// Append one trimmed line to the accumulator.
fn append_line(accum: &mut String, next: &str) {
    let tail = accum.chars().next_back();

    if tail == Some('-') {
        accum.pop();
        // "9-" + "10": the hyphen is a range or minus sign, not a line-break hyphen.
        if accum.chars().next_back().is_some_and(|c| c.is_ascii_digit()) {
            accum.push('-');
        }
        accum.push_str(next);
        return;
    }

    let head = next.chars().next();
    if wants_space(tail) || wants_space(head) {
        accum.push(' ');
    }
    accum.push_str(next);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_strips_trailing_only() {
        assert_eq!(join_lines(&["  indented \t "]), "  indented");
    }

    #[test]
    fn test_empty_input() {
        let lines: [&str; 0] = [];
        assert_eq!(join_lines(&lines), "");
    }

    #[test]
    fn test_ascii_lines_get_a_space() {
        assert_eq!(join_lines(&["hello", "world"]), "hello world");
        assert_eq!(join_lines(&["hello   ", "   world  "]), "hello world");
    }

    #[test]
    fn test_first_line_keeps_indentation() {
        assert_eq!(
            join_lines(&["    let x =", "        1;"]),
            "    let x = 1;"
        );
    }

    #[test]
    fn test_soft_hyphen_is_removed() {
        assert_eq!(join_lines(&["exam-", "ple"]), "example");
        assert_eq!(join_lines(&["a long exam-", "   ple text"]), "a long example text");
    }

    #[test]
    fn test_hyphen_after_digit_is_kept() {
        assert_eq!(join_lines(&["page 9-", "10"]), "page 9-10");
    }

    #[test]
    fn test_lone_hyphen_is_dehyphenated() {
        // Nothing precedes the hyphen, which counts as "not a digit".
        assert_eq!(join_lines(&["-", "x"]), "x");
    }

    #[test]
    fn test_hyphen_before_wide_script() {
        assert_eq!(join_lines(&["日本-", "語"]), "日本語");
    }

    #[test]
    fn test_wide_script_concatenates() {
        assert_eq!(join_lines(&["これは", "日本語です"]), "これは日本語です");
        assert_eq!(join_lines(&["中文", "  文本  "]), "中文文本");
    }

    #[test]
    fn test_mixed_boundaries_insert_space() {
        assert_eq!(join_lines(&["日本語", "text"]), "日本語 text");
        assert_eq!(join_lines(&["text", "日本語"]), "text 日本語");
        assert_eq!(join_lines(&["Rust。", "It"]), "Rust。 It");
    }

    #[test]
    fn test_empty_lines_force_space() {
        assert_eq!(join_lines(&["中文", "", "文本"]), "中文  文本");
        assert_eq!(join_lines(&["", "x"]), " x");
        assert_eq!(join_lines(&["a", "   "]), "a ");
    }

    #[test]
    fn test_many_lines() {
        let lines = vec!["The quick", "brown fox jum-", "ped over", "page 1-", "2."];
        assert_eq!(
            join_lines(&lines),
            "The quick brown fox jumped over page 1-2."
        );
    }

    #[test]
    fn test_accepts_owned_strings() {
        let lines = vec![String::from("a"), String::from("b")];
        assert_eq!(join_lines(&lines), "a b");
    }

    #[test]
    fn test_narrow_script_boundary() {
        assert!(is_narrow_script('\u{7f}'));
        assert!(is_narrow_script('\0'));
        assert!(!is_narrow_script('\u{80}'));
        assert!(!is_narrow_script('字'));
    }
}
