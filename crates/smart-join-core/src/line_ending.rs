//! Line ending helpers.
//!
//! A document uses exactly one terminator for the duration of a join operation. Hosts pass it
//! in explicitly; [`crate::Document`] stores LF internally and remembers the detected ending
//! for saving.

/// The line terminator sequence in use by a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    #[default]
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the dominant line ending from a source text.
    ///
    /// Policy: if the input contains any CRLF (`"\r\n"`), returns [`LineEnding::Crlf`],
    /// otherwise [`LineEnding::Lf`].
    pub fn detect_in_text(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// The terminator as a string slice.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }

    /// Convert an LF-normalized text to this line ending for saving.
    pub fn apply_to_text(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }
}

/// Normalize CRLF and lone CR to LF.
pub fn normalize_to_lf(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Returns `true` if `text` does not use a single terminator throughout.
///
/// That is LF mixed with CRLF, or any lone CR. Such text cannot be saved back byte-for-byte
/// through one [`LineEnding`].
pub fn has_mixed_line_endings(text: &str) -> bool {
    let bytes = text.as_bytes();
    let (mut lf, mut crlf) = (false, false);
    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => crlf = true,
            b'\r' => return true,
            b'\n' if i > 0 && bytes[i - 1] == b'\r' => {}
            b'\n' => lf = true,
            _ => {}
        }
    }
    lf && crlf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_prefers_crlf_when_present() {
        assert_eq!(LineEnding::detect_in_text("a\nb\r\nc"), LineEnding::Crlf);
        assert_eq!(LineEnding::detect_in_text("a\nb"), LineEnding::Lf);
        assert_eq!(LineEnding::detect_in_text(""), LineEnding::Lf);
    }

    #[test]
    fn test_normalize_handles_lone_cr() {
        assert_eq!(normalize_to_lf("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_mixed_line_endings() {
        assert!(has_mixed_line_endings("a\nb\r\nc"));
        assert!(has_mixed_line_endings("a\rb"));
        assert!(has_mixed_line_endings("a\r\nb\r"));
        assert!(!has_mixed_line_endings("a\nb\n"));
        assert!(!has_mixed_line_endings("a\r\nb\r\n"));
        assert!(!has_mixed_line_endings(""));
    }

    #[test]
    fn test_apply_round_trips_crlf() {
        let saved = LineEnding::Crlf.apply_to_text("a\nb\n");
        assert_eq!(saved, "a\r\nb\r\n");
        assert_eq!(normalize_to_lf(&saved), "a\nb\n");
    }
}
