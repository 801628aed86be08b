//! Line splitting for captured tool output.

/// Splits captured output into lines.
///
/// Both `\n` and `\r\n` terminators are stripped, and a trailing line without
/// a terminator is still returned. An empty input yields no lines.
#[must_use]
pub fn split_lines(output: &str) -> Vec<&str> {
    output.lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb\n\nc"), ["a", "b", "", "c"]);
    }

    #[test]
    fn test_crlf_is_stripped() {
        assert_eq!(split_lines("--\r\nType = zip\r\n\r\n"), ["--", "Type = zip", ""]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_lines("").is_empty());
    }
}
