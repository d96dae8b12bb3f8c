//! Tokenizing of input lines.

/// Split a line into a command keyword and its positional arguments.
///
/// Tokens are separated by any run of whitespace. Returns `None` for a blank
/// line.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next()?;
    Some((keyword, tokens.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keyword_and_args() {
        assert_eq!(
            parse_input("add Alice 0501234567"),
            Some(("add", vec!["Alice", "0501234567"]))
        );
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        assert_eq!(
            parse_input("  change\tBob   0501234567 0671234567 \n"),
            Some(("change", vec!["Bob", "0501234567", "0671234567"]))
        );
    }

    #[test]
    fn test_parse_keyword_only() {
        assert_eq!(parse_input("all"), Some(("all", vec![])));
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   \t "), None);
    }
}
