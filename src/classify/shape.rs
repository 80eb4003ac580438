//! Capitalization shape checks for dictionary tokens.

/// One leading ASCII capital followed by at least one character that is not
/// an ASCII capital.
pub(crate) fn is_start_upper(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            let mut rest = chars.peekable();
            rest.peek().is_some() && rest.all(|c| !c.is_ascii_uppercase())
        }
        _ => false,
    }
}

/// Non-empty and free of ASCII lowercase letters and ASCII digits.
///
/// Tokens made only of punctuation also qualify.
pub(crate) fn is_all_upper(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_upper_capitalized_word() {
        assert!(is_start_upper("Password"));
        assert!(is_start_upper("P4ss!"));
    }

    #[test]
    fn test_start_upper_rejects_single_char() {
        assert!(!is_start_upper("P"));
    }

    #[test]
    fn test_start_upper_rejects_inner_capital() {
        assert!(!is_start_upper("PassWord"));
        assert!(!is_start_upper("PASSWORD"));
    }

    #[test]
    fn test_start_upper_rejects_lowercase_start() {
        assert!(!is_start_upper("password"));
        assert!(!is_start_upper(""));
    }

    #[test]
    fn test_all_upper() {
        assert!(is_all_upper("PASSWORD"));
        assert!(is_all_upper("PASS-WORD!"));
        assert!(!is_all_upper("PASSWORd"));
        assert!(!is_all_upper("PASSWORD1"));
        assert!(!is_all_upper(""));
    }

    #[test]
    fn test_all_upper_accepts_pure_punctuation() {
        assert!(is_all_upper("!@#$"));
    }
}
