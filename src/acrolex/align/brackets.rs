//! Bracket balance validation

/// Check whether every opening bracket among `(`, `[`, `{` is closed by its
/// matching closer in correct nested order.
///
/// Fails closed: any mismatch, unmatched closer, or leftover opener at the
/// end of the string returns false. Non-bracket characters are ignored, so
/// the check applies directly to prose spans.
pub fn brackets_balanced(text: &str) -> bool {
    let mut stack = Vec::new();
    for ch in text.chars() {
        match ch {
            '(' | '[' | '{' => stack.push(ch),
            ')' | ']' | '}' => {
                let opener = match ch {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(opener) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_balance_table() {
        let cases = [
            ("()", true),
            ("(())", true),
            ("{}", true),
            ("{[]}", true),
            ("{[}]", false),
            ("{", false),
            ("([}])", false),
            ("{[]", false),
        ];
        for (text, expected) in cases {
            assert_eq!(brackets_balanced(text), expected, "case {:?}", text);
        }
    }

    #[test]
    fn test_prose_spans() {
        assert!(brackets_balanced("poly (ADP-ribose) polymerase"));
        assert!(!brackets_balanced("inhibitors, GnRH agonists) and direct"));
        assert!(!brackets_balanced("open (never closed"));
    }

    #[test]
    fn test_empty_string_is_balanced() {
        assert!(brackets_balanced(""));
    }
}
