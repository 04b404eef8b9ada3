//! Comment stripping for declarations.
//!
//! Block comments (`/* */`) and line comments (`// ...`) are removed before
//! parsing. Quoted class strings are copied untouched, so a class such as
//! `bg-[url(//cdn/x.png)]` survives.

/// Returns `source` with all comments outside quoted strings removed.
pub fn strip_comments(source: &str) -> String {
    let mut clean = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            clean.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        clean.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"', _) => {
                in_string = true;
                clean.push(c);
            }
            ('/', Some('*')) => {
                chars.next();
                while let Some(inner) = chars.next() {
                    if inner == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        break;
                    }
                }
                // Keep tokens on either side of the comment apart.
                clean.push(' ');
            }
            ('/', Some('/')) => {
                for inner in chars.by_ref() {
                    if inner == '\n' {
                        clean.push('\n');
                        break;
                    }
                }
            }
            _ => clean.push(c),
        }
    }

    clean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_block_and_line_comments() {
        let source = "base: \"a\"; /* note */ x: \"b\"; // trailing\ny: \"c\";";
        assert_eq!(strip_comments(source), "base: \"a\";   x: \"b\"; \ny: \"c\";");
    }

    #[test]
    fn keeps_comment_markers_inside_strings() {
        let source = r#"base: "bg-[url(//cdn/x.png)] /*keep*/";"#;
        assert_eq!(strip_comments(source), source);
    }

    #[test]
    fn keeps_escaped_quotes_inside_strings() {
        let source = r#"base: "a\"//b";"#;
        assert_eq!(strip_comments(source), source);
    }
}
