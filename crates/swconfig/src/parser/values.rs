//! Token parsers shared by declaration entries and choice blocks.

use std::borrow::Cow;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while1,
    combinator::map,
    character::complete::char,
    error::{Error, ErrorKind},
};

/// Characters allowed in an unquoted key or choice name.
pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Parses an unquoted key or choice name (alphanumeric characters, dashes, and underscores).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(is_ident_char)(input)
}

/// Parses a key or choice name, bare or quoted (`"1/2"`).
pub fn parse_key(input: &str) -> IResult<&str, Cow<'_, str>> {
    alt((
        map(parse_quoted, Cow::Owned),
        map(parse_ident, Cow::Borrowed),
    ))(input)
}

/// Parses a double-quoted class string.
///
/// `\"` and `\\` are the only escapes. An unterminated string or an unknown
/// escape is a hard failure so the error points at the offending value.
pub fn parse_quoted(input: &str) -> IResult<&str, String> {
    let (body, _) = char('"')(input)?;
    let mut value = String::new();
    let mut chars = body.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Ok((&body[i + 1..], value)),
            '\\' => match chars.next() {
                Some((_, escaped @ ('"' | '\\'))) => value.push(escaped),
                _ => {
                    return Err(nom::Err::Failure(Error::new(
                        &body[i..],
                        ErrorKind::Escaped,
                    )));
                }
            },
            _ => value.push(c),
        }
    }

    Err(nom::Err::Failure(Error::new(input, ErrorKind::Char)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_accepts_dashes_and_sigil() {
        assert_eq!(parse_ident("_motion-safe: x"), Ok((": x", "_motion-safe")));
        assert_eq!(parse_ident("2xl{"), Ok(("{", "2xl")));
        assert!(parse_ident(":x").is_err());
    }

    #[test]
    fn key_accepts_quoted_names() {
        assert_eq!(parse_key(r#""1/2": x"#), Ok((": x", Cow::Owned("1/2".to_string()))));
        assert_eq!(parse_key("sm: x"), Ok((": x", Cow::Borrowed("sm"))));
    }

    #[test]
    fn quoted_handles_escapes() {
        assert_eq!(
            parse_quoted(r#""a \"b\" \\c" rest"#),
            Ok((" rest", r#"a "b" \c"#.to_string()))
        );
        assert_eq!(parse_quoted(r#""";"#), Ok((";", String::new())));
    }

    #[test]
    fn quoted_rejects_unterminated() {
        assert!(matches!(parse_quoted(r#""abc"#), Err(nom::Err::Failure(_))));
        assert!(matches!(parse_quoted(r#""a\nb""#), Err(nom::Err::Failure(_))));
    }
}
