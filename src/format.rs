// Turns the server's redirect listing (`NUM: ALIAS -> URL` per line) into a
// simple table for terminal output.

use std::fmt::Write;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("malformed redirect line: {line:?}")]
    MalformedLine { line: String },
}

/// One parsed listing entry. Exists only while formatting; nothing is
/// persisted client-side.
#[derive(Debug, PartialEq, Eq)]
struct Redirect<'a> {
    number: &'a str,
    alias: &'a str,
    url: &'a str,
}

fn parse_line(line: &str) -> Result<Redirect<'_>, FormatError> {
    let malformed = || FormatError::MalformedLine {
        line: line.to_string(),
    };
    let (number, rest) = line.split_once(": ").ok_or_else(malformed)?;
    let (alias, url) = rest.split_once(" -> ").ok_or_else(malformed)?;
    Ok(Redirect { number, alias, url })
}

/// Format the raw redirect listing as `number alias url` rows.
///
/// Empty lines are skipped. A non-empty line missing either separator is an
/// error rather than being silently dropped.
pub fn format_redirects(raw: &str) -> Result<String, FormatError> {
    let mut out = String::from("number alias url");
    for line in raw.lines() {
        if line.is_empty() {
            continue;
        }
        let redirect = parse_line(line)?;
        // write! to a String cannot fail
        let _ = write!(
            out,
            "\n{} {} {}",
            redirect.number, redirect.alias, redirect.url
        );
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_single_entry() {
        let out = format_redirects("1: foo -> http://example.com\n").unwrap();
        assert_eq!(out, "number alias url\n1 foo http://example.com");
    }

    #[test]
    fn empty_input_yields_header_only() {
        assert_eq!(format_redirects("").unwrap(), "number alias url");
    }

    #[test]
    fn skips_blank_lines() {
        let raw = "1: a -> http://a.test\n\n2: b -> http://b.test\n";
        let out = format_redirects(raw).unwrap();
        assert_eq!(out, "number alias url\n1 a http://a.test\n2 b http://b.test");
    }

    #[test]
    fn line_missing_arrow_is_an_error() {
        let err = format_redirects("1: broken\n").unwrap_err();
        assert_eq!(
            err,
            FormatError::MalformedLine {
                line: "1: broken".to_string()
            }
        );
    }

    #[test]
    fn line_missing_index_is_an_error() {
        let err = format_redirects("foo -> http://a.test\n").unwrap_err();
        assert!(matches!(err, FormatError::MalformedLine { .. }));
    }

    #[test]
    fn splits_on_first_separator_only() {
        // Aliases and URLs may themselves contain ": " beyond the first one.
        let out = format_redirects("3: docs -> http://example.com:8080/x\n").unwrap();
        assert_eq!(out, "number alias url\n3 docs http://example.com:8080/x");
    }
}
