// README decoding and install-directive extraction.
// The readme endpoint returns `{content, encoding}`; content arrives base64
// encoded and wrapped at 60 columns.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Result, ShelfError};

use super::types::ReadmeResponse;

const DIRECTIVE_KEYWORD: &str = "INSTALL_COMMAND";

/// Decode a readme response body into text. Only the base64 encoding is
/// decoded; any other declared encoding is passed through untouched.
pub fn decode_readme(response: ReadmeResponse) -> Result<String> {
    if response.encoding != "base64" {
        return Ok(response.content);
    }

    // GitHub inserts newlines into the base64 payload; the standard engine
    // rejects them.
    let compact: String = response
        .content
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| ShelfError::Api(format!("invalid base64 readme content: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|e| ShelfError::Api(format!("readme content is not valid UTF-8: {e}")))
}

/// Extract the install command embedded in a README as an HTML comment of
/// the shape `<!-- INSTALL_COMMAND: <value> -->`. Whitespace around the
/// keyword, colon, and value is ignored; an empty value counts as absent.
pub fn extract_install_command(readme: &str) -> Option<String> {
    let mut rest = readme;
    while let Some(open) = rest.find("<!--") {
        let after_open = &rest[open + 4..];
        let close = after_open.find("-->")?;
        let body = after_open[..close].trim();

        if let Some(after_keyword) = body.strip_prefix(DIRECTIVE_KEYWORD) {
            if let Some(value) = after_keyword.trim_start().strip_prefix(':') {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }

        rest = &after_open[close + 3..];
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base64_response(text: &str) -> ReadmeResponse {
        ReadmeResponse {
            content: STANDARD.encode(text),
            encoding: "base64".to_string(),
        }
    }

    #[test]
    fn decodes_base64_content() {
        let decoded = decode_readme(base64_response("# PingGather\n\nPings things.")).unwrap();
        assert_eq!(decoded, "# PingGather\n\nPings things.");
    }

    #[test]
    fn decodes_base64_with_line_wrapping() {
        let text = "A readme long enough to be wrapped across several base64 lines by GitHub.";
        let mut wrapped = String::new();
        for (i, c) in STANDARD.encode(text).chars().enumerate() {
            if i > 0 && i % 60 == 0 {
                wrapped.push('\n');
            }
            wrapped.push(c);
        }
        let response = ReadmeResponse {
            content: wrapped,
            encoding: "base64".to_string(),
        };
        assert_eq!(decode_readme(response).unwrap(), text);
    }

    #[test]
    fn passes_through_other_encodings() {
        let response = ReadmeResponse {
            content: "# Already plain text".to_string(),
            encoding: "none".to_string(),
        };
        assert_eq!(decode_readme(response).unwrap(), "# Already plain text");
    }

    #[test]
    fn rejects_malformed_base64() {
        let response = ReadmeResponse {
            content: "not!!valid@@base64".to_string(),
            encoding: "base64".to_string(),
        };
        assert!(matches!(decode_readme(response), Err(ShelfError::Api(_))));
    }

    #[test]
    fn extracts_directive() {
        let readme = "# Foo\n\n<!-- INSTALL_COMMAND: npm i -g foo -->\n\nUsage...";
        assert_eq!(
            extract_install_command(readme).as_deref(),
            Some("npm i -g foo")
        );
    }

    #[test]
    fn trims_whitespace_around_colon_and_value() {
        let readme = "<!--   INSTALL_COMMAND :   cargo install foo   -->";
        assert_eq!(
            extract_install_command(readme).as_deref(),
            Some("cargo install foo")
        );
    }

    #[test]
    fn skips_unrelated_comments() {
        let readme = "<!-- badge -->\ntext\n<!-- INSTALL_COMMAND: pip install foo -->";
        assert_eq!(
            extract_install_command(readme).as_deref(),
            Some("pip install foo")
        );
    }

    #[test]
    fn absent_or_empty_directive_yields_none() {
        assert_eq!(extract_install_command("# No directive here"), None);
        assert_eq!(extract_install_command(""), None);
        assert_eq!(extract_install_command("<!-- INSTALL_COMMAND: -->"), None);
        // Unterminated comment never matches.
        assert_eq!(extract_install_command("<!-- INSTALL_COMMAND: foo"), None);
    }
}
