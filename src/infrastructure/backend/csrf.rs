//! Anti-forgery token extraction from dashboard pages
//!
//! Pages carry the token either as `<meta name="csrf-token" content="...">`
//! or as a hidden `<input name="csrf_token" value="...">`. The meta tag wins
//! when both are present.

use once_cell::sync::Lazy;
use regex::Regex;

/// `<meta ...>` or `<input ...>`. Quoted values may contain `>`.
const TAG_PATTERN: &str = r#"(?is)<(meta|input)\b((?:[^>"']|"[^"]*"|'[^']*')*)>"#;

/// `name`, `name=value`, `name="value"` or `name='value'`
const ATTRIBUTE_PATTERN: &str =
    r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#;

struct TagScanner {
    tag: Regex,
    attribute: Regex,
}

impl TagScanner {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            tag: Regex::new(TAG_PATTERN)?,
            attribute: Regex::new(ATTRIBUTE_PATTERN)?,
        })
    }

    /// Attribute name/value pairs of one tag body. Bare attributes get an empty value.
    fn attributes(&self, body: &str) -> Vec<(String, String)> {
        self.attribute
            .captures_iter(body)
            .map(|caps| {
                let value = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .or_else(|| caps.get(4))
                    .map_or("", |m| m.as_str());
                (caps[1].to_ascii_lowercase(), value.to_string())
            })
            .collect()
    }
}

static SCANNER: Lazy<Result<TagScanner, regex::Error>> = Lazy::new(TagScanner::new);

/// Find the anti-forgery token in an HTML page
pub fn csrf_token_from_html(html: &str) -> Option<String> {
    let scanner = SCANNER.as_ref().ok()?;
    let mut from_input = None;

    for caps in scanner.tag.captures_iter(html) {
        let attrs = scanner.attributes(&caps[2]);
        let lookup = |name: &str| {
            attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        };

        if caps[1].eq_ignore_ascii_case("meta") {
            if lookup("name") == Some("csrf-token") {
                if let Some(token) = lookup("content").filter(|t| !t.is_empty()) {
                    return Some(token.to_string());
                }
            }
        } else if from_input.is_none() && lookup("name") == Some("csrf_token") {
            from_input = lookup("value")
                .filter(|t| !t.is_empty())
                .map(str::to_string);
        }
    }

    from_input
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_meta_tag() {
        let html = r#"<html><head><meta name="csrf-token" content="abc123"></head></html>"#;
        assert_eq!(csrf_token_from_html(html), Some("abc123".to_string()));
    }

    #[test]
    fn reads_hidden_input() {
        let html = r#"<form><input type="hidden" name="csrf_token" value="tok-9"/></form>"#;
        assert_eq!(csrf_token_from_html(html), Some("tok-9".to_string()));
    }

    #[test]
    fn meta_wins_over_input() {
        let html = r#"
            <input name='csrf_token' value='from-input'>
            <META content="from-meta" NAME="csrf-token">
        "#;
        assert_eq!(csrf_token_from_html(html), Some("from-meta".to_string()));
    }

    #[test]
    fn ignores_other_meta_tags() {
        let html = r#"<meta charset="utf-8"><meta name="viewport" content="width=device-width">"#;
        assert_eq!(csrf_token_from_html(html), None);
    }

    #[test]
    fn empty_token_is_none() {
        let html = r#"<meta name="csrf-token" content="">"#;
        assert_eq!(csrf_token_from_html(html), None);
    }

    #[test]
    fn quoted_angle_bracket_stays_in_value() {
        let html = r#"<meta name="csrf-token" content="a>b">"#;
        assert_eq!(csrf_token_from_html(html), Some("a>b".to_string()));
    }

    #[test]
    fn angle_bracket_in_earlier_attribute() {
        let html = r#"<input data-hint="x > y" value="tok>1" name="csrf_token">"#;
        assert_eq!(csrf_token_from_html(html), Some("tok>1".to_string()));
    }

    #[test]
    fn content_before_name() {
        let html = r#"<meta content='zz-42' name='csrf-token' />"#;
        assert_eq!(csrf_token_from_html(html), Some("zz-42".to_string()));
    }

    #[test]
    fn name_inside_other_value_does_not_match() {
        let html = r#"<meta content="name=csrf-token" name="description">"#;
        assert_eq!(csrf_token_from_html(html), None);
    }

    #[test]
    fn parses_unquoted_and_bare_attributes() {
        let scanner = TagScanner::new().unwrap();
        let attrs = scanner.attributes(r#" name=csrf_token hidden VALUE="x y""#);
        assert_eq!(
            attrs,
            vec![
                ("name".to_string(), "csrf_token".to_string()),
                ("hidden".to_string(), String::new()),
                ("value".to_string(), "x y".to_string()),
            ]
        );
    }
}
