//! Share-link parsing.

use std::sync::LazyLock;

use regex::Regex;

static SHARE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/s/([^/?&]+)").expect("valid regex"));

static OWNER_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]uk=(\d+)").expect("valid regex"));

/// Identifier pair extracted from a TeraBox share URL.
///
/// `share_id` is `None` when the input does not look like a share link at
/// all. `owner_key` falls back to `"0"` when the URL carries no `uk`
/// parameter; the listing API accepts that for shares without an owner scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareReference {
    pub share_id: Option<String>,
    pub owner_key: String,
}

impl ShareReference {
    /// Extract `share_id` and `owner_key` from a free-form URL string.
    ///
    /// Purely textual: the first `/s/<id>` segment wins, truncated at the
    /// next `/`, `?` or `&`, and percent-encoding is left untouched. Never
    /// fails; an unparseable URL just yields an absent `share_id`.
    pub fn parse(url: &str) -> Self {
        let share_id = SHARE_ID_RE
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string());

        let owner_key = OWNER_KEY_RE
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "0".to_string());

        Self {
            share_id,
            owner_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_share_id_and_owner_key() {
        let r = ShareReference::parse("https://example.com/s/ABC123?uk=555");
        assert_eq!(r.share_id.as_deref(), Some("ABC123"));
        assert_eq!(r.owner_key, "555");
    }

    #[test]
    fn share_id_stops_at_slash_query_and_amp() {
        let r = ShareReference::parse("https://example.com/s/abc/extra");
        assert_eq!(r.share_id.as_deref(), Some("abc"));

        let r = ShareReference::parse("https://example.com/s/abc?uk=1");
        assert_eq!(r.share_id.as_deref(), Some("abc"));

        let r = ShareReference::parse("https://example.com/s/abc&uk=1");
        assert_eq!(r.share_id.as_deref(), Some("abc"));
    }

    #[test]
    fn url_without_share_segment_has_no_share_id() {
        let r = ShareReference::parse("https://example.com/folder/123");
        assert_eq!(r.share_id, None);
        assert_eq!(r.owner_key, "0");
    }

    #[test]
    fn owner_key_defaults_to_zero() {
        let r = ShareReference::parse("https://example.com/s/ABC123");
        assert_eq!(r.share_id.as_deref(), Some("ABC123"));
        assert_eq!(r.owner_key, "0");
    }

    #[test]
    fn first_owner_key_wins() {
        let r = ShareReference::parse("https://example.com/s/x?uk=111&uk=222");
        assert_eq!(r.owner_key, "111");
    }

    #[test]
    fn owner_key_must_follow_a_separator() {
        // "uk=" embedded in another parameter name does not count.
        let r = ShareReference::parse("https://example.com/s/x?junk=1");
        assert_eq!(r.owner_key, "0");
    }

    #[test]
    fn percent_encoding_is_not_decoded() {
        let r = ShareReference::parse("https://example.com/s/a%2Fb?uk=9");
        assert_eq!(r.share_id.as_deref(), Some("a%2Fb"));
    }
}
