//! URL → comparable domain.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Optional `scheme://` or protocol-relative `//`, optional `www.`, then
/// either a bracketed IPv6 literal or the host-ish segment up to the first
/// path, query, fragment or port delimiter.
static LOOSE_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:[a-z][a-z0-9+.\-]*:)?//)?(?:www\.)?(\[[0-9a-f:.]+\]|[^/?#:\s\[\]]+)")
        .expect("static regex compiles")
});

/// Reduces a URL to its hostname without a leading `www.` label.
///
/// Strict parsing first; links that fail it (scheme-less, relative,
/// host-less) go through a permissive pattern. When neither yields a host,
/// the input comes back unchanged. Never fails.
pub fn normalize_domain(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    if let Some(host) = Url::parse(url).ok().as_ref().and_then(Url::host_str) {
        return strip_www(&host.to_ascii_lowercase()).to_string();
    }

    match LOOSE_HOST.captures(url).and_then(|c| c.get(1)) {
        Some(m) => m.as_str().to_ascii_lowercase(),
        None => url.to_string(),
    }
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scheme_path_and_www() {
        assert_eq!(normalize_domain("https://www.example.com/x"), "example.com");
        assert_eq!(normalize_domain("http://blog.example.com:8080/a?b#c"), "blog.example.com");
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(normalize_domain(""), "");
        assert_eq!(normalize_domain("   "), "");
    }

    #[test]
    fn hosts_are_lowercased_under_any_scheme() {
        assert_eq!(normalize_domain("foo://Example.COM/x"), "example.com");
        assert_eq!(normalize_domain("foo://WWW.Example.COM/x"), "example.com");
        assert_eq!(normalize_domain("HTTPS://WWW.A.COM"), "a.com");
    }

    #[test]
    fn protocol_relative_links_use_fallback() {
        assert_eq!(normalize_domain("//cdn.a.com/x"), "cdn.a.com");
        assert_eq!(normalize_domain("//www.A.com:443/x"), "a.com");
    }

    #[test]
    fn ipv6_literals_keep_their_brackets() {
        assert_eq!(normalize_domain("http://[::1]:8080/"), "[::1]");
        assert_eq!(normalize_domain("[::1]"), "[::1]");
        assert_eq!(normalize_domain("//[2001:DB8::1]/x"), "[2001:db8::1]");
    }

    #[test]
    fn scheme_less_links_use_fallback() {
        assert_eq!(normalize_domain("www.Example.com/path"), "example.com");
        assert_eq!(normalize_domain("example.com"), "example.com");
        assert_eq!(normalize_domain("example.com:8443/x"), "example.com");
    }

    #[test]
    fn unmatchable_input_is_returned_unchanged() {
        assert_eq!(normalize_domain("/relative/only"), "/relative/only");
    }

    #[test]
    fn only_leading_www_label_is_removed() {
        assert_eq!(normalize_domain("https://wwwx.com"), "wwwx.com");
        assert_eq!(normalize_domain("https://news.www.com"), "news.www.com");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in [
            "https://www.example.com/x",
            "http://sub.domain.co.uk/page",
            "www.test.org",
            "EXAMPLE.net/a",
            "foo://Example.COM/x",
            "//cdn.a.com/x",
            "http://[::1]:8080/",
            "https://[2001:db8::1]/",
        ] {
            let once = normalize_domain(raw);
            assert_eq!(normalize_domain(&once), once, "input: {raw}");
        }
    }
}
