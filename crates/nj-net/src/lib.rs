//! Address handling for the navigation path.
//!
//! [`normalize_input_url`] is the lenient fixup applied to whatever the user
//! typed into the URL bar; it never fails. [`BrowserUrl`] is the strict parser
//! used where a malformed address must be reported instead of passed through.

pub mod address;

pub use address::BrowserUrl;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Prefixes `http://` unless the input already starts with `http://` or `https://`.
///
/// The check is literal and case-sensitive. Nothing else is validated, trimmed,
/// or encoded, so malformed input comes back unchanged apart from the prefix.
pub fn normalize_input_url(input: &str) -> String {
    if has_http_prefix(input) {
        input.to_owned()
    } else {
        format!("{HTTP_PREFIX}{input}")
    }
}

pub fn has_http_prefix(input: &str) -> bool {
    input.starts_with(HTTP_PREFIX) || input.starts_with(HTTPS_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::has_http_prefix;
    use super::normalize_input_url;
    use proptest::prelude::*;

    #[test]
    fn prefixes_bare_host_with_http() {
        assert_eq!(normalize_input_url("example.com"), "http://example.com");
    }

    #[test]
    fn keeps_https_url_unchanged() {
        assert_eq!(
            normalize_input_url("https://example.com"),
            "https://example.com"
        );
    }

    #[test]
    fn keeps_http_url_unchanged() {
        assert_eq!(
            normalize_input_url("http://localhost:3000/docs"),
            "http://localhost:3000/docs"
        );
    }

    #[test]
    fn empty_input_becomes_bare_scheme() {
        assert_eq!(normalize_input_url(""), "http://");
    }

    #[test]
    fn prefix_check_is_case_sensitive_and_untrimmed() {
        assert_eq!(
            normalize_input_url("HTTPS://example.com"),
            "http://HTTPS://example.com"
        );
        assert_eq!(
            normalize_input_url(" https://example.com"),
            "http:// https://example.com"
        );
    }

    #[test]
    fn other_schemes_are_prefixed_not_rejected() {
        assert_eq!(
            normalize_input_url("ftp://files.example.com"),
            "http://ftp://files.example.com"
        );
    }

    proptest! {
        #[test]
        fn unprefixed_input_gains_http_prefix(input in ".*") {
            prop_assume!(!has_http_prefix(&input));
            prop_assert_eq!(normalize_input_url(&input), format!("http://{input}"));
        }

        #[test]
        fn prefixed_input_is_returned_verbatim(
            scheme in prop::sample::select(vec!["http://", "https://"]),
            rest in ".*",
        ) {
            let input = format!("{scheme}{rest}");
            prop_assert_eq!(normalize_input_url(&input), input);
        }

        #[test]
        fn normalization_is_idempotent(input in ".*") {
            let once = normalize_input_url(&input);
            prop_assert_eq!(normalize_input_url(&once), once.clone());
        }
    }
}
