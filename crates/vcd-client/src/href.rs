//! Helpers for manipulating vCloud Director entity hrefs.
//!
//! VCD exposes two URL trees for the same entities: tenant hrefs under
//! `/api/` and provider hrefs under `/api/admin/`. Some resources accept
//! reads on the tenant href but only accept mutations on the admin href,
//! so callers rewrite between the two.

/// Rewrite a tenant href into its admin counterpart.
///
/// Only the first `/api/` segment is replaced, so hrefs that already point
/// under `/api/admin/` come back unchanged in the admin tree.
pub fn admin_href(href: &str) -> String {
    href.replacen("/api/", "/api/admin/", 1)
}

/// Extract the last UUID found in the input, if any.
///
/// URN identifiers like `urn:vcloud:network:<uuid>` and hrefs both carry
/// the entity UUID as their final component; taking the last match keeps
/// site or org UUIDs earlier in the string from shadowing it.
pub fn extract_uuid(input: &str) -> Option<String> {
    let pattern = regex_lite::Regex::new(
        r"[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12}",
    )
    .unwrap();

    pattern
        .find_iter(input)
        .last()
        .map(|m| m.as_str().to_string())
}

/// Percent-encode a metadata key for use as a URL path segment.
pub fn encode_key_segment(key: &str) -> String {
    urlencoding::encode(key).into_owned()
}
