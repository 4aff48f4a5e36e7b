//! Platform allow-list for submitted video URLs.

use url::Url;

/// Hosts accepted by the resolver. A leading `www.` is stripped before matching.
const SUPPORTED_HOSTS: &[&str] = &[
    "youtube.com",
    "youtu.be",
    "tiktok.com",
    "instagram.com",
    "twitter.com",
    "x.com",
    "facebook.com",
    "dailymotion.com",
];

/// Returns the canonical platform host for a URL, or `None` when the host is
/// not on the allow-list.
pub fn supported_platform(url: &Url) -> Option<&'static str> {
    let host = url.host_str()?.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    SUPPORTED_HOSTS.iter().copied().find(|&h| h == host)
}
