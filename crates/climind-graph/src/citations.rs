//! Syntactic citation URL validation. No network access.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;
use url::{Host, Url};

const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

/// One DNS label.
static DOMAIN_LABEL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$").ok());

/// Alphabetic or punycode top-level domain.
static TOP_LEVEL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:[a-z]{2,63}|xn--[a-z0-9-]{1,59})$").ok());

fn matches(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    match &**pattern {
        Some(re) => re.is_match(text),
        None => false,
    }
}

/// Whether `candidate` is a well-formed absolute web URL: an allowed scheme,
/// no whitespace, and a host that is an IP address or a dotted domain name
/// ending in an alphabetic top-level domain.
pub fn is_valid_url(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.chars().any(char::is_whitespace) {
        return false;
    }
    let Ok(url) = Url::parse(candidate) else {
        return false;
    };
    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return false;
    }
    match url.host() {
        Some(Host::Domain(domain)) => is_valid_domain(domain),
        Some(Host::Ipv4(ip)) => !ip.is_unspecified() && ip != Ipv4Addr::BROADCAST,
        Some(Host::Ipv6(ip)) => ip != Ipv6Addr::UNSPECIFIED,
        None => false,
    }
}

fn is_valid_domain(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || domain.len() > 253 {
        return false;
    }
    let (tld, rest) = match labels.split_last() {
        Some(split) => split,
        None => return false,
    };
    matches(&TOP_LEVEL, tld) && rest.iter().all(|l| matches(&DOMAIN_LABEL, l))
}
