//! Referrer classification: search engine, social network, direct, or other.

use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferrerKind {
    Search,
    Social,
    /// No referrer, or the page referred itself.
    Direct,
    Other,
}

impl ReferrerKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Social => "social",
            Self::Direct => "direct",
            Self::Other => "other",
        }
    }
}

/// A classified referrer. `source` names the platform when it is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Referrer {
    pub kind: ReferrerKind,
    pub source: Option<&'static str>,
}

impl Referrer {
    pub const DIRECT: Referrer = Referrer {
        kind: ReferrerKind::Direct,
        source: None,
    };
}

/// Host of a URL, with or without scheme. Lowercased by the caller.
static RE_HOST: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:[a-z][a-z0-9+.\-]*://)?(?:[^@/]*@)?([^/:?#\s]+)").ok());

struct KnownSite {
    name: &'static str,
    kind: ReferrerKind,
    /// Matched against the host.
    pattern: &'static str,
}

const KNOWN_SITES: &[KnownSite] = &[
    KnownSite { name: "Google", kind: ReferrerKind::Search, pattern: r"(^|\.)google\.[a-z.]+$" },
    KnownSite { name: "Bing", kind: ReferrerKind::Search, pattern: r"(^|\.)bing\.com$" },
    KnownSite { name: "DuckDuckGo", kind: ReferrerKind::Search, pattern: r"(^|\.)duckduckgo\.com$" },
    KnownSite { name: "Yahoo", kind: ReferrerKind::Search, pattern: r"(^|\.)search\.yahoo\.[a-z.]+$" },
    KnownSite { name: "Yandex", kind: ReferrerKind::Search, pattern: r"(^|\.)yandex\.[a-z.]+$" },
    KnownSite { name: "Baidu", kind: ReferrerKind::Search, pattern: r"(^|\.)baidu\.com$" },
    KnownSite { name: "Ecosia", kind: ReferrerKind::Search, pattern: r"(^|\.)ecosia\.org$" },
    KnownSite { name: "Brave Search", kind: ReferrerKind::Search, pattern: r"^search\.brave\.com$" },
    KnownSite { name: "Facebook", kind: ReferrerKind::Social, pattern: r"(^|\.)(facebook\.com|fb\.com|fb\.me)$" },
    KnownSite { name: "Twitter", kind: ReferrerKind::Social, pattern: r"(^|\.)(twitter\.com|x\.com|t\.co)$" },
    KnownSite { name: "LinkedIn", kind: ReferrerKind::Social, pattern: r"(^|\.)(linkedin\.com|lnkd\.in)$" },
    KnownSite { name: "Reddit", kind: ReferrerKind::Social, pattern: r"(^|\.)(reddit\.com|redd\.it)$" },
    KnownSite { name: "Instagram", kind: ReferrerKind::Social, pattern: r"(^|\.)instagram\.com$" },
    KnownSite { name: "TikTok", kind: ReferrerKind::Social, pattern: r"(^|\.)tiktok\.com$" },
    KnownSite { name: "YouTube", kind: ReferrerKind::Social, pattern: r"(^|\.)(youtube\.com|youtu\.be)$" },
    KnownSite { name: "Discord", kind: ReferrerKind::Social, pattern: r"(^|\.)(discord\.com|discord\.gg)$" },
    KnownSite { name: "Hacker News", kind: ReferrerKind::Social, pattern: r"^news\.ycombinator\.com$" },
];

static COMPILED_SITES: LazyLock<Vec<(&'static KnownSite, Regex)>> = LazyLock::new(|| {
    KNOWN_SITES
        .iter()
        .filter_map(|site| Regex::new(site.pattern).ok().map(|re| (site, re)))
        .collect()
});

/// Host part of a referrer URL, lowercased.
pub fn host_of(referrer: &str) -> Option<String> {
    let lowered = referrer.trim().to_ascii_lowercase();
    let re = RE_HOST.as_ref()?;
    let host = re.captures(&lowered)?.get(1)?.as_str();
    let host = host.strip_prefix("www.").unwrap_or(host);
    (!host.is_empty()).then(|| host.to_string())
}

/// Classify a referrer. `None` or blank is direct traffic.
pub fn classify(referrer: Option<&str>) -> Referrer {
    let Some(raw) = referrer.map(str::trim).filter(|r| !r.is_empty()) else {
        return Referrer::DIRECT;
    };
    let Some(host) = host_of(raw) else {
        return Referrer {
            kind: ReferrerKind::Other,
            source: None,
        };
    };
    COMPILED_SITES
        .iter()
        .find(|(_, re)| re.is_match(&host))
        .map(|(site, _)| Referrer {
            kind: site.kind,
            source: Some(site.name),
        })
        .unwrap_or(Referrer {
            kind: ReferrerKind::Other,
            source: None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_site_pattern_compiles() {
        assert_eq!(COMPILED_SITES.len(), KNOWN_SITES.len());
    }

    #[test]
    fn search_engines() {
        let r = classify(Some("https://www.google.co.uk/search?q=rust"));
        assert_eq!(r.kind, ReferrerKind::Search);
        assert_eq!(r.source, Some("Google"));
        assert_eq!(classify(Some("https://duckduckgo.com/")).source, Some("DuckDuckGo"));
    }

    #[test]
    fn social_networks() {
        let r = classify(Some("https://t.co/abc123"));
        assert_eq!(r.kind, ReferrerKind::Social);
        assert_eq!(r.source, Some("Twitter"));
        assert_eq!(
            classify(Some("https://www.linkedin.com/feed/")).source,
            Some("LinkedIn")
        );
    }

    #[test]
    fn lookalike_hosts_are_not_matched() {
        let r = classify(Some("https://notgoogle.example.com/"));
        assert_eq!(r.kind, ReferrerKind::Other);
        let r = classify(Some("https://myt.co.example/"));
        assert_eq!(r.kind, ReferrerKind::Other);
    }

    #[test]
    fn blank_is_direct() {
        assert_eq!(classify(None), Referrer::DIRECT);
        assert_eq!(classify(Some("   ")), Referrer::DIRECT);
    }

    #[test]
    fn host_extraction() {
        assert_eq!(host_of("HTTPS://WWW.Example.COM:8080/x").as_deref(), Some("example.com"));
        assert_eq!(host_of("example.org/path").as_deref(), Some("example.org"));
    }
}
