//! Public Suffix List rules and host classification.

use std::collections::HashSet;
use std::str::FromStr;

use tracing::debug;

use crate::error::UrlError;
use crate::types::is_ip_char;
use crate::url::registry;

/// Immutable set of Public Suffix List rules.
///
/// Rules come in three kinds: exact (`co.uk`), wildcard (`*.ck`) and
/// exception (`!www.ck`). Wildcard and exception rules are stored without
/// their `*.` / `!` prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicSuffixList {
    exact: HashSet<String>,
    wildcard: HashSet<String>,
    exception: HashSet<String>,
}

impl PublicSuffixList {
    /// Parse the newline-delimited list format.
    ///
    /// Blank lines and `//` comments are skipped, and only the first
    /// whitespace-delimited token of a line is significant.
    pub fn parse(text: &str) -> Self {
        Self::from_rules(text.lines().filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                return None;
            }
            line.split_whitespace().next()
        }))
    }

    /// Build a list from individual rules such as `"com"`, `"*.ck"`, `"!www.ck"`.
    pub fn from_rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for rule in rules {
            let rule = rule.as_ref().trim().to_lowercase();
            if let Some(name) = rule.strip_prefix("*.") {
                list.wildcard.insert(name.to_string());
            } else if let Some(name) = rule.strip_prefix('!') {
                list.exception.insert(name.to_string());
            } else if !rule.is_empty() {
                list.exact.insert(rule);
            }
        }
        list
    }

    /// Check for an exact rule, e.g. `is_exact("co.uk")`.
    pub fn is_exact(&self, suffix: &str) -> bool {
        self.exact.contains(suffix)
    }

    /// Check for a wildcard rule `*.{suffix}`.
    pub fn is_wildcard(&self, suffix: &str) -> bool {
        self.wildcard.contains(suffix)
    }

    /// Check for an exception rule `!{name}`.
    pub fn is_exception(&self, name: &str) -> bool {
        self.exception.contains(name)
    }

    /// Total number of rules.
    pub fn len(&self) -> usize {
        self.exact.len() + self.wildcard.len() + self.exception.len()
    }

    /// True when the list holds no rules at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split a lowercased host into `(subdomain, domain, tld)`.
    ///
    /// IP literals come back as `("", host, "")`. Candidates are tried from
    /// the whole host downwards and the first rule that matches wins. When no
    /// rule matches, the whole host becomes the tld.
    ///
    /// # Examples
    ///
    /// ```
    /// use canonurl::PublicSuffixList;
    ///
    /// let psl = PublicSuffixList::from_rules(["uk", "co.uk"]);
    /// let (sub, domain, tld) = psl.split_host("foo.bar.co.uk");
    /// assert_eq!((sub.as_str(), domain.as_str(), tld.as_str()), ("foo", "bar", "co.uk"));
    /// ```
    pub fn split_host(&self, host: &str) -> (String, String, String) {
        if is_ip_literal(host) {
            return (String::new(), host.to_string(), String::new());
        }

        let labels: Vec<&str> = host.split('.').collect();
        let (domain, tld) = self.split_registrable(&labels);

        match domain.rsplit_once('.') {
            Some((subdomain, domain)) => (subdomain.to_string(), domain.to_string(), tld),
            None => (String::new(), domain, tld),
        }
    }

    /// Find the `(domain, tld)` boundary for a list of labels.
    fn split_registrable(&self, labels: &[&str]) -> (String, String) {
        for i in 0..labels.len() {
            let candidate = labels[i..].join(".");

            if self.is_exception(&candidate) {
                return (labels[..=i].join("."), labels[i + 1..].join("."));
            }
            if self.is_exact(&candidate) {
                return (labels[..i].join("."), candidate);
            }
            if self.is_wildcard(&candidate) {
                // The label the wildcard stands for belongs to the suffix.
                let start = i.saturating_sub(1);
                return (labels[..start].join("."), labels[start..].join("."));
            }
        }

        (String::new(), labels.join("."))
    }
}

impl FromStr for PublicSuffixList {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Bracketed IPv6 or a host made only of digits, dots and colons.
pub(crate) fn is_ip_literal(host: &str) -> bool {
    host.contains('[') || host.chars().all(is_ip_char)
}

/// Split a host using the process-wide Public Suffix List.
///
/// If no list can be obtained the host degrades to `("", host, "")` instead
/// of failing.
///
/// # Examples
///
/// ```
/// use canonurl::{registry, split_host, PublicSuffixList};
///
/// registry::install(PublicSuffixList::from_rules(["com"]));
/// let (sub, domain, tld) = split_host("www.example.com");
/// assert_eq!((sub.as_str(), domain.as_str(), tld.as_str()), ("www", "example", "com"));
/// ```
pub fn split_host(host: &str) -> (String, String, String) {
    match registry::current() {
        Ok(list) => list.split_host(host),
        Err(err) => {
            debug!(host, error = %err, "classifying host without a suffix list");
            (String::new(), host.to_string(), String::new())
        }
    }
}
