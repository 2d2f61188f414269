//! Source identifier parsing.
//!
//! A source is either a bare domain name (`example.com`) or a DNS URI in the
//! RFC 4501 shape naming the nameserver to ask:
//!
//! - `dns:example.com` - same as the bare domain
//! - `dns://1.1.1.1/example.com` - query 1.1.1.1 on port 53
//! - `dns://[2606:4700:4700::1111]:5353/example.com?type=TXT` - explicit port and query type
//!
//! The identifier is parsed once, up front; the DNS provider is then built from
//! the resulting [`Source`]. The domain part of a URI may be percent-encoded
//! (`dns:ex%41mple.com` queries `exAmple.com`).

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::config::{DNS_DEFAULT_PORT, DNS_URI_SCHEME, MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH};
use crate::error_handling::SourceError;

/// Where TXT records are fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A domain resolved through the system nameservers.
    Domain(String),
    /// A domain resolved through one specific nameserver.
    DomainWithNameserver {
        domain: String,
        nameserver: SocketAddr,
    },
}

impl Source {
    /// Parses a source identifier.
    ///
    /// Anything without a `:` is taken as a domain name. Everything else must
    /// be a `dns:` URI.
    ///
    /// # Errors
    ///
    /// Returns a `SourceError` if the identifier is empty, is a URI with
    /// another scheme, names no domain or a malformed one, names a nameserver
    /// that is not an IP address, or asks for a record type other than TXT.
    pub fn parse(input: &str) -> Result<Self, SourceError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SourceError::Empty);
        }
        if !input.contains(':') {
            validate_domain(input)?;
            return Ok(Source::Domain(input.to_string()));
        }
        parse_dns_uri(input)
    }

    /// The domain to query.
    pub fn domain(&self) -> &str {
        match self {
            Source::Domain(domain) => domain,
            Source::DomainWithNameserver { domain, .. } => domain,
        }
    }

    /// The nameserver to ask, if the source names one.
    pub fn nameserver(&self) -> Option<SocketAddr> {
        match self {
            Source::Domain(_) => None,
            Source::DomainWithNameserver { nameserver, .. } => Some(*nameserver),
        }
    }
}

impl FromStr for Source {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::parse(s)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Domain(domain) => f.write_str(domain),
            Source::DomainWithNameserver { domain, nameserver } => {
                write!(f, "{domain} (nameserver {nameserver})")
            }
        }
    }
}

fn parse_dns_uri(input: &str) -> Result<Source, SourceError> {
    let invalid = |reason: &str| SourceError::InvalidUri {
        uri: input.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(input).map_err(|e| invalid(&e.to_string()))?;

    if url.scheme() != DNS_URI_SCHEME {
        return Err(SourceError::UnsupportedScheme {
            scheme: url.scheme().to_string(),
        });
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(invalid("credentials are not supported"));
    }
    if url.fragment().is_some() {
        return Err(invalid("fragments are not supported"));
    }
    if let Some(query) = url.query() {
        check_query(input, query)?;
    }

    let domain = url.path().trim_start_matches('/');
    if domain.is_empty() {
        return Err(SourceError::MissingDomain {
            uri: input.to_string(),
        });
    }
    if domain.contains('/') {
        return Err(invalid("path must be a single domain name"));
    }
    let domain = percent_decode_str(domain)
        .decode_utf8()
        .map_err(|_| invalid("percent-encoded domain is not valid UTF-8"))?
        .into_owned();
    validate_domain(&domain)?;

    match url.host_str() {
        None | Some("") => Ok(Source::Domain(domain)),
        Some(host) => {
            let ip = host
                .trim_start_matches('[')
                .trim_end_matches(']')
                .parse::<IpAddr>()
                .map_err(|_| SourceError::NameserverNotIp {
                    host: host.to_string(),
                })?;
            let port = url.port().unwrap_or(DNS_DEFAULT_PORT);
            Ok(Source::DomainWithNameserver {
                domain,
                nameserver: SocketAddr::new(ip, port),
            })
        }
    }
}

/// Checks that `domain` can be a DNS name.
///
/// Labels may hold ASCII letters, digits, `-` and `_` (as in `_dmarc`), or
/// non-ASCII characters for internationalized names. A single trailing dot is
/// allowed.
fn validate_domain(domain: &str) -> Result<(), SourceError> {
    let invalid = |reason: String| SourceError::InvalidDomain {
        domain: domain.to_string(),
        reason,
    };

    let name = domain.strip_suffix('.').unwrap_or(domain);
    if name.is_empty() {
        return Err(invalid("name has no labels".to_string()));
    }
    if name.len() > MAX_DOMAIN_LENGTH {
        return Err(invalid(format!(
            "name is longer than {MAX_DOMAIN_LENGTH} bytes"
        )));
    }

    for label in name.split('.') {
        if label.is_empty() {
            return Err(invalid("name has an empty label".to_string()));
        }
        if label.len() > MAX_LABEL_LENGTH {
            return Err(invalid(format!(
                "label {label:?} is longer than {MAX_LABEL_LENGTH} bytes"
            )));
        }
        if let Some(c) = label.chars().find(|c| !is_label_char(*c)) {
            return Err(invalid(format!("character {c:?} is not allowed")));
        }
    }
    Ok(())
}

fn is_label_char(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || c == '-' || c == '_'
    } else {
        !c.is_whitespace() && !c.is_control()
    }
}

/// Accepts only `TYPE=TXT` and `CLASS=IN` parameters (`;` or `&` separated).
fn check_query(uri: &str, query: &str) -> Result<(), SourceError> {
    let unsupported = || SourceError::UnsupportedQuery {
        uri: uri.to_string(),
        query: query.to_string(),
    };

    for param in query.split([';', '&']).filter(|p| !p.is_empty()) {
        let (name, value) = param.split_once('=').ok_or_else(unsupported)?;
        let accepted = (name.eq_ignore_ascii_case("type") && value.eq_ignore_ascii_case("txt"))
            || (name.eq_ignore_ascii_case("class") && value.eq_ignore_ascii_case("in"));
        if !accepted {
            return Err(unsupported());
        }
    }
    Ok(())
}
