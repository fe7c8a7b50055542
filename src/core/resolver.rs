//! One-shot target resolution.
//!
//! Runs once before the dashboard starts. A host that does not resolve makes
//! the whole run meaningless, so every failure here is fatal.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use crate::core::config::MonitorConfig;
use crate::error::{LinkstatError, Result};

/// Address family of the resolved target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    pub fn of(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "IPv4"),
            AddressFamily::V6 => write!(f, "IPv6"),
        }
    }
}

/// The host being monitored. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Canonical textual address (dotted decimal or RFC 5952 IPv6)
    pub address: String,
    pub family: AddressFamily,
    pub interval_label: String,
}

impl Target {
    pub fn new(ip: IpAddr, interval_label: impl Into<String>) -> Self {
        Self {
            address: ip.to_string(),
            family: AddressFamily::of(&ip),
            interval_label: interval_label.into(),
        }
    }
}

/// Which address families a lookup may return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyFilter {
    /// `-6`: IPv6 only
    V6Only,
    /// Families the host has a usable interface for
    Configured { v4: bool, v6: bool },
}

impl FamilyFilter {
    /// Probe the local stack for configured families.
    pub fn detect() -> Self {
        let v4 = UdpSocket::bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))).is_ok();
        let v6 = UdpSocket::bind(SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))).is_ok();
        log::debug!("Configured address families: v4={} v6={}", v4, v6);
        FamilyFilter::Configured { v4, v6 }
    }

    pub fn allows(&self, ip: &IpAddr) -> bool {
        match (self, ip) {
            (FamilyFilter::V6Only, IpAddr::V6(_)) => true,
            (FamilyFilter::V6Only, IpAddr::V4(_)) => false,
            (FamilyFilter::Configured { v4, .. }, IpAddr::V4(_)) => *v4,
            (FamilyFilter::Configured { v6, .. }, IpAddr::V6(_)) => *v6,
        }
    }
}

/// Pick the first candidate the filter allows, in resolver order.
pub fn select_address<I>(candidates: I, filter: FamilyFilter) -> Option<IpAddr>
where
    I: IntoIterator<Item = IpAddr>,
{
    candidates.into_iter().find(|ip| filter.allows(ip))
}

/// Resolve `host` to a single address.
///
/// Literal addresses skip the lookup. With `prefer_ipv6` only IPv6 results
/// are accepted; otherwise the first result of a configured family wins.
pub fn resolve_address(host: &str, prefer_ipv6: bool) -> Result<IpAddr> {
    let host = host.trim();

    if let Ok(ip) = host.parse::<IpAddr>() {
        if prefer_ipv6 && ip.is_ipv4() {
            return Err(LinkstatError::resolve(host, "not an IPv6 address"));
        }
        return Ok(ip);
    }

    let filter = if prefer_ipv6 {
        FamilyFilter::V6Only
    } else {
        FamilyFilter::detect()
    };

    let candidates: Vec<IpAddr> = (host, 0)
        .to_socket_addrs()
        .map_err(|e| LinkstatError::resolve(host, e.to_string()))?
        .map(|sa| sa.ip())
        .collect();

    log::debug!("'{}' resolved to {:?}", host, candidates);

    if candidates.is_empty() {
        return Err(LinkstatError::resolve(host, "no addresses returned"));
    }

    select_address(candidates, filter).ok_or_else(|| {
        let reason = match filter {
            FamilyFilter::V6Only => "no IPv6 address found",
            FamilyFilter::Configured { .. } => "no address for a configured address family",
        };
        LinkstatError::resolve(host, reason)
    })
}

/// Resolve the configured target into the immutable [`Target`].
pub fn resolve_target(config: &MonitorConfig) -> Result<Target> {
    let ip = resolve_address(&config.target, config.prefer_ipv6)?;
    let target = Target::new(ip, config.interval_label.clone());
    log::info!(
        "Monitoring {} ({}) every {}",
        target.address,
        target.family,
        target.interval_label
    );
    Ok(target)
}
