//! Network helpers: IP inspection, IPv4 CIDR math, well-known ports.

use std::net::{IpAddr, Ipv4Addr};

use serde::Serialize;

use crate::error::ToolError;

// ── IP inspection ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IpVersion {
    V4,
    V6,
}

impl std::fmt::Display for IpVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpInfo {
    pub address: String,
    pub version: IpVersion,
    /// RFC 1918 classification; `None` for IPv6 addresses.
    pub private: Option<bool>,
}

pub fn inspect_ip(input: &str) -> Result<IpInfo, ToolError> {
    let addr: IpAddr = input.trim().parse().map_err(|_| ToolError::Format {
        field: "ip address".to_string(),
        reason: format!("'{}' is not a valid IPv4 or IPv6 address", input.trim()),
    })?;
    Ok(match addr {
        IpAddr::V4(v4) => IpInfo {
            address: v4.to_string(),
            version: IpVersion::V4,
            private: Some(v4.is_private()),
        },
        IpAddr::V6(v6) => IpInfo {
            address: v6.to_string(),
            version: IpVersion::V6,
            private: None,
        },
    })
}

// ── CIDR subnets ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubnetInfo {
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub mask: Ipv4Addr,
    pub prefix: u8,
    /// Usable host addresses; 0 for /31 and /32.
    pub host_count: u64,
}

/// Derive network, broadcast, mask, and usable host count from
/// `a.b.c.d/prefix` notation. Any address inside the subnet works; it
/// is masked down to the network address.
pub fn subnet(input: &str) -> Result<SubnetInfo, ToolError> {
    let trimmed = input.trim();
    let Some((ip_part, prefix_part)) = trimmed.split_once('/') else {
        return Err(ToolError::Format {
            field: "subnet".to_string(),
            reason: "expected CIDR notation like 192.168.1.0/24".to_string(),
        });
    };
    let ip: Ipv4Addr = ip_part.parse().map_err(|_| ToolError::Format {
        field: "subnet".to_string(),
        reason: format!("'{ip_part}' is not a valid IPv4 address"),
    })?;
    let prefix: u8 = prefix_part.parse().map_err(|_| ToolError::Format {
        field: "subnet".to_string(),
        reason: format!("'{prefix_part}' is not a prefix length"),
    })?;
    if prefix > 32 {
        return Err(ToolError::Format {
            field: "subnet".to_string(),
            reason: format!("prefix /{prefix} exceeds /32"),
        });
    }

    let mask: u32 = if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(prefix))
    };
    let network = u32::from(ip) & mask;
    let broadcast = network | !mask;
    let host_count = if prefix >= 31 {
        0
    } else {
        2_u64.pow(32 - u32::from(prefix)) - 2
    };

    Ok(SubnetInfo {
        network: Ipv4Addr::from(network),
        broadcast: Ipv4Addr::from(broadcast),
        mask: Ipv4Addr::from(mask),
        prefix,
        host_count,
    })
}

// ── Well-known ports ────────────────────────────────────────────────

/// Reference rows: (port, service, description).
pub const WELL_KNOWN_PORTS: &[(u16, &str, &str)] = &[
    (21, "FTP", "File transfer control channel"),
    (22, "SSH", "Secure shell"),
    (23, "Telnet", "Unencrypted remote login"),
    (25, "SMTP", "Mail transfer between servers"),
    (53, "DNS", "Domain name resolution"),
    (80, "HTTP", "Web traffic"),
    (110, "POP3", "Mail retrieval"),
    (143, "IMAP", "Mail access"),
    (443, "HTTPS", "Web traffic over TLS"),
    (587, "SMTP", "Mail submission"),
    (993, "IMAPS", "IMAP over TLS"),
    (995, "POP3S", "POP3 over TLS"),
    (3306, "MySQL", "MySQL database"),
    (3389, "RDP", "Remote desktop"),
    (5432, "PostgreSQL", "PostgreSQL database"),
    (6379, "Redis", "Redis key-value store"),
    (8080, "HTTP", "Alternate web and proxy port"),
];

pub fn port_lookup(port: u16) -> Option<(&'static str, &'static str)> {
    WELL_KNOWN_PORTS
        .iter()
        .find(|(known, _, _)| *known == port)
        .map(|(_, service, description)| (*service, *description))
}
