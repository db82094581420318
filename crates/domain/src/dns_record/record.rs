use super::RecordType;
use std::fmt;

/// TTL applied by every variant constructor unless overridden.
pub const DEFAULT_TTL: u32 = 3600;

/// Type-specific payload of a [`Record`].
///
/// Payload strings are opaque: addresses, domain names and text are stored
/// exactly as given and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordData {
    A {
        address: String,
    },
    AAAA {
        address: String,
    },
    CNAME {
        target: String,
    },
    PTR {
        domain: String,
    },
    TXT {
        text: String,
    },
    SRV {
        target: String,
        port: u16,
        priority: u16,
        weight: u16,
    },
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A { .. } => RecordType::A,
            RecordData::AAAA { .. } => RecordType::AAAA,
            RecordData::CNAME { .. } => RecordType::CNAME,
            RecordData::PTR { .. } => RecordType::PTR,
            RecordData::TXT { .. } => RecordType::TXT,
            RecordData::SRV { .. } => RecordType::SRV,
        }
    }
}

/// One DNS resource record as exchanged with the landns API.
///
/// Records are immutable: the fields are private and the only way to change
/// the TTL is the consuming [`Record::with_ttl`] used while building.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    name: String,
    ttl: u32,
    data: RecordData,
}

impl Record {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn a(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::new(
            name,
            DEFAULT_TTL,
            RecordData::A {
                address: address.into(),
            },
        )
    }

    pub fn aaaa(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::new(
            name,
            DEFAULT_TTL,
            RecordData::AAAA {
                address: address.into(),
            },
        )
    }

    pub fn cname(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(
            name,
            DEFAULT_TTL,
            RecordData::CNAME {
                target: target.into(),
            },
        )
    }

    pub fn ptr(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self::new(
            name,
            DEFAULT_TTL,
            RecordData::PTR {
                domain: domain.into(),
            },
        )
    }

    pub fn txt(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_TTL, RecordData::TXT { text: text.into() })
    }

    /// SRV record with priority and weight 0.
    pub fn srv(name: impl Into<String>, target: impl Into<String>, port: u16) -> Self {
        Self::srv_weighted(name, target, port, 0, 0)
    }

    pub fn srv_weighted(
        name: impl Into<String>,
        target: impl Into<String>,
        port: u16,
        priority: u16,
        weight: u16,
    ) -> Self {
        Self::new(
            name,
            DEFAULT_TTL,
            RecordData::SRV {
                target: target.into(),
                port,
                priority,
                weight,
            },
        )
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    pub fn data(&self) -> &RecordData {
        &self.data
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} IN {} ", self.name, self.ttl, self.record_type())?;
        match &self.data {
            RecordData::A { address } | RecordData::AAAA { address } => f.write_str(address),
            RecordData::CNAME { target } => f.write_str(target),
            RecordData::PTR { domain } => f.write_str(domain),
            RecordData::TXT { text } => super::wire::write_quoted(f, text),
            RecordData::SRV {
                target,
                port,
                priority,
                weight,
            } => write!(f, "{} {} {} {}", priority, weight, port, target),
        }
    }
}
