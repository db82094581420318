use std::fmt;
use std::str::FromStr;

/// Type tag carried in the fourth token of a wire line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    PTR,
    TXT,
    SRV,

    Unknown,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::PTR => "PTR",
            RecordType::TXT => "TXT",
            RecordType::SRV => "SRV",
            RecordType::Unknown => "UNKNOWN",
        }
    }

    /// Maps a wire type token to its tag. Matching is exact (the wire
    /// grammar only produces upper-case tokens); anything else is `Unknown`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "A" => RecordType::A,
            "AAAA" => RecordType::AAAA,
            "CNAME" => RecordType::CNAME,
            "PTR" => RecordType::PTR,
            "TXT" => RecordType::TXT,
            "SRV" => RecordType::SRV,
            _ => RecordType::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, RecordType::Unknown)
    }

    pub fn all() -> &'static [RecordType] {
        &[
            RecordType::A,
            RecordType::AAAA,
            RecordType::CNAME,
            RecordType::PTR,
            RecordType::TXT,
            RecordType::SRV,
        ]
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match RecordType::from_token(s.to_uppercase().as_str()) {
            RecordType::Unknown => Err(format!("Unknown record type: {}", s)),
            known => Ok(known),
        }
    }
}
