//! Line codec for the landns record format.
//!
//! ```text
//! <name> <ttl> IN <type> <rdata...> [; comment]
//! ```
//!
//! Parsing runs in two phases: the envelope pattern validates the shared
//! `NAME TTL IN TYPE` prefix and extracts the type token, then a `match` on
//! the tag picks the rdata grammar of that variant. Adding a variant means
//! adding one arm and one rdata pattern.
//!
//! A `;` starts an annotation only when blank space precedes it, so a bare
//! token such as `t;x.` is kept whole.
//!
//! TXT payloads are a single double-quoted span in which `\"` and `\\` are
//! the only escapes; everything else, spaces and `;` included, is literal. Any
//! other backslash sequence makes the line absent.

use super::{Record, RecordData, RecordType};
use fancy_regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;

static ENVELOPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)[ \t]+([0-9]+)[ \t]+IN[ \t]+([A-Z]+)[ \t]+(.*)$")
        .expect("envelope pattern is valid")
});

static SINGLE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^ \t]+)(?:[ \t]+;.*)?[ \t]*$").expect("single token pattern is valid")
});

static QUOTED_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"((?:[^"\\]|\\["\\])*)"(?:[ \t]+;.*)?[ \t]*$"#)
        .expect("quoted text pattern is valid")
});

static SRV_FIELDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)[ \t]+([0-9]+)[ \t]+([0-9]+)[ \t]+([^ \t]+)(?:[ \t]+;.*)?[ \t]*$")
        .expect("srv pattern is valid")
});

impl Record {
    /// Parses one wire line.
    ///
    /// Returns `None` for anything that is not a well-formed record of a
    /// supported type: garbage, unknown types, wrong field counts, numeric
    /// overflow and lines commented out with a leading `;`. A trailing
    /// `; ...` annotation, as the service appends to stored records, is
    /// ignored.
    pub fn parse(line: &str) -> Option<Record> {
        let line = line.trim();
        if line.starts_with(';') {
            return None;
        }

        let envelope = captures(&ENVELOPE, line)?;
        let name = envelope.get(1)?.as_str();
        let ttl: u32 = envelope.get(2)?.as_str().parse().ok()?;
        let rdata = envelope.get(4)?.as_str();

        let data = match RecordType::from_token(envelope.get(3)?.as_str()) {
            RecordType::A => RecordData::A {
                address: single_token(rdata)?,
            },
            RecordType::AAAA => RecordData::AAAA {
                address: single_token(rdata)?,
            },
            RecordType::CNAME => RecordData::CNAME {
                target: single_token(rdata)?,
            },
            RecordType::PTR => RecordData::PTR {
                domain: single_token(rdata)?,
            },
            RecordType::TXT => RecordData::TXT {
                text: quoted_text(rdata)?,
            },
            RecordType::SRV => srv_fields(rdata)?,
            RecordType::Unknown => return None,
        };

        Some(Record::new(name, ttl, data))
    }
}

fn captures<'t>(pattern: &Regex, text: &'t str) -> Option<Captures<'t>> {
    pattern.captures(text).ok().flatten()
}

fn single_token(rdata: &str) -> Option<String> {
    let caps = captures(&SINGLE_TOKEN, rdata)?;
    Some(caps.get(1)?.as_str().to_string())
}

fn quoted_text(rdata: &str) -> Option<String> {
    let caps = captures(&QUOTED_TEXT, rdata)?;
    Some(unescape(caps.get(1)?.as_str()))
}

fn srv_fields(rdata: &str) -> Option<RecordData> {
    let caps = captures(&SRV_FIELDS, rdata)?;
    Some(RecordData::SRV {
        priority: caps.get(1)?.as_str().parse().ok()?,
        weight: caps.get(2)?.as_str().parse().ok()?,
        port: caps.get(3)?.as_str().parse().ok()?,
        target: caps.get(4)?.as_str().to_string(),
    })
}

fn unescape(quoted: &str) -> String {
    let mut out = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            // The pattern only admits `\"` and `\\`.
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

pub(super) fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in text.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            _ => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}
