//! Records as stored by the landns dynamic zone.
//!
//! The service annotates each stored record with its id and flags:
//!
//! ```text
//! example.com. 60 IN A 192.0.2.1 ; ID:1
//! ;example.com. 60 IN A 192.0.2.2 ; ID:2 Volatile
//! ```
//!
//! A leading `;` marks a disabled record. Annotation keys are
//! case-insensitive and unknown keys are ignored.

use crate::dns_record::Record;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicRecord {
    pub record: Record,
    pub id: Option<i64>,
    pub volatile: bool,
    pub disabled: bool,
}

impl DynamicRecord {
    pub fn new(record: Record) -> Self {
        Self {
            record,
            id: None,
            volatile: false,
            disabled: false,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn volatile(mut self) -> Self {
        self.volatile = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Parses one annotated line. Same silent-failure policy as
    /// [`Record::parse`]; a malformed `ID` annotation also yields `None`.
    pub fn parse(line: &str) -> Option<DynamicRecord> {
        let mut line = line.trim();

        let disabled = line.starts_with(';');
        if disabled {
            line = line.trim_start_matches(';').trim_start();
        }

        let (body, annotation) = match comment_start(line) {
            Some(idx) => (&line[..idx], &line[idx + 1..]),
            None => (line, ""),
        };

        let mut parsed = DynamicRecord::new(Record::parse(body)?);
        parsed.disabled = disabled;

        for token in annotation.split_whitespace() {
            let (key, value) = match token.split_once(':') {
                Some((key, value)) => (key, Some(value)),
                None => (token, None),
            };

            match key.to_uppercase().as_str() {
                "ID" => parsed.id = Some(value?.trim().parse().ok()?),
                "VOLATILE" => {
                    if value.is_some() {
                        return None;
                    }
                    parsed.volatile = true;
                }
                _ => {}
            }
        }

        Some(parsed)
    }
}

/// Byte offset of the first `;` that follows blank space outside a
/// double-quoted span.
fn comment_start(line: &str) -> Option<usize> {
    let mut quoted = false;
    let mut escaped = false;
    let mut after_blank = false;

    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if quoted => escaped = true,
            '"' => quoted = !quoted,
            ';' if !quoted && after_blank => return Some(idx),
            _ => {}
        }
        after_blank = c == ' ' || c == '\t';
    }

    None
}

impl From<Record> for DynamicRecord {
    fn from(record: Record) -> Self {
        Self::new(record)
    }
}

impl fmt::Display for DynamicRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.disabled {
            f.write_str(";")?;
        }
        write!(f, "{}", self.record)?;

        let mut annotations = Vec::new();
        if let Some(id) = self.id {
            annotations.push(format!("ID:{}", id));
        }
        if self.volatile {
            annotations.push("Volatile".to_string());
        }

        if !annotations.is_empty() {
            write!(f, " ; {}", annotations.join(" "))?;
        }
        Ok(())
    }
}

pub fn parse_dynamic_records(text: &str) -> Vec<DynamicRecord> {
    text.lines().filter_map(DynamicRecord::parse).collect()
}

pub fn format_dynamic_records<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a DynamicRecord>,
{
    records
        .into_iter()
        .map(DynamicRecord::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_start_skips_quoted_semicolons() {
        assert_eq!(comment_start(r#"t. 60 IN TXT "a;b" ; ID:1"#), Some(19));
        assert_eq!(comment_start(r#"t. 60 IN TXT "a\";b""#), None);
        assert_eq!(comment_start("a. 60 IN A 1.2.3.4"), None);
        assert_eq!(comment_start("x. 60 IN CNAME t;x."), None);
        assert_eq!(comment_start("x. 60 IN CNAME t;x.\t; ID:3"), Some(20));
    }
}
