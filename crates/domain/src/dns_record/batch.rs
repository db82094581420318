use super::Record;

/// Parses every line of a response body, keeping the lines that are records.
///
/// Unparseable lines are dropped silently; the result preserves the order of
/// the input.
pub fn parse_records(text: &str) -> Vec<Record> {
    text.lines().filter_map(Record::parse).collect()
}

/// Joins records into a request body, one wire line per record.
pub fn format_records<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
