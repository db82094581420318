#![allow(dead_code)]
use landns_client_domain::Record;

/// One record of every supported variant, with non-default TTLs.
pub fn one_of_each() -> Vec<Record> {
    vec![
        Record::a("example.com.", "192.0.2.1").with_ttl(60),
        Record::aaaa("example.com.", "2001:db8::1").with_ttl(120),
        Record::cname("www.example.com.", "example.com.").with_ttl(300),
        Record::ptr("1.2.0.192.in-addr.arpa.", "example.com.").with_ttl(600),
        Record::txt("example.com.", "v=spf1 -all").with_ttl(900),
        Record::srv_weighted("_http._tcp.example.com.", "web.example.com.", 8080, 10, 5)
            .with_ttl(30),
    ]
}

/// Builds wire lines with arbitrary separators, for whitespace tolerance tests.
pub struct RecordLine {
    tokens: Vec<String>,
    separator: String,
}

impl RecordLine {
    pub fn new(name: &str, ttl: &str, record_type: &str) -> Self {
        Self {
            tokens: vec![
                name.to_string(),
                ttl.to_string(),
                "IN".to_string(),
                record_type.to_string(),
            ],
            separator: " ".to_string(),
        }
    }

    pub fn rdata(mut self, token: &str) -> Self {
        self.tokens.push(token.to_string());
        self
    }

    pub fn separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    pub fn build(&self) -> String {
        self.tokens.join(&self.separator)
    }
}
