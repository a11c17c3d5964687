//! Keyspace layout
//!
//! Each record kind owns a key prefix. Listings scan only their own prefix
//! range, and a trust `id` can never shadow a governance `identifier`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyspace {
    Governance,
    Trust,
}

impl Keyspace {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Governance => "governance/",
            Self::Trust => "trust/",
        }
    }

    /// Storage key for a record whose business key is `key`
    pub fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix(), key)
    }

    /// Half-open scan bounds covering every key under the prefix
    pub fn range(&self) -> (String, String) {
        let start = self.prefix().to_string();
        // '/' + 1 == '0'
        let end = format!("{}0", &start[..start.len() - 1]);
        (start, end)
    }
}
