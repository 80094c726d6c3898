//! qs-compatible parsing and encoding

use super::types::{Query, QueryValue};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;

/// Characters left as-is when encoding (RFC 3986 unreserved)
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

impl Query {
    /// Parse a raw query string (with or without the leading `?`)
    ///
    /// `key[N]` values land in index order, ahead of values appended with
    /// `key[]` or a repeated plain `key`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut collected: Vec<(String, Collected)> = Vec::new();

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            let (name, slot) = split_array_key(&key);
            if name.is_empty() {
                continue;
            }
            let index = match collected.iter().position(|(k, _)| k == name) {
                Some(index) => index,
                None => {
                    collected.push((name.to_string(), Collected::default()));
                    collected.len() - 1
                }
            };
            collected[index].1.add(slot, value.into_owned());
        }

        collected
            .into_iter()
            .map(|(key, values)| (key, values.finish()))
            .collect()
    }

    /// Encode back to a query string, without the leading `?`
    ///
    /// An empty query encodes to an empty string.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::with_capacity(self.len());

        for (key, value) in self.iter() {
            match value {
                QueryValue::Single(value) => {
                    pairs.push(format!("{}={}", encode(key), encode(value)));
                }
                QueryValue::List(values) => {
                    for (index, value) in values.iter().enumerate() {
                        let indexed = format!("{key}[{index}]");
                        pairs.push(format!("{}={}", encode(&indexed), encode(value)));
                    }
                }
            }
        }

        pairs.join("&")
    }
}

fn encode(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

/// Where a decoded value goes within its key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// `name=value`
    Plain,
    /// `name[]=value`
    Push,
    /// `name[N]=value`
    At(usize),
}

/// Values gathered for one key while parsing
#[derive(Debug, Default)]
struct Collected {
    indexed: Vec<(usize, String)>,
    appended: Vec<String>,
    bracketed: bool,
}

impl Collected {
    fn add(&mut self, slot: Slot, value: String) {
        match slot {
            Slot::Plain => self.appended.push(value),
            Slot::Push => {
                self.bracketed = true;
                self.appended.push(value);
            }
            Slot::At(index) => {
                self.bracketed = true;
                self.indexed.push((index, value));
            }
        }
    }

    fn finish(mut self) -> QueryValue {
        if !self.bracketed && self.appended.len() == 1 {
            return QueryValue::Single(self.appended.remove(0));
        }
        // stable: duplicate indices keep arrival order
        self.indexed.sort_by_key(|(index, _)| *index);
        let mut values: Vec<String> = self.indexed.into_iter().map(|(_, v)| v).collect();
        values.extend(self.appended);
        QueryValue::List(values)
    }
}

/// Split `name[]` / `name[3]` off their brackets; anything else is returned whole
fn split_array_key(key: &str) -> (&str, Slot) {
    let Some(stripped) = key.strip_suffix(']') else {
        return (key, Slot::Plain);
    };
    let Some(open) = stripped.rfind('[') else {
        return (key, Slot::Plain);
    };
    let index = &stripped[open + 1..];
    if open == 0 || !index.bytes().all(|b| b.is_ascii_digit()) {
        return (key, Slot::Plain);
    }
    let slot = match index.parse::<usize>() {
        Ok(n) => Slot::At(n),
        Err(_) => Slot::Push,
    };
    (&stripped[..open], slot)
}
