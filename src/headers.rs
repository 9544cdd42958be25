/*
    * Header normalization: coerce caller input into a flat string map,
    * joining multi-valued entries, and guarantee a Content-Type.
*/

/// Caller-supplied header value: a single string or a sequence of strings.
/// Sequences are joined with ", " when normalized. Scalar inputs (numbers)
/// convert through the `From` impls below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValues {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for HeaderValues {
    fn from(value: &str) -> Self {
        HeaderValues::Single(value.to_owned())
    }
}

impl From<String> for HeaderValues {
    fn from(value: String) -> Self {
        HeaderValues::Single(value)
    }
}

impl From<Vec<String>> for HeaderValues {
    fn from(values: Vec<String>) -> Self {
        HeaderValues::Many(values)
    }
}

impl From<Vec<&str>> for HeaderValues {
    fn from(values: Vec<&str>) -> Self {
        HeaderValues::Many(values.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for HeaderValues {
    fn from(values: [&str; N]) -> Self {
        HeaderValues::Many(values.iter().map(|v| (*v).to_owned()).collect())
    }
}

impl From<&[&str]> for HeaderValues {
    fn from(values: &[&str]) -> Self {
        HeaderValues::Many(values.iter().map(|v| (*v).to_owned()).collect())
    }
}

impl From<bool> for HeaderValues {
    fn from(value: bool) -> Self {
        HeaderValues::Single(value.to_string())
    }
}

impl From<u64> for HeaderValues {
    fn from(value: u64) -> Self {
        HeaderValues::Single(value.to_string())
    }
}

impl From<i64> for HeaderValues {
    fn from(value: i64) -> Self {
        HeaderValues::Single(value.to_string())
    }
}

impl HeaderValues {
    fn join(&self) -> String {
        match self {
            HeaderValues::Single(value) => value.clone(),
            HeaderValues::Many(values) => values.join(", "),
        }
    }
}

/// Normalized header map: one string value per name, original casing and
/// insertion order preserved, lookups case-insensitive. Guaranteed to hold
/// exactly one entry case-insensitively named `content-type`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderSet {
    entries: Vec<(String, String)>,
}

impl HeaderSet {
    /// Flatten caller input and make sure a Content-Type is present.
    /// The first caller-supplied content-type (any casing) wins and repeated
    /// content-type entries collapse onto it; otherwise
    /// `Content-Type: application/json` is appended. Other duplicate names
    /// pass through untouched. Idempotent.
    pub fn normalize(headers: &[(String, HeaderValues)]) -> Self {
        let mut entries: Vec<(String, String)> = Vec::with_capacity(headers.len() + 1);
        let mut has_content_type: bool = false;

        for (name, values) in headers {
            if name.eq_ignore_ascii_case("content-type") {
                if has_content_type {
                    continue;
                }
                has_content_type = true;
            }
            entries.push((name.clone(), values.join()));
        }

        if !has_content_type {
            entries.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }

        HeaderSet { entries }
    }

    /// Case-insensitive lookup; first match wins.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
