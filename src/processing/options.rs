use indexmap::IndexMap;

use crate::error::{KldError, KldResult};

/// Processor options passed by the host compiler (`-P key=value`).
///
/// Insertion order is preserved so that option dumps match the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessorOptions {
    values: IndexMap<String, String>,
}

impl ProcessorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key=value` arguments. Keys are trimmed; values are kept as
    /// written, so `key=` yields an empty value.
    pub fn parse<I, S>(arguments: I) -> KldResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::new();
        for argument in arguments {
            let argument = argument.as_ref();
            let Some((key, value)) = argument.split_once('=') else {
                return Err(KldError::InvalidOption(argument.to_string()));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(KldError::InvalidOption(argument.to_string()));
            }
            options.insert(key, value);
        }
        Ok(options)
    }

    /// Set an option, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// `true`/`false` in any case; anything else reads as absent.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        let value = self.get(key)?.trim();
        if value.eq_ignore_ascii_case("true") {
            Some(true)
        } else if value.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.values
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProcessorOptions {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut options = Self::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}
