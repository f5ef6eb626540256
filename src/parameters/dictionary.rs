use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ordered mapping from parameter name to its index in a flat parameter vector
///
/// Indices are always `0..len()` in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ParameterDictionary {
    names: Vec<String>,
}

impl ParameterDictionary {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|key| key == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index(name).is_some()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn values(&self) -> std::ops::Range<usize> {
        0..self.names.len()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, usize)> {
        self.keys().zip(self.values())
    }

    /// Replace key `old` with `new` keeping its index, returns false if `old` is absent
    pub(crate) fn rename(&mut self, old: &str, new: impl Into<String>) -> bool {
        match self.index(old) {
            Some(index) => {
                self.names[index] = new.into();
                true
            }
            None => false,
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ParameterDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_and_values() {
        let dictionary: ParameterDictionary = ["to", "uo", "tE"].into_iter().collect();
        assert_eq!(dictionary.keys().collect::<Vec<_>>(), ["to", "uo", "tE"]);
        assert_eq!(dictionary.values().collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(dictionary.index("tE"), Some(2));
        assert_eq!(dictionary.index("rho"), None);
        assert_eq!(dictionary.name(1), Some("uo"));
    }

    #[test]
    fn rename_keeps_index() {
        let mut dictionary = ParameterDictionary::new(["to", "uo", "tE", "rho"]);
        assert!(dictionary.rename("rho", "logrho"));
        assert!(!dictionary.rename("rho", "lnrho"));
        assert_eq!(dictionary.index("logrho"), Some(3));
        assert!(!dictionary.contains("rho"));
    }

    #[test]
    fn serde_as_list() {
        let dictionary = ParameterDictionary::new(["to", "uo"]);
        let json = serde_json::to_string(&dictionary).unwrap();
        assert_eq!(json, r#"["to","uo"]"#);
        let restored: ParameterDictionary = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, dictionary);
    }
}
