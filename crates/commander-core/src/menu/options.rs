use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Key/value configuration handed to a newly created tab
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabOptions {
    values: Map<String, Value>,
}

impl TabOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying only a starting `path`
    pub fn with_path(path: &Path) -> Self {
        let mut options = Self::new();
        options.set("path", path.to_string_lossy().into_owned());
        options
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.get("path").and_then(Value::as_str).map(PathBuf::from)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_with_path() {
        let options = TabOptions::with_path(Path::new("/tmp"));
        assert_eq!(options.len(), 1);
        assert_eq!(options.get("path"), Some(&json!("/tmp")));
        assert_eq!(options.path(), Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut options = TabOptions::with_path(Path::new("/var"));
        options.set("lock", true);
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value, json!({"path": "/var", "lock": true}));
    }

    #[test]
    fn test_non_string_path_is_ignored() {
        let mut options = TabOptions::new();
        options.set("path", 3);
        assert_eq!(options.path(), None);
    }
}
