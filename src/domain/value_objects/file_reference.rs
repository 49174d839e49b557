use serde::{Deserialize, Serialize};

/// Opaque locator handed out by the content store. It is a single path
/// segment relative to the store root, never an absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileReference(String);

impl FileReference {
    pub fn new(reference: String) -> Result<Self, String> {
        if reference.trim().is_empty() {
            return Err("File reference cannot be empty".to_string());
        }

        if reference.contains('/') || reference.contains('\\') {
            return Err("File reference must not contain path separators".to_string());
        }

        if reference.starts_with('.') {
            return Err("File reference must not start with '.'".to_string());
        }

        Ok(Self(reference))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FileReference> for String {
    fn from(reference: FileReference) -> Self {
        reference.0
    }
}

impl TryFrom<String> for FileReference {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FileReference::new(value)
    }
}
