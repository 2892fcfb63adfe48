/// Paths the guard leaves alone regardless of session state.
///
/// Covers the API surface, health probes and static assets. Matching is
/// case-sensitive; paths are compared as received, before any normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionMatcher {
    prefixes: Vec<String>,
    exact: Vec<String>,
    extensions: Vec<String>,
}

impl ExclusionMatcher {
    pub fn new(
        prefixes: Vec<String>,
        exact: Vec<String>,
        extensions: Vec<String>,
    ) -> Self {
        Self { prefixes, exact, extensions }
    }

    /// True when the path is public and the guard must not interfere
    pub fn is_public(&self, path: &str) -> bool {
        if self.exact.iter().any(|candidate| candidate == path) {
            return true;
        }
        if self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str())) {
            return true;
        }
        self.extensions.iter().any(|ext| path.ends_with(ext.as_str()))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn exact(&self) -> &[String] {
        &self.exact
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

impl Default for ExclusionMatcher {
    fn default() -> Self {
        Self {
            prefixes: vec![
                "/api".to_string(),
                "/assets".to_string(),
                "/health".to_string(),
            ],
            exact: vec!["/favicon.ico".to_string()],
            extensions: vec![
                ".ico".to_string(),
                ".png".to_string(),
                ".jpg".to_string(),
                ".jpeg".to_string(),
                ".svg".to_string(),
                ".gif".to_string(),
                ".webp".to_string(),
            ],
        }
    }
}
