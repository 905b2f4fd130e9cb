use serde::Serialize;
use std::collections::BTreeMap;

const INCOMPLETE_NOTE: &str =
    "Build information incomplete: set GETHOST_GIT_COMMIT at build time to embed the commit.\n";

/// Build metadata served on `/version`.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub name: String,
    pub version: String,
    pub commit: Option<String>,
    pub build_profile: String,
}

impl VersionInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            commit: None,
            build_profile: if cfg!(debug_assertions) {
                "debug".to_string()
            } else {
                "release".to_string()
            },
        }
    }

    pub fn with_commit(mut self, commit: Option<&str>) -> Self {
        self.commit = commit.filter(|c| !c.is_empty()).map(str::to_string);
        self
    }

    /// Sorted `key: value` lines, plus a note when something is missing.
    pub fn render(&self) -> String {
        let fields: BTreeMap<&str, &str> = BTreeMap::from([
            ("name", self.name.as_str()),
            ("version", self.version.as_str()),
            ("commit", self.commit.as_deref().unwrap_or("")),
            ("build_profile", self.build_profile.as_str()),
        ]);

        let mut out = String::new();
        for (key, value) in &fields {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
        if fields.values().any(|v| v.is_empty()) {
            out.push_str(INCOMPLETE_NOTE);
        }
        out
    }
}
