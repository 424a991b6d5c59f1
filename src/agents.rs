//! Runtime-installed agents: user-defined pseudo-applications that share
//! the launch surface with built-ins.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("failed to read agent manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse agent manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate agent id {0:?} in manifest")]
    DuplicateId(String),
}

/// Full definition of an installed agent. Windows opened for an agent carry
/// an `Arc` snapshot of this; the directory may change afterwards without
/// affecting them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub persona: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
}

/// Live registry of installed agents, in install order.
#[derive(Debug, Default)]
pub struct AgentDirectory {
    agents: Vec<Arc<AgentDefinition>>,
}

impl AgentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install or replace the agent with the same id.
    pub fn install(&mut self, definition: AgentDefinition) -> Arc<AgentDefinition> {
        let definition = Arc::new(definition);
        if let Some(slot) = self.agents.iter_mut().find(|a| a.id == definition.id) {
            *slot = Arc::clone(&definition);
        } else {
            tracing::debug!(agent = %definition.id, "installed agent");
            self.agents.push(Arc::clone(&definition));
        }
        definition
    }

    /// Remove an agent by id. Already-open profile windows keep their
    /// snapshot; only future opens are affected.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.agents.len();
        self.agents.retain(|a| a.id != id);
        before != self.agents.len()
    }

    pub fn get(&self, id: &str) -> Option<Arc<AgentDefinition>> {
        self.agents.iter().find(|a| a.id == id).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<AgentDefinition>> {
        self.agents.iter()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Load a JSON manifest (an array of agent definitions) and install
    /// every entry. Duplicate ids within one manifest are rejected rather
    /// than silently last-write-wins.
    pub fn load_manifest(&mut self, path: &Path) -> Result<usize, AgentError> {
        let raw = fs::read_to_string(path)?;
        let definitions: Vec<AgentDefinition> = serde_json::from_str(&raw)?;
        let mut seen = std::collections::HashSet::new();
        for definition in &definitions {
            if !seen.insert(definition.id.as_str()) {
                return Err(AgentError::DuplicateId(definition.id.clone()));
            }
        }
        let count = definitions.len();
        for definition in definitions {
            self.install(definition);
        }
        tracing::info!(count, path = %path.display(), "loaded agent manifest");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn nova() -> AgentDefinition {
        AgentDefinition {
            id: "nova".into(),
            name: "Nova".into(),
            persona: "travel concierge".into(),
            capabilities: vec!["search".into()],
        }
    }

    #[test]
    fn install_replace_remove() {
        let mut dir = AgentDirectory::new();
        dir.install(nova());
        assert_eq!(dir.len(), 1);
        let mut renamed = nova();
        renamed.name = "Nova II".into();
        dir.install(renamed);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("nova").unwrap().name, "Nova II");
        assert!(dir.remove("nova"));
        assert!(!dir.remove("nova"));
        assert!(dir.is_empty());
    }

    #[test]
    fn snapshot_survives_removal() {
        let mut dir = AgentDirectory::new();
        let snapshot = dir.install(nova());
        dir.remove("nova");
        assert_eq!(snapshot.name, "Nova");
    }

    #[test]
    fn manifest_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"nova","name":"Nova"}},{{"id":"atlas","name":"Atlas","persona":"researcher"}}]"#
        )
        .unwrap();
        let mut dir = AgentDirectory::new();
        assert_eq!(dir.load_manifest(file.path()).unwrap(), 2);
        assert_eq!(dir.get("atlas").unwrap().persona, "researcher");
    }

    #[test]
    fn manifest_rejects_duplicates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"nova","name":"Nova"}},{{"id":"nova","name":"Nova Again"}}]"#
        )
        .unwrap();
        let mut dir = AgentDirectory::new();
        assert!(matches!(
            dir.load_manifest(file.path()),
            Err(AgentError::DuplicateId(_))
        ));
    }

    #[test]
    fn manifest_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let mut dir = AgentDirectory::new();
        assert!(matches!(
            dir.load_manifest(file.path()),
            Err(AgentError::Parse(_))
        ));
    }
}
