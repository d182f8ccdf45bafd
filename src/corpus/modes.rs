//! Game modes
//!
//! Each mode draws its answers from one corpus file in a data directory.
//! The `handle` mode falls back to the embedded idioms when its file is
//! missing.

use super::{Corpus, CorpusError, embedded_corpus, loader::load_from_file};
use std::fmt;
use std::path::{Path, PathBuf};

/// Mode used when none is chosen
pub const DEFAULT_MODE: &str = "handle";

/// Directory searched for corpus files when none is given
pub const DEFAULT_DATA_DIR: &str = "data";

/// A game mode: identifier, display name and corpus file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMode {
    pub id: &'static str,
    /// Name of the words in this mode, e.g. 成语
    pub name: &'static str,
    pub file: &'static str,
}

/// All known modes
pub const MODES: &[GameMode] = &[
    GameMode {
        id: "handle",
        name: "成语",
        file: "answers.json",
    },
    GameMode {
        id: "arkdle",
        name: "舟语",
        file: "answers_arknights.json",
    },
    GameMode {
        id: "dordle",
        name: "刀语",
        file: "answers_dota2.json",
    },
];

/// A named category list bound to one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPreset {
    pub mode: &'static str,
    pub categories: &'static [&'static str],
}

/// Integrated Strategies categories of the `arkdle` mode
pub const JI_PRESET: CategoryPreset = CategoryPreset {
    mode: "arkdle",
    categories: &[
        "集成战略事件",
        "集成战略关卡",
        "集成战略分队",
        "集成战略层数",
        "集成战略收藏品",
        "集成战略结局",
        "集成战略节点",
        "集成战略难度选项",
        "刻俄柏的灰蕈迷境中的事件",
        "刻俄柏的灰蕈迷境中的关卡",
        "刻俄柏的灰蕈迷境中的收藏品",
        "傀影与猩红孤钻中的事件",
        "傀影与猩红孤钻中的关卡",
        "傀影与猩红孤钻中的收藏品",
        "探索者的银凇止境中的事件",
        "探索者的银凇止境中的关卡",
        "探索者的银凇止境中的收藏品",
        "水月与深蓝之树中的事件",
        "水月与深蓝之树中的关卡",
        "水月与深蓝之树中的排异反应",
        "水月与深蓝之树中的收藏品",
    ],
};

impl CategoryPreset {
    /// The categories as owned strings, ready for answer selection
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.categories.iter().map(|&c| c.to_string()).collect()
    }
}

/// Look up a mode by identifier
#[must_use]
pub fn mode_by_id(id: &str) -> Option<&'static GameMode> {
    MODES.iter().find(|m| m.id == id)
}

/// Look up a mode by display name
#[must_use]
pub fn mode_by_name(name: &str) -> Option<&'static GameMode> {
    MODES.iter().find(|m| m.name == name)
}

/// Error resolving or loading a mode
#[derive(Debug)]
pub enum ModeError {
    UnknownMode(String),
    UnknownName(String),
    Corpus {
        mode: &'static str,
        source: CorpusError,
    },
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMode(id) => write!(f, "Unknown game mode '{id}'"),
            Self::UnknownName(name) => write!(f, "No game mode plays {name}"),
            Self::Corpus { mode, source } => write!(f, "Mode '{mode}': {source}"),
        }
    }
}

impl std::error::Error for ModeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Corpus { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Resolves modes to corpora found in a data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeRegistry {
    data_dir: PathBuf,
}

impl Default for ModeRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl ModeRegistry {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of a mode's corpus file
    #[must_use]
    pub fn path_of(&self, mode: &GameMode) -> PathBuf {
        self.data_dir.join(mode.file)
    }

    /// Load the corpus of the mode with identifier `id`
    ///
    /// # Errors
    ///
    /// Returns `ModeError::UnknownMode` for an unknown identifier and
    /// `ModeError::Corpus` when the corpus file cannot be loaded.
    pub fn load(&self, id: &str) -> Result<Corpus, ModeError> {
        let mode = mode_by_id(id).ok_or_else(|| ModeError::UnknownMode(id.to_string()))?;
        self.load_mode(mode)
    }

    /// Load the corpus of the mode whose words are called `name`
    ///
    /// # Errors
    ///
    /// Returns `ModeError::UnknownName` when no mode uses `name`, and
    /// `ModeError::Corpus` when the corpus file cannot be loaded.
    pub fn load_by_name(&self, name: &str) -> Result<Corpus, ModeError> {
        let mode = mode_by_name(name).ok_or_else(|| ModeError::UnknownName(name.to_string()))?;
        self.load_mode(mode)
    }

    fn load_mode(&self, mode: &'static GameMode) -> Result<Corpus, ModeError> {
        let path = self.path_of(mode);
        if mode.id == DEFAULT_MODE && !path.exists() {
            tracing::debug!(path = %path.display(), "using embedded idioms");
            return Ok(embedded_corpus());
        }
        load_from_file(&path, mode.id, mode.name).map_err(|source| ModeError::Corpus {
            mode: mode.id,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const DOTA_JSON: &str = r#"[
        {"word": "圣堂刺客", "explanation": "英雄", "category": ["英雄"],
         "pinyin": ["sheng4", "tang2", "ci4", "ke4"]}
    ]"#;

    #[test]
    fn modes_by_id_and_name() {
        assert_eq!(mode_by_id("arkdle").map(|m| m.name), Some("舟语"));
        assert_eq!(mode_by_name("刀语").map(|m| m.id), Some("dordle"));
        assert_eq!(mode_by_name("成语").map(|m| m.file), Some("answers.json"));
        assert!(mode_by_id("wordle").is_none());
        assert!(mode_by_name("谜语").is_none());
    }

    #[test]
    fn ji_preset_targets_arkdle() {
        assert_eq!(JI_PRESET.mode, "arkdle");
        assert!(mode_by_id(JI_PRESET.mode).is_some());
        let categories = JI_PRESET.to_vec();
        assert_eq!(categories.len(), 21);
        assert_eq!(categories[0], "集成战略事件");
        assert!(categories.contains(&"水月与深蓝之树中的排异反应".to_string()));
    }

    #[test]
    fn handle_without_file_uses_embedded_idioms() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = ModeRegistry::new(dir.path()).load("handle").unwrap();
        assert_eq!(corpus.mode(), "handle");
        assert_eq!(corpus.name(), "成语");
        assert!(!corpus.is_empty());
    }

    #[test]
    fn file_mode_loads_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("answers_dota2.json"), DOTA_JSON).unwrap();
        let modes = ModeRegistry::new(dir.path());

        let corpus = modes.load("dordle").unwrap();
        assert_eq!(corpus.mode(), "dordle");
        assert_eq!(corpus.name(), "刀语");
        assert!(corpus.contains("圣堂刺客"));

        let by_name = modes.load_by_name("刀语").unwrap();
        assert_eq!(by_name.len(), 1);
    }

    #[test]
    fn handle_file_takes_precedence_over_embedded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("answers.json"), DOTA_JSON).unwrap();
        let corpus = ModeRegistry::new(dir.path()).load("handle").unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.name(), "成语");
    }

    #[test]
    fn missing_file_and_unknown_mode_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let modes = ModeRegistry::new(dir.path());

        assert!(matches!(
            modes.load("arkdle"),
            Err(ModeError::Corpus {
                mode: "arkdle",
                source: CorpusError::Io(_)
            })
        ));
        assert!(matches!(modes.load("wordle"), Err(ModeError::UnknownMode(_))));
        assert!(matches!(
            modes.load_by_name("谜语"),
            Err(ModeError::UnknownName(_))
        ));
    }
}
