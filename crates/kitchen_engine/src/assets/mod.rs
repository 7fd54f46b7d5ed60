//! Late-bound model loading
//!
//! The breakfast model is the only asset the engine waits on. Loaders are
//! polled from the host loop between ticks and report progress and
//! completion as [`AssetEvent`]s.

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Requested path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid model descriptor
    #[error("Failed to parse {path}: {message}")]
    Parse {
        /// Requested path
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// The same path was requested twice
    #[error("Already requested: {0}")]
    AlreadyRequested(PathBuf),
}

/// One named part of a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPart {
    /// Part name; animators key motion off it
    pub name: String,
    /// Offset from the model origin, in model units
    #[serde(default)]
    pub offset: [f32; 3],
    /// Packed `0xRRGGBB` colour; 0 means untextured white
    #[serde(default)]
    pub color: u32,
}

/// A loaded model: a root and its parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Model name
    pub name: String,
    /// Parts, attached under the model root
    #[serde(default)]
    pub parts: Vec<ModelPart>,
}

impl ModelDescriptor {
    /// Parse a RON descriptor
    pub fn from_ron(contents: &str, path: &Path) -> Result<Self, AssetError> {
        ron::from_str(contents).map_err(|e| AssetError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// What a loader reports when polled
#[derive(Debug)]
pub enum AssetEvent {
    /// Fraction complete, `0.0..=1.0`
    Progress(f32),
    /// Load finished
    Loaded(ModelDescriptor),
    /// Load failed; no retry follows
    Failed(AssetError),
}

/// Asynchronous model source
pub trait AssetLoader {
    /// Begin loading `path`
    fn request(&mut self, path: &Path) -> Result<(), AssetError>;

    /// Drain whatever happened since the last poll
    fn poll(&mut self) -> Vec<AssetEvent>;
}

#[derive(Debug)]
enum Stage {
    Queued,
    Reading,
}

/// Loads RON model descriptors from disk
///
/// A request is only queued; the first poll reports that it started and the
/// next one reads, parses and reports the result.
#[derive(Debug, Default)]
pub struct RonModelLoader {
    pending: VecDeque<(PathBuf, Stage)>,
    requested: HashSet<PathBuf>,
}

impl RonModelLoader {
    /// Create an idle loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of loads still in flight
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    fn load(path: &Path) -> Result<ModelDescriptor, AssetError> {
        let contents = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ModelDescriptor::from_ron(&contents, path)
    }
}

impl AssetLoader for RonModelLoader {
    fn request(&mut self, path: &Path) -> Result<(), AssetError> {
        if !self.requested.insert(path.to_path_buf()) {
            return Err(AssetError::AlreadyRequested(path.to_path_buf()));
        }
        log::debug!("Queued model load: {}", path.display());
        self.pending.push_back((path.to_path_buf(), Stage::Queued));
        Ok(())
    }

    fn poll(&mut self) -> Vec<AssetEvent> {
        let mut events = Vec::new();
        let mut still_pending = VecDeque::new();
        for (path, stage) in self.pending.drain(..) {
            match stage {
                Stage::Queued => {
                    events.push(AssetEvent::Progress(0.0));
                    still_pending.push_back((path, Stage::Reading));
                }
                Stage::Reading => {
                    events.push(AssetEvent::Progress(1.0));
                    events.push(match Self::load(&path) {
                        Ok(model) => AssetEvent::Loaded(model),
                        Err(e) => AssetEvent::Failed(e),
                    });
                }
            }
        }
        self.pending = still_pending;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BREAKFAST: &str = r#"(
        name: "cute breakfast",
        parts: [
            (name: "plate", offset: (0.0, 0.0, 0.0), color: 0xFFFFFF),
            (name: "egg", offset: (0.5, 0.2, 0.0), color: 0xFFD166),
            (name: "bacon"),
        ],
    )"#;

    #[test]
    fn test_parse_descriptor() {
        let model = ModelDescriptor::from_ron(BREAKFAST, Path::new("breakfast.ron")).unwrap();
        assert_eq!(model.name, "cute breakfast");
        assert_eq!(model.parts.len(), 3);
        assert_eq!(model.parts[1].offset, [0.5, 0.2, 0.0]);
        assert_eq!(model.parts[2].color, 0);
    }

    #[test]
    fn test_missing_file_reports_failure() {
        let mut loader = RonModelLoader::new();
        loader.request(Path::new("does/not/exist.ron")).unwrap();

        let first = loader.poll();
        assert!(matches!(first.as_slice(), [AssetEvent::Progress(p)] if *p == 0.0));

        let second = loader.poll();
        assert!(matches!(
            second.last(),
            Some(AssetEvent::Failed(AssetError::Io { .. }))
        ));
        assert_eq!(loader.in_flight(), 0);
        assert!(loader.poll().is_empty());
    }

    #[test]
    fn test_loads_from_disk() {
        let path = std::env::temp_dir().join(format!("kitchen_model_{}.ron", std::process::id()));
        std::fs::write(&path, BREAKFAST).unwrap();

        let mut loader = RonModelLoader::new();
        loader.request(&path).unwrap();
        assert!(matches!(
            loader.request(&path),
            Err(AssetError::AlreadyRequested(_))
        ));

        loader.poll();
        let events = loader.poll();
        std::fs::remove_file(&path).ok();
        match events.last() {
            Some(AssetEvent::Loaded(model)) => assert_eq!(model.parts[0].name, "plate"),
            other => panic!("expected a loaded model, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let err = ModelDescriptor::from_ron("(name: 3)", Path::new("bad.ron")).unwrap_err();
        assert!(matches!(err, AssetError::Parse { .. }));
    }
}
