use super::kmeans::KMeansModel;
use super::scaler::StandardScaler;
use crate::core::FEATURE_COUNT;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SCALER_FILE: &str = "scaler.json";
pub const KMEANS_FILE: &str = "kmeans.json";

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid artifact: {0}")]
    Invalid(String),
}

/// The two frozen objects the prediction pipeline depends on. Loaded once
/// at startup and shared read-only for the process lifetime; any defect is
/// fatal before the server accepts traffic.
#[derive(Debug, Clone)]
pub struct InferenceArtifacts {
    pub scaler: StandardScaler,
    pub kmeans: KMeansModel,
}

pub fn load_artifacts(dir: &Path) -> Result<InferenceArtifacts, ArtifactError> {
    let scaler: StandardScaler = load_json(&dir.join(SCALER_FILE))?;
    scaler.check()?;

    let kmeans: KMeansModel = load_json(&dir.join(KMEANS_FILE))?;
    kmeans.check()?;

    if scaler.dim() != FEATURE_COUNT {
        return Err(ArtifactError::Invalid(format!(
            "scaler covers {} features, expected {FEATURE_COUNT}",
            scaler.dim()
        )));
    }
    if kmeans.dim() != scaler.dim() {
        return Err(ArtifactError::Invalid(format!(
            "kmeans centroids have {} coordinates but the scaler covers {} features",
            kmeans.dim(),
            scaler.dim()
        )));
    }

    Ok(InferenceArtifacts { scaler, kmeans })
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
