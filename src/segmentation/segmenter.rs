use crate::core::{CustomerProfile, Observation, ProfileError};
use crate::inference::{KMeansModel, StandardScaler};
use crate::store::ObservationStore;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PredictError {
    #[error("invalid input values: {0}")]
    InvalidInput(#[from] ProfileError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub cluster: usize,
    pub summary: String,
}

/// The prediction pipeline: validate → scale → assign → record.
///
/// Owns shared handles to the frozen artifacts and the observation store.
/// Validation failures leave the store untouched; every accepted profile
/// appends exactly one observation before the prediction is returned.
pub struct Segmenter {
    scaler: Arc<StandardScaler>,
    kmeans: Arc<KMeansModel>,
    store: Arc<ObservationStore>,
}

impl Segmenter {
    pub fn new(
        scaler: Arc<StandardScaler>,
        kmeans: Arc<KMeansModel>,
        store: Arc<ObservationStore>,
    ) -> Segmenter {
        Segmenter {
            scaler,
            kmeans,
            store,
        }
    }

    /// Runs the pipeline on raw form input.
    pub fn predict_raw(
        &self,
        age: &str,
        income: &str,
        score: &str,
    ) -> Result<Prediction, PredictError> {
        let profile = CustomerProfile::parse(age, income, score)?;
        Ok(self.predict(profile))
    }

    /// Runs the pipeline on an already-validated profile.
    pub fn predict(&self, profile: CustomerProfile) -> Prediction {
        let normalized = self.scaler.transform(&profile.features());
        let cluster = self.kmeans.predict(&normalized);
        self.store.append(Observation::new(profile, cluster));
        Prediction {
            cluster,
            summary: format!("Customer belongs to Cluster {cluster}"),
        }
    }

    pub fn cluster_count(&self) -> usize {
        self.kmeans.cluster_count()
    }
}
