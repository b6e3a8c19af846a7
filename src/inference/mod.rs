mod artifacts;
mod kmeans;
mod scaler;

pub use artifacts::ArtifactError;
pub use artifacts::InferenceArtifacts;
pub use artifacts::load_artifacts;
pub use artifacts::{KMEANS_FILE, SCALER_FILE};
pub use kmeans::KMeansModel;
pub use scaler::StandardScaler;
