use super::artifacts::ArtifactError;
use serde::Deserialize;

/// Frozen K-Means model: a fixed set of centroids in normalized feature
/// space. Assignment is nearest centroid by Euclidean distance; when two
/// centroids are equidistant the lower index wins.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KMeansModel {
    centroids: Vec<Vec<f64>>,
}

impl KMeansModel {
    pub fn new(centroids: Vec<Vec<f64>>) -> Result<KMeansModel, ArtifactError> {
        let Some(first) = centroids.first() else {
            return Err(ArtifactError::Invalid(
                "kmeans model has no centroids".to_string(),
            ));
        };
        let dim = first.len();
        if dim == 0 {
            return Err(ArtifactError::Invalid(
                "kmeans centroids must have at least one coordinate".to_string(),
            ));
        }
        if centroids.iter().any(|c| c.len() != dim) {
            return Err(ArtifactError::Invalid(
                "kmeans centroids have inconsistent dimensions".to_string(),
            ));
        }
        if centroids.iter().flatten().any(|v| !v.is_finite()) {
            return Err(ArtifactError::Invalid(
                "kmeans centroids must be finite".to_string(),
            ));
        }
        Ok(KMeansModel { centroids })
    }

    pub fn cluster_count(&self) -> usize {
        self.centroids.len()
    }

    pub fn dim(&self) -> usize {
        self.centroids.first().map_or(0, Vec::len)
    }

    /// Returns the label of the centroid nearest to `point`.
    ///
    /// Centroids are scanned in index order with a strict `<` comparison,
    /// so ties resolve to the lowest index.
    pub fn predict(&self, point: &[f64]) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (label, centroid) in self.centroids.iter().enumerate() {
            let distance = squared_euclidean(point, centroid);
            if distance < best_distance {
                best = label;
                best_distance = distance;
            }
        }
        best
    }

    pub(super) fn check(&self) -> Result<(), ArtifactError> {
        KMeansModel::new(self.centroids.clone()).map(|_| ())
    }
}

fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
