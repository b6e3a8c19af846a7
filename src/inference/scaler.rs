use super::artifacts::ArtifactError;
use serde::Deserialize;

/// Frozen per-feature standardization, `(x - center) / scale`.
///
/// The parameters come from training time and are never mutated after
/// load. `transform` is a pure function of its input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StandardScaler {
    center: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(center: Vec<f64>, scale: Vec<f64>) -> Result<StandardScaler, ArtifactError> {
        if center.len() != scale.len() {
            return Err(ArtifactError::Invalid(format!(
                "scaler center has {} entries but scale has {}",
                center.len(),
                scale.len()
            )));
        }
        if center.iter().chain(scale.iter()).any(|v| !v.is_finite()) {
            return Err(ArtifactError::Invalid(
                "scaler parameters must be finite".to_string(),
            ));
        }
        if scale.iter().any(|&s| s == 0.0) {
            return Err(ArtifactError::Invalid(
                "scaler scale entries must be non-zero".to_string(),
            ));
        }
        Ok(StandardScaler { center, scale })
    }

    pub fn dim(&self) -> usize {
        self.center.len()
    }

    /// Normalizes one feature vector. The input must have `dim()` entries;
    /// the loader guarantees this for every vector the pipeline produces.
    pub fn transform(&self, features: &[f64]) -> Vec<f64> {
        features
            .iter()
            .zip(self.center.iter().zip(self.scale.iter()))
            .map(|(x, (center, scale))| (x - center) / scale)
            .collect()
    }

    /// Re-validates parameters that arrived through deserialization,
    /// which bypasses `new`.
    pub(super) fn check(&self) -> Result<(), ArtifactError> {
        StandardScaler::new(self.center.clone(), self.scale.clone()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms_each_feature_independently() {
        let scaler = StandardScaler::new(vec![10.0, 0.0, 50.0], vec![2.0, 1.0, 25.0]).unwrap();
        let out = scaler.transform(&[14.0, 3.0, 0.0]);
        assert_eq!(out, vec![2.0, 3.0, -2.0]);
    }

    #[test]
    fn transform_is_pure() {
        let scaler = StandardScaler::new(vec![38.85, 60.56, 50.2], vec![13.93, 26.19, 25.76]).unwrap();
        let input = [25.0, 40.0, 60.0];
        assert_eq!(scaler.transform(&input), scaler.transform(&input));
    }

    #[test]
    fn rejects_length_mismatch() {
        assert!(StandardScaler::new(vec![0.0, 0.0], vec![1.0]).is_err());
    }

    #[test]
    fn rejects_zero_scale() {
        assert!(StandardScaler::new(vec![0.0], vec![0.0]).is_err());
    }

    #[test]
    fn rejects_non_finite_parameters() {
        assert!(StandardScaler::new(vec![f64::NAN], vec![1.0]).is_err());
        assert!(StandardScaler::new(vec![0.0], vec![f64::INFINITY]).is_err());
    }
}
