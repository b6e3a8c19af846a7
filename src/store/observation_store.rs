use crate::core::Observation;
use std::sync::{Mutex, PoisonError};

/// Append-only, in-memory record of every observation accepted since
/// process start. Insertion order is submission order. Contents are lost
/// on restart; nothing is ever deleted or updated in place.
///
/// The store is owned by whoever builds the application state and handed
/// around behind an `Arc`, never kept as process-wide static state.
#[derive(Debug, Default)]
pub struct ObservationStore {
    observations: Mutex<Vec<Observation>>,
}

impl ObservationStore {
    pub fn new() -> ObservationStore {
        ObservationStore::default()
    }

    /// Appends one observation. Never fails; a poisoned lock is recovered.
    pub fn append(&self, observation: Observation) {
        self.observations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observation);
    }

    /// Returns a point-in-time copy of all observations. Concurrent
    /// appends after the copy is taken are not reflected in it.
    pub fn snapshot(&self) -> Vec<Observation> {
        self.observations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.observations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
