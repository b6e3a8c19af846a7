use crate::auth::{SessionManager, UserRepository};
use crate::segmentation::Segmenter;
use crate::store::ObservationStore;
use crate::viz::ChartRenderer;
use handlebars::Handlebars;
use std::sync::Arc;

/// Everything a request handler needs, shared across the router. The
/// observation store lives here (not in a static) so tests can build an
/// isolated application per case.
#[derive(Clone)]
pub struct AppState {
    pub segmenter: Arc<Segmenter>,
    pub store: Arc<ObservationStore>,
    pub renderer: Arc<ChartRenderer>,
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<SessionManager>,
    pub templates: Arc<Handlebars<'static>>,
}
