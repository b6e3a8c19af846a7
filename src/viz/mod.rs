mod chart_kind;
mod renderer;

pub use chart_kind::ChartKind;
pub use renderer::ChartRenderer;
pub use renderer::ChartSet;
pub use renderer::VizError;
pub use renderer::cluster_counts;
