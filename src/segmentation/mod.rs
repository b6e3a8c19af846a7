mod segmenter;

pub use segmenter::PredictError;
pub use segmenter::Prediction;
pub use segmenter::Segmenter;
