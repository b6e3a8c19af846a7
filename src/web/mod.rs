mod cookies;
mod error;
mod extract;
mod handlers;
mod router;
mod state;
mod templates;

pub use error::AppError;
pub use extract::CurrentUser;
pub use router::build_router;
pub use state::AppState;
pub use templates::load_templates;
