mod password;
mod repository;
mod rest_repository;
mod session;
mod user;

pub use password::hash_password;
pub use password::verify_password;
pub use repository::IdentityError;
pub use repository::UserRepository;
pub use rest_repository::RestUserRepository;
pub use session::SESSION_COOKIE;
pub use session::SessionClaims;
pub use session::SessionManager;
pub use user::UserRecord;
