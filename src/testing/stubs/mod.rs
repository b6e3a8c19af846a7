pub mod memory_users;

pub use memory_users::InMemoryUserRepository;
