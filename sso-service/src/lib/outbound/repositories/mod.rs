pub mod application;
pub mod user;

pub use application::PostgresApplicationRepository;
pub use user::PostgresUserRepository;
