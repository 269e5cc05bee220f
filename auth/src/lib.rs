//! Authentication toolkit library
//!
//! Provides the cryptographic building blocks for the credential service:
//! - Password hashing (Argon2id)
//! - Signed claim tokens (HS256 JWT)
//!
//! The service defines its own claim layout and error taxonomy and adapts these
//! primitives; this crate stays free of domain types so the hashing and signing
//! policy can be tested in isolation.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Signed Tokens
//! ```
//! use auth::JwtHandler;
//! use serde::Deserialize;
//! use serde::Serialize;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Claims {
//!     sub: String,
//!     exp: i64,
//! }
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler
//!     .encode(&Claims { sub: "user123".to_string(), exp: 4102444800 })
//!     .unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
