pub mod argon2;
pub mod jwt;

pub use argon2::Argon2PasswordHasher;
pub use jwt::JwtTokenIssuer;
