//! Credential adapters: JWT bearer tokens and bcrypt password hashes.

mod bcrypt_hasher;
mod jwt;

pub use bcrypt_hasher::BcryptPasswordHasher;
pub use jwt::JwtTokenService;
