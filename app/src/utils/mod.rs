pub mod jwt;

pub use jwt::{IdentityClaims, decode_identity, encode_identity};
