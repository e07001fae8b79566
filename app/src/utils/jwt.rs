use chrono::Utc;
use jsonwebtoken::{Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;

const JWT_EXPIRATION_DURATION: Duration = Duration::from_secs(60 * 60); // 1 hour

/// Claims issued by the identity provider. Only the subject is trusted for
/// authorization; role and enabled state come from the profile row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityClaims {
    pub sub: String,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Issues a token the way the identity provider does. The server only verifies
/// tokens; this exists for local tooling and the HTTP test suite.
pub fn encode_identity(
    config: &Config,
    sub: &str,
    email: Option<&str>,
) -> Result<String, anyhow::Error> {
    let exp = (Utc::now() + JWT_EXPIRATION_DURATION).timestamp();

    let claims = IdentityClaims {
        sub: sub.to_string(),
        exp,
        email: email.map(str::to_string),
    };
    encode(&Header::default(), &claims, &config.encoding_key)
        .map_err(|e| anyhow::anyhow!("Failed to encode identity token: {}", e))
}

pub fn decode_identity(config: &Config, token: &str) -> Result<IdentityClaims, anyhow::Error> {
    let mut validation = Validation::default();
    // provider tokens carry an audience we do not pin
    validation.validate_aud = false;

    let token_data = decode::<IdentityClaims>(token, &config.decoding_key, &validation)
        .map_err(|e| anyhow::anyhow!("Failed to decode identity token: {}", e))?;
    Ok(token_data.claims)
}
