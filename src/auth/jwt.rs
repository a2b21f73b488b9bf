use anyhow::Result;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::RoleEnum;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub role: RoleEnum,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and validates HS256 access tokens.
#[derive(Clone)]
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let secret = secret.as_ref();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    pub fn create_jwt(&self, user_id: Uuid, role: RoleEnum, expires_in: i64) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: user_id,
            role,
            iat: now,
            exp: now + expires_in,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Fails on a bad signature, an expired token or malformed claims.
    pub fn decode_jwt(&self, token: &str) -> Result<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let data = decode::<TokenClaims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_subject_and_role() {
        let manager = JwtManager::new("test-secret");
        let user_id = Uuid::new_v4();
        let token = manager.create_jwt(user_id, RoleEnum::Teacher, 60).unwrap();

        let claims = manager.decode_jwt(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.role, RoleEnum::Teacher);
        assert_eq!(claims.exp - claims.iat, 60);
    }

    #[test]
    fn expired_token_is_rejected() {
        let manager = JwtManager::new("test-secret");
        let token = manager
            .create_jwt(Uuid::new_v4(), RoleEnum::Student, -120)
            .unwrap();
        assert!(manager.decode_jwt(&token).is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = JwtManager::new("secret-a");
        let verifier = JwtManager::new("secret-b");
        let token = issuer.create_jwt(Uuid::new_v4(), RoleEnum::Admin, 60).unwrap();
        assert!(verifier.decode_jwt(&token).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let manager = JwtManager::new("test-secret");
        assert!(manager.decode_jwt("not.a.token").is_err());
    }
}
