use std::time::Duration;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::repo_types::User;
use crate::config::JwtConfig;
use crate::error::ApiError;
use crate::state::AppState;

/// Identity carried inside a signed token. Built from the stored user at
/// issuance; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub name: String,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
    pub iss: String,
    pub aud: String,
}

/// JWT signing and verification keys plus token settings, derived from config.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub issuer: String,
    pub audience: String,
    pub ttl: Duration,
}

impl JwtKeys {
    pub fn from_config(cfg: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(cfg.secret.as_bytes()),
            decoding: DecodingKey::from_secret(cfg.secret.as_bytes()),
            issuer: cfg.issuer.clone(),
            audience: cfg.audience.clone(),
            ttl: Duration::from_secs((cfg.ttl_minutes as u64) * 60),
        }
    }

    pub fn sign(&self, user: &User) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            sub: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user.id, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.sub, "jwt verified");
        Ok(data.claims)
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        Self::from_config(&state.config.jwt)
    }
}

/// Access gate: extracts and verifies the bearer token, handing the decoded
/// claims to the handler. Two outcomes only: pass through with an identity,
/// or a terminal 401.
#[derive(Debug)]
pub struct AuthUser(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("missing Authorization header".into()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::Unauthorized("invalid auth scheme".into()))?;

        match keys.verify(token) {
            Ok(claims) => Ok(AuthUser(claims)),
            Err(_) => {
                warn!("invalid or expired token");
                Err(ApiError::Unauthorized("invalid or expired token".into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use axum::http::{header::AUTHORIZATION, Request, StatusCode};
    use axum::response::IntoResponse;

    fn test_config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.into(),
            issuer: "test-issuer".into(),
            audience: "test-aud".into(),
            ttl_minutes: 5,
        }
    }

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Grace".into(),
            email: "grace@example.com".into(),
            password_hash: "unused".into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn sign_then_verify_recovers_identity() {
        let keys = JwtKeys::from_config(&test_config("dev-secret"));
        let user = test_user();
        let token = keys.sign(&user).expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.name, user.name);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.iss, "test-issuer");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn verify_rejects_token_signed_with_other_secret() {
        let signer = JwtKeys::from_config(&test_config("secret-a"));
        let verifier = JwtKeys::from_config(&test_config("secret-b"));
        let token = signer.sign(&test_user()).expect("sign");
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_tampered_signature() {
        let keys = JwtKeys::from_config(&test_config("dev-secret"));
        let token = keys.sign(&test_user()).expect("sign");

        // Flip the first character of the signature segment.
        let (head, sig) = token.rsplit_once('.').expect("compact jwt");
        let mut sig_chars: Vec<char> = sig.chars().collect();
        sig_chars[0] = if sig_chars[0] == 'A' { 'B' } else { 'A' };
        let tampered = format!("{head}.{}", sig_chars.into_iter().collect::<String>());

        assert_ne!(token, tampered);
        assert!(keys.verify(&tampered).is_err());
    }

    #[test]
    fn verify_rejects_garbage() {
        let keys = JwtKeys::from_config(&test_config("dev-secret"));
        assert!(keys.verify("not.a.token").is_err());
        assert!(keys.verify("").is_err());
    }

    async fn run_gate(state: &AppState, header: Option<&str>) -> Result<AuthUser, ApiError> {
        let mut builder = Request::builder().uri("/auth-locked");
        if let Some(h) = header {
            builder = builder.header(AUTHORIZATION, h);
        }
        let req = builder.body(()).unwrap();
        let (mut parts, _) = req.into_parts();
        AuthUser::from_request_parts(&mut parts, state).await
    }

    #[tokio::test]
    async fn gate_passes_valid_bearer_token() {
        let state = AppState::fake();
        let keys = JwtKeys::from_ref(&state);
        let user = test_user();
        let token = keys.sign(&user).expect("sign");

        let AuthUser(claims) = run_gate(&state, Some(&format!("Bearer {token}")))
            .await
            .expect("gate should pass");
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
    }

    #[tokio::test]
    async fn gate_rejects_missing_header_and_bad_scheme() {
        let state = AppState::fake();

        let err = run_gate(&state, None).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);

        let err = run_gate(&state, Some("Basic abc123")).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn gate_rejects_token_from_other_secret() {
        let state = AppState::fake();
        let foreign = JwtKeys::from_config(&test_config("some-other-secret"));
        let token = foreign.sign(&test_user()).expect("sign");

        let err = run_gate(&state, Some(&format!("Bearer {token}")))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }
}
