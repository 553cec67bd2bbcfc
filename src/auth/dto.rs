use serde::{Deserialize, Serialize};

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after registration or login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_shape() {
        let json = serde_json::to_string(&TokenResponse {
            token: "abc.def.ghi".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"token":"abc.def.ghi"}"#);
    }

    #[test]
    fn register_request_requires_all_fields() {
        let err = serde_json::from_str::<RegisterRequest>(r#"{"email":"a@b.c"}"#);
        assert!(err.is_err());
    }
}
