use std::collections::HashMap;
use std::sync::RwLock;

use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Role, User, UserInfo};

/// In-memory session registry: opaque token to the authenticated user.
/// Tokens are random UUIDs and live until the process exits.
#[derive(Default)]
pub struct Sessions {
    tokens: RwLock<HashMap<String, UserInfo>>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh token for a successfully authenticated user. Only the
    /// sanitized user view goes into the registry; the password stays in the
    /// seed file.
    pub fn issue(&self, user: &User) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(token.clone(), UserInfo::from(user));
        token
    }

    pub fn resolve(&self, token: &str) -> Option<UserInfo> {
        self.tokens
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(token)
            .cloned()
    }
}

/// Resolves the caller from a Bearer header or a `token` query parameter
/// (the query form serves calendar subscriptions, which cannot set headers).
pub fn verify_token(
    sessions: &Sessions,
    auth: Option<Authorization<Bearer>>,
    query_token: Option<&str>,
) -> Result<UserInfo, ApiError> {
    let provided_token = auth
        .map(|a| a.token().to_string())
        .or_else(|| query_token.map(|s| s.to_string()));
    match provided_token.and_then(|token| sessions.resolve(&token)) {
        Some(user) => Ok(user),
        None => Err(ApiError::Unauthorized(
            "Invalid authentication token".into(),
        )),
    }
}

/// The one typed permission check: only coaches create bookings. Done at the
/// handler boundary so the core stays role-free.
pub fn require_coach(user: &UserInfo) -> Result<(), ApiError> {
    if user.role == Role::Coach {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "Only coaches can add bookings".into(),
        ))
    }
}
