use anyhow::Result;
use axum::http::HeaderMap;
use uuid::Uuid;

/// Header the upstream identity service injects after authenticating the
/// session. Requests arriving without it are unauthenticated.
pub const AUTH_USER_HEADER: &str = "x-auth-user-id";

#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: Uuid,
}

#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn resolve(&self, headers: &HeaderMap) -> Result<Option<AuthUser>>;
}

pub struct HeaderIdentity;

#[async_trait::async_trait]
impl IdentityProvider for HeaderIdentity {
    async fn resolve(&self, headers: &HeaderMap) -> Result<Option<AuthUser>> {
        let user = headers
            .get(AUTH_USER_HEADER)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| Uuid::parse_str(s.trim()).ok())
            .map(|id| AuthUser { id });
        Ok(user)
    }
}

/// Resolves every request to the same caller (or to nobody). Used in tests
/// and local harnesses where no identity service fronts the API.
pub struct StaticIdentity {
    pub user: Option<AuthUser>,
}

#[async_trait::async_trait]
impl IdentityProvider for StaticIdentity {
    async fn resolve(&self, _headers: &HeaderMap) -> Result<Option<AuthUser>> {
        Ok(self.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn header_identity_parses_uuid() {
        let mut headers = HeaderMap::new();
        let id = Uuid::new_v4();
        headers.insert(AUTH_USER_HEADER, id.to_string().parse().unwrap());
        let resolved = HeaderIdentity.resolve(&headers).await.unwrap();
        assert_eq!(resolved.unwrap().id, id);
    }

    #[tokio::test]
    async fn malformed_or_missing_header_is_unauthenticated() {
        let empty = HeaderMap::new();
        assert!(HeaderIdentity.resolve(&empty).await.unwrap().is_none());

        let mut headers = HeaderMap::new();
        headers.insert(AUTH_USER_HEADER, "not-a-uuid".parse().unwrap());
        assert!(HeaderIdentity.resolve(&headers).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn static_identity_ignores_headers() {
        let user = AuthUser { id: Uuid::new_v4() };
        let provider = StaticIdentity { user: Some(user) };
        let resolved = provider.resolve(&HeaderMap::new()).await.unwrap();
        assert_eq!(resolved.unwrap().id, user.id);
    }
}
