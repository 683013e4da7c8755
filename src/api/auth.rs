//! Auth Endpoints

use crate::models::{Credentials, LoginResponse};
use crate::session::SessionProvider;

use super::{ApiClient, ApiResult};

impl<S: SessionProvider> ApiClient<S> {
    /// `POST /api/login`. Unauthenticated; does not touch the session.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        let request = self.http.post(self.url("/api/login")).json(credentials);
        self.send(request).await
    }
}
