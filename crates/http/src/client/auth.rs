//! Authentication endpoints

use super::{error::ClientError, typed::PublicSensoClient};
use crate::types::{LoginRequest, LoginResponse};

impl PublicSensoClient {
    /// Exchange e-mail and password for a bearer token and the user's profile
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/auth/login")
            .json(request);
        self.execute(req).await
    }
}
