//! Registration and statistics endpoints

use super::{
    error::ClientError,
    typed::{AuthenticatedSensoClient, PublicSensoClient},
};
use crate::types::{
    AdminStatistics, NewRegistration, PublicStatistics, Registration, RegistrationFilter,
    StatusUpdate,
};
use reqwest::Method;

/// Public landing page endpoints
impl PublicSensoClient {
    /// Aggregate counters shown on the landing page
    pub async fn public_statistics(&self) -> Result<PublicStatistics, ClientError> {
        let request = self.request(Method::GET, "/api/estadisticas");
        self.execute(request).await
    }

    /// Submit a participant sign-up
    pub async fn create_registration(
        &self,
        registration: &NewRegistration,
    ) -> Result<Registration, ClientError> {
        let request = self
            .request(Method::POST, "/api/inscripciones")
            .json(registration);
        self.execute(request).await
    }
}

/// Back-office endpoints (bearer credential required)
impl AuthenticatedSensoClient {
    pub async fn admin_statistics(&self) -> Result<AdminStatistics, ClientError> {
        let request = self.request(Method::GET, "/api/admin/estadisticas");
        self.execute(request).await
    }

    /// List registrations, optionally filtered by status, category and free-text search
    pub async fn list_registrations(
        &self,
        filter: &RegistrationFilter,
    ) -> Result<Vec<Registration>, ClientError> {
        let request = self
            .request(Method::GET, "/api/admin/inscripciones")
            .query(&filter.query_pairs());
        self.execute(request).await
    }

    /// Approve, reject or reset a registration
    pub async fn update_registration_status(
        &self,
        id: &str,
        update: &StatusUpdate,
    ) -> Result<(), ClientError> {
        let request = self
            .request(Method::PUT, &format!("/api/admin/inscripciones/{id}/estatus"))
            .json(update);
        self.execute_empty(request).await
    }
}
