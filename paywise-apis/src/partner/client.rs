use paywise_core::{HttpClient, RequestBody, Result};

use super::types::{
    Company, CompanyListResponse, CreateCompanyParams, CreateUserInviteParams, CreateUserParams,
    ListCompaniesParams, ListUsersParams, OnboardedUser, PartnerInfo, UpdateCompanyParams, User,
    UserInvite, UserListResponse,
};

/// Client for the Partner API surface.
#[derive(Debug, Clone)]
pub struct PartnerClient {
    http: HttpClient,
}

impl PartnerClient {
    /// Creates a new client over the given transport.
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    // ==================== Companies ====================

    /// Lists companies.
    pub async fn list_companies(
        &self,
        params: ListCompaniesParams,
    ) -> Result<CompanyListResponse> {
        let response = self
            .http
            .get("/companies/", Some(params.to_query()), None)
            .await?;
        response.json()
    }

    /// Creates a company.
    pub async fn create_company(&self, params: &CreateCompanyParams) -> Result<Company> {
        let response = self
            .http
            .post("/companies/", Some(RequestBody::json(params)?), None)
            .await?;
        response.json()
    }

    /// Fetches a single company.
    pub async fn get_company(&self, company_id: &str) -> Result<Company> {
        let response = self
            .http
            .get(&format!("/companies/{company_id}/"), None, None)
            .await?;
        response.json()
    }

    /// Updates a company.
    pub async fn update_company(
        &self,
        company_id: &str,
        params: &UpdateCompanyParams,
    ) -> Result<Company> {
        let response = self
            .http
            .patch(
                &format!("/companies/{company_id}/"),
                Some(RequestBody::json(params)?),
                None,
            )
            .await?;
        response.json()
    }

    // ==================== Users ====================

    /// Lists users.
    pub async fn list_users(&self, params: ListUsersParams) -> Result<UserListResponse> {
        let response = self
            .http
            .get("/users/", Some(params.to_query()), None)
            .await?;
        response.json()
    }

    /// Creates a user.
    pub async fn create_user(&self, params: &CreateUserParams) -> Result<User> {
        let response = self
            .http
            .post("/users/", Some(RequestBody::json(params)?), None)
            .await?;
        response.json()
    }

    /// Fetches a single user.
    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        let response = self
            .http
            .get(&format!("/users/{user_id}/"), None, None)
            .await?;
        response.json()
    }

    // ==================== User Invites ====================

    /// Creates a user invite.
    pub async fn create_user_invite(&self, params: &CreateUserInviteParams) -> Result<UserInvite> {
        let response = self
            .http
            .post("/userinvites/", Some(RequestBody::json(params)?), None)
            .await?;
        response.json()
    }

    /// Fetches a single user invite.
    pub async fn get_user_invite(&self, invite_id: &str) -> Result<UserInvite> {
        let response = self
            .http
            .get(&format!("/userinvites/{invite_id}/"), None, None)
            .await?;
        response.json()
    }

    /// Fetches the user onboarded through an accepted invite.
    pub async fn get_onboarded_user(&self, invite_id: &str) -> Result<OnboardedUser> {
        let response = self
            .http
            .get(
                &format!("/userinvites/{invite_id}/get-onboarded-user/"),
                None,
                None,
            )
            .await?;
        response.json()
    }

    // ==================== Info ====================

    /// Fetches information about the partner API token.
    pub async fn get_info(&self) -> Result<Vec<PartnerInfo>> {
        let response = self.http.get("/info/", None, None).await?;
        response.json()
    }
}
