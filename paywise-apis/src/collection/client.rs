use paywise_core::{HttpClient, RequestBody, Result};
use reqwest::multipart::{Form, Part};

use super::types::{
    Claim, ClaimDocument, ClaimListResponse, CreateClaimParams, CreateDebtorParams,
    CreatePaymentParams, Debtor, DebtorListResponse, ListClaimsParams, ListDebtorsParams,
    ListMandateDetailsParams, ListMandatesParams, ListPaymentsParams, ListRequestsToClientParams,
    ListStatementsParams, Mandate, MandateDetailsListResponse, MandateListResponse, Payment,
    PaymentListResponse, ReleaseClaimParams, RequestToClient, RequestToClientListResponse,
    Statement, StatementListResponse, SubmitRequestAnswerParams, UserInfo,
};

/// Client for the collection-law API surface.
///
/// Every method is a pass-through: one fixed path/verb pair, one transport
/// call, one typed result. Validation and state transitions belong to the
/// remote service.
#[derive(Debug, Clone)]
pub struct CollectionClient {
    http: HttpClient,
}

impl CollectionClient {
    /// Creates a new client over the given transport.
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    // ==================== Claims ====================

    /// Lists claims.
    pub async fn list_claims(&self, params: ListClaimsParams) -> Result<ClaimListResponse> {
        let response = self
            .http
            .get("/v1/claims/", Some(params.to_query()), None)
            .await?;
        response.json()
    }

    /// Fetches a single claim.
    pub async fn get_claim(&self, claim_id: &str) -> Result<Claim> {
        let response = self
            .http
            .get(&format!("/v1/claims/{claim_id}/"), None, None)
            .await?;
        response.json()
    }

    /// Creates a claim in `created` state.
    pub async fn create_claim(&self, params: &CreateClaimParams) -> Result<Claim> {
        let response = self
            .http
            .post("/v1/claims/", Some(RequestBody::json(params)?), None)
            .await?;
        response.json()
    }

    /// Releases a claim into collection.
    pub async fn release_claim(
        &self,
        claim_id: &str,
        params: &ReleaseClaimParams,
    ) -> Result<Claim> {
        let response = self
            .http
            .patch(
                &format!("/v1/claims/{claim_id}/"),
                Some(RequestBody::json(params)?),
                None,
            )
            .await?;
        response.json()
    }

    /// Uploads a document (invoice, reminder, ...) to a claim.
    pub async fn upload_claim_document(
        &self,
        claim_id: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<ClaimDocument> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(filename.to_string()));
        let response = self
            .http
            .post(
                &format!("/v1/claims/{claim_id}/documents/"),
                Some(RequestBody::multipart(form)),
                None,
            )
            .await?;
        response.json()
    }

    // ==================== Debtors ====================

    /// Lists debtors.
    pub async fn list_debtors(&self, params: ListDebtorsParams) -> Result<DebtorListResponse> {
        let response = self
            .http
            .get("/v1/debtors/", Some(params.to_query()), None)
            .await?;
        response.json()
    }

    /// Fetches a single debtor.
    pub async fn get_debtor(&self, debtor_id: &str) -> Result<Debtor> {
        let response = self
            .http
            .get(&format!("/v1/debtors/{debtor_id}/"), None, None)
            .await?;
        response.json()
    }

    /// Creates a debtor.
    pub async fn create_debtor(&self, params: &CreateDebtorParams) -> Result<Debtor> {
        let response = self
            .http
            .post("/v1/debtors/", Some(RequestBody::json(params)?), None)
            .await?;
        response.json()
    }

    // ==================== Mandates ====================

    /// Lists mandates.
    pub async fn list_mandates(&self, params: ListMandatesParams) -> Result<MandateListResponse> {
        let response = self
            .http
            .get("/v1/mandates/", Some(params.to_query()), None)
            .await?;
        response.json()
    }

    /// Fetches a single mandate.
    pub async fn get_mandate(&self, mandate_id: &str) -> Result<Mandate> {
        let response = self
            .http
            .get(&format!("/v1/mandates/{mandate_id}/"), None, None)
            .await?;
        response.json()
    }

    // ==================== Payments ====================

    /// Lists payments.
    pub async fn list_payments(&self, params: ListPaymentsParams) -> Result<PaymentListResponse> {
        let response = self
            .http
            .get("/v1/payments/", Some(params.to_query()), None)
            .await?;
        response.json()
    }

    /// Fetches a single payment.
    pub async fn get_payment(&self, payment_id: &str) -> Result<Payment> {
        let response = self
            .http
            .get(&format!("/v1/payments/{payment_id}/"), None, None)
            .await?;
        response.json()
    }

    /// Records a payment received directly from a debtor.
    pub async fn create_payment(&self, params: &CreatePaymentParams) -> Result<Payment> {
        let response = self
            .http
            .post("/v1/payments/", Some(RequestBody::json(params)?), None)
            .await?;
        response.json()
    }

    // ==================== Statements ====================

    /// Lists statements.
    pub async fn list_statements(
        &self,
        params: ListStatementsParams,
    ) -> Result<StatementListResponse> {
        let response = self
            .http
            .get("/v1/statements/", Some(params.to_query()), None)
            .await?;
        response.json()
    }

    /// Fetches a single statement.
    pub async fn get_statement(&self, statement_id: &str) -> Result<Statement> {
        let response = self
            .http
            .get(&format!("/v1/statements/{statement_id}/"), None, None)
            .await?;
        response.json()
    }

    /// Lists the per-mandate details of a statement.
    pub async fn list_statement_mandate_details(
        &self,
        statement_id: &str,
        params: ListMandateDetailsParams,
    ) -> Result<MandateDetailsListResponse> {
        let response = self
            .http
            .get(
                &format!("/v1/statements/{statement_id}/mandate-details"),
                Some(params.to_query()),
                None,
            )
            .await?;
        response.json()
    }

    // ==================== Requests to Client ====================

    /// Lists requests addressed to the client.
    pub async fn list_requests_to_client(
        &self,
        params: ListRequestsToClientParams,
    ) -> Result<RequestToClientListResponse> {
        let response = self
            .http
            .get("/v1/requests-to-client/", Some(params.to_query()), None)
            .await?;
        response.json()
    }

    /// Fetches a single request to the client.
    pub async fn get_request_to_client(&self, request_id: &str) -> Result<RequestToClient> {
        let response = self
            .http
            .get(&format!("/v1/requests-to-client/{request_id}/"), None, None)
            .await?;
        response.json()
    }

    /// Submits an answer to a request.
    pub async fn answer_request_to_client(
        &self,
        request_id: &str,
        params: &SubmitRequestAnswerParams,
    ) -> Result<RequestToClient> {
        let response = self
            .http
            .post(
                &format!("/v1/requests-to-client/{request_id}/answer/"),
                Some(RequestBody::json(params)?),
                None,
            )
            .await?;
        response.json()
    }

    // ==================== User Info ====================

    /// Fetches information about the API token's user.
    pub async fn get_user_info(&self) -> Result<UserInfo> {
        let response = self.http.get("/v1/userinfo/", None, None).await?;
        response.json()
    }
}
