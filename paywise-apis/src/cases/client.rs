use paywise_core::{HttpClient, RequestBody, Result};
use reqwest::multipart::{Form, Part};

use super::types::{
    Case, CaseActivitiesListResponse, CaseAttachment, CaseComment, CaseCommentsListResponse,
    CaseListResponse, CreateCaseCommentParams, CreateCaseParams, ListCasesParams, PageParams,
    UpdateCaseParams,
};

/// Client for the CRM case API surface.
#[derive(Debug, Clone)]
pub struct CaseClient {
    http: HttpClient,
}

impl CaseClient {
    /// Creates a new client over the given transport.
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    // ==================== Cases ====================

    /// Lists cases.
    pub async fn list_cases(&self, params: ListCasesParams) -> Result<CaseListResponse> {
        let response = self
            .http
            .get("/cases", Some(params.to_query()), None)
            .await?;
        response.json()
    }

    /// Fetches a single case.
    pub async fn get_case(&self, case_id: &str) -> Result<Case> {
        let response = self
            .http
            .get(&format!("/cases/{case_id}"), None, None)
            .await?;
        response.json()
    }

    /// Creates a case.
    pub async fn create_case(&self, params: &CreateCaseParams) -> Result<Case> {
        let response = self
            .http
            .post("/cases", Some(RequestBody::json(params)?), None)
            .await?;
        response.json()
    }

    /// Updates a case.
    pub async fn update_case(&self, case_id: &str, params: &UpdateCaseParams) -> Result<Case> {
        let response = self
            .http
            .patch(
                &format!("/cases/{case_id}"),
                Some(RequestBody::json(params)?),
                None,
            )
            .await?;
        response.json()
    }

    /// Deletes a case.
    pub async fn delete_case(&self, case_id: &str) -> Result<()> {
        self.http
            .delete(&format!("/cases/{case_id}"), None, None)
            .await?;
        Ok(())
    }

    /// Closes a case.
    pub async fn close_case(&self, case_id: &str) -> Result<Case> {
        let response = self
            .http
            .post(&format!("/cases/{case_id}/close"), None, None)
            .await?;
        response.json()
    }

    /// Reopens a closed case.
    pub async fn reopen_case(&self, case_id: &str) -> Result<Case> {
        let response = self
            .http
            .post(&format!("/cases/{case_id}/reopen"), None, None)
            .await?;
        response.json()
    }

    /// Assigns a case to a user.
    pub async fn assign_case(&self, case_id: &str, user_id: &str) -> Result<Case> {
        let body = serde_json::json!({ "assignedTo": user_id });
        let response = self
            .http
            .post(
                &format!("/cases/{case_id}/assign"),
                Some(RequestBody::Json(body)),
                None,
            )
            .await?;
        response.json()
    }

    /// Removes the assignee from a case.
    pub async fn unassign_case(&self, case_id: &str) -> Result<Case> {
        let response = self
            .http
            .post(&format!("/cases/{case_id}/unassign"), None, None)
            .await?;
        response.json()
    }

    // ==================== Comments ====================

    /// Lists comments on a case.
    pub async fn list_case_comments(
        &self,
        case_id: &str,
        params: PageParams,
    ) -> Result<CaseCommentsListResponse> {
        let response = self
            .http
            .get(
                &format!("/cases/{case_id}/comments"),
                Some(params.to_query()),
                None,
            )
            .await?;
        response.json()
    }

    /// Adds a comment to a case.
    pub async fn add_case_comment(
        &self,
        case_id: &str,
        params: &CreateCaseCommentParams,
    ) -> Result<CaseComment> {
        let response = self
            .http
            .post(
                &format!("/cases/{case_id}/comments"),
                Some(RequestBody::json(params)?),
                None,
            )
            .await?;
        response.json()
    }

    /// Updates a comment's content.
    pub async fn update_case_comment(
        &self,
        case_id: &str,
        comment_id: &str,
        content: &str,
    ) -> Result<CaseComment> {
        let body = serde_json::json!({ "content": content });
        let response = self
            .http
            .patch(
                &format!("/cases/{case_id}/comments/{comment_id}"),
                Some(RequestBody::Json(body)),
                None,
            )
            .await?;
        response.json()
    }

    /// Deletes a comment.
    pub async fn delete_case_comment(&self, case_id: &str, comment_id: &str) -> Result<()> {
        self.http
            .delete(
                &format!("/cases/{case_id}/comments/{comment_id}"),
                None,
                None,
            )
            .await?;
        Ok(())
    }

    // ==================== Activities ====================

    /// Lists the activity history of a case.
    pub async fn list_case_activities(
        &self,
        case_id: &str,
        params: PageParams,
    ) -> Result<CaseActivitiesListResponse> {
        let response = self
            .http
            .get(
                &format!("/cases/{case_id}/activities"),
                Some(params.to_query()),
                None,
            )
            .await?;
        response.json()
    }

    // ==================== Attachments ====================

    /// Lists attachments of a case.
    pub async fn list_case_attachments(&self, case_id: &str) -> Result<Vec<CaseAttachment>> {
        let response = self
            .http
            .get(&format!("/cases/{case_id}/attachments"), None, None)
            .await?;
        response.json()
    }

    /// Uploads an attachment to a case.
    pub async fn upload_case_attachment(
        &self,
        case_id: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<CaseAttachment> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(filename.to_string()));
        let response = self
            .http
            .post(
                &format!("/cases/{case_id}/attachments"),
                Some(RequestBody::multipart(form)),
                None,
            )
            .await?;
        response.json()
    }

    /// Deletes an attachment.
    pub async fn delete_case_attachment(&self, case_id: &str, attachment_id: &str) -> Result<()> {
        self.http
            .delete(
                &format!("/cases/{case_id}/attachments/{attachment_id}"),
                None,
                None,
            )
            .await?;
        Ok(())
    }
}
