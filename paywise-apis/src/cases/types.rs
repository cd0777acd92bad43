//! Wire types for the CRM case surface.
//!
//! This surface speaks camelCase JSON; enum values stay snake_case strings
//! (`"in_progress"`), matching the remote schema.

use paywise_core::QueryParams;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Case lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Open,
    InProgress,
    Pending,
    Resolved,
    Closed,
}

/// Case priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CasePriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}

/// Full case object. `type` is an open union (`billing`, `dispute`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: CaseStatus,
    pub priority: CasePriority,
    #[serde(rename = "type", default)]
    pub case_type: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub closed_at: Option<String>,
}

/// Parameters for creating a case.
///
/// `extra` is the catch-all bucket for fields outside the documented
/// schema; its entries are flattened into the request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseParams {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<CasePriority>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub case_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parameters for updating a case.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCaseParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CaseStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<CasePriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Filter, pagination and sort parameters for listing cases.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListCasesParams {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub case_type: Option<String>,
    pub customer_id: Option<String>,
    pub assigned_to: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl ListCasesParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("status", self.status.as_deref())
            .with_opt("priority", self.priority.as_deref())
            .with_opt("type", self.case_type.as_deref())
            .with_opt("customerId", self.customer_id.as_deref())
            .with_opt("assignedTo", self.assigned_to.as_deref())
            .with_opt("page", self.page)
            .with_opt("limit", self.limit)
            .with_opt("sortBy", self.sort_by.as_deref())
            .with_opt("sortOrder", self.sort_order)
    }
}

/// Plain page/limit pagination for case sub-resources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("page", self.page)
            .with_opt("limit", self.limit)
    }
}

/// Case list response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseListResponse {
    pub cases: Vec<Case>,
    pub total: u64,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Comment on a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseComment {
    pub id: String,
    #[serde(default)]
    pub case_id: Option<String>,
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub is_internal: Option<bool>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Parameters for adding a comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseCommentParams {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_internal: Option<bool>,
}

/// Comment list response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseCommentsListResponse {
    pub comments: Vec<CaseComment>,
    pub total: u64,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Audit-trail activity on a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseActivity {
    pub id: String,
    #[serde(default)]
    pub case_id: Option<String>,
    pub action: String,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
    pub created_at: String,
}

/// Activity list response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseActivitiesListResponse {
    pub activities: Vec<CaseActivity>,
    pub total: u64,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// File attached to a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseAttachment {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_uses_camel_case_wire_names() {
        let json = serde_json::json!({
            "id": "case-1",
            "title": "Payment Processing Issue",
            "status": "in_progress",
            "priority": "high",
            "type": "billing",
            "customerId": "customer-12345",
            "assignedTo": "agent-789",
            "tags": ["payment", "urgent"],
            "createdAt": "2024-01-15T10:00:00Z",
            "updatedAt": "2024-01-16T09:00:00Z"
        });

        let case: Case = serde_json::from_value(json).unwrap();
        assert_eq!(case.status, CaseStatus::InProgress);
        assert_eq!(case.priority, CasePriority::High);
        assert_eq!(case.case_type.as_deref(), Some("billing"));
        assert_eq!(case.customer_id.as_deref(), Some("customer-12345"));
        assert_eq!(case.assigned_to.as_deref(), Some("agent-789"));
    }

    #[test]
    fn test_create_case_params_flatten_extra_fields() {
        let mut params = CreateCaseParams {
            title: "t".to_string(),
            priority: Some(CasePriority::High),
            ..Default::default()
        };
        params
            .extra
            .insert("externalRef".to_string(), serde_json::json!("x-1"));

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["title"], "t");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["externalRef"], "x-1");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_list_cases_params_use_camel_case_query_keys() {
        let params = ListCasesParams {
            status: Some("open".to_string()),
            sort_by: Some("createdAt".to_string()),
            sort_order: Some(SortOrder::Desc),
            customer_id: Some("customer-1".to_string()),
            ..Default::default()
        };
        let query = params.to_query();
        assert_eq!(query.len(), 9);
    }

    #[test]
    fn test_case_list_response_shape() {
        let json = serde_json::json!({
            "cases": [],
            "total": 0,
            "page": 1,
            "limit": 10
        });
        let listing: CaseListResponse = serde_json::from_value(json).unwrap();
        assert_eq!(listing.total, 0);
        assert_eq!(listing.page, Some(1));
    }
}
