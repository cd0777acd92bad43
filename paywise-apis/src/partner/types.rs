//! Wire types for the Partner API surface.

use paywise_core::QueryParams;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::Paginated;

// ==================== Companies ====================

/// Company address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyAddress {
    pub street: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: String,
}

/// Contact person of a company.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactPerson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Company onboarding status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
    Pending,
    Active,
    Suspended,
    Closed,
}

/// Full company object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub href: String,
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_court: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_representatives: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<CompanyAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<ContactPerson>,
    pub status: CompanyStatus,
    /// Client number at the collection agency, assigned on activation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dca_client_no: Option<String>,
    pub created: String,
    pub updated: String,
}

/// Parameters for creating a company.
///
/// `extra` is the catch-all bucket for fields outside the documented
/// schema; its entries are flattened into the request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateCompanyParams {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_court: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_representatives: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<CompanyAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<ContactPerson>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parameters for updating a company.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateCompanyParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_court: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_representatives: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<CompanyAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<ContactPerson>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Filter and pagination parameters for listing companies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCompaniesParams {
    pub dca_client_no: Option<String>,
    pub id: Option<String>,
    pub limit: Option<u32>,
    pub name: Option<String>,
    pub offset: Option<u32>,
    pub status: Option<String>,
}

impl ListCompaniesParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("dca_client_no", self.dca_client_no.as_deref())
            .with_opt("id", self.id.as_deref())
            .with_opt("limit", self.limit)
            .with_opt("name", self.name.as_deref())
            .with_opt("offset", self.offset)
            .with_opt("status", self.status.as_deref())
    }
}

/// Company list response.
pub type CompanyListResponse = Paginated<Company>;

// ==================== Users ====================

/// User status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// User role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    User,
    Viewer,
}

/// Company reference embedded in users and invites.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserCompanyReference {
    pub href: String,
    pub id: String,
    pub name: String,
}

/// Full user object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub href: String,
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company: UserCompanyReference,
    pub role: UserRole,
    pub status: UserStatus,
    #[serde(default)]
    pub last_login: Option<String>,
    pub created: String,
    pub updated: String,
}

/// Parameters for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateUserParams {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Href of the company the user belongs to.
    pub company: String,
    pub role: UserRole,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Filter and pagination parameters for listing users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUsersParams {
    pub company: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub id: Option<String>,
    pub last_name: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub role: Option<String>,
    pub status: Option<String>,
}

impl ListUsersParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("company", self.company.as_deref())
            .with_opt("email", self.email.as_deref())
            .with_opt("first_name", self.first_name.as_deref())
            .with_opt("id", self.id.as_deref())
            .with_opt("last_name", self.last_name.as_deref())
            .with_opt("limit", self.limit)
            .with_opt("offset", self.offset)
            .with_opt("role", self.role.as_deref())
            .with_opt("status", self.status.as_deref())
    }
}

/// User list response.
pub type UserListResponse = Paginated<User>;

// ==================== User Invites ====================

/// User invite status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserInviteStatus {
    Pending,
    Accepted,
    Expired,
    Revoked,
}

/// Full user invite object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInvite {
    pub href: String,
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company: UserCompanyReference,
    pub role: UserRole,
    pub status: UserInviteStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_url: Option<String>,
    pub expires_at: String,
    pub created: String,
    #[serde(default)]
    pub accepted_at: Option<String>,
}

/// Parameters for creating a user invite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateUserInviteParams {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Href of the company to invite the user into.
    pub company: String,
    pub role: UserRole,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// User created from an accepted invite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnboardedUser {
    pub href: String,
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company: UserCompanyReference,
    pub role: UserRole,
    pub status: UserStatus,
    pub created: String,
    pub updated: String,
}

// ==================== Partner Info ====================

/// Information about the partner API token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartnerInfo {
    pub id: String,
    pub token_name: String,
    pub user: String,
    pub user_first_name: String,
    pub user_last_name: String,
    pub access_mode: String,
}
