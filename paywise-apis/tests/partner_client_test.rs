//! Partner-surface client tests against a local mock server.

use paywise_apis::partner::{
    CompanyStatus, CreateCompanyParams, CreateUserInviteParams, ListCompaniesParams,
    ListUsersParams, PartnerClient, UserInviteStatus, UserRole,
};
use paywise_core::{ClientConfig, HttpClient};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PartnerClient {
    PartnerClient::new(HttpClient::new(ClientConfig::new(server.uri(), "test-key")).unwrap())
}

fn company_fixture() -> serde_json::Value {
    serde_json::json!({
        "href": "/companies/company-1/",
        "id": "company-1",
        "name": "ACME GmbH",
        "legal_form": "GmbH",
        "vat_id": "DE123456789",
        "status": "active",
        "dca_client_no": "DCA-001",
        "created": "2024-01-10T08:00:00Z",
        "updated": "2024-01-12T08:00:00Z"
    })
}

#[tokio::test]
async fn list_companies_sends_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companies/"))
        .and(query_param("status", "active"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [company_fixture()]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let companies = client_for(&server)
        .list_companies(ListCompaniesParams {
            status: Some("active".to_string()),
            limit: Some(5),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(companies.count, 1);
    assert_eq!(companies.results[0].status, CompanyStatus::Active);
    assert_eq!(companies.results[0].dca_client_no.as_deref(), Some("DCA-001"));
}

#[tokio::test]
async fn create_company_posts_typed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/companies/"))
        .and(body_json(serde_json::json!({
            "name": "ACME GmbH",
            "legal_form": "GmbH",
            "vat_id": "DE123456789"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(company_fixture()))
        .expect(1)
        .mount(&server)
        .await;

    let company = client_for(&server)
        .create_company(&CreateCompanyParams {
            name: "ACME GmbH".to_string(),
            legal_form: Some("GmbH".to_string()),
            vat_id: Some("DE123456789".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(company.name, "ACME GmbH");
}

#[tokio::test]
async fn list_users_decodes_company_reference() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "results": [{
                "href": "/users/user-1/",
                "id": "user-1",
                "email": "max@example.com",
                "first_name": "Max",
                "last_name": "Mustermann",
                "company": {
                    "href": "/companies/company-1/",
                    "id": "company-1",
                    "name": "ACME GmbH"
                },
                "role": "admin",
                "status": "active",
                "last_login": null,
                "created": "2024-01-10T08:00:00Z",
                "updated": "2024-01-10T08:00:00Z"
            }]
        })))
        .mount(&server)
        .await;

    let users = client_for(&server)
        .list_users(ListUsersParams::default())
        .await
        .unwrap();
    assert_eq!(users.results[0].role, UserRole::Admin);
    assert_eq!(users.results[0].company.name, "ACME GmbH");
    assert_eq!(users.results[0].last_login, None);
}

#[tokio::test]
async fn invite_lifecycle_roundtrip() {
    let server = MockServer::start().await;

    let invite = serde_json::json!({
        "href": "/userinvites/invite-1/",
        "id": "invite-1",
        "email": "new.user@example.com",
        "first_name": "New",
        "last_name": "User",
        "company": {"href": "/companies/company-1/", "id": "company-1", "name": "ACME GmbH"},
        "role": "user",
        "status": "pending",
        "invite_url": "https://app.paywise.de/invite/abc",
        "expires_at": "2024-02-15T10:00:00Z",
        "created": "2024-01-15T10:00:00Z",
        "accepted_at": null
    });

    Mock::given(method("POST"))
        .and(path("/userinvites/"))
        .and(body_json(serde_json::json!({
            "email": "new.user@example.com",
            "first_name": "New",
            "last_name": "User",
            "company": "/companies/company-1/",
            "role": "user"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(invite.clone()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/userinvites/invite-1/get-onboarded-user/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "href": "/users/user-2/",
            "id": "user-2",
            "email": "new.user@example.com",
            "first_name": "New",
            "last_name": "User",
            "company": {"href": "/companies/company-1/", "id": "company-1", "name": "ACME GmbH"},
            "role": "user",
            "status": "active",
            "created": "2024-02-01T10:00:00Z",
            "updated": "2024-02-01T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .create_user_invite(&CreateUserInviteParams {
            email: "new.user@example.com".to_string(),
            first_name: "New".to_string(),
            last_name: "User".to_string(),
            company: "/companies/company-1/".to_string(),
            role: UserRole::User,
            extra: serde_json::Map::new(),
        })
        .await
        .unwrap();
    assert_eq!(created.status, UserInviteStatus::Pending);

    let onboarded = client.get_onboarded_user("invite-1").await.unwrap();
    assert_eq!(onboarded.id, "user-2");
}

#[tokio::test]
async fn forbidden_error_surfaces_server_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": "Forbidden",
            "message": "X-User-Id header is required for Partner API",
            "code": "MISSING_USER_ID"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_users(ListUsersParams::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.code(), Some("MISSING_USER_ID"));
    assert!(err.to_string().contains("X-User-Id"));
}

#[tokio::test]
async fn get_info_decodes_token_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/info/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": "token-1",
            "token_name": "partner-token",
            "user": "user-1",
            "user_first_name": "Max",
            "user_last_name": "Mustermann",
            "access_mode": "read_write"
        }])))
        .mount(&server)
        .await;

    let info = client_for(&server).get_info().await.unwrap();
    assert_eq!(info.len(), 1);
    assert_eq!(info[0].token_name, "partner-token");
}
