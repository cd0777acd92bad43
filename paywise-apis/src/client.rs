use paywise_core::{ClientConfig, HttpClient, Result};

use crate::cases::CaseClient;
use crate::collection::CollectionClient;
use crate::partner::PartnerClient;

/// Main Paywise API client.
///
/// Composes the resource clients over one shared transport instance; the
/// resource clients hold cheap clones of the same transport, so all calls
/// share one connection pool and one immutable configuration.
///
/// # Example
///
/// ```rust,no_run
/// use paywise_apis::PaywiseClient;
/// use paywise_core::ClientConfig;
///
/// # async fn example() -> paywise_core::Result<()> {
/// let client = PaywiseClient::new(ClientConfig::new(
///     "https://api.paywise.de",
///     "your-api-key",
/// ))?;
///
/// let mandates = client.collection.list_mandates(Default::default()).await?;
/// let companies = client.partner.list_companies(Default::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PaywiseClient {
    http: HttpClient,
    /// Collection-law surface: claims, debtors, mandates, payments,
    /// statements, requests-to-client.
    pub collection: CollectionClient,
    /// CRM-style case surface: cases, comments, activities, attachments.
    pub cases: CaseClient,
    /// Partner surface: companies, users, user invites.
    pub partner: PartnerClient,
}

impl PaywiseClient {
    /// Creates a new Paywise API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the transport
    /// cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            collection: CollectionClient::new(http.clone()),
            cases: CaseClient::new(http.clone()),
            partner: PartnerClient::new(http.clone()),
            http,
        })
    }

    /// Returns the underlying HTTP transport for advanced usage.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}
