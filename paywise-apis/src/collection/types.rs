//! Wire types for the collection-law surface.
//!
//! Field sets mirror the remote API's JSON schemas; this layer documents
//! shapes and performs no validation of its own.

use paywise_core::QueryParams;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Paginated;

// ==================== Common ====================

/// Monetary amount with a decimal string value on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Amount {
    /// Decimal value, serialized as a string (`"1500.00"`).
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
    /// ISO currency code.
    pub currency: Currency,
}

impl Amount {
    /// Creates a EUR amount.
    pub fn eur(value: Decimal) -> Self {
        Self {
            value,
            currency: Currency::Eur,
        }
    }
}

/// Supported currencies. The API currently serves EUR only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro.
    Eur,
}

/// Free-form metadata item attached to claims, debtors and payments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    #[serde(rename = "type")]
    pub metadata_type: String,
    pub value: String,
}

/// Event attached to a claim or debtor. `type` is an open union
/// (`claim`, `delivery`, `invoice`, `registration`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    pub title: String,
    pub occurence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub your_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

// ==================== Claims ====================

/// Claim submission state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClaimSubmissionState {
    Created,
    Released,
    UnderReview,
    ClientResponsePending,
    Accepted,
    Rejected,
}

/// Starting approach for claim collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StartingApproach {
    Extrajudicial,
    Judicial,
}

/// Document attached to a claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimDocument {
    pub id: String,
    pub mime_type: String,
    pub filename: String,
}

/// Invoice line item on a claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimItem {
    pub description: String,
    pub quantity: f64,
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Additional charge on a claim (reminder fees, bank charges, interest).
/// `type` is an open union.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdditionalCharge {
    #[serde(rename = "type")]
    pub charge_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub your_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_matter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurence_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<Metadata>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
}

/// Payment recorded on a claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimPayment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub amount: Amount,
    pub value_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub your_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<Metadata>>,
}

/// Mandate reference embedded in a claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimMandate {
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
}

/// Full claim object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claim {
    pub href: String,
    #[serde(default)]
    pub id: Option<String>,
    pub submission_state: ClaimSubmissionState,
    /// Href of the debtor this claim is against.
    pub debtor: String,
    pub mandate: ClaimMandate,
    pub your_reference: Option<String>,
    pub subject_matter: Option<String>,
    pub occurence_date: Option<String>,
    pub document_reference: Option<String>,
    pub document_date: Option<String>,
    pub due_date: Option<String>,
    pub reminder_date: Option<String>,
    pub delay_date: Option<String>,
    pub total_claim_amount: Amount,
    pub main_claim_amount: Amount,
    pub starting_approach: StartingApproach,
    pub claim_disputed: bool,
    pub obligation_fulfilled: bool,
    #[serde(default)]
    pub documents: Vec<ClaimDocument>,
    pub created: String,
    pub updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ClaimItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_charges_amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_charges: Option<Vec<AdditionalCharge>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<ClaimPayment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<Metadata>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
}

/// Parameters for creating a claim.
///
/// The nullable date/reference fields are required by the API and
/// serialized as explicit `null` when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateClaimParams {
    /// Href of the debtor to raise the claim against.
    pub debtor: String,
    pub your_reference: Option<String>,
    pub subject_matter: Option<String>,
    pub occurence_date: Option<String>,
    pub document_reference: Option<String>,
    pub document_date: Option<String>,
    pub due_date: Option<String>,
    pub reminder_date: Option<String>,
    pub delay_date: Option<String>,
    pub total_claim_amount: Amount,
    pub main_claim_amount: Amount,
    pub starting_approach: StartingApproach,
    pub claim_disputed: bool,
    pub obligation_fulfilled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ClaimItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_charges_amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_charges: Option<Vec<AdditionalCharge>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<ClaimPayment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<Metadata>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
}

/// Parameters for releasing a claim into collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseClaimParams {
    pub submission_state: ClaimSubmissionState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_order_confirmation: Option<bool>,
}

impl Default for ReleaseClaimParams {
    fn default() -> Self {
        Self {
            submission_state: ClaimSubmissionState::Released,
            send_order_confirmation: None,
        }
    }
}

/// Filter and pagination parameters for listing claims.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListClaimsParams {
    pub claim_disputed: Option<bool>,
    pub delay_date: Option<String>,
    pub document_reference: Option<String>,
    pub due_date: Option<String>,
    pub id: Option<String>,
    pub limit: Option<u32>,
    pub obligation_fulfilled: Option<bool>,
    pub offset: Option<u32>,
    pub reminder_date: Option<String>,
    pub starting_approach: Option<String>,
    pub subject_matter: Option<String>,
    pub submission_state: Option<String>,
    pub your_reference: Option<String>,
}

impl ListClaimsParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("claim_disputed", self.claim_disputed)
            .with_opt("delay_date", self.delay_date.as_deref())
            .with_opt("document_reference", self.document_reference.as_deref())
            .with_opt("due_date", self.due_date.as_deref())
            .with_opt("id", self.id.as_deref())
            .with_opt("limit", self.limit)
            .with_opt("obligation_fulfilled", self.obligation_fulfilled)
            .with_opt("offset", self.offset)
            .with_opt("reminder_date", self.reminder_date.as_deref())
            .with_opt("starting_approach", self.starting_approach.as_deref())
            .with_opt("subject_matter", self.subject_matter.as_deref())
            .with_opt("submission_state", self.submission_state.as_deref())
            .with_opt("your_reference", self.your_reference.as_deref())
    }
}

/// Claim list response.
pub type ClaimListResponse = Paginated<Claim>;

// ==================== Debtors ====================

/// Whether the debtor acts as a consumer or a business.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DebtorActingAs {
    Consumer,
    Business,
}

/// Communication channel type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationChannelType {
    Email,
    Phone,
    MobilePhone,
    Fax,
    Skype,
    FacebookMessenger,
    Imessage,
    Whatsapp,
    Facebook,
    Twitter,
    Linkedin,
    Xing,
    SocialVarious,
    WebsiteUrl,
    WebVarious,
}

/// Postal address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: String,
}

/// Bank account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankAccount {
    pub iban: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
}

/// Communication channel entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommunicationChannel {
    #[serde(rename = "type")]
    pub channel_type: CommunicationChannelType,
    pub value: String,
}

/// Natural-person details of a debtor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebtorPerson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,
}

/// Organization details of a debtor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebtorOrganization {
    pub name: String,
}

/// Full debtor object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Debtor {
    pub href: String,
    #[serde(default)]
    pub id: Option<String>,
    pub acting_as: DebtorActingAs,
    pub addresses: Vec<Address>,
    pub created: String,
    pub updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub your_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<DebtorPerson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<DebtorOrganization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_channels: Option<Vec<CommunicationChannel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_accounts: Option<Vec<BankAccount>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<Metadata>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
}

/// Parameters for creating a debtor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateDebtorParams {
    pub acting_as: DebtorActingAs,
    pub addresses: Vec<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub your_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<DebtorPerson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<DebtorOrganization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_channels: Option<Vec<CommunicationChannel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_accounts: Option<Vec<BankAccount>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<Metadata>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
}

/// Filter and pagination parameters for listing debtors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDebtorsParams {
    pub acting_as: Option<String>,
    pub id: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub your_reference: Option<String>,
}

impl ListDebtorsParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("acting_as", self.acting_as.as_deref())
            .with_opt("id", self.id.as_deref())
            .with_opt("limit", self.limit)
            .with_opt("offset", self.offset)
            .with_opt("your_reference", self.your_reference.as_deref())
    }
}

/// Debtor list response.
pub type DebtorListResponse = Paginated<Debtor>;

// ==================== Mandates ====================

/// Legal stage of a mandate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MandateLegalStage {
    Extrajudicial,
    JudicialDunning,
    Foreclosure,
    LongTermMonitoring,
    Ended,
}

/// Processing state of a mandate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MandateProcessingState {
    InProgress,
    Paused,
    CanceledByClient,
    CanceledByServiceProvider,
    Ended,
}

/// Payment state of a mandate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MandatePaymentState {
    Unpaid,
    PartiallyPaid,
    FullyPaid,
}

/// Legal claim balance breakdown of a mandate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegalClaimBalance {
    pub balance_of_costs_interest_bearing: Amount,
    pub balance_of_costs_interest_free: Amount,
    pub balance_of_interest_on_costs: Amount,
    pub balance_of_interest_on_principal_claim: Amount,
    pub balance_of_principal_claim: Amount,
    pub total_balance: Amount,
    pub legal_claim_of_costs_interest_bearing: Amount,
    pub legal_claim_of_costs_interest_free: Amount,
    pub legal_claim_of_interest_on_costs: Amount,
    pub legal_claim_of_interest_on_principal_claim: Amount,
    pub legal_claim_of_principal_claim: Amount,
    pub total_legal_claim: Amount,
    pub payment_on_costs_interest_bearing: Amount,
    pub payment_on_costs_interest_free: Amount,
    pub payment_on_interest_on_costs: Amount,
    pub payment_on_interest_on_principal_claim: Amount,
    pub payment_on_principal_claim: Amount,
    pub total_payment: Amount,
    pub updated: String,
}

/// Downloadable attachment of a status update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdateDownload {
    pub id: String,
    pub filename: String,
    pub mime_type: String,
    pub file_size: u64,
    pub download_url: String,
}

/// Status update on a mandate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdate {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub legal_stage: MandateLegalStage,
    pub processing_state: MandateProcessingState,
    pub created: String,
    #[serde(default)]
    pub downloads: Vec<StatusUpdateDownload>,
}

/// Summary entry for an open request to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestToClientSummaryItem {
    pub id: String,
    pub href: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_short: Option<String>,
    pub answered: bool,
    pub allowed_answer_types: String,
    pub created: String,
    #[serde(default)]
    pub answered_at: Option<String>,
}

/// Requests-to-client summary of a mandate.
///
/// Counters are served as strings by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestsToClientSummary {
    pub total_count: String,
    pub unanswered_count: String,
    pub has_pending: String,
    pub items: Vec<RequestToClientSummaryItem>,
}

/// Reference to a payment on a claim of a mandate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentReference {
    pub href: String,
    pub id: String,
}

/// Claim reference embedded in a mandate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MandateClaimReference {
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<PaymentReference>>,
}

/// Debtor display info embedded in a mandate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MandateDebtor {
    pub name: String,
}

/// Full mandate object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mandate {
    pub href: String,
    #[serde(default)]
    pub id: Option<String>,
    pub debtor: MandateDebtor,
    pub legal_stage: MandateLegalStage,
    pub processing_state: MandateProcessingState,
    pub payment_state: MandatePaymentState,
    pub legal_claim_balance: LegalClaimBalance,
    pub total_mandate_amount: Amount,
    #[serde(default)]
    pub status_updates: Vec<StatusUpdate>,
    pub requests_to_client_summary: RequestsToClientSummary,
    pub archived: bool,
    pub created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub further_reference_numbers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims: Option<Vec<MandateClaimReference>>,
}

/// Filter and pagination parameters for listing mandates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMandatesParams {
    pub archived: Option<bool>,
    pub debtor: Option<String>,
    pub debtor_organization_name: Option<String>,
    pub debtor_person_first_name: Option<String>,
    pub debtor_person_last_name: Option<String>,
    pub debtor_your_reference: Option<String>,
    pub legal_stage: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub payment_state: Option<String>,
    pub processing_state: Option<String>,
    pub reference_number: Option<String>,
}

impl ListMandatesParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("archived", self.archived)
            .with_opt("debtor", self.debtor.as_deref())
            .with_opt(
                "debtor_organization_name",
                self.debtor_organization_name.as_deref(),
            )
            .with_opt(
                "debtor_person_first_name",
                self.debtor_person_first_name.as_deref(),
            )
            .with_opt(
                "debtor_person_last_name",
                self.debtor_person_last_name.as_deref(),
            )
            .with_opt(
                "debtor_your_reference",
                self.debtor_your_reference.as_deref(),
            )
            .with_opt("legal_stage", self.legal_stage.as_deref())
            .with_opt("limit", self.limit)
            .with_opt("offset", self.offset)
            .with_opt("payment_state", self.payment_state.as_deref())
            .with_opt("processing_state", self.processing_state.as_deref())
            .with_opt("reference_number", self.reference_number.as_deref())
    }
}

/// Mandate list response.
pub type MandateListResponse = Paginated<Mandate>;

// ==================== Requests to Client ====================

/// Answer types a request to the client accepts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AllowedAnswerType {
    #[serde(rename = "yes-no")]
    YesNo,
    #[serde(rename = "yes-no-dontknow")]
    YesNoDontKnow,
    #[serde(rename = "fileupload")]
    FileUpload,
    #[serde(rename = "yes-no-freetext-on-no")]
    YesNoFreetextOnNo,
    #[serde(rename = "yes-with-date-no-freetext-on-no")]
    YesWithDateNoFreetextOnNo,
    #[serde(rename = "dynamic-form")]
    DynamicForm,
}

/// File attached to a request to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestFileAttachment {
    pub id: String,
    pub filename: String,
    pub mime_type: String,
    pub file_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

/// File uploaded with an answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerFile {
    pub id: String,
    pub filename: String,
    pub mime_type: String,
    pub file_size: u64,
}

/// Answer given to a request to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestAnswer {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub additional_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<AnswerFile>>,
    pub created: String,
}

/// Mandate reference embedded in a request to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestMandate {
    pub id: String,
    pub href: String,
    pub reference_number: String,
}

/// Full request-to-client object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestToClient {
    pub id: String,
    pub href: String,
    pub mandate: RequestMandate,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub allowed_answer_types: AllowedAnswerType,
    #[serde(default)]
    pub file_attachments: Vec<RequestFileAttachment>,
    pub answered: bool,
    #[serde(default)]
    pub answer: Option<RequestAnswer>,
    pub created: String,
    #[serde(default)]
    pub answered_at: Option<String>,
}

/// Filter and pagination parameters for listing requests to the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequestsToClientParams {
    pub answered: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListRequestsToClientParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("answered", self.answered)
            .with_opt("limit", self.limit)
            .with_opt("offset", self.offset)
    }
}

/// Parameters for answering a request to the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitRequestAnswerParams {
    pub text: Option<String>,
    pub additional_comment: Option<String>,
}

/// Request-to-client list response.
pub type RequestToClientListResponse = Paginated<RequestToClient>;

// ==================== Payments ====================

/// Full payment object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payment {
    pub href: String,
    #[serde(default)]
    pub id: Option<String>,
    /// Href of the claim the payment applies to.
    pub claim: String,
    pub amount: Amount,
    pub value_date: String,
    pub created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub your_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<Metadata>>,
}

/// Parameters for recording a payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePaymentParams {
    /// Href of the claim the payment applies to.
    pub claim: String,
    pub amount: Amount,
    pub value_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub your_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<Metadata>>,
}

/// Pagination parameters for listing payments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPaymentsParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListPaymentsParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("limit", self.limit)
            .with_opt("offset", self.offset)
    }
}

/// Payment list response.
pub type PaymentListResponse = Paginated<Payment>;

// ==================== Statements ====================

/// Statement download artifact type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatementDownloadType {
    FullPdf,
    ThirdPartyMoneyXlsx,
    CostBurdenXlsx,
    ClosingXlsx,
}

/// Downloadable statement artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatementDownload {
    pub id: String,
    #[serde(rename = "type")]
    pub download_type: StatementDownloadType,
    pub filename: String,
    pub mime_type: String,
    pub file_size: u64,
    pub download_url: String,
}

/// VAT-rate-specific claims arising from payments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimsFromPayments {
    pub taxfree_expenses_claims: Amount,
    pub taxable_expenses_claims: Amount,
    pub taxable_expenses_vat_claims: Amount,
    pub fee_claims: Amount,
    pub fee_vat_claims: Amount,
    pub success_commission_claims: Amount,
    pub success_commission_vat_claims: Amount,
}

/// VAT-rate-specific claims arising from advanced costs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimsFromAdvancedCosts {
    pub taxfree_expenses_claims: Amount,
    pub taxable_expenses_claims: Amount,
    pub taxable_expenses_vat_claims: Amount,
    pub fee_claims: Amount,
    pub fee_vat_claims: Amount,
    pub taxfree_litigation_expenses_claims: Amount,
    pub taxable_litigation_expenses_claims: Amount,
    pub taxable_litigation_expenses_vat_claims: Amount,
}

/// Per-VAT-rate overview of a statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverviewVatSpecific {
    pub vat_rate: String,
    pub claims_from_payments_to_dca: ClaimsFromPayments,
    pub claims_from_payments_to_client: ClaimsFromPayments,
    pub claims_from_advanced_costs: ClaimsFromAdvancedCosts,
    pub vat: Amount,
    pub invoice_amount: Amount,
    pub invoice_amount_vat: Amount,
    pub payout: Amount,
}

/// Full statement object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Statement {
    pub href: String,
    #[serde(default)]
    pub id: Option<String>,
    pub clearing_no: String,
    pub invoice_no: String,
    pub booking_date: String,
    pub period_start: String,
    pub period_end: String,
    pub canceled: bool,
    pub comment: String,
    pub total_balance: Amount,
    pub balance_pre_outstanding_items_offsetting: Amount,
    pub offset_outstanding_items: Amount,
    pub mandate_count: u32,
    pub mandate_details_href: String,
    #[serde(default)]
    pub overview_vat_specific: Vec<OverviewVatSpecific>,
    #[serde(default)]
    pub downloads: Vec<StatementDownload>,
    pub created: String,
}

/// Filter and pagination parameters for listing statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStatementsParams {
    pub booking_date: Option<String>,
    pub clearing_no: Option<String>,
    pub id: Option<String>,
    pub invoice_no: Option<String>,
    pub limit: Option<u32>,
    pub mandate_reference_number: Option<String>,
    pub offset: Option<u32>,
    pub period_end: Option<String>,
    pub period_start: Option<String>,
}

impl ListStatementsParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("booking_date", self.booking_date.as_deref())
            .with_opt("clearing_no", self.clearing_no.as_deref())
            .with_opt("id", self.id.as_deref())
            .with_opt("invoice_no", self.invoice_no.as_deref())
            .with_opt("limit", self.limit)
            .with_opt(
                "mandate_reference_number",
                self.mandate_reference_number.as_deref(),
            )
            .with_opt("offset", self.offset)
            .with_opt("period_end", self.period_end.as_deref())
            .with_opt("period_start", self.period_start.as_deref())
    }
}

/// Statement list response.
pub type StatementListResponse = Paginated<Statement>;

// ==================== Statement Mandate Details ====================

/// Closing information of a mandate on a statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MandateClosing {
    pub closing_date: String,
    pub closing_code: String,
    pub closing_description: String,
    pub closing_type: String,
    pub accepted_main_claim_amount: Amount,
    pub remaining_main_claim_amount: Amount,
}

/// Allocation of payments collected by the agency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentsAllocation {
    pub total_payments: Amount,
    pub allocation_to_fee: Amount,
    pub allocation_to_fee_vat: Amount,
    pub allocation_to_main_claim: Amount,
    pub allocation_to_default_interest: Amount,
    pub allocation_to_success_commission: Amount,
    pub allocation_to_success_commission_vat: Amount,
    pub payout: Amount,
}

/// Allocation of payments received directly by the client (no fee or
/// interest components apply there).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientPaymentsAllocation {
    pub total_payments: Amount,
    pub allocation_to_main_claim: Amount,
    pub allocation_to_success_commission: Amount,
    pub allocation_to_success_commission_vat: Amount,
    pub payout: Amount,
}

/// Extraordinary payouts to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtraordinaryPayouts {
    pub total_payments: Amount,
    pub allocation_to_main_claim: Amount,
    pub payout: Amount,
}

/// Third-party money breakdown for one VAT rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThirdPartyMoney {
    pub vat_rate: String,
    pub total_payments: Amount,
    pub payments_to_dca: PaymentsAllocation,
    pub payments_to_client: ClientPaymentsAllocation,
    pub extraordinary_payouts_to_client: ExtraordinaryPayouts,
}

/// Third-party money entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThirdPartyMoneyEntry {
    pub vat_rate: String,
    pub third_party_money: ThirdPartyMoney,
}

/// Cost burden for one VAT rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CostBurden {
    pub vat_rate: String,
    pub fee: Amount,
    pub fee_vat: Amount,
    pub total_amount: Amount,
}

/// Cost burden entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CostBurdenEntry {
    pub vat_rate: String,
    pub cost_burden: CostBurden,
}

/// Mandate reference embedded in a statement detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MandateReference {
    pub href: String,
    pub id: String,
    pub reference_number: String,
}

/// Per-mandate detail of a statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MandateDetail {
    pub reference_number: String,
    pub mandate: MandateReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing: Option<MandateClosing>,
    #[serde(default)]
    pub third_party_money_entries: Vec<ThirdPartyMoneyEntry>,
    #[serde(default)]
    pub cost_burden_entries: Vec<CostBurdenEntry>,
}

/// Filter and pagination parameters for listing statement mandate details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMandateDetailsParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub reference_number: Option<String>,
    pub your_reference: Option<String>,
}

impl ListMandateDetailsParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("limit", self.limit)
            .with_opt("offset", self.offset)
            .with_opt("reference_number", self.reference_number.as_deref())
            .with_opt("your_reference", self.your_reference.as_deref())
    }
}

/// Mandate details list response.
pub type MandateDetailsListResponse = Paginated<MandateDetail>;

// ==================== User Info ====================

/// Information about the API token's user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub token_name: String,
    pub user: String,
    pub user_first_name: String,
    pub user_last_name: String,
    pub access_mode: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_amount_serializes_value_as_string() {
        let amount = Amount::eur(Decimal::from_str("1500.00").unwrap());
        let json = serde_json::to_value(&amount).unwrap();
        assert_eq!(json, serde_json::json!({"value": "1500.00", "currency": "EUR"}));

        let back: Amount = serde_json::from_value(json).unwrap();
        assert_eq!(back, amount);
    }

    #[test]
    fn test_claim_deserializes_from_api_fixture() {
        let json = serde_json::json!({
            "id": "claim-1",
            "href": "/v1/claims/claim-1",
            "debtor": "/v1/debtors/debtor-1",
            "mandate": {
                "href": "/v1/mandates/mandate-1",
                "id": "mandate-1",
                "reference_number": "M-2024-001"
            },
            "your_reference": "INV-2024-001",
            "subject_matter": "Service Invoice January 2024",
            "occurence_date": "2024-01-15",
            "document_reference": "INV-2024-001",
            "document_date": "2024-01-15",
            "due_date": "2024-02-15",
            "reminder_date": "2024-02-20",
            "delay_date": "2024-03-01",
            "total_claim_amount": {"value": "1500.00", "currency": "EUR"},
            "main_claim_amount": {"value": "1500.00", "currency": "EUR"},
            "submission_state": "created",
            "starting_approach": "extrajudicial",
            "claim_disputed": false,
            "obligation_fulfilled": false,
            "documents": [],
            "created": "2024-01-15T10:00:00Z",
            "updated": "2024-01-15T10:00:00Z"
        });

        let claim: Claim = serde_json::from_value(json).unwrap();
        assert_eq!(claim.submission_state, ClaimSubmissionState::Created);
        assert_eq!(claim.starting_approach, StartingApproach::Extrajudicial);
        assert_eq!(claim.mandate.reference_number.as_deref(), Some("M-2024-001"));
        assert_eq!(
            claim.total_claim_amount.value,
            Decimal::from_str("1500.00").unwrap()
        );
        assert!(claim.items.is_none());
    }

    #[test]
    fn test_create_claim_params_serialize_required_nullables_as_null() {
        let params = CreateClaimParams {
            debtor: "/v1/debtors/debtor-1".to_string(),
            your_reference: None,
            subject_matter: None,
            occurence_date: None,
            document_reference: None,
            document_date: None,
            due_date: None,
            reminder_date: None,
            delay_date: None,
            total_claim_amount: Amount::eur(Decimal::from_str("100.00").unwrap()),
            main_claim_amount: Amount::eur(Decimal::from_str("100.00").unwrap()),
            starting_approach: StartingApproach::Extrajudicial,
            claim_disputed: false,
            obligation_fulfilled: false,
            items: None,
            additional_charges_amount: None,
            additional_charges: None,
            payments: None,
            metadata: None,
            events: None,
        };

        let json = serde_json::to_value(&params).unwrap();
        // Required nullable fields travel as explicit null...
        assert!(json.get("your_reference").unwrap().is_null());
        assert!(json.get("due_date").unwrap().is_null());
        // ...while the optional collections are omitted entirely.
        assert!(json.get("items").is_none());
        assert!(json.get("payments").is_none());
    }

    #[test]
    fn test_release_claim_params_default() {
        let json = serde_json::to_value(ReleaseClaimParams::default()).unwrap();
        assert_eq!(json, serde_json::json!({"submission_state": "released"}));
    }

    #[test]
    fn test_list_claims_params_map_every_filter_slot() {
        let params = ListClaimsParams {
            limit: Some(10),
            submission_state: Some("created".to_string()),
            ..Default::default()
        };
        let query = params.to_query();
        // One slot per documented filter; absent ones are dropped at URL
        // construction by the transport.
        assert_eq!(query.len(), 13);
        assert!(!query.is_empty());
    }

    #[test]
    fn test_communication_channel_type_wire_names() {
        let channel: CommunicationChannel =
            serde_json::from_value(serde_json::json!({"type": "mobile_phone", "value": "+49"}))
                .unwrap();
        assert_eq!(channel.channel_type, CommunicationChannelType::MobilePhone);
    }

    #[test]
    fn test_allowed_answer_type_wire_names() {
        let parsed: AllowedAnswerType =
            serde_json::from_value(serde_json::json!("yes-no-freetext-on-no")).unwrap();
        assert_eq!(parsed, AllowedAnswerType::YesNoFreetextOnNo);
        assert_eq!(
            serde_json::to_value(AllowedAnswerType::DynamicForm).unwrap(),
            serde_json::json!("dynamic-form")
        );
    }

    #[test]
    fn test_statement_download_type_wire_names() {
        let parsed: StatementDownloadType =
            serde_json::from_value(serde_json::json!("third_party_money_xlsx")).unwrap();
        assert_eq!(parsed, StatementDownloadType::ThirdPartyMoneyXlsx);
    }
}
