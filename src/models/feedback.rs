use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeedbackItem {
    pub id: String,               // Store-assigned ObjectId, 24 lowercase hex chars
    pub rating: i32,              // Numeric score
    pub product: String,          // Product the feedback is about
    pub vendor: String,           // Vendor selling the product
    pub customer: Option<String>, // Serializes as null when absent, never omitted
    pub feedback: Option<String>, // Free-form text, null when absent
}

/// Creation payload. `rating`, `product` and `vendor` are required; a body
/// missing any of them fails deserialization and the request is rejected
/// with 400 before reaching the store.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FeedbackUpload {
    pub rating: i32,
    pub product: String,
    pub vendor: String,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Paginated listing envelope returned by `GET /feedback`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FeedbackPage {
    pub total_documents: i64,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub documents: Vec<FeedbackItem>,
}
