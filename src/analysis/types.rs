//! Data model for complaint analysis results.
//!
//! `AnalysisResult` is the validated record returned to callers; every
//! field is guaranteed present and in-domain. `AnalysisCandidate` is the
//! parsed-but-unvalidated intermediate produced by the response parser.
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub category: Category,
    pub urgency: Urgency,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Refund Issue")]
    RefundIssue,
    Delay,
    #[serde(rename = "Account Access")]
    AccountAccess,
    #[serde(rename = "Product Issue")]
    ProductIssue,
    Billing,
    #[serde(rename = "Technical Support")]
    TechnicalSupport,
    Shipping,
    #[serde(rename = "Service Quality")]
    ServiceQuality,
    Other,
}

impl Category {
    /// Every category except `Other`, in the order the prompt lists them.
    pub const SCRAPEABLE: [Category; 8] = [
        Category::RefundIssue,
        Category::Delay,
        Category::AccountAccess,
        Category::ProductIssue,
        Category::Billing,
        Category::TechnicalSupport,
        Category::Shipping,
        Category::ServiceQuality,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::RefundIssue => "Refund Issue",
            Category::Delay => "Delay",
            Category::AccountAccess => "Account Access",
            Category::ProductIssue => "Product Issue",
            Category::Billing => "Billing",
            Category::TechnicalSupport => "Technical Support",
            Category::Shipping => "Shipping",
            Category::ServiceQuality => "Service Quality",
            Category::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Refund Issue" => Some(Category::RefundIssue),
            "Delay" => Some(Category::Delay),
            "Account Access" => Some(Category::AccountAccess),
            "Product Issue" => Some(Category::ProductIssue),
            "Billing" => Some(Category::Billing),
            "Technical Support" => Some(Category::TechnicalSupport),
            "Shipping" => Some(Category::Shipping),
            "Service Quality" => Some(Category::ServiceQuality),
            "Other" => Some(Category::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub const fn label(self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(Urgency::Low),
            "Medium" => Some(Urgency::Medium),
            "High" => Some(Urgency::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Positive" => Some(Sentiment::Positive),
            "Neutral" => Some(Sentiment::Neutral),
            "Negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }
}

/// Parsed-but-unvalidated analysis fields.
///
/// Non-string JSON values are treated as absent; the validator decides
/// whether absence is fatal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisCandidate {
    pub summary: Option<String>,
    pub category: Option<String>,
    pub urgency: Option<String>,
    pub sentiment: Option<String>,
}

impl AnalysisCandidate {
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        AnalysisCandidate {
            summary: field("summary"),
            category: field("category"),
            urgency: field("urgency"),
            sentiment: field("sentiment"),
        }
    }
}
