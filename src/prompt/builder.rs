//! Deterministic instruction-prompt construction.
//!
//! Pure functions only: the complaint text is embedded verbatim along
//! with the required output schema and classification guidance.

/// System-role instruction sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are an expert customer service analyst. \
Analyze customer complaints and provide structured responses in valid JSON format only.";

/// Build the user-role analysis prompt for one complaint message.
pub fn analysis_prompt(message: &str) -> String {
    format!(
        r#"
Analyze the following customer message and return ONLY a valid JSON object with the exact structure shown below.

Customer Message: "{message}"

Return this exact JSON structure (replace the values with your analysis):
{{
  "summary": "Brief summary of the complaint in 1-2 sentences",
  "category": "Choose ONE: Refund Issue, Delay, Account Access, Product Issue, Billing, Technical Support, Shipping, Service Quality, Other",
  "urgency": "Choose ONE: Low, Medium, High",
  "sentiment": "Choose ONE: Positive, Neutral, Negative"
}}

Classification Guidelines:
- Summary: Concise explanation of the customer's main concern
- Category: Pick the most relevant category from the list above
- Urgency:
  * High: Immediate action needed, customer very upset, financial/security issues
  * Medium: Important but not critical, moderate frustration
  * Low: General inquiries, minor issues, positive feedback
- Sentiment: Overall emotional tone (Positive/Neutral/Negative)

CRITICAL: Return ONLY the JSON object. No explanations, no markdown, no extra text."#
    )
}
