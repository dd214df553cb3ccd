use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorImpact {
    pub name: String,
    /// Signed impact score on the fixed display scale
    pub impact: f32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorBreakdown {
    pub factors: Vec<FactorImpact>,
    /// Always sent with the factors so the UI cannot present them as a
    /// model attribution
    pub disclaimer: String,
}
