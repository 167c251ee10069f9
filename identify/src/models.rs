use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub const PROMPT: &str = "Identify the waste in this image. Provide the response in JSON \
    format with the following fields: type (e.g., PLASTIK, KERTAS, LOGAM), material \
    (specific material name), description (short description), sortingSteps (array of \
    strings), environmentalImpact (short sentence), and points (estimated points for \
    recycling this item, between 10-100).";

pub const MIN_POINTS: u32 = 10;
pub const MAX_POINTS: u32 = 100;
pub const DEFAULT_POINTS: u32 = MIN_POINTS;

/// Fully validated description of a recognized item of waste.
///
/// Everything past the validator renders these fields verbatim, so all text
/// is guaranteed non-empty and `points` sits within
/// [`MIN_POINTS`]..=[`MAX_POINTS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteIdentification {
    #[serde(rename = "type")]
    pub kind: String,
    pub material: String,
    pub description: String,
    pub sorting_steps: Vec<String>,
    pub environmental_impact: String,
    pub points: u32,
}

#[derive(Deserialize)]
pub struct Response {
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
pub struct Candidate {
    pub content: Content,
}

#[derive(Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Deserialize)]
pub struct Part {
    pub text: String,
}
