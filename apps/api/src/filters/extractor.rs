//! Entity Extractor — turns a free-text recruiting query into an `EntityRecord`.
//!
//! Extraction is fail-open: any remote failure or unparsable answer yields an empty record,
//! which the builder turns into the bare base URL.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::filters::prompts::{render_extraction_prompt, ENTITY_EXTRACTION_SYSTEM};
use crate::llm_client::LlmClient;

/// Structured intent extracted from one query. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(default, deserialize_with = "lenient_strings")]
    pub primary_job_titles: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub seniority: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub departments: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub locations: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub company_size_keywords: Vec<String>,
    /// Requested result count. Parsed but not used when building URLs.
    #[serde(default, deserialize_with = "lenient_limit")]
    pub limit: Option<u64>,
}

impl EntityRecord {
    pub fn is_empty(&self) -> bool {
        self.primary_job_titles.is_empty()
            && self.seniority.is_empty()
            && self.departments.is_empty()
            && self.locations.is_empty()
            && self.company_size_keywords.is_empty()
            && self.limit.is_none()
    }
}

/// Arrays keep their string items; `null` or any other shape becomes an empty list.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_limit<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64())
}

/// Parses raw model output into an `EntityRecord`.
///
/// Tries the whole text first, then the span from the first `{` to the last `}`.
/// Returns `None` when neither yields a JSON object.
pub fn parse_entity_response(text: &str) -> Option<EntityRecord> {
    let value = serde_json::from_str::<Value>(text)
        .ok()
        .or_else(|| {
            let start = text.find('{')?;
            let end = text.rfind('}')?;
            if end <= start {
                return None;
            }
            serde_json::from_str::<Value>(&text[start..=end]).ok()
        })?;

    if !value.is_object() {
        return None;
    }

    serde_json::from_value(value).ok()
}

/// Capability interface for entity extraction. Implement this to swap the backend
/// without touching the facade or handlers.
///
/// Carried in `FilterLinkGenerator` as `Arc<dyn EntityExtractor>`.
#[async_trait]
pub trait EntityExtractor: Send + Sync {
    /// Never fails: extraction problems degrade to an empty record.
    async fn extract(&self, query: &str) -> EntityRecord;
}

/// LLM-backed extractor. Embeds the query in the instructional prompt and parses the answer.
pub struct LlmEntityExtractor {
    llm: LlmClient,
}

impl LlmEntityExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl EntityExtractor for LlmEntityExtractor {
    async fn extract(&self, query: &str) -> EntityRecord {
        let prompt = render_extraction_prompt(query);

        let text = match self.llm.call_text(&prompt, ENTITY_EXTRACTION_SYSTEM).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Error in entity extraction: {e}");
                return EntityRecord::default();
            }
        };

        parse_entity_response(&text).unwrap_or_else(|| {
            warn!("Could not extract JSON from response: {text}");
            EntityRecord::default()
        })
    }
}
