//! Facade: query -> entities -> URL.

use std::sync::Arc;

use tracing::info;

use crate::filters::builder::build_url;
use crate::filters::extractor::{EntityExtractor, EntityRecord};

/// Composes an extractor with the URL builder. Stateless apart from the shared extractor.
#[derive(Clone)]
pub struct FilterLinkGenerator {
    extractor: Arc<dyn EntityExtractor>,
}

impl FilterLinkGenerator {
    pub fn new(extractor: Arc<dyn EntityExtractor>) -> Self {
        Self { extractor }
    }

    /// Extracts entities from `query` and builds the filtered search URL.
    ///
    /// A blank query skips extraction and yields the base URL.
    pub async fn generate_filter_url(&self, query: &str) -> String {
        let entities = if query.trim().is_empty() {
            EntityRecord::default()
        } else {
            self.extractor.extract(query).await
        };

        if entities.is_empty() {
            info!("No entities extracted; returning unfiltered URL");
        } else {
            info!(
                "Extracted entities: {}",
                serde_json::to_string(&entities).unwrap_or_default()
            );
        }

        build_url(&entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::taxonomy::BASE_URL;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubExtractor {
        record: EntityRecord,
        calls: AtomicUsize,
    }

    impl StubExtractor {
        fn new(record: EntityRecord) -> Arc<Self> {
            Arc::new(Self {
                record,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl EntityExtractor for StubExtractor {
        async fn extract(&self, _query: &str) -> EntityRecord {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.record.clone()
        }
    }

    #[tokio::test]
    async fn test_generate_composes_extractor_and_builder() {
        let stub = StubExtractor::new(EntityRecord {
            primary_job_titles: vec!["importer".to_string()],
            locations: vec!["USA".to_string(), "India".to_string()],
            ..Default::default()
        });
        let generator = FilterLinkGenerator::new(stub.clone());

        let url = generator
            .generate_filter_url("importers from USA to India")
            .await;

        assert_eq!(
            url,
            format!("{BASE_URL}&personTitles[]=importer&personLocations[]=USA&personLocations[]=India")
        );
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_query_skips_extraction() {
        let stub = StubExtractor::new(EntityRecord {
            locations: vec!["Nowhere".to_string()],
            ..Default::default()
        });
        let generator = FilterLinkGenerator::new(stub.clone());

        assert_eq!(generator.generate_filter_url("   ").await, BASE_URL);
        assert_eq!(generator.generate_filter_url("").await, BASE_URL);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_extraction_yields_base_url() {
        let generator = FilterLinkGenerator::new(StubExtractor::new(EntityRecord::default()));
        assert_eq!(generator.generate_filter_url("gibberish").await, BASE_URL);
    }
}
