use crate::filters::generator::FilterLinkGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Query -> filter URL facade. The extractor behind it is pluggable.
    pub generator: FilterLinkGenerator,
}
