// LLM prompt constants for entity extraction.

/// System prompt for entity extraction — enforces JSON-only output.
pub const ENTITY_EXTRACTION_SYSTEM: &str = "You are a helpful assistant that extracts \
    structured information from queries and returns only valid JSON.";

/// Entity extraction prompt template. Replace `{query}` before sending.
pub const ENTITY_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract the following entities from this query: "{query}"

- primary_job_titles (list of EXACT job titles as they should appear in the "include" filter, like 'importer', 'supply chain manager', 'procurement specialist', etc.)
- seniority (level like vp, director, manager, c-level, founder, partner, owner, executive)
- departments (like finance, marketing, sales, engineering, HR, operations, IT, supply chain, import, export)
- locations (countries, states, cities mentioned)
- company_size_keywords (any mentions of small companies, medium companies, large companies)
- limit (number of results requested, like "top 10")

For primary_job_titles, extract the EXACT job roles that would be searched for - not general categories.
For example:
- From "importers from USA to India" -> extract "importer" as the primary job title, NOT "supply chain" as a department
- From "marketing manager" -> extract "marketing manager" as the primary job title
- From "VP of Finance" -> extract "VP of Finance" as the primary job title

Return a JSON object with these fields. If a field is not mentioned, set it to an empty list or null.
Format your response as valid JSON only, with no additional text."#;

/// Renders the extraction prompt for a single query.
pub fn render_extraction_prompt(query: &str) -> String {
    ENTITY_EXTRACTION_PROMPT_TEMPLATE.replace("{query}", query)
}
