//! URL Builder — deterministic mapping from an `EntityRecord` to a filtered search URL.
//!
//! Fragment order is fixed: job titles, seniority, departments, locations, company size.
//!
//! Precedence: when any job title is present, department filters are suppressed entirely.
//! Department buckets (e.g. `import` -> `master_supply_chain`) would otherwise widen a
//! precise role query.

use tracing::debug;

use crate::filters::extractor::EntityRecord;
use crate::filters::taxonomy::{FilterCategory, BASE_URL};

/// Builds the full search URL for `record`. Pure and total: an empty record yields `BASE_URL`.
pub fn build_url(record: &EntityRecord) -> String {
    let fragments = build_fragments(record);
    if fragments.is_empty() {
        BASE_URL.to_string()
    } else {
        format!("{}&{}", BASE_URL, fragments.join("&"))
    }
}

/// Returns the ordered `key=value` fragments for `record`, without the base URL.
pub fn build_fragments(record: &EntityRecord) -> Vec<String> {
    let mut fragments = Vec::new();

    let skip_departments = !record.primary_job_titles.is_empty();

    push_each(
        &mut fragments,
        FilterCategory::JobTitle,
        &record.primary_job_titles,
    );
    push_each(&mut fragments, FilterCategory::Seniority, &record.seniority);
    if skip_departments {
        if !record.departments.is_empty() {
            debug!(
                "Job titles present; skipping departments {:?}",
                record.departments
            );
        }
    } else {
        push_each(&mut fragments, FilterCategory::Department, &record.departments);
    }
    push_each(&mut fragments, FilterCategory::Location, &record.locations);
    push_company_sizes(&mut fragments, &record.company_size_keywords);

    fragments
}

fn push_each(fragments: &mut Vec<String>, category: FilterCategory, values: &[String]) {
    let descriptor = category.descriptor();
    for raw in values {
        let encoded = descriptor.encode(raw);
        if encoded.is_empty() {
            debug!("No {:?} filter for value {:?}", descriptor.category, raw);
        }
        fragments.extend(encoded.iter().map(|v| descriptor.fragment(v)));
    }
}

/// Company sizes are unioned across all keywords and emitted once per range, first seen first.
fn push_company_sizes(fragments: &mut Vec<String>, keywords: &[String]) {
    let descriptor = FilterCategory::CompanySize.descriptor();
    let mut ranges: Vec<String> = Vec::new();

    for keyword in keywords {
        for range in descriptor.encode(keyword) {
            if !ranges.contains(&range) {
                ranges.push(range);
            }
        }
    }

    fragments.extend(ranges.iter().map(|r| descriptor.fragment(r)));
}
