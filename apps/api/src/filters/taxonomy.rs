//! Filter Taxonomy — static, read-only description of every filter the lead database accepts.
//!
//! Each category owns exactly one URL parameter and one encoding strategy. Lookup tables are
//! plain `&'static` slices so the whole taxonomy is auditable at a glance and shared across
//! requests without synchronization.

/// Base people-search URL. Carries the default page, sort order and verified-email filter;
/// the builder only ever appends to it.
pub const BASE_URL: &str = "https://app.apollo.io/#/people?page=1&sortAscending=false&sortByField=recommendations_score&contactEmailStatusV2[]=verified";

/// The five supported filter categories, in the order the builder emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCategory {
    JobTitle,
    Seniority,
    Department,
    Location,
    CompanySize,
}

/// How a space is written when free text is percent-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceStyle {
    /// `Finance Manager` -> `Finance%20Manager`
    Percent,
    /// `New York` -> `New+York`
    Plus,
}

/// Encoding strategy of a category. Every category has exactly one.
#[derive(Debug, Clone, Copy)]
pub enum EncodingMode {
    /// Free text, used verbatim and percent-encoded.
    RawEncode(SpaceStyle),
    /// Lowercased human phrase -> canonical token.
    EnumLookup(&'static [(&'static str, &'static str)]),
    /// Literal range tokens map 1:1; keyword buckets expand to a fixed set of ranges.
    KeywordRangeExpand {
        ranges: &'static [(&'static str, &'static str)],
        buckets: &'static [(&'static str, &'static [&'static str])],
    },
}

/// Static descriptor for one filter category.
#[derive(Debug, Clone, Copy)]
pub struct FilterDescriptor {
    pub category: FilterCategory,
    pub url_param: &'static str,
    pub encoding: EncodingMode,
}

// ────────────────────────────────────────────────────────────────────────────
// Value tables
// ────────────────────────────────────────────────────────────────────────────

pub const SENIORITY_VALUES: &[(&str, &str)] = &[
    ("vp", "vp"),
    ("director", "director"),
    ("manager", "manager"),
    ("c-level", "cxo"),
    ("founder", "founder"),
    ("partner", "partner"),
    ("owner", "owner"),
    ("executive", "executive"),
];

pub const DEPARTMENT_VALUES: &[(&str, &str)] = &[
    ("finance", "master_finance"),
    ("marketing", "master_marketing"),
    ("sales", "master_sales"),
    ("engineering", "master_engineering"),
    ("hr", "master_hr"),
    ("operations", "master_operations"),
    ("it", "master_it"),
    ("legal", "master_legal"),
    ("product", "master_product"),
    ("supply chain", "master_supply_chain"),
    // import/export roll up into the supply-chain bucket
    ("import", "master_supply_chain"),
    ("export", "master_supply_chain"),
];

pub const COMPANY_SIZE_RANGES: &[(&str, &str)] = &[
    ("1-10", "1,10"),
    ("11-20", "11,20"),
    ("21-50", "21,50"),
    ("51-200", "51,200"),
    ("201-500", "201,500"),
    ("501-1000", "501,1000"),
    ("1001-5000", "1001,5000"),
    ("5001-10000", "5001,10000"),
    ("10001+", "10001,0"),
];

pub const COMPANY_SIZE_BUCKETS: &[(&str, &[&str])] = &[
    ("small", &["1,10", "11,20", "21,50"]),
    ("medium", &["51,200", "201,500", "501,1000"]),
    ("large", &["1001,5000", "5001,10000", "10001,0"]),
];

static TAXONOMY: [FilterDescriptor; 5] = [
    FilterDescriptor {
        category: FilterCategory::JobTitle,
        url_param: "personTitles[]",
        encoding: EncodingMode::RawEncode(SpaceStyle::Percent),
    },
    FilterDescriptor {
        category: FilterCategory::Seniority,
        url_param: "personSeniorities[]",
        encoding: EncodingMode::EnumLookup(SENIORITY_VALUES),
    },
    FilterDescriptor {
        category: FilterCategory::Department,
        url_param: "personDepartmentOrSubdepartments[]",
        encoding: EncodingMode::EnumLookup(DEPARTMENT_VALUES),
    },
    FilterDescriptor {
        category: FilterCategory::Location,
        url_param: "personLocations[]",
        encoding: EncodingMode::RawEncode(SpaceStyle::Plus),
    },
    FilterDescriptor {
        category: FilterCategory::CompanySize,
        url_param: "organizationNumEmployeesRanges[]",
        encoding: EncodingMode::KeywordRangeExpand {
            ranges: COMPANY_SIZE_RANGES,
            buckets: COMPANY_SIZE_BUCKETS,
        },
    },
];

impl FilterCategory {
    /// Returns the static descriptor for this category.
    pub fn descriptor(self) -> &'static FilterDescriptor {
        match self {
            FilterCategory::JobTitle => &TAXONOMY[0],
            FilterCategory::Seniority => &TAXONOMY[1],
            FilterCategory::Department => &TAXONOMY[2],
            FilterCategory::Location => &TAXONOMY[3],
            FilterCategory::CompanySize => &TAXONOMY[4],
        }
    }
}

impl FilterDescriptor {
    /// Encodes one raw value into zero or more canonical values.
    ///
    /// Unknown values under `EnumLookup` / `KeywordRangeExpand` produce nothing.
    pub fn encode(&self, raw: &str) -> Vec<String> {
        match self.encoding {
            EncodingMode::RawEncode(style) => vec![percent_encode(raw, style)],
            EncodingMode::EnumLookup(table) => lookup(table, &raw.to_lowercase())
                .map(|v| vec![v.to_string()])
                .unwrap_or_default(),
            EncodingMode::KeywordRangeExpand { ranges, buckets } => {
                expand_size_token(ranges, buckets, raw)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            }
        }
    }

    /// Formats a single `key=value` filter fragment.
    pub fn fragment(&self, value: &str) -> String {
        format!("{}={}", self.url_param, value)
    }
}

/// Exact-key lookup in a static table.
pub fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// RFC 3986 percent-encoding with the requested space style.
pub fn percent_encode(raw: &str, style: SpaceStyle) -> String {
    let encoded = urlencoding::encode(raw);
    match style {
        SpaceStyle::Percent => encoded.into_owned(),
        SpaceStyle::Plus => encoded.replace("%20", "+"),
    }
}

/// Resolves one company-size descriptor into range tokens.
///
/// A literal range (`51-200`) must match exactly. A bucket keyword matches when it appears
/// anywhere in the lowercased token, so `"medium-sized"` expands the `medium` bucket.
fn expand_size_token(
    ranges: &'static [(&'static str, &'static str)],
    buckets: &'static [(&'static str, &'static [&'static str])],
    raw: &str,
) -> Vec<&'static str> {
    let token = raw.to_lowercase();
    let mut out = Vec::new();

    if let Some(range) = lookup(ranges, token.trim()) {
        out.push(range);
    }

    for (keyword, bucket) in buckets {
        if token.contains(keyword) {
            out.extend(bucket.iter().copied());
        }
    }

    out
}
