//! Keyword groups and text helpers shared by the tagger and the rule-based
//! risk models.

/// Waiver keywords that indicate the renter is relinquishing rights
pub const WAIVER_KEYWORDS: &[&str] = &[
    "waive",
    "waives",
    "waiver",
    "relinquish",
    "relinquishes",
    "forgo",
    "surrender",
    "surrenders",
];

/// Notice-related keywords
pub const NOTICE_KEYWORDS: &[&str] = &["notice", "notification", "notify", "advance notice"];

/// Termination/eviction keywords
pub const TERMINATION_KEYWORDS: &[&str] = &[
    "terminate",
    "termination",
    "evict",
    "eviction",
    "vacate",
    "removal",
];

/// Penalty and forfeiture keywords
pub const PENALTY_KEYWORDS: &[&str] = &[
    "penalty",
    "penalties",
    "fine",
    "forfeit",
    "forfeiture",
    "liquidated damages",
];

/// Rent and payment keywords
pub const RENT_KEYWORDS: &[&str] = &["rent", "rental", "payment", "monthly installment"];

/// Rent increase keywords
pub const INCREASE_KEYWORDS: &[&str] = &["increase", "escalat", "adjust", "raise", "revise"];

/// Security deposit keywords
pub const DEPOSIT_KEYWORDS: &[&str] = &["deposit", "security deposit", "advance amount"];

/// Structural components the landlord is normally responsible for
pub const STRUCTURAL_KEYWORDS: &[&str] = &[
    "roof",
    "plumbing",
    "pipes",
    "structural",
    "foundation",
    "hvac",
    "heating",
    "electrical",
    "wiring",
];

/// Repair and upkeep keywords
pub const REPAIR_KEYWORDS: &[&str] = &["repair", "repairs", "maintain", "maintenance", "upkeep"];

/// Indemnification keywords
pub const INDEMNITY_KEYWORDS: &[&str] = &[
    "indemnify",
    "indemnifies",
    "indemnification",
    "hold harmless",
    "defend",
];

/// Liability keywords
pub const LIABILITY_KEYWORDS: &[&str] = &["liable", "liability", "claims", "damages", "losses"];

/// Landlord entry keywords
pub const ENTRY_KEYWORDS: &[&str] = &["enter", "entry", "access", "inspect", "inspection"];

/// Unilateral-discretion phrases
pub const DISCRETION_KEYWORDS: &[&str] = &[
    "sole discretion",
    "at any time",
    "without notice",
    "without prior notice",
    "immediately",
];

/// Tenant reference keywords
pub const TENANT_KEYWORDS: &[&str] = &["tenant", "lessee", "renter"];

/// AS-IS keywords
pub const AS_IS_KEYWORDS: &[&str] = &["as-is", "as is"];

/// Common words ignored when tokenizing clause text for similarity scoring
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "of", "to", "in", "or", "and", "shall", "be", "by", "any", "is", "are",
    "for", "with", "on", "at", "this", "that", "will", "may", "not", "such",
    // Words present in nearly every lease clause carry no category signal.
    "tenant", "landlord", "lessee", "lessor", "premises", "property", "agreement", "lease",
    "hereby", "party", "parties",
];

/// True if the text contains any keyword from the group.
pub fn contains_any(text_lower: &str, group: &[&str]) -> bool {
    group.iter().any(|keyword| text_lower.contains(keyword))
}

/// Check if text contains words from at least two of the keyword groups.
/// Used to detect semantically clustered provisions (e.g. waiver + notice).
pub fn contains_semantic_cluster(text_lower: &str, keyword_groups: &[&[&str]]) -> bool {
    let found_groups = keyword_groups
        .iter()
        .filter(|group| contains_any(text_lower, group))
        .count();
    found_groups >= 2
}

/// Lowercase, collapse whitespace, and strip quote characters.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !last_was_space && !out.is_empty() {
                out.push(' ');
            }
            last_was_space = true;
        } else if c != '"' && c != '\u{201c}' && c != '\u{201d}' {
            out.extend(c.to_lowercase());
            last_was_space = false;
        }
    }
    out.trim_end().to_string()
}

/// Lowercase alphanumeric tokens with stopwords removed.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() >= 2)
        .map(|w| w.to_lowercase())
        .filter(|w| !STOPWORDS.contains(&w.as_str()))
        .collect()
}

/// Truncate to at most `max_chars` characters on a char boundary, appending
/// an ellipsis when something was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}
