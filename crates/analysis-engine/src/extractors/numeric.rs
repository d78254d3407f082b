// Numeric context extraction used by the rule-based risk models.
use lazy_static::lazy_static;
use regex::Regex;

use crate::patterns::contains_any;

lazy_static! {
    static ref DAYS_RE: Regex =
        Regex::new(r"(?:within\s+)?(\d+)\s*(?:calendar\s+|business\s+)?days?").unwrap();
    static ref HOURS_RE: Regex = Regex::new(r"(\d+)\s*(?:hour|hr)s?").unwrap();
    static ref PERCENT_RE: Regex = Regex::new(r"(\d+(?:\.\d+)?)\s*(?:%|percent)").unwrap();
    static ref DOLLAR_RE: Regex = Regex::new(r"(?:\$|rs\.?\s*|inr\s*)([\d,]+(?:\.\d+)?)").unwrap();
}

/// Slice a 60-byte window either side of `at`, snapped to char boundaries.
fn context_window(text: &str, at: usize) -> &str {
    let mut start = at.saturating_sub(60);
    while start < text.len() && !text.is_char_boundary(start) {
        start += 1;
    }
    let mut end = (at + 60).min(text.len());
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}

/// First day-count whose surrounding 60-char window mentions one of the
/// context keywords. Returns None when no day count appears in context.
pub fn extract_days_near(text: &str, context_keywords: &[&str]) -> Option<u32> {
    let text_lower = text.to_lowercase();

    for cap in DAYS_RE.captures_iter(&text_lower) {
        if let Some(num_match) = cap.get(1) {
            if let Ok(days) = num_match.as_str().parse::<u32>() {
                let start = cap.get(0).unwrap().start();
                if contains_any(context_window(&text_lower, start), context_keywords) {
                    return Some(days);
                }
            }
        }
    }

    None
}

/// First hour-count near one of the context keywords.
pub fn extract_hours_near(text: &str, context_keywords: &[&str]) -> Option<u32> {
    let text_lower = text.to_lowercase();

    for cap in HOURS_RE.captures_iter(&text_lower) {
        if let Some(num_match) = cap.get(1) {
            if let Ok(hours) = num_match.as_str().parse::<u32>() {
                let start = cap.get(0).unwrap().start();
                if contains_any(context_window(&text_lower, start), context_keywords) {
                    return Some(hours);
                }
            }
        }
    }

    None
}

/// Largest percentage mentioned anywhere in the text.
pub fn max_percent(text: &str) -> Option<f64> {
    let text_lower = text.to_lowercase();
    PERCENT_RE
        .captures_iter(&text_lower)
        .filter_map(|cap| cap.get(1).and_then(|m| m.as_str().parse::<f64>().ok()))
        .fold(None, |acc, v| match acc {
            Some(best) if best >= v => Some(best),
            _ => Some(v),
        })
}

/// Largest monetary amount mentioned anywhere in the text.
pub fn max_amount(text: &str) -> Option<f64> {
    let text_lower = text.to_lowercase();
    DOLLAR_RE
        .captures_iter(&text_lower)
        .filter_map(|cap| {
            cap.get(1)
                .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
        })
        .fold(None, |acc, v| match acc {
            Some(best) if best >= v => Some(best),
            _ => Some(v),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{DEPOSIT_KEYWORDS, NOTICE_KEYWORDS};

    #[test]
    fn test_extract_days_near_deposit() {
        assert_eq!(
            extract_days_near(
                "Landlord shall return the deposit within 45 days",
                DEPOSIT_KEYWORDS
            ),
            Some(45)
        );
        assert_eq!(
            extract_days_near("Notice within 30 days", DEPOSIT_KEYWORDS),
            None
        );
    }

    #[test]
    fn test_extract_days_respects_context_window() {
        assert_eq!(
            extract_days_near("Tenant must give 60 days written notice", NOTICE_KEYWORDS),
            Some(60)
        );
    }

    #[test]
    fn test_extract_hours_near_entry() {
        assert_eq!(
            extract_hours_near("Landlord may enter with 24 hours notice", &["enter"]),
            Some(24)
        );
    }

    #[test]
    fn test_max_percent_picks_largest() {
        assert_eq!(max_percent("rent increases 5% then 12% annually"), Some(12.0));
        assert_eq!(max_percent("no percentages here"), None);
    }

    #[test]
    fn test_max_amount_strips_separators() {
        assert_eq!(max_amount("late fee of $1,250.50 plus $40"), Some(1250.5));
    }
}
