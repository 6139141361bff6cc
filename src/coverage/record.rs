/// Delivery-days sentinel meaning the ZIP is served by an affiliate
/// partner rather than directly.
pub const AFFILIATE_SENTINEL: &str = "DNT";

/// Fixed contact message shown for ZIPs outside the coverage area.
pub const CONTACT_MESSAGE: &str =
    "We do not currently deliver to this ZIP code. Contact dispatch@zipzone.example \
     or (732) 555-0148 to discuss options.";

/// A normalized coverage row from the source data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRecord {
    pub zone: String,
    pub zip: String,
    pub city: String,
    pub delivery_days: String,
}

impl CoverageRecord {
    /// Whether this ZIP is served by an affiliate partner
    pub fn is_affiliate(&self) -> bool {
        self.delivery_days == AFFILIATE_SENTINEL
    }

    /// City as an optional value (empty city fields are treated as absent)
    pub fn city_opt(&self) -> Option<String> {
        if self.city.is_empty() {
            None
        } else {
            Some(self.city.clone())
        }
    }
}

/// Result of classifying a single ZIP query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input was not a 5-digit ZIP code; no lookup was performed
    InvalidInput,
    /// ZIP is not in the coverage table
    NotCovered { contact: String },
    /// ZIP is served by an affiliate partner
    AffiliateCovered { zip: String, city: Option<String> },
    /// ZIP is in the direct delivery area
    Covered {
        zip: String,
        city: Option<String>,
        delivery_days: String,
    },
}

impl Outcome {
    /// Render the user-facing message for this outcome
    pub fn message(&self) -> String {
        match self {
            Outcome::InvalidInput => "Please enter a valid 5-digit ZIP code.".to_string(),
            Outcome::NotCovered { contact } => contact.clone(),
            Outcome::AffiliateCovered { zip, city } => match city {
                Some(city) => format!(
                    "ZIP {} ({}) is served by one of our affiliate partners.",
                    zip, city
                ),
                None => format!("ZIP {} is served by one of our affiliate partners.", zip),
            },
            Outcome::Covered {
                zip,
                city,
                delivery_days,
            } => match city {
                Some(city) => format!(
                    "ZIP {} ({}) is in our delivery area. Delivery days: {}.",
                    zip, city, delivery_days
                ),
                None => format!(
                    "ZIP {} is in our delivery area. Delivery days: {}.",
                    zip, delivery_days
                ),
            },
        }
    }
}

/// Normalize a raw ZIP field: strip every non-digit character, then
/// left-pad with '0' to 5 characters.
///
/// The field is handled as text throughout to preserve leading zeros.
/// A field with no digits at all normalizes to the empty string, which
/// is an invalid table key.
pub fn normalize_zip(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return String::new();
    }
    format!("{digits:0>5}")
}

/// Check whether a trimmed query string is exactly 5 ASCII digits
pub fn is_valid_zip(input: &str) -> bool {
    input.len() == 5 && input.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_pads_short_zips() {
        assert_eq!(normalize_zip("7601"), "07601");
        assert_eq!(normalize_zip("1"), "00001");
    }

    #[test]
    fn normalize_strips_non_digits() {
        assert_eq!(normalize_zip("0 76-01"), "07601");
        assert_eq!(normalize_zip(" 08837 "), "08837");
    }

    #[test]
    fn normalize_without_digits_is_empty() {
        assert_eq!(normalize_zip(""), "");
        assert_eq!(normalize_zip("N/A"), "");
    }

    #[test]
    fn five_digit_validation() {
        assert!(is_valid_zip("08837"));
        assert!(!is_valid_zip("123"));
        assert!(!is_valid_zip("abcde"));
        assert!(!is_valid_zip(""));
        assert!(!is_valid_zip("088371"));
    }

    #[test]
    fn affiliate_message_omits_missing_city() {
        let with_city = Outcome::AffiliateCovered {
            zip: "08817".to_string(),
            city: Some("Edison".to_string()),
        };
        assert!(with_city.message().contains("(Edison)"));

        let without_city = Outcome::AffiliateCovered {
            zip: "08817".to_string(),
            city: None,
        };
        assert!(!without_city.message().contains('('));
    }
}
