use serde::Serialize;

/// Digit-count bounds for the local part of a number under one dial code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhoneRule {
    pub min_digits: usize,
    pub max_digits: usize,
    pub forbidden_prefixes: &'static [&'static str],
}

impl PhoneRule {
    pub const fn new(min_digits: usize, max_digits: usize) -> Self {
        Self {
            min_digits,
            max_digits,
            forbidden_prefixes: &[],
        }
    }

    pub const fn with_forbidden_prefixes(mut self, prefixes: &'static [&'static str]) -> Self {
        self.forbidden_prefixes = prefixes;
        self
    }

    /// First forbidden prefix the digits start with, if any.
    pub fn forbidden_prefix_of(&self, digits: &str) -> Option<&'static str> {
        self.forbidden_prefixes
            .iter()
            .copied()
            .find(|prefix| digits.starts_with(prefix))
    }
}

/// Applied to any dial code without a dedicated row.
pub const DEFAULT_RULE: PhoneRule = PhoneRule::new(4, 15);

pub static PHONE_RULES: &[(&str, PhoneRule)] = &[
    ("+90", PhoneRule::new(10, 10).with_forbidden_prefixes(&["0", "00"])), // Turkey
    ("+44", PhoneRule::new(10, 10)), // UK
    ("+49", PhoneRule::new(10, 11)), // Germany
    ("+33", PhoneRule::new(9, 9)), // France
    ("+34", PhoneRule::new(9, 9)), // Spain
    ("+39", PhoneRule::new(9, 10)), // Italy
    ("+48", PhoneRule::new(9, 9)), // Poland
    ("+1", PhoneRule::new(10, 10)), // US/Canada
    ("+61", PhoneRule::new(9, 9)), // Australia
    ("+91", PhoneRule::new(10, 10)), // India
    ("+86", PhoneRule::new(11, 11)), // China
    ("+81", PhoneRule::new(10, 10)), // Japan
    ("+82", PhoneRule::new(10, 11)), // South Korea
    ("+55", PhoneRule::new(10, 11)), // Brazil
    ("+52", PhoneRule::new(10, 10)), // Mexico
    ("+7", PhoneRule::new(10, 10)), // Russia/Kazakhstan
    ("+31", PhoneRule::new(9, 9)), // Netherlands
    ("+32", PhoneRule::new(9, 9)), // Belgium
    ("+41", PhoneRule::new(9, 9)), // Switzerland
    ("+43", PhoneRule::new(10, 11)), // Austria
    ("+46", PhoneRule::new(9, 10)), // Sweden
    ("+47", PhoneRule::new(8, 8)), // Norway
    ("+45", PhoneRule::new(8, 8)), // Denmark
    ("+358", PhoneRule::new(9, 10)), // Finland
    ("+351", PhoneRule::new(9, 9)), // Portugal
    ("+30", PhoneRule::new(10, 10)), // Greece
    ("+420", PhoneRule::new(9, 9)), // Czech Republic
    ("+36", PhoneRule::new(9, 9)), // Hungary
    ("+40", PhoneRule::new(9, 9)), // Romania
    ("+380", PhoneRule::new(9, 9)), // Ukraine
    ("+375", PhoneRule::new(9, 9)), // Belarus
    ("+971", PhoneRule::new(9, 9)), // UAE
    ("+966", PhoneRule::new(9, 9)), // Saudi Arabia
    ("+20", PhoneRule::new(10, 10)), // Egypt
    ("+27", PhoneRule::new(9, 9)), // South Africa
    ("+234", PhoneRule::new(10, 10)), // Nigeria
    ("+62", PhoneRule::new(10, 12)), // Indonesia
    ("+60", PhoneRule::new(9, 10)), // Malaysia
    ("+66", PhoneRule::new(9, 9)), // Thailand
    ("+84", PhoneRule::new(9, 10)), // Vietnam
    ("+63", PhoneRule::new(10, 10)), // Philippines
    ("+92", PhoneRule::new(10, 10)), // Pakistan
    ("+880", PhoneRule::new(10, 10)), // Bangladesh
    ("+94", PhoneRule::new(9, 9)), // Sri Lanka
    ("+972", PhoneRule::new(9, 9)), // Israel
    ("+964", PhoneRule::new(10, 10)), // Iraq
    ("+98", PhoneRule::new(10, 10)), // Iran
];

pub fn rule_for(dial_code: &str) -> &'static PhoneRule {
    PHONE_RULES
        .iter()
        .find(|(code, _)| *code == dial_code)
        .map(|(_, rule)| rule)
        .unwrap_or(&DEFAULT_RULE)
}

pub fn max_digits_for(dial_code: &str) -> usize {
    rule_for(dial_code).max_digits
}
