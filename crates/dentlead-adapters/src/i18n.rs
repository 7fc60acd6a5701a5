use std::collections::HashMap;
use std::fs;
use std::path::Path;

use dentlead_ports::error::PortError;
use dentlead_ports::outbound::Translator;

/// Flat key → message catalog for one language, loaded from JSON.
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    messages: HashMap<String, String>,
}

impl CatalogTranslator {
    pub fn from_json(json: &str) -> Result<Self, PortError> {
        let messages = serde_json::from_str(json).map_err(|e| PortError::Decode(e.to_string()))?;
        Ok(Self { messages })
    }

    pub fn load(path: &Path) -> Result<Self, PortError> {
        let json = fs::read_to_string(path)
            .map_err(|e| PortError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// English messages for the form's own keys.
    pub fn english() -> Self {
        let messages = [
            ("phoneValidation.invalid", "Please enter a valid phone number."),
            (
                "phoneValidation.invalidPrefix",
                "Please enter the number without the leading 0.",
            ),
            ("phoneValidation.tooShort", "The phone number is too short."),
            ("phoneValidation.tooLong", "The phone number is too long."),
            ("contactForm.required", "Please fill in all required fields."),
            (
                "contactForm.unknownDialCode",
                "Please choose your country from the list.",
            ),
            (
                "contactForm.submitError",
                "We could not send your request. Please try again.",
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self { messages }
    }

    /// Catalog entries override this catalog's.
    pub fn merged_with(mut self, other: CatalogTranslator) -> Self {
        self.messages.extend(other.messages);
        self
    }
}

impl Translator for CatalogTranslator {
    fn t(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
