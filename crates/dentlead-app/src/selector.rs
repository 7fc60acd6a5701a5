use dentlead_core::country::{self, CountryEntry, COUNTRIES};
use dentlead_core::error::DomainError;

use crate::error::AppError;

/// Screen rectangle the dropdown last occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

/// One row of the open dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub iso_code: &'static str,
    pub dial_code: &'static str,
    pub flag: Option<String>,
    pub selected: bool,
}

/// Dropdown over the country directory.
#[derive(Debug, Clone)]
pub struct CountrySelector {
    value: String,
    open: bool,
    region: Region,
}

impl CountrySelector {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            open: false,
            region: Region::default(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    /// Closes the dropdown when the click lands outside it. Returns whether it closed.
    pub fn handle_click(&mut self, x: u16, y: u16) -> bool {
        if self.open && !self.region.contains(x, y) {
            self.open = false;
            return true;
        }
        false
    }

    /// Entry shown on the closed button. Falls back to the first directory entry
    /// when the value matches nothing.
    pub fn selected_entry(&self) -> &'static CountryEntry {
        country::find_by_dial_code(&self.value).unwrap_or(&COUNTRIES[0])
    }

    pub fn options(&self) -> impl Iterator<Item = SelectorOption> + '_ {
        COUNTRIES.iter().map(move |entry| SelectorOption {
            iso_code: entry.iso_code,
            dial_code: entry.dial_code,
            flag: entry.flag(),
            selected: entry.dial_code == self.value,
        })
    }

    /// Picks the entry at `index`, closes the dropdown and hands back the
    /// chosen dial code for the form.
    pub fn select(&mut self, index: usize) -> Option<&'static str> {
        let entry = COUNTRIES.get(index)?;
        self.value = entry.dial_code.to_string();
        self.open = false;
        Some(entry.dial_code)
    }

    /// Sets the value directly; only dial codes from the directory are accepted.
    pub fn set_value(&mut self, dial_code: &str) -> Result<(), AppError> {
        if !country::is_known_dial_code(dial_code) {
            return Err(DomainError::UnknownDialCode(dial_code.to_string()).into());
        }
        self.value = dial_code.to_string();
        Ok(())
    }
}
