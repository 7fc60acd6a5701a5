use serde::Serialize;

/// A localized variant of the landing page, keyed by its URL slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Locale {
    pub slug: &'static str,
    /// Two-letter upper-case language code sent with the lead.
    pub language: &'static str,
    /// Dial code preselected for visitors landing on this variant.
    pub dial_code: &'static str,
}

pub static LOCALES: &[Locale] = &[
    Locale {
        slug: "dental-implant-in-turkey",
        language: "EN",
        dial_code: "+44",
    },
    Locale {
        slug: "dis-implanti-turkiye",
        language: "TR",
        dial_code: "+90",
    },
    Locale {
        slug: "zahnimplantat-in-der-turkei",
        language: "DE",
        dial_code: "+49",
    },
    Locale {
        slug: "implante-dental-en-turquia",
        language: "ES",
        dial_code: "+34",
    },
    Locale {
        slug: "implant-dentaire-en-turquie",
        language: "FR",
        dial_code: "+33",
    },
    Locale {
        slug: "impianto-dentale-in-turchia",
        language: "IT",
        dial_code: "+39",
    },
];

pub const FALLBACK_SLUG: &str = "dental-implant-in-turkey";

/// Thank-you page of the fallback locale.
pub const FALLBACK_THANK_YOU: &str = "/dental-implant-in-turkey/thank-you";

/// Dial code a fresh form starts with before any inference: the clinic's home country.
pub const HOME_DIAL_CODE: &str = "+90";

/// First non-empty segment of a URL path.
pub fn slug_from_path(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').find(|segment| !segment.is_empty())
}

impl Locale {
    pub fn for_slug(slug: &str) -> Option<&'static Locale> {
        LOCALES.iter().find(|l| l.slug == slug)
    }

    /// Locale for the page at `path`, or the fallback locale when the path
    /// carries no known slug.
    pub fn for_path(path: &str) -> &'static Locale {
        slug_from_path(path)
            .and_then(Self::for_slug)
            .unwrap_or_else(Self::fallback)
    }

    pub fn fallback() -> &'static Locale {
        &LOCALES[0]
    }
}

/// Where the visitor lands after a lead is accepted. Unknown slugs keep their
/// own path; a missing slug, or one with anything but visible ASCII, uses the
/// fallback page.
pub fn thank_you_path(page_path: &str) -> String {
    match slug_from_path(page_path) {
        Some(slug) if slug.bytes().all(|b| b.is_ascii_graphic()) => format!("/{slug}/thank-you"),
        _ => FALLBACK_THANK_YOU.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_first_non_empty_segment() {
        assert_eq!(slug_from_path("/dis-implanti-turkiye"), Some("dis-implanti-turkiye"));
        assert_eq!(slug_from_path("//dis-implanti-turkiye/x"), Some("dis-implanti-turkiye"));
        assert_eq!(slug_from_path("/abc?utm=1"), Some("abc"));
        assert_eq!(slug_from_path("/"), None);
        assert_eq!(slug_from_path(""), None);
    }

    #[test]
    fn known_slug_resolves_locale() {
        let locale = Locale::for_path("/zahnimplantat-in-der-turkei/");
        assert_eq!(locale.language, "DE");
        assert_eq!(locale.dial_code, "+49");
    }

    #[test]
    fn unknown_slug_falls_back_to_english() {
        assert_eq!(Locale::for_path("/whatever").slug, FALLBACK_SLUG);
        assert_eq!(Locale::for_path("/").language, "EN");
    }

    #[test]
    fn locale_dial_codes_exist_in_directory() {
        for locale in LOCALES {
            assert!(crate::country::is_known_dial_code(locale.dial_code));
        }
    }

    #[test]
    fn thank_you_follows_page_slug() {
        assert_eq!(
            thank_you_path("/implante-dental-en-turquia"),
            "/implante-dental-en-turquia/thank-you"
        );
        assert_eq!(thank_you_path("/"), "/dental-implant-in-turkey/thank-you");
        assert_eq!(thank_you_path("/promo"), "/promo/thank-you");
    }

    #[test]
    fn thank_you_refuses_control_and_non_ascii_slugs() {
        assert_eq!(thank_you_path("/promo\npage"), FALLBACK_THANK_YOU);
        assert_eq!(thank_you_path("/promo\rpage"), FALLBACK_THANK_YOU);
        assert_eq!(thank_you_path("/promo\u{7f}"), FALLBACK_THANK_YOU);
        assert_eq!(thank_you_path("/diş-implantı"), FALLBACK_THANK_YOU);
        assert_eq!(thank_you_path("/"), FALLBACK_THANK_YOU);
    }
}
