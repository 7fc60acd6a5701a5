pub mod flag;

use serde::Serialize;

pub use flag::flag_glyph;

/// A territory and the international dial code used to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CountryEntry {
    pub iso_code: &'static str,
    pub dial_code: &'static str,
}

impl CountryEntry {
    pub const fn new(iso_code: &'static str, dial_code: &'static str) -> Self {
        Self {
            iso_code,
            dial_code,
        }
    }

    pub fn flag(&self) -> Option<String> {
        flag_glyph(self.iso_code)
    }
}

/// Selectable territories in display order. Dial codes repeat (e.g. "+1");
/// lookups by dial code resolve to the earliest entry.
pub static COUNTRIES: &[CountryEntry] = &[
    CountryEntry::new("AF", "+93"),
    CountryEntry::new("AL", "+355"),
    CountryEntry::new("DZ", "+213"),
    CountryEntry::new("AS", "+1-684"),
    CountryEntry::new("AD", "+376"),
    CountryEntry::new("AO", "+244"),
    CountryEntry::new("AI", "+1-264"),
    CountryEntry::new("AG", "+1-268"),
    CountryEntry::new("AR", "+54"),
    CountryEntry::new("AM", "+374"),
    CountryEntry::new("AW", "+297"),
    CountryEntry::new("AU", "+61"),
    CountryEntry::new("AT", "+43"),
    CountryEntry::new("AZ", "+994"),
    CountryEntry::new("BS", "+1-242"),
    CountryEntry::new("BH", "+973"),
    CountryEntry::new("BD", "+880"),
    CountryEntry::new("BB", "+1-246"),
    CountryEntry::new("BY", "+375"),
    CountryEntry::new("BE", "+32"),
    CountryEntry::new("BZ", "+501"),
    CountryEntry::new("BJ", "+229"),
    CountryEntry::new("BM", "+1-441"),
    CountryEntry::new("BT", "+975"),
    CountryEntry::new("BO", "+591"),
    CountryEntry::new("BA", "+387"),
    CountryEntry::new("BW", "+267"),
    CountryEntry::new("BR", "+55"),
    CountryEntry::new("IO", "+246"),
    CountryEntry::new("VG", "+1-284"),
    CountryEntry::new("BN", "+673"),
    CountryEntry::new("BG", "+359"),
    CountryEntry::new("BF", "+226"),
    CountryEntry::new("BI", "+257"),
    CountryEntry::new("KH", "+855"),
    CountryEntry::new("CM", "+237"),
    CountryEntry::new("CA", "+1"),
    CountryEntry::new("CV", "+238"),
    CountryEntry::new("KY", "+1-345"),
    CountryEntry::new("CF", "+236"),
    CountryEntry::new("TD", "+235"),
    CountryEntry::new("CL", "+56"),
    CountryEntry::new("CN", "+86"),
    CountryEntry::new("CX", "+61"),
    CountryEntry::new("CC", "+61"),
    CountryEntry::new("CO", "+57"),
    CountryEntry::new("KM", "+269"),
    CountryEntry::new("CK", "+682"),
    CountryEntry::new("CR", "+506"),
    CountryEntry::new("HR", "+385"),
    CountryEntry::new("CU", "+53"),
    CountryEntry::new("CW", "+599"),
    CountryEntry::new("CY", "+357"),
    CountryEntry::new("CZ", "+420"),
    CountryEntry::new("CD", "+243"),
    CountryEntry::new("DK", "+45"),
    CountryEntry::new("DJ", "+253"),
    CountryEntry::new("DM", "+1-767"),
    CountryEntry::new("DO", "+1-809"),
    CountryEntry::new("EC", "+593"),
    CountryEntry::new("EG", "+20"),
    CountryEntry::new("SV", "+503"),
    CountryEntry::new("GQ", "+240"),
    CountryEntry::new("ER", "+291"),
    CountryEntry::new("EE", "+372"),
    CountryEntry::new("ET", "+251"),
    CountryEntry::new("FK", "+500"),
    CountryEntry::new("FO", "+298"),
    CountryEntry::new("FJ", "+679"),
    CountryEntry::new("FI", "+358"),
    CountryEntry::new("FR", "+33"),
    CountryEntry::new("PF", "+689"),
    CountryEntry::new("GA", "+241"),
    CountryEntry::new("GM", "+220"),
    CountryEntry::new("GE", "+995"),
    CountryEntry::new("DE", "+49"),
    CountryEntry::new("GH", "+233"),
    CountryEntry::new("GI", "+350"),
    CountryEntry::new("GR", "+30"),
    CountryEntry::new("GL", "+299"),
    CountryEntry::new("GD", "+1-473"),
    CountryEntry::new("GU", "+1-671"),
    CountryEntry::new("GT", "+502"),
    CountryEntry::new("GG", "+44-1481"),
    CountryEntry::new("GN", "+224"),
    CountryEntry::new("GW", "+245"),
    CountryEntry::new("GY", "+592"),
    CountryEntry::new("HT", "+509"),
    CountryEntry::new("HN", "+504"),
    CountryEntry::new("HK", "+852"),
    CountryEntry::new("HU", "+36"),
    CountryEntry::new("IS", "+354"),
    CountryEntry::new("IN", "+91"),
    CountryEntry::new("ID", "+62"),
    CountryEntry::new("IR", "+98"),
    CountryEntry::new("IQ", "+964"),
    CountryEntry::new("IE", "+353"),
    CountryEntry::new("IM", "+44-1624"),
    CountryEntry::new("IL", "+972"),
    CountryEntry::new("IT", "+39"),
    CountryEntry::new("CI", "+225"),
    CountryEntry::new("JM", "+1-876"),
    CountryEntry::new("JP", "+81"),
    CountryEntry::new("JE", "+44-1534"),
    CountryEntry::new("JO", "+962"),
    CountryEntry::new("KZ", "+7"),
    CountryEntry::new("KE", "+254"),
    CountryEntry::new("KI", "+686"),
    CountryEntry::new("XK", "+383"),
    CountryEntry::new("KW", "+965"),
    CountryEntry::new("KG", "+996"),
    CountryEntry::new("LA", "+856"),
    CountryEntry::new("LV", "+371"),
    CountryEntry::new("LB", "+961"),
    CountryEntry::new("LS", "+266"),
    CountryEntry::new("LR", "+231"),
    CountryEntry::new("LY", "+218"),
    CountryEntry::new("LI", "+423"),
    CountryEntry::new("LT", "+370"),
    CountryEntry::new("LU", "+352"),
    CountryEntry::new("MO", "+853"),
    CountryEntry::new("MK", "+389"),
    CountryEntry::new("MG", "+261"),
    CountryEntry::new("MW", "+265"),
    CountryEntry::new("MY", "+60"),
    CountryEntry::new("MV", "+960"),
    CountryEntry::new("ML", "+223"),
    CountryEntry::new("MT", "+356"),
    CountryEntry::new("MH", "+692"),
    CountryEntry::new("MR", "+222"),
    CountryEntry::new("MU", "+230"),
    CountryEntry::new("YT", "+262"),
    CountryEntry::new("MX", "+52"),
    CountryEntry::new("FM", "+691"),
    CountryEntry::new("MD", "+373"),
    CountryEntry::new("MC", "+377"),
    CountryEntry::new("MN", "+976"),
    CountryEntry::new("ME", "+382"),
    CountryEntry::new("MS", "+1-664"),
    CountryEntry::new("MA", "+212"),
    CountryEntry::new("MZ", "+258"),
    CountryEntry::new("MM", "+95"),
    CountryEntry::new("NA", "+264"),
    CountryEntry::new("NR", "+674"),
    CountryEntry::new("NP", "+977"),
    CountryEntry::new("NL", "+31"),
    CountryEntry::new("AN", "+599"),
    CountryEntry::new("NC", "+687"),
    CountryEntry::new("NZ", "+64"),
    CountryEntry::new("NI", "+505"),
    CountryEntry::new("NE", "+227"),
    CountryEntry::new("NG", "+234"),
    CountryEntry::new("NU", "+683"),
    CountryEntry::new("KP", "+850"),
    CountryEntry::new("MP", "+1-670"),
    CountryEntry::new("NO", "+47"),
    CountryEntry::new("OM", "+968"),
    CountryEntry::new("PK", "+92"),
    CountryEntry::new("PW", "+680"),
    CountryEntry::new("PS", "+970"),
    CountryEntry::new("PA", "+507"),
    CountryEntry::new("PG", "+675"),
    CountryEntry::new("PY", "+595"),
    CountryEntry::new("PE", "+51"),
    CountryEntry::new("PH", "+63"),
    CountryEntry::new("PN", "+64"),
    CountryEntry::new("PL", "+48"),
    CountryEntry::new("PT", "+351"),
    CountryEntry::new("PR", "+1-787"),
    CountryEntry::new("QA", "+974"),
    CountryEntry::new("CG", "+242"),
    CountryEntry::new("RE", "+262"),
    CountryEntry::new("RO", "+40"),
    CountryEntry::new("RU", "+7"),
    CountryEntry::new("RW", "+250"),
    CountryEntry::new("BL", "+590"),
    CountryEntry::new("SH", "+290"),
    CountryEntry::new("KN", "+1-869"),
    CountryEntry::new("LC", "+1-758"),
    CountryEntry::new("MF", "+590"),
    CountryEntry::new("PM", "+508"),
    CountryEntry::new("VC", "+1-784"),
    CountryEntry::new("WS", "+685"),
    CountryEntry::new("SM", "+378"),
    CountryEntry::new("ST", "+239"),
    CountryEntry::new("SA", "+966"),
    CountryEntry::new("SN", "+221"),
    CountryEntry::new("RS", "+381"),
    CountryEntry::new("SC", "+248"),
    CountryEntry::new("SL", "+232"),
    CountryEntry::new("SG", "+65"),
    CountryEntry::new("SX", "+1-721"),
    CountryEntry::new("SK", "+421"),
    CountryEntry::new("SI", "+386"),
    CountryEntry::new("SB", "+677"),
    CountryEntry::new("SO", "+252"),
    CountryEntry::new("ZA", "+27"),
    CountryEntry::new("KR", "+82"),
    CountryEntry::new("SS", "+211"),
    CountryEntry::new("ES", "+34"),
    CountryEntry::new("LK", "+94"),
    CountryEntry::new("SD", "+249"),
    CountryEntry::new("SR", "+597"),
    CountryEntry::new("SJ", "+47"),
    CountryEntry::new("SZ", "+268"),
    CountryEntry::new("SE", "+46"),
    CountryEntry::new("CH", "+41"),
    CountryEntry::new("SY", "+963"),
    CountryEntry::new("TW", "+886"),
    CountryEntry::new("TJ", "+992"),
    CountryEntry::new("TZ", "+255"),
    CountryEntry::new("TH", "+66"),
    CountryEntry::new("TL", "+670"),
    CountryEntry::new("TG", "+228"),
    CountryEntry::new("TK", "+690"),
    CountryEntry::new("TO", "+676"),
    CountryEntry::new("TT", "+1-868"),
    CountryEntry::new("TN", "+216"),
    CountryEntry::new("TR", "+90"),
    CountryEntry::new("TM", "+993"),
    CountryEntry::new("TC", "+1-649"),
    CountryEntry::new("TV", "+688"),
    CountryEntry::new("VI", "+1-340"),
    CountryEntry::new("UG", "+256"),
    CountryEntry::new("UA", "+380"),
    CountryEntry::new("AE", "+971"),
    CountryEntry::new("GB", "+44"),
    CountryEntry::new("US", "+1"),
    CountryEntry::new("UY", "+598"),
    CountryEntry::new("UZ", "+998"),
    CountryEntry::new("VU", "+678"),
    CountryEntry::new("VA", "+379"),
    CountryEntry::new("VE", "+58"),
    CountryEntry::new("VN", "+84"),
    CountryEntry::new("WF", "+681"),
    CountryEntry::new("EH", "+212"),
    CountryEntry::new("YE", "+967"),
    CountryEntry::new("ZM", "+260"),
    CountryEntry::new("ZW", "+263"),
];

pub fn all() -> &'static [CountryEntry] {
    COUNTRIES
}

pub fn find_by_dial_code(dial_code: &str) -> Option<&'static CountryEntry> {
    COUNTRIES.iter().find(|c| c.dial_code == dial_code)
}

pub fn is_known_dial_code(dial_code: &str) -> bool {
    find_by_dial_code(dial_code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn directory_covers_the_world() {
        assert!(COUNTRIES.len() >= 230);
    }

    #[test]
    fn iso_codes_are_two_uppercase_letters() {
        for entry in COUNTRIES {
            assert_eq!(entry.iso_code.len(), 2, "{}", entry.iso_code);
            assert!(entry.iso_code.bytes().all(|b| b.is_ascii_uppercase()));
        }
    }

    #[test]
    fn dial_codes_start_with_plus() {
        for entry in COUNTRIES {
            assert!(entry.dial_code.starts_with('+'), "{}", entry.iso_code);
        }
    }

    #[test]
    fn entries_are_unique_pairs() {
        let pairs: HashSet<_> = COUNTRIES.iter().map(|c| (c.iso_code, c.dial_code)).collect();
        assert_eq!(pairs.len(), COUNTRIES.len());
    }

    #[test]
    fn shared_dial_code_resolves_to_first_in_order() {
        // CA precedes US in directory order
        assert_eq!(find_by_dial_code("+1").unwrap().iso_code, "CA");
        // KZ precedes RU
        assert_eq!(find_by_dial_code("+7").unwrap().iso_code, "KZ");
        assert_eq!(find_by_dial_code("+61").unwrap().iso_code, "AU");
    }

    #[test]
    fn sub_codes_are_distinct_entries() {
        assert_eq!(find_by_dial_code("+1-684").unwrap().iso_code, "AS");
        assert_eq!(find_by_dial_code("+44-1481").unwrap().iso_code, "GG");
        assert_eq!(find_by_dial_code("+44").unwrap().iso_code, "GB");
    }

    #[test]
    fn home_country_is_listed() {
        let home = find_by_dial_code(crate::locale::HOME_DIAL_CODE).unwrap();
        assert_eq!(home.iso_code, "TR");
    }

    #[test]
    fn unknown_dial_code_not_found() {
        assert!(!is_known_dial_code("+999"));
    }
}
