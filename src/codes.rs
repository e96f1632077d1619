//! Closed enumerations for the coded data elements.
//!
//! Each type carries an explicit sentinel variant so that a coded field in
//! the output record is always populated: a designator that is absent,
//! empty, or holds an unrecognized code decodes to the sentinel rather
//! than to "no value".

use crate::macros::coded_values;

/// A coded value that does not appear in the relevant AAMVA code table.
///
/// Only surfaced through the [`FromStr`](std::str::FromStr) impls; the
/// decode path uses the infallible `from_code` constructors instead.
#[derive(Debug, thiserror::Error)]
#[error("unrecognized AAMVA code {0:?}")]
pub struct UnrecognizedCode(pub String);

coded_values! {
    /// Sex of the cardholder (DBC). "1" is male, "2" is female; the
    /// standard defines no further codes.
    pub enum Gender {
        Male: ["1"],
        Female: ["2"];
        sentinel Other
    }
}

coded_values! {
    /// Eye color of the cardholder (DAY), AAMVA D20 codes.
    pub enum EyeColor {
        Black: ["BLK"],
        Blue: ["BLU"],
        Brown: ["BRO"],
        Gray: ["GRY"],
        Green: ["GRN"],
        Hazel: ["HAZ"],
        Maroon: ["MAR"],
        Pink: ["PNK"],
        Dichromatic: ["DIC"];
        sentinel Unknown
    }
}

coded_values! {
    /// Hair color of the cardholder (DAZ), AAMVA D20 codes.
    ///
    /// "BR" is a pre-D20 abbreviation for brown seen on version 1 cards.
    pub enum HairColor {
        Bald: ["BAL"],
        Black: ["BLK"],
        Blond: ["BLN"],
        Brown: ["BRO", "BR"],
        Grey: ["GRY"],
        Red: ["RED"],
        Sandy: ["SDY"],
        White: ["WHI"];
        sentinel Unknown
    }
}

coded_values! {
    /// Whether a name field was shortened to fit the encoding
    /// (DDE/DDF/DDG).
    pub enum Truncation {
        Truncated: ["T"],
        None: ["N"];
        sentinel Unknown
    }
}

coded_values! {
    /// Country of the issuing jurisdiction (DCG).
    pub enum IssuingCountry {
        UnitedStates: ["USA"],
        Canada: ["CAN"];
        sentinel Unknown
    }
}

coded_values! {
    /// Name suffix of the cardholder, as ordinal or Roman-numeral tokens.
    pub enum NameSuffix {
        Junior: ["JR"],
        Senior: ["SR"],
        First: ["1ST", "I"],
        Second: ["2ND", "II"],
        Third: ["3RD", "III"],
        Fourth: ["4TH", "IV"],
        Fifth: ["5TH", "V"],
        Sixth: ["6TH", "VI"],
        Seventh: ["7TH", "VII"],
        Eighth: ["8TH", "VIII"],
        Ninth: ["9TH", "IX"];
        sentinel Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_codes() {
        assert_eq!(Gender::from_code("1"), Gender::Male);
        assert_eq!(Gender::from_code("2"), Gender::Female);
        assert_eq!(Gender::from_code("3"), Gender::Other);
        assert_eq!(Gender::from_code(""), Gender::Other);
    }

    #[test]
    fn eye_color_codes() {
        let table = [
            ("BLK", EyeColor::Black),
            ("BLU", EyeColor::Blue),
            ("BRO", EyeColor::Brown),
            ("GRY", EyeColor::Gray),
            ("GRN", EyeColor::Green),
            ("HAZ", EyeColor::Hazel),
            ("MAR", EyeColor::Maroon),
            ("PNK", EyeColor::Pink),
            ("DIC", EyeColor::Dichromatic),
        ];
        for (code, expected) in table {
            assert_eq!(EyeColor::from_code(code), expected);
            assert_eq!(expected.code(), Some(code));
        }
        assert_eq!(EyeColor::from_code("XXX"), EyeColor::Unknown);
    }

    #[test]
    fn hair_color_codes() {
        let table = [
            ("BAL", HairColor::Bald),
            ("BLK", HairColor::Black),
            ("BLN", HairColor::Blond),
            ("BRO", HairColor::Brown),
            ("BR", HairColor::Brown),
            ("GRY", HairColor::Grey),
            ("RED", HairColor::Red),
            ("SDY", HairColor::Sandy),
            ("WHI", HairColor::White),
        ];
        for (code, expected) in table {
            assert_eq!(HairColor::from_code(code), expected);
        }
        assert_eq!(HairColor::from_code("FFF"), HairColor::Unknown);
        assert_eq!(HairColor::Brown.code(), Some("BRO"));
    }

    #[test]
    fn truncation_codes() {
        assert_eq!(Truncation::from_code("T"), Truncation::Truncated);
        assert_eq!(Truncation::from_code("N"), Truncation::None);
        assert_eq!(Truncation::from_code("U"), Truncation::Unknown);
    }

    #[test]
    fn country_codes() {
        assert_eq!(IssuingCountry::from_code("USA"), IssuingCountry::UnitedStates);
        assert_eq!(IssuingCountry::from_code("CAN"), IssuingCountry::Canada);
        assert_eq!(IssuingCountry::from_code("MEX"), IssuingCountry::Unknown);
    }

    #[test]
    fn name_suffix_full_token_set() {
        let table = [
            ("JR", NameSuffix::Junior),
            ("SR", NameSuffix::Senior),
            ("1ST", NameSuffix::First),
            ("2ND", NameSuffix::Second),
            ("3RD", NameSuffix::Third),
            ("4TH", NameSuffix::Fourth),
            ("5TH", NameSuffix::Fifth),
            ("6TH", NameSuffix::Sixth),
            ("7TH", NameSuffix::Seventh),
            ("8TH", NameSuffix::Eighth),
            ("9TH", NameSuffix::Ninth),
            ("I", NameSuffix::First),
            ("II", NameSuffix::Second),
            ("III", NameSuffix::Third),
            ("IV", NameSuffix::Fourth),
            ("V", NameSuffix::Fifth),
            ("VI", NameSuffix::Sixth),
            ("VII", NameSuffix::Seventh),
            ("VIII", NameSuffix::Eighth),
            ("IX", NameSuffix::Ninth),
        ];
        for (token, expected) in table {
            assert_eq!(NameSuffix::from_code(token), expected);
        }
        assert_eq!(NameSuffix::from_code("ESQ"), NameSuffix::Unknown);
    }

    #[test]
    fn from_str_rejects_unknown_codes() {
        assert!("GRN".parse::<EyeColor>().is_ok());
        assert!("FFF".parse::<HairColor>().is_err());
    }
}
