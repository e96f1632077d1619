//! Typed decoders and the record assembler.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::codes::{EyeColor, Gender, HairColor, IssuingCountry, NameSuffix, Truncation};
use crate::extract::Extraction;
use crate::fields::FieldKey;
use crate::header;
use crate::license::DecodedLicense;
use crate::version::{profile_for, HeightFormat, NameFormat, VersionProfile};

const INCHES_PER_CENTIMETER: f64 = 0.393701;

lazy_static! {
    // Feet digit followed by the two inch digits of the packed legacy
    // height encoding.
    static ref PACKED_HEIGHT: Regex = Regex::new(r"([0-9])([0-9]{2})").unwrap();
}

/// Decodes one raw PDF417 payload.
///
/// Construction detects the standard version and fixes the decode
/// profile; every decoder is then a pure function of the profile and the
/// raw text. The parser borrows the payload and never mutates shared
/// state, so independent parsers may run concurrently.
pub struct Parser<'a> {
    data: &'a str,
    version: Option<u8>,
    profile: &'static VersionProfile,
}

impl<'a> Parser<'a> {
    pub fn new(data: &'a str) -> Self {
        let version = header::version(data);
        Self {
            data,
            version,
            profile: profile_for(version),
        }
    }

    /// The AAMVA version detected in the header, if any.
    pub fn version(&self) -> Option<u8> {
        self.version
    }

    /// The number of subfiles announced by the header.
    pub fn subfile_count(&self) -> u8 {
        header::subfile_count(self.data)
    }

    /// Raw tri-state extraction for `key` under the active table.
    pub fn extract(&self, key: FieldKey) -> Extraction {
        self.profile.table.extract(key, self.data)
    }

    /// A free-text field; empty and absent both yield `None`.
    pub fn parse_string(&self, key: FieldKey) -> Option<String> {
        self.extract(key).into_value()
    }

    /// A numeric field, captured as a run of word characters; absence or
    /// a malformed number yields `None`.
    pub fn parse_number(&self, key: FieldKey) -> Option<f64> {
        self.profile
            .table
            .extract_word(key, self.data)
            .into_value()?
            .parse()
            .ok()
    }

    /// A date field in the active version's digit order; malformed
    /// digits yield `None`, never an error.
    pub fn parse_date(&self, key: FieldKey) -> Option<NaiveDate> {
        let digits = self.parse_string(key)?;
        NaiveDate::parse_from_str(&digits, self.profile.dates.format()).ok()
    }

    pub fn parse_gender(&self) -> Gender {
        Gender::from_code(self.extract(FieldKey::Gender).token())
    }

    pub fn parse_eye_color(&self) -> EyeColor {
        EyeColor::from_code(self.extract(FieldKey::EyeColor).token())
    }

    pub fn parse_hair_color(&self) -> HairColor {
        HairColor::from_code(self.extract(FieldKey::HairColor).token())
    }

    pub fn parse_country(&self) -> IssuingCountry {
        IssuingCountry::from_code(self.extract(FieldKey::Country).token())
    }

    pub fn parse_truncation(&self, key: FieldKey) -> Truncation {
        Truncation::from_code(self.extract(key).token())
    }

    /// Name suffix from the discrete designator, falling back to the
    /// composite name field on legacy versions.
    pub fn parse_name_suffix(&self) -> NameSuffix {
        let token = self
            .parse_string(FieldKey::Suffix)
            .or_else(|| self.composite_name_component(FieldKey::Suffix));
        match token {
            Some(token) => NameSuffix::from_code(&token),
            None => NameSuffix::Unknown,
        }
    }

    pub fn parse_first_name(&self) -> Option<String> {
        self.parse_string(FieldKey::FirstName)
            .or_else(|| self.composite_name_component(FieldKey::FirstName))
    }

    pub fn parse_last_name(&self) -> Option<String> {
        self.parse_string(FieldKey::LastName)
            .or_else(|| self.composite_name_component(FieldKey::LastName))
    }

    pub fn parse_middle_name(&self) -> Option<String> {
        self.parse_string(FieldKey::MiddleName)
            .or_else(|| self.composite_name_component(FieldKey::MiddleName))
    }

    /// Height in inches under the active version's encoding.
    pub fn parse_height(&self) -> Option<f64> {
        let raw = self.parse_string(FieldKey::Height)?;

        let value = match self.profile.height {
            HeightFormat::Modern => self.parse_number(FieldKey::Height)?,
            HeightFormat::PackedFeetInches => {
                let packed = PACKED_HEIGHT.captures(&raw)?;
                let feet: f64 = packed[1].parse().ok()?;
                let inches: f64 = packed[2].parse().ok()?;
                feet * 12.0 + inches
            }
        };

        if raw.contains("cm") {
            Some((value * INCHES_PER_CENTIMETER).round())
        } else {
            Some(value)
        }
    }

    /// A `"1"`-means-true indicator field (organ donor, veteran).
    pub fn parse_indicator(&self, key: FieldKey) -> Option<bool> {
        self.parse_string(key).map(|value| value == "1")
    }

    /// One component of the composite driver-license name field, used
    /// when the active version has no discrete designator value for the
    /// requested part. Components are ordered last, first, middle,
    /// suffix; a missing component yields `None`.
    fn composite_name_component(&self, key: FieldKey) -> Option<String> {
        if self.profile.names != NameFormat::CompositeFallback {
            return None;
        }

        let composite = self.parse_string(FieldKey::DriverLicenseName)?;
        let components: Vec<&str> = composite.split(',').filter(|c| !c.is_empty()).collect();

        let index = match key {
            FieldKey::LastName => 0,
            FieldKey::FirstName => 1,
            FieldKey::MiddleName => 2,
            FieldKey::Suffix => 3,
            _ => return None,
        };
        components.get(index).map(|c| (*c).to_owned())
    }

    /// Runs every decoder and assembles the output record.
    pub fn parse(&self) -> DecodedLicense {
        match self.version {
            Some(version) => debug!("decoding AAMVA version {version} record"),
            None => debug!("no AAMVA version detected, using baseline designator table"),
        }

        DecodedLicense {
            first_name: self.parse_first_name(),
            last_name: self.parse_last_name(),
            middle_name: self.parse_middle_name(),
            suffix: self.parse_name_suffix(),
            first_name_alias: self.parse_string(FieldKey::FirstNameAlias),
            last_name_alias: self.parse_string(FieldKey::LastNameAlias),
            suffix_alias: self.parse_string(FieldKey::SuffixAlias),
            first_name_truncation: self.parse_truncation(FieldKey::FirstNameTruncation),
            middle_name_truncation: self.parse_truncation(FieldKey::MiddleNameTruncation),
            last_name_truncation: self.parse_truncation(FieldKey::LastNameTruncation),
            expiration_date: self.parse_date(FieldKey::ExpirationDate),
            issue_date: self.parse_date(FieldKey::IssueDate),
            date_of_birth: self.parse_date(FieldKey::BirthDate),
            gender: self.parse_gender(),
            eye_color: self.parse_eye_color(),
            hair_color: self.parse_hair_color(),
            height: self.parse_height(),
            weight: self.parse_number(FieldKey::WeightPounds),
            street_address: self.parse_string(FieldKey::StreetAddress),
            street_address_supplement: self.parse_string(FieldKey::StreetAddressSupplement),
            city: self.parse_string(FieldKey::City),
            state: self.parse_string(FieldKey::State),
            postal_code: self.parse_string(FieldKey::PostalCode),
            place_of_birth: self.parse_string(FieldKey::PlaceOfBirth),
            country: self.parse_country(),
            customer_id: self.parse_string(FieldKey::CustomerId),
            document_id: self.parse_string(FieldKey::DocumentId),
            audit_information: self.parse_string(FieldKey::AuditInformation),
            inventory_control_number: self.parse_string(FieldKey::InventoryControlNumber),
            is_organ_donor: self.parse_indicator(FieldKey::OrganDonorIndicator),
            is_veteran: self.parse_indicator(FieldKey::VeteranIndicator),
            version: self.version,
            pdf417: self.data.to_owned(),
        }
    }
}
