//! The decoded output record.

use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codes::{EyeColor, Gender, HairColor, IssuingCountry, NameSuffix, Truncation};

/// Everything decoded from one PDF417 payload.
///
/// Free-text, numeric and date fields are optional; coded fields are
/// always populated, using each enumeration's sentinel variant when the
/// designator is absent, empty or unrecognized. The record also carries
/// the detected standard version and the original raw payload for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedLicense {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub suffix: NameSuffix,
    pub first_name_alias: Option<String>,
    pub last_name_alias: Option<String>,
    pub suffix_alias: Option<String>,
    pub first_name_truncation: Truncation,
    pub middle_name_truncation: Truncation,
    pub last_name_truncation: Truncation,
    pub expiration_date: Option<NaiveDate>,
    pub issue_date: Option<NaiveDate>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub eye_color: EyeColor,
    pub hair_color: HairColor,
    /// Height in inches, whatever the encoding on the card.
    pub height: Option<f64>,
    /// Weight in pounds.
    pub weight: Option<f64>,
    pub street_address: Option<String>,
    pub street_address_supplement: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub place_of_birth: Option<String>,
    pub country: IssuingCountry,
    /// Customer id number, e.g. the driver license number.
    pub customer_id: Option<String>,
    /// Unique document discriminator.
    pub document_id: Option<String>,
    pub audit_information: Option<String>,
    pub inventory_control_number: Option<String>,
    pub is_organ_donor: Option<bool>,
    pub is_veteran: Option<bool>,
    /// The AAMVA version detected in the header, if any.
    pub version: Option<u8>,
    /// The raw payload this record was decoded from.
    pub pdf417: String,
}

impl DecodedLicense {
    /// True when an expiration date is present and strictly before now.
    /// An absent date is never expired.
    pub fn is_expired(&self) -> bool {
        match self.expiration_date {
            Some(date) => past(date),
            None => false,
        }
    }

    /// True when an issue date is present and strictly before now. An
    /// absent date means not yet issued.
    pub fn is_issued(&self) -> bool {
        match self.issue_date {
            Some(date) => past(date),
            None => false,
        }
    }
}

fn past(date: NaiveDate) -> bool {
    date.and_time(NaiveTime::MIN) < Utc::now().naive_utc()
}
