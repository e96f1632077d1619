//! Decoder for the text payload carried by the PDF417 barcode printed on
//! AAMVA-compliant driver licenses and identification cards.
//!
//! The [DL/ID Card Design Standard][aamva] went through nine revisions
//! between 2000 and 2013, each changing which data elements exist, which
//! designator codes identify them, and how dates and heights are encoded.
//! This crate detects the document's standard version from its header,
//! selects the designator table and decode rules for that version, and
//! extracts every known data element into a [`DecodedLicense`].
//!
//! [aamva]: <https://www.aamva.org/assets/best-practices,-guides,-standards,-manuals,-whitepapers/aamva-dl-id-card-design-standard-(2020)>
//!
//! Decoding never fails: malformed input yields a (possibly mostly empty)
//! record, unrecognized coded values decode to each enumeration's sentinel
//! variant, and an undetectable version falls back to the baseline table.
pub use chrono::{NaiveDate, Utc};

pub mod codes;
pub mod extract;
pub mod fields;
pub mod header;
pub mod license;
mod macros;
pub mod parser;
pub mod version;

pub use codes::{EyeColor, Gender, HairColor, IssuingCountry, NameSuffix, Truncation};
pub use extract::Extraction;
pub use fields::{DesignatorTable, FieldKey};
pub use license::DecodedLicense;
pub use parser::Parser;
pub use version::{profile_for, VersionProfile};

/// Decodes a raw PDF417 payload into a [`DecodedLicense`].
///
/// Convenience wrapper around [`Parser::new`] + [`Parser::parse`].
pub fn parse(data: &str) -> DecodedLicense {
    Parser::new(data).parse()
}
