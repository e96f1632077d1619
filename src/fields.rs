//! Semantic field keys and per-version designator tables.
//!
//! A [`DesignatorTable`] maps each semantic key to the 2-3 character
//! designator code identifying it in the subfile body. The baseline table
//! reflects the most feature-complete revision of the standard; older
//! revisions are derived from it by a fixed sequence of remove/remap/add
//! edits. A key absent from a table means "this revision does not define
//! the field", which is distinct from "defined but missing in this
//! document".

use std::collections::HashMap;

use crate::extract::{Extraction, FieldPattern};

/// The closed set of semantic data-element keys known to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    FirstName,
    MiddleName,
    LastName,
    /// Single composite name field of the 2000 revision, formatted as
    /// comma-separated last, first, middle, suffix.
    DriverLicenseName,
    Suffix,
    FirstNameAlias,
    LastNameAlias,
    SuffixAlias,
    FirstNameTruncation,
    MiddleNameTruncation,
    LastNameTruncation,
    ExpirationDate,
    IssueDate,
    BirthDate,
    RevisionDate,
    HazmatExpirationDate,
    Gender,
    EyeColor,
    HairColor,
    Height,
    WeightPounds,
    WeightKilograms,
    WeightRange,
    Race,
    StreetAddress,
    StreetAddressSupplement,
    City,
    State,
    PostalCode,
    PlaceOfBirth,
    Country,
    CustomerId,
    DocumentId,
    AuditInformation,
    InventoryControlNumber,
    ComplianceType,
    TemporaryDocumentIndicator,
    OrganDonorIndicator,
    VeteranIndicator,
    FederalVehicleCode,
    StandardVehicleClass,
    StandardEndorsementCode,
    StandardRestrictionCode,
    JurisdictionVehicleClass,
    JurisdictionEndorsementCode,
    JurisdictionRestrictionCode,
    JurisdictionVehicleClassDescription,
    JurisdictionEndorsementDescription,
    JurisdictionRestrictionDescription,
}

/// Key to designator mapping of the latest supported revision.
const BASELINE: &[(FieldKey, &str)] = &[
    (FieldKey::FirstName, "DAC"),
    (FieldKey::MiddleName, "DAD"),
    (FieldKey::LastName, "DCS"),
    (FieldKey::DriverLicenseName, "DAA"),
    (FieldKey::Suffix, "DCU"),
    (FieldKey::FirstNameAlias, "DBG"),
    (FieldKey::LastNameAlias, "DBN"),
    (FieldKey::SuffixAlias, "DBS"),
    (FieldKey::FirstNameTruncation, "DDF"),
    (FieldKey::MiddleNameTruncation, "DDG"),
    (FieldKey::LastNameTruncation, "DDE"),
    (FieldKey::ExpirationDate, "DBA"),
    (FieldKey::IssueDate, "DBD"),
    (FieldKey::BirthDate, "DBB"),
    (FieldKey::RevisionDate, "DDB"),
    (FieldKey::HazmatExpirationDate, "DDC"),
    (FieldKey::Gender, "DBC"),
    (FieldKey::EyeColor, "DAY"),
    (FieldKey::HairColor, "DAZ"),
    (FieldKey::Height, "DAU"),
    (FieldKey::WeightPounds, "DAW"),
    (FieldKey::WeightKilograms, "DAX"),
    (FieldKey::WeightRange, "DCE"),
    (FieldKey::Race, "DCL"),
    (FieldKey::StreetAddress, "DAG"),
    (FieldKey::StreetAddressSupplement, "DAH"),
    (FieldKey::City, "DAI"),
    (FieldKey::State, "DAJ"),
    (FieldKey::PostalCode, "DAK"),
    (FieldKey::PlaceOfBirth, "DCI"),
    (FieldKey::Country, "DCG"),
    (FieldKey::CustomerId, "DAQ"),
    (FieldKey::DocumentId, "DCF"),
    (FieldKey::AuditInformation, "DCJ"),
    (FieldKey::InventoryControlNumber, "DCK"),
    (FieldKey::ComplianceType, "DDA"),
    (FieldKey::TemporaryDocumentIndicator, "DDD"),
    (FieldKey::OrganDonorIndicator, "DDK"),
    (FieldKey::VeteranIndicator, "DDL"),
    (FieldKey::FederalVehicleCode, "DCH"),
    (FieldKey::StandardVehicleClass, "DCM"),
    (FieldKey::StandardEndorsementCode, "DCN"),
    (FieldKey::StandardRestrictionCode, "DCO"),
    (FieldKey::JurisdictionVehicleClass, "DCA"),
    (FieldKey::JurisdictionEndorsementCode, "DCD"),
    (FieldKey::JurisdictionRestrictionCode, "DCB"),
    (FieldKey::JurisdictionVehicleClassDescription, "DCP"),
    (FieldKey::JurisdictionEndorsementDescription, "DCQ"),
    (FieldKey::JurisdictionRestrictionDescription, "DCR"),
];

/// Immutable mapping from semantic key to designator code for one
/// revision of the standard, with the search patterns compiled up front.
#[derive(Debug)]
pub struct DesignatorTable {
    entries: HashMap<FieldKey, FieldPattern>,
}

impl DesignatorTable {
    pub(crate) fn baseline() -> Self {
        let mut table = Self {
            entries: HashMap::with_capacity(BASELINE.len()),
        };
        for &(key, code) in BASELINE {
            table.insert(key, code);
        }
        table
    }

    pub(crate) fn insert(&mut self, key: FieldKey, code: &'static str) {
        self.entries.insert(key, FieldPattern::new(code));
    }

    pub(crate) fn remove(&mut self, key: FieldKey) {
        self.entries.remove(&key);
    }

    /// The designator code for `key`, or `None` when this revision does
    /// not define the field.
    pub fn designator(&self, key: FieldKey) -> Option<&'static str> {
        self.entries.get(&key).map(FieldPattern::code)
    }

    /// Searches the raw text for `key`'s designator and its value.
    pub fn extract(&self, key: FieldKey, data: &str) -> Extraction {
        match self.entries.get(&key) {
            Some(pattern) => pattern.extract(data),
            None => Extraction::Absent,
        }
    }

    /// Like [`extract`](Self::extract), with the capture restricted to
    /// word characters.
    pub fn extract_word(&self, key: FieldKey, data: &str) -> Extraction {
        match self.entries.get(&key) {
            Some(pattern) => pattern.extract_word(data),
            None => Extraction::Absent,
        }
    }
}

/// Table of the 2000 revision (version 1).
pub(crate) fn version_one() -> DesignatorTable {
    let mut table = DesignatorTable::baseline();
    for key in [
        FieldKey::JurisdictionVehicleClass,
        FieldKey::JurisdictionRestrictionCode,
        FieldKey::JurisdictionEndorsementCode,
        FieldKey::Country,
        FieldKey::LastNameTruncation,
        FieldKey::FirstNameTruncation,
        FieldKey::MiddleNameTruncation,
        FieldKey::PlaceOfBirth,
        FieldKey::AuditInformation,
        FieldKey::InventoryControlNumber,
        FieldKey::WeightRange,
        FieldKey::Race,
        FieldKey::JurisdictionVehicleClassDescription,
        FieldKey::JurisdictionEndorsementDescription,
        FieldKey::JurisdictionRestrictionDescription,
        FieldKey::ComplianceType,
        FieldKey::RevisionDate,
        FieldKey::HazmatExpirationDate,
        FieldKey::TemporaryDocumentIndicator,
        FieldKey::VeteranIndicator,
    ] {
        table.remove(key);
    }
    table.insert(FieldKey::LastName, "DAB");
    table.insert(FieldKey::CustomerId, "DBJ");
    table.insert(FieldKey::LastNameAlias, "DBO");
    table.insert(FieldKey::FirstNameAlias, "DBP");
    table.insert(FieldKey::SuffixAlias, "DBR");
    table.insert(FieldKey::Suffix, "DAE");
    table.insert(FieldKey::OrganDonorIndicator, "DBH");
    // Legacy standard vehicle code designators unique to this revision.
    table.insert(FieldKey::StandardVehicleClass, "PAA");
    table.insert(FieldKey::StandardEndorsementCode, "PAF");
    table.insert(FieldKey::StandardRestrictionCode, "PAE");
    table
}

/// Table of the 2003 revision (version 2), also used for version 3.
pub(crate) fn version_two() -> DesignatorTable {
    let mut table = DesignatorTable::baseline();
    table.insert(FieldKey::FirstName, "DCT");
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_defines_the_full_key_set() {
        let table = DesignatorTable::baseline();
        assert_eq!(table.designator(FieldKey::FirstName), Some("DAC"));
        assert_eq!(table.designator(FieldKey::LastName), Some("DCS"));
        assert_eq!(table.designator(FieldKey::Suffix), Some("DCU"));
        assert_eq!(table.designator(FieldKey::SuffixAlias), Some("DBS"));
        assert_eq!(table.designator(FieldKey::CustomerId), Some("DAQ"));
        assert_eq!(table.designator(FieldKey::StandardVehicleClass), Some("DCM"));
    }

    #[test]
    fn version_one_edits_over_baseline() {
        let table = version_one();
        // Remapped.
        assert_eq!(table.designator(FieldKey::LastName), Some("DAB"));
        assert_eq!(table.designator(FieldKey::CustomerId), Some("DBJ"));
        assert_eq!(table.designator(FieldKey::Suffix), Some("DAE"));
        assert_eq!(table.designator(FieldKey::OrganDonorIndicator), Some("DBH"));
        // Unique legacy designators.
        assert_eq!(table.designator(FieldKey::StandardVehicleClass), Some("PAA"));
        assert_eq!(table.designator(FieldKey::StandardRestrictionCode), Some("PAE"));
        assert_eq!(table.designator(FieldKey::StandardEndorsementCode), Some("PAF"));
        // Not defined in 2000.
        assert_eq!(table.designator(FieldKey::Country), None);
        assert_eq!(table.designator(FieldKey::FirstNameTruncation), None);
        assert_eq!(table.designator(FieldKey::PlaceOfBirth), None);
        assert_eq!(table.designator(FieldKey::VeteranIndicator), None);
    }

    #[test]
    fn version_two_remaps_first_name() {
        let table = version_two();
        assert_eq!(table.designator(FieldKey::FirstName), Some("DCT"));
        assert_eq!(table.designator(FieldKey::MiddleName), Some("DAD"));
    }

    #[test]
    fn undefined_key_extracts_as_absent() {
        let table = version_one();
        assert_eq!(
            table.extract(FieldKey::Country, "DCGUSA\n"),
            Extraction::Absent
        );
    }
}
