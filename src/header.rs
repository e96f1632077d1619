//! Header scanning.
//!
//! An AAMVA payload opens with a compliance indicator followed by a header
//! line of the form `ANSI ` + 6-digit issuer identification number +
//! 2-digit AAMVA version + 2-digit jurisdiction version + subfile
//! designators. Only the version number matters for decoding; the subfile
//! count is informational.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 6-digit IIN, then the 2-digit version, then at least one more
    // alphanumeric character.
    static ref VERSION: Regex = Regex::new(r"\d{6}(\d{2})\w+").unwrap();
    static ref SUBFILE_COUNT: Regex = Regex::new(r"\d{8}(\d{2})\w+").unwrap();
}

/// Extracts the AAMVA version number from the payload header.
///
/// Returns `None` when no header pattern is found (empty input, malformed
/// header, missing `ANSI ` prefix). Never panics.
pub fn version(data: &str) -> Option<u8> {
    let capture = VERSION.captures(data)?.get(1)?;
    capture.as_str().parse().ok()
}

/// Number of subfiles announced by the header, or 0 when undetectable.
pub fn subfile_count(data: &str) -> u8 {
    SUBFILE_COUNT
        .captures(data)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION_ONE_HEADER: &str =
        "@\n\nANSI 636026010102DL00410288ZA03290015DLDAQD12345678\n";

    #[test]
    fn detects_version_from_header() {
        assert_eq!(version(VERSION_ONE_HEADER), Some(1));
        assert_eq!(
            version("@\n\nANSI 636002040002DL00410250ZM02910036DLDCAD\n"),
            Some(4)
        );
    }

    #[test]
    fn missing_or_malformed_header_yields_none() {
        assert_eq!(version(""), None);
        assert_eq!(version("ANSI \n"), None);
        assert_eq!(version("DAQD12345678\n"), None);
    }

    #[test]
    fn subfile_count_from_header() {
        assert_eq!(subfile_count(VERSION_ONE_HEADER), 1);
        assert_eq!(subfile_count(""), 0);
    }
}
