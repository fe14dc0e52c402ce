//! Rendering of recipient address blocks as single display strings.

use roxmltree::Node;

use crate::error::{ExtractorError, Result};
use crate::xml::{get_optional_text, get_tag_name, get_unique_child};

/// Tag of a domestic recipient address block.
pub const US_ADDRESS_TAG: &str = "RecipientUSAddress";

/// Tag of a foreign recipient address block.
pub const FOREIGN_ADDRESS_TAG: &str = "RecipientForeignAddress";

/// Kind of address block, determined by the element's own tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Domestic,
    Foreign,
}

impl AddressKind {
    /// Classify an address element by its tag name.
    pub fn of(node: Node<'_, '_>) -> Result<Self> {
        match get_tag_name(node) {
            US_ADDRESS_TAG => Ok(Self::Domestic),
            FOREIGN_ADDRESS_TAG => Ok(Self::Foreign),
            other => Err(ExtractorError::UnsupportedAddress(other.to_string())),
        }
    }
}

/// Format an address element as one line.
///
/// Domestic: `"{street}, {city}, {state} {zip}"`, every part required.
/// Foreign: `"{street}, [{city}, ][{state}, ]{country}"`, city and state
/// omitted when absent or blank.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use irs990_extractor::address::format_address;
///
/// let xml = "<RecipientForeignAddress>\
///     <AddressLine1Txt>10 Rue X</AddressLine1Txt>\
///     <CountryCd>FR</CountryCd>\
/// </RecipientForeignAddress>";
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(format_address(doc.root_element()).unwrap(), "10 Rue X, FR");
/// ```
pub fn format_address(address: Node<'_, '_>) -> Result<String> {
    match AddressKind::of(address)? {
        AddressKind::Domestic => {
            let street = required_part(address, "AddressLine1Txt")?;
            let city = required_part(address, "CityNm")?;
            let state = required_part(address, "StateAbbreviationCd")?;
            let zip = required_part(address, "ZIPCd")?;

            Ok(format!("{street}, {city}, {state} {zip}"))
        }
        AddressKind::Foreign => {
            let street = required_part(address, "AddressLine1Txt")?;
            let city = optional_part(address, "CityNm")?;
            let state = optional_part(address, "ProvinceOrStateNm")?;
            let country = required_part(address, "CountryCd")?;

            let mut formatted = format!("{street}, ");
            for part in [city, state].into_iter().flatten() {
                formatted.push_str(&part);
                formatted.push_str(", ");
            }
            formatted.push_str(&country);

            Ok(formatted)
        }
    }
}

/// Find the recipient address block of a repeated group.
///
/// The domestic block takes precedence over the foreign one. Returns `None`
/// when the group has neither.
pub fn find_recipient_address<'a, 'input>(
    group: Node<'a, 'input>,
) -> Result<Option<Node<'a, 'input>>> {
    if let Some(address) = get_unique_child(group, US_ADDRESS_TAG, true)? {
        return Ok(Some(address));
    }
    get_unique_child(group, FOREIGN_ADDRESS_TAG, true)
}

/// Read an address component that may be absent or blank.
fn optional_part(address: Node<'_, '_>, tag: &str) -> Result<Option<String>> {
    match get_optional_text(address, tag) {
        Err(ExtractorError::MissingValue { .. }) => Ok(None),
        other => other,
    }
}

/// Read an address component that must be present and non-empty.
fn required_part(address: Node<'_, '_>, tag: &str) -> Result<String> {
    get_optional_text(address, tag)?
        .ok_or_else(|| ExtractorError::missing_value(tag, get_tag_name(address)))
}
