//! Filer columns shared by every row of a document.

use crate::classifier::FilerHeader;
use crate::config::FILER_COUNTRY;
use crate::types::{Field, Record};

/// Which set of filer columns a pipeline writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonLayout {
    /// Organizations: phone, `Business Name` and both address lines.
    Organization,

    /// Preparers: phone and `Name of organization`.
    Preparer,

    /// Staff and beneficiary listings: `Name of organization`, no phone.
    Listing,
}

/// Build the record prefix holding the filer's common fields.
#[must_use]
pub fn common_record(header: &FilerHeader, layout: CommonLayout) -> Record {
    let mut record = Record::new()
        .with(Field::FilingYear, header.filing_year.to_string())
        .with(Field::FormType, header.return_type.as_str())
        .with(Field::Ein, header.ein.as_str());

    if layout != CommonLayout::Listing {
        record.set(Field::Phone, header.phone.clone().unwrap_or_default());
    }

    let name_field = match layout {
        CommonLayout::Organization => Field::BusinessName,
        CommonLayout::Preparer | CommonLayout::Listing => Field::OrganizationName,
    };
    record.set(name_field, header.business_name.as_str());

    let address = &header.address;
    record.set(Field::City, address.city.as_str());
    record.set(Field::ZipCode, address.zip.as_str());
    record.set(Field::State, address.state.as_str());
    record.set(Field::Country, FILER_COUNTRY);
    record.set(Field::Address1, address.street.as_str());

    if layout == CommonLayout::Organization {
        record.set(Field::Address2, address.street2.clone().unwrap_or_default());
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::FilerAddress;
    use crate::types::FormType;

    fn header() -> FilerHeader {
        FilerHeader {
            filing_year: 2019,
            return_type: "990".to_string(),
            form_type: FormType::Base,
            ein: "123456789".to_string(),
            business_name: "Helping Hands Inc".to_string(),
            phone: None,
            address: FilerAddress {
                street: "1 Elm St".to_string(),
                street2: Some("Suite 2".to_string()),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zip: "62704".to_string(),
            },
        }
    }

    #[test]
    fn test_organization_layout() {
        let record = common_record(&header(), CommonLayout::Organization);

        assert_eq!(record.get(Field::FilingYear), Some("2019"));
        assert_eq!(record.get(Field::BusinessName), Some("Helping Hands Inc"));
        assert_eq!(record.get(Field::Phone), Some(""));
        assert_eq!(record.get(Field::Address2), Some("Suite 2"));
        assert_eq!(record.get(Field::Country), Some("US"));
        assert_eq!(record.get(Field::OrganizationName), None);
    }

    #[test]
    fn test_listing_layout() {
        let record = common_record(&header(), CommonLayout::Listing);

        assert_eq!(record.get(Field::OrganizationName), Some("Helping Hands Inc"));
        assert_eq!(record.get(Field::Phone), None);
        assert_eq!(record.get(Field::Address2), None);
        assert_eq!(record.len(), 9);
    }

    #[test]
    fn test_preparer_layout() {
        let record = common_record(&header(), CommonLayout::Preparer);

        assert_eq!(record.get(Field::Phone), Some(""));
        assert_eq!(record.get(Field::OrganizationName), Some("Helping Hands Inc"));
        assert_eq!(record.get(Field::Address2), None);
    }
}
