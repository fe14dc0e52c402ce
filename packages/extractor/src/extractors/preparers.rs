//! Paid preparer (accountant) summary: one row per filing with a preparer firm.
//!
//! A filing without a `PreparerFirmGrp` produces no row at all; for 990-PF
//! filings the "books are in care of" block is required in the same way.

use roxmltree::Node;

use super::common::{common_record, CommonLayout};
use super::Extractor;
use crate::classifier::ClassifiedDocument;
use crate::error::Result;
use crate::types::{Field, FormType, Pipeline, Record};
use crate::xml::{get_required_child, get_text, get_unique_child};

/// Extracts the paid preparer firm of each filing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreparerExtractor;

impl Extractor for PreparerExtractor {
    fn pipeline(&self) -> Pipeline {
        Pipeline::Preparers
    }

    fn extract(&self, document: &ClassifiedDocument<'_, '_>) -> Result<Vec<Record>> {
        let mut record = common_record(&document.header, CommonLayout::Preparer);

        let header = document.header_element()?;
        let Some(firm) = get_unique_child(header, "PreparerFirmGrp", true)? else {
            tracing::debug!(ein = %document.header.ein, "No preparer firm, skipping filing");
            return Ok(Vec::new());
        };
        read_firm(firm, &mut record)?;

        let complete = match document.form_type() {
            FormType::Base | FormType::EZ => true,
            FormType::PrivateFoundation => extend_books(document.form_element()?, &mut record)?,
        };

        if !complete {
            tracing::debug!(ein = %document.header.ein, "No books custodian, skipping filing");
            return Ok(Vec::new());
        }

        Ok(vec![record])
    }
}

/// Read the preparer firm name, EIN and address.
fn read_firm(firm: Node<'_, '_>, record: &mut Record) -> Result<()> {
    let name = get_required_child(firm, "PreparerFirmName")?;
    let address = get_required_child(firm, "PreparerUSAddress")?;

    record.set(Field::PreparerFirmEin, get_text(firm, "PreparerFirmEIN", true)?);
    record.set(
        Field::PreparerFirmName,
        get_text(name, "BusinessNameLine1Txt", false)?,
    );
    record.set(
        Field::PreparerFirmAddress,
        get_text(address, "AddressLine1Txt", false)?,
    );
    record.set(Field::PreparerFirmCity, get_text(address, "CityNm", false)?);
    record.set(
        Field::PreparerFirmState,
        get_text(address, "StateAbbreviationCd", false)?,
    );
    record.set(Field::PreparerFirmZipCode, get_text(address, "ZIPCd", false)?);
    Ok(())
}

/// Read who keeps the foundation's books (990-PF Part VII-B line 2).
///
/// Returns `false` when the filing names no custodian.
fn extend_books(form: Node<'_, '_>, record: &mut Record) -> Result<bool> {
    let Some(books_name) = get_unique_child(form, "PersonsWithBooksName", true)? else {
        return Ok(false);
    };
    let location = get_required_child(form, "LocationOfBooksUSAddress")?;

    record.set(
        Field::BooksName,
        get_text(books_name, "BusinessNameLine1Txt", false)?,
    );
    record.set(Field::BooksPhone, get_text(form, "PhoneNum", false)?);
    record.set(Field::BooksAddress, get_text(location, "AddressLine1Txt", false)?);
    record.set(Field::BooksZipCode, get_text(location, "ZIPCd", false)?);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::extractors::test_support::filing;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    const FIRM: &str = r#"<PreparerFirmGrp>
      <PreparerFirmEIN>987654321</PreparerFirmEIN>
      <PreparerFirmName><BusinessNameLine1Txt>Ledger &amp; Co CPAs</BusinessNameLine1Txt></PreparerFirmName>
      <PreparerUSAddress>
        <AddressLine1Txt>200 Audit Ave</AddressLine1Txt>
        <CityNm>Chicago</CityNm>
        <StateAbbreviationCd>IL</StateAbbreviationCd>
        <ZIPCd>60601</ZIPCd>
      </PreparerUSAddress>
    </PreparerFirmGrp>"#;

    fn extract(xml: &str) -> Result<Vec<Record>> {
        let doc = Document::parse(xml).unwrap();
        let classified = classify(&doc)?;
        PreparerExtractor.extract(&classified)
    }

    #[test]
    fn test_firm_fields() {
        let xml = filing("990", FIRM, "<IRS990/>");
        let records = extract(&xml).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.get(Field::PreparerFirmName), Some("Ledger & Co CPAs"));
        assert_eq!(record.get(Field::PreparerFirmEin), Some("987654321"));
        assert_eq!(record.get(Field::PreparerFirmAddress), Some("200 Audit Ave"));
        assert_eq!(record.get(Field::PreparerFirmState), Some("IL"));
        assert_eq!(record.get(Field::Phone), Some("2175550100"));
        assert_eq!(record.get(Field::BooksName), None);
    }

    #[test]
    fn test_no_firm_skips_filing() {
        let xml = filing("990EZ", "", "<IRS990EZ/>");
        assert!(extract(&xml).unwrap().is_empty());
    }

    #[test]
    fn test_firm_without_address_fails() {
        let firm = r#"<PreparerFirmGrp>
          <PreparerFirmName><BusinessNameLine1Txt>Solo CPA</BusinessNameLine1Txt></PreparerFirmName>
        </PreparerFirmGrp>"#;
        let xml = filing("990EZ", firm, "<IRS990EZ/>");
        assert!(extract(&xml).unwrap_err().is_structural());
    }

    #[test]
    fn test_private_foundation_books() {
        let xml = filing(
            "990PF",
            FIRM,
            r#"<IRS990PF>
              <PersonsWithBooksName><BusinessNameLine1Txt>Board Secretary</BusinessNameLine1Txt></PersonsWithBooksName>
              <PhoneNum>3125550199</PhoneNum>
              <LocationOfBooksUSAddress>
                <AddressLine1Txt>9 Vault Rd</AddressLine1Txt>
                <CityNm>Evanston</CityNm>
                <StateAbbreviationCd>IL</StateAbbreviationCd>
                <ZIPCd>60201</ZIPCd>
              </LocationOfBooksUSAddress>
            </IRS990PF>"#,
        );
        let records = extract(&xml).unwrap();

        let record = &records[0];
        assert_eq!(record.get(Field::BooksName), Some("Board Secretary"));
        assert_eq!(record.get(Field::BooksPhone), Some("3125550199"));
        assert_eq!(record.get(Field::BooksAddress), Some("9 Vault Rd"));
        assert_eq!(record.get(Field::BooksZipCode), Some("60201"));
    }

    #[test]
    fn test_private_foundation_without_books_skips_filing() {
        let xml = filing("990PF", FIRM, "<IRS990PF/>");
        assert!(extract(&xml).unwrap().is_empty());
    }
}
