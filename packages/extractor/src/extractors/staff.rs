//! Staff and compensation listing: one row per listed person.
//!
//! The three form variants list officers, directors, trustees and key
//! employees in differently shaped groups. Every shape is searched across the
//! whole document and each instance becomes a row tagged with its group tag.

use roxmltree::Node;

use super::common::{common_record, CommonLayout};
use super::Extractor;
use crate::address::{find_recipient_address, format_address};
use crate::classifier::ClassifiedDocument;
use crate::error::Result;
use crate::types::{Field, Pipeline, Record};
use crate::xml::{get_all_descendants, get_optional_text, get_text};

/// Extracts one row per listed staff member.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaffExtractor;

/// Repeated group shapes that describe a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffGroup {
    /// Form 990 Part VII Section A.
    PartSevenSectionA,

    /// Form 990-EZ Part IV.
    OfficerDirectorTrustee,

    /// Form 990-PF Part VIII.
    KeyEmployeeInfo,
}

impl StaffGroup {
    /// Search order of the group shapes.
    pub const ALL: [StaffGroup; 3] = [
        Self::PartSevenSectionA,
        Self::OfficerDirectorTrustee,
        Self::KeyEmployeeInfo,
    ];

    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::PartSevenSectionA => "Form990PartVIISectionAGrp",
            Self::OfficerDirectorTrustee => "OfficerDirectorTrusteeEmplGrp",
            Self::KeyEmployeeInfo => "OfficerDirTrstKeyEmplInfoGrp",
        }
    }

    /// Fill the group-specific fields of one instance.
    ///
    /// Returns `false` when the instance lacks its person name or address and
    /// must be skipped.
    fn read(&self, group: Node<'_, '_>, record: &mut Record) -> Result<bool> {
        match self {
            Self::PartSevenSectionA => {
                record.set(Field::EmployeeName, get_text(group, "PersonNm", true)?);
                record.set(Field::EmployeeTitle, get_text(group, "TitleTxt", false)?);
                record.set(
                    Field::EmployeeCompensation,
                    get_text(group, "ReportableCompFromOrgAmt", false)?,
                );
            }
            Self::OfficerDirectorTrustee => {
                let Some(name) = get_optional_text(group, "PersonNm")? else {
                    return Ok(false);
                };
                record.set(Field::EmployeeName, name);
                record.set(Field::EmployeeTitle, get_text(group, "TitleTxt", false)?);

                let Some(address) = find_recipient_address(group)? else {
                    return Ok(false);
                };
                record.set(Field::EmployeeAddress, format_address(address)?);
                record.set(
                    Field::EmployeeCompensation,
                    get_text(group, "CompensationAmt", false)?,
                );
            }
            Self::KeyEmployeeInfo => {
                record.set(Field::EmployeeTitle, get_text(group, "TitleTxt", true)?);
                record.set(
                    Field::EmployeeAddress,
                    get_text(group, "AddressLine1Txt", true)?,
                );
                record.set(
                    Field::EmployeeCompensation,
                    get_text(group, "CompensationAmt", true)?,
                );
            }
        }
        Ok(true)
    }
}

impl Extractor for StaffExtractor {
    fn pipeline(&self) -> Pipeline {
        Pipeline::Staff
    }

    fn extract(&self, document: &ClassifiedDocument<'_, '_>) -> Result<Vec<Record>> {
        let common = common_record(&document.header, CommonLayout::Listing);
        let mut records = Vec::new();

        for group_kind in StaffGroup::ALL {
            for group in get_all_descendants(document.root(), group_kind.tag()) {
                let mut record = common.clone().with(Field::EmployeeType, group_kind.tag());
                if group_kind.read(group, &mut record)? {
                    records.push(record);
                } else {
                    tracing::debug!(
                        ein = %document.header.ein,
                        group = group_kind.tag(),
                        "Staff entry without person name or address, skipping"
                    );
                }
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::error::ExtractorError;
    use crate::extractors::test_support::filing;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    fn extract(xml: &str) -> Result<Vec<Record>> {
        let doc = Document::parse(xml).unwrap();
        let classified = classify(&doc)?;
        StaffExtractor.extract(&classified)
    }

    fn ez_officer(name: &str, address: &str) -> String {
        format!(
            r#"<OfficerDirectorTrusteeEmplGrp>
              <PersonNm>{name}</PersonNm>
              <TitleTxt>Director</TitleTxt>
              {address}
              <AverageHrsPerWkDevotedToPosRt>1.00</AverageHrsPerWkDevotedToPosRt>
              <CompensationAmt>0</CompensationAmt>
            </OfficerDirectorTrusteeEmplGrp>"#
        )
    }

    const US_ADDRESS: &str = r#"<RecipientUSAddress>
        <AddressLine1Txt>4 Oak Ln</AddressLine1Txt>
        <CityNm>Peoria</CityNm>
        <StateAbbreviationCd>IL</StateAbbreviationCd>
        <ZIPCd>61602</ZIPCd>
      </RecipientUSAddress>"#;

    #[test]
    fn test_part_vii_section_a() {
        let xml = filing(
            "990",
            "",
            r#"<IRS990>
              <Form990PartVIISectionAGrp>
                <PersonNm>Ann Lee</PersonNm>
                <TitleTxt>Executive Director</TitleTxt>
                <ReportableCompFromOrgAmt>85000</ReportableCompFromOrgAmt>
              </Form990PartVIISectionAGrp>
              <Form990PartVIISectionAGrp>
                <BusinessName><BusinessNameLine1Txt>Trust Co</BusinessNameLine1Txt></BusinessName>
                <TitleTxt>Trustee</TitleTxt>
                <ReportableCompFromOrgAmt>0</ReportableCompFromOrgAmt>
              </Form990PartVIISectionAGrp>
            </IRS990>"#,
        );
        let records = extract(&xml).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].get(Field::EmployeeType), Some("Form990PartVIISectionAGrp"));
        assert_eq!(records[0].get(Field::EmployeeName), Some("Ann Lee"));
        assert_eq!(records[0].get(Field::EmployeeCompensation), Some("85000"));
        assert_eq!(records[1].get(Field::EmployeeName), Some(""));
        assert_eq!(records[1].get(Field::EmployeeTitle), Some("Trustee"));
    }

    #[test]
    fn test_ez_officer_addresses() {
        let foreign = r#"<RecipientForeignAddress>
            <AddressLine1Txt>10 Rue X</AddressLine1Txt>
            <CountryCd>FR</CountryCd>
          </RecipientForeignAddress>"#;
        let body = format!(
            "<IRS990EZ>{}{}</IRS990EZ>",
            ez_officer("Bo Park", US_ADDRESS),
            ez_officer("Cy Roux", foreign)
        );
        let xml = filing("990EZ", "", &body);
        let records = extract(&xml).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get(Field::EmployeeAddress),
            Some("4 Oak Ln, Peoria, IL 61602")
        );
        assert_eq!(records[1].get(Field::EmployeeAddress), Some("10 Rue X, FR"));
        assert_eq!(records[1].get(Field::EmployeeCompensation), Some("0"));
    }

    #[test]
    fn test_ez_officer_without_address_is_skipped() {
        let body = format!(
            "<IRS990EZ>{}{}{}</IRS990EZ>",
            ez_officer("Bo Park", US_ADDRESS),
            ez_officer("No Address", ""),
            ez_officer("Di Kent", US_ADDRESS)
        );
        let xml = filing("990EZ", "", &body);
        let records = extract(&xml).unwrap();

        let names: Vec<_> = records
            .iter()
            .filter_map(|r| r.get(Field::EmployeeName))
            .collect();
        assert_eq!(names, vec!["Bo Park", "Di Kent"]);
    }

    #[test]
    fn test_ez_officer_without_person_name_is_skipped() {
        let business_officer = format!(
            r#"<OfficerDirectorTrusteeEmplGrp>
              <BusinessName><BusinessNameLine1Txt>Trust Co</BusinessNameLine1Txt></BusinessName>
              <TitleTxt>Trustee</TitleTxt>
              {US_ADDRESS}
              <CompensationAmt>0</CompensationAmt>
            </OfficerDirectorTrusteeEmplGrp>"#
        );
        let body = format!(
            "<IRS990EZ>{}{}</IRS990EZ>",
            ez_officer("Bo Park", US_ADDRESS),
            business_officer
        );
        let xml = filing("990EZ", "", &body);
        let records = extract(&xml).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(Field::EmployeeName), Some("Bo Park"));
    }

    #[test]
    fn test_ez_officer_without_title_aborts_document() {
        let body = format!(
            "<IRS990EZ>{}</IRS990EZ>",
            ez_officer("Bo Park", US_ADDRESS).replace("<TitleTxt>Director</TitleTxt>", "")
        );
        let xml = filing("990EZ", "", &body);
        assert!(matches!(
            extract(&xml).unwrap_err(),
            ExtractorError::Structure { ref element, .. } if element == "TitleTxt"
        ));
    }

    #[test]
    fn test_private_foundation_info_group() {
        let xml = filing(
            "990PF",
            "",
            r#"<IRS990PF>
              <OfficerDirTrstKeyEmplInfoGrp>
                <OtherEmployeePaidOver50kCnt>0</OtherEmployeePaidOver50kCnt>
              </OfficerDirTrstKeyEmplInfoGrp>
            </IRS990PF>"#,
        );
        let records = extract(&xml).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].get(Field::EmployeeType),
            Some("OfficerDirTrstKeyEmplInfoGrp")
        );
        assert_eq!(records[0].get(Field::EmployeeTitle), Some(""));
        assert_eq!(records[0].get(Field::EmployeeName), None);
    }

    #[test]
    fn test_no_staff_groups() {
        let xml = filing("990EZ", "", "<IRS990EZ/>");
        assert!(extract(&xml).unwrap().is_empty());
    }

    #[test]
    fn test_common_fields_identical_across_rows() {
        let body = format!(
            "<IRS990EZ>{}{}</IRS990EZ>",
            ez_officer("Bo Park", US_ADDRESS),
            ez_officer("Di Kent", US_ADDRESS)
        );
        let xml = filing("990EZ", "", &body);
        let records = extract(&xml).unwrap();

        for field in [Field::FilingYear, Field::Ein, Field::OrganizationName, Field::Country] {
            assert_eq!(records[0].get(field), records[1].get(field));
        }
        assert_eq!(records[0].get(Field::FilingYear), Some("2019"));
    }
}
