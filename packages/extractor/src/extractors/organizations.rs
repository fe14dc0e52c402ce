//! Organization summary: one row per filing.

use roxmltree::Node;

use super::common::{common_record, CommonLayout};
use super::Extractor;
use crate::classifier::ClassifiedDocument;
use crate::error::Result;
use crate::types::{Field, FormType, Pipeline, Record};
use crate::xml::{get_required_child, get_text};

/// Extracts the filer organization summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizationExtractor;

impl Extractor for OrganizationExtractor {
    fn pipeline(&self) -> Pipeline {
        Pipeline::Organizations
    }

    fn extract(&self, document: &ClassifiedDocument<'_, '_>) -> Result<Vec<Record>> {
        let mut record = common_record(&document.header, CommonLayout::Organization);

        let officer = get_required_child(document.header_element()?, "BusinessOfficerGrp")?;
        record.set(Field::OfficerName, get_text(officer, "PersonNm", false)?);
        record.set(Field::OfficerTitle, get_text(officer, "PersonTitleTxt", false)?);

        let form = document.form_element()?;
        match document.form_type() {
            FormType::Base => extend_base(form, &mut record)?,
            FormType::EZ => extend_ez(form, &mut record)?,
            FormType::PrivateFoundation => extend_private_foundation(form, &mut record)?,
        }

        Ok(vec![record])
    }
}

/// Form 990: mission, financial totals and Part IV indicators.
fn extend_base(form: Node<'_, '_>, record: &mut Record) -> Result<()> {
    record.set(Field::Mission, get_text(form, "ActivityOrMissionDesc", false)?);
    record.set(Field::Expenses, get_text(form, "ExpenseAmt", true)?);
    record.set(Field::Revenue, get_text(form, "RevenueAmt", true)?);
    record.set(Field::Employees, get_text(form, "TotalEmployeeCnt", true)?);
    record.set(Field::Volunteers, get_text(form, "TotalVolunteersCnt", true)?);
    record.set(
        Field::ContractorsOver100k,
        get_text(form, "IndivRcvdGreaterThan100KCnt", false)?,
    );
    record.set(
        Field::UnrelatedBusinessRevenue,
        get_text(form, "UnrelatedBusinessRevenueAmt", true)?,
    );
    record.set(Field::DonorAdvisedFund, get_text(form, "DonorAdvisedFundInd", false)?);
    record.set(Field::LocalChapters, get_text(form, "LocalChaptersInd", false)?);
    Ok(())
}

/// Form 990-EZ: line 49a transfer indicator.
fn extend_ez(form: Node<'_, '_>, record: &mut Record) -> Result<()> {
    // Filers write "true", "false", "0" or "1" here; kept verbatim.
    record.set(
        Field::TransferToExempt,
        get_text(form, "TrnsfrExmptNonChrtblRltdOrgInd", true)?,
    );
    Ok(())
}

/// Form 990-PF: asset value and compensation counts.
fn extend_private_foundation(form: Node<'_, '_>, record: &mut Record) -> Result<()> {
    let employee_info = get_required_child(form, "OfficerDirTrstKeyEmplInfoGrp")?;

    record.set(Field::FmvAssets, get_text(form, "FMVAssetsEOYAmt", true)?);
    record.set(
        Field::EmployeesOver50k,
        get_text(employee_info, "OtherEmployeePaidOver50kCnt", true)?,
    );
    Ok(())
}
