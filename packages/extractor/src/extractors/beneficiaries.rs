//! Grant beneficiary listing: one row per grant recipient.

use roxmltree::Node;

use super::common::{common_record, CommonLayout};
use super::Extractor;
use crate::address::{find_recipient_address, format_address};
use crate::classifier::ClassifiedDocument;
use crate::error::{ExtractorError, Result};
use crate::types::{Field, Pipeline, Record};
use crate::xml::{get_all_descendants, get_optional_text, get_text, get_unique_child};

/// Extracts one row per grant recipient.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeneficiaryExtractor;

/// Repeated group shapes that describe a grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantGroup {
    /// Grants and contributions paid during the year.
    PaidDuringYear,

    /// Grants and contributions approved for future payment.
    ApprovedForFuture,
}

impl GrantGroup {
    pub const ALL: [GrantGroup; 2] = [Self::PaidDuringYear, Self::ApprovedForFuture];

    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::PaidDuringYear => "GrantOrContributionPdDurYrGrp",
            Self::ApprovedForFuture => "GrantOrContriApprvForFutGrp",
        }
    }

    /// Tag of the aggregate total, a sibling of the grant instances.
    #[must_use]
    pub fn total_tag(&self) -> &'static str {
        match self {
            Self::PaidDuringYear => "TotalGrantOrContriPdDurYrAmt",
            Self::ApprovedForFuture => "TotalGrantOrContriApprvFutAmt",
        }
    }
}

impl Extractor for BeneficiaryExtractor {
    fn pipeline(&self) -> Pipeline {
        Pipeline::Beneficiaries
    }

    fn extract(&self, document: &ClassifiedDocument<'_, '_>) -> Result<Vec<Record>> {
        let common = common_record(&document.header, CommonLayout::Listing);
        let mut records = Vec::new();

        for grant_kind in GrantGroup::ALL {
            for grant in get_all_descendants(document.root(), grant_kind.tag()) {
                let record = common.clone().with(Field::GrantType, grant_kind.tag());
                match read_grant(grant_kind, grant, record)? {
                    Some(record) => records.push(record),
                    None => tracing::debug!(
                        ein = %document.header.ein,
                        group = grant_kind.tag(),
                        "Grant without recipient name or address, skipping"
                    ),
                }
            }
        }

        Ok(records)
    }
}

/// Fill the grant-specific fields; `None` when the recipient is incomplete.
fn read_grant(
    kind: GrantGroup,
    grant: Node<'_, '_>,
    mut record: Record,
) -> Result<Option<Record>> {
    let Some(name) = recipient_name(grant)? else {
        return Ok(None);
    };
    record.set(Field::GranteeName, name);

    let Some(address) = find_recipient_address(grant)? else {
        return Ok(None);
    };
    record.set(Field::GranteeAddress, format_address(address)?);

    record.set(
        Field::FoundationStatus,
        get_text(grant, "RecipientFoundationStatusTxt", true)?,
    );
    record.set(
        Field::GrantPurpose,
        get_text(grant, "GrantOrContributionPurposeTxt", false)?,
    );
    record.set(Field::GrantAmount, get_text(grant, "Amt", false)?);

    let parent = grant
        .parent_element()
        .ok_or_else(|| ExtractorError::structure(kind.total_tag(), kind.tag()))?;
    record.set(Field::TotalAmount, get_text(parent, kind.total_tag(), false)?);

    Ok(Some(record))
}

/// Business name of the recipient, falling back to a person name.
fn recipient_name(grant: Node<'_, '_>) -> Result<Option<String>> {
    if let Some(business) = get_unique_child(grant, "RecipientBusinessName", true)? {
        return get_text(business, "BusinessNameLine1Txt", false).map(Some);
    }
    get_optional_text(grant, "RecipientPersonNm")
}
