//! Per-pipeline record extractors.
//!
//! Each pipeline implements [`Extractor`]: a pure function from a classified
//! filing to zero or more records. Required structure that is missing fails
//! the whole document; optional sections that are missing either leave an
//! empty cell or, where a record would be meaningless without them, skip the
//! record (or, for repeated groups, just that one instance).

mod beneficiaries;
mod common;
mod organizations;
mod preparers;
mod staff;

pub use beneficiaries::BeneficiaryExtractor;
pub use common::{common_record, CommonLayout};
pub use organizations::OrganizationExtractor;
pub use preparers::PreparerExtractor;
pub use staff::StaffExtractor;

use crate::classifier::ClassifiedDocument;
use crate::error::Result;
use crate::types::{Pipeline, Record};

/// Trait for pipeline extractors.
pub trait Extractor: Send + Sync {
    /// The pipeline this extractor produces rows for.
    fn pipeline(&self) -> Pipeline;

    /// Extract the records of one filing.
    ///
    /// An empty vector means the filing contributes no rows to this table.
    fn extract(&self, document: &ClassifiedDocument<'_, '_>) -> Result<Vec<Record>>;
}

/// Get the extractor for a pipeline.
#[must_use]
pub fn extractor_for(pipeline: Pipeline) -> Box<dyn Extractor> {
    match pipeline {
        Pipeline::Organizations => Box::new(OrganizationExtractor),
        Pipeline::Preparers => Box::new(PreparerExtractor),
        Pipeline::Staff => Box::new(StaffExtractor),
        Pipeline::Beneficiaries => Box::new(BeneficiaryExtractor),
    }
}
