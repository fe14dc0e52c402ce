//! Core data types for the extractor.

use std::fmt;

use clap::ValueEnum;

use crate::error::{ExtractorError, Result};

/// Form variant declared by a filing's `ReturnTypeCd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormType {
    /// Form 990, the full return.
    Base,

    /// Form 990-EZ, the short return.
    EZ,

    /// Form 990-PF, the private foundation return.
    PrivateFoundation,
}

impl FormType {
    /// Parse the `ReturnTypeCd` code.
    ///
    /// # Examples
    /// ```
    /// use irs990_extractor::types::FormType;
    ///
    /// assert_eq!(FormType::from_code("990EZ").unwrap(), FormType::EZ);
    /// assert!(FormType::from_code("990T").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "990" => Ok(Self::Base),
            "990EZ" => Ok(Self::EZ),
            "990PF" => Ok(Self::PrivateFoundation),
            other => Err(ExtractorError::UnknownVariant(other.to_string())),
        }
    }

    /// The return type code as written in the document.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Base => "990",
            Self::EZ => "990EZ",
            Self::PrivateFoundation => "990PF",
        }
    }

    /// Name of the form element under `Return/ReturnData`.
    #[must_use]
    pub fn return_data_tag(&self) -> &'static str {
        match self {
            Self::Base => "IRS990",
            Self::EZ => "IRS990EZ",
            Self::PrivateFoundation => "IRS990PF",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Extraction pipeline, one CSV table each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Pipeline {
    /// One row per filing describing the filer organization.
    Organizations,

    /// One row per filing with a paid preparer firm.
    #[value(alias = "accountants")]
    Preparers,

    /// One row per listed officer, director, trustee or employee.
    Staff,

    /// One row per grant recipient.
    Beneficiaries,
}

impl Pipeline {
    /// All pipelines, in the order they are documented.
    pub const ALL: [Pipeline; 4] = [
        Self::Organizations,
        Self::Preparers,
        Self::Staff,
        Self::Beneficiaries,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organizations => "organizations",
            Self::Preparers => "preparers",
            Self::Staff => "staff",
            Self::Beneficiaries => "beneficiaries",
        }
    }

    /// Default output file name for the pipeline's table.
    #[must_use]
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Organizations => "organizations.csv",
            Self::Preparers => "accountants.csv",
            Self::Staff => "staff.csv",
            Self::Beneficiaries => "beneficiaries.csv",
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every column any pipeline can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    // Filer header
    FilingYear,
    FormType,
    Ein,
    Phone,
    BusinessName,
    OrganizationName,
    City,
    ZipCode,
    State,
    Country,
    Address1,
    Address2,

    // Organizations
    OfficerName,
    OfficerTitle,
    Mission,
    Revenue,
    Expenses,
    Employees,
    Volunteers,
    ContractorsOver100k,
    UnrelatedBusinessRevenue,
    DonorAdvisedFund,
    LocalChapters,
    TransferToExempt,
    FmvAssets,
    EmployeesOver50k,

    // Preparers
    PreparerFirmEin,
    PreparerFirmName,
    PreparerFirmAddress,
    PreparerFirmCity,
    PreparerFirmState,
    PreparerFirmZipCode,
    BooksName,
    BooksPhone,
    BooksAddress,
    BooksZipCode,

    // Staff
    EmployeeType,
    EmployeeName,
    EmployeeTitle,
    EmployeeAddress,
    EmployeeCompensation,

    // Beneficiaries
    GrantType,
    GranteeName,
    GranteeAddress,
    FoundationStatus,
    GrantPurpose,
    GrantAmount,
    TotalAmount,
}

impl Field {
    /// Column header for the CSV output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FilingYear => "Filing Year",
            Self::FormType => "Type",
            Self::Ein => "EIN",
            Self::Phone => "Telephone Number",
            Self::BusinessName => "Business Name",
            Self::OrganizationName => "Name of organization",
            Self::City => "City/Town",
            Self::ZipCode => "Zip Code",
            Self::State => "State/Province",
            Self::Country => "Country",
            Self::Address1 => "Address 1",
            Self::Address2 => "Address 2",
            Self::OfficerName => "Signing officer name",
            Self::OfficerTitle => "Signing officer title",
            Self::Mission => "Mission/primary purpose",
            Self::Revenue => "Total revenue",
            Self::Expenses => "Total expenses",
            Self::Employees => "Total number of individuals employed in calendar year",
            Self::Volunteers => "Total number of volunteers",
            Self::ContractorsOver100k => {
                "total number of independent contractors receiving over $100k"
            }
            Self::UnrelatedBusinessRevenue => "Total unrelated business revenue",
            Self::DonorAdvisedFund => "did the organization maintain any donor advised fund",
            Self::LocalChapters => "B10a: did the organziation have local chapters or affiliates",
            Self::TransferToExempt => "Transfer to an exempt non charitable related organization",
            Self::FmvAssets => "fair market value of all assets",
            Self::EmployeesOver50k => "total number of employees receiving over $50k",
            Self::PreparerFirmEin => "Firm EIN",
            Self::PreparerFirmName => "Firm name/Preparer name",
            Self::PreparerFirmAddress => "Firm Address",
            Self::PreparerFirmCity => "Firm City",
            Self::PreparerFirmState => "Firm Country/State",
            Self::PreparerFirmZipCode => "Firm Zip Code",
            Self::BooksName => "the books are in care of: Name",
            Self::BooksPhone => "the books are in care of: Telephone",
            Self::BooksAddress => "the books are in care of: Address",
            Self::BooksZipCode => "the books are in care of: Zip Code",
            Self::EmployeeType => "Employee Type",
            Self::EmployeeName => "Employee Name",
            Self::EmployeeTitle => "Employee Title",
            Self::EmployeeAddress => "Employee Address",
            Self::EmployeeCompensation => "Employee Compensation",
            Self::GrantType => "Grant Type",
            Self::GranteeName => "Grantee Name",
            Self::GranteeAddress => "Grantee Address",
            Self::FoundationStatus => "Foundation Status",
            Self::GrantPurpose => "Purpose of Grant",
            Self::GrantAmount => "Grant Amount",
            Self::TotalAmount => "Total Amount",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output row: fields in insertion order.
///
/// Absent optional values are stored as empty strings so the column still
/// appears in the table header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(Field, String)>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, keeping its original position when it already exists.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((field, value)),
        }
    }

    /// Builder-style variant of [`Record::set`].
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Get the value of a field, if present.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over the fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Number of fields in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_type_from_code() {
        assert_eq!(FormType::from_code("990").unwrap(), FormType::Base);
        assert_eq!(FormType::from_code("990EZ").unwrap(), FormType::EZ);
        assert_eq!(
            FormType::from_code("990PF").unwrap(),
            FormType::PrivateFoundation
        );
        assert!(matches!(
            FormType::from_code("990ez"),
            Err(ExtractorError::UnknownVariant(code)) if code == "990ez"
        ));
    }

    #[test]
    fn test_form_type_return_data_tag() {
        assert_eq!(FormType::Base.return_data_tag(), "IRS990");
        assert_eq!(FormType::EZ.return_data_tag(), "IRS990EZ");
        assert_eq!(FormType::PrivateFoundation.return_data_tag(), "IRS990PF");
    }

    #[test]
    fn test_form_type_code_round_trips() {
        for form_type in [FormType::Base, FormType::EZ, FormType::PrivateFoundation] {
            assert_eq!(FormType::from_code(form_type.code()).unwrap(), form_type);
        }
    }

    #[test]
    fn test_pipeline_default_file_name() {
        assert_eq!(Pipeline::Organizations.default_file_name(), "organizations.csv");
        assert_eq!(Pipeline::Preparers.default_file_name(), "accountants.csv");
        assert_eq!(Pipeline::Staff.to_string(), "staff");
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let record = Record::new()
            .with(Field::Ein, "123")
            .with(Field::FilingYear, "2019")
            .with(Field::FormType, "990");

        let order: Vec<_> = record.fields().map(|(f, _)| f).collect();
        assert_eq!(order, vec![Field::Ein, Field::FilingYear, Field::FormType]);
    }

    #[test]
    fn test_record_set_overwrites_in_place() {
        let mut record = Record::new().with(Field::Ein, "1").with(Field::Phone, "");
        record.set(Field::Ein, "2");

        assert_eq!(record.len(), 2);
        assert_eq!(record.get(Field::Ein), Some("2"));
        assert_eq!(record.fields().next(), Some((Field::Ein, "2")));
        assert_eq!(record.get(Field::Mission), None);
    }

    #[test]
    fn test_field_headers() {
        assert_eq!(Field::FilingYear.as_str(), "Filing Year");
        assert_eq!(Field::TotalAmount.to_string(), "Total Amount");
        assert_eq!(Field::PreparerFirmState.as_str(), "Firm Country/State");
    }
}
