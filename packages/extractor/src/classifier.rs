//! Classification of parsed filings.
//!
//! Every e-file document starts with `Return/ReturnHeader`, which carries the
//! tax period, the declared return type and the `Filer` block. These values
//! route the document to a form variant and are copied into every record
//! derived from it.

use chrono::Datelike;
use roxmltree::{Document, Node};

use crate::config::parse_date;
use crate::error::Result;
use crate::types::FormType;
use crate::xml::{get_optional_text, get_required_child, get_text};

/// Filer street address (always a `USAddress` block).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilerAddress {
    pub street: String,
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Fields read from `ReturnHeader` shared by every pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilerHeader {
    /// Year component of `TaxPeriodBeginDt`.
    pub filing_year: i32,

    /// `ReturnTypeCd` exactly as declared.
    pub return_type: String,

    pub form_type: FormType,

    /// Filer EIN.
    pub ein: String,

    /// First line of the filer business name.
    pub business_name: String,

    pub phone: Option<String>,

    pub address: FilerAddress,
}

/// A parsed filing together with its header.
#[derive(Debug, Clone)]
pub struct ClassifiedDocument<'a, 'input> {
    pub document: &'a Document<'input>,
    pub header: FilerHeader,
}

impl<'a, 'input> ClassifiedDocument<'a, 'input> {
    /// The `<Return>` element.
    pub fn return_element(&self) -> Result<Node<'a, 'input>> {
        get_required_child(self.document.root(), "Return")
    }

    /// The `<ReturnHeader>` element.
    pub fn header_element(&self) -> Result<Node<'a, 'input>> {
        get_required_child(self.return_element()?, "ReturnHeader")
    }

    /// The form element under `ReturnData` matching the declared variant.
    pub fn form_element(&self) -> Result<Node<'a, 'input>> {
        let data = get_required_child(self.return_element()?, "ReturnData")?;
        get_required_child(data, self.header.form_type.return_data_tag())
    }

    /// Root node, for searches across the whole document.
    pub fn root(&self) -> Node<'a, 'input> {
        self.document.root()
    }

    #[must_use]
    pub fn form_type(&self) -> FormType {
        self.header.form_type
    }
}

/// Classify a parsed filing.
///
/// Fails with a structure error when `Return`, `ReturnHeader` or `Filer` are
/// missing, with `InvalidDate` for a malformed tax period, and with
/// `UnknownVariant` for an unrecognized return type.
pub fn classify<'a, 'input>(
    document: &'a Document<'input>,
) -> Result<ClassifiedDocument<'a, 'input>> {
    let return_element = get_required_child(document.root(), "Return")?;
    let header_element = get_required_child(return_element, "ReturnHeader")?;
    let header = read_filer_header(header_element)?;

    Ok(ClassifiedDocument { document, header })
}

/// Read the common filer fields from a `ReturnHeader` element.
pub fn read_filer_header(header: Node<'_, '_>) -> Result<FilerHeader> {
    let filer = get_required_child(header, "Filer")?;

    let filing_year = filing_year(&get_text(header, "TaxPeriodBeginDt", false)?)?;

    let return_type = get_text(header, "ReturnTypeCd", false)?;
    let form_type = FormType::from_code(&return_type)?;

    let ein = get_text(filer, "EIN", false)?;
    let phone = get_optional_text(filer, "PhoneNum")?;

    let business_name_element = get_required_child(filer, "BusinessName")?;
    let business_name = get_text(business_name_element, "BusinessNameLine1Txt", false)?;

    let address_element = get_required_child(filer, "USAddress")?;
    let address = FilerAddress {
        street: get_text(address_element, "AddressLine1Txt", false)?,
        street2: get_optional_text(address_element, "AddressLine2Txt")?,
        city: get_text(address_element, "CityNm", false)?,
        state: get_text(address_element, "StateAbbreviationCd", false)?,
        zip: get_text(address_element, "ZIPCd", false)?,
    };

    Ok(FilerHeader {
        filing_year,
        return_type,
        form_type,
        ein,
        business_name,
        phone,
        address,
    })
}

/// Filing year of a tax period beginning on `begin_date` (`YYYY-MM-DD`).
///
/// # Examples
/// ```
/// use irs990_extractor::classifier::filing_year;
///
/// assert_eq!(filing_year("2019-07-01").unwrap(), 2019);
/// ```
pub fn filing_year(begin_date: &str) -> Result<i32> {
    Ok(parse_date(begin_date)?.year())
}
