//! IRS 990 Extractor - Tabulate nonprofit e-file returns.
//!
//! This crate reads IRS Form 990, 990-EZ and 990-PF e-file XML documents
//! and produces one CSV table per extraction pipeline: organizations, paid
//! preparers, staff and grant beneficiaries.
//!
//! # Example
//!
//! ```
//! use roxmltree::Document;
//! use irs990_extractor::classifier::classify;
//! use irs990_extractor::types::FormType;
//!
//! let xml = r#"<Return xmlns="http://www.irs.gov/efile">
//!   <ReturnHeader>
//!     <TaxPeriodBeginDt>2019-01-01</TaxPeriodBeginDt>
//!     <ReturnTypeCd>990EZ</ReturnTypeCd>
//!     <Filer>
//!       <EIN>123456789</EIN>
//!       <BusinessName><BusinessNameLine1Txt>Helping Hands</BusinessNameLine1Txt></BusinessName>
//!       <USAddress>
//!         <AddressLine1Txt>1 Elm St</AddressLine1Txt>
//!         <CityNm>Springfield</CityNm>
//!         <StateAbbreviationCd>IL</StateAbbreviationCd>
//!         <ZIPCd>62704</ZIPCd>
//!       </USAddress>
//!     </Filer>
//!   </ReturnHeader>
//!   <ReturnData><IRS990EZ/></ReturnData>
//! </Return>"#;
//!
//! let doc = Document::parse(xml).unwrap();
//! let filing = classify(&doc).unwrap();
//! assert_eq!(filing.form_type(), FormType::EZ);
//! assert_eq!(filing.header.filing_year, 2019);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (FormType, Pipeline, Field, Record)
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Tag navigation utilities
//! - [`address`]: Address formatting
//! - [`classifier`]: Return type and filer header
//! - [`extractors`]: One extractor per pipeline
//! - [`text`]: Cell value normalization
//! - [`scanner`]: Filing discovery
//! - [`output`]: CSV generation and atomic save
//! - [`driver`]: Batch driver
//! - [`cli`]: Command-line interface

pub mod address;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod extractors;
pub mod output;
pub mod scanner;
pub mod text;
pub mod types;
pub mod xml;

// Re-export main functions
pub use driver::{run_pipeline, ErrorPolicy, RunSummary};

// Re-export commonly used items
pub use error::{ExtractorError, Result};
pub use types::{Field, FormType, Pipeline, Record};
