//! Regex patterns for per-type field extraction.
//!
//! Each pattern pairs a label anchor with a value shape and captures the
//! value in group 1. Patterns are evaluated independently against the full
//! text; the first match wins.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Invoice patterns
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)(?:invoice\s*number|inv\s*no\.?)\s*[:\-]?\s*([A-Za-z0-9\-]+)"
    ).unwrap();

    pub static ref INVOICE_DATE: Regex = Regex::new(
        r"(?i)(?:invoice\s*date|date)\s*[:\-]?\s*([0-9]{2,4}[/\-][0-9]{1,2}[/\-][0-9]{1,2})"
    ).unwrap();

    pub static ref INVOICE_TOTAL: Regex = Regex::new(
        r"(?i)(?:total\s*amount|amount\s*due|total)\s*[:\-]?\s*([$€£]?\s*[0-9.,]+)"
    ).unwrap();

    pub static ref INVOICE_VENDOR: Regex = Regex::new(
        r"(?i)(?:from|vendor|supplier)\s*[:\-]?\s*([A-Za-z0-9 &.,]+)"
    ).unwrap();

    // Purchase order patterns
    pub static ref PO_NUMBER: Regex = Regex::new(
        r"(?i)(?:po\s*number|purchase\s*order\s*no\.?)\s*[:\-]?\s*([A-Za-z0-9\-]+)"
    ).unwrap();

    pub static ref PO_DATE: Regex = Regex::new(
        r"(?i)(?:po\s*date|date)\s*[:\-]?\s*([0-9]{2,4}[/\-][0-9]{1,2}[/\-][0-9]{1,2})"
    ).unwrap();

    pub static ref PO_TOTAL: Regex = Regex::new(
        r"(?i)(?:total\s*amount|amount)\s*[:\-]?\s*([$€£]?\s*[0-9.,]+)"
    ).unwrap();

    pub static ref PO_BUYER: Regex = Regex::new(
        r"(?i)(?:to|buyer|customer)\s*[:\-]?\s*([A-Za-z0-9 &.,]+)"
    ).unwrap();

    // Driver license patterns. The name heuristic keys off the literal
    // "sample" marker found on specimen documents; it is deliberately narrow.
    pub static ref DL_NAME: Regex = Regex::new(
        r"(?i)sample\s+([A-Z][a-zA-Z]+)"
    ).unwrap();

    pub static ref DL_NUMBER: Regex = Regex::new(
        r"(?i)DLN?\s*([A-Z0-9]+)"
    ).unwrap();

    pub static ref DL_DOB: Regex = Regex::new(
        r"(?i)DOB\s*([0-9]{2}/[0-9]{2}/[0-9]{4})"
    ).unwrap();

    // Passport patterns
    pub static ref PASSPORT_NUMBER: Regex = Regex::new(
        r"(?i)passport\s*no\.?\s*([A-Z0-9]+)"
    ).unwrap();

    pub static ref PASSPORT_NAME: Regex = Regex::new(
        r"(?i)(?:surname|last name)\s*:?\s*([A-Z][A-Za-z ]+)"
    ).unwrap();

    // W-2 patterns, anchored to the printed box labels.
    pub static ref W2_SSN: Regex = Regex::new(
        r"(?i)social security number\s*([0-9]{3}-[0-9]{2}-[0-9]{4})"
    ).unwrap();

    pub static ref W2_WAGES: Regex = Regex::new(
        r"(?i)1\s*wages, tips, other compensation\s*([0-9,.]+)"
    ).unwrap();

    pub static ref W2_EIN: Regex = Regex::new(
        r"(?i)employer identification number \(ein\)\s*([0-9\-]+)"
    ).unwrap();

    // Pay stub patterns
    pub static ref PAY_STUB_EMPLOYER: Regex = Regex::new(
        r"(?i)EMPLOYER NAME/ADDRESS:\s*(.+)"
    ).unwrap();

    pub static ref PAY_STUB_EMPLOYEE: Regex = Regex::new(
        r"(?i)EMPLOYEE NAME/ADDRESS:\s*([\w\s,]+)"
    ).unwrap();

    pub static ref PAY_STUB_PAYROLL_ID: Regex = Regex::new(
        r"(?i)Payroll ID:\s*([0-9A-Za-z\-]+)"
    ).unwrap();

    pub static ref PAY_STUB_CYCLE: Regex = Regex::new(
        r"(?i)Cycle:\s*([0-9\-]+\s*-\s*[0-9\-]+)"
    ).unwrap();

    pub static ref PAY_STUB_PAY_RATE: Regex = Regex::new(
        r"(?i)Pay Rate:\s*([$0-9,./yr]+)"
    ).unwrap();

    pub static ref PAY_STUB_PAY_DATE: Regex = Regex::new(
        r"(?i)Pay Date:\s*([0-9\-]+)"
    ).unwrap();

    // Gross/net pay amounts sit on the line below their marker, unlike every
    // other single-line field.
    pub static ref PAY_STUB_GROSS_PAY: Regex = Regex::new(
        r"(?i)GROSS PAY\s*\n\s*([0-9.,$]+)"
    ).unwrap();

    pub static ref PAY_STUB_NET_PAY: Regex = Regex::new(
        r"(?i)NET PAY\s*\n\s*([0-9.,$]+)"
    ).unwrap();

    // Flood form patterns
    pub static ref FLOOD_BORROWER: Regex = Regex::new(
        r"(?i)borrower\s*:?\s*([A-Z ,'\-]+)"
    ).unwrap();

    pub static ref FLOOD_LENDER: Regex = Regex::new(
        r"(?i)the federal savings bank"
    ).unwrap();

    pub static ref FLOOD_DETERMINATION_ADDRESS: Regex = Regex::new(
        r"(?i)Address Determination Address:\s*(.+)"
    ).unwrap();

    // Case-sensitive: county names appear as uppercase runs on the form.
    pub static ref FLOOD_COUNTY: Regex = Regex::new(
        r"([A-Z ]+COUNTY)"
    ).unwrap();
}
