//! Per-type field extractors and their dispatch table.
//!
//! Each extractor is a pure function applying an ordered set of pattern
//! searches over the raw text. A key is inserted only when its pattern
//! matches; omission is the only "not found" signal. Extractors share no
//! state and never fail.

pub mod patterns;

pub mod driver_license;
pub mod flood_form;
pub mod invoice;
pub mod passport;
pub mod pay_stub;
pub mod purchase_order;
pub mod w2;

pub use driver_license::extract_driver_license_fields;
pub use flood_form::extract_flood_form_fields;
pub use invoice::extract_invoice_fields;
pub use passport::extract_passport_fields;
pub use pay_stub::extract_pay_stub_fields;
pub use purchase_order::extract_po_fields;
pub use w2::extract_w2_fields;

use crate::models::document::{DocumentType, FieldMap};

/// Extract the structured fields for an already-classified document.
///
/// Dispatch is an exhaustive match over the closed [`DocumentType`] set, so a
/// new type cannot be added without an extractor arm. `Unknown` yields an
/// empty map rather than an error.
pub fn extract(doc_type: DocumentType, text: &str) -> FieldMap {
    match doc_type {
        DocumentType::Invoice => extract_invoice_fields(text),
        DocumentType::PurchaseOrder => extract_po_fields(text),
        DocumentType::DriverLicense => extract_driver_license_fields(text),
        DocumentType::Passport => extract_passport_fields(text),
        DocumentType::W2 => extract_w2_fields(text),
        DocumentType::PayStub => extract_pay_stub_fields(text),
        DocumentType::FloodForm => extract_flood_form_fields(text),
        DocumentType::Unknown => FieldMap::new(),
    }
}
