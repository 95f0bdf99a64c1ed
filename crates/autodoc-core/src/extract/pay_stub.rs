//! Pay stub field extraction.

use crate::models::document::FieldMap;

use super::patterns::{
    PAY_STUB_CYCLE, PAY_STUB_EMPLOYEE, PAY_STUB_EMPLOYER, PAY_STUB_GROSS_PAY, PAY_STUB_NET_PAY,
    PAY_STUB_PAYROLL_ID, PAY_STUB_PAY_DATE, PAY_STUB_PAY_RATE,
};

/// Extract pay stub fields: `employer`, `employee`, `payroll_id`, `cycle`,
/// `pay_rate`, `pay_date`, `gross_pay`, `net_pay`.
///
/// Gross and net pay are captured from the line below their uppercase
/// markers; every other field sits on the same line as its label.
pub fn extract_pay_stub_fields(text: &str) -> FieldMap {
    let mut fields = FieldMap::new();

    if let Some(caps) = PAY_STUB_EMPLOYER.captures(text) {
        fields.insert("employer".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = PAY_STUB_EMPLOYEE.captures(text) {
        fields.insert("employee".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = PAY_STUB_PAYROLL_ID.captures(text) {
        fields.insert("payroll_id".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = PAY_STUB_CYCLE.captures(text) {
        fields.insert("cycle".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = PAY_STUB_PAY_RATE.captures(text) {
        fields.insert("pay_rate".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = PAY_STUB_PAY_DATE.captures(text) {
        fields.insert("pay_date".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = PAY_STUB_GROSS_PAY.captures(text) {
        fields.insert("gross_pay".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = PAY_STUB_NET_PAY.captures(text) {
        fields.insert("net_pay".to_string(), caps[1].trim().to_string());
    }

    fields
}
