//! Node.js entry points. The host serializes its document as a
//! [`DocumentSnapshot`] and gets the report back as plain JSON.

use crate::check::{Check, ContrastCheck};
use crate::document::DocumentSnapshot;
use crate::error::AuditError;
use crate::types::AuditOptions;

fn to_napi_error(err: AuditError) -> napi::Error {
    napi::Error::from_reason(err.to_string())
}

#[napi]
pub fn audit_contrast(
    snapshot: serde_json::Value,
    options: Option<serde_json::Value>,
) -> napi::Result<serde_json::Value> {
    let doc = DocumentSnapshot::from_value(snapshot).map_err(to_napi_error)?;
    let options: AuditOptions = match options {
        Some(value) => serde_json::from_value(value)
            .map_err(|e| to_napi_error(AuditError::from(e)))?,
        None => AuditOptions::default(),
    };

    let report = ContrastCheck::with_options(options).run(&doc);
    serde_json::to_value(&report).map_err(|e| napi::Error::from_reason(e.to_string()))
}

#[napi]
pub fn contrast_check_info() -> Vec<String> {
    vec![ContrastCheck::ID.to_string(), ContrastCheck::TITLE.to_string()]
}
