//! Schema validation of incoming product data.
//!
//! Request bodies arrive as already-deserialized drafts; the functions here
//! apply the field constraints and either hand back a validated
//! [`Product`] (or [`ProductChanges`]) or every violation found. Every
//! constraint lives here, including status enum membership, so a broken
//! field always surfaces as a named violation rather than a framework
//! deserialization error. Validation is deliberately framework-free so it
//! can run anywhere, not just inside an HTTP handler.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::ValidateEmail;

use prodreg_core::{DomainError, DomainResult, FieldViolations};

use crate::cpf;
use crate::product::{Product, ProductChanges, ProductStatus};

/// CPF shape message, kept verbatim from the registry's original schema.
const CPF_SHAPE_MSG: &str = "CPF deve conter exatamente 11 dígitos numéricos.";
const CPF_CHECKSUM_MSG: &str = "CPF Invalid";
const STATUS_MSG: &str = "must be one of INATIVO, PENDENTE, ATIVO";

/// A full product body, as sent to create and full-update endpoints.
///
/// `status` is carried as its wire string so that a non-member value is a
/// field violation, not a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub model: String,
    pub date_manufacture: String,
    pub year: i64,
    pub brand: String,
    pub email: String,
    pub cpf: String,
    pub status: String,
}

/// A partial product body, as sent to the merge-patch endpoint.
///
/// Absent fields are left untouched by the store; present fields must pass
/// the same constraints as on create.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub model: Option<String>,
    pub date_manufacture: Option<String>,
    pub year: Option<i64>,
    pub brand: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub status: Option<String>,
}

/// Validates a full draft, collecting every field violation.
pub fn validate_draft(draft: ProductDraft) -> DomainResult<Product> {
    let mut violations = FieldViolations::new();

    check_non_empty(&mut violations, "id", &draft.id);
    check_non_empty(&mut violations, "name", &draft.name);
    check_non_empty(&mut violations, "model", &draft.model);
    check_date(&mut violations, "dateManufacture", &draft.date_manufacture);
    check_non_empty(&mut violations, "brand", &draft.brand);
    check_email(&mut violations, "email", &draft.email);
    check_cpf(&mut violations, "cpf", &draft.cpf);

    let Some(status) = check_status(&mut violations, "status", &draft.status) else {
        return Err(DomainError::validation(violations));
    };

    let product = Product {
        id: draft.id,
        name: draft.name,
        model: draft.model,
        date_manufacture: draft.date_manufacture,
        year: draft.year,
        brand: draft.brand,
        email: draft.email,
        cpf: draft.cpf,
        status,
    };

    violations.into_result(product).map_err(DomainError::validation)
}

/// Validates the supplied fields of a patch; absent fields are skipped.
/// On success the wire patch becomes a typed [`ProductChanges`].
pub fn validate_patch(patch: ProductPatch) -> DomainResult<ProductChanges> {
    let mut violations = FieldViolations::new();

    if let Some(id) = &patch.id {
        check_non_empty(&mut violations, "id", id);
    }
    if let Some(name) = &patch.name {
        check_non_empty(&mut violations, "name", name);
    }
    if let Some(model) = &patch.model {
        check_non_empty(&mut violations, "model", model);
    }
    if let Some(date) = &patch.date_manufacture {
        check_date(&mut violations, "dateManufacture", date);
    }
    if let Some(brand) = &patch.brand {
        check_non_empty(&mut violations, "brand", brand);
    }
    if let Some(email) = &patch.email {
        check_email(&mut violations, "email", email);
    }
    if let Some(cpf) = &patch.cpf {
        check_cpf(&mut violations, "cpf", cpf);
    }
    let status = match &patch.status {
        Some(value) => check_status(&mut violations, "status", value),
        None => None,
    };

    let changes = ProductChanges {
        id: patch.id,
        name: patch.name,
        model: patch.model,
        date_manufacture: patch.date_manufacture,
        year: patch.year,
        brand: patch.brand,
        email: patch.email,
        cpf: patch.cpf,
        status,
    };

    violations.into_result(changes).map_err(DomainError::validation)
}

fn check_non_empty(violations: &mut FieldViolations, field: &str, value: &str) {
    if value.is_empty() {
        violations.push(field, "must not be empty");
    }
}

fn check_date(violations: &mut FieldViolations, field: &str, value: &str) {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        violations.push(field, "must be a calendar date (YYYY-MM-DD)");
    }
}

fn check_email(violations: &mut FieldViolations, field: &str, value: &str) {
    if !value.validate_email() {
        violations.push(field, "must be a valid email address");
    }
}

fn check_cpf(violations: &mut FieldViolations, field: &str, value: &str) {
    if value.len() != 11 || !value.bytes().all(|b| b.is_ascii_digit()) {
        violations.push(field, CPF_SHAPE_MSG);
    } else if !cpf::is_valid(value) {
        violations.push(field, CPF_CHECKSUM_MSG);
    }
}

fn check_status(
    violations: &mut FieldViolations,
    field: &str,
    value: &str,
) -> Option<ProductStatus> {
    let status = ProductStatus::from_wire(value);
    if status.is_none() {
        violations.push(field, STATUS_MSG);
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            id: "1".to_string(),
            name: "Moto G".to_string(),
            model: "G52".to_string(),
            date_manufacture: "2022-05-10".to_string(),
            year: 2022,
            brand: "Motorola".to_string(),
            email: "sales@example.com".to_string(),
            cpf: "11144477735".to_string(),
            status: "PENDENTE".to_string(),
        }
    }

    #[test]
    fn valid_draft_becomes_product() {
        let product = validate_draft(draft()).unwrap();
        assert_eq!(product.id, "1");
        assert_eq!(product.status, ProductStatus::Pending);
    }

    #[test]
    fn empty_name_is_reported_with_field_path() {
        let err = validate_draft(ProductDraft {
            name: String::new(),
            ..draft()
        })
        .unwrap_err();

        match err {
            DomainError::Validation(v) => {
                assert_eq!(v.violations().len(), 1);
                assert_eq!(v.violations()[0].field, "name");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn malformed_date_is_rejected() {
        let err = validate_draft(ProductDraft {
            date_manufacture: "2022-13-40".to_string(),
            ..draft()
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let err = validate_draft(ProductDraft {
            email: "not-an-email".to_string(),
            ..draft()
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn cpf_shape_failure_uses_original_message() {
        let err = validate_draft(ProductDraft {
            cpf: "123".to_string(),
            ..draft()
        })
        .unwrap_err();

        match err {
            DomainError::Validation(v) => {
                assert_eq!(v.violations()[0].message, CPF_SHAPE_MSG);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn cpf_checksum_failure_uses_original_message() {
        let err = validate_draft(ProductDraft {
            cpf: "11144477736".to_string(),
            ..draft()
        })
        .unwrap_err();

        match err {
            DomainError::Validation(v) => {
                assert_eq!(v.violations()[0].message, CPF_CHECKSUM_MSG);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn formatted_cpf_fails_the_shape_check() {
        // The schema requires bare digits even though the checksum would
        // tolerate formatting.
        let err = validate_draft(ProductDraft {
            cpf: "111.444.777-35".to_string(),
            ..draft()
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn non_member_status_is_a_status_field_violation() {
        // "ACTIVE" is an English spelling, not a wire value; it must come
        // back as a named violation, not a deserialization failure.
        let err = validate_draft(ProductDraft {
            status: "ACTIVE".to_string(),
            ..draft()
        })
        .unwrap_err();

        match err {
            DomainError::Validation(v) => {
                assert_eq!(v.violations().len(), 1);
                assert_eq!(v.violations()[0].field, "status");
                assert_eq!(v.violations()[0].message, STATUS_MSG);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn bad_status_is_collected_alongside_other_violations() {
        let err = validate_draft(ProductDraft {
            name: String::new(),
            status: "ACTIVE".to_string(),
            ..draft()
        })
        .unwrap_err();

        match err {
            DomainError::Validation(v) => {
                let fields: Vec<_> = v.violations().iter().map(|v| v.field.as_str()).collect();
                assert_eq!(fields, ["name", "status"]);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn all_violations_are_collected_at_once() {
        let err = validate_draft(ProductDraft {
            name: String::new(),
            brand: String::new(),
            cpf: "123".to_string(),
            ..draft()
        })
        .unwrap_err();

        match err {
            DomainError::Validation(v) => assert_eq!(v.violations().len(), 3),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn patch_skips_absent_fields() {
        let changes = validate_patch(ProductPatch::default()).unwrap();
        assert_eq!(changes, ProductChanges::default());
    }

    #[test]
    fn patch_parses_a_member_status() {
        let changes = validate_patch(ProductPatch {
            status: Some("ATIVO".to_string()),
            ..ProductPatch::default()
        })
        .unwrap();
        assert_eq!(changes, ProductChanges::status(ProductStatus::Active));
    }

    #[test]
    fn patch_rejects_a_non_member_status() {
        let err = validate_patch(ProductPatch {
            status: Some("ACTIVE".to_string()),
            ..ProductPatch::default()
        })
        .unwrap_err();

        match err {
            DomainError::Validation(v) => {
                assert_eq!(v.violations()[0].field, "status");
                assert_eq!(v.violations()[0].message, STATUS_MSG);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn patch_validates_present_fields() {
        let err = validate_patch(ProductPatch {
            cpf: Some("11111111111".to_string()),
            ..ProductPatch::default()
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
