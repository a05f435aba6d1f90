//! Form view-model submit flows against a scripted `/api/me`.

mod common;

use futures::executor::block_on;
use serde_json::json;

use common::{john_doe, ScriptedTransport};
use me_portal::models::ToastKind;
use me_portal::services::FALLBACK_ERROR_MESSAGE;
use me_portal::viewmodels::{BankForm, PersonalForm, TaxForm};
use me_portal::{ApiError, MeStore, ToastStore};

#[test]
fn bank_submit_strips_iban_spaces_and_reports_success() {
    let store = MeStore::new(ScriptedTransport::loaded().put_json(json!({})));
    block_on(store.refresh());
    let toasts = ToastStore::new();

    let mut form = BankForm::from_profile(store.data().as_ref());
    form.form.iban = "DE44 1234 1234 1234 1234 12".into();

    assert!(block_on(form.submit(&store, &toasts)));

    let bodies = store.transport().put_bodies();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["bankDetail"]["iban"], "DE44123412341234123412");
    assert!(form.status.success);
    assert!(!form.status.saving);
    assert_eq!(form.status.error, None);

    let shown = toasts.toasts();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].kind, ToastKind::Success);
    assert_eq!(shown[0].text, "Bank details saved successfully");
}

#[test]
fn invalid_form_never_sends_a_put() {
    let store = MeStore::new(ScriptedTransport::new());
    let toasts = ToastStore::new();
    let mut form = BankForm::default();

    assert!(!block_on(form.submit(&store, &toasts)));

    assert!(store.transport().put_bodies().is_empty());
    assert_eq!(
        form.status.error.as_deref(),
        Some("Please correct the highlighted fields.")
    );
    assert!(form.status.field_errors.contains_key("iban"));
    assert!(toasts.is_empty());
}

#[test]
fn failed_submit_surfaces_the_error_and_keeps_profile() {
    let store = MeStore::new(
        ScriptedTransport::loaded().put_err(ApiError::Network("Network error".into())),
    );
    block_on(store.refresh());
    let toasts = ToastStore::new();

    let mut form = PersonalForm::from_profile(store.data().as_ref());
    form.form.first_name = "Changed".into();

    assert!(!block_on(form.submit(&store, &toasts)));

    assert!(!form.status.success);
    assert!(!form.status.saving);
    assert_eq!(form.status.error.as_deref(), Some("Network error"));
    assert_eq!(store.data(), Some(john_doe()));

    let shown = toasts.toasts();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].kind, ToastKind::Error);
    assert_eq!(shown[0].text, "Network error");
}

#[test]
fn errors_without_a_message_fall_back_to_generic_text() {
    let store = MeStore::new(
        ScriptedTransport::loaded().put_err(ApiError::Network(String::new())),
    );
    block_on(store.refresh());
    let toasts = ToastStore::new();

    let mut form = PersonalForm::from_profile(store.data().as_ref());
    assert!(!block_on(form.submit(&store, &toasts)));
    assert_eq!(form.status.error.as_deref(), Some(FALLBACK_ERROR_MESSAGE));
}

#[test]
fn personal_submit_merges_server_response() {
    let store = MeStore::new(
        ScriptedTransport::loaded().put_json(json!({ "data": { "firstName": "Ben" } })),
    );
    block_on(store.refresh());
    let toasts = ToastStore::new();

    let mut form = PersonalForm::from_profile(store.data().as_ref());
    form.form.first_name = "Ben".into();

    assert!(block_on(form.submit(&store, &toasts)));
    let profile = store.data().unwrap();
    assert_eq!(profile.first_name, "Ben");
    assert_eq!(profile.last_name, "Doe");
}

#[test]
fn tax_submit_uses_sentinels_for_missing_ids() {
    let store = MeStore::new(ScriptedTransport::loaded().put_json(json!({})));
    block_on(store.refresh());
    let toasts = ToastStore::new();

    let mut form = TaxForm::from_profile(store.data().as_ref());
    form.tax.tax_id.clear();
    form.tax.no_tax_id = true;
    form.insurance.ssn.clear();
    form.insurance.no_ssn = true;

    assert!(block_on(form.submit(&store, &toasts)));

    let body = &store.transport().put_bodies()[0];
    assert_eq!(body["tax"]["taxId"], "N/A");
    assert_eq!(body["tax"]["noTaxId"], true);
    assert_eq!(body["insurance"]["ssn"], "N/A");
    assert_eq!(body["insurance"]["noSsn"], true);
    assert_eq!(
        toasts.toasts()[0].text,
        "Tax and Insurance data saved successfully"
    );
}

#[test]
fn resubmitting_clears_the_previous_error() {
    let store = MeStore::new(
        ScriptedTransport::loaded()
            .put_err(ApiError::Network("Network error".into()))
            .put_json(json!({})),
    );
    block_on(store.refresh());
    let toasts = ToastStore::new();
    let mut form = TaxForm::from_profile(store.data().as_ref());

    assert!(!block_on(form.submit(&store, &toasts)));
    assert!(form.status.error.is_some());

    assert!(block_on(form.submit(&store, &toasts)));
    assert_eq!(form.status.error, None);
    assert!(form.status.success);
}
