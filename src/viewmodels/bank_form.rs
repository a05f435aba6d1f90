// ============================================================================
// BANK FORM VIEWMODEL - Datos bancarios
// ============================================================================

use crate::models::{BankDetail, BankPayload, Profile};
use crate::services::MeTransport;
use crate::state::{MeStore, ToastStore};
use crate::utils::constants::BANK_SAVED_MESSAGE;
use crate::utils::validation::{bic_lite, combine, iban_lite, min_len, required, rule};
use crate::viewmodels::form_status::{check_field, FieldErrors, FormStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankForm {
    pub form: BankDetail,
    pub status: FormStatus,
}

impl BankForm {
    pub fn from_profile(profile: Option<&Profile>) -> Self {
        Self {
            form: profile.map(|p| p.bank_detail.clone()).unwrap_or_default(),
            status: FormStatus::default(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let f = &self.form;
        let mandatory = rule(required);
        let mut errors = FieldErrors::new();

        check_field(&mut errors, "payee", &f.payee, &combine(vec![rule(required), min_len(2)]));
        check_field(&mut errors, "paymentMethod", &f.payment_method, &mandatory);
        check_field(&mut errors, "bankName", &f.bank_name, &mandatory);
        check_field(&mut errors, "bankBic", &f.bank_bic, &combine(vec![rule(required), rule(bic_lite)]));
        check_field(&mut errors, "iban", &f.iban, &combine(vec![rule(required), rule(iban_lite)]));
        check_field(&mut errors, "id", &f.id, &mandatory);
        check_field(&mut errors, "bankId", &f.bank_id, &mandatory);
        errors
    }

    /// El IBAN se envía sin espacios
    pub fn to_payload(&self) -> BankPayload {
        let mut bank_detail = self.form.clone();
        bank_detail.iban.retain(|c| c != ' ');
        BankPayload { bank_detail }
    }

    pub async fn submit<T: MeTransport>(&mut self, store: &MeStore<T>, toasts: &ToastStore) -> bool {
        self.status.reset();
        if !self.status.accept(self.validate()) {
            return false;
        }

        let loading = self.status.start_saving(toasts);
        let result = store.update_bank(&self.to_payload()).await;
        self.status.settle(result, toasts, loading, BANK_SAVED_MESSAGE)
    }
}
