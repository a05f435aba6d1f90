// ============================================================================
// TAX FORM VIEWMODEL - Impuestos + seguro social (un solo PUT)
// ============================================================================
// noTaxId / noSsn → el identificador viaja como "N/A"
// ============================================================================

use crate::models::{Insurance, Profile, Tax, TaxPayload};
use crate::services::MeTransport;
use crate::state::{MeStore, ToastStore};
use crate::utils::constants::{NO_ID_SENTINEL, TAX_SAVED_MESSAGE};
use crate::utils::validation::{required, rule};
use crate::viewmodels::form_status::{check_field, FieldErrors, FormStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxForm {
    pub tax: Tax,
    pub insurance: Insurance,
    pub status: FormStatus,
}

impl TaxForm {
    pub fn from_profile(profile: Option<&Profile>) -> Self {
        Self {
            tax: profile.map(|p| p.tax.clone()).unwrap_or_default(),
            insurance: profile.map(|p| p.insurance.clone()).unwrap_or_default(),
            status: FormStatus::default(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let (t, i) = (&self.tax, &self.insurance);
        let mandatory = rule(required);
        let mut errors = FieldErrors::new();

        if !t.no_tax_id {
            check_field(&mut errors, "taxId", &t.tax_id, &mandatory);
        }
        check_field(&mut errors, "extraJob", &t.extra_job, &mandatory);
        check_field(&mut errors, "disability", &t.disability, &mandatory);
        check_field(&mut errors, "employmentStatus", &t.employment_status, &mandatory);
        check_field(&mut errors, "secondSalary", &t.second_salary, &mandatory);

        if !i.no_ssn {
            check_field(&mut errors, "ssn", &i.ssn, &mandatory);
        }
        check_field(&mut errors, "birthCountry", &i.birth_country, &mandatory);
        check_field(&mut errors, "birthName", &i.birth_name, &mandatory);
        check_field(&mut errors, "healthInsuranceType", &i.health_insurance_type, &mandatory);
        check_field(&mut errors, "healthInsurance", &i.health_insurance, &mandatory);
        check_field(&mut errors, "haveChildren", &i.have_children, &mandatory);
        errors
    }

    pub fn to_payload(&self) -> TaxPayload {
        let mut tax = self.tax.clone();
        if tax.no_tax_id {
            tax.tax_id = NO_ID_SENTINEL.to_string();
        }
        let mut insurance = self.insurance.clone();
        if insurance.no_ssn {
            insurance.ssn = NO_ID_SENTINEL.to_string();
        }
        TaxPayload {
            tax,
            insurance: Some(insurance),
        }
    }

    pub async fn submit<T: MeTransport>(&mut self, store: &MeStore<T>, toasts: &ToastStore) -> bool {
        self.status.reset();
        if !self.status.accept(self.validate()) {
            return false;
        }

        let loading = self.status.start_saving(toasts);
        let result = store.update_tax(&self.to_payload()).await;
        self.status.settle(result, toasts, loading, TAX_SAVED_MESSAGE)
    }
}
