// ============================================================================
// PERSONAL FORM VIEWMODEL - Datos personales y de contacto
// ============================================================================

use crate::models::{PersonalPayload, Profile};
use crate::services::MeTransport;
use crate::state::{MeStore, ToastStore};
use crate::utils::constants::PERSONAL_SAVED_MESSAGE;
use crate::utils::validation::{
    combine, email, max_len, optional, phone_lite, postal_lite, required, rule,
};
use crate::viewmodels::form_status::{check_field, FieldErrors, FormStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalForm {
    pub form: PersonalPayload,
    pub status: FormStatus,
}

impl PersonalForm {
    /// Copia local a partir del perfil actual (vacía si aún no hay perfil)
    pub fn from_profile(profile: Option<&Profile>) -> Self {
        Self {
            form: profile.map(PersonalPayload::from).unwrap_or_default(),
            status: FormStatus::default(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let f = &self.form;
        let name = combine(vec![rule(required), max_len(50)]);
        let mandatory = rule(required);
        let mut errors = FieldErrors::new();

        check_field(&mut errors, "firstName", &f.first_name, &name);
        check_field(&mut errors, "lastName", &f.last_name, &name);
        check_field(&mut errors, "email", &f.email, &combine(vec![rule(required), rule(email)]));
        check_field(&mut errors, "phone", &f.phone, &combine(vec![rule(required), rule(phone_lite)]));
        check_field(&mut errors, "address", &f.address, &mandatory);
        check_field(&mut errors, "city", &f.city, &mandatory);
        check_field(&mut errors, "state", &f.state, &mandatory);
        check_field(&mut errors, "zip", &f.zip, &combine(vec![rule(required), rule(postal_lite)]));
        check_field(&mut errors, "country", &f.country, &mandatory);
        check_field(&mut errors, "position", &f.position, &mandatory);
        check_field(
            &mut errors,
            "department",
            f.department.as_deref().unwrap_or(""),
            &optional(max_len(100)),
        );
        errors
    }

    pub fn to_payload(&self) -> PersonalPayload {
        self.form.clone()
    }

    /// Validar y enviar. Devuelve `true` si se guardó.
    pub async fn submit<T: MeTransport>(&mut self, store: &MeStore<T>, toasts: &ToastStore) -> bool {
        self.status.reset();
        if !self.status.accept(self.validate()) {
            return false;
        }

        let loading = self.status.start_saving(toasts);
        let result = store.update_personal(&self.to_payload()).await;
        self.status.settle(result, toasts, loading, PERSONAL_SAVED_MESSAGE)
    }
}
