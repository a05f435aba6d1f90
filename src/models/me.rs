// ============================================================================
// ME MODELS - Perfil del empleado y payloads parciales de /api/me
// ============================================================================
// Nombres en el wire: camelCase, igual que el backend
// ============================================================================

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::services::ApiError;

/// Perfil completo del empleado
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub position: String,
    pub department: Option<String>,
    pub bank_detail: BankDetail,
    pub tax: Tax,
    pub insurance: Insurance,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankDetail {
    pub bank_name: String,
    pub bank_bic: String,
    pub iban: String,
    pub id: String,
    pub bank_id: String,
    pub payment_method: String,
    pub payee: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tax {
    pub tax_id: String,
    pub no_tax_id: bool,
    pub extra_job: String,
    pub disability: String,
    pub information: String,
    pub employment_status: String,
    pub second_salary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Insurance {
    pub ssn: String,
    pub no_ssn: bool,
    pub birth_country: String,
    pub birth_name: String,
    pub health_insurance_type: String,
    pub health_insurance: String,
    pub desired_health_insurance_company: String,
    pub private_health_insurance_name: String,
    pub private_health_insurance_contribution: String,
    pub private_nursing_insurance_contribution: String,
    pub last_private_health_insurance: String,
    pub have_children: String,
    pub request_from_pension_insurance: bool,
}

// ============================================================================
// PAYLOADS PARCIALES (body del PUT)
// ============================================================================

/// Datos personales - `department` viaja como `null` si no hay valor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub position: String,
    pub department: Option<String>,
}

impl From<&Profile> for PersonalPayload {
    fn from(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
            city: profile.city.clone(),
            state: profile.state.clone(),
            zip: profile.zip.clone(),
            country: profile.country.clone(),
            position: profile.position.clone(),
            department: profile.department.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankPayload {
    pub bank_detail: BankDetail,
}

/// Impuestos + seguro en un solo PUT
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxPayload {
    pub tax: Tax,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Insurance>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePayload {
    pub insurance: Insurance,
}

/// Subconjunto arbitrario del perfil. Los campos `None` no se serializan,
/// así el body contiene exactamente lo que el llamador puso.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// `Some(None)` = el backend mandó `department: null`
    #[serde(
        default,
        deserialize_with = "present_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub department: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_detail: Option<BankDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Tax>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Insurance>,
}

fn present_nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge superficial: lo presente pisa, lo ausente se conserva.
    /// Los objetos anidados (bankDetail, tax, insurance) se reemplazan enteros.
    pub fn apply_to(self, profile: &mut Profile) {
        fn put<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        put(&mut profile.first_name, self.first_name);
        put(&mut profile.last_name, self.last_name);
        put(&mut profile.email, self.email);
        put(&mut profile.phone, self.phone);
        put(&mut profile.address, self.address);
        put(&mut profile.city, self.city);
        put(&mut profile.state, self.state);
        put(&mut profile.zip, self.zip);
        put(&mut profile.country, self.country);
        put(&mut profile.position, self.position);
        put(&mut profile.department, self.department);
        put(&mut profile.bank_detail, self.bank_detail);
        put(&mut profile.tax, self.tax);
        put(&mut profile.insurance, self.insurance);
    }
}

// ============================================================================
// RESPUESTA DEL PUT - variante decodificada en el borde HTTP
// ============================================================================

/// Forma de la respuesta a `PUT /api/me`
#[derive(Debug, Clone, PartialEq)]
pub enum MeResponse {
    /// Campos actualizados directamente en la raíz
    Fields(ProfilePatch),
    /// `{ "data": { ...campos } }`
    Envelope { data: ProfilePatch },
    /// Sin body o `null`
    Empty,
}

impl MeResponse {
    /// Decodificar el body crudo de la respuesta
    pub fn from_body(body: &str) -> Result<Self, ApiError> {
        if body.trim().is_empty() {
            return Ok(Self::Empty);
        }
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ApiError::Parse(format!("Parse error: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        let map = match value {
            Value::Null => return Ok(Self::Empty),
            Value::Object(map) => map,
            other => {
                return Err(ApiError::Parse(format!(
                    "Parse error: expected an object, got {}",
                    other
                )))
            }
        };

        match map.get("data") {
            Some(Value::Object(inner)) => {
                let data = patch_from(Value::Object(inner.clone()))?;
                Ok(Self::Envelope { data })
            }
            Some(Value::Null) => Ok(Self::Empty),
            _ => Ok(Self::Fields(patch_from(Value::Object(map))?)),
        }
    }

    /// Body de un PUT ya aceptado (2xx): lo que no se pueda leer se trata
    /// como `Empty`, así el store re-sincroniza con un GET
    pub fn from_put_body(body: &str) -> Self {
        Self::from_body(body).unwrap_or_else(|e| {
            log::warn!("⚠️ Respuesta PUT no reconocida, se re-sincroniza: {}", e);
            Self::Empty
        })
    }

    /// Campos a mergear, `None` si hay que reconciliar con un GET
    pub fn into_patch(self) -> Option<ProfilePatch> {
        match self {
            Self::Fields(patch) | Self::Envelope { data: patch } => Some(patch),
            Self::Empty => None,
        }
    }
}

fn patch_from(value: Value) -> Result<ProfilePatch, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Parse(format!("Parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_reads_camel_case_and_fills_missing_fields() {
        let profile: Profile = serde_json::from_value(json!({
            "firstName": "John",
            "department": null,
            "bankDetail": { "iban": "DE44" },
            "tax": { "noTaxId": true }
        }))
        .unwrap();

        assert_eq!(profile.first_name, "John");
        assert_eq!(profile.department, None);
        assert_eq!(profile.bank_detail.iban, "DE44");
        assert!(profile.tax.no_tax_id);
        assert_eq!(profile.insurance, Insurance::default());
    }

    #[test]
    fn personal_payload_sends_null_department() {
        let payload = PersonalPayload {
            first_name: "Jane".into(),
            ..Default::default()
        };
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["firstName"], "Jane");
        assert!(body["department"].is_null());
        assert_eq!(body.as_object().unwrap().len(), 11);
    }

    #[test]
    fn tax_payload_without_insurance_omits_the_key() {
        let body = serde_json::to_value(TaxPayload::default()).unwrap();
        assert!(body.get("tax").is_some());
        assert!(body.get("insurance").is_none());
    }

    #[test]
    fn patch_serializes_only_present_fields() {
        let patch = ProfilePatch {
            city: Some("Essen".into()),
            department: Some(None),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "city": "Essen", "department": null })
        );
    }

    #[test]
    fn patch_keeps_absent_fields() {
        let mut profile = Profile {
            first_name: "John".into(),
            last_name: "Doe".into(),
            department: Some("IT".into()),
            ..Default::default()
        };
        ProfilePatch {
            first_name: Some("X".into()),
            ..Default::default()
        }
        .apply_to(&mut profile);

        assert_eq!(profile.first_name, "X");
        assert_eq!(profile.last_name, "Doe");
        assert_eq!(profile.department.as_deref(), Some("IT"));
    }

    #[test]
    fn patch_clears_department_on_explicit_null() {
        let mut profile = Profile {
            department: Some("IT".into()),
            ..Default::default()
        };
        let patch: ProfilePatch = serde_json::from_value(json!({ "department": null })).unwrap();
        patch.apply_to(&mut profile);
        assert_eq!(profile.department, None);
    }

    #[test]
    fn response_shapes_are_told_apart() {
        let direct = MeResponse::from_body(r#"{"firstName":"X"}"#).unwrap();
        assert!(matches!(direct, MeResponse::Fields(ref p) if p.first_name.as_deref() == Some("X")));

        let envelope = MeResponse::from_body(r#"{"data":{"firstName":"X"}}"#).unwrap();
        assert!(matches!(envelope, MeResponse::Envelope { ref data } if data.first_name.as_deref() == Some("X")));

        assert_eq!(MeResponse::from_body("").unwrap(), MeResponse::Empty);
        assert_eq!(MeResponse::from_body("null").unwrap(), MeResponse::Empty);
    }

    #[test]
    fn unknown_keys_decode_to_an_empty_patch() {
        let response = MeResponse::from_body(r#"{"success":true}"#).unwrap();
        assert_eq!(response.into_patch(), Some(ProfilePatch::default()));
    }

    #[test]
    fn unreadable_put_body_falls_back_to_resync() {
        assert_eq!(MeResponse::from_put_body("OK"), MeResponse::Empty);
        assert_eq!(MeResponse::from_put_body("[1,2]"), MeResponse::Empty);
        assert!(matches!(
            MeResponse::from_put_body(r#"{"city":"Essen"}"#),
            MeResponse::Fields(ref p) if p.city.as_deref() == Some("Essen")
        ));
    }

    #[test]
    fn non_object_body_is_a_parse_error() {
        assert!(matches!(MeResponse::from_body("[1,2]"), Err(ApiError::Parse(_))));
        assert!(matches!(MeResponse::from_body("{oops"), Err(ApiError::Parse(_))));
    }
}
