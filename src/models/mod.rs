pub mod me;
pub mod toast;

pub use me::{
    BankDetail, BankPayload, Insurance, InsurancePayload, MeResponse, PersonalPayload, Profile,
    ProfilePatch, Tax, TaxPayload,
};
pub use toast::{Toast, ToastId, ToastKind, ToastTimeout, ToastUpdate};
