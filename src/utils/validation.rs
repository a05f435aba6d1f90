// ============================================================================
// VALIDATION - Reglas de campo para formularios
// ============================================================================
// Cada regla devuelve Ok(()) o el mensaje a mostrar. Nunca falla de otra forma.
// ============================================================================

use regex::Regex;

pub type RuleResult = Result<(), String>;

/// Regla componible (closures de min_len, combine, etc.)
pub type Rule = Box<dyn Fn(&str) -> RuleResult>;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex");
    static ref POSTAL_RE: Regex = Regex::new(r"^[A-Za-z0-9\- ]{3,10}$").expect("valid regex");
    static ref PHONE_RE: Regex = Regex::new(r"^[0-9+()\-.\s]{6,20}$").expect("valid regex");
    static ref IBAN_RE: Regex = Regex::new(r"^[A-Z]{2}[0-9A-Z]{12,32}$").expect("valid regex");
    static ref BIC_RE: Regex = Regex::new(r"^[A-Z]{4}[A-Z]{2}[A-Z0-9]{2}([A-Z0-9]{3})?$").expect("valid regex");
}

/// Convertir una regla simple (`required`, `email`...) en `Rule`
pub fn rule<F>(f: F) -> Rule
where
    F: Fn(&str) -> RuleResult + 'static,
{
    Box::new(f)
}

fn check(ok: bool, message: impl Into<String>) -> RuleResult {
    if ok {
        Ok(())
    } else {
        Err(message.into())
    }
}

pub fn required(value: &str) -> RuleResult {
    check(!value.trim().is_empty(), "Required")
}

pub fn email(value: &str) -> RuleResult {
    check(!value.is_empty() && EMAIL_RE.is_match(value), "Invalid email")
}

pub fn max_len(n: usize) -> Rule {
    Box::new(move |value: &str| {
        check(value.chars().count() <= n, format!("Max {} chars", n))
    })
}

pub fn min_len(n: usize) -> Rule {
    Box::new(move |value: &str| {
        check(
            !value.is_empty() && value.chars().count() >= n,
            format!("Min {} chars", n),
        )
    })
}

pub fn postal_lite(value: &str) -> RuleResult {
    check(value.is_empty() || POSTAL_RE.is_match(value), "Invalid zip/postcode")
}

pub fn phone_lite(value: &str) -> RuleResult {
    check(value.is_empty() || PHONE_RE.is_match(value), "Invalid phone")
}

/// IBAN con o sin espacios intermedios
pub fn iban_lite(value: &str) -> RuleResult {
    let compact = value.replace(' ', "");
    check(value.is_empty() || IBAN_RE.is_match(&compact), "Invalid IBAN")
}

pub fn bic_lite(value: &str) -> RuleResult {
    check(value.is_empty() || BIC_RE.is_match(value), "Invalid BIC")
}

/// Vacío (o solo espacios) pasa; si no, aplica `rule`
pub fn optional(inner: Rule) -> Rule {
    Box::new(move |value: &str| {
        if value.trim().is_empty() {
            Ok(())
        } else {
            inner(value)
        }
    })
}

/// Primer fallo gana
pub fn combine(rules: Vec<Rule>) -> Rule {
    Box::new(move |value: &str| {
        for r in &rules {
            r(value)?;
        }
        Ok(())
    })
}
