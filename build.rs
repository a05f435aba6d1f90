use std::env;
use std::fs;
use std::path::Path;

/// Claves que AppConfig::from_env() lee con option_env!
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "ME_ENDPOINT",
    "ENABLE_LOGGING",
    "RECONCILE_POLICY",
    "RECORD_UPDATE_ERRORS",
    "TOAST_DEFAULT_TIMEOUT_MS",
    "TOAST_ERROR_TIMEOUT_MS",
];

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");

    // .env es opcional: sin él, valores por defecto
    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        return;
    };
    println!("cargo:rerun-if-changed=.env");

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=.env: clave desconocida '{}' ignorada", key);
            continue;
        }
        // El entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
