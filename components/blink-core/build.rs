use std::path::PathBuf;

fn env_or(name: &str, default: &str) -> String {
    println!("cargo:rerun-if-env-changed={name}");
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_flag(name: &str) -> bool {
    match env_or(name, "false").to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" | "" => false,
        other => panic!("{name} must be a boolean, got '{other}'"),
    }
}

fn main() {
    let pin: u8 = env_or("BLINK_PIN", "13").parse().expect("BLINK_PIN must be a pin number (0-255)");
    let interval_ms: u64 = env_or("BLINK_INTERVAL_MS", "3000")
        .parse()
        .expect("BLINK_INTERVAL_MS must be a number of milliseconds");
    // keep in sync with config::MAX_INTERVAL_MS
    if !(1..=86_400_000).contains(&interval_ms) {
        panic!("BLINK_INTERVAL_MS must be between 1 and 86400000 (24h), got {interval_ms}");
    }
    let active_low = env_flag("BLINK_ACTIVE_LOW");
    let halt_on_error = env_flag("BLINK_HALT_ON_ERROR");

    let out_dir_path = PathBuf::from(std::env::var_os("OUT_DIR").unwrap());
    let out_file_path = out_dir_path.join("consts.rs");

    std::fs::write(
        out_file_path,
        format!(
            "
            // generated form env vars
            pub const BLINK_PIN: u8 = {pin};
            pub const BLINK_INTERVAL_MS: u64 = {interval_ms};
            pub const BLINK_ACTIVE_LOW: bool = {active_low};
            pub const BLINK_HALT_ON_ERROR: bool = {halt_on_error};"
        ),
    )
    .unwrap();
}
