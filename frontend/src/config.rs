const DEFAULT_PURCHASE_URL: &str = "https://maxkael.gumroad.com/l/TheAiaudit";

/// Outbound purchase destination. Can be swapped at build time with
/// `PURCHASE_URL=... trunk build`.
pub fn get_purchase_url() -> &'static str {
    option_env!("PURCHASE_URL").unwrap_or(DEFAULT_PURCHASE_URL)
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
