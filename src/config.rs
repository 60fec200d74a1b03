use confique::Config as _;
use std::sync::OnceLock;

#[derive(confique::Config)]
pub struct Config {
    /// Refuse statement categories without a dedicated tokeniser instead of
    /// falling back to the USE scanner.
    #[config(env = "QLEX_STRICT_DISPATCH", default = false)]
    pub strict_dispatch: bool,
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::builder()
            .env()
            .load()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}
