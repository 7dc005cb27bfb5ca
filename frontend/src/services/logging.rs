use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Browser console logger. Backs the `log` facade for the whole app and keeps
/// the component-tagged helpers used by the UI code.
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install as the global logger. Safe to call more than once.
    pub fn init() {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(default_level());
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!(target: component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!(target: component, "{}", message);
    }
}

fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{}] {}: {}", level, target, message)
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let value = JsValue::from_str(&line);
        match record.level() {
            Level::Error => console::error_1(&value),
            Level::Warn => console::warn_1(&value),
            Level::Info => console::info_1(&value),
            Level::Debug | Level::Trace => console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_line() {
        assert_eq!(
            format_line(Level::Info, "meal-list", "Removed meal"),
            "[INFO] meal-list: Removed meal"
        );
    }

    #[wasm_bindgen_test]
    fn test_init_twice_is_harmless() {
        Logger::init();
        Logger::init();
        Logger::info_with_component("logging-test", "still logging");
    }
}
