use anyhow::{Context, Result};
use shared::TrackerConfig;

use crate::services::logging::Logger;

/// Id of the optional `<script type="application/json">` block in index.html.
pub const CONFIG_ELEMENT_ID: &str = "tracker-config";

/// Load the page's tracker config, falling back to defaults.
pub fn load_tracker_config() -> TrackerConfig {
    match read_config_block() {
        Ok(Some(config)) => {
            Logger::info_with_component("config", &format!("Loaded tracker config: {:?}", config));
            config
        }
        Ok(None) => TrackerConfig::default(),
        Err(e) => {
            Logger::warn_with_component("config", &format!("Using default tracker config: {:#}", e));
            TrackerConfig::default()
        }
    }
}

fn read_config_block() -> Result<Option<TrackerConfig>> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .context("no document available")?;

    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };

    parse_config_text(&element.text_content().unwrap_or_default())
}

fn parse_config_text(text: &str) -> Result<Option<TrackerConfig>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let config = TrackerConfig::from_json(text).context("invalid tracker-config block")?;
    Ok(Some(config))
}
