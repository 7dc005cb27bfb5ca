use chrono::NaiveTime;
use js_sys::Date;

/// Current local time of day from the browser clock.
pub fn current_time_of_day() -> NaiveTime {
    let now = Date::new_0();
    time_from_parts(now.get_hours(), now.get_minutes(), now.get_seconds())
}

fn time_from_parts(hours: u32, minutes: u32, seconds: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hours, minutes, seconds).unwrap_or_default()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_time_from_parts() {
        assert_eq!(time_from_parts(9, 30, 0), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(time_from_parts(25, 0, 0), NaiveTime::default());
    }
}
