pub mod demo_feed;
pub mod status_prefs;

/// Interprets an environment flag: "true" (any case) or "1" enable it.
fn parse_flag(val: &str) -> bool {
    val.eq_ignore_ascii_case("true") || val == "1"
}
