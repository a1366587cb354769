/// Render seconds as `MM:SS.mmm`, rounded to the nearest millisecond.
///
/// Undefined, negative and non-finite inputs render as an empty string.
/// Minutes are padded to two digits but never truncated.
pub fn format_time(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds.filter(|s| s.is_finite() && *s >= 0.0) else {
        return String::new();
    };
    let total_ms = (seconds * 1000.0).round() as u64;
    let minutes = total_ms / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{minutes:02}:{secs:02}.{millis:03}")
}

/// Parse `mm:ss.mmm` (integer minutes, real seconds) into seconds.
///
/// Returns `None` for empty input, a part count other than two, unparseable
/// parts, a negative part, or a non-finite total.
pub fn parse_time(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (minutes, seconds) = trimmed.split_once(':')?;
    if seconds.contains(':') {
        return None;
    }
    let minutes: i64 = minutes.trim().parse().ok()?;
    let seconds: f64 = seconds.trim().parse().ok()?;
    if minutes < 0 || !(seconds >= 0.0) {
        return None;
    }
    let total = minutes as f64 * 60.0 + seconds;
    total.is_finite().then_some(total)
}
