//! Review Helpers
//!
//! Pure helpers for the review view: timestamp capture/formatting and
//! share-link computation.

/// Round a captured player position to two decimals, clamped at zero.
/// Matches the precision the backend stores and the list displays.
pub fn round_timestamp(seconds: f64) -> f64 {
    let clamped = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    (clamped * 100.0).round() / 100.0
}

/// Display form of a comment timestamp, e.g. `12.34s`.
pub fn format_timestamp(seconds: f64) -> String {
    format!("{:.2}s", seconds)
}

/// Public share link for a video. Valid only while the video is public;
/// callers clear it when privacy flips back.
pub fn share_url(origin: &str, video_id: &str) -> String {
    format!("{}/#/video/{}", origin.trim_end_matches('/'), video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_timestamp(12.3449), 12.34);
        assert_eq!(round_timestamp(12.345), 12.35);
        assert_eq!(round_timestamp(42.5), 42.5);
        assert_eq!(round_timestamp(0.0), 0.0);
    }

    #[test]
    fn clamps_bad_positions_to_zero() {
        assert_eq!(round_timestamp(-1.5), 0.0);
        assert_eq!(round_timestamp(f64::NAN), 0.0);
    }

    #[test]
    fn formats_with_seconds_suffix() {
        assert_eq!(format_timestamp(12.34), "12.34s");
        assert_eq!(format_timestamp(7.0), "7.00s");
    }

    #[test]
    fn share_url_embeds_the_video_id() {
        let link = share_url("https://flame.example", "v1");
        assert!(link.contains("v1"));
        assert_eq!(link, "https://flame.example/#/video/v1");
        // trailing slash on the origin does not double up
        assert_eq!(share_url("https://flame.example/", "v1"), link);
    }
}
