//! Duration formatting for display

/// Render whole seconds as `HH:MM:SS`; hours grow past two digits as needed
pub fn format_duration(seconds: u64) -> String {
    let (minutes, secs) = (seconds / 60, seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_each_component() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(59), "00:00:59");
        assert_eq!(format_duration(3_661), "01:01:01");
    }

    #[test]
    fn hours_are_not_wrapped() {
        assert_eq!(format_duration(100 * 3600 + 5), "100:00:05");
    }
}
