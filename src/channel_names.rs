/// Centralized channel naming utilities
///
/// Channels are stored in the order they appear in the log: the three
/// accelerometer axes followed by the three gyroscope axes.
use crate::constants::CHANNEL_COUNT;

pub const CHANNEL_AX: usize = 0;
pub const CHANNEL_AY: usize = 1;
pub const CHANNEL_AZ: usize = 2;
pub const CHANNEL_GX: usize = 3;
pub const CHANNEL_GY: usize = 4;
pub const CHANNEL_GZ: usize = 5;

/// Get all channel names as a static array
pub const CHANNEL_NAMES: [&str; CHANNEL_COUNT] = ["ax", "ay", "az", "gx", "gy", "gz"];

/// Get the channel name for a given index
///
/// # Panics
/// Panics if index is greater than 5
pub fn channel_name(index: usize) -> &'static str {
    match CHANNEL_NAMES.get(index) {
        Some(name) => name,
        None => panic!(
            "Invalid channel index: {}. Expected 0..{} (ax, ay, az, gx, gy, gz)",
            index, CHANNEL_COUNT
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_name() {
        assert_eq!(channel_name(CHANNEL_AX), "ax");
        assert_eq!(channel_name(CHANNEL_AY), "ay");
        assert_eq!(channel_name(CHANNEL_AZ), "az");
        assert_eq!(channel_name(CHANNEL_GX), "gx");
        assert_eq!(channel_name(CHANNEL_GY), "gy");
        assert_eq!(channel_name(CHANNEL_GZ), "gz");
    }

    #[test]
    #[should_panic(expected = "Invalid channel index")]
    fn test_channel_name_panic() {
        channel_name(6);
    }
}
