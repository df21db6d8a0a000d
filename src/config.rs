//! Compile-time tuning constants.

/// Silence from the GameController after which it counts as lost, in ms.
pub const GAME_CONTROLLER_TIMEOUT_MS: u64 = 2000;

/// The ball counts as seen if it was seen less than this many ms ago.
pub const BALL_SEEN_TIMEOUT_MS: u64 = 250;

/// A field feature counts as seen if it was seen less than this many ms ago.
pub const FEATURE_SEEN_TIMEOUT_MS: u64 = 250;

/// A whistle counts as heard if it was detected less than this many ms ago.
pub const WHISTLE_TIMEOUT_MS: u64 = 200;

/// Cycles the charging comet stays on one head ring position.
pub const CHARGING_LIGHT_SLOWNESS: u16 = 5;

/// Milliseconds each frame of the out-of-packets animation is shown.
pub const OUT_OF_PACKETS_LIGHT_SLOWNESS_MS: u64 = 200;

/// Number of frames in the out-of-packets animation.
pub const OUT_OF_PACKETS_FRAMES: u64 = 3;

/// Battery fraction represented by one ear position.
pub const BATTERY_BUCKET: f32 = 0.1;

/// Highest battery bucket; bucket `n` lights `n + 1` ear positions.
pub const MAX_BATTERY_BUCKET: usize = 9;

/// Most teammates the left ear can show.
pub const MAX_SHOWN_TEAMMATES: usize = 4;
