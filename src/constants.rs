use std::time::Duration;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// Wall-clock interval between gravity ticks.
pub const DROP_INTERVAL: Duration = Duration::from_millis(500);

/// Points awarded per cleared row, flat per row.
pub const SCORE_PER_LINE: u32 = 100;

/// How long the input poll blocks each frame (~60 FPS).
pub const FRAME_POLL: Duration = Duration::from_millis(16);
