//! Loading spinner shown while a send is in flight

use std::time::Duration;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_MILLIS: u128 = 80;

pub fn frame(elapsed: Duration) -> &'static str {
    let idx = (elapsed.as_millis() / FRAME_MILLIS) as usize % FRAMES.len();
    FRAMES[idx]
}
