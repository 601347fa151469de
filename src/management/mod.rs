mod playback;
mod session;

pub use playback::current_snapshot;
pub use playback::cycle_repeat;
pub use playback::send_command;
pub use playback::toggle_play;
pub use playback::toggle_shuffle;
pub use session::SessionManager;
