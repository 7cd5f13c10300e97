//! Testing utilities and harness for the slideover widget kit.

mod recording;
mod robot;

pub use recording::{ListenerEvent, RecordingListener};
pub use robot::{PanelRobot, FRAME_STEP_NANOS};
