pub mod airplane;
pub mod camera_rig;
pub mod follower;
pub mod path;
pub mod progress;

pub use airplane::{bank_angle_degrees, clamp_bank, update_airplane, AirplaneState};
pub use camera_rig::{look_ahead_parameter, update_camera_rig, CameraRigState, RigSample};
pub use follower::{FrameTransforms, PathFollower};
pub use path::{flight_path, FLIGHT_PATH};
pub use progress::{progress, ScrollSource};
