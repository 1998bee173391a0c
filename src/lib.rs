pub mod cli;
pub mod config;
pub mod frame;
pub mod math;
pub mod rig;
pub mod scene;
pub mod scroll;
pub mod trace;

pub use config::{FlythroughConfig, RigConfig, ScrollConfig};
pub use math::CatmullRomCurve;
pub use rig::{FrameTransforms, PathFollower};
pub use scroll::ScrollControls;
