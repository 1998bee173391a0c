pub mod billboard;
pub mod manifest;
pub mod ribbon;

pub use billboard::{pick, Billboard, TextStyle};
pub use manifest::SceneManifest;
pub use ribbon::{build_ribbon, RibbonMesh, RibbonVertex};
