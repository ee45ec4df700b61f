//! Core types: math re-exports, Transform, Camera, frame clock and the
//! per-frame MVP pipeline. Nothing here touches a window or a GPU.
//!
//! Conventions used throughout: column vectors (`p' = M * p`), left-handed
//! space with the camera looking down +Z, clip depth in `[-1, 1]`, and
//! `MVP = P * V * M`.

pub use glam::{Mat4, Vec3, Vec4, vec3};

pub mod camera;
pub mod clock;
pub mod error;
pub mod mesh;
pub mod scene;
pub mod settings;
pub mod transform;
pub mod uniform;
pub mod viewport;

pub use camera::Camera;
pub use clock::FrameClock;
pub use error::{CoreError, CoreResult};
pub use mesh::{MeshData, MeshKind, Vertex};
pub use scene::{FrameOutput, Scene};
pub use settings::Settings;
pub use transform::Transform;
pub use uniform::FrameUniforms;
pub use viewport::Viewport;
