//! Command-line flags.

use clap::{Parser, ValueEnum};
use spincube_core::settings::Settings;
use spincube_core::{MeshKind, Vec3, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MeshArg {
    Cube,
    Pole,
}

impl From<MeshArg> for MeshKind {
    fn from(m: MeshArg) -> Self {
        match m {
            MeshArg::Cube => MeshKind::Cube,
            MeshArg::Pole => MeshKind::Pole,
        }
    }
}

/// Runs the spinning-cube frame pipeline headless and logs what would be
/// uploaded to the shader each frame.
#[derive(Debug, Parser)]
#[command(name = "spincube", version)]
pub struct Cli {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 240)]
    pub frames: u32,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Initial viewport, e.g. 1280x720.
    #[arg(long, value_parser = parse_size, default_value = "800x800")]
    pub size: (u32, u32),

    /// Viewport to switch to halfway through the run.
    #[arg(long, value_parser = parse_size)]
    pub resize_to: Option<(u32, u32)>,

    #[arg(long, value_enum, default_value_t = MeshArg::Cube)]
    pub mesh: MeshArg,

    /// Vertical field of view in degrees.
    #[arg(long, default_value_t = 90.0)]
    pub fov: f32,

    #[arg(long, default_value_t = 1.0)]
    pub near: f32,

    #[arg(long, default_value_t = 10.0)]
    pub far: f32,

    /// Angular speed in degrees per second, as X,Y,Z.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub spin: Option<Vec3>,

    /// Log a summary every N frames (0 disables).
    #[arg(long, default_value_t = 60)]
    pub report_every: u32,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.camera.fov_y_deg = self.fov;
        settings.camera.z_near = self.near;
        settings.camera.z_far = self.far;
        settings.object.mesh = self.mesh.into();
        settings.viewport = Viewport::new(self.size.0, self.size.1);
        if let Some(spin) = self.spin {
            settings.animation.angular_speed_deg = spin;
        }
        settings
    }
}

/// `WxH` or `WXH`.
fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once('x')
        .or_else(|| s.split_once('X'))
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok((w, h))
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').collect();
    let &[x, y, z] = parts.as_slice() else {
        return Err(format!("expected X,Y,Z, got '{s}'"));
    };
    let f = |v: &str| {
        v.trim()
            .parse::<f32>()
            .map_err(|e| format!("bad component '{v}': {e}"))
    };
    Ok(Vec3::new(f(x)?, f(y)?, f(z)?))
}
