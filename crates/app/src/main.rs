//! Entry point for spincube.
//! Drives the frame pipeline headless: no window, the would-be shader
//! uniforms are logged instead of uploaded.

mod cli;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use spincube_core::camera::project_to_ndc;
use spincube_core::{FrameClock, FrameOutput, MeshData, Scene, Vec3, Viewport};

use crate::cli::Cli;

/// Resize handler at the window boundary: the core never sees a zero side.
fn on_resize(scene: &mut Scene, width: u32, height: u32) -> Viewport {
    if let Err(e) = Viewport::checked(width, height) {
        log::warn!("{e}; clamping");
    }
    let vp = Viewport::clamped(width, height);
    log::info!("Resized: {}x{}", vp.width, vp.height);
    scene.resize(vp.width, vp.height);
    vp
}

/// NDC bounding box of the mesh this frame, if every vertex is in front of
/// the eye plane.
fn ndc_bounds(out: &FrameOutput, mesh: &MeshData) -> Option<(Vec3, Vec3)> {
    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);
    for v in &mesh.vertices {
        let p = project_to_ndc(out.mvp, Vec3::from_array(v.pos))?;
        min = min.min(p);
        max = max.max(p);
    }
    Some((min, max))
}

/// Frame on which `--resize-to` applies; frame 1 for single-frame runs.
fn midpoint_frame(frames: u32) -> u32 {
    frames.div_ceil(2).max(1)
}

/// Simulated timestamp of `frame`, failing instead of overflowing.
fn frame_time(start: Instant, step: Duration, frame: u32) -> Result<Instant> {
    step.checked_mul(frame)
        .and_then(|offset| start.checked_add(offset))
        .with_context(|| format!("simulated time overflows at frame {frame}"))
}

/// Returns the viewport in effect after the last frame.
fn run(cli: &Cli) -> Result<Viewport> {
    let settings = cli.settings();
    settings.validate().context("invalid camera or viewport settings")?;
    anyhow::ensure!(cli.fps > 0.0, "--fps must be positive, got {}", cli.fps);

    let start = Instant::now();
    let step = Duration::try_from_secs_f32(1.0 / cli.fps)
        .with_context(|| format!("--fps {} is too small", cli.fps))?;
    let mut scene = Scene::with_clock(&settings, FrameClock::starting_at(start));
    let mut viewport = settings.viewport;
    let mesh = scene.object.mesh.build();
    log::info!(
        "Mesh {:?}: {} vertices, {} indices",
        scene.object.mesh,
        mesh.vertices.len(),
        mesh.indices.len()
    );

    let resize_frame = midpoint_frame(cli.frames);
    let mut last = None;
    for frame in 1..=cli.frames {
        if frame == resize_frame {
            if let Some((w, h)) = cli.resize_to {
                viewport = on_resize(&mut scene, w, h);
            }
        }

        let now = frame_time(start, step, frame)?;
        let out = scene.advance_at(now, viewport.width, viewport.height);
        let uniforms = out.uniforms();
        log::debug!(
            "frame {frame}: t={:.3}s dt={:.4}s mvp={:?}",
            out.time,
            out.delta,
            uniforms.mvp
        );

        if cli.report_every != 0 && frame % cli.report_every == 0 {
            match ndc_bounds(&out, &mesh) {
                Some((min, max)) => log::info!(
                    "frame {frame}: t={:.2}s rot={:?} ndc min={:.3?} max={:.3?}",
                    out.time,
                    scene.object.transform.rotation(),
                    min,
                    max
                ),
                None => log::warn!("frame {frame}: mesh crosses the eye plane"),
            }
        }
        last = Some(out);
    }

    if let Some(out) = last {
        log::info!(
            "Finished {} frames, {:.2}s simulated, uniform block {} bytes",
            cli.frames,
            out.time,
            out.uniforms().as_bytes().len()
        );
    }
    Ok(viewport)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!(
        "Starting spincube. frames={}, fps={}, size={}x{}, mesh={:?}, fov={}, near={}, far={}",
        cli.frames,
        cli.fps,
        cli.size.0,
        cli.size.1,
        cli.mesh,
        cli.fov,
        cli.near,
        cli.far
    );

    run(&cli)?;

    log::info!("Graceful shutdown. Bye!");
    Ok(())
}
