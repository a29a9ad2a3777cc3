//! Frame loop.
//!
//! A recurring timer fires `frame_count` times a second and runs exactly one
//! animation step. Steps never overlap and nothing else touches the scene
//! buffers, so no locking is needed.
//!
//! # Lifecycle
//!
//! Each step:
//! 1. Advance the wave phase
//! 2. Truncate the buffers to the static boundary
//! 3. Re-append the skybox and a fresh water surface
//! 4. Hand the buffers, draw ranges and camera pose to the [`DrawSurface`]
//! 5. Advance the camera; after `regeneration_steps` steps regenerate the
//!    whole world, which moves the static boundary before the next step reads it
//!

use instant::{Duration, Instant};

use crate::{
    camera::CameraPose,
    config::SceneConfig,
    context::Context,
    render::{DrawSurface, Frame},
};

/// What one step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub step: u64,
    pub vertices: usize,
    pub water_vertices: usize,
    /// The world was regenerated at the end of this step.
    pub regenerated: bool,
}

/// Owns the scene and advances it one step at a time.
#[derive(Debug)]
pub struct FrameLoop {
    ctx: Context,
    step: u64,
    camera_counter: u32,
}

impl FrameLoop {
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            step: 0,
            camera_counter: 0,
        }
    }

    /// Run one animation step and draw it into `surface`.
    pub fn step<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> anyhow::Result<StepReport> {
        let started = Instant::now();
        self.ctx.advance_wave();
        self.ctx.rebuild_dynamic()?;

        let frame = Frame {
            geometry: self.ctx.geometry(),
            ranges: self.ctx.draw_ranges(),
            camera: self.camera(),
            step: self.step,
        };
        surface.draw(&frame)?;

        let mut report = StepReport {
            step: self.step,
            vertices: self.ctx.geometry().len(),
            water_vertices: self.ctx.water_vertices(),
            regenerated: false,
        };

        self.step += 1;
        self.camera_counter += 1;
        if self.camera_counter >= self.ctx.config().animation.regeneration_steps {
            self.ctx.regenerate_world()?;
            self.camera_counter = 0;
            report.regenerated = true;
        }
        log::trace!("step {} took {:?}", report.step, started.elapsed());
        Ok(report)
    }

    /// Current camera pose on the orbit.
    pub fn camera(&self) -> CameraPose {
        CameraPose::orbit(self.ctx.config(), self.ctx.land(), self.camera_counter)
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Mutable access between steps, e.g. to change the sea level.
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    pub fn step_interval(&self) -> Duration {
        self.ctx.config().step_interval()
    }
}

/// Drive `frame_loop` on a tokio interval until `max_steps` steps have run,
/// or forever when `max_steps` is `None`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn run_loop<S: DrawSurface + ?Sized>(
    frame_loop: &mut FrameLoop,
    surface: &mut S,
    max_steps: Option<u64>,
) -> anyhow::Result<()> {
    let mut interval = tokio::time::interval(frame_loop.step_interval());
    // A slow step pushes the schedule back instead of bursting to catch up.
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    while max_steps.is_none_or(|max| frame_loop.steps() < max) {
        interval.tick().await;
        let report = match frame_loop.step(surface) {
            Ok(report) => report,
            Err(e) => {
                log::error!("step {} failed: {:#}", frame_loop.steps(), e);
                return Err(e);
            }
        };
        if report.regenerated {
            log::info!("step {}: new world", report.step);
        }
    }
    Ok(())
}

/// Build a scene from `config` and animate it into `surface`.
#[cfg(not(target_arch = "wasm32"))]
pub fn run<S: DrawSurface + ?Sized>(
    config: SceneConfig,
    surface: &mut S,
    max_steps: Option<u64>,
) -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let ctx = Context::new(config)?;
    log::info!(
        "scene ready: {} static vertices, stepping every {:?}",
        ctx.static_len(),
        ctx.config().step_interval()
    );
    let mut frame_loop = FrameLoop::new(ctx);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(run_loop(&mut frame_loop, surface, max_steps))
}
