use std::sync::mpsc;
use std::sync::Arc;

use meshview_core::config::ViewerConfig;
use meshview_core::coordinator::{RenderCoordinator, View};
use meshview_core::error::MeshViewError;
use meshview_core::render::DebugNavMesh;
use meshview_core::world::World;

use crate::convert::rgba_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{UIState, ViewState};
use crate::worker;

pub fn window_title(name: &str, sno_id: u32) -> String {
    format!("World Visualizer - {name} [{sno_id}]")
}

pub struct MeshViewApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: ViewerConfig,
    pub world: Option<Arc<World>>,
    pub coordinator: Option<Arc<RenderCoordinator>>,
    pub view: ViewState,
    pub ui_state: UIState,
}

impl MeshViewApp {
    pub fn new(ctx: &egui::Context, config: ViewerConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());
        let _ = cmd_tx.send(WorkerCommand::LoadWorld {
            config: config.clone(),
        });

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            config,
            world: None,
            coordinator: None,
            view: ViewState::default(),
            ui_state: UIState::default(),
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::WorldReady {
                    world,
                    config,
                    elapsed,
                } => {
                    self.ui_state.loading_world = false;
                    self.ui_state.add_log(format!("World ready in {}", format_duration(elapsed)));
                    self.install_world(ctx, world, config);
                }
                WorkerResult::Regenerated { info, elapsed } => {
                    self.ui_state.regenerating = false;
                    self.ui_state.last_render_ms = Some(elapsed.as_secs_f64() * 1000.0);
                    self.ui_state.add_log(format!(
                        "Generation #{}: {}x{} in {}",
                        info.id,
                        info.full_size.0,
                        info.full_size.1,
                        format_duration(elapsed)
                    ));
                }
                WorkerResult::ImageSaved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::Error { message } => {
                    self.ui_state.loading_world = false;
                    self.ui_state.regenerating = false;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Replace the current world: the old coordinator is closed before the
    /// new one renders anything.
    fn install_world(&mut self, ctx: &egui::Context, world: Arc<World>, config: ViewerConfig) {
        self.close_viewport();

        ctx.send_viewport_cmd(egui::ViewportCommand::Title(window_title(
            &world.name,
            world.sno_id,
        )));

        let repaint_ctx = ctx.clone();
        let renderer = Arc::new(DebugNavMesh::new(Arc::clone(&world)));
        let coordinator = RenderCoordinator::new(renderer, move |view: View| {
            tracing::trace!(?view, "Repaint requested");
            repaint_ctx.request_repaint();
        });

        self.ui_state.world_summary = Some(world.summary());
        self.world = Some(world);
        self.coordinator = Some(Arc::new(coordinator));
        self.config = config;
        self.view = ViewState::default();
        self.request_regeneration();
    }

    /// Begin a regeneration with the current options and hand it to the worker.
    ///
    /// Rejected requests (one already in flight) are dropped; the checkbox
    /// that triggered them is disabled anyway.
    pub fn request_regeneration(&mut self) {
        let Some(coordinator) = &self.coordinator else {
            return;
        };
        match coordinator.begin_regeneration(self.config.render) {
            Ok(ticket) => {
                self.ui_state.regenerating = true;
                let _ = self.cmd_tx.send(WorkerCommand::Regenerate {
                    ticket,
                    preview_size: self.config.preview.size(),
                });
            }
            Err(MeshViewError::RegenerationInProgress) => {
                tracing::debug!("Regeneration already in flight; request ignored");
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Re-upload both textures when a new generation has been installed.
    fn sync_textures(&mut self, ctx: &egui::Context) {
        let Some(coordinator) = &self.coordinator else {
            return;
        };
        let current = coordinator.current_generation().map(|g| g.id);
        if current.is_none() || current == self.view.generation {
            return;
        }

        // Both images are read under one lock so they always come from the
        // same generation.
        let images = coordinator.paint(|g| {
            (
                g.id,
                rgba_to_color_image(&g.full),
                rgba_to_color_image(&g.preview),
            )
        });
        match images {
            Ok((id, full, preview)) => {
                self.view.stage_texture =
                    Some(ctx.load_texture("stage", full, egui::TextureOptions::NEAREST));
                self.view.preview_texture =
                    Some(ctx.load_texture("preview", preview, egui::TextureOptions::LINEAR));
                self.view.generation = Some(id);
            }
            Err(MeshViewError::NoImage) => {}
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    fn close_viewport(&mut self) {
        if let Some(coordinator) = self.coordinator.take() {
            coordinator.close();
        }
        self.view.stage_texture = None;
        self.view.preview_texture = None;
        self.world = None;
    }
}

impl eframe::App for MeshViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.sync_textures(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::sidebar::show(ctx, self);
        panels::stage::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About MeshView")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("MeshView");
                        ui.label("Navigation mesh debug viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

impl Drop for MeshViewApp {
    fn drop(&mut self) {
        self.close_viewport();
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else {
        format!("{secs:.1}s")
    }
}
