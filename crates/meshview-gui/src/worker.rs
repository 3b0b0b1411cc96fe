use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use meshview_core::config::ViewerConfig;
use meshview_core::coordinator::{RegenerationTicket, RenderCoordinator, View};
use meshview_core::io::save_png;
use meshview_core::world::World;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("meshview-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadWorld { config } => {
                handle_load_world(config, &tx, &ctx);
            }
            WorkerCommand::Regenerate {
                ticket,
                preview_size,
            } => {
                handle_regenerate(ticket, preview_size, &tx, &ctx);
            }
            WorkerCommand::SaveImage {
                coordinator,
                view,
                path,
            } => {
                handle_save_image(&coordinator, view, &path, &tx, &ctx);
            }
        }
    }
    tracing::debug!("Worker channel closed, exiting");
}

fn handle_load_world(config: ViewerConfig, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let start = Instant::now();
    match World::generate(&config.world) {
        Ok(world) => {
            send_log(
                tx,
                ctx,
                format!(
                    "Generated {} [{}]: {}x{}, {} scenes, {} actors",
                    world.name,
                    world.sno_id,
                    world.width,
                    world.height,
                    world.scenes.len(),
                    world.actors.len()
                ),
            );
            send(
                tx,
                ctx,
                WorkerResult::WorldReady {
                    world: Arc::new(world),
                    config,
                    elapsed: start.elapsed(),
                },
            );
        }
        Err(e) => send_error(tx, ctx, format!("World generation failed: {e}")),
    }
}

fn handle_regenerate(
    ticket: RegenerationTicket,
    preview_size: (u32, u32),
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    // The ticket is consumed here; input comes back on when it drops,
    // whatever the outcome.
    match ticket.run(preview_size) {
        Ok(info) => send(
            tx,
            ctx,
            WorkerResult::Regenerated {
                info,
                elapsed: start.elapsed(),
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Regeneration failed: {e}")),
    }
}

fn handle_save_image(
    coordinator: &RenderCoordinator,
    view: View,
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let saved = coordinator.paint(|g| match view {
        View::Stage => save_png(&g.full, path),
        View::Preview => save_png(&g.preview, path),
    });
    match saved {
        Ok(Ok(())) => send(
            tx,
            ctx,
            WorkerResult::ImageSaved {
                path: path.to_path_buf(),
            },
        ),
        Ok(Err(e)) | Err(e) => send_error(tx, ctx, format!("Failed to save image: {e}")),
    }
}
