use std::sync::mpsc;
use std::sync::Arc;

use meshview_core::config::ViewerConfig;
use meshview_core::coordinator::View;

use crate::app::MeshViewApp;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::worker::send;

pub fn show(ctx: &egui::Context, app: &mut MeshViewApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let has_image = app.view.generation.is_some();

                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                if ui
                    .add_enabled(
                        has_image,
                        egui::Button::new("Save Image As...").shortcut_text(ctx.format_shortcut(&save_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    save_image(app, View::Stage);
                }
                if ui.add_enabled(has_image, egui::Button::new("Save Preview As...")).clicked() {
                    ui.close();
                    save_image(app, View::Preview);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(ctx, app);
                }
                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(ctx, app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let enabled = app.coordinator.as_ref().is_some_and(|c| c.is_input_enabled());
                if ui.add_enabled(enabled, egui::Button::new("Regenerate")).clicked() {
                    ui.close();
                    app.request_regeneration();
                }
                if ui.add_enabled(enabled, egui::Button::new("Reset Options")).clicked() {
                    ui.close();
                    app.config.render = Default::default();
                    app.ui_state.add_log("Render options reset to defaults".into());
                    app.request_regeneration();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S)))
            && app.view.generation.is_some()
        {
            save_image(app, View::Stage);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn save_image(app: &mut MeshViewApp, view: View) {
    let Some(coordinator) = app.coordinator.as_ref().map(Arc::clone) else {
        return;
    };
    let cmd_tx = app.cmd_tx.clone();
    let file_name = match view {
        View::Stage => "navmesh.png",
        View::Preview => "navmesh_preview.png",
    };
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(file_name)
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SaveImage {
                coordinator,
                view,
                path,
            });
        }
    });
}

fn import_config(ctx: &egui::Context, app: &mut MeshViewApp) {
    let cmd_tx = app.cmd_tx.clone();
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new().add_filter("TOML", &["toml"]).pick_file() else {
            return;
        };
        dispatch_import(crate::read_config(&path), &cmd_tx, &result_tx, &ctx);
    });
}

/// Hand a loaded config to the worker, or report why it could not be loaded.
fn dispatch_import(
    config: anyhow::Result<ViewerConfig>,
    cmd_tx: &mpsc::Sender<WorkerCommand>,
    result_tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match config {
        Ok(config) => {
            let _ = cmd_tx.send(WorkerCommand::LoadWorld { config });
        }
        Err(e) => send(
            result_tx,
            ctx,
            WorkerResult::Error {
                message: format!("{e:#}"),
            },
        ),
    }
}

fn export_config(ctx: &egui::Context, app: &mut MeshViewApp) {
    let config: ViewerConfig = app.config.clone();
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("meshview.toml")
            .save_file()
        {
            let written = toml::to_string_pretty(&config)
                .map_err(|e| e.to_string())
                .and_then(|content| std::fs::write(&path, content).map_err(|e| e.to_string()));
            let result = match written {
                Ok(()) => WorkerResult::Log {
                    message: format!("Config exported to {}", path.display()),
                },
                Err(message) => WorkerResult::Error { message },
            };
            send(&result_tx, &ctx, result);
        }
    });
}
