use meshview_core::render::RenderToggle;

use crate::app::MeshViewApp;
use crate::panels::section_header;

pub fn show(ui: &mut egui::Ui, app: &mut MeshViewApp) {
    let enabled = app
        .coordinator
        .as_ref()
        .is_some_and(|c| c.is_input_enabled());
    let status = app.ui_state.busy_label().map(|s| format!("{s}..."));
    section_header(ui, "Render Options", status.as_deref());
    ui.add_space(4.0);

    let mut changed = false;
    ui.add_enabled_ui(enabled, |ui| {
        for &toggle in RenderToggle::ALL {
            let mut value = app.config.render.get(toggle);
            if ui.checkbox(&mut value, toggle.to_string()).changed() {
                app.config.render.set(toggle, value);
                changed = true;
            }
        }
    });

    if changed {
        app.request_regeneration();
    }
}
