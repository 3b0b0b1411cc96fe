pub mod menu_bar;
pub mod options;
pub mod preview;
pub mod sidebar;
pub mod stage;
pub mod status;

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

/// Stage and preview background.
pub(crate) fn background_color() -> egui::Color32 {
    let [r, g, b, a] = meshview_core::consts::BACKGROUND_COLOR;
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
