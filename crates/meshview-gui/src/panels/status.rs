use crate::app::MeshViewApp;

pub fn show(ctx: &egui::Context, app: &mut MeshViewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        if let Some(label) = app.ui_state.busy_label() {
            ui.add(egui::ProgressBar::new(0.0).text(format!("{label}...")).animate(true));
        } else {
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area: fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .id_salt("log")
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(id) = app.view.generation {
                ui.label(format!("Generation #{id}"));
                ui.separator();
            }
            if let Some(ms) = app.ui_state.last_render_ms {
                ui.label(format!("Render: {ms:.0}ms"));
                ui.separator();
            }
            let content = app.view.stage_content;
            ui.label(format!("Stage: {:.0}x{:.0}", content.width, content.height));
            ui.separator();
            ui.label(format!(
                "Scroll: {:.0}, {:.0}",
                app.view.scroll.horizontal.value, app.view.scroll.vertical.value
            ));
            if app.view.navigation.is_dragging() {
                ui.separator();
                ui.label("Dragging");
            }
        });

        ui.add_space(2.0);
    });
}
