use meshview_core::geometry::{Point, Size};
use meshview_core::viewport::ScrollState;

use crate::app::MeshViewApp;
use crate::panels::background_color;

pub fn show(ctx: &egui::Context, app: &mut MeshViewApp) {
    let frame = egui::Frame::central_panel(&ctx.style()).fill(background_color());
    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let Some(texture) = &app.view.stage_texture else {
            show_placeholder(ui, app.ui_state.busy_label());
            return;
        };
        let texture_id = texture.id();
        let image_size = texture.size_vec2();

        let mut area = egui::ScrollArea::both()
            .id_salt("stage")
            .auto_shrink([false, false]);
        if let Some(offset) = app.view.pending_offset.take() {
            area = area.scroll_offset(offset);
        }
        let output = area.show(ui, |ui| {
            ui.add(egui::Image::new((texture_id, image_size)));
        });

        // Read the scroll bars back so the preview indicator follows
        // wheel and scrollbar scrolling too.
        let viewport = output.inner_rect.size();
        let content = output.content_size;
        let offset = output.state.offset;
        let stage_viewport = Size::new(viewport.x, viewport.y);
        let stage_content = Size::new(content.x, content.y);
        let scroll = ScrollState::for_stage(
            Point::new(offset.x, offset.y),
            stage_viewport,
            stage_content,
        );

        if scroll != app.view.scroll
            || stage_viewport != app.view.stage_viewport
            || stage_content != app.view.stage_content
        {
            ui.ctx().request_repaint();
        }
        app.view.scroll = scroll;
        app.view.stage_viewport = stage_viewport;
        app.view.stage_content = stage_content;
    });
}

fn show_placeholder(ui: &mut egui::Ui, busy: Option<&str>) {
    ui.centered_and_justified(|ui| {
        let text = busy.map_or_else(|| "No image".to_string(), |s| format!("{s}..."));
        ui.label(egui::RichText::new(text).size(18.0).color(egui::Color32::from_gray(100)));
    });
}
