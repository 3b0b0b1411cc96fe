use meshview_core::consts::{SELECTION_COLOR, SELECTION_STROKE_WIDTH};
use meshview_core::geometry::{Point, Size};
use meshview_core::navigation::{NavigationOutcome, PointerButton};
use meshview_core::viewport::visible_rect_in_preview;

use crate::app::MeshViewApp;
use crate::panels::background_color;

pub fn show(ui: &mut egui::Ui, app: &mut MeshViewApp) {
    let (pw, ph) = app.config.preview.size();
    let preview_size = Size::new(pw as f32, ph as f32);
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(pw as f32, ph as f32), egui::Sense::click_and_drag());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 0.0, background_color());
    if let Some(texture) = &app.view.preview_texture {
        // Drawn at its own size; it only matches the panel again after the
        // next regeneration.
        painter.image(
            texture.id(),
            egui::Rect::from_min_size(rect.min, texture.size_vec2()),
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }

    let outcome = handle_pointer(ui, &response, rect, preview_size, app);
    if outcome.needs_preview_repaint() {
        app.view.pending_offset = Some(egui::vec2(
            app.view.scroll.horizontal.value,
            app.view.scroll.vertical.value,
        ));
        ui.ctx().request_repaint();
    }

    if app.view.preview_texture.is_some() {
        draw_selection(&painter, rect, preview_size, app);
    }
}

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

/// Feed this frame's pointer events to the navigation controller.
///
/// Presses only count over the preview. Moves and releases are followed
/// anywhere while a drag is active, so positions past the edge reach the
/// controller (which leaves those axes alone).
fn handle_pointer(
    ui: &egui::Ui,
    response: &egui::Response,
    rect: egui::Rect,
    preview: Size,
    app: &mut MeshViewApp,
) -> NavigationOutcome {
    let (pos, pressed, released, moved) = ui.input(|i| {
        let buttons = [
            egui::PointerButton::Primary,
            egui::PointerButton::Secondary,
            egui::PointerButton::Middle,
        ];
        let pressed: Vec<_> = buttons
            .iter()
            .copied()
            .filter(|&b| i.pointer.button_pressed(b))
            .collect();
        let released: Vec<_> = buttons
            .iter()
            .copied()
            .filter(|&b| i.pointer.button_released(b))
            .collect();
        (i.pointer.latest_pos(), pressed, released, i.pointer.is_moving())
    });
    let Some(pos) = pos else {
        return NavigationOutcome::IGNORED;
    };
    let local = Point::new(pos.x - rect.min.x, pos.y - rect.min.y);
    let nav = &mut app.view.navigation;
    let scroll = &mut app.view.scroll;
    let mut outcome = NavigationOutcome::IGNORED;

    if response.hovered() {
        for button in pressed.into_iter().filter_map(map_button) {
            let o = nav.press(button, local, preview, scroll);
            outcome.horizontal_applied |= o.horizontal_applied;
            outcome.vertical_applied |= o.vertical_applied;
        }
    }
    if moved && nav.is_dragging() {
        let o = nav.moved(local, preview, scroll);
        outcome.horizontal_applied |= o.horizontal_applied;
        outcome.vertical_applied |= o.vertical_applied;
    }
    for button in released.into_iter().filter_map(map_button) {
        nav.release(button);
    }
    outcome
}

fn draw_selection(painter: &egui::Painter, rect: egui::Rect, preview: Size, app: &MeshViewApp) {
    let r = visible_rect_in_preview(
        &app.view.scroll,
        app.view.stage_viewport,
        app.view.stage_content,
        preview,
    );
    let [cr, cg, cb, ca] = SELECTION_COLOR;
    painter.rect_stroke(
        egui::Rect::from_min_size(rect.min + egui::vec2(r.left, r.top), egui::vec2(r.width, r.height)),
        0.0,
        egui::Stroke::new(SELECTION_STROKE_WIDTH, egui::Color32::from_rgba_unmultiplied(cr, cg, cb, ca)),
        egui::StrokeKind::Inside,
    );
}
