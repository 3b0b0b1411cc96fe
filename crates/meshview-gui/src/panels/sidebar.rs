use crate::app::MeshViewApp;
use crate::panels::{options, preview, section_header};

const SIDEBAR_MARGIN: f32 = 16.0;

pub fn show(ctx: &egui::Context, app: &mut MeshViewApp) {
    let width = app.config.preview.width as f32 + SIDEBAR_MARGIN;
    egui::SidePanel::left("sidebar")
        .exact_width(width)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            section_header(ui, "Overview", None);
            ui.add_space(4.0);
            preview::show(ui, app);
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                options::show(ui, app);
                ui.separator();
                world_section(ui, app);
            });
        });
}

fn world_section(ui: &mut egui::Ui, app: &MeshViewApp) {
    let status = app
        .world
        .as_ref()
        .map(|w| format!("{}x{}", w.width, w.height));
    section_header(ui, "World", status.as_deref());
    ui.add_space(4.0);

    let Some(world) = &app.world else {
        ui.small("No world loaded");
        return;
    };
    ui.label(format!("{} [{}]", world.name, world.sno_id));
    if let Some(s) = &app.ui_state.world_summary {
        ui.small(format!("Scenes: {} master, {} sub", s.master_scenes, s.sub_scenes));
        ui.small(format!(
            "Cells: {} walkable, {} unwalkable",
            s.walkable_cells, s.unwalkable_cells
        ));
        ui.small(format!(
            "Actors: {} monsters, {} NPCs, {} players",
            s.monsters, s.npcs, s.players
        ));
    }
    ui.small(format!("Seed: {:#x}", app.config.world.seed));
}
