use meshview_core::geometry::Size;
use meshview_core::navigation::NavigationController;
use meshview_core::viewport::ScrollState;
use meshview_core::world::WorldSummary;

/// Textures and scroll geometry shared by the stage and the preview.
#[derive(Default)]
pub struct ViewState {
    pub stage_texture: Option<egui::TextureHandle>,
    pub preview_texture: Option<egui::TextureHandle>,
    /// Generation the textures were uploaded from.
    pub generation: Option<u64>,
    pub scroll: ScrollState,
    /// Offset the stage scroll area must jump to on its next frame.
    pub pending_offset: Option<egui::Vec2>,
    pub stage_viewport: Size,
    pub stage_content: Size,
    pub navigation: NavigationController,
}

pub struct UIState {
    pub log_messages: Vec<String>,
    pub world_summary: Option<WorldSummary>,
    pub loading_world: bool,
    pub regenerating: bool,
    pub last_render_ms: Option<f64>,
    pub show_about: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            log_messages: Vec::new(),
            world_summary: None,
            loading_world: true,
            regenerating: false,
            last_render_ms: None,
            show_about: false,
        }
    }
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn busy_label(&self) -> Option<&'static str> {
        if self.loading_world {
            Some("Generating world")
        } else if self.regenerating {
            Some("Rendering navmesh")
        } else {
            None
        }
    }
}
