mod canvas;
pub mod navmesh;

pub use navmesh::DebugNavMesh;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The set of layers drawn into the diagnostic image.
///
/// A regeneration always takes a full copy of this value; there is no
/// partial update path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub draw_master_scenes: bool,
    pub draw_sub_scenes: bool,
    pub draw_walkable_cells: bool,
    pub draw_unwalkable_cells: bool,
    pub draw_monsters: bool,
    pub draw_npcs: bool,
    pub draw_players: bool,
    pub print_labels: bool,
    pub fill_cells: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            draw_master_scenes: true,
            draw_sub_scenes: false,
            draw_walkable_cells: true,
            draw_unwalkable_cells: false,
            draw_monsters: true,
            draw_npcs: true,
            draw_players: true,
            print_labels: false,
            fill_cells: true,
        }
    }
}

/// One named render option, in the order the UI lists them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderToggle {
    MasterScenes,
    SubScenes,
    WalkableCells,
    UnwalkableCells,
    Monsters,
    Npcs,
    Players,
    PrintLabels,
    FillCells,
}

impl RenderToggle {
    pub const ALL: &[Self] = &[
        Self::MasterScenes,
        Self::SubScenes,
        Self::WalkableCells,
        Self::UnwalkableCells,
        Self::Monsters,
        Self::Npcs,
        Self::Players,
        Self::PrintLabels,
        Self::FillCells,
    ];
}

impl std::fmt::Display for RenderToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MasterScenes => write!(f, "Master Scenes"),
            Self::SubScenes => write!(f, "Sub Scenes"),
            Self::WalkableCells => write!(f, "Walkable Cells"),
            Self::UnwalkableCells => write!(f, "Unwalkable Cells"),
            Self::Monsters => write!(f, "Monsters"),
            Self::Npcs => write!(f, "NPCs"),
            Self::Players => write!(f, "Players"),
            Self::PrintLabels => write!(f, "Print Labels"),
            Self::FillCells => write!(f, "Fill Cells"),
        }
    }
}

impl RenderOptions {
    pub fn get(&self, toggle: RenderToggle) -> bool {
        match toggle {
            RenderToggle::MasterScenes => self.draw_master_scenes,
            RenderToggle::SubScenes => self.draw_sub_scenes,
            RenderToggle::WalkableCells => self.draw_walkable_cells,
            RenderToggle::UnwalkableCells => self.draw_unwalkable_cells,
            RenderToggle::Monsters => self.draw_monsters,
            RenderToggle::Npcs => self.draw_npcs,
            RenderToggle::Players => self.draw_players,
            RenderToggle::PrintLabels => self.print_labels,
            RenderToggle::FillCells => self.fill_cells,
        }
    }

    /// Return a copy with `toggle` set to `value`.
    pub fn with(mut self, toggle: RenderToggle, value: bool) -> Self {
        *self.slot(toggle) = value;
        self
    }

    pub fn set(&mut self, toggle: RenderToggle, value: bool) {
        *self.slot(toggle) = value;
    }

    fn slot(&mut self, toggle: RenderToggle) -> &mut bool {
        match toggle {
            RenderToggle::MasterScenes => &mut self.draw_master_scenes,
            RenderToggle::SubScenes => &mut self.draw_sub_scenes,
            RenderToggle::WalkableCells => &mut self.draw_walkable_cells,
            RenderToggle::UnwalkableCells => &mut self.draw_unwalkable_cells,
            RenderToggle::Monsters => &mut self.draw_monsters,
            RenderToggle::Npcs => &mut self.draw_npcs,
            RenderToggle::Players => &mut self.draw_players,
            RenderToggle::PrintLabels => &mut self.print_labels,
            RenderToggle::FillCells => &mut self.fill_cells,
        }
    }

    /// `(toggle, value)` pairs in display order.
    pub fn toggles(&self) -> impl Iterator<Item = (RenderToggle, bool)> + '_ {
        RenderToggle::ALL.iter().map(|&t| (t, self.get(t)))
    }
}

/// Produces the diagnostic image for a set of render options.
///
/// Implementations must be deterministic: the same world and options give
/// the same pixels.
pub trait MeshRenderer: Send + Sync {
    fn render(&self, options: &RenderOptions) -> Result<RgbaImage>;
}

impl<F> MeshRenderer for F
where
    F: Fn(&RenderOptions) -> Result<RgbaImage> + Send + Sync,
{
    fn render(&self, options: &RenderOptions) -> Result<RgbaImage> {
        self(options)
    }
}
