use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::consts::MAX_IMAGE_DIMENSION;
use crate::error::{MeshViewError, Result};
use crate::geometry::{Point, Rect};

/// Whether a scene is a top-level tile of the world or a quarter of one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneKind {
    Master,
    Sub,
}

/// A single navigation cell in world units.
#[derive(Clone, Debug, PartialEq)]
pub struct NavCell {
    pub bounds: Rect,
    pub walkable: bool,
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub id: u32,
    pub kind: SceneKind,
    pub bounds: Rect,
    pub cells: Vec<NavCell>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Monster,
    Npc,
    Player,
}

impl std::fmt::Display for ActorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActorKind::Monster => write!(f, "Monster"),
            ActorKind::Npc => write!(f, "NPC"),
            ActorKind::Player => write!(f, "Player"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Actor {
    pub kind: ActorKind,
    pub position: Point,
}

/// Parameters for the procedural world generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldParams {
    pub name: String,
    pub sno_id: u32,
    pub seed: u64,
    /// Master scenes per row.
    pub scene_columns: u32,
    /// Master scene rows.
    pub scene_rows: u32,
    /// Edge length of a master scene in world units.
    pub scene_size: u32,
    /// Edge length of a nav cell in world units.
    pub cell_size: u32,
    /// Probability that a master scene is split into four sub scenes.
    pub subdivide_chance: f64,
    /// Probability that a cell is walkable.
    pub walkable_ratio: f64,
    pub monsters: usize,
    pub npcs: usize,
    pub players: usize,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            name: "trOut_Town".into(),
            sno_id: 71150,
            seed: 0x5EED,
            scene_columns: 8,
            scene_rows: 6,
            scene_size: 240,
            cell_size: 20,
            subdivide_chance: 0.35,
            walkable_ratio: 0.7,
            monsters: 60,
            npcs: 12,
            players: 2,
        }
    }
}

impl WorldParams {
    fn validate(&self) -> Result<()> {
        if self.scene_columns == 0 || self.scene_rows == 0 {
            return Err(MeshViewError::InvalidWorldParams(
                "scene grid must have at least one row and column".into(),
            ));
        }
        if self.cell_size == 0 || self.scene_size == 0 {
            return Err(MeshViewError::InvalidWorldParams(
                "scene and cell sizes must be > 0".into(),
            ));
        }
        if self.cell_size > self.scene_size {
            return Err(MeshViewError::InvalidWorldParams(format!(
                "cell size {} exceeds scene size {}",
                self.cell_size, self.scene_size
            )));
        }
        for (axis, scenes) in [("width", self.scene_columns), ("height", self.scene_rows)] {
            match scenes.checked_mul(self.scene_size) {
                Some(edge) if edge <= MAX_IMAGE_DIMENSION => {}
                _ => {
                    return Err(MeshViewError::InvalidWorldParams(format!(
                        "world {axis} of {scenes} scenes x {} exceeds {MAX_IMAGE_DIMENSION}",
                        self.scene_size
                    )));
                }
            }
        }
        for (name, p) in [
            ("subdivide_chance", self.subdivide_chance),
            ("walkable_ratio", self.walkable_ratio),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(MeshViewError::InvalidWorldParams(format!(
                    "{name} must be in [0, 1], got {p}"
                )));
            }
        }
        Ok(())
    }
}

/// Counts reported by `meshview info`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldSummary {
    pub master_scenes: usize,
    pub sub_scenes: usize,
    pub walkable_cells: usize,
    pub unwalkable_cells: usize,
    pub monsters: usize,
    pub npcs: usize,
    pub players: usize,
}

/// A simulated world: scenes tiled with nav cells, plus actors.
#[derive(Clone, Debug)]
pub struct World {
    pub name: String,
    pub sno_id: u32,
    pub width: u32,
    pub height: u32,
    pub scenes: Vec<Scene>,
    pub actors: Vec<Actor>,
}

impl World {
    /// Build a world from `params`. The same params always produce the same world.
    pub fn generate(params: &WorldParams) -> Result<World> {
        params.validate()?;

        let mut rng = StdRng::seed_from_u64(params.seed);
        let size = params.scene_size as f32;
        let mut scenes = Vec::new();
        let mut next_id = 1u32;

        for row in 0..params.scene_rows {
            for col in 0..params.scene_columns {
                let bounds = Rect::new(col as f32 * size, row as f32 * size, size, size);
                let master_id = next_id;
                next_id += 1;

                let split = params.scene_size >= 2 * params.cell_size
                    && rng.random_bool(params.subdivide_chance);

                if split {
                    scenes.push(Scene {
                        id: master_id,
                        kind: SceneKind::Master,
                        bounds,
                        cells: Vec::new(),
                    });
                    let half = size / 2.0;
                    for (dx, dy) in [(0.0, 0.0), (half, 0.0), (0.0, half), (half, half)] {
                        let sub = Rect::new(bounds.left + dx, bounds.top + dy, half, half);
                        let cells = tile_cells(sub, params, &mut rng);
                        scenes.push(Scene {
                            id: next_id,
                            kind: SceneKind::Sub,
                            bounds: sub,
                            cells,
                        });
                        next_id += 1;
                    }
                } else {
                    let cells = tile_cells(bounds, params, &mut rng);
                    scenes.push(Scene {
                        id: master_id,
                        kind: SceneKind::Master,
                        bounds,
                        cells,
                    });
                }
            }
        }

        let walkable: Vec<Rect> = scenes
            .iter()
            .flat_map(|s| s.cells.iter())
            .filter(|c| c.walkable)
            .map(|c| c.bounds)
            .collect();

        let mut actors = Vec::new();
        if !walkable.is_empty() {
            for (kind, count) in [
                (ActorKind::Monster, params.monsters),
                (ActorKind::Npc, params.npcs),
                (ActorKind::Player, params.players),
            ] {
                for _ in 0..count {
                    let cell = walkable[rng.random_range(0..walkable.len())];
                    actors.push(Actor {
                        kind,
                        position: cell.center(),
                    });
                }
            }
        }

        let world = World {
            name: params.name.clone(),
            sno_id: params.sno_id,
            width: params.scene_columns * params.scene_size,
            height: params.scene_rows * params.scene_size,
            scenes,
            actors,
        };
        tracing::debug!(
            scenes = world.scenes.len(),
            actors = world.actors.len(),
            "Generated world {} [{}]",
            world.name,
            world.sno_id
        );
        Ok(world)
    }

    pub fn summary(&self) -> WorldSummary {
        let mut s = WorldSummary::default();
        for scene in &self.scenes {
            match scene.kind {
                SceneKind::Master => s.master_scenes += 1,
                SceneKind::Sub => s.sub_scenes += 1,
            }
            for cell in &scene.cells {
                if cell.walkable {
                    s.walkable_cells += 1;
                } else {
                    s.unwalkable_cells += 1;
                }
            }
        }
        for actor in &self.actors {
            match actor.kind {
                ActorKind::Monster => s.monsters += 1,
                ActorKind::Npc => s.npcs += 1,
                ActorKind::Player => s.players += 1,
            }
        }
        s
    }

    /// Iterate over every cell in every scene.
    pub fn cells(&self) -> impl Iterator<Item = &NavCell> {
        self.scenes.iter().flat_map(|s| s.cells.iter())
    }
}

fn tile_cells(area: Rect, params: &WorldParams, rng: &mut StdRng) -> Vec<NavCell> {
    let cell = params.cell_size as f32;
    let cols = (area.width / cell).floor() as u32;
    let rows = (area.height / cell).floor() as u32;
    let mut cells = Vec::with_capacity((cols * rows) as usize);
    for r in 0..rows {
        for c in 0..cols {
            cells.push(NavCell {
                bounds: Rect::new(area.left + c as f32 * cell, area.top + r as f32 * cell, cell, cell),
                walkable: rng.random_bool(params.walkable_ratio),
            });
        }
    }
    cells
}
