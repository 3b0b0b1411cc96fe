use std::sync::Arc;

use image::{Rgba, RgbaImage};
use rayon::prelude::*;

use super::canvas::{draw_number, fill_disc, label_height, stroke_rect};
use super::{MeshRenderer, RenderOptions};
use crate::consts::{
    ACTOR_RADIUS, BACKGROUND_COLOR, LABEL_SCALE, MAX_IMAGE_DIMENSION, PARALLEL_PIXEL_THRESHOLD,
};
use crate::error::{MeshViewError, Result};
use crate::world::{ActorKind, SceneKind, World};

const WALKABLE_FILL: Rgba<u8> = Rgba([170, 225, 170, 255]);
const WALKABLE_EDGE: Rgba<u8> = Rgba([40, 140, 40, 255]);
const UNWALKABLE_FILL: Rgba<u8> = Rgba([235, 170, 170, 255]);
const UNWALKABLE_EDGE: Rgba<u8> = Rgba([170, 40, 40, 255]);
const MASTER_SCENE_EDGE: Rgba<u8> = Rgba([0, 0, 0, 255]);
const SUB_SCENE_EDGE: Rgba<u8> = Rgba([120, 120, 120, 255]);
const LABEL_COLOR: Rgba<u8> = Rgba([20, 20, 20, 255]);

fn actor_color(kind: ActorKind) -> Rgba<u8> {
    match kind {
        ActorKind::Monster => Rgba([220, 20, 20, 255]),
        ActorKind::Npc => Rgba([230, 190, 0, 255]),
        ActorKind::Player => Rgba([20, 60, 230, 255]),
    }
}

/// Pixel span of one cell, resolved before the row pass.
struct CellSpan {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    fill: Option<Rgba<u8>>,
    edge: Rgba<u8>,
}

/// Navigation-mesh visualisation of a world, one world unit per pixel.
pub struct DebugNavMesh {
    world: Arc<World>,
}

impl DebugNavMesh {
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    fn cell_spans(&self, options: &RenderOptions, width: u32, height: u32) -> Vec<CellSpan> {
        self.world
            .cells()
            .filter(|c| {
                if c.walkable {
                    options.draw_walkable_cells
                } else {
                    options.draw_unwalkable_cells
                }
            })
            .filter_map(|c| {
                let b = c.bounds;
                let x0 = b.left.max(0.0) as usize;
                let y0 = b.top.max(0.0) as usize;
                let x1 = (b.right().max(0.0) as usize).min(width as usize);
                let y1 = (b.bottom().max(0.0) as usize).min(height as usize);
                if x0 >= x1 || y0 >= y1 {
                    return None;
                }
                let (fill, edge) = if c.walkable {
                    (WALKABLE_FILL, WALKABLE_EDGE)
                } else {
                    (UNWALKABLE_FILL, UNWALKABLE_EDGE)
                };
                Some(CellSpan {
                    x0,
                    y0,
                    x1,
                    y1,
                    fill: options.fill_cells.then_some(fill),
                    edge,
                })
            })
            .collect()
    }
}

fn put(row: &mut [u8], x: usize, color: Rgba<u8>) {
    row[x * 4..x * 4 + 4].copy_from_slice(&color.0);
}

fn paint_cell_row(y: usize, row: &mut [u8], spans: &[CellSpan]) {
    for s in spans.iter().filter(|s| y >= s.y0 && y < s.y1) {
        if y == s.y0 || y == s.y1 - 1 {
            for x in s.x0..s.x1 {
                put(row, x, s.edge);
            }
            continue;
        }
        if let Some(fill) = s.fill {
            for x in s.x0 + 1..s.x1 - 1 {
                put(row, x, fill);
            }
        }
        put(row, s.x0, s.edge);
        put(row, s.x1 - 1, s.edge);
    }
}

impl MeshRenderer for DebugNavMesh {
    fn render(&self, options: &RenderOptions) -> Result<RgbaImage> {
        let (width, height) = (self.world.width, self.world.height);
        if width == 0 || height == 0 || width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
            return Err(MeshViewError::InvalidDimensions { width, height });
        }

        let mut img = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_COLOR));

        let spans = self.cell_spans(options, width, height);
        if !spans.is_empty() {
            let row_bytes = width as usize * 4;
            let buf: &mut [u8] = &mut img;
            if (width as usize) * (height as usize) >= PARALLEL_PIXEL_THRESHOLD {
                buf.par_chunks_mut(row_bytes)
                    .enumerate()
                    .for_each(|(y, row)| paint_cell_row(y, row, &spans));
            } else {
                buf.chunks_mut(row_bytes)
                    .enumerate()
                    .for_each(|(y, row)| paint_cell_row(y, row, &spans));
            }
        }

        for scene in &self.world.scenes {
            let draw = match scene.kind {
                SceneKind::Master => options.draw_master_scenes,
                SceneKind::Sub => options.draw_sub_scenes,
            };
            if !draw {
                continue;
            }
            let edge = match scene.kind {
                SceneKind::Master => MASTER_SCENE_EDGE,
                SceneKind::Sub => SUB_SCENE_EDGE,
            };
            stroke_rect(&mut img, scene.bounds, edge);

            if options.print_labels {
                let pad = label_height(LABEL_SCALE) / 2;
                let x = scene.bounds.left.max(0.0) as u32 + pad;
                let y = scene.bounds.top.max(0.0) as u32 + pad;
                draw_number(&mut img, x, y, scene.id, LABEL_SCALE, LABEL_COLOR);
            }
        }

        for actor in &self.world.actors {
            let draw = match actor.kind {
                ActorKind::Monster => options.draw_monsters,
                ActorKind::Npc => options.draw_npcs,
                ActorKind::Player => options.draw_players,
            };
            if draw {
                fill_disc(
                    &mut img,
                    actor.position.x.round() as i32,
                    actor.position.y.round() as i32,
                    ACTOR_RADIUS,
                    actor_color(actor.kind),
                );
            }
        }

        tracing::debug!(width, height, cells = spans.len(), "Rendered navmesh");
        Ok(img)
    }
}
