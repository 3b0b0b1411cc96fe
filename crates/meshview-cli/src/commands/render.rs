use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use meshview_core::coordinator::{RenderCoordinator, View};
use meshview_core::geometry::{Point, Size};
use meshview_core::io::save_generation;
use meshview_core::render::{DebugNavMesh, RenderToggle};
use meshview_core::viewport::{max_offset, visible_rect_in_preview, ScrollState};
use meshview_core::world::World;

use super::load_config;
use crate::summary::{print_render_summary, print_visible_region};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ToggleArg {
    MasterScenes,
    SubScenes,
    WalkableCells,
    UnwalkableCells,
    Monsters,
    Npcs,
    Players,
    Labels,
    FillCells,
}

impl From<ToggleArg> for RenderToggle {
    fn from(arg: ToggleArg) -> Self {
        match arg {
            ToggleArg::MasterScenes => RenderToggle::MasterScenes,
            ToggleArg::SubScenes => RenderToggle::SubScenes,
            ToggleArg::WalkableCells => RenderToggle::WalkableCells,
            ToggleArg::UnwalkableCells => RenderToggle::UnwalkableCells,
            ToggleArg::Monsters => RenderToggle::Monsters,
            ToggleArg::Npcs => RenderToggle::Npcs,
            ToggleArg::Players => RenderToggle::Players,
            ToggleArg::Labels => RenderToggle::PrintLabels,
            ToggleArg::FillCells => RenderToggle::FillCells,
        }
    }
}

#[derive(Args)]
pub struct RenderArgs {
    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the world seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Turn a render layer on (repeatable)
    #[arg(long, value_enum)]
    pub enable: Vec<ToggleArg>,

    /// Turn a render layer off (repeatable)
    #[arg(long, value_enum)]
    pub disable: Vec<ToggleArg>,

    /// Preview width in pixels
    #[arg(long)]
    pub preview_width: Option<u32>,

    /// Preview height in pixels
    #[arg(long)]
    pub preview_height: Option<u32>,

    /// Also save the preview image
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Stage viewport size, e.g. 1024x768; reports the visible region in the preview
    #[arg(long, value_parser = parse_size)]
    pub viewport: Option<Size>,

    /// Stage scroll offset, e.g. 300,120 (used with --viewport)
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    pub scroll: Point,

    /// Output file path
    #[arg(short, long, default_value = "navmesh.png")]
    pub output: PathBuf,
}

fn parse_pair(s: &str, sep: char) -> Result<(f32, f32), String> {
    let (a, b) = s
        .split_once(sep)
        .ok_or_else(|| format!("expected two numbers separated by '{sep}'"))?;
    let a = a.trim().parse::<f32>().map_err(|e| e.to_string())?;
    let b = b.trim().parse::<f32>().map_err(|e| e.to_string())?;
    Ok((a, b))
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = parse_pair(s, 'x')?;
    Ok(Size::new(w, h))
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = parse_pair(s, ',')?;
    Ok(Point::new(x, y))
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.world.seed = seed;
    }
    for &t in &args.enable {
        config.render.set(t.into(), true);
    }
    for &t in &args.disable {
        config.render.set(t.into(), false);
    }
    if let Some(w) = args.preview_width {
        config.preview.width = w;
    }
    if let Some(h) = args.preview_height {
        config.preview.height = h;
    }

    let world = Arc::new(World::generate(&config.world).context("Failed to generate world")?);
    let renderer = Arc::new(DebugNavMesh::new(Arc::clone(&world)));
    let coordinator = Arc::new(RenderCoordinator::new(renderer, |view: View| {
        tracing::debug!(?view, "View invalidated");
    }));

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]")?);
    pb.set_message(format!("Rendering {}x{}", world.width, world.height));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = coordinator.regenerate(config.render, config.preview.size());
    pb.finish_and_clear();
    let info = result.context("Regeneration failed")?;

    coordinator
        .paint(|g| save_generation(g, &args.output, args.preview.as_deref()))??;

    print_render_summary(&world, &config.render, &info, &args.output, args.preview.as_deref());

    if let Some(viewport) = args.viewport {
        let content = Size::new(world.width as f32, world.height as f32);
        let mut scroll = ScrollState::for_stage(args.scroll, viewport, content);
        scroll.horizontal.value = args.scroll.x.clamp(0.0, max_offset(viewport.width, content.width));
        scroll.vertical.value = args.scroll.y.clamp(0.0, max_offset(viewport.height, content.height));
        let preview = Size::new(info.preview_size.0 as f32, info.preview_size.1 as f32);
        let rect = visible_rect_in_preview(&scroll, viewport, content, preview);
        print_visible_region(&scroll, &rect);
    }

    coordinator.close();
    Ok(())
}
