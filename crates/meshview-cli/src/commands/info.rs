use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use meshview_core::world::World;

use super::load_config;

#[derive(Args)]
pub struct InfoArgs {
    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the world seed
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.world.seed = seed;
    }
    let world = World::generate(&config.world)?;
    let s = world.summary();

    println!("World:       {} [{}]", world.name, world.sno_id);
    println!("Seed:        {:#x}", config.world.seed);
    println!("Dimensions:  {}x{}", world.width, world.height);
    println!("Scenes:      {} master, {} sub", s.master_scenes, s.sub_scenes);
    println!(
        "Cells:       {} walkable, {} unwalkable",
        s.walkable_cells, s.unwalkable_cells
    );
    println!(
        "Actors:      {} monsters, {} NPCs, {} players",
        s.monsters, s.npcs, s.players
    );

    let full_mb = (world.width as u64 * world.height as u64 * 4) as f64 / (1024.0 * 1024.0);
    println!("Image size:  {:.1} MB", full_mb);

    Ok(())
}
