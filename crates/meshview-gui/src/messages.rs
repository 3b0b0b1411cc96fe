use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use meshview_core::cache::GenerationInfo;
use meshview_core::config::ViewerConfig;
use meshview_core::coordinator::{RegenerationTicket, RenderCoordinator, View};
use meshview_core::world::World;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Generate the world described by `config`.
    LoadWorld { config: ViewerConfig },

    /// Run a regeneration the UI has already begun (input is disabled
    /// until the ticket is dropped).
    Regenerate {
        ticket: RegenerationTicket,
        preview_size: (u32, u32),
    },

    /// Save one of the current images to disk.
    SaveImage {
        coordinator: Arc<RenderCoordinator>,
        view: View,
        path: PathBuf,
    },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    WorldReady {
        world: Arc<World>,
        config: ViewerConfig,
        elapsed: Duration,
    },
    Regenerated {
        info: GenerationInfo,
        elapsed: Duration,
    },
    ImageSaved {
        path: PathBuf,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
