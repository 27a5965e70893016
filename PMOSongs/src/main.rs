mod logs;
mod shell;

use pmoconfig::Config;
use pmoplaylist::{Playlist, PlaylistConfigExt};
use shell::Shell;
use std::io;
use tracing::{error, info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ========== PHASE 1 : Configuration & logging ==========

    // Le logging dépend de la configuration : une erreur de chargement est
    // journalisée après l'initialisation du subscriber.
    let (config, config_error) = match Config::load_config("") {
        Ok(config) => (config, None),
        Err(e) => (Config::embedded_defaults()?, Some(e)),
    };
    logs::init_logging(&config);

    if let Some(e) = config_error {
        warn!(error = %e, "Failed to load configuration, using embedded defaults");
    }

    // ========== PHASE 2 : Playlist ==========

    let data_path = config.playlist_data_path();
    let playlist = Playlist::new(config.playlist_name());
    info!(name = playlist.name(), data_file = %data_path.display(), "Starting playlist manager");

    // ========== PHASE 3 : Boucle interactive ==========

    let stdin = io::stdin();
    let mut shell = Shell::new(playlist, data_path, stdin.lock(), io::stdout().lock());

    if let Err(e) = shell.start().and_then(|_| shell.run()) {
        error!(error = %e, "Terminal I/O failed");
    }

    Ok(())
}
