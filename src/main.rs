use std::{env, fs::File, path::PathBuf};

use anyhow::{Context, Result, bail};
use env_logger::{Builder, Env, Target};

use wavedeck::{config::PlayerConfig, ui};

/// Log to the file named by `WAVEDECK_LOG`; stderr would corrupt the UI.
fn init_logging() -> Result<()> {
    let Some(path) = env::var_os("WAVEDECK_LOG") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot open log file {}", PathBuf::from(&path).display()))?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;

    let mut args = env::args_os().skip(1);
    let Some(audio) = args.next().map(PathBuf::from) else {
        bail!("usage: wavedeck <audio-file> [config.toml]");
    };
    let config = match args.next() {
        Some(path) => PlayerConfig::load(&PathBuf::from(path))?,
        None => PlayerConfig::default(),
    };

    ui::run(&audio, config)
}
