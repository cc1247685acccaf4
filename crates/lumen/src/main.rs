use std::{env, path::PathBuf, process};

use anyhow::{anyhow, Context};
use lumen::{ppm, render, resolution::Resolution, timer::Timer};

const DEFAULT_OUTPUT: &str = "output.ppm";
const RESOLUTION_VAR: &str = "LUMEN_RESOLUTION";

fn main() -> anyhow::Result<()> {
    lumen::init_logger!();

    let mut args = env::args_os().skip(1);
    let output = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.into()));
    if args.next().is_some() {
        eprintln!("usage: lumen [OUTPUT]");
        process::exit(1);
    }

    let res = resolution_from_env()?;

    let mut t_render = Timer::new("render");
    let mut t_save = Timer::new("save");
    let fb = t_render.time(|| render::gradient(res));
    t_save
        .time(|| ppm::save(&output, &fb))
        .with_context(|| format!("failed to write '{}'", output.display()))?;

    log::debug!("{t_render}, {t_save}");
    log::info!("wrote {} ({})", output.display(), fb.resolution());
    Ok(())
}

fn resolution_from_env() -> anyhow::Result<Resolution> {
    match env::var(RESOLUTION_VAR) {
        Ok(value) => value
            .parse::<Resolution>()
            .map_err(|e| anyhow!(e))
            .with_context(|| format!("invalid {RESOLUTION_VAR}")),
        Err(env::VarError::NotPresent) => Ok(Resolution::default()),
        Err(e) => Err(e).with_context(|| format!("invalid {RESOLUTION_VAR}")),
    }
}
