use anyhow::Context;

use gilded_rose_sim::SimConfig;

fn main() -> anyhow::Result<()> {
    let config = SimConfig::from_env().context("invalid simulation settings")?;
    gilded_rose_observability::init_with(config.log_format);

    if config.seed_path.is_none() {
        tracing::debug!("GILDED_ROSE_SEED not set; using built-in item set");
    }

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    gilded_rose_sim::run(&config, &mut out).context("simulation failed")?;

    Ok(())
}
