use clap::{Parser, Subcommand};

mod analyzer;
mod hostinfo;
mod outdir;
mod plugins;
mod record;
mod runlog;
mod sink;
mod target;
#[cfg(test)]
mod testing;

use crate::target::Target;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "host-triage")]
#[command(about = "Extract host artifacts from an evidence source to per-host CSV files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every registered extraction plugin against an evidence bundle.
    Extract {
        /// Path to the evidence bundle to open.
        image: String,

        /// Delete and recreate the destination directory if it exists.
        #[arg(long)]
        overwrite: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Extract { image, overwrite } => {
            let mut log = runlog::TracingLog;

            // 1) Open the evidence source; everything below runs against it.
            let target = target::json::JsonTarget::open(&image)?;

            // 2) Destination directory. The only step whose failure aborts
            //    the whole run.
            let dst_dir = outdir::create_destination_directory(
                std::path::Path::new("."),
                target.hostname(),
                overwrite,
                &mut log,
            )?;

            // 3) Host metadata, independent of the plugin loop.
            hostinfo::write_hostinfo(&target, &dst_dir)?;

            // 4) The batch itself. Plugin failures stay inside the loop.
            let analyzer = analyzer::HostAnalyzer::new(&target, dst_dir);
            analyzer.invoke_plugins(plugins::REGISTRY, &mut log);
        }
    }

    Ok(())
}
