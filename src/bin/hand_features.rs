use clap::Parser;
use hand_features::batch::{load_payloads, process_batch};
use hand_features::io::{object_from_json, write_json};
use hand_features::schema::{CapturePayload, extract};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(version, about, author)]
struct HandFeaturesCli {
    /// capture payload json, or a folder of them
    path: PathBuf,

    /// output file (single payload) or folder (batch). stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// write single-line json
    #[arg(long)]
    compact: bool,
}

fn run_single(cli: &HandFeaturesCli) -> hand_features::Result<()> {
    let payload: CapturePayload = object_from_json(&cli.path)?;
    let response = extract(&payload)?;
    match &cli.output {
        Some(p) => write_json(std::fs::File::create(p)?, &response, cli.compact),
        None => write_json(std::io::stdout().lock(), &response, cli.compact),
    }
}

fn run_batch(cli: &HandFeaturesCli) -> hand_features::Result<()> {
    let output_dir = cli.output.clone().unwrap_or_else(|| cli.path.clone());
    std::fs::create_dir_all(&output_dir)?;

    let (paths, payloads): (Vec<_>, Vec<_>) = load_payloads(&cli.path)?.into_iter().unzip();
    let now = Instant::now();
    let responses = process_batch(&payloads);
    log::info!(
        "processed {} payloads in {:.6} sec",
        payloads.len(),
        now.elapsed().as_secs_f64()
    );

    for (path, response) in paths.iter().zip(responses) {
        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        match response {
            Ok(r) => {
                let out = output_dir.join(format!("{}.features.json", stem));
                write_json(std::fs::File::create(out)?, &r, cli.compact)?;
            }
            Err(e) => log::error!("{}: {}", path.display(), e),
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = HandFeaturesCli::parse();
    let result = if cli.path.is_dir() {
        run_batch(&cli)
    } else {
        run_single(&cli)
    };
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
