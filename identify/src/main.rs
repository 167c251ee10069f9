use std::{fs, path::PathBuf, process::ExitCode};

use base64::{Engine, engine::general_purpose::STANDARD};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use bank::Wallet;
use identify::{GeminiRecognizer, config::Config, identify_waste};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Photo of the item to identify (jpeg or png).
    image: PathBuf,

    /// Wallet file to fold the reward points into.
    #[arg(long)]
    claim: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let bytes = fs::read(&args.image)?;
    let mime = match args.image.extension().and_then(|ext| ext.to_str()) {
        Some("png") => "image/png",
        _ => "image/jpeg",
    };
    let data_uri = format!("data:{mime};base64,{}", STANDARD.encode(&bytes));

    let recognizer = GeminiRecognizer::new(Config::load());

    let Some(record) = identify_waste(&recognizer, &data_uri).await else {
        eprintln!("Gagal mengidentifikasi sampah. Coba ambil foto ulang dengan pencahayaan lebih baik.");
        return Ok(ExitCode::FAILURE);
    };

    println!("{}", serde_json::to_string_pretty(&record)?);

    for station in bank::accepting(&record.kind) {
        info!("Drop-off: {} ({})", station.name, station.address);
    }

    if let Some(path) = &args.claim {
        let mut wallet = Wallet::load(path);
        wallet.claim(&record.material, record.points);
        wallet.save(path)?;

        info!("Balance: {} points", wallet.points);
    }

    Ok(ExitCode::SUCCESS)
}
