use triage::{InferenceService, ModelStore};
use log::info;
use env_logger;
use clap::Parser;
use anyhow::bail;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the model artifacts (defaults to TRIAGE_MODELS_DIR or ./models)
    #[arg(short, long)]
    models_dir: Option<PathBuf>,

    /// List the symptoms the loaded vocabulary recognizes and exit
    #[arg(short, long)]
    list_symptoms: bool,

    /// Symptoms to diagnose, one per argument
    symptoms: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    info!("=== Starting Diagnosis Inference ===");

    let store = match args.models_dir {
        Some(dir) => ModelStore::new(dir),
        None => ModelStore::new_default(),
    };
    info!("Model artifacts directory: {}", store.models_dir().display());

    let start_time = Instant::now();
    let service = InferenceService::start(&store);
    let bundle_info = match service.info() {
        Some(info) => info,
        None => bail!(
            "no usable model bundle in {}; run with RUST_LOG=error for details",
            store.models_dir().display()
        ),
    };
    let load_time = start_time.elapsed();
    info!(
        "=== Bundle Loaded ({} symptoms, took {:.2?}) ===\n",
        bundle_info.vocabulary_size, load_time
    );

    if args.list_symptoms {
        println!("Known symptoms ({}):", bundle_info.vocabulary_size);
        for symptom in &bundle_info.symptoms {
            println!("  {}", symptom);
        }
        return Ok(());
    }

    if args.symptoms.is_empty() {
        bail!("no symptoms given; pass symptoms as arguments or use --list-symptoms");
    }

    let infer_start = Instant::now();
    process_request(&service, &args.symptoms)?;

    info!("\n=== Done ===");
    info!("Load time: {:.2?}", load_time);
    info!("Inference time: {:.2?}", infer_start.elapsed());

    Ok(())
}

fn process_request(service: &InferenceService, symptoms: &[String]) -> anyhow::Result<()> {
    info!("Symptoms in: {:?}", symptoms);

    match service.infer(symptoms) {
        Ok(prediction) => {
            println!("\nResults:");
            println!("  Diagnosis: {}", prediction.diagnosis);
            println!("  Encoded label: {}", prediction.label);
            println!("  Symptoms used: {}", prediction.symptoms_used.join(", "));
        }
        Err(e) => {
            eprintln!("\nError processing symptoms: {}", e);
            eprintln!("Consider:");
            eprintln!("  - Checking for empty or whitespace-only entries");
            eprintln!("  - Passing each symptom as its own argument");
            eprintln!("  - Running with --list-symptoms to see what the model recognizes");
            return Err(e.into());
        }
    }

    Ok(())
}
