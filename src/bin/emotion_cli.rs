use anyhow::{Context, Result};
use clap::Parser;
use std::{
    io::{self, IsTerminal, Read},
    path::PathBuf,
};

use emotion_decoder::{config::AppConfig, logging, manager};

/// Reads the emotional tone of a text message.
#[derive(Parser, Debug)]
#[command(name = "emotion_cli", version)]
struct Args {
    /// Message to analyze. Read from stdin when omitted.
    message: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Hugging Face model id (overrides EMOTION_MODEL_ID)
    #[arg(long)]
    model: Option<String>,

    /// Local model snapshot directory (overrides EMOTION_MODEL_DIR)
    #[arg(long)]
    model_dir: Option<PathBuf>,

    /// cpu, cuda or cuda:N (overrides EMOTION_DEVICE)
    #[arg(long)]
    device: Option<String>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let args = Args::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(model) = args.model {
        config.model_id = model;
        config.model_dir = None;
    }
    if let Some(dir) = args.model_dir {
        config.model_dir = Some(dir);
    }
    if let Some(device) = args.device {
        config.device = device;
    }

    let message = if args.message.is_empty() {
        read_stdin()?
    } else {
        args.message.join(" ")
    };
    if message.trim().is_empty() {
        return Ok(());
    }

    let analyzer = manager::load_analyzer(&config)?;
    let Some(report) = analyzer.analyze(&message)? else {
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Paste a message below, then press Ctrl-D:");
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("failed to read message from stdin")?;
    Ok(buf)
}
