// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

// veritas-check: classify one piece of content and print the result as JSON.
//
// Usage:
//   veritas-check "SHOCKING: you won't believe what the CDC said"
//   echo "according to our sources ..." | veritas-check --kind text
//   veritas-check --config veritas.yaml --kind image holiday-deepfake.png
//   veritas-check --config veritas.yaml --local-only "..."

use std::path::PathBuf;

use clap::Parser;
use tokio::io::AsyncReadExt as _;
use veritas::config::{self, Config, FileSource};
use veritas::engine::{self, Analyzer, FallbackAnalyzer, LocalAnalyzer};
use veritas::request::{AnalysisRequest, ContentKind};

#[derive(Parser)]
#[command(name = "veritas-check", about = "Classify content from the command line")]
struct Cli {
    /// Path to a veritas config YAML. Built-in defaults when omitted.
    #[arg(long, env = "VERITAS_CONFIG")]
    config: Option<PathBuf>,

    /// Content kind: text, url, or image
    #[arg(long, default_value = "text", value_parser = parse_kind)]
    kind: ContentKind,

    /// Never contact the configured remote delegate
    #[arg(long, default_value_t = false)]
    local_only: bool,

    /// Content to classify. Read from stdin when omitted.
    content: Option<String>,
}

fn parse_kind(s: &str) -> Result<ContentKind, String> {
    ContentKind::parse(s).ok_or_else(|| format!("unknown content kind \"{s}\""))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .json()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match config::load_config(&FileSource::new(path)) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(path = %path.display(), "failed to load config: {e}");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let content = match cli.content {
        Some(c) => c,
        None => {
            let mut buf = String::new();
            if let Err(e) = tokio::io::stdin().read_to_string(&mut buf).await {
                tracing::error!("failed to read stdin: {e}");
                std::process::exit(1);
            }
            buf
        }
    };

    let analyzer = if cli.local_only {
        FallbackAnalyzer::new(None, LocalAnalyzer::from_config(&config))
    } else {
        engine::build_analyzer(&config)
    };

    let result = analyzer
        .analyze(&AnalysisRequest::new(cli.kind, content))
        .await;

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!("failed to serialize result: {e}");
            std::process::exit(1);
        }
    }
}
