// ABOUTME: Demo consumer for the fitmatch pipeline event stream
// ABOUTME: Runs one pipeline pass over a text argument and prints each event as JSON
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Fitmatch

//! Command-line demo playing the display-layer role: submit one goal
//! statement, then print every pipeline event as it arrives.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio_stream::StreamExt;
use tracing::info;

use fitmatch::catalog::{ExerciseCatalog, TrainerCatalog};
use fitmatch::logging::{init_logging, LogFormat, LoggingConfig};
use fitmatch::pipeline::Pipeline;

/// Run the matching pipeline once and stream its events to stdout
#[derive(Debug, Parser)]
#[command(name = "fitmatch-demo", version, about)]
struct Args {
    /// Free-text fitness goal statement, English and/or Chinese
    #[arg(
        long,
        default_value = "我想减肥但是我的英语不好我住在上海的小公寓里"
    )]
    text: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&LoggingConfig {
        level: args.log_level,
        format: LogFormat::Compact,
    })?;

    let pipeline = Pipeline::new(
        Arc::new(TrainerCatalog::builtin()),
        Arc::new(ExerciseCatalog::builtin()),
    );

    let mut run = pipeline.run(&args.text);
    info!(run_id = %run.run_id(), "submitted goal statement");

    while let Some(event) = run.next().await {
        println!("{}", serde_json::to_string_pretty(&event)?);
    }

    Ok(())
}
