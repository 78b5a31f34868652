use anyhow::Context;
use clap::Parser;
use terrane::config::toml_config::TomlConfig;
use terrane::core::ConfigProvider;
use terrane::utils::{logger, validation::Validate};
use terrane::{GenerationPipeline, LocalStorage, ModelEngine};

#[derive(Parser)]
#[command(name = "toml-gen")]
#[command(about = "Model generation driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "model-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be generated without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Loading configuration from: {}", args.config);

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("DRY RUN MODE - no model will be generated");
        perform_dry_run(&config)?;
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = GenerationPipeline::new(storage, config);

    let engine = ModelEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Model generation completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Model generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Model: {}", config.model.name);

    if let Some(version) = &config.model.version {
        println!("  Version: {}", version);
    }

    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));
    println!("  Compress: {}", config.compress());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    println!("🔍 Dry Run Analysis:");
    println!();

    let params = config.params()?;

    println!("📐 Axes:");
    println!(
        "  X: {} blocks over [{}, {}]",
        params.axis_x().blocks_count(),
        params.axis_x().start(),
        params.axis_x().end()
    );
    println!(
        "  Y: {} blocks over [{}, {}]",
        params.axis_y().blocks_count(),
        params.axis_y().start(),
        params.axis_y().end()
    );

    println!();
    println!("🪨 Borders:");
    println!("  Count: {}", params.borders().number_of_borders());
    for (border_type, limits) in params
        .borders()
        .borders_type()
        .iter()
        .zip(params.borders().borders_limits())
    {
        println!("  {:?} within [{}, {}]", border_type, limits[0], limits[1]);
    }

    let cells = params.axis_x().blocks_count()
        * params.axis_y().blocks_count()
        * params.borders().number_of_borders() as usize;
    println!();
    println!("📊 Total cells to generate: {}", cells);
    println!();
    println!("✅ Dry run analysis complete. Run without --dry-run to generate the model.");

    Ok(())
}
