use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use beadgrid::api;
use beadgrid::assets::{AssetLoader, ConfigSource};
use beadgrid::models::{load_catalogue, AppConfig};
use beadgrid::rendering::{render_preview_png, render_text};
use beadgrid::server;
use beadgrid::services::{BeadPattern, BeadService, OpenAiStylizer, Stylizer};

#[derive(Parser)]
#[command(name = "beadgrid")]
#[command(about = "Turn pictures into fused-bead patterns")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Bead codes as rows, followed by the bill of materials
    Text,
    /// Grid and usage as JSON
    Json,
    /// Bill of materials as CSV
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Generate a bead pattern from a PNG
    Pattern {
        /// Input PNG file
        image: PathBuf,

        /// Cells per side (default from config)
        #[arg(short, long)]
        grid_size: Option<u32>,

        /// Bead catalogue YAML (overrides config)
        #[arg(short, long)]
        palette: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text patterns on their bead colors (terminal only)
        #[arg(long)]
        color: bool,
    },
    /// Render a pattern preview to a PNG file
    Preview {
        /// Input PNG file
        image: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Cells per side (default from config)
        #[arg(short, long)]
        grid_size: Option<u32>,

        /// Pixels per bead (default from config)
        #[arg(short, long)]
        cell_size: Option<u32>,

        /// Draw 1-px lines between beads
        #[arg(long)]
        grid_lines: bool,

        /// Bead catalogue YAML (overrides config)
        #[arg(short, long)]
        palette: Option<PathBuf>,
    },
    /// List the bead catalogue
    Palette {
        /// Bead catalogue YAML (overrides config)
        #[arg(short, long)]
        palette: Option<PathBuf>,
    },
    /// Cartoon-stylize a photo via the image-edit service (needs OPENAI_API_KEY)
    Stylize {
        /// Input PNG file
        image: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Beadgrid API",
        description = "Turn pictures into fused-bead patterns",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_palette,
        api::handle_pattern,
        api::handle_preview,
        api::handle_stylize,
    ),
    components(schemas(
        api::PaletteColor,
        beadgrid::services::PatternReport,
        beadgrid::services::UsageRow,
    )),
    tags(
        (name = "Palette", description = "Bead catalogue"),
        (name = "Pattern", description = "Pattern generation and previews"),
        (name = "Stylize", description = "Photo stylizing before quantization")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Pattern {
            image,
            grid_size,
            palette,
            format,
            output,
            color,
        }) => {
            init_cli_logging();
            run_pattern_command(
                &image,
                grid_size,
                palette.as_deref(),
                format,
                output.as_deref(),
                color,
            )
        }
        Some(Commands::Preview {
            image,
            output,
            grid_size,
            cell_size,
            grid_lines,
            palette,
        }) => {
            init_cli_logging();
            run_preview_command(
                &image,
                &output,
                grid_size,
                cell_size,
                grid_lines,
                palette.as_deref(),
            )
        }
        Some(Commands::Palette { palette }) => {
            init_cli_logging();
            run_palette_command(palette.as_deref())
        }
        Some(Commands::Stylize { image, output }) => {
            init_cli_logging();
            run_stylize_command(&image, &output).await
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beadgrid=warn,bead_quantize=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

/// Config from CONFIG_FILE (or embedded), with an optional catalogue override
fn load_service(palette_override: Option<&Path>) -> anyhow::Result<(AppConfig, BeadService)> {
    let config = AppConfig::load_from_assets(&AssetLoader::from_env());
    let palette = match palette_override {
        Some(path) => load_catalogue(path)?,
        None => config.load_palette()?,
    };
    let service = BeadService::new(palette, config.grid);
    Ok((config, service))
}

fn generate_from_file(
    service: &BeadService,
    image: &Path,
    grid_size: Option<u32>,
) -> anyhow::Result<BeadPattern> {
    let bytes = std::fs::read(image)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", image.display()))?;
    Ok(service.generate(&bytes, grid_size)?)
}

fn run_pattern_command(
    image: &Path,
    grid_size: Option<u32>,
    palette: Option<&Path>,
    format: OutputFormat,
    output: Option<&Path>,
    color: bool,
) -> anyhow::Result<()> {
    let (_, service) = load_service(palette)?;
    let pattern = generate_from_file(&service, image, grid_size)?;

    let rendered = match format {
        OutputFormat::Text => {
            let mut text = render_text(&pattern.grid, color && output.is_none());
            text.push('\n');
            for item in pattern.usage.by_count() {
                text.push_str(&format!(
                    "{:<6} {:>6}  {}  {}\n",
                    item.entry.id,
                    item.count,
                    item.entry.rgb.to_hex(),
                    item.entry.name
                ));
            }
            text.push_str(&format!(
                "\n{} beads, {} colors\n",
                pattern.usage.total(),
                pattern.usage.len()
            ));
            text
        }
        OutputFormat::Json => serde_json::to_string_pretty(&pattern.report())? + "\n",
        OutputFormat::Csv => pattern.usage_csv(),
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("Wrote pattern to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn run_preview_command(
    image: &Path,
    output: &Path,
    grid_size: Option<u32>,
    cell_size: Option<u32>,
    grid_lines: bool,
    palette: Option<&Path>,
) -> anyhow::Result<()> {
    let (config, service) = load_service(palette)?;
    let cell_size = cell_size.unwrap_or(config.preview.cell_size);
    let pattern = generate_from_file(&service, image, grid_size)?;

    let png = render_preview_png(&pattern.grid, cell_size, grid_lines)?;
    std::fs::write(output, &png)?;

    println!(
        "Rendered {0}x{0} preview to {1} ({2} bytes, {3} colors)",
        pattern.grid.size(),
        output.display(),
        png.len(),
        pattern.usage.len()
    );
    Ok(())
}

fn run_palette_command(palette: Option<&Path>) -> anyhow::Result<()> {
    let (_, service) = load_service(palette)?;
    let palette = service.palette();
    let width = palette.iter().map(|e| e.id.len()).max().unwrap_or(0);

    for entry in palette {
        println!("{:<width$}  {}  {}", entry.id, entry.rgb.to_hex(), entry.name);
    }
    println!("\n{} colors", palette.len());
    Ok(())
}

async fn run_stylize_command(image: &Path, output: &Path) -> anyhow::Result<()> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY is not set"))?;
    let config = AppConfig::load_from_assets(&AssetLoader::from_env());
    let stylizer = OpenAiStylizer::new(config.stylize)?;

    let bytes = std::fs::read(image)?;
    let stylized = stylizer.stylize(bytes, &api_key).await?;
    std::fs::write(output, &stylized)?;

    println!("Wrote stylized image to {}", output.display());
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let api_key_set = std::env::var("OPENAI_API_KEY").is_ok();

    println!("Beadgrid v{VERSION}");
    println!("Fused-bead patterns from pictures\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR      = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE    = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  OPENAI_API_KEY = {}",
        if api_key_set { "(set)" } else { "(not set)" }
    );

    let loader = AssetLoader::new(config_file.map(PathBuf::from));
    let config_source = match loader.config_source() {
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Embedded if loader.config_file().is_some() => {
            "embedded (file not found)".to_string()
        }
        ConfigSource::Embedded => "embedded".to_string(),
    };

    let config = AppConfig::load_from_assets(&loader);
    let palette = match config.palette {
        Some(ref path) => path.display().to_string(),
        None => format!(
            "built-in ({} colors)",
            bead_quantize::Palette::builtin().len()
        ),
    };

    println!("\nConfiguration:");
    println!("  Config:    {config_source}");
    println!("  Palette:   {palette}");
    println!(
        "  Grid size: {} (range {}..={})",
        config.grid.default_size, config.grid.min_size, config.grid.max_size
    );

    println!("\nCommands:");
    println!("  beadgrid serve     Start the HTTP server");
    println!("  beadgrid pattern   Generate a bead pattern from a PNG");
    println!("  beadgrid preview   Render a pattern preview PNG");
    println!("  beadgrid palette   List the bead catalogue");
    println!("  beadgrid stylize   Cartoon-stylize a photo");
    println!("\nRun 'beadgrid --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beadgrid=debug,bead_quantize=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let asset_loader = AssetLoader::from_env();
    let state = server::create_app_state(&asset_loader)?;

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Beadgrid server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
