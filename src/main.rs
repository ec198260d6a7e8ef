use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use paint_by_numbers::api::{self, AnalysisResponse, GridResponse};
use paint_by_numbers::assets::{AssetCategory, AssetLoader};
use paint_by_numbers::models::AppConfig;
use paint_by_numbers::rendering::{PreviewRenderer, SheetRenderer};
use paint_by_numbers::server;
use paint_by_numbers::services::{GridRequest, GridResult, PaintPipeline};

#[derive(Parser)]
#[command(name = "paint-by-numbers")]
#[command(about = "Turn pictures into numbered color grids and printable sheets")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by the commands that quantize an image
#[derive(clap::Args)]
struct GridArgs {
    /// Input image (PNG, JPEG, GIF, WebP or BMP)
    input: PathBuf,

    /// Cells per side (default: suggested by complexity analysis)
    #[arg(short, long)]
    grid_size: Option<u32>,

    /// Number of palette colors (default from config)
    #[arg(short, long)]
    max_colors: Option<usize>,
}

impl GridArgs {
    fn request(&self) -> GridRequest {
        GridRequest {
            grid_size: self.grid_size,
            max_colors: self.max_colors,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Analyze image complexity and print the recommended grid sizes
    Analyze {
        /// Input image
        input: PathBuf,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Quantize an image and write the grid as JSON
    Grid {
        #[command(flatten)]
        grid: GridArgs,

        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the colored preview to a PNG file
    Preview {
        #[command(flatten)]
        grid: GridArgs,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Render the printable sheet to an SVG file
    Sheet {
        #[command(flatten)]
        grid: GridArgs,

        /// Output SVG file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// List the paint palette
    Palette,
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract SVG templates
        #[arg(long)]
        templates: bool,

        /// Extract preview fonts
        #[arg(long)]
        fonts: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Paint by Numbers API",
        description = "Turn pictures into numbered color grids and printable sheets",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_palette,
        api::handle_analyze,
        api::handle_grid,
        api::handle_preview,
        api::handle_sheet,
    ),
    components(schemas(
        api::PaletteResponse,
        api::PaletteColor,
        api::AnalysisResponse,
        api::GridResponse,
        api::CellResponse,
        api::LegendResponse,
    )),
    tags(
        (name = "Palette", description = "Paint palette"),
        (name = "Analysis", description = "Image complexity analysis"),
        (name = "Grid", description = "Grid quantization"),
        (name = "Rendering", description = "Preview and printable sheet")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Analyze { input, json }) => run_analyze_command(&input, json),
        Some(Commands::Grid { grid, output }) => run_grid_command(&grid, output.as_deref()),
        Some(Commands::Preview { grid, output }) => run_preview_command(&grid, &output),
        Some(Commands::Sheet { grid, output }) => run_sheet_command(&grid, &output),
        Some(Commands::Palette) => run_palette_command(),
        Some(Commands::Init {
            templates,
            fonts,
            config,
            all,
            force,
            list,
        }) => run_init_command(templates, fonts, config, all, force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paint_by_numbers=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Load config and build the pipeline from env-configured assets
fn cli_context() -> (AssetLoader, AppConfig, PaintPipeline) {
    init_cli_tracing();
    let loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);
    let pipeline = PaintPipeline::new(&config);
    (loader, config, pipeline)
}

fn run_grid(pipeline: &PaintPipeline, args: &GridArgs) -> anyhow::Result<GridResult> {
    let bytes = std::fs::read(&args.input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", args.input.display()))?;
    Ok(pipeline.grid_bytes(&bytes, args.request())?)
}

fn run_analyze_command(input: &Path, json: bool) -> anyhow::Result<()> {
    let (_, _, pipeline) = cli_context();

    let bytes = std::fs::read(input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?;
    let analysis = AnalysisResponse::from(pipeline.analyze_bytes(&bytes)?);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("Complexity:       {:.3}", analysis.complexity);
        println!("  edges:          {:.3}", analysis.edge_complexity);
        println!("  colors:         {:.3}", analysis.color_variance);
        println!(
            "Grid size range:  {}..={}",
            analysis.min_grid_size, analysis.max_grid_size
        );
        println!("Suggested:        {}", analysis.suggested_grid_size);
    }

    Ok(())
}

fn run_grid_command(args: &GridArgs, output: Option<&Path>) -> anyhow::Result<()> {
    let (_, _, pipeline) = cli_context();

    let response = GridResponse::from(run_grid(&pipeline, args)?);
    let json = serde_json::to_string_pretty(&response)?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            println!(
                "Wrote {}x{} grid to {}",
                response.grid_size,
                response.grid_size,
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn run_preview_command(args: &GridArgs, output: &Path) -> anyhow::Result<()> {
    let (loader, config, pipeline) = cli_context();

    let renderer = PreviewRenderer::from_config(&config.preview, &loader)?;
    let result = run_grid(&pipeline, args)?;
    let png = renderer.render_png(&result.grid)?;

    std::fs::write(output, &png)?;
    println!("Rendered {} ({} bytes)", output.display(), png.len());

    Ok(())
}

fn run_sheet_command(args: &GridArgs, output: &Path) -> anyhow::Result<()> {
    let (loader, config, pipeline) = cli_context();

    let renderer = SheetRenderer::from_config(&config.sheet, &loader)?;
    let result = run_grid(&pipeline, args)?;
    let svg = renderer.render(&result.grid)?;

    std::fs::write(output, &svg)?;
    println!("Rendered {} ({} bytes)", output.display(), svg.len());

    Ok(())
}

fn run_palette_command() -> anyhow::Result<()> {
    let (_, _, pipeline) = cli_context();

    println!(
        "Standard palette v{}:",
        paint_grid::STANDARD_PALETTE_VERSION
    );
    for (i, entry) in pipeline.palette().iter().enumerate() {
        println!("  {:>2}  {}  {}", i + 1, entry.hex(), entry.name);
    }

    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    templates: bool,
    fonts: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Templates:");
        for f in AssetLoader::list_embedded(AssetCategory::Templates) {
            println!("  {f}");
        }
        println!("\nFonts:");
        for f in AssetLoader::list_embedded(AssetCategory::Fonts) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    // Determine which categories to extract
    let mut categories = Vec::new();
    if all || templates {
        categories.push(AssetCategory::Templates);
    }
    if all || fonts {
        categories.push(AssetCategory::Fonts);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --templates, --fonts, or --config");
        eprintln!("\nRun 'paint-by-numbers init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let templates_dir = std::env::var("TEMPLATES_DIR").ok();
    let fonts_dir = std::env::var("FONTS_DIR").ok();

    println!("Paint by Numbers v{VERSION}");
    println!("Turn pictures into numbered color grids and printable sheets\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR     = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE   = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  TEMPLATES_DIR = {}",
        templates_dir.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  FONTS_DIR     = {}",
        fonts_dir.as_deref().unwrap_or("(not set)")
    );

    println!("\nAsset Sources:");

    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("  Config:    {config_source}");

    let loader = AssetLoader::from_env();
    let embedded_count = AssetLoader::list_embedded(AssetCategory::Templates).len();
    match templates_dir {
        Some(ref path) if Path::new(path).exists() => println!(
            "  Templates: {path} ({} available, {embedded_count} embedded)",
            loader.list_templates().len()
        ),
        _ => println!("  Templates: embedded ({embedded_count})"),
    }

    let embedded_fonts = AssetLoader::list_embedded(AssetCategory::Fonts).len();
    match fonts_dir {
        Some(ref path) if Path::new(path).exists() => println!(
            "  Fonts:     {path} ({} loaded, {embedded_fonts} embedded)",
            loader.get_fonts().len()
        ),
        _ => println!("  Fonts:     embedded ({embedded_fonts})"),
    }

    println!("\nCommands:");
    println!("  paint-by-numbers serve     Start the HTTP server");
    println!("  paint-by-numbers analyze   Analyze image complexity");
    println!("  paint-by-numbers grid      Quantize an image to a JSON grid");
    println!("  paint-by-numbers preview   Render the colored preview PNG");
    println!("  paint-by-numbers sheet     Render the printable sheet SVG");
    println!("  paint-by-numbers palette   List the paint palette");
    println!("  paint-by-numbers init      Extract embedded assets");
    println!("\nRun 'paint-by-numbers --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paint_by_numbers=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    // Log asset sources
    tracing::info!(
        templates = ?asset_loader.templates_dir().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        fonts = ?asset_loader.fonts_dir().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        config = ?asset_loader.config_file().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        "Asset sources configured"
    );

    let state = server::create_app_state(asset_loader)?;
    tracing::info!(
        max_upload_bytes = state.config.max_upload_bytes,
        timeout_ms = state.config.analysis_timeout_ms,
        max_grid_size = state.config.max_grid_size,
        "Configuration loaded"
    );

    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Paint by Numbers server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
