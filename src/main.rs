use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use luma_threshold::Threshold;
use lumaseg::api;
use lumaseg::server;

#[derive(Parser)]
#[command(name = "lumaseg")]
#[command(about = "Luminance-threshold image segmentation server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Segment a single image file directly (no server needed)
    Segment {
        /// Input image (`.png` decoded as PNG, anything else as JPEG)
        input: PathBuf,

        /// Output image (format chosen by the file name the same way)
        output: PathBuf,

        /// Luminance cutoff in the 16-bit range (default: 32768)
        #[arg(short, long)]
        threshold: Option<u16>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lumaseg API",
        description = "Binary luminance segmentation for uploaded images",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(api::handle_upload),
    components(schemas(api::SegmentationResult, api::UploadForm)),
    tags(
        (name = "Segmentation", description = "Image upload and segmentation")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Segment {
            input,
            output,
            threshold,
        }) => run_segment_command(&input, &output, threshold),
        Some(Commands::Serve) | None => run_server().await,
    }
}

/// Segment one file from the command line
fn run_segment_command(
    input: &PathBuf,
    output: &PathBuf,
    threshold: Option<u16>,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumaseg=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let threshold = threshold.map(Threshold).unwrap_or_default();
    luma_threshold::segment_file(input, output, threshold)?;

    println!(
        "Segmented {} -> {} (threshold {})",
        input.display(),
        output.display(),
        threshold
    );
    Ok(())
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumaseg=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let uploads_dir = std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "./uploads".to_string());

    tracing::info!(uploads = %uploads_dir, "Upload storage configured");

    // Create application state using shared server module
    let state = server::create_app_state(&uploads_dir, Threshold::default())?;

    // Build router: start with shared routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Lumaseg server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
