use std::sync::Arc;

use tokio::net::TcpListener;

use flashdeck::application::ports::FileLoader;
use flashdeck::application::services::GenerationService;
use flashdeck::domain::ContentType;
use flashdeck::infrastructure::llm::OpenAiClient;
use flashdeck::infrastructure::observability::{init_tracing, TracingConfig};
use flashdeck::infrastructure::text_processing::{
    CompositeFileLoader, PdfAdapter, PlainTextAdapter,
};
use flashdeck::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    if settings.llm.api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; completion requests will fail");
    }

    let file_loader = Arc::new(CompositeFileLoader::new(vec![
        (
            ContentType::Text,
            Arc::new(PlainTextAdapter) as Arc<dyn FileLoader>,
        ),
        (
            ContentType::Pdf,
            Arc::new(PdfAdapter::new(settings.generation.text_cap)) as Arc<dyn FileLoader>,
        ),
    ]));

    let llm_client = Arc::new(OpenAiClient::new(&settings.llm)?);

    let generation_service = Arc::new(GenerationService::new(
        Arc::clone(&file_loader),
        Arc::clone(&llm_client),
        settings.generation.text_cap,
    ));

    let state = AppState {
        generation_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
