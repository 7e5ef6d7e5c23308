//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gray Code Explorer API",
        version = "2026.1.16",
        description = "REST API for exploring the reflected-binary Gray code - conversions, tables, encoder disks and a search-grounded assistant",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "SIL Contributors", url = "https://github.com/silvanoneto/SIL")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    tags(
        (name = "conversion", description = "Decimal, binary and Gray conversion"),
        (name = "sequences", description = "Gray code sequences, tables and bit differences"),
        (name = "visualization", description = "Rotary encoder disk"),
        (name = "assistant", description = "Search-grounded questions about Gray codes"),
        (name = "introspection", description = "Tool information"),
        (name = "health", description = "Health check endpoints")
    ),
    paths(
        handlers::convert_handler,
        handlers::table_handler,
        handlers::sequence_handler,
        handlers::diff_handler,
        handlers::disk_handler,
        handlers::disk_svg_handler,
        handlers::assistant_handler,
        handlers::info_handler,
        handlers::health_handler,
    ),
    components(
        schemas(
            ConvertFrom,
            ConvertRequest,
            AssistantRequest,
            ApiError,
            ConversionResult,
            TableRow,
            TableResult,
            SequenceResult,
            DiffResult,
            TrackView,
            DiskResult,
            SourceView,
            AnswerResult,
            ToolInfo,
            HealthCheck,
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security addon for API key authentication
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Header(
                        utoipa::openapi::security::ApiKeyValue::new("X-API-Key"),
                    ),
                ),
            );
        }
    }
}
