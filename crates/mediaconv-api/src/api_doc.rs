//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mediaconv API",
        version = "0.1.0",
        description = "Single-purpose media conversion service: upload a file, pick a target format, download the converted result. Transcoding is delegated to ffmpeg."
    ),
    paths(
        handlers::convert::convert_file,
        handlers::health::health_check,
    ),
    tags(
        (name = "convert", description = "Media conversion"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
