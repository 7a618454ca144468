use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::HttpResponse;
use std::path::Path;

use crate::ui::placeholder;

pub const INDEX_FILE: &str = "index.html";

/// Static assets from the SPA build, with `index.html` as the answer for any path that is
/// not a file. Must be registered after every API route.
pub fn service(static_dir: &Path) -> Files {
    let dir = static_dir.to_path_buf();
    let index = static_dir.join(INDEX_FILE);

    Files::new("/", static_dir)
        .index_file(INDEX_FILE)
        .default_handler(fn_service(move |req: ServiceRequest| {
            let dir = dir.clone();
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let res = match NamedFile::open_async(&index).await {
                    Ok(file) => file.into_response(&req),
                    Err(e) => {
                        log::debug!("ℹ️  {} unavailable ({}), serving placeholder", index.display(), e);
                        HttpResponse::Ok()
                            .content_type("text/html; charset=utf-8")
                            .body(placeholder::render(&dir))
                    }
                };
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }))
}
