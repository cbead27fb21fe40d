//! One page load: fetch the content, then render it into a fresh copy of
//! the template in a single synchronous pass.

use std::time::Instant;
use tracing::{error, info, warn};

use crate::content::ContentDocument;
use crate::loader::{ContentLoader, LoadError};
use crate::metrics;
use crate::nav::PageController;
use crate::page::Page;
use crate::render::render;

#[derive(Debug, Clone, Copy, Default)]
pub struct PageOptions {
    /// Render the navigation menu already expanded.
    pub nav_open: bool,
}

#[derive(Debug)]
pub enum PageOutcome {
    Rendered,
    /// Content failed to load; the template's own content is kept.
    Fallback(LoadError),
}

#[derive(Debug)]
pub struct BuiltPage {
    pub html: String,
    pub outcome: PageOutcome,
}

impl BuiltPage {
    /// Reports that the page being written is the bare template. The load
    /// failure itself was already logged as the one error for this build.
    pub fn warn_if_fallback(&self) {
        if let PageOutcome::Fallback(e) = &self.outcome {
            warn!("Writing the template without content: {}", e);
        }
    }
}

pub async fn build_page(loader: &ContentLoader, template: &str, options: PageOptions) -> BuiltPage {
    let content = loader.load().await;
    render_page(template, content, options)
}

/// Renders a loaded (or failed) content document into `template`.
///
/// A load failure is logged once and leaves the template untouched.
pub fn render_page(
    template: &str,
    content: Result<ContentDocument, LoadError>,
    options: PageOptions,
) -> BuiltPage {
    let page = Page::parse(template);

    let outcome = match content {
        Ok(doc) => {
            metrics::record_content_loaded();
            let started = Instant::now();
            render(&page, &doc);
            metrics::record_render_time(started.elapsed());
            info!("Rendered page in {:?}", started.elapsed());
            PageOutcome::Rendered
        }
        Err(e) => {
            let kind = match &e {
                LoadError::Fetch(_) => "fetch",
                LoadError::Parse(_) => "parse",
            };
            metrics::record_content_load_failed(kind);
            error!("Failed to load site data: {}", e);
            PageOutcome::Fallback(e)
        }
    };

    if options.nav_open {
        PageController::new(&page).toggle_nav();
    }

    BuiltPage {
        html: page.html(),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{ContentSource, FetchError};
    use axum::{http::StatusCode, routing::get, Router};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use url::Url;

    const TEMPLATE: &str = r##"<!DOCTYPE html>
<html><head><title>Site | Restaurant Co</title></head>
<body>
  <button id="nav-toggle" aria-expanded="false">Menu</button>
  <nav id="nav-links"><a href="#about">About</a></nav>
  <h1 id="site-name">Restaurant</h1>
  <a id="menu-pdf" href="/menu.pdf">Menu PDF</a>
</body></html>"##;

    async fn serve(app: Router) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Url::parse(&format!("http://{}/", addr)).unwrap()
    }

    #[tokio::test]
    async fn test_non_success_status_leaves_template_untouched() {
        let base = serve(Router::new().route(
            "/data.json",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;
        let loader = ContentLoader::new(ContentSource::parse("data.json", Some(&base)).unwrap());

        let built = build_page(&loader, TEMPLATE, PageOptions::default()).await;

        assert!(matches!(
            built.outcome,
            PageOutcome::Fallback(LoadError::Fetch(FetchError::Status { .. }))
        ));
        assert_eq!(built.html, Page::parse(TEMPLATE).html());
    }

    #[tokio::test]
    async fn test_successful_load_renders() {
        let base = serve(Router::new().route(
            "/data.json",
            get(|| async { r#"{"restaurant":{"name":"Joe's Diner"}}"# }),
        ))
        .await;
        let loader = ContentLoader::new(ContentSource::parse("data.json", Some(&base)).unwrap());

        let built = build_page(&loader, TEMPLATE, PageOptions::default()).await;

        assert!(matches!(built.outcome, PageOutcome::Rendered));
        let page = Page::parse(&built.html);
        assert_eq!(page.slot("site-name").unwrap().text(), "Joe's Diner");
        assert_eq!(page.title().as_deref(), Some("Joe's Diner | Restaurant Co"));
    }

    /// Counts ERROR events.
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn errors_logged(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(count.clone()));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn test_failed_load_logs_exactly_one_error() {
        let parse_error = serde_json::from_str::<ContentDocument>("{").unwrap_err();
        let errors = errors_logged(|| {
            render_page(TEMPLATE, Err(parse_error.into()), PageOptions { nav_open: true });
        });
        assert_eq!(errors, 1);

        let fetch_error = FetchError::File {
            path: "missing/data.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let errors = errors_logged(|| {
            render_page(TEMPLATE, Err(fetch_error.into()), PageOptions::default())
                .warn_if_fallback();
        });
        assert_eq!(errors, 1);
    }

    #[test]
    fn test_successful_render_logs_no_errors() {
        let errors = errors_logged(|| {
            render_page(TEMPLATE, Ok(ContentDocument::default()), PageOptions::default());
        });
        assert_eq!(errors, 0);
    }

    #[test]
    fn test_parse_failure_is_fallback() {
        let parse_error = serde_json::from_str::<ContentDocument>("{").unwrap_err();
        let built = render_page(TEMPLATE, Err(parse_error.into()), PageOptions::default());

        assert!(matches!(built.outcome, PageOutcome::Fallback(LoadError::Parse(_))));
        assert_eq!(built.html, Page::parse(TEMPLATE).html());
    }

    #[test]
    fn test_nav_open_option() {
        let built = render_page(
            TEMPLATE,
            Ok(ContentDocument::default()),
            PageOptions { nav_open: true },
        );

        let page = Page::parse(&built.html);
        assert!(page.slot("nav-links").unwrap().has_class("is-open"));
        assert_eq!(
            page.slot("nav-toggle").unwrap().attr("aria-expanded").as_deref(),
            Some("true")
        );
    }
}
