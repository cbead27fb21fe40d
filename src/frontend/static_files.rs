use axum::{
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

pub fn create_static_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/static/css/site.css", get(serve_site_css))
        .route("/static/js/nav-toggle.js", get(serve_nav_toggle_js))
}

async fn serve_site_css() -> impl IntoResponse {
    let css = r#"
        :root {
            --color-primary: #8c2f1b;
            --color-secondary: #2f3e46;
            --color-background: #fbf7f2;
            --color-surface: #ffffff;
            --color-text: #1f1d1b;
            --font-heading: Georgia, serif;
            --font-body: system-ui, sans-serif;
            --radius: 12px;
            --shadow: 0 10px 24px rgba(0, 0, 0, 0.08);
        }

        body {
            margin: 0;
            font-family: var(--font-body);
            color: var(--color-text);
            background: var(--color-background);
        }

        h1, h2, h3 { font-family: var(--font-heading); }

        .site-header {
            display: flex;
            align-items: center;
            justify-content: space-between;
            gap: 1rem;
            padding: 1rem 2rem;
        }

        .nav-links { display: flex; gap: 1rem; }
        .nav-toggle { display: none; }

        @media (max-width: 760px) {
            .nav-toggle { display: inline-block; }
            .nav-links { display: none; flex-direction: column; }
            .nav-links.is-open { display: flex; }
        }

        .button {
            display: inline-block;
            padding: 0.6rem 1.2rem;
            border-radius: var(--radius);
            background: var(--color-primary);
            color: var(--color-surface);
            text-decoration: none;
        }

        .button--ghost {
            background: transparent;
            color: var(--color-primary);
            border: 1px solid var(--color-primary);
        }

        .hero__image, .about__image {
            min-height: 320px;
            border-radius: var(--radius);
            background-size: cover;
            background-position: center;
        }

        .section { padding: 3rem 2rem; }

        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
            gap: 1.5rem;
        }

        .menu-card, .special-card, .event-card, .testimonial-card, .stat {
            padding: 1.25rem;
            border-radius: var(--radius);
            background: var(--color-surface);
            box-shadow: var(--shadow);
        }

        .menu-item {
            display: flex;
            justify-content: space-between;
            gap: 1rem;
            padding: 0.5rem 0;
        }

        .pill {
            display: inline-block;
            margin: 0 0.5rem 0.5rem 0;
            padding: 0.3rem 0.8rem;
            border-radius: 999px;
            background: var(--color-secondary);
            color: var(--color-surface);
        }

        .gallery {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 1rem;
        }

        .gallery__item img {
            width: 100%;
            border-radius: var(--radius);
        }

        .site-footer { padding: 2rem; }
        .footer-links { display: flex; gap: 1rem; }
    "#;

    ([(header::CONTENT_TYPE, "text/css")], css)
}

async fn serve_nav_toggle_js() -> impl IntoResponse {
    let js = r#"
        (function () {
            var toggle = document.getElementById("nav-toggle");
            var links = document.getElementById("nav-links");
            if (!toggle || !links) {
                return;
            }
            toggle.addEventListener("click", function () {
                var open = links.classList.toggle("is-open");
                toggle.setAttribute("aria-expanded", String(open));
            });
        })();
    "#;

    ([(header::CONTENT_TYPE, "application/javascript")], js)
}
