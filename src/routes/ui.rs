use axum::{extract::State, response::Html, Router, routing::get};

use crate::models::AppState;

pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let component = state.gallery.html().await;
    Html(format!("{}{}{}", PAGE_HEAD, component, PAGE_TAIL))
}

const PAGE_HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Image Gallery</title>
  <style>
    body { font-family: "Segoe UI", Arial, sans-serif; margin: 2rem; }
    .imageGallery { color: var(--bodyText, #1d1d1f); }
    .imageGallery a { color: var(--link, #0078d4); }
    .imageGallery a:hover { color: var(--linkHovered, #004578); }
    .filters { display: flex; gap: 0.5rem; align-items: center; margin-bottom: 1rem; }
    .filters label { font-weight: 600; }
    .filters input { flex: 1; padding: 0.5rem; }
    .filters select, .filters button { padding: 0.5rem 1rem; }
    .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 1rem; }
    .card { border: 1px solid #ddd; border-radius: 8px; overflow: hidden; }
    .card p { margin: 0.5rem; font-size: 0.9rem; }
    .image { width: 100%; height: 180px; object-fit: cover; display: block; }
  </style>
</head>
<body>
"#;

const PAGE_TAIL: &str = r#"
  <script>
    const grid = document.getElementById('imageGrid');
    const queryInput = document.getElementById('searchQuery');
    const orientation = document.getElementById('orientationFilter');

    async function send(path, payload) {
      try {
        const res = await fetch(path, {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(payload)
        });
        const json = await res.json();
        if (json.outcome === 'rendered') {
          grid.innerHTML = json.results_html;
        }
      } catch (err) {
        console.error('Error fetching images:', err);
      }
    }

    document.getElementById('searchButton').addEventListener('click', () => {
      send('/api/gallery/search', { query: queryInput.value, orientation: orientation.value });
    });

    queryInput.addEventListener('keypress', (event) => {
      send('/api/gallery/keypress', {
        key: event.key,
        query: queryInput.value,
        orientation: orientation.value
      });
    });
  </script>
</body>
</html>"#;
