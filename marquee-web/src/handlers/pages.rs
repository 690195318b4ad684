//! Page handlers for the browsing interface

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::catalog::{Category, ContentItem};
use serde::Deserialize;

use crate::components::layout::escape_html;
use crate::components::{category_row, page_header, render_page, search_form};
use crate::server::AppState;

/// Query parameters for the search page.
#[derive(Debug, Deserialize)]
pub struct SearchPageQuery {
    #[serde(default)]
    q: String,
}

/// Renders the catalog landing page: one row per category plus the
/// search box. Takes no required identifier.
pub async fn home_page(State(state): State<AppState>) -> Response {
    let rows: String = Category::ALL
        .iter()
        .map(|&category| {
            let items: Vec<&ContentItem> = state.catalog.by_category(category).collect();
            category_row(category.label(), &items)
        })
        .collect();

    let content = format!(
        "{}{}{rows}",
        page_header("Browse", Some("Pick something to watch")),
        search_form(""),
    );

    render_page("Browse", "browse", &content).into_response()
}

/// Renders the search results page.
pub async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<SearchPageQuery>,
) -> Response {
    let results: Vec<&ContentItem> = state.search.search(&params.q).collect();

    let body = if results.is_empty() {
        format!(
            r#"<div class="text-center py-12 text-gray-400">No titles match "{}"</div>"#,
            escape_html(&params.q)
        )
    } else {
        category_row("Results", &results)
    };

    let content = format!(
        "{}{}{body}",
        page_header("Search", None),
        search_form(&params.q),
    );

    render_page("Search", "search", &content).into_response()
}

/// Renders the player page for a resolved content record.
///
/// Any identifier that does not resolve gets the dedicated not-found
/// page with a 404 status, never a crash or a blank page.
pub async fn watch_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(item) = state.resolver.resolve(&id).cloned() else {
        return not_found_page();
    };

    let title = escape_html(&item.title);
    let player = format!(
        r#"<div class="max-w-4xl mx-auto">
            <video id="player" controls autoplay
                   class="w-full rounded-lg bg-black aspect-video"
                   poster="{thumb}"
                   data-content-id="{id}"></video>
            <div id="player-error" class="hidden mt-4 bg-red-900 border border-red-700 rounded-lg p-4">
                <div class="text-red-200 mb-2" id="player-error-message">Playback failed.</div>
                <button id="player-retry" class="px-4 py-2 rounded-lg font-medium bg-amber-500 hover:bg-amber-600 text-gray-900">Retry</button>
            </div>
            <div class="mt-4">
                <h1 class="text-2xl font-bold text-white">{title}</h1>
                <div class="text-gray-400">{category}</div>
            </div>
        </div>"#,
        thumb = escape_html(&item.thumbnail_url),
        id = escape_html(&item.id),
        category = item.category.label(),
    );

    let content = format!("{player}{PLAYER_SCRIPT}");
    render_page(&title, "browse", &content).into_response()
}

/// Dedicated not-found page used by the routing surface.
pub fn not_found_page() -> Response {
    let content = format!(
        r#"{}
        <div class="text-center py-12">
            <div class="text-6xl mb-4">🎬</div>
            <h2 class="text-2xl font-semibold text-white mb-4">That title isn't in the catalog</h2>
            <p class="text-gray-400 mb-8">The link may be stale, or the content was never configured.</p>
            <a href="/" class="px-4 py-2 rounded-lg font-medium bg-amber-500 hover:bg-amber-600 text-gray-900">Back to Browse</a>
        </div>"#,
        page_header("Not Found", None),
    );

    (
        StatusCode::NOT_FOUND,
        render_page("Not Found", "browse", &content),
    )
        .into_response()
}

/// Client-side wiring between the media element and the playback
/// session API. The element's lifecycle events are forwarded with the
/// session's generation tag; the server-side controller decides what
/// applies.
const PLAYER_SCRIPT: &str = r#"<script>
(function() {
    const video = document.getElementById('player');
    const errorBox = document.getElementById('player-error');
    const errorMessage = document.getElementById('player-error-message');
    const retryButton = document.getElementById('player-retry');
    let session = null;
    let generation = 0;

    function classify(mediaError) {
        if (!mediaError) return 'unknown';
        switch (mediaError.code) {
            case MediaError.MEDIA_ERR_NETWORK: return 'network';
            case MediaError.MEDIA_ERR_DECODE: return 'decode';
            case MediaError.MEDIA_ERR_SRC_NOT_SUPPORTED: return 'unavailable_source';
            default: return 'unknown';
        }
    }

    async function post(path, body) {
        const response = await fetch(path, {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify(body)
        });
        return response.json();
    }

    async function mount() {
        const data = await post('/api/player', { id: video.dataset.contentId });
        session = data.session;
        generation = data.generation;
        video.src = data.mediaUrl;
        video.load();
    }

    video.addEventListener('canplay', async () => {
        if (!session) return;
        await post('/api/player/' + session + '/events',
            { generation: generation, status: 'ready' });
    });

    video.addEventListener('error', async () => {
        if (!session) return;
        const kind = classify(video.error);
        await post('/api/player/' + session + '/events',
            { generation: generation, status: 'failed', error: kind });
        errorMessage.textContent = 'Playback failed (' + kind.replace('_', ' ') + ').';
        errorBox.classList.remove('hidden');
    });

    video.addEventListener('play', () => {
        if (session) post('/api/player/' + session + '/play', {});
    });

    video.addEventListener('pause', () => {
        if (session) post('/api/player/' + session + '/pause', {});
    });

    window.addEventListener('pagehide', () => {
        if (session) {
            fetch('/api/player/' + session, { method: 'DELETE', keepalive: true });
            session = null;
        }
    });

    retryButton.addEventListener('click', async () => {
        const data = await post('/api/player/' + session + '/retry', {});
        if (data.generation) {
            generation = data.generation;
            errorBox.classList.add('hidden');
            video.load();
        }
    });

    mount();
})();
</script>"#;
