//! Content cards and category rows for the browsing pages

use marquee_core::catalog::ContentItem;

use crate::components::layout::escape_html;

/// Placeholder image served when a thumbnail fails to load.
///
/// Image substitution is purely a rendering concern: a broken
/// thumbnail is swapped out client-side and never reported as an
/// application error.
pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// Renders one content card linking to its player page.
pub fn content_card(item: &ContentItem) -> String {
    let title = escape_html(&item.title);
    format!(
        r#"<a href="/watch/{id}" class="block bg-gray-800 rounded-lg overflow-hidden hover:ring-2 hover:ring-amber-400 transition">
            <img src="{thumb}" alt="Thumbnail for {title}"
                 class="w-full h-40 object-cover"
                 onerror="this.onerror=null;this.src='{placeholder}';">
            <div class="p-3">
                <div class="text-sm font-medium text-white truncate">{title}</div>
                <div class="text-xs text-gray-400">{category}</div>
            </div>
        </a>"#,
        id = urlencoding::encode(&item.id),
        thumb = escape_html(&item.thumbnail_url),
        placeholder = PLACEHOLDER_IMAGE,
        category = item.category.label(),
    )
}

/// Renders a titled row of content cards; an empty row collapses to
/// nothing rather than an empty heading.
pub fn category_row(label: &str, items: &[&ContentItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let cards: String = items.iter().map(|item| content_card(item)).collect();
    format!(
        r#"<section class="mb-10">
            <h2 class="text-xl font-semibold text-white mb-4">{label}</h2>
            <div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-5 gap-4">
                {cards}
            </div>
        </section>"#
    )
}

/// Renders the search form with the current query prefilled.
pub fn search_form(query: &str) -> String {
    let value = escape_html(query);
    format!(
        r#"<form action="/search" method="get" class="mb-8 flex space-x-2">
            <input type="text" name="q" value="{value}" placeholder="Search titles..."
                   class="flex-1 bg-gray-800 border border-gray-700 rounded-lg px-4 py-2 text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-amber-400">
            <button type="submit" class="px-4 py-2 rounded-lg font-medium bg-amber-500 hover:bg-amber-600 text-gray-900">Search</button>
        </form>"#
    )
}

#[cfg(test)]
mod tests {
    use marquee_core::catalog::{Category, ContentItem};

    use super::*;

    fn item() -> ContentItem {
        ContentItem {
            id: "movie1".to_string(),
            title: "Assamese Blockbuster".to_string(),
            category: Category::Movie,
            thumbnail_url: "/thumbs/movie1.jpg".to_string(),
            media_url: "/media/movie1.mp4".to_string(),
        }
    }

    #[test]
    fn test_content_card_carries_image_fallback() {
        let card = content_card(&item());

        assert!(card.contains("/watch/movie1"));
        assert!(card.contains("onerror"));
        assert!(card.contains(PLACEHOLDER_IMAGE));
        assert!(card.contains("alt=\"Thumbnail for Assamese Blockbuster\""));
    }

    #[test]
    fn test_empty_category_row_collapses() {
        assert_eq!(category_row("Movies", &[]), "");
    }

    #[test]
    fn test_thumbnail_url_is_attribute_escaped() {
        let mut spiky = item();
        spiky.thumbnail_url = r#"/thumbs/x.jpg" onload="alert(1)"#.to_string();
        let card = content_card(&spiky);

        assert!(!card.contains(r#".jpg" onload"#));
        assert!(card.contains("&quot;"));
    }

    #[test]
    fn test_card_titles_are_escaped() {
        let mut spiky = item();
        spiky.title = r#"<script>"x"</script>"#.to_string();
        let card = content_card(&spiky);
        assert!(!card.contains("<script>"));
    }
}
