//! Layout components - page shell, headers, navigation

use axum::response::Html;

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{s}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="mb-8">
            <h1 class="text-3xl font-bold text-white">{title}</h1>
            {subtitle_html}
        </div>"#
    )
}

/// Renders the main navigation bar.
///
/// Highlights the active page based on the provided page identifier.
pub fn nav_bar(active_page: &str) -> String {
    let nav_item = |href: &str, label: &str, page: &str| {
        let active_class = if page == active_page {
            "text-amber-400 bg-amber-400 bg-opacity-10"
        } else {
            "text-gray-300 hover:text-amber-400 hover:bg-gray-700"
        };

        format!(
            r#"<a href="{href}" class="px-3 py-2 rounded-md text-sm font-medium transition-colors {active_class}">{label}</a>"#
        )
    };

    format!(
        r#"<nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-8">
                        <a href="/" class="text-2xl font-bold text-amber-400">Marquee</a>
                        <div class="hidden md:flex space-x-6">
                            {}
                            {}
                        </div>
                    </div>
                </div>
            </div>
        </nav>"#,
        nav_item("/", "Browse", "browse"),
        nav_item("/search", "Search", "search"),
    )
}

/// Renders a button with Tailwind styling.
///
/// Variants: primary, secondary. Supports additional HTML attributes
/// for custom behavior like onclick handlers.
pub fn button(text: &str, variant: &str, attributes: Option<&str>) -> String {
    let base_classes = "px-4 py-2 rounded-lg font-medium transition-colors focus:outline-none";

    let variant_classes = match variant {
        "primary" => "bg-amber-500 hover:bg-amber-600 text-gray-900",
        _ => "bg-gray-700 hover:bg-gray-600 text-white",
    };

    let attrs = attributes.unwrap_or_default();
    format!(r#"<button class="{base_classes} {variant_classes}" {attrs}>{text}</button>"#)
}

/// Renders a complete page with navigation and content shell.
pub fn render_page(title: &str, active_nav: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{} - Marquee</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
        </head>
        <body class="bg-gray-900 text-white min-h-screen font-sans">
            {}

            <main class="max-w-7xl mx-auto px-4 py-8">
                {}
            </main>
        </body>
        </html>"#,
        title,
        nav_bar(active_nav),
        content
    );

    Html(html)
}

/// Escapes text for safe interpolation into HTML.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_bar_marks_active_page() {
        let nav = nav_bar("search");
        assert!(nav.contains("Marquee"));
        assert!(nav.contains("Search</a>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tea" & Tales</b>"#),
            "&lt;b&gt;&quot;Tea&quot; &amp; Tales&lt;/b&gt;"
        );
    }
}
