use super::view_state::ViewState;

pub const DEFAULT_PAGE_TITLE: &str = "Self-Protocol Viewer";

/// Renders the viewer page.
///
/// The error line, when present, sits above the list; the list itself is
/// always rendered, one item per entry keyed by position.
pub fn render_page(title: &str, state: &ViewState) -> String {
    let title = escape_html(title);

    let error_line = state
        .error
        .as_deref()
        .map(|error| format!("<p class=\"error\">{}</p>\n", escape_html(error)))
        .unwrap_or_default();

    let items: String = state
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!("<li data-key=\"{index}\">{}</li>\n", escape_html(entry))
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<main>\n<h1>{title}</h1>\n\
         <section>\n<h2>Interests</h2>\n{error_line}<ul>\n{items}</ul>\n</section>\n\
         </main>\n</body>\n</html>\n"
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
