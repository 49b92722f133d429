//! Markup inspection helpers for view tests.

use leptos::tachys::view::RenderHtml;

/// Render a view to an HTML string without a reactive runtime.
pub(crate) fn render(view: impl RenderHtml) -> String {
    view.to_html()
}

/// Every value of `attr="..."` in document order.
pub(crate) fn attr_values(html: &str, attr: &str) -> Vec<String> {
    let needle = format!("{attr}=\"");
    let mut values = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(&needle) {
        let after = &rest[start + needle.len()..];
        let Some(end) = after.find('"') else { break };
        values.push(after[..end].to_owned());
        rest = &after[end..];
    }
    values
}

/// The slice from `start` up to (not including) the next `end` after it.
pub(crate) fn section<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
    let Some(from) = html.find(start) else { return "" };
    let tail = &html[from..];
    let to = tail.find(end).unwrap_or(tail.len());
    &tail[..to]
}

/// Text content of the first element whose opening tag contains `marker`.
pub(crate) fn text_of<'a>(html: &'a str, marker: &str) -> Option<&'a str> {
    let from = html.find(marker)?;
    let tail = &html[from..];
    let open_end = tail.find('>')?;
    let body = &tail[open_end + 1..];
    let close = body.find('<')?;
    Some(&body[..close])
}
