//! Markdown-subset rendering for chat replies.
//!
//! Reply text supports a small fixed subset: bold, italic, inline code,
//! `##`/`###` headings, `•` bullet lines, and `N.` numbered lines. The source
//! text is HTML-escaped before any transform runs, so arbitrary user or API
//! text can never inject markup; only this subset produces tags.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").unwrap());
static H4: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)###\s*(.*)$").unwrap());
static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)##\s*(.*)$").unwrap());
static BULLET_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^•\s*(.*)$").unwrap());
static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\.\s*(.*)$").unwrap());
// Runs on break-converted text: a run of items separated only by <br> is one list.
static LIST_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(<li>.*?</li>(?:<br><li>.*?</li>)*)").unwrap());

/// Escape text for use in an HTML text node.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a reply string into an HTML fragment.
///
/// Transform order matters: bold before italic (so `**` pairs are consumed
/// first), `###` before `##`, item transforms before the newline-to-`<br>`
/// pass, and list wrapping before the break-stripping cleanup so adjacent
/// items merge into a single container.
pub fn render_markup(text: &str) -> String {
    let escaped = escape_html(text);
    let mut html = BOLD.replace_all(&escaped, "<strong>$1</strong>").into_owned();
    html = ITALIC.replace_all(&html, "<em>$1</em>").into_owned();
    html = CODE.replace_all(&html, "<code>$1</code>").into_owned();
    html = H4.replace_all(&html, "<h4>$1</h4>").into_owned();
    html = H3.replace_all(&html, "<h3>$1</h3>").into_owned();
    html = BULLET_ITEM.replace_all(&html, "<li>$1</li>").into_owned();
    html = NUMBERED_ITEM.replace_all(&html, "<li>$1</li>").into_owned();
    html = html.replace('\n', "<br>");
    html = LIST_RUN.replace_all(&html, "<ul>$1</ul>").into_owned();
    html = html.replace("<br><li>", "<li>");
    html = html.replace("</li><br>", "</li>");
    html
}
