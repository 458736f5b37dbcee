//! HTML rendering: page shell plus one module per page body.
//!
//! Everything here returns markup strings; no I/O. Interpolated text goes through [`escape`].

pub mod home;
pub mod results;
pub mod table;

use crate::config::ClubInfo;

const SITE_CSS: &str = include_str!("../../templates/site.css");
const PITCH_CSS: &str = include_str!("../../templates/pitch.css");

/// Toggles `.open` on an accordion when its header is clicked.
const ACCORDION_SCRIPT: &str = r#"document.querySelectorAll('.accordion-header').forEach(function (header) {
    header.addEventListener('click', function () {
        header.parentElement.classList.toggle('open');
    });
});"#;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
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

/// Full HTML document around a page body.
pub fn page(title: &str, club: &ClubInfo, body: &str) -> String {
    let club_name = escape(&club.name);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | {club_name}</title>
    <style>
{site_css}
{pitch_css}
    </style>
</head>
<body>
    <header class="site-header">
        <div class="brand">
            <img src="{logo}" alt="{club_name}">
            <span>{club_name}</span>
        </div>
        <nav>
            <a href="/">Home</a>
            <a href="/results">Results</a>
            <a href="/table">Table</a>
        </nav>
    </header>
    <main>
{body}
    </main>
    <script>
{script}
    </script>
</body>
</html>
"#,
        title = escape(title),
        site_css = SITE_CSS,
        pitch_css = PITCH_CSS,
        logo = escape(&club.logo),
        body = body,
        script = ACCORDION_SCRIPT,
    )
}

/// Inline notice shown in place of a section whose data could not be loaded.
pub fn notice(message: &str) -> String {
    format!(r#"<div class="loading">{}</div>"#, escape(message))
}
