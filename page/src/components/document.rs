//! Root document component - the complete HTML page around a rendered body.

use crate::content::BRAND;
use crate::styles::CSP;
use leptos::prelude::*;

/// The complete HTML document. `body` is markup that was already rendered
/// (the stylesheet is compiled from its classes, so it has to exist first).
#[component]
pub fn AboutDocument(
    /// Compiled stylesheet, inlined in `<head>`
    stylesheet: String,
    /// Web-font stylesheet, when the theme names any non-generic family
    fonts_href: Option<String>,
    /// Pre-rendered page markup
    body: String,
) -> impl IntoView {
    let title = format!("About | {BRAND}");
    let description = format!("{BRAND} - competitive gaming, fair play and real rewards.");
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=description />
                <title>{title}</title>
                {fonts_href.map(|href| view! {
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="" />
                    <link rel="stylesheet" href=href />
                })}
                <style inner_html=stylesheet></style>
            </head>
            <body inner_html=body></body>
        </html>
    }
}
