use stylist::GlobalStyle;

use crate::error::PageError;

const GLOBAL_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }

    body {
        margin: 0;
        background-color: #000000;
        color: #ffffff;
        font-family: "Inter", system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
        -webkit-font-smoothing: antialiased;
    }

    img {
        max-width: 100%;
        height: auto;
    }
"#;

/// Registers the page-wide stylesheet in `<head>`.
pub fn mount_global_styles() -> Result<GlobalStyle, PageError> {
    GlobalStyle::new(GLOBAL_CSS).map_err(|e| PageError::Style(e.to_string()))
}
