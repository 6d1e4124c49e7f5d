//! Styles for the storefront CLI.
//!
//! Templates never carry ANSI codes. They name a style (`{{ price | style("price") }}`)
//! and the `style` filter `outstanding` installs looks the name up in [`STOREFRONT_THEME`].
//! Names describe the information shown (a price, a card index), so the palette can
//! change without touching templates.
//!
//! Message levels from the core map onto the `info`, `success`, `warning` and `error`
//! names. A name missing from the theme renders with `outstanding`'s warning marker, so
//! every name a template uses must be registered here.
use console::Style;
use once_cell::sync::Lazy;
use outstanding::Theme;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const TITLE: &str = "title";
    pub const MESSAGE: &str = "message";
    pub const SECTION: &str = "section";
    pub const CARD_INDEX: &str = "card-index";
    pub const CARD_TITLE: &str = "card-title";
    pub const PRICE: &str = "price";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

pub static STOREFRONT_THEME: Lazy<Theme> = Lazy::new(build_theme);

fn build_theme() -> Theme {
    let muted = Style::new().color256(246);
    let pink = Style::new().color256(211);

    Theme::new()
        .add(names::REGULAR, Style::new())
        .add(names::MUTED, muted.clone())
        .add(names::TITLE, pink.clone().bold())
        .add(names::MESSAGE, pink.italic())
        .add(names::SECTION, Style::new().bold().underlined())
        .add(names::CARD_INDEX, Style::new().color256(179))
        .add(names::CARD_TITLE, Style::new().bold())
        .add(names::PRICE, Style::new().green())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
}
