//! # Rendering Module
//!
//! Builds template data from the core's [`RenderState`] and [`CmdMessage`]s and renders
//! it through `outstanding`, which supplies the `style` filter and decides whether
//! ANSI codes are emitted.
//!
//! ## Card Layout
//!
//! Each product row is `number title price`:
//! - `number` (4 chars): right-aligned `" 1."`
//! - `title` (padded to [`COL_TITLE`]): truncated with an ellipsis when wider
//! - `price`: `$` plus two decimals, already formatted by the core
//!
//! The image sits on the line below. Inline `data:` images are summarised by type and
//! size since printing a few hundred kilobytes of base64 helps nobody.
//!
//! `use_color` is `None` for automatic terminal detection; tests pass `Some(false)`.

use super::styles::{names, STOREFRONT_THEME};
use super::templates::{MESSAGES_TEMPLATE, STOREFRONT_TEMPLATE};
use anyhow::{anyhow, Result};
use outstanding::{render, render_with_color, truncate_to_width, ThemeChoice};
use serde_json::{json, Value};
use storefrontapp::commands::{CmdMessage, MessageLevel};
use storefrontapp::image::is_data_url;
use storefrontapp::state::RenderState;
use unicode_width::UnicodeWidthStr;

pub const COL_INDEX: usize = 4;
pub const COL_TITLE: usize = 32;
pub const COL_IMAGE: usize = 60;

fn render_template(template: &str, data: &Value, use_color: Option<bool>) -> Result<String> {
    let theme = ThemeChoice::from(&*STOREFRONT_THEME);
    match use_color {
        Some(c) => render_with_color(template, data, theme, c),
        None => render(template, data, theme),
    }
    .map_err(|e| anyhow!("Template error: {}", e))
}

pub fn render_storefront(state: &RenderState, use_color: Option<bool>) -> Result<String> {
    render_template(STOREFRONT_TEMPLATE, &build_storefront_value(state), use_color)
}

pub fn render_messages(messages: &[CmdMessage], use_color: Option<bool>) -> Result<String> {
    if messages.is_empty() {
        return Ok(String::new());
    }
    let messages: Vec<Value> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            json!({ "content": msg.content, "style": style })
        })
        .collect();
    render_template(MESSAGES_TEMPLATE, &json!({ "messages": messages }), use_color)
}

/// Template data for the full storefront view.
pub fn build_storefront_value(state: &RenderState) -> Value {
    let indent = " ".repeat(COL_INDEX + 1);
    let cards: Vec<Value> = state
        .products
        .iter()
        .map(|card| {
            json!({
                "number": format!("{:>width$}", format!("{}.", card.index + 1), width = COL_INDEX),
                "title": pad_to_width(&truncate_to_width(&card.title, COL_TITLE), COL_TITLE),
                "price": format!("${}", card.price),
                "image": describe_image(&card.image),
                "indent": indent,
            })
        })
        .collect();

    json!({
        "message": state.message,
        "message_action": state.message_action,
        "editing_message": state.editing_message,
        "message_draft": state.message_draft,
        "message_error": state.message_error,
        "cards": cards,
        "adding_product": state.adding_product,
        "new_product": {
            "title": state.new_product.title,
            "price": state.new_product.price,
            "image": describe_image(&state.new_product.image),
        },
        "add_product_error": state.add_product_error,
        "upload_pending": state.upload_pending,
    })
}

/// A short, printable description of an image handle.
pub fn describe_image(handle: &str) -> String {
    if handle.is_empty() {
        return "(no image)".to_string();
    }
    if is_data_url(handle) {
        let (header, payload) = handle.split_once(',').unwrap_or((handle, ""));
        let mime = header
            .trim_start_matches("data:")
            .split(';')
            .next()
            .filter(|m| !m.is_empty())
            .unwrap_or("unknown");
        return format!("{} inline, {}", mime, human_size(decoded_len(payload)));
    }
    truncate_to_width(handle, COL_IMAGE)
}

fn decoded_len(base64: &str) -> usize {
    let padding = base64.bytes().rev().take_while(|b| *b == b'=').count();
    (base64.len() / 4 * 3).saturating_sub(padding)
}

fn human_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

fn pad_to_width(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
