//! # CLI Commands
//!
//! Responsibilities:
//!
//! 1. **Logging**: install a `tracing` subscriber writing to stderr
//! 2. **Context Setup**: load config, open the store, open the session
//! 3. **Dispatch**: drive one flow through [`StorefrontApi`]
//! 4. **Output**: print the resulting view and messages
//! 5. **Exit status**: a rejected submission is returned as an error

use super::render;
use super::setup::{Cli, Commands, OutputFormat, PriceAssignment};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use storefrontapp::api::StorefrontApi;
use storefrontapp::commands::{CmdResult, MessageLevel};
use storefrontapp::config::StorefrontConfig;
use storefrontapp::events::Event;
use storefrontapp::image;
use storefrontapp::store::fs_backend::FsStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "STOREFRONT_LOG";

struct AppContext {
    api: StorefrontApi<FsStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;

    let command = cli.command.unwrap_or(Commands::Show {
        output: OutputFormat::Text,
    });

    // Config only reports; it must not create or touch the data directory.
    if let Commands::Config = command {
        return handle_config(&config);
    }

    let mut ctx = init_context(&config)?;

    match command {
        Commands::Show { output } => handle_show(&ctx, output),
        Commands::Message { text } => handle_message(&mut ctx, text.join(" ")),
        Commands::Add {
            title,
            price,
            image,
            image_ref,
        } => handle_add(&mut ctx, title.join(" "), price, image, image_ref),
        Commands::Remove { number } => handle_remove(&mut ctx, number),
        Commands::Prices { assignments } => handle_prices(&mut ctx, &assignments),
        Commands::Events => handle_events(&mut ctx),
        Commands::Config => Ok(()),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<StorefrontConfig> {
    let mut config = StorefrontConfig::load()?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    Ok(config)
}

fn init_context(config: &StorefrontConfig) -> Result<AppContext> {
    let root = config.resolve_data_dir()?;
    debug!(data_dir = %root.display(), "opening storefront");
    let api = StorefrontApi::open_with_keys(FsStore::new(root), config.storage_keys())?;
    Ok(AppContext { api })
}

fn handle_config(config: &StorefrontConfig) -> Result<()> {
    let mut value = serde_json::to_value(config)?;
    value["data_dir"] = serde_json::to_value(config.resolve_data_dir()?)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn handle_show(ctx: &AppContext, output: OutputFormat) -> Result<()> {
    let state = ctx.api.render();
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&state)?),
        OutputFormat::Text => print_storefront(ctx)?,
    }
    Ok(())
}

fn handle_message(ctx: &mut AppContext, text: String) -> Result<()> {
    ctx.api.begin_edit_message();
    ctx.api.edit_message_draft(text.clone());
    let result = ctx.api.submit_message(text)?;
    finish(ctx, result)
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    price: String,
    image: Option<PathBuf>,
    image_ref: Option<String>,
) -> Result<()> {
    ctx.api.begin_add_product();
    ctx.api.edit_new_product_title(title);
    ctx.api.edit_new_product_price(price);

    let mut result = CmdResult::default();
    let data = match (image, image_ref) {
        (Some(path), _) => Some(load_image(&path)?),
        (None, Some(handle)) => Some(handle),
        (None, None) => None,
    };
    if let Some(data) = data {
        let ticket = ctx
            .api
            .select_image_file()
            .upload_ticket
            .ok_or_else(|| anyhow!("No upload ticket issued"))?;
        result
            .messages
            .extend(ctx.api.image_ready(ticket, data).messages);
    }

    let submitted = ctx.api.submit_new_product_draft()?;
    result.messages.extend(submitted.messages);
    result.affected_products = submitted.affected_products;
    finish(ctx, result)
}

fn load_image(path: &Path) -> Result<String> {
    let data = image::read_data_url(path)
        .with_context(|| format!("Could not read image {}", path.display()))?;
    debug!(path = %path.display(), bytes = data.len(), "image loaded");
    Ok(data)
}

fn handle_remove(ctx: &mut AppContext, number: u64) -> Result<()> {
    let index = usize::try_from(number - 1)?;
    let result = ctx.api.remove_product(index)?;
    finish(ctx, result)
}

fn handle_prices(ctx: &mut AppContext, assignments: &[PriceAssignment]) -> Result<()> {
    ctx.api.begin_edit_prices();
    let mut result = CmdResult::default();
    for assignment in assignments {
        let edit = ctx
            .api
            .edit_price_field(assignment.index(), assignment.text.clone());
        result.messages.extend(edit.messages);
    }
    let submitted = ctx.api.submit_price_buffer()?;
    result.messages.extend(submitted.messages);
    result.affected_products = submitted.affected_products;
    finish(ctx, result)
}

/// Applies one JSON event per stdin line and prints the render state after each.
fn handle_events(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    for (n, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: Event = serde_json::from_str(&line)
            .with_context(|| format!("Invalid event on line {}", n + 1))?;
        debug!(?event, "dispatching");
        let result = ctx.api.dispatch(event)?;
        for message in &result.messages {
            debug!(level = ?message.level, "{}", message.content);
        }
        println!("{}", serde_json::to_string(&ctx.api.render())?);
    }
    Ok(())
}

fn print_storefront(ctx: &AppContext) -> Result<()> {
    let out = render::render_storefront(&ctx.api.render(), None)?;
    println!("{}", out.trim_end());
    Ok(())
}

/// Prints the view plus any non-error messages; a rejection becomes the error.
fn finish(ctx: &AppContext, result: CmdResult) -> Result<()> {
    print_storefront(ctx)?;

    let (errors, others): (Vec<_>, Vec<_>) = result
        .messages
        .into_iter()
        .partition(|m| m.level == MessageLevel::Error);

    let out = render::render_messages(&others, None)?;
    if !out.is_empty() {
        println!();
        print!("{}", out);
    }

    match errors.into_iter().next() {
        Some(rejection) => Err(anyhow!(rejection.content)),
        None => Ok(()),
    }
}
