//! # API Facade
//!
//! [`StorefrontApi`] is the single entry point for a storefront session, whatever UI
//! drives it. It owns the [`ViewState`], the store and the storage keys, and forwards
//! each call to the matching transition in [`crate::commands`].
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Presentation**: it returns [`CmdResult`] and [`RenderState`], never strings
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `StorefrontApi<FsStore>`
//! - Testing: `StorefrontApi<MemStore>`
//!
//! ## Lifecycle
//!
//! [`StorefrontApi::open`] builds the default state and runs the startup load once.
//! After that every transition runs to completion before the next call.

use crate::commands::{self, add, message, prices, remove, CmdResult};
use crate::error::Result;
use crate::events::Event;
use crate::state::{RenderState, UploadTicket, ViewState};
use crate::store::{KeyValueStore, StorageKeys};

pub struct StorefrontApi<S: KeyValueStore> {
    store: S,
    keys: StorageKeys,
    state: ViewState,
}

impl<S: KeyValueStore> StorefrontApi<S> {
    /// Creates a session with default keys and loads the persisted snapshot.
    pub fn open(store: S) -> Result<Self> {
        Self::open_with_keys(store, StorageKeys::default())
    }

    pub fn open_with_keys(store: S, keys: StorageKeys) -> Result<Self> {
        let mut api = Self {
            store,
            keys,
            state: ViewState::new(),
        };
        commands::load::run(&mut api.state, &api.store, &api.keys)?;
        Ok(api)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn render(&self) -> RenderState {
        self.state.render()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    // --- Message ---

    pub fn begin_edit_message(&mut self) -> CmdResult {
        message::begin_edit(&mut self.state)
    }

    pub fn edit_message_draft(&mut self, text: impl Into<String>) -> CmdResult {
        message::edit_draft(&mut self.state, text)
    }

    pub fn submit_message(&mut self, draft: impl Into<String>) -> Result<CmdResult> {
        message::submit(&mut self.state, &self.store, &self.keys, draft)
    }

    // --- Prices ---

    pub fn begin_edit_prices(&mut self) -> CmdResult {
        prices::begin_edit(&mut self.state)
    }

    pub fn edit_price_field(&mut self, index: usize, text: impl Into<String>) -> CmdResult {
        prices::edit_field(&mut self.state, index, text)
    }

    pub fn submit_prices(&mut self, buffer: &[String]) -> Result<CmdResult> {
        prices::submit(&mut self.state, &self.store, &self.keys, buffer)
    }

    /// Submits whatever is currently in the price-edit buffer.
    pub fn submit_price_buffer(&mut self) -> Result<CmdResult> {
        let buffer = self.state.price_edit.buffer.clone();
        self.submit_prices(&buffer)
    }

    // --- Add product ---

    pub fn begin_add_product(&mut self) -> CmdResult {
        add::begin(&mut self.state)
    }

    pub fn edit_new_product_title(&mut self, text: impl Into<String>) -> CmdResult {
        add::edit_title(&mut self.state, text)
    }

    pub fn edit_new_product_price(&mut self, text: impl Into<String>) -> CmdResult {
        add::edit_price(&mut self.state, text)
    }

    pub fn select_image_file(&mut self) -> CmdResult {
        add::select_image_file(&mut self.state)
    }

    pub fn image_ready(&mut self, ticket: UploadTicket, data: impl Into<String>) -> CmdResult {
        add::image_ready(&mut self.state, ticket, data)
    }

    pub fn submit_new_product(&mut self, title: &str, price: &str, image: &str) -> Result<CmdResult> {
        add::submit(&mut self.state, &self.store, &self.keys, title, price, image)
    }

    /// Submits the add form from its draft fields.
    pub fn submit_new_product_draft(&mut self) -> Result<CmdResult> {
        add::submit_draft(&mut self.state, &self.store, &self.keys)
    }

    // --- Remove ---

    pub fn remove_product(&mut self, index: usize) -> Result<CmdResult> {
        remove::run(&mut self.state, &self.store, &self.keys, index)
    }

    /// Routes a presentation event to its transition.
    pub fn dispatch(&mut self, event: Event) -> Result<CmdResult> {
        match event {
            Event::BeginEditMessage => Ok(self.begin_edit_message()),
            Event::EditMessageDraft { text } => Ok(self.edit_message_draft(text)),
            Event::SubmitMessage { text } => self.submit_message(text),
            Event::BeginEditPrices => Ok(self.begin_edit_prices()),
            Event::EditPriceField { index, text } => Ok(self.edit_price_field(index, text)),
            Event::SubmitPrices { prices } => self.submit_prices(&prices),
            Event::BeginAddProduct => Ok(self.begin_add_product()),
            Event::EditNewProductTitle { text } => Ok(self.edit_new_product_title(text)),
            Event::EditNewProductPrice { text } => Ok(self.edit_new_product_price(text)),
            Event::SelectImageFile => Ok(self.select_image_file()),
            Event::ImageReady { ticket, data } => Ok(self.image_ready(ticket, data)),
            Event::SubmitNewProduct { title, price } => {
                add::edit_title(&mut self.state, title);
                add::edit_price(&mut self.state, price);
                self.submit_new_product_draft()
            }
            Event::RemoveProduct { index } => self.remove_product(index),
        }
    }
}
