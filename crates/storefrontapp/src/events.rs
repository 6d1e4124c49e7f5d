//! Inbound events from a presentation layer.
//!
//! [`Event`] mirrors every user action a storefront UI can forward. It is serde-tagged
//! so front ends that are not written in Rust (or a test script) can send JSON:
//!
//! ```json
//! {"event": "submit_message", "text": "hi"}
//! {"event": "edit_price_field", "index": 0, "text": "12"}
//! {"event": "remove_product", "index": 1}
//! ```
//!
//! Dispatch happens in [`crate::api::StorefrontApi::dispatch`].

use crate::state::UploadTicket;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    BeginEditMessage,
    EditMessageDraft { text: String },
    SubmitMessage { text: String },

    BeginEditPrices,
    EditPriceField { index: usize, text: String },
    SubmitPrices { prices: Vec<String> },

    BeginAddProduct,
    EditNewProductTitle { text: String },
    EditNewProductPrice { text: String },
    SelectImageFile,
    ImageReady { ticket: UploadTicket, data: String },
    SubmitNewProduct { title: String, price: String },

    RemoveProduct { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_tagged_json() {
        let event: Event =
            serde_json::from_str(r#"{"event":"edit_price_field","index":2,"text":"4.5"}"#)
                .unwrap();
        assert_eq!(
            event,
            Event::EditPriceField {
                index: 2,
                text: "4.5".into()
            }
        );

        let event: Event = serde_json::from_str(r#"{"event":"select_image_file"}"#).unwrap();
        assert_eq!(event, Event::SelectImageFile);
    }

    #[test]
    fn test_unknown_event_is_error() {
        assert!(serde_json::from_str::<Event>(r#"{"event":"explode"}"#).is_err());
    }
}
