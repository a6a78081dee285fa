//! Browser glue: DOM score readout and sprite sheet loading

use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlImageElement};

use super::ScoreReadout;
use crate::assets::{AssetError, AssetGate, SheetId};
use crate::renderer::CanvasSurface;

/// Writes the score into a DOM element
pub struct DomScoreReadout {
    element: Option<Element>,
}

impl DomScoreReadout {
    pub fn new(document: &Document, id: &str) -> Self {
        let element = document.get_element_by_id(id);
        if element.is_none() {
            log::warn!("No #{} element, score will not be shown", id);
        }
        Self { element }
    }
}

impl ScoreReadout for DomScoreReadout {
    fn show_score(&mut self, score: u32) {
        if let Some(el) = &self.element {
            el.set_text_content(Some(&score.to_string()));
        }
    }
}

fn load_error(sheet: SheetId, err: wasm_bindgen::JsValue) -> AssetError {
    AssetError {
        sheet,
        reason: err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    }
}

/// Start decoding every sheet, then wait for each answer. Sheets that decode
/// are handed to the surface; failures are only recorded.
pub async fn load_sheets(surface: &mut CanvasSurface) -> AssetGate {
    let mut gate = AssetGate::for_all_sheets();

    let mut pending = Vec::with_capacity(SheetId::ALL.len());
    for sheet in SheetId::ALL {
        match HtmlImageElement::new() {
            Ok(image) => {
                image.set_src(sheet.path());
                let decoded = JsFuture::from(image.decode());
                pending.push((sheet, image, decoded));
            }
            Err(e) => gate.record(sheet, Err(load_error(sheet, e))),
        }
    }

    for (sheet, image, decoded) in pending {
        match decoded.await {
            Ok(_) => {
                surface.set_sheet(sheet, image);
                gate.record(sheet, Ok(()));
            }
            Err(e) => gate.record(sheet, Err(load_error(sheet, e))),
        }
    }

    gate
}
