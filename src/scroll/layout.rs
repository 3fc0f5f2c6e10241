use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use super::engine::{HeroRegion, LayoutSnapshot, Region};
use crate::config::ScrollConfig;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("no window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("could not read viewport height")]
    ViewportHeight,
}

fn window() -> Result<Window, LayoutError> {
    web_sys::window().ok_or(LayoutError::NoWindow)
}

fn document(window: &Window) -> Result<Document, LayoutError> {
    window.document().ok_or(LayoutError::NoDocument)
}

pub fn viewport_height(window: &Window) -> Result<f64, LayoutError> {
    window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .ok_or(LayoutError::ViewportHeight)
}

/// Bounding boxes of every element tagged with `class`, in document order.
pub fn dark_regions(document: &Document, class: &str) -> Vec<Region> {
    let elements = document.get_elements_by_class_name(class);
    (0..elements.length())
        .filter_map(|i| elements.item(i))
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            Region::new(rect.top(), rect.bottom())
        })
        .collect()
}

pub fn hero_region(document: &Document, anchor: &str) -> Option<HeroRegion> {
    let element = document
        .get_element_by_id(anchor)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(HeroRegion {
        top: element.get_bounding_client_rect().top(),
        content_height: f64::from(element.offset_height()),
    })
}

/// Reads the current layout. Nothing is cached between calls.
pub fn snapshot(config: &ScrollConfig) -> Result<LayoutSnapshot, LayoutError> {
    let window = window()?;
    let document = document(&window)?;
    Ok(LayoutSnapshot {
        viewport_height: viewport_height(&window)?,
        dark_regions: dark_regions(&document, config.dark_class),
        hero: hero_region(&document, config.hero_anchor),
    })
}

/// Document offset of the element with `id`, if present.
pub fn section_offset(id: &str) -> Result<Option<f64>, LayoutError> {
    let window = window()?;
    let document = document(&window)?;
    Ok(document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .map(|element| f64::from(element.offset_top())))
}

pub fn scroll_to_top() -> Result<(), LayoutError> {
    window()?.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}
