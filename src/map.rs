//! Pin Map
//!
//! Owns the Leaflet map and one layer group per category. Only the active
//! category's layer is attached at a time.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::AppConfig;
use crate::leaflet::{self, DivIconOptions, LayerGroup, MapOptions, TileLayerOptions};
use crate::logging;
use crate::models::{Category, Location};

pub struct PinMap {
    map: leaflet::Map,
    landmark_pins: LayerGroup,
    business_pins: LayerGroup,
}

impl PinMap {
    /// Build the map inside `element` with the landmarks layer attached
    pub fn new(element: &web_sys::HtmlElement, config: &AppConfig) -> Result<Self, JsValue> {
        let options = serde_wasm_bindgen::to_value(&MapOptions { zoom_control: false })?;
        let map = leaflet::create_map(element, &options);
        map.set_view(&leaflet::lat_lng(config.center.0, config.center.1), config.zoom);

        let tile_options = serde_wasm_bindgen::to_value(&TileLayerOptions {
            max_zoom: config.max_zoom,
            attribution: &config.attribution,
        })?;
        leaflet::tile_layer(&config.tile_url, &tile_options).add_to(&map);

        let landmark_pins = leaflet::layer_group();
        landmark_pins.add_to(&map);
        let business_pins = leaflet::layer_group();

        logging::info("MAP", "Map created");
        Ok(Self { map, landmark_pins, business_pins })
    }

    fn layer(&self, category: Category) -> &LayerGroup {
        match category {
            Category::Landmarks => &self.landmark_pins,
            Category::Businesses => &self.business_pins,
        }
    }

    /// Attach `category`'s pins and detach the rest
    pub fn show_only(&self, category: Category) {
        for other in Category::ALL {
            if other != category {
                self.map.remove_layer(self.layer(other));
            }
        }
        if !self.map.has_layer(self.layer(category)) {
            self.map.add_layer(self.layer(category));
        }
    }

    pub fn invalidate_size(&self) {
        self.map.invalidate_size();
    }

    /// Replace the pins for `category`. Pin clicks do not reach the map.
    pub fn set_pins<F>(
        &self,
        category: Category,
        locations: &[Location],
        on_click: F,
    ) -> Result<(), JsValue>
    where
        F: Fn(Category, Location) + Copy + 'static,
    {
        let group = self.layer(category);
        group.clear_layers();

        let icon_options = serde_wasm_bindgen::to_value(&pin_icon(category))?;
        let icon = leaflet::div_icon(&icon_options);
        let marker_options = leaflet::marker_options(&icon)?;

        for location in locations {
            let position = leaflet::lat_lng(location.lat, location.lng);
            let marker = leaflet::marker(&position, &marker_options);
            let location = location.clone();
            let cb = Closure::<dyn FnMut(JsValue)>::new(move |ev: JsValue| {
                leaflet::stop_propagation(&ev);
                on_click(category, location.clone());
            });
            marker.on("click", cb.as_ref().unchecked_ref());
            cb.forget();
            group.add_layer(&marker);
        }

        logging::info("MAP", &format!("Placed {} {} pins", locations.len(), category.as_str()));
        Ok(())
    }

    /// Handler for clicks on the bare map
    pub fn on_map_click<F>(&self, handler: F)
    where
        F: Fn() + 'static,
    {
        let cb = Closure::<dyn FnMut(JsValue)>::new(move |_ev: JsValue| handler());
        self.map.on("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

fn pin_icon(category: Category) -> DivIconOptions {
    DivIconOptions {
        html: format!(
            r#"<div class="custom-pin {}">{}</div>"#,
            category.pin_class(),
            category.pin_glyph()
        ),
        class_name: String::new(),
        icon_size: [32, 32],
        icon_anchor: [16, 16],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_icon_markup() {
        let icon = pin_icon(Category::Businesses);
        assert_eq!(icon.html, r#"<div class="custom-pin business-pin">☕</div>"#);
        assert_eq!(icon.icon_anchor, [16, 16]);
    }
}
