//! Ripples entry point
//!
//! Handles platform-specific initialization: builds the board collection once
//! at startup and hands the rendering layer its data as JSON.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use wasm_bindgen::prelude::*;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use ripples::catalog::{PUZZLE_CATALOG, definition_from_location};
    use ripples::collection::BoardCollection;

    /// Build the full board collection and serialize it for the rendering
    /// layer. Fails loudly if any catalog entry is malformed: the page gets
    /// no boards at all rather than a mislabeled one.
    #[wasm_bindgen]
    pub fn boards_json() -> Result<String, JsValue> {
        let seed = js_sys::Date::now() as u64;
        let mut rng = Pcg32::seed_from_u64(seed);

        let collection = BoardCollection::from_catalog(PUZZLE_CATALOG, &mut rng)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("built {} boards with seed {seed}", collection.len());

        serde_json::to_string(collection.boards()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Serialize the single definition selected by the `q` query parameter
    /// (the single-puzzle page variant).
    #[wasm_bindgen]
    pub fn selected_definition_json() -> Result<String, JsValue> {
        let def = definition_from_location();
        log::info!("selected puzzle: outer category '{}'", def.outer.label);
        serde_json::to_string(def).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Ripples data module ready");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use ripples::catalog::PUZZLE_CATALOG;
    use ripples::collection::BoardCollection;

    env_logger::init();

    let seed: u64 = rand::random();
    let mut rng = Pcg32::seed_from_u64(seed);

    match BoardCollection::from_catalog(PUZZLE_CATALOG, &mut rng) {
        Ok(collection) => {
            log::info!("built {} boards with seed {seed}", collection.len());
            for (i, board) in collection.iter().enumerate() {
                println!("board {i}:");
                for token in &board.words {
                    println!(
                        "  {:>6.1}°  ({:>4.1}, {:>4.1})  {:<12} [{}]",
                        token.theta, token.x, token.y, token.text, token.category
                    );
                }
            }
        }
        Err(e) => {
            log::error!("catalog validation failed: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
