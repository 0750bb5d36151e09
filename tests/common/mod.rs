//! Common test utilities for integration tests.
//!
//! Provides an in-memory recipe registry and host context that the
//! controller can be driven against without a game client.


pub use mocks::*;

use craftview::prelude::*;
use serde_json::json;

/// Install a log subscriber so controller output is visible under
/// `cargo test -- --nocapture`. Safe to call from every test.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds a recipe record whose payload lists its input and output keys.
///
/// The fixture registry filters on these lists to answer focus queries.
pub fn recipe(kind: &str, name: &str, inputs: &[&str], outputs: &[&str]) -> Recipe {
    Recipe::new(
        RecipeKind::new(kind),
        json!({
            "name": name,
            "inputs": inputs,
            "outputs": outputs,
        }),
    )
}

/// A registry with two categories, handlers for both recipe kinds, and a
/// small spread of recipes around planks and iron.
pub fn sample_registry() -> FixtureRegistry {
    FixtureRegistry::new()
        .with_category(RecipeCategory::new("crafting", "Crafting"))
        .with_category(RecipeCategory::new("smelting", "Smelting"))
        .with_handler("craft.shaped")
        .with_handler("smelt.basic")
        .with_recipe(
            "crafting",
            recipe("craft.shaped", "planks", &["minecraft:log"], &["minecraft:planks"]),
        )
        .with_recipe(
            "crafting",
            recipe("craft.shaped", "stick", &["minecraft:planks"], &["minecraft:stick"]),
        )
        .with_recipe(
            "crafting",
            recipe(
                "craft.shaped",
                "iron_block",
                &["minecraft:iron_ingot"],
                &["minecraft:iron_block"],
            ),
        )
        .with_recipe(
            "smelting",
            recipe(
                "smelt.basic",
                "iron_ingot",
                &["minecraft:iron_ore"],
                &["minecraft:iron_ingot"],
            ),
        )
        .with_recipe(
            "smelting",
            recipe(
                "smelt.basic",
                "charcoal",
                &["minecraft:log"],
                &["minecraft:charcoal"],
            ),
        )
}
