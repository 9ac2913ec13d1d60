use wasm_bindgen::prelude::*;
use orrery_engine::*;

pub mod animation;
pub mod bodies;
pub mod game;
pub mod glow;
use game::SolarSystem;

orrery_web::export_sim!(SolarSystem, "solar-system", manifest);
