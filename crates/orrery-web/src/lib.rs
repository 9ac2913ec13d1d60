pub mod runner;

pub use runner::SimRunner;

#[doc(hidden)]
pub use js_sys;

use wasm_bindgen::JsValue;

/// Collect names into a JS array (slider labels, tooltip lookups).
pub fn names_array<'a>(names: impl Iterator<Item = &'a str>) -> js_sys::Array {
    names.map(JsValue::from_str).collect()
}

/// Generate all `#[wasm_bindgen]` exports for a simulation.
///
/// Generates:
/// - `thread_local!` storage for the SimRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, frame, pause/resume, pointer input, accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod sim;
/// use sim::MySim;
///
/// orrery_web::export_sim!(MySim, "my-sim");
/// ```
///
/// The `manifest` variant additionally exports `sim_init_with_manifest(json)` and
/// requires an inherent `with_manifest(BodyManifest) -> Self` constructor.
///
/// # Arguments
///
/// - `$sim_type`: The struct type that implements `orrery_engine::Simulation`
/// - `$sim_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_sim {
    ($sim_type:ty, $sim_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SimRunner<$sim_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SimRunner<$sim_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Simulation not initialized. Call sim_init() first.");
                f(runner)
            })
        }

        fn install_runner(sim: $sim_type) -> bool {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let mut runner = $crate::SimRunner::new(sim);
            let ok = match runner.init() {
                Ok(()) => {
                    log::info!("{}: initialized", $sim_name);
                    true
                }
                Err(err) => {
                    log::error!("{}: initialization failed: {}", $sim_name, err);
                    false
                }
            };

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            ok
        }

        /// Returns `false` when the body table is invalid; the runner then stays inert.
        #[wasm_bindgen]
        pub fn sim_init() -> bool {
            install_runner(<$sim_type>::new())
        }

        /// `now_ms` is the host's frame timestamp. Returns whether to request another frame.
        #[wasm_bindgen]
        pub fn sim_frame(now_ms: f64) -> bool {
            with_runner(|r| r.frame(now_ms / 1000.0))
        }

        #[wasm_bindgen]
        pub fn sim_pause() {
            with_runner(|r| r.pause());
        }

        /// Returns `true` when the host must request a frame to restart the loop.
        #[wasm_bindgen]
        pub fn sim_resume() -> bool {
            with_runner(|r| r.resume())
        }

        #[wasm_bindgen]
        pub fn sim_toggle_pause() -> bool {
            with_runner(|r| r.toggle_pause())
        }

        #[wasm_bindgen]
        pub fn sim_is_paused() -> bool {
            with_runner(|r| r.is_paused())
        }

        #[wasm_bindgen]
        pub fn sim_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.pointer_down(x, y));
        }

        #[wasm_bindgen]
        pub fn sim_pointer_up() {
            with_runner(|r| r.pointer_up());
        }

        /// Returns the tooltip text for the body under the pointer.
        #[wasm_bindgen]
        pub fn sim_pointer_move(x: f32, y: f32) -> Option<String> {
            with_runner(|r| r.pointer_move(x, y).map(str::to_owned))
        }

        #[wasm_bindgen]
        pub fn sim_wheel(delta_y: f32) {
            with_runner(|r| r.wheel(delta_y));
        }

        #[wasm_bindgen]
        pub fn sim_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        #[wasm_bindgen]
        pub fn sim_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        /// Body table as JSON, for the host's mesh and texture setup.
        #[wasm_bindgen]
        pub fn sim_manifest_json() -> Option<String> {
            with_runner(|r| {
                let manifest = r.manifest()?;
                match manifest.to_json() {
                    Ok(json) => Some(json),
                    Err(err) => {
                        log::error!("{}: manifest serialization failed: {}", $sim_name, err);
                        None
                    }
                }
            })
        }

        #[wasm_bindgen]
        pub fn sim_planet_names() -> $crate::js_sys::Array {
            with_runner(|r| {
                $crate::names_array(
                    r.context()
                        .scene
                        .of_kind(BodyKind::Planet)
                        .map(|b| b.name.as_str()),
                )
            })
        }

        #[wasm_bindgen]
        pub fn sim_body_name(id: u32) -> Option<String> {
            with_runner(|r| r.context().scene.get(BodyId(id)).map(|b| b.name.clone()))
        }

        /// Wire code of the body's kind, or -1 for an unknown id.
        #[wasm_bindgen]
        pub fn sim_body_kind(id: u32) -> f32 {
            with_runner(|r| r.context().scene.get(BodyId(id)).map_or(-1.0, |b| b.kind.code()))
        }

        #[wasm_bindgen]
        pub fn sim_body_radius(id: u32) -> f32 {
            with_runner(|r| r.context().scene.get(BodyId(id)).map_or(0.0, |b| b.radius))
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_shared_ptr() -> *const f32 {
            with_runner(|r| r.shared_ptr())
        }

        #[wasm_bindgen]
        pub fn get_shared_len() -> u32 {
            with_runner(|r| r.shared_len())
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }

        #[wasm_bindgen]
        pub fn get_effect_time() -> f32 {
            with_runner(|r| r.effect_time())
        }

        #[wasm_bindgen]
        pub fn get_camera_uniform() -> Vec<f32> {
            with_runner(|r| r.camera_uniform().to_vec())
        }
    };

    // Variant accepting a JSON body table at init
    ($sim_type:ty, $sim_name:literal, manifest) => {
        $crate::export_sim!($sim_type, $sim_name);

        /// Like `sim_init`, with the body table supplied as JSON.
        #[wasm_bindgen]
        pub fn sim_init_with_manifest(json: &str) -> bool {
            match BodyManifest::from_json(json) {
                Ok(manifest) => install_runner(<$sim_type>::with_manifest(manifest)),
                Err(err) => {
                    let _ = console_log::init_with_level(log::Level::Info);
                    log::error!("{}: {}", $sim_name, err);
                    false
                }
            }
        }
    };
}
