//! WebAssembly accessor surface for an out-of-process JS front-end.
//!
//! A thin shell around the core state exposing typed-array accessors. It owns no simulation
//! rules of its own — it is an external-collaborator surface, scoped down to read-only state
//! export plus `step`.
//!
//! The grid and enemy state are fixed-size `[[T; W]; H]` / `[T; N]` arrays chosen for their
//! stack-allocated, non-reallocating layout. Exposing those directly as a pointer would require
//! an unsafe reinterpret across a row-major nested array whose element type varies per field,
//! so this module instead flattens each accessor into a freshly built `Float32Array` per call —
//! a safe copy in place of an unsafe pointer export.

use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

use crate::constants::{H, MAX_ENEMIES, W};
use crate::observation::flatten;
use crate::SimState;

#[wasm_bindgen]
pub struct WasmSimState {
    inner: SimState,
}

#[wasm_bindgen]
impl WasmSimState {
    #[wasm_bindgen(constructor)]
    pub fn new(spawn_interval: u32, seed: Option<u64>) -> WasmSimState {
        WasmSimState {
            inner: SimState::new(spawn_interval, seed),
        }
    }

    /// Steps the simulation once. Returns `[reward, terminated as 0/1, truncated as 0/1]`, or
    /// throws a `JsValue` error for an out-of-range action.
    pub fn step(&mut self, action: usize) -> Result<Vec<f32>, JsValue> {
        let outcome = self
            .inner
            .step(action)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(vec![
            outcome.reward,
            outcome.terminated as u8 as f32,
            outcome.truncated as u8 as f32,
        ])
    }

    #[wasm_bindgen(js_name = tick)]
    pub fn tick(&self) -> u32 {
        self.inner.tick
    }

    #[wasm_bindgen(js_name = aliveEnemyCount)]
    pub fn alive_enemy_count(&self) -> usize {
        self.inner.alive_enemy_count()
    }

    /// The full informative observation vector documented in the crate's `observation`
    /// module, as a flat `Float32Array`.
    #[wasm_bindgen(js_name = observation)]
    pub fn observation(&self) -> Float32Array {
        let obs = flatten(&self.inner);
        Float32Array::from(&obs[..])
    }

    #[wasm_bindgen(js_name = gridData)]
    pub fn grid_data(&self) -> Float32Array {
        let mut out = Vec::with_capacity(H * W);
        for row in &self.inner.grid.grid {
            for &c in row {
                out.push(c as f32);
            }
        }
        Float32Array::from(&out[..])
    }

    #[wasm_bindgen(js_name = enemyXData)]
    pub fn enemy_x_data(&self) -> Float32Array {
        let out: Vec<f32> = self.inner.enemies.x.iter().map(|&v| v as f32).collect();
        Float32Array::from(&out[..])
    }

    #[wasm_bindgen(js_name = enemyYHalfData)]
    pub fn enemy_y_half_data(&self) -> Float32Array {
        let out: Vec<f32> = self.inner.enemies.y_half.iter().map(|&v| v as f32).collect();
        Float32Array::from(&out[..])
    }

    #[wasm_bindgen(js_name = enemyAliveData)]
    pub fn enemy_alive_data(&self) -> Float32Array {
        let out: Vec<f32> = self
            .inner
            .enemies
            .alive
            .iter()
            .map(|&a| a as u8 as f32)
            .collect();
        Float32Array::from(&out[..])
    }

    #[wasm_bindgen(js_name = maxEnemies)]
    pub fn max_enemies(&self) -> usize {
        MAX_ENEMIES
    }
}

/// Enable better panic messages in the browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
