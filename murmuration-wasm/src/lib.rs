use murmuration_core::{ConfigError, FlockConfig, Vector2D, Vector3D};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

fn to_js_error(err: ConfigError) -> JsValue {
    js_sys::Error::new(&format!("invalid flock configuration: {}", err)).into()
}

/// A 3D flock for a WebGL or scene-graph renderer.
///
/// The renderer reads the flock straight out of wasm memory: `flock()` points
/// at `flock_len()` floats laid out as `[x, y, z, dx, dy, dz]` per starling.
/// The view is invalidated by the next `tick()`.
#[wasm_bindgen]
pub struct Murmuration {
    inner: murmuration_core::Murmuration<Vector3D>,
}

#[wasm_bindgen]
impl Murmuration {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, depth: f32, size: usize) -> Result<Murmuration, JsValue> {
        console_log!(
            "Initializing murmuration with {} starlings in {}x{}x{}",
            size,
            width,
            height,
            depth
        );

        let inner = murmuration_core::Murmuration::new(
            Vector3D::new(width, height, depth),
            FlockConfig::with_population(size),
        )
        .map_err(to_js_error)?;

        Ok(Murmuration { inner })
    }

    pub fn tick(&mut self) {
        self.inner.tick();
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn width(&self) -> f32 {
        self.inner.width()
    }

    pub fn height(&self) -> f32 {
        self.inner.height()
    }

    pub fn depth(&self) -> f32 {
        self.inner.depth()
    }

    pub fn stride(&self) -> usize {
        self.inner.stride()
    }

    pub fn flock(&self) -> *const f32 {
        self.inner.flock().as_ptr()
    }

    pub fn flock_len(&self) -> usize {
        self.inner.flock().len()
    }

    /// A copy of the flock for callers that cannot view wasm memory.
    pub fn flock_copy(&self) -> Vec<f32> {
        self.inner.flock().to_vec()
    }
}

/// A 2D flock for a canvas renderer; `[x, y, dx, dy]` per starling.
#[wasm_bindgen]
pub struct Murmuration2D {
    inner: murmuration_core::Murmuration<Vector2D>,
}

#[wasm_bindgen]
impl Murmuration2D {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, size: usize) -> Result<Murmuration2D, JsValue> {
        console_log!(
            "Initializing 2D murmuration with {} starlings in {}x{}",
            size,
            width,
            height
        );

        let inner = murmuration_core::Murmuration::<Vector2D>::with_size(width, height, size)
            .map_err(to_js_error)?;

        Ok(Murmuration2D { inner })
    }

    pub fn tick(&mut self) {
        self.inner.tick();
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn width(&self) -> f32 {
        self.inner.width()
    }

    pub fn height(&self) -> f32 {
        self.inner.height()
    }

    pub fn stride(&self) -> usize {
        self.inner.stride()
    }

    pub fn flock(&self) -> *const f32 {
        self.inner.flock().as_ptr()
    }

    pub fn flock_len(&self) -> usize {
        self.inner.flock().len()
    }

    pub fn flock_copy(&self) -> Vec<f32> {
        self.inner.flock().to_vec()
    }
}
