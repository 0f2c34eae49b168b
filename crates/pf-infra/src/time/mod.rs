#[cfg(not(target_arch = "wasm32"))]
mod delay;
mod system_clock;

#[cfg(not(target_arch = "wasm32"))]
pub use delay::TokioDelay;
pub use system_clock::SystemClock;
