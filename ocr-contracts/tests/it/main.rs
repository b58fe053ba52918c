
mod calls;

#[cfg(not(target_arch = "wasm32"))]
mod deploy;
