//! Console Logging
//!
//! Tagged messages to the browser console. On non-wasm targets (unit tests)
//! messages go to stderr instead.

pub fn info(tag: &str, msg: &str) {
    let line = format!("[{}] {}", tag, msg);
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&line.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", line);
}

pub fn error(tag: &str, msg: &str) {
    let line = format!("[{}] {}", tag, msg);
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&line.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", line);
}
