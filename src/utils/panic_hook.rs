use leptos::logging::log;

/// Routes Rust panics to the browser console with their message and stack.
///
/// Safe to call more than once; only the first call installs the hook.
pub fn init() {
    console_error_panic_hook::set_once();
    log!("[PANIC] Console panic hook installed");
}
