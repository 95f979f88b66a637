// src/backend/utils/logging.rs
// Canister logs go through the IC debug print; native builds (tests) use stdout.

pub fn emit(level: &str, message: &str) {
    #[cfg(target_arch = "wasm32")]
    ic_cdk::println!("{} {}", level, message);
    #[cfg(not(target_arch = "wasm32"))]
    println!("{} {}", level, message);
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::utils::logging::emit("INFO:", &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::utils::logging::emit("WARN:", &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::utils::logging::emit("ERROR:", &format!($($arg)*))
    };
}
