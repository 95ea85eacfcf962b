//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `checkout_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("checkout_core ping={}", checkout_core::ping());
    println!("checkout_core version={}", checkout_core::core_version());
}
