//! Entry point for the WASM application

pub fn main() {
    prime_frontend::mount();
}
