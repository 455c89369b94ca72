//! Binary entry point for the storefront dev harness.
//!
//! All real logic lives in the library crate; this just starts the runtime.

#[tokio::main]
async fn main() {
    aura_storefront::run().await;
}
