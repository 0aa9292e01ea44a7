//! Prime - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for sending ether through the injected wallet
//! and browsing the transfers recorded on chain.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (wallet connection)                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (provides TransactionContext)                   │
//! │  ├── Welcome (send form, Loader while mining)                │
//! │  └── Transactions (history, newest first)                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`context`] - Store signal and user intents shared by the views
//! - [`components`] - UI components (Header, Welcome, Transactions, etc.)
//! - [`services`] - Browser bindings (wallet provider, localStorage, alert)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod context;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use context::{use_transactions, BrowserOrchestrator, TransactionContext};
pub use components::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Set up logging and mount the app on `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Prime - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let ctx = TransactionContext::new();
    provide_context(ctx.clone());
    ctx.start();

    view! {
        <Header/>

        <div class="container">
            <Welcome/>
            <Transactions/>
        </div>

        <Footer/>
    }
}
