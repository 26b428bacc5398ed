//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use loanlens::Config;

use crate::components::{Nav, Toast};
use crate::pages::{Admin, Bank, Home, User};
use crate::state::provide_app_context;

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_app_context(config);

    view! {
        <Router>
            <div class="min-h-screen bg-slate-50 text-slate-900 flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/user" view=User />
                        <Route path="/bank" view=Bank />
                        <Route path="/admin" view=Admin />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-slate-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-xl font-medium transition-colors"
            >
                "Back to home"
            </A>
        </div>
    }
}
