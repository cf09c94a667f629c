use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Shell for the hotel-owner screens: sidebar navigation plus the routed
/// page content.
#[component]
pub fn OwnerLayout() -> impl IntoView {
    view! {
        <div class="flex h-screen pt-16">
            <div class="w-16 md:w-64 border-r border-gray-200 pt-6 flex flex-col gap-1 bg-white">
                <a
                    href="/owner"
                    class="flex items-center gap-3 px-4 py-3 text-gray-700 hover:bg-blue-50 hover:text-blue-700 transition-colors"
                >
                    <i class="fas fa-chart-line w-5"></i>
                    <span class="hidden md:inline text-sm font-medium">"Dashboard"</span>
                </a>
                <a
                    href="/owner/add-room"
                    class="flex items-center gap-3 px-4 py-3 text-gray-700 hover:bg-blue-50 hover:text-blue-700 transition-colors"
                >
                    <i class="fas fa-plus w-5"></i>
                    <span class="hidden md:inline text-sm font-medium">"Add Room"</span>
                </a>
            </div>

            <div class="flex-1 overflow-y-auto p-4 pt-10 md:px-10">
                <Outlet/>
            </div>
        </div>
    }
}
