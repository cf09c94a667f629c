use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{ParentRoute, Route, Router, Routes},
    StaticSegment,
};

use crate::pages::home::HomePage;
use crate::pages::my_bookings::MyBookings;
use crate::pages::owner::add_room::AddRoom;
use crate::pages::owner::dashboard::Dashboard;
use crate::pages::owner::layout::OwnerLayout;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <Stylesheet id="leptos" href="/pkg/stayhaven-leptos.css"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico"/>
                <Link rel="preconnect" href="https://fonts.googleapis.com"/>
                <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
                <Link href="https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;500;600;700&family=Outfit:wght@300;400;500&display=swap" rel="stylesheet"/>
                <Link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.">
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("my-bookings") view=MyBookings/>
                    <ParentRoute path=StaticSegment("owner") view=OwnerLayout>
                        <Route path=StaticSegment("") view=Dashboard/>
                        <Route path=StaticSegment("add-room") view=AddRoom/>
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 w-full z-40 bg-white/90 backdrop-blur border-b border-gray-200 px-4 md:px-16 lg:px-24 xl:px-32 h-16 flex items-center justify-between">
            <a href="/" class="font-playfair text-xl font-bold text-gray-900">"StayHaven"</a>
            <div class="flex items-center gap-4 md:gap-8 text-sm text-gray-700">
                <a href="/" class="hover:text-gray-900 transition-colors">"Home"</a>
                <a href="/my-bookings" class="hover:text-gray-900 transition-colors">"My Bookings"</a>
                <a
                    href="/owner"
                    class="border border-gray-300 px-4 py-1.5 rounded-full hover:bg-gray-50 transition-all"
                >
                    "Owner Dashboard"
                </a>
            </div>
        </nav>
    }
}
