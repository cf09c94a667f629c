use leptos::prelude::*;

use crate::data::seed;
use crate::pages::title::Title;
use crate::utils::money::format_price;

/// Landing page: hero search, featured rooms from the seed data, offers,
/// testimonials, newsletter. Purely presentational apart from the trivial
/// input signals in the hero.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <Hero/>
            <FeaturedDestinations/>
            <ExclusiveOffers/>
            <Testimonials/>
            <NewsLetter/>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let (destination_input, set_destination_input) = create_signal(String::new());
    let (check_in_input, set_check_in_input) = create_signal(String::new());
    let (check_out_input, set_check_out_input) = create_signal(String::new());

    let handle_search = move |_| {
        // Search is presentational on this screen; the destination just
        // lands in the log.
        leptos::logging::log!(
            "searching stays in {:?} from {:?} to {:?}",
            destination_input.get(),
            check_in_input.get(),
            check_out_input.get()
        );
    };

    view! {
        <div class="flex flex-col items-start justify-center px-4 md:px-16 lg:px-24 xl:px-32 text-white bg-slate-900 bg-cover bg-center h-screen">
            <p class="bg-[#49B9FF]/50 px-3.5 py-1 rounded-full mt-20 text-sm">"The Ultimate Hotel Experience"</p>
            <h1 class="font-playfair text-2xl md:text-5xl md:leading-[56px] font-bold md:font-extrabold max-w-xl mt-4">
                "Discover Your Perfect Getaway Destination"
            </h1>
            <p class="max-w-130 mt-2 text-sm md:text-base">
                "Unparalleled luxury and comfort await at the world's most exclusive hotels and resorts. Start your journey today."
            </p>

            <div class="bg-white text-gray-500 rounded-lg px-6 py-4 mt-8 flex flex-col md:flex-row max-md:items-start gap-4 max-md:mx-auto">
                <div class="flex flex-col">
                    <label for="destination" class="text-sm font-medium">"Destination"</label>
                    <input
                        id="destination"
                        type="text"
                        class="rounded border border-gray-200 px-3 py-1.5 mt-1.5 text-sm outline-none"
                        placeholder="Type here"
                        prop:value={destination_input}
                        on:input=move |ev| set_destination_input(event_target_value(&ev))
                    />
                </div>
                <div class="flex flex-col">
                    <label for="check-in" class="text-sm font-medium">"Check in"</label>
                    <input
                        id="check-in"
                        type="date"
                        class="rounded border border-gray-200 px-3 py-1.5 mt-1.5 text-sm outline-none"
                        prop:value={check_in_input}
                        on:input=move |ev| set_check_in_input(event_target_value(&ev))
                    />
                </div>
                <div class="flex flex-col">
                    <label for="check-out" class="text-sm font-medium">"Check out"</label>
                    <input
                        id="check-out"
                        type="date"
                        class="rounded border border-gray-200 px-3 py-1.5 mt-1.5 text-sm outline-none"
                        prop:value={check_out_input}
                        on:input=move |ev| set_check_out_input(event_target_value(&ev))
                    />
                </div>
                <button
                    class="flex items-center justify-center gap-1 rounded-md bg-black py-3 px-4 text-white my-auto cursor-pointer max-md:w-full max-md:py-1"
                    on:click=handle_search
                >
                    <i class="fas fa-magnifying-glass text-sm"></i>
                    <span>"Search"</span>
                </button>
            </div>
        </div>
    }
}

#[component]
fn FeaturedDestinations() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center px-6 md:px-16 lg:px-24 bg-slate-50 py-20">
            <Title
                title="Featured Destinations"
                sub_title="Discover our handpicked selection of exceptional properties around the world, offering unparalleled luxury and unforgettable experiences."
                centered=true
            />

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6 mt-12 w-full max-w-6xl">
                {seed::featured_rooms().into_iter().map(|featured| {
                    let image = featured.room.images.first().cloned().unwrap_or_default();
                    view! {
                        <div class="bg-white rounded-xl overflow-hidden shadow-sm hover:shadow-lg transition-shadow">
                            <img src=image alt="room-img" class="h-40 w-full object-cover"/>
                            <div class="p-4">
                                <p class="font-playfair text-lg text-gray-800">{featured.hotel.name.clone()}</p>
                                <p class="text-xs text-gray-500">{featured.hotel.city.clone()}</p>
                                <div class="flex items-center justify-between mt-3">
                                    <p class="text-sm text-gray-800">
                                        {format!("{} ", format_price(featured.room.price_per_night))}
                                        <span class="text-xs text-gray-500">"/night"</span>
                                    </p>
                                    <p class="text-xs text-amber-500">
                                        <i class="fas fa-star"></i>
                                        {format!(" {:.1}", featured.rating)}
                                    </p>
                                </div>
                            </div>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>

            <a
                href="/my-bookings"
                class="mt-12 px-4 py-2 text-sm font-medium border border-gray-300 rounded bg-white hover:bg-gray-50 transition-all cursor-pointer"
            >
                "View My Bookings"
            </a>
        </div>
    }
}

#[component]
fn ExclusiveOffers() -> impl IntoView {
    let offers = [
        ("Summer Escape Package", "25% OFF", "Enjoy a complimentary night and daily breakfast"),
        ("Romantic Getaway", "20% OFF", "Special couples package including spa treatment"),
        ("Luxury Retreat", "30% OFF", "Book 60 days in advance and save on premium suites"),
    ];

    view! {
        <div class="flex flex-col items-center px-6 md:px-16 lg:px-24 xl:px-32 pt-20 pb-30">
            <div class="flex flex-col md:flex-row items-center justify-between w-full">
                <Title
                    title="Exclusive Offers"
                    sub_title="Take advantage of our limited-time offers and special packages to enhance your stay and create unforgettable memories."
                />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-12 w-full">
                {offers.into_iter().map(|(name, discount, details)| view! {
                    <div class="rounded-xl bg-slate-800 text-white p-6 flex flex-col items-start">
                        <p class="px-3 py-1 text-xs bg-white text-gray-800 font-medium rounded-full">{discount}</p>
                        <p class="text-xl font-medium font-playfair mt-4">{name}</p>
                        <p class="text-sm text-white/70 mt-2">{details}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center px-6 md:px-16 lg:px-24 bg-slate-50 pt-20 pb-30">
            <Title
                title="What Our Guests Say"
                sub_title="Discover why discerning travelers choose StayHaven for their luxury accommodations around the world."
                centered=true
            />

            <div class="flex flex-wrap items-stretch justify-center gap-6 mt-12">
                {seed::testimonials().into_iter().map(|testimonial| view! {
                    <div class="bg-white p-6 rounded-xl shadow max-w-xs">
                        <p class="font-playfair text-lg text-gray-800">{testimonial.name}</p>
                        <p class="text-xs text-gray-500">{testimonial.location}</p>
                        <p class="text-sm text-gray-600 mt-4">{format!("\u{201c}{}\u{201d}", testimonial.quote)}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn NewsLetter() -> impl IntoView {
    let (email_input, set_email_input) = create_signal(String::new());
    let (subscribe_msg, set_subscribe_msg) = create_signal::<Option<String>>(None);

    let handle_subscribe = move |_| {
        if email_input.get().trim().is_empty() {
            set_subscribe_msg(Some("Please enter your email".to_string()));
        } else {
            set_subscribe_msg(Some("Thanks for subscribing!".to_string()));
            set_email_input(String::new());
        }
    };

    view! {
        <div class="flex flex-col items-center max-w-5xl lg:w-full rounded-2xl px-4 py-12 md:py-16 mx-2 lg:mx-auto my-30 bg-gray-900 text-white">
            <Title
                title="Stay Inspired"
                sub_title="Join our newsletter and be the first to discover new destinations, exclusive offers, and travel inspiration."
                centered=true
            />
            <div class="flex flex-col md:flex-row items-center justify-center gap-4 mt-6">
                <input
                    type="text"
                    class="bg-white/10 px-4 py-2.5 border border-white/20 rounded outline-none max-w-66 w-full"
                    placeholder="Enter your email"
                    prop:value={email_input}
                    on:input=move |ev| set_email_input(event_target_value(&ev))
                />
                <button
                    class="flex items-center justify-center gap-2 group bg-black px-4 md:px-7 py-2.5 rounded active:scale-95 transition-all"
                    on:click=handle_subscribe
                >
                    "Subscribe"
                </button>
            </div>
            <div class="mt-3 text-sm text-emerald-400">
                {move || subscribe_msg.get().unwrap_or_default()}
            </div>
            <p class="text-gray-500 mt-6 text-xs text-center">
                "By subscribing, you agree to our Privacy Policy and consent to receive updates."
            </p>
        </div>
    }
}
