use leptos::prelude::*;

use crate::data::seed;
use crate::data::store::revenue;
use crate::pages::title::Title;
use crate::utils::date::format_iso_date;
use crate::utils::money::format_price;

#[component]
pub fn Dashboard() -> impl IntoView {
    // Dashboard totals come straight off the seed; the owner side has no
    // live feed in this build.
    let bookings = seed::user_bookings();
    let total_bookings = bookings.len();
    let paid_bookings = bookings.iter().filter(|booking| booking.is_paid).count();
    let total_revenue = revenue(&bookings);

    view! {
        <div>
            <Title
                title="Dashboard"
                sub_title="Monitor your room listings, track bookings and analyze revenue — all in one place. Stay updated with real-time insights to ensure smooth operations."
            />

            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 my-8 max-w-3xl">
                <div class="bg-blue-50 border border-blue-100 rounded-lg p-4">
                    <p class="text-sm text-blue-600">"Total Bookings"</p>
                    <p class="text-2xl font-medium text-gray-800 mt-1">{total_bookings}</p>
                </div>
                <div class="bg-green-50 border border-green-100 rounded-lg p-4">
                    <p class="text-sm text-green-600">"Paid Bookings"</p>
                    <p class="text-2xl font-medium text-gray-800 mt-1">{paid_bookings}</p>
                </div>
                <div class="bg-amber-50 border border-amber-100 rounded-lg p-4">
                    <p class="text-sm text-amber-600">"Total Revenue"</p>
                    <p class="text-2xl font-medium text-gray-800 mt-1">{format_price(total_revenue)}</p>
                </div>
            </div>

            <h2 class="text-xl text-gray-800 font-medium mb-4">"Recent Bookings"</h2>
            <div class="overflow-x-auto max-w-3xl">
                <table class="min-w-full bg-white border border-gray-200 rounded-lg overflow-hidden">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Hotel"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Room"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Check-in"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Amount"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200">
                        {bookings.into_iter().map(|booking| view! {
                            <tr>
                                <td class="px-4 py-3 text-sm text-gray-800">{booking.hotel.name.clone()}</td>
                                <td class="px-4 py-3 text-sm text-gray-500">{booking.room.room_type.clone()}</td>
                                <td class="px-4 py-3 text-sm text-gray-500">{format_iso_date(&booking.check_in_date)}</td>
                                <td class="px-4 py-3 text-sm text-gray-500">{format_price(booking.total_price)}</td>
                                <td class="px-4 py-3 text-sm">
                                    <span class={if booking.is_paid {
                                        "px-2 py-0.5 rounded-full text-xs bg-green-100 text-green-700"
                                    } else {
                                        "px-2 py-0.5 rounded-full text-xs bg-amber-100 text-amber-700"
                                    }}>
                                        {if booking.is_paid { "Completed" } else { "Pending" }}
                                    </span>
                                </td>
                            </tr>
                        }).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
