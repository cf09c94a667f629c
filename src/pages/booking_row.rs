use leptos::prelude::*;

use crate::data::booking::Booking;
use crate::utils::date::format_iso_date;
use crate::utils::money::format_price;

/// One booking in the list. Unpaid bookings offer "Pay Now"; paid ones offer
/// "Cancel Booking". Both buttons only raise events; the page owns the store.
#[component]
pub fn BookingRow(
    booking: Booking,
    on_pay: Callback<String>,
    on_cancel: Callback<String>,
) -> impl IntoView {
    let pay_id = booking.id.clone();
    let cancel_id = booking.id.clone();
    let image = booking
        .first_image()
        .unwrap_or("/images/rooms/placeholder.png")
        .to_string();
    let check_in = format_iso_date(&booking.check_in_date);
    let check_out = format_iso_date(&booking.check_out_date);

    view! {
        <div class="grid grid-cols-1 md:grid-cols-[3fr_2fr_1fr] w-full border-b border-gray-300 py-6 first:border-t">
            <div class="flex flex-col md:flex-row">
                <img
                    src=image
                    alt="hotel-img"
                    class="w-full md:w-44 h-32 object-cover rounded shadow"
                />
                <div class="flex flex-col gap-1.5 mt-3 md:mt-0 md:ml-4">
                    <p class="font-playfair text-xl">{booking.hotel.name.clone()}</p>
                    <span class="font-inter text-sm text-gray-600">
                        {format!("({})", booking.room.room_type)}
                    </span>
                    <div class="flex items-center gap-1 text-sm text-gray-500">
                        <i class="fas fa-location-dot w-4"></i>
                        <span>{format!("{}, {}", booking.hotel.address, booking.hotel.city)}</span>
                    </div>
                    <div class="flex items-center gap-1 text-sm text-gray-500">
                        <i class="fas fa-user-group w-4"></i>
                        <span>{format!("Guests: {}", booking.guests)}</span>
                    </div>
                    <p class="text-base text-gray-800">
                        {format!("Total: {}", format_price(booking.total_price))}
                    </p>
                </div>
            </div>

            <div class="flex flex-col justify-center gap-1 text-sm mt-4 md:mt-0 text-gray-600">
                <p><strong>"Check-in: "</strong>{check_in}</p>
                <p><strong>"Check-out: "</strong>{check_out}</p>
            </div>

            <div class="flex flex-col items-start justify-center pt-3">
                <div class="flex items-center gap-2">
                    <div class={if booking.is_paid {
                        "h-3 w-3 rounded-full bg-green-500"
                    } else {
                        "h-3 w-3 rounded-full bg-red-500"
                    }}></div>
                    <p class={if booking.is_paid {
                        "text-sm text-green-600"
                    } else {
                        "text-sm text-red-600"
                    }}>
                        {if booking.is_paid { "Paid" } else { "Unpaid" }}
                    </p>
                </div>
                {if booking.is_paid {
                    view! {
                        <button
                            class="px-4 py-1.5 mt-4 text-xs border border-red-300 text-red-600 rounded-full hover:bg-red-50 transition-all cursor-pointer"
                            on:click=move |_| on_cancel.run(cancel_id.clone())
                        >
                            "Cancel Booking"
                        </button>
                    }.into_any()
                } else {
                    view! {
                        <button
                            class="px-4 py-1.5 mt-4 text-xs border border-gray-400 rounded-full hover:bg-gray-50 transition-all cursor-pointer"
                            on:click=move |_| on_pay.run(pay_id.clone())
                        >
                            "Pay Now"
                        </button>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
