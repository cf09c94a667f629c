use leptos::prelude::*;

use crate::data::booking::Booking;
use crate::data::payment::{PaymentField, PaymentModal};
use crate::utils::money::format_price;

/// The simulated card form. Field edits, submit and close all flow back to
/// the page through callbacks; this component renders whatever the modal
/// controller currently holds.
#[component]
pub fn PaymentModalView(
    modal: ReadSignal<PaymentModal>,
    booking: Memo<Option<Booking>>,
    error: ReadSignal<Option<String>>,
    on_field: Callback<(PaymentField, String)>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        {move || if modal.with(|modal| modal.is_open()) {
            view! {
                <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50">
                    <div class="bg-white rounded-lg shadow-xl p-6 w-full max-w-md mx-4">
                        <div class="flex justify-between items-start">
                            <div>
                                <h3 class="text-lg font-semibold text-gray-900">"Complete your payment"</h3>
                                {move || match booking.get() {
                                    Some(booking) => view! {
                                        <p class="mt-1 text-sm text-gray-600">
                                            {format!(
                                                "{} — {} · {}",
                                                booking.hotel.name,
                                                booking.room.room_type,
                                                format_price(booking.total_price)
                                            )}
                                        </p>
                                    }.into_any(),
                                    None => view! { <p class="hidden"></p> }.into_any(),
                                }}
                            </div>
                            <button
                                class="text-gray-400 hover:text-gray-600 text-xl leading-none"
                                on:click=move |_| on_close.run(())
                            >
                                "×"
                            </button>
                        </div>

                        <div class="mt-5 flex flex-col gap-3">
                            <div class="flex flex-col">
                                <label class="text-sm font-medium text-gray-700 mb-1">"Card Number"</label>
                                <input
                                    type="text"
                                    class="px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                                    placeholder="1234 5678 9012 3456"
                                    prop:value=move || modal.with(|modal| modal.draft().card_number.clone())
                                    on:input=move |ev| on_field.run((PaymentField::CardNumber, event_target_value(&ev)))
                                />
                            </div>

                            <div class="flex gap-3">
                                <div class="flex flex-col flex-1">
                                    <label class="text-sm font-medium text-gray-700 mb-1">"Expiry"</label>
                                    <input
                                        type="text"
                                        class="px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                                        placeholder="MM/YY"
                                        prop:value=move || modal.with(|modal| modal.draft().expiry.clone())
                                        on:input=move |ev| on_field.run((PaymentField::Expiry, event_target_value(&ev)))
                                    />
                                </div>
                                <div class="flex flex-col flex-1">
                                    <label class="text-sm font-medium text-gray-700 mb-1">"CVV"</label>
                                    <input
                                        type="password"
                                        class="px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                                        placeholder="123"
                                        prop:value=move || modal.with(|modal| modal.draft().cvv.clone())
                                        on:input=move |ev| on_field.run((PaymentField::Cvv, event_target_value(&ev)))
                                    />
                                </div>
                            </div>

                            <div class="flex flex-col">
                                <label class="text-sm font-medium text-gray-700 mb-1">"Name on Card"</label>
                                <input
                                    type="text"
                                    class="px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                                    placeholder="Full name"
                                    prop:value=move || modal.with(|modal| modal.draft().name.clone())
                                    on:input=move |ev| on_field.run((PaymentField::Name, event_target_value(&ev)))
                                />
                            </div>
                        </div>

                        {move || match error.get() {
                            Some(message) => view! {
                                <div class="mt-3 text-sm text-red-600">{message}</div>
                            }.into_any(),
                            None => view! { <div class="hidden"></div> }.into_any(),
                        }}

                        <div class="mt-6 flex justify-end gap-3">
                            <button
                                class="px-4 py-2 text-sm border border-gray-300 rounded-md hover:bg-gray-50 transition-colors"
                                on:click=move |_| on_close.run(())
                            >
                                "Close"
                            </button>
                            <button
                                class="px-4 py-2 text-sm bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors"
                                on:click=move |_| on_submit.run(())
                            >
                                "Pay"
                            </button>
                        </div>
                    </div>
                </div>
            }.into_any()
        } else {
            view! { <div class="hidden"></div> }.into_any()
        }}
    }
}
