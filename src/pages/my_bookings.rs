use leptos::prelude::*;

use crate::data::payment::{PaymentField, PaymentModal};
use crate::data::seed;
use crate::data::store::BookingStore;
use crate::pages::booking_row::BookingRow;
use crate::pages::payment_modal::PaymentModalView;
use crate::pages::title::Title;

#[component]
pub fn MyBookings() -> impl IntoView {
    let (store, set_store) = create_signal(BookingStore::new(seed::user_bookings()));
    let (modal, set_modal) = create_signal(PaymentModal::default());
    let (payment_error, set_payment_error) = create_signal::<Option<String>>(None);

    // Cancellation is a two-step protocol: a row requests it, the overlay
    // below asks for confirmation, and only a confirm actually removes the
    // booking.
    let (pending_cancel, set_pending_cancel) = create_signal::<Option<String>>(None);

    let open_payment = Callback::new(move |booking_id: String| {
        set_payment_error(None);
        set_modal.update(|modal| modal.open(booking_id));
    });

    let close_payment = Callback::new(move |_: ()| {
        set_payment_error(None);
        set_modal.update(|modal| modal.close());
    });

    let edit_field = Callback::new(move |(field, value): (PaymentField, String)| {
        set_modal.update(|modal| modal.set_field(field, value));
    });

    let submit_payment = Callback::new(move |_: ()| {
        let outcome = modal.with_untracked(|modal| {
            modal
                .submit()
                .map(str::to_string)
                .map_err(|err| err.to_string())
        });
        match outcome {
            Ok(booking_id) => {
                set_store.update(|store| store.mark_paid(&booking_id));
                set_payment_error(None);
                set_modal.update(|modal| modal.close());
            }
            Err(message) => {
                set_payment_error(Some(message));
            }
        }
    });

    let request_cancel = Callback::new(move |booking_id: String| {
        set_pending_cancel(Some(booking_id));
    });

    let confirm_cancel = move |_| {
        if let Some(booking_id) = pending_cancel.get_untracked() {
            set_store.update(|store| store.cancel(&booking_id));
        }
        set_pending_cancel(None);
    };

    let decline_cancel = move |_| {
        set_pending_cancel(None);
    };

    let selected_booking = create_memo(move |_| {
        modal
            .with(|modal| modal.selected().map(str::to_string))
            .and_then(|booking_id| store.with(|store| store.get(&booking_id).cloned()))
    });

    let cancel_target = create_memo(move |_| {
        pending_cancel
            .get()
            .and_then(|booking_id| store.with(|store| store.get(&booking_id).cloned()))
    });

    view! {
        <div class="py-28 md:pb-32 md:pt-32 px-4 md:px-16 lg:px-24 xl:px-32">
            <Title
                title="My Bookings"
                sub_title="Easily manage your past, current, and upcoming hotel reservations in one place. Plan trips seamlessly with just a few clicks"
            />

            <div class="max-w-6xl mt-8 w-full text-gray-800">
                <div class="hidden md:grid md:grid-cols-[3fr_2fr_1fr] w-full border-b border-gray-300 font-medium text-base py-3">
                    <div>Hotels</div>
                    <div>Date & Timings</div>
                    <div>Payment</div>
                </div>

                {move || {
                    let bookings = store.with(|store| store.bookings().to_vec());
                    if bookings.is_empty() {
                        view! {
                            <div class="py-12 text-center text-gray-500">
                                "You have no bookings yet."
                            </div>
                        }.into_any()
                    } else {
                        bookings.into_iter().map(|booking| {
                            view! {
                                <BookingRow
                                    booking=booking
                                    on_pay=open_payment
                                    on_cancel=request_cancel
                                />
                            }
                        }).collect::<Vec<_>>().into_any()
                    }
                }}
            </div>

            <PaymentModalView
                modal=modal
                booking=selected_booking
                error=payment_error
                on_field=edit_field
                on_submit=submit_payment
                on_close=close_payment
            />

            {move || match cancel_target.get() {
                Some(booking) => view! {
                    <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50">
                        <div class="bg-white rounded-lg shadow-xl p-6 w-full max-w-sm mx-4">
                            <h3 class="text-lg font-semibold text-gray-900">"Cancel this booking?"</h3>
                            <p class="mt-2 text-sm text-gray-600">
                                {format!(
                                    "Your stay at {} ({}) will be cancelled. This cannot be undone.",
                                    booking.hotel.name, booking.room.room_type
                                )}
                            </p>
                            <div class="mt-6 flex justify-end gap-3">
                                <button
                                    class="px-4 py-2 text-sm border border-gray-300 rounded-md hover:bg-gray-50 transition-colors"
                                    on:click=decline_cancel
                                >
                                    "Keep Booking"
                                </button>
                                <button
                                    class="px-4 py-2 text-sm bg-red-600 text-white rounded-md hover:bg-red-700 transition-colors"
                                    on:click=confirm_cancel
                                >
                                    "Yes, Cancel"
                                </button>
                            </div>
                        </div>
                    </div>
                }.into_any(),
                None => view! { <div class="hidden"></div> }.into_any(),
            }}
        </div>
    }
}
