use std::time::Duration;

use leptos::prelude::*;

use crate::pages::title::Title;

pub const ROOM_TYPES: [&str; 4] = ["Single Bed", "Double Bed", "Luxury Room", "Family Suite"];

pub const AMENITIES: [&str; 5] = [
    "Free WiFi",
    "Free Breakfast",
    "Room Service",
    "Mountain View",
    "Pool Access",
];

/// Form state for a new room. Price stays a string until submission; the
/// input is free text and only checked for presence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomDraft {
    pub room_type: String,
    pub price_per_night: String,
    pub amenities: Vec<String>,
}

impl RoomDraft {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.room_type.trim().is_empty() || self.price_per_night.trim().is_empty() {
            return Err("Please fill in Room Type and Price per Night.");
        }
        Ok(())
    }
}

#[component]
pub fn AddRoom() -> impl IntoView {
    let (room_type_input, set_room_type_input) = create_signal(String::new());
    let (price_input, set_price_input) = create_signal(String::new());
    let (amenities, set_amenities) = create_signal(
        AMENITIES
            .iter()
            .map(|name| (name.to_string(), false))
            .collect::<Vec<_>>(),
    );
    let (images, set_images) = create_signal(vec![None::<String>; 4]);
    let (form_error, set_form_error) = create_signal::<Option<String>>(None);
    let (success, set_success) = create_signal(false);

    let toggle_amenity = move |name: String| {
        set_amenities.update(|amenities| {
            if let Some(entry) = amenities.iter_mut().find(|(n, _)| *n == name) {
                entry.1 = !entry.1;
            }
        });
    };

    let on_image_change = move |index: usize, ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            match web_sys::Url::create_object_url_with_blob(&file) {
                Ok(url) => set_images.update(|images| images[index] = Some(url)),
                Err(err) => leptos::logging::error!("failed to preview image: {err:?}"),
            }
        }
    };

    let handle_submit = move |_| {
        let draft = RoomDraft {
            room_type: room_type_input.get(),
            price_per_night: price_input.get(),
            amenities: amenities
                .get()
                .into_iter()
                .filter(|(_, checked)| *checked)
                .map(|(name, _)| name)
                .collect(),
        };

        if let Err(message) = draft.validate() {
            set_form_error(Some(message.to_string()));
            return;
        }
        set_form_error(None);

        let previews: Vec<String> = images.get().into_iter().flatten().collect();
        // No backend to post to; the composed room just lands in the log.
        leptos::logging::log!("room added: {:?} with {} image(s)", draft, previews.len());

        set_success(true);
        set_timeout(move || set_success(false), Duration::from_secs(3));
    };

    view! {
        <div>
            <Title
                title="Add Room"
                sub_title="Fill in the details carefully and accurately — room details, pricing, and amenities — to enhance the user booking experience."
            />

            <p class="text-gray-800 mt-10">"Images"</p>
            <div class="grid grid-cols-2 sm:flex gap-4 my-2 flex-wrap">
                {(0..4usize).map(|index| view! {
                    <label class="cursor-pointer">
                        {move || match images.with(|images| images[index].clone()) {
                            Some(url) => view! {
                                <img src=url alt="room-preview" class="max-h-32 opacity-80 border rounded"/>
                            }.into_any(),
                            None => view! {
                                <div class="h-28 w-36 border-2 border-dashed border-gray-300 rounded flex items-center justify-center text-gray-400 text-xs">
                                    "Upload image"
                                </div>
                            }.into_any(),
                        }}
                        <input
                            type="file"
                            accept="image/*"
                            class="hidden"
                            on:change=move |ev| on_image_change(index, ev)
                        />
                    </label>
                }).collect::<Vec<_>>()}
            </div>

            <div class="w-full flex max-sm:flex-col sm:gap-4 mt-4">
                <div class="flex-1 max-w-sm">
                    <p class="text-gray-800 mt-4">"Room Type"</p>
                    <select
                        class="border opacity-70 border-gray-300 mt-1 rounded p-2 w-full"
                        prop:value={room_type_input}
                        on:change=move |ev| set_room_type_input(event_target_value(&ev))
                    >
                        <option value="">"Select Room Type"</option>
                        {ROOM_TYPES.into_iter().map(|room_type| view! {
                            <option value=room_type>{room_type}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </div>

                <div>
                    <p class="mt-4 text-gray-800">
                        "Price " <span class="text-xs">"/night"</span>
                    </p>
                    <input
                        type="number"
                        placeholder="0"
                        class="border border-gray-300 mt-1 rounded p-2 w-24"
                        prop:value={price_input}
                        on:input=move |ev| set_price_input(event_target_value(&ev))
                    />
                </div>
            </div>

            <p class="text-gray-800 mt-4">"Amenities"</p>
            <div class="flex flex-col flex-wrap mt-1 text-gray-600 max-w-sm">
                {AMENITIES.into_iter().map(|name| {
                    let amenity = name.to_string();
                    view! {
                        <div class="flex items-center gap-2 py-1">
                            <input
                                type="checkbox"
                                id=name
                                prop:checked=move || amenities.with(|amenities| {
                                    amenities.iter().any(|(n, checked)| n == name && *checked)
                                })
                                on:change=move |_| toggle_amenity(amenity.clone())
                            />
                            <label for=name>{name}</label>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>

            {move || match form_error.get() {
                Some(message) => view! {
                    <p class="text-red-600 mt-4 text-sm">{message}</p>
                }.into_any(),
                None => view! { <p class="hidden"></p> }.into_any(),
            }}

            <button
                class="bg-blue-800 text-white px-8 py-2 rounded mt-8 cursor-pointer"
                on:click=handle_submit
            >
                "Add Room"
            </button>

            {move || if success.get() {
                view! {
                    <p class="text-green-600 mt-4 font-semibold">"Room added successfully!"</p>
                }.into_any()
            } else {
                view! { <p class="hidden"></p> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_room_type_and_price() {
        let draft = RoomDraft::default();
        assert!(draft.validate().is_err());

        let draft = RoomDraft {
            room_type: "Double Bed".to_string(),
            price_per_night: String::new(),
            amenities: Vec::new(),
        };
        assert!(draft.validate().is_err());

        let draft = RoomDraft {
            room_type: "Double Bed".to_string(),
            price_per_night: "299".to_string(),
            amenities: vec!["Free WiFi".to_string()],
        };
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn amenities_are_optional() {
        let draft = RoomDraft {
            room_type: "Single Bed".to_string(),
            price_per_night: "99".to_string(),
            amenities: Vec::new(),
        };
        assert_eq!(draft.validate(), Ok(()));
    }
}
