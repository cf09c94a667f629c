use leptos::prelude::*;

#[component]
pub fn Title(
    title: &'static str,
    sub_title: &'static str,
    #[prop(default = false)] centered: bool,
) -> impl IntoView {
    view! {
        <div class={if centered {
            "flex flex-col items-center text-center"
        } else {
            "flex flex-col items-start text-left"
        }}>
            <h1 class="font-playfair text-4xl md:text-[40px]">{title}</h1>
            <p class="text-sm md:text-base text-gray-500/90 mt-2 max-w-174">{sub_title}</p>
        </div>
    }
}
