use backend::Navigator;
use log::LevelFilter;
use shared::{Notification, View};
use yew::prelude::*;

mod components;
mod content;
mod hooks;
mod pages;
mod services;

use components::footer::Footer;
use components::header::Header;
use components::toast::{Toast, ToastMessage};
use pages::about::AboutPage;
use pages::contact::ContactPage;
use pages::experience::ExperiencePage;
use pages::home::HomePage;
use services::scroll::WindowScroll;

#[function_component(App)]
fn app() -> Html {
    // The only place the current view lives; pages receive `on_navigate`
    let navigator = use_state(Navigator::new);
    let toast = use_state(|| Option::<ToastMessage>::None);
    let toast_count = use_mut_ref(|| 0u64);

    let on_navigate = {
        let navigator = navigator.clone();
        Callback::from(move |target: String| {
            let mut next = *navigator;
            if next.navigate(&target, &WindowScroll).is_accepted() {
                navigator.set(next);
            }
        })
    };

    let on_notify = {
        let toast = toast.clone();
        let toast_count = toast_count.clone();
        Callback::from(move |notification: Notification| {
            let id = {
                let mut count = toast_count.borrow_mut();
                *count += 1;
                *count
            };
            toast.set(Some(ToastMessage { id, notification }));
        })
    };

    let on_dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    let current_view = navigator.current();
    let page = match current_view {
        View::Home => html! { <HomePage on_navigate={on_navigate.clone()} /> },
        View::Experience => html! { <ExperiencePage on_navigate={on_navigate.clone()} on_notify={on_notify} /> },
        View::About => html! { <AboutPage on_navigate={on_navigate.clone()} /> },
        View::Contact => html! { <ContactPage on_notify={on_notify} /> },
    };

    html! {
        <div class="app">
            <Header current_view={current_view} on_navigate={on_navigate.clone()} />
            {page}
            <Footer on_navigate={on_navigate} />
            <Toast message={(*toast).clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}

fn main() {
    services::logging::init(LevelFilter::Debug);
    log::info!("🚀 Roots&Routes starting");
    yew::Renderer::<App>::new().render();
}
