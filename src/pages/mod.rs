//! Routed pages

mod home;
mod login;
mod not_found;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFound;

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod test_support {
    use gloo_timers::future::TimeoutFuture;
    use leptos::mount::mount_to;
    use leptos::prelude::*;
    use leptos_router::components::Router;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    use crate::app::provide_app_context;
    use crate::config::AppConfig;

    /// Mount `page` under a fresh router and app context; returns its container.
    pub fn mount_page<F, N>(page: F) -> HtmlElement
    where
        F: FnOnce() -> N + Send + 'static,
        N: IntoView + 'static,
    {
        let document = web_sys::window().unwrap().document().unwrap();
        let parent: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&parent).unwrap();

        let config = AppConfig {
            api_base_url: "http://127.0.0.1:9".into(),
            ..AppConfig::default()
        };
        let handle = mount_to(parent.clone(), move || {
            provide_app_context(&config);
            view! { <Router>{page()}</Router> }
        });
        std::mem::forget(handle);
        parent
    }

    pub fn click_button(root: &HtmlElement, label: &str) {
        let buttons = root.query_selector_all("button").unwrap();
        let button = (0..buttons.length())
            .filter_map(|i| buttons.get(i))
            .find(|b| b.text_content().unwrap_or_default().contains(label))
            .unwrap_or_else(|| panic!("no button labelled {label}"));
        button.unchecked_into::<HtmlElement>().click();
    }

    pub fn text(root: &HtmlElement) -> String {
        root.text_content().unwrap_or_default()
    }

    pub fn count(root: &HtmlElement, selector: &str) -> u32 {
        root.query_selector_all(selector).unwrap().length()
    }

    /// Let pending reactive updates flush
    pub async fn settle() {
        TimeoutFuture::new(20).await;
    }
}
