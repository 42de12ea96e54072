//! Browser host: binds the router to the DOM, `localStorage`, `fetch` and
//! `hashchange`. Compiled for `wasm32` only.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Datelike;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlInputElement, Response};

use crate::app::{App, Page};
use crate::content::{Content, ContentError, NEWSLETTERS_PATH, POSTS_PATH};
use crate::nav::NavToggle;
use crate::store::local::LocalStorage;
use crate::store::{KvStore, MemoryStore};

type SiteApp = App<Box<dyn KvStore>>;

struct Site {
    app: RefCell<SiteApp>,
    page: RefCell<DomPage>,
}

/// `Page` over the live document.
struct DomPage {
    document: Document,
    /// Shared click handler for `#subscribeBtn`, attached after every render.
    on_subscribe: Option<Closure<dyn FnMut()>>,
}

impl DomPage {
    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl Page for DomPage {
    fn set_content(&mut self, html: &str) {
        match self.element("app") {
            Some(app) => app.set_inner_html(html),
            None => warn!("No #app element to render into"),
        }
    }

    fn input_value(&self, id: &str) -> Option<String> {
        let input = self.element(id)?.dyn_into::<HtmlInputElement>().ok()?;
        Some(input.value())
    }

    fn show_notice(&mut self, text: &str) {
        if let Some(notice) = self.element("notice") {
            if let Err(e) = notice.set_attribute("style", "display:block") {
                warn!("Could not show notice: {:?}", e);
            }
            notice.set_text_content(Some(text));
        }
    }

    fn wire_handlers(&mut self) {
        let (button, handler) = match (self.element("subscribeBtn"), &self.on_subscribe) {
            (Some(button), Some(handler)) => (button, handler),
            _ => return,
        };
        // The DOM ignores a second registration of the same listener.
        if let Err(e) =
            button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        {
            error!("Could not wire subscribe button: {:?}", e);
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        warn!("Logger already initialized");
    }

    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => {
            error!("No document; not running in a browser page");
            return;
        }
    };

    set_year(&document);
    init_nav(&document);

    let site = Rc::new(Site {
        app: RefCell::new(App::new(open_store())),
        page: RefCell::new(DomPage {
            document,
            on_subscribe: None,
        }),
    });

    let weak = Rc::downgrade(&site);
    let on_subscribe = Closure::<dyn FnMut()>::new(move || {
        let site = match weak.upgrade() {
            Some(site) => site,
            None => return,
        };
        let fragment = current_fragment();
        let mut page = site.page.borrow_mut();
        // Rejections are already shown inline.
        let _ = site
            .app
            .borrow_mut()
            .submit_subscription(&fragment, &mut *page);
    });
    site.page.borrow_mut().on_subscribe = Some(on_subscribe);

    wasm_bindgen_futures::spawn_local(async move {
        let result = load_content().await;
        site.app.borrow_mut().finish_load(result);
        listen_for_navigation(site.clone());
        route(&site);
    });
}

fn open_store() -> Box<dyn KvStore> {
    match LocalStorage::open() {
        Some(storage) => Box::new(storage),
        None => {
            warn!("localStorage unavailable; subscribers will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

fn current_fragment() -> String {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    if hash.is_empty() {
        "#/".to_string()
    } else {
        hash
    }
}

fn route(site: &Site) {
    let fragment = current_fragment();
    let mut page = site.page.borrow_mut();
    site.app.borrow_mut().dispatch(&fragment, &mut *page);
}

fn listen_for_navigation(site: Rc<Site>) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let on_hash_change = Closure::<dyn FnMut()>::new(move || route(&site));
    if let Err(e) = window
        .add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
    {
        error!("Could not listen for hashchange: {:?}", e);
    }
    // Lives as long as the page.
    on_hash_change.forget();
}

// ── Content fetch ──────────────────────────────────────

async fn load_content() -> Result<Content, ContentError> {
    let posts_url = format!("./{}", POSTS_PATH);
    let newsletters_url = format!("./{}", NEWSLETTERS_PATH);
    let (posts, newsletters) =
        futures::future::try_join(fetch_text(&posts_url), fetch_text(&newsletters_url)).await?;
    Content::from_json(&posts, &newsletters)
}

async fn fetch_text(url: &str) -> Result<String, ContentError> {
    let fetch_err = |e: JsValue| ContentError::Fetch {
        resource: url.to_string(),
        reason: js_error(&e),
    };

    let window = web_sys::window().ok_or_else(|| ContentError::Fetch {
        resource: url.to_string(),
        reason: "no window".to_string(),
    })?;

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_err)?
        .dyn_into()
        .map_err(fetch_err)?;

    if !response.ok() {
        return Err(ContentError::Status {
            resource: url.to_string(),
            status: response.status(),
        });
    }

    let text = JsFuture::from(response.text().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    text.as_string().ok_or_else(|| ContentError::Fetch {
        resource: url.to_string(),
        reason: "response body is not text".to_string(),
    })
}

fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

// ── Page chrome ────────────────────────────────────────

fn set_year(document: &Document) {
    if let Some(year) = document.get_element_by_id("year") {
        let current = chrono::Local::now().year().to_string();
        year.set_text_content(Some(current.as_str()));
    }
}

fn init_nav(document: &Document) {
    let (toggle, nav) = match (
        document.query_selector(".nav-toggle").ok().flatten(),
        document.query_selector(".nav").ok().flatten(),
    ) {
        (Some(toggle), Some(nav)) => (toggle, nav),
        _ => return,
    };
    let state = Rc::new(RefCell::new(NavToggle::default()));

    let on_toggle = {
        let state = state.clone();
        let (toggle, nav) = (toggle.clone(), nav.clone());
        Closure::<dyn FnMut()>::new(move || {
            let mut state = state.borrow_mut();
            let open = state.toggle();
            sync_nav(&toggle, &nav, open, state.aria_expanded());
        })
    };

    let on_nav_click = {
        let (toggle, nav) = (toggle.clone(), nav.clone());
        Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let is_link = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|el| el.tag_name().eq_ignore_ascii_case("a"))
                .unwrap_or(false);
            if is_link {
                let mut state = state.borrow_mut();
                state.close();
                sync_nav(&toggle, &nav, false, state.aria_expanded());
            }
        })
    };

    let wired = toggle
        .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())
        .and_then(|_| {
            nav.add_event_listener_with_callback("click", on_nav_click.as_ref().unchecked_ref())
        });
    if let Err(e) = wired {
        error!("Could not wire navigation toggle: {:?}", e);
    }
    on_toggle.forget();
    on_nav_click.forget();
    info!("Navigation ready");
}

fn sync_nav(toggle: &Element, nav: &Element, open: bool, aria_expanded: &str) {
    let synced = nav
        .class_list()
        .toggle_with_force("open", open)
        .and_then(|_| toggle.set_attribute("aria-expanded", aria_expanded));
    if let Err(e) = synced {
        warn!("Could not update navigation state: {:?}", e);
    }
}
