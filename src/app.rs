use log::debug;

use crate::content::{Content, ContentError, ContentState};
use crate::render;
use crate::routes::Route;
use crate::store::KvStore;
use crate::subscribers::{SubscribeError, SubscriberStore};

/// The host surface the router draws into. The browser implements it over the
/// DOM; tests use an in-memory page.
pub trait Page {
    /// Replace the whole content region (`#app`).
    fn set_content(&mut self, html: &str);
    /// Current value of a form input by element id, if the element exists.
    fn input_value(&self, id: &str) -> Option<String>;
    /// Show inline feedback in the `#notice` element without re-rendering.
    fn show_notice(&mut self, text: &str);
    /// Attach handlers to interactive elements of the freshly rendered content.
    /// Called after every render; a page without a form is a no-op.
    fn wire_handlers(&mut self);
}

/// User-facing feedback for the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Subscribed,
    Invalid,
    Duplicate,
    StorageFailed,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::Subscribed => "已加入訂閱！（示範版：儲存在你的瀏覽器）",
            Notice::Invalid => "請輸入有效的 Email。",
            Notice::Duplicate => "你已經訂閱過了（本機紀錄）。",
            Notice::StorageFailed => "目前無法儲存訂閱資料，請稍後再試。",
        }
    }
}

impl From<&SubscribeError> for Notice {
    fn from(e: &SubscribeError) -> Self {
        match e {
            SubscribeError::Invalid => Notice::Invalid,
            SubscribeError::Duplicate => Notice::Duplicate,
            SubscribeError::Storage(_) => Notice::StorageFailed,
        }
    }
}

/// Router plus the state it renders from: the content snapshot and the
/// subscriber list.
pub struct App<S: KvStore> {
    content: ContentState,
    subscribers: SubscriberStore<S>,
    /// One-shot notice for the next subscribe render.
    flash: Option<Notice>,
}

impl<S: KvStore> App<S> {
    pub fn new(store: S) -> Self {
        App {
            content: ContentState::Loading,
            subscribers: SubscriberStore::new(store),
            flash: None,
        }
    }

    pub fn with_content(store: S, content: Content) -> Self {
        let mut app = Self::new(store);
        app.content = ContentState::Ready(content);
        app
    }

    /// Install the outcome of the boot-time content load.
    pub fn finish_load(&mut self, result: Result<Content, ContentError>) {
        self.content = ContentState::from_load(result);
    }

    pub fn content_state(&self) -> &ContentState {
        &self.content
    }

    pub fn subscribers(&self) -> &SubscriberStore<S> {
        &self.subscribers
    }

    /// Render the page for `route` without any side effect on the host.
    pub fn render(&mut self, route: &Route) -> String {
        if route.needs_content() {
            let content = match &self.content {
                ContentState::Ready(content) => content,
                ContentState::Loading => return render::render_loading(),
                ContentState::Unavailable(reason) => return render::render_unavailable(reason),
            };
            return match route {
                Route::Home => render::render_home(content),
                Route::Category(c) => render::render_category(content, *c),
                Route::Post(slug) => render::render_post(content, slug),
                Route::Archive => render::render_archive(content),
                Route::Newsletter(slug) => render::render_newsletter(content, slug),
                _ => render::render_not_found(),
            };
        }

        match route {
            Route::Subscribe => {
                let notice = self.flash.take().map(|n| n.text());
                render::render_subscribe(self.subscribers.count(), notice)
            }
            Route::About => render::render_about(),
            Route::Portfolio => render::render_portfolio(),
            Route::Events => render::render_events(),
            _ => render::render_not_found(),
        }
    }

    /// Parse `fragment`, render it into `page` and re-wire the handlers.
    pub fn dispatch(&mut self, fragment: &str, page: &mut dyn Page) -> Route {
        let route = Route::parse(fragment);
        debug!("Dispatch {:?} -> {:?}", fragment, route);
        let html = self.render(&route);
        page.set_content(&html);
        page.wire_handlers();
        route
    }

    /// Handle a click on the signup button of the page rendered for `fragment`.
    ///
    /// A successful signup re-renders right away so the count is current;
    /// a rejected one only updates the inline notice and keeps the inputs.
    pub fn submit_subscription(
        &mut self,
        fragment: &str,
        page: &mut dyn Page,
    ) -> Result<(), SubscribeError> {
        let name = page.input_value("name").unwrap_or_default();
        let email = page.input_value("email").unwrap_or_default();

        match self.subscribers.submit(&name, &email) {
            Ok(_) => {
                self.flash = Some(Notice::Subscribed);
                self.dispatch(fragment, page);
                Ok(())
            }
            Err(e) => {
                debug!("Subscription rejected: {}", e);
                page.show_notice(Notice::from(&e).text());
                Err(e)
            }
        }
    }
}
