use crate::format::{decode_slug, encode_slug};

/// The three topic sections of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    AiEngineering,
    PhillyWeek,
    MonthlyTrends,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::AiEngineering,
        Category::PhillyWeek,
        Category::MonthlyTrends,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ai-engineering" => Some(Self::AiEngineering),
            "philly-week" => Some(Self::PhillyWeek),
            "monthly-trends" => Some(Self::MonthlyTrends),
            _ => None,
        }
    }

    /// Path segment, also the `categoryKey` posts are filtered on.
    pub fn key(&self) -> &'static str {
        match self {
            Self::AiEngineering => "ai-engineering",
            Self::PhillyWeek => "philly-week",
            Self::MonthlyTrends => "monthly-trends",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::AiEngineering => "AI × 工程專題解析",
            Self::PhillyWeek => "費城科技週觀察",
            Self::MonthlyTrends => "每月科技趨勢摘要",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Self::AiEngineering => "用工程與系統思維拆解 AI 如何落地。",
            Self::PhillyWeek => "活動筆記 × Demo 亮點 × 學生觀察。",
            Self::MonthlyTrends => "每月 3–5 個趨勢：一句話重點＋影響面＋延伸閱讀。",
        }
    }
}

/// Every page the fragment can address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Category(Category),
    Post(String),
    Subscribe,
    Archive,
    Newsletter(String),
    About,
    Portfolio,
    Events,
    NotFound,
}

impl Route {
    /// Parse a URL fragment such as `#/post/hello-world`.
    ///
    /// The leading `#` is optional, empty segments are dropped, and the first
    /// remaining segment selects the page. Surplus segments are ignored.
    pub fn parse(fragment: &str) -> Self {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        let key = match segments.next() {
            Some(key) => key,
            None => return Route::Home,
        };

        if let Some(category) = Category::from_key(key) {
            return Route::Category(category);
        }

        match key {
            "post" => slug_arg(segments.next()).map(Route::Post).unwrap_or(Route::NotFound),
            "newsletter" => slug_arg(segments.next())
                .map(Route::Newsletter)
                .unwrap_or(Route::NotFound),
            "subscribe" => Route::Subscribe,
            "archive" => Route::Archive,
            "about" => Route::About,
            "portfolio" => Route::Portfolio,
            "events" => Route::Events,
            _ => Route::NotFound,
        }
    }

    /// Canonical fragment for this route, slugs percent-encoded.
    pub fn href(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Category(c) => format!("#/{}", c.key()),
            Route::Post(slug) => format!("#/post/{}", encode_slug(slug)),
            Route::Subscribe => "#/subscribe".to_string(),
            Route::Archive => "#/archive".to_string(),
            Route::Newsletter(slug) => format!("#/newsletter/{}", encode_slug(slug)),
            Route::About => "#/about".to_string(),
            Route::Portfolio => "#/portfolio".to_string(),
            Route::Events => "#/events".to_string(),
            Route::NotFound => "#/404".to_string(),
        }
    }

    /// Whether rendering this route needs the loaded content snapshot.
    pub fn needs_content(&self) -> bool {
        matches!(
            self,
            Route::Home
                | Route::Category(_)
                | Route::Post(_)
                | Route::Archive
                | Route::Newsletter(_)
        )
    }
}

fn slug_arg(segment: Option<&str>) -> Option<String> {
    let slug = decode_slug(segment?)?;
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}
