//! Static host for the site: serves the shell page, the JSON content and the
//! wasm bundle from the configured site directory. All rendering happens in
//! the browser.

#[cfg(not(target_arch = "wasm32"))]
#[macro_use]
extern crate rocket;

#[cfg(not(target_arch = "wasm32"))]
mod boot;
#[cfg(not(target_arch = "wasm32"))]
mod config;

#[cfg(not(target_arch = "wasm32"))]
use rocket::fs::FileServer;
#[cfg(not(target_arch = "wasm32"))]
use rocket::response::content::RawHtml;

#[cfg(not(target_arch = "wasm32"))]
#[catch(404)]
fn not_found() -> RawHtml<&'static str> {
    RawHtml(
        "<html><body style='font-family:sans-serif;text-align:center;padding:80px'>\
         <h1>404</h1><p>找不到這個檔案。</p><a href='/#/'>回首頁</a></body></html>",
    )
}

#[cfg(not(target_arch = "wasm32"))]
#[launch]
fn rocket() -> _ {
    env_logger::init();

    let figment = rocket::Config::figment();
    let site = config::SiteConfig::from_figment(&figment).unwrap_or_else(|e| {
        log::error!("Invalid [site] configuration: {}", e);
        std::process::exit(1);
    });

    // Boot check: site directory, shell page, bundle, content
    boot::run(&site);

    log::info!("Serving {}", site.root.display());

    rocket::custom(figment)
        .mount("/", FileServer::from(&site.root))
        .register("/", catchers![not_found])
}

// The browser entry point lives in the library (`web::start`).
#[cfg(target_arch = "wasm32")]
fn main() {}
