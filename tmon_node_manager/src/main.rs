#[macro_use]
extern crate rocket;

mod auth_guard;
mod cache_control;
mod static_pages;
mod tracker;

use tmon_config::TmonConfig;

#[launch]
fn rocket() -> _ {
  let config = TmonConfig::load_or_default();
  // The accounting script writes here; make sure the directories exist
  // before the first request asks for logs or a reset.
  if let Err(e) = config.ensure_directories() {
    eprintln!("tmon_node_manager: {e}");
  }

  rocket::build()
    .manage(config)
    .mount(
      "/",
      routes![
        static_pages::index,
        static_pages::login_page,
        static_pages::tmon_js,
        static_pages::tmon_css,
        auth_guard::login,
        auth_guard::logout,
        tracker::stats,
        tracker::interface_stats,
        tracker::recent_logs,
        tracker::interface_list,
        tracker::reset,
      ],
    )
    .register("/", catchers![static_pages::login])
}
