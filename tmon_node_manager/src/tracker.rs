use crate::auth_guard::AuthGuard;
use log::error;
use rocket::serde::{json::Json, Serialize};
use rocket::State;
use tmon_config::TmonConfig;
use tmon_monitor::{collector, interfaces, logs, state, TrafficReport};

/// How far back the log panel reaches.
const RECENT_LOG_LINES: usize = 50;

#[get("/api/stats")]
pub async fn stats(
  _auth: AuthGuard,
  config: &State<TmonConfig>,
) -> Json<TrafficReport> {
  let raw = collector::get_traffic_stats(&config.script_path, None).await;
  Json(TrafficReport::parse(&raw))
}

#[get("/api/interface/<interface>")]
pub async fn interface_stats(
  _auth: AuthGuard,
  config: &State<TmonConfig>,
  interface: String,
) -> Json<TrafficReport> {
  let raw =
    collector::get_traffic_stats(&config.script_path, Some(&interface)).await;
  Json(TrafficReport::parse(&raw))
}

#[derive(Serialize, Clone, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LogSnapshot {
  pub logs: Vec<String>,
}

#[get("/api/logs")]
pub async fn recent_logs(
  _auth: AuthGuard,
  config: &State<TmonConfig>,
) -> Json<LogSnapshot> {
  Json(LogSnapshot {
    logs: logs::tail_logs(&config.log_path(), RECENT_LOG_LINES),
  })
}

#[get("/api/interfaces")]
pub async fn interface_list(_auth: AuthGuard) -> Json<Vec<String>> {
  Json(interfaces::list_interfaces())
}

#[derive(Serialize, Clone, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ResetOutcome {
  pub success: bool,
  pub message: String,
}

#[post("/api/reset")]
pub async fn reset(
  _auth: AuthGuard,
  config: &State<TmonConfig>,
) -> Json<ResetOutcome> {
  match state::clear_state_files(&config.state_path()) {
    Ok(removed) => Json(ResetOutcome {
      success: true,
      message: format!("Statistics reset, {removed} state file(s) removed"),
    }),
    Err(e) => {
      error!("Unable to clear state files: {e}");
      Json(ResetOutcome { success: false, message: e.to_string() })
    }
  }
}
