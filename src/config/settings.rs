use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "matches.db".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportSettings {
    /// Used when a report request gives no start date; the end defaults to today
    pub default_start: NaiveDate,
    pub output_dir: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            default_start: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap_or_default(),
            output_dir: "analyses".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub report: ReportSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::default(),
            report: ReportSettings::default(),
            server: ServerSettings::default(),
        }
    }

    /// `--port` when given, otherwise the configured one
    pub fn server_port(&self, requested: Option<u16>) -> u16 {
        requested.unwrap_or(self.server.port)
    }

    /// Fills in an open-ended date range
    pub fn resolve_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> (NaiveDate, NaiveDate) {
        let start = start.unwrap_or(self.report.default_start);
        let end = end.unwrap_or_else(|| chrono::Local::now().date_naive());
        (start, end)
    }
}
