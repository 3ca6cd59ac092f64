use std::path::PathBuf;

/// Where the dataset lives and where the server listens.
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    /// CSV (or JSON) file, relative to the working directory.
    pub data_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("spacex_launch_dash.csv"),
            host: "127.0.0.1".to_string(),
            port: 8050,
        }
    }
}

impl DashboardConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
