use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct HostsQuery {
    /// Fragment for lookups the path form cannot carry, such as `.` or `..`.
    #[serde(default)]
    pub fragment: Option<String>,

    /// `?nc=true` forces a refresh before answering.
    #[serde(default)]
    pub nc: bool,
}
