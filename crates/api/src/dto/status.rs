use crate::utils::format_duration;
use gethost_application::use_cases::CacheStatus;
use std::fmt::Write;

/// Plain-text cache report served on `/status`.
pub struct StatusReport<'a>(pub &'a CacheStatus);

impl StatusReport<'_> {
    pub fn render(&self) -> String {
        let status = self.0;
        let mut out = String::from("Zones cached:\n");

        for zone in &status.zones {
            let _ = writeln!(out, "{} serial: {}", zone.zone, zone.serial);
        }

        let age = status
            .age
            .map(format_duration)
            .unwrap_or_else(|| "never".to_string());

        let _ = writeln!(out, "Cache size: {}", status.size);
        let _ = writeln!(out, "Cache age: {}", age);
        let _ = writeln!(out, "Uptime: {}", format_duration(status.uptime));
        out
    }
}
