use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use utility::{Error, Result};

/// ExpiryGate refuses to run once a cutoff date has passed. Without a cutoff it always passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpiryGate {
    pub expires: Option<DateTime<Utc>>,
}

impl ExpiryGate {
    /// accepts an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
    /// An empty string disables the gate.
    pub fn parse(raw: &str) -> Result<ExpiryGate> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(ExpiryGate::default());
        }

        let expires = match DateTime::parse_from_rfc3339(raw) {
            Ok(at) => at.with_timezone(&Utc),
            Err(_) => {
                let midnight = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|day| day.and_hms_opt(0, 0, 0))
                    .ok_or_else(|| {
                        Error::Custom(format!(
                            "invalid expiry {:?}, expected RFC 3339 or YYYY-MM-DD",
                            raw
                        ))
                    })?;
                Utc.from_utc_datetime(&midnight)
            }
        };
        Ok(ExpiryGate {
            expires: Some(expires),
        })
    }

    pub fn check(&self, now: DateTime<Utc>) -> Result<()> {
        match self.expires {
            Some(expires) if now > expires => Err(Error::Expired(format!(
                "This tool expired on {}, please contact your OpenFaaS administrator",
                expires.to_rfc3339()
            ))),
            _ => Ok(()),
        }
    }
}
