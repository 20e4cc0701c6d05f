use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    #[serde(rename = "Jumu'ah")]
    Jumuah,
}

impl PrayerName {
    pub fn all() -> Vec<PrayerName> {
        vec![
            PrayerName::Fajr,
            PrayerName::Dhuhr,
            PrayerName::Asr,
            PrayerName::Maghrib,
            PrayerName::Isha,
            PrayerName::Jumuah,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
            PrayerName::Jumuah => "Jumu'ah",
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerName::Dhuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            "jumuah" | "jumu'ah" | "jummah" => Ok(PrayerName::Jumuah),
            _ => Err(anyhow::anyhow!("Unknown prayer name: {}", s)),
        }
    }
}

/// One row of the masjid's posted schedule. `time` is a display string
/// exactly as the operator typed it ("5:00 AM", "after Maghrib") and is
/// never parsed or compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTiming {
    pub name: PrayerName,
    pub time: String,
}

impl PrayerTiming {
    pub fn new(name: PrayerName, time: &str) -> Self {
        Self {
            name,
            time: time.to_string(),
        }
    }
}

/// Seed schedule used whenever the store has nothing usable.
pub fn default_timings() -> Vec<PrayerTiming> {
    vec![
        PrayerTiming::new(PrayerName::Fajr, "5:00 AM"),
        PrayerTiming::new(PrayerName::Dhuhr, "1:00 PM"),
        PrayerTiming::new(PrayerName::Asr, "4:10 PM"),
        PrayerTiming::new(PrayerName::Maghrib, "5:30 PM"),
        PrayerTiming::new(PrayerName::Isha, "7:10 PM"),
        PrayerTiming::new(PrayerName::Jumuah, "1:15 PM"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_has_all_six_rows() {
        let timings = default_timings();
        assert_eq!(timings.len(), 6);
        for name in PrayerName::all() {
            assert!(timings.iter().any(|t| t.name == name));
        }
    }

    #[test]
    fn jumuah_serializes_with_apostrophe() {
        let json = serde_json::to_string(&PrayerTiming::new(PrayerName::Jumuah, "1:15 PM")).unwrap();
        assert!(json.contains("Jumu'ah"));
        let back: PrayerTiming = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, PrayerName::Jumuah);
    }

    #[test]
    fn parses_common_spellings() {
        assert_eq!("zuhr".parse::<PrayerName>().unwrap(), PrayerName::Dhuhr);
        assert_eq!("Jumu'ah".parse::<PrayerName>().unwrap(), PrayerName::Jumuah);
        assert!("tahajjud".parse::<PrayerName>().is_err());
    }
}
