//! Cent step sets: the fine-tuning offsets a singer can choose from.
//!
//! The set is configuration rather than a constant. Several presets are
//! provided and any sorted, duplicate-free list within one octave is accepted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SpecError;

/// Largest accepted magnitude of a single step, one octave.
pub const MAX_STEP_CENTS: i32 = 1200;

/// Named step sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPreset {
    /// Seven eighth-tone steps: -75 to +75 in 25 cent increments.
    Eighth,
    /// Five steps: -50 to +50 in 25 cent increments.
    Quarter,
    /// Four upward steps: 0 to +75 in 25 cent increments.
    Upward,
}

impl StepPreset {
    /// All presets.
    pub const ALL: [StepPreset; 3] = [StepPreset::Eighth, StepPreset::Quarter, StepPreset::Upward];

    /// Preset name as accepted on the command line and in JSON.
    pub fn name(self) -> &'static str {
        match self {
            StepPreset::Eighth => "eighth",
            StepPreset::Quarter => "quarter",
            StepPreset::Upward => "upward",
        }
    }

    /// Cent offsets of the preset, ascending.
    pub fn cents(self) -> &'static [i32] {
        match self {
            StepPreset::Eighth => &[-75, -50, -25, 0, 25, 50, 75],
            StepPreset::Quarter => &[-50, -25, 0, 25, 50],
            StepPreset::Upward => &[0, 25, 50, 75],
        }
    }
}

impl FromStr for StepPreset {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepPreset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SpecError::InvalidSteps(format!("unknown preset '{}'", s)))
    }
}

/// An ascending, non-empty, duplicate-free set of cent offsets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CentSteps {
    cents: Vec<i32>,
}

impl CentSteps {
    /// Builds the step set of a preset.
    pub fn preset(preset: StepPreset) -> Self {
        Self {
            cents: preset.cents().to_vec(),
        }
    }

    /// Builds a step set from arbitrary offsets.
    ///
    /// Offsets are sorted. Empty sets, duplicates, and offsets beyond
    /// [`MAX_STEP_CENTS`] are rejected.
    pub fn custom(mut cents: Vec<i32>) -> Result<Self, SpecError> {
        if cents.is_empty() {
            return Err(SpecError::InvalidSteps(
                "step set must not be empty".to_string(),
            ));
        }
        if let Some(&bad) = cents.iter().find(|c| c.abs() > MAX_STEP_CENTS) {
            return Err(SpecError::InvalidSteps(format!(
                "step {} exceeds +/-{} cents",
                bad, MAX_STEP_CENTS
            )));
        }
        cents.sort_unstable();
        if let Some(dup) = cents.windows(2).find(|w| w[0] == w[1]) {
            return Err(SpecError::InvalidSteps(format!(
                "step {} appears more than once",
                dup[0]
            )));
        }
        Ok(Self { cents })
    }

    /// The preset this set is equal to, if any.
    pub fn as_preset(&self) -> Option<StepPreset> {
        StepPreset::ALL
            .into_iter()
            .find(|p| p.cents() == self.cents.as_slice())
    }

    /// Whether `cents` is one of the steps.
    pub fn contains(&self, cents: i32) -> bool {
        self.cents.binary_search(&cents).is_ok()
    }

    /// Iterates over the steps in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.cents.iter().copied()
    }

    /// Steps as a slice.
    pub fn as_slice(&self) -> &[i32] {
        &self.cents
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.cents.len()
    }

    /// Returns true if the set has no steps.
    pub fn is_empty(&self) -> bool {
        self.cents.is_empty()
    }

    /// Button-style label for an offset ("+25 cents", "0 cents", "-50 cents").
    pub fn label(cents: i32) -> String {
        if cents > 0 {
            format!("+{} cents", cents)
        } else {
            format!("{} cents", cents)
        }
    }
}

impl Default for CentSteps {
    fn default() -> Self {
        Self::preset(StepPreset::Eighth)
    }
}

impl fmt::Display for CentSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(preset) = self.as_preset() {
            return f.write_str(preset.name());
        }
        let parts: Vec<String> = self.cents.iter().map(|c| c.to_string()).collect();
        f.write_str(&parts.join(","))
    }
}

/// Parses a preset name ("eighth") or a comma-separated list ("-50,0,50").
impl FromStr for CentSteps {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return s.parse::<StepPreset>().map(CentSteps::preset);
        }
        let cents = s
            .split(',')
            .map(|part| {
                part.trim().parse::<i32>().map_err(|_| {
                    SpecError::InvalidSteps(format!("'{}' is not an integer", part.trim()))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        CentSteps::custom(cents)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum StepsRepr {
    Preset(StepPreset),
    Custom(Vec<i32>),
}

impl Serialize for CentSteps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_preset() {
            Some(preset) => StepsRepr::Preset(preset).serialize(serializer),
            None => StepsRepr::Custom(self.cents.clone()).serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for CentSteps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match StepsRepr::deserialize(deserializer)? {
            StepsRepr::Preset(preset) => Ok(CentSteps::preset(preset)),
            StepsRepr::Custom(cents) => CentSteps::custom(cents).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_eighth_tones() {
        let steps = CentSteps::default();
        assert_eq!(steps.as_slice(), &[-75, -50, -25, 0, 25, 50, 75]);
        assert_eq!(steps.as_preset(), Some(StepPreset::Eighth));
    }

    #[test]
    fn test_presets_are_ascending() {
        for preset in StepPreset::ALL {
            let cents = preset.cents();
            assert!(cents.windows(2).all(|w| w[0] < w[1]), "{:?}", preset);
            assert_eq!(CentSteps::custom(cents.to_vec()).unwrap().as_preset(), Some(preset));
        }
    }

    #[test]
    fn test_custom_sorts() {
        let steps = CentSteps::custom(vec![50, -50, 0]).unwrap();
        assert_eq!(steps.as_slice(), &[-50, 0, 50]);
        assert!(steps.contains(0));
        assert!(!steps.contains(25));
        assert_eq!(steps.as_preset(), None);
    }

    #[test]
    fn test_custom_rejects_bad_sets() {
        assert!(CentSteps::custom(vec![]).is_err());
        assert!(CentSteps::custom(vec![0, 25, 25]).is_err());
        assert!(CentSteps::custom(vec![0, 1300]).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "quarter".parse::<CentSteps>().unwrap(),
            CentSteps::preset(StepPreset::Quarter)
        );
        assert_eq!("UPWARD".parse::<CentSteps>().unwrap().len(), 4);
        assert_eq!(
            "-10, 0,10".parse::<CentSteps>().unwrap().as_slice(),
            &[-10, 0, 10]
        );
        assert!("sixteenth".parse::<CentSteps>().is_err());
        assert!("0,x".parse::<CentSteps>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(CentSteps::label(25), "+25 cents");
        assert_eq!(CentSteps::label(0), "0 cents");
        assert_eq!(CentSteps::label(-75), "-75 cents");
    }

    #[test]
    fn test_display() {
        assert_eq!(CentSteps::default().to_string(), "eighth");
        assert_eq!(CentSteps::custom(vec![-5, 5]).unwrap().to_string(), "-5,5");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&CentSteps::preset(StepPreset::Upward)).unwrap();
        assert_eq!(json, "\"upward\"");
        let custom: CentSteps = serde_json::from_str("[10, -10]").unwrap();
        assert_eq!(custom.as_slice(), &[-10, 10]);
        assert_eq!(serde_json::to_string(&custom).unwrap(), "[-10,10]");
        assert!(serde_json::from_str::<CentSteps>("[]").is_err());
    }
}
