//=========================================================================
// Level Description
//=========================================================================
//
// Static level layout read from a JSON asset:
//
//   {
//     "hero":      { "x": 21, "y": 525 },
//     "platforms": [ { "image": "ground", "x": 0, "y": 546 }, ... ],
//     "coins":     [ { "x": 231, "y": 504 }, ... ]
//   }
//
// Extra sections (spiders, decoration) are ignored. Missing `platforms`
// or `coins` lists are treated as empty.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::Deserialize;
use serde_json::Value;

//=== Level Data ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,

    /// Texture key, e.g. `ground` or `grass:4x1`.
    pub image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CoinSpec {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelDescription {
    pub hero: Point,

    #[serde(default)]
    pub platforms: Vec<PlatformSpec>,

    #[serde(default)]
    pub coins: Vec<CoinSpec>,
}

impl LevelDescription {
    /// Parses a level from the JSON cached under `key`.
    pub fn from_json(key: &str, json: Option<&Value>) -> Result<Self, LevelError> {
        let value = json.ok_or_else(|| LevelError::Missing(key.to_owned()))?;
        Self::deserialize(value).map_err(|source| LevelError::Parse {
            key: key.to_owned(),
            source,
        })
    }
}

//=== LevelError ==========================================================

#[derive(Debug)]
pub enum LevelError {
    /// No JSON asset under this key.
    Missing(String),

    /// JSON does not describe a level.
    Parse {
        key: String,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(key) => write!(f, "Level '{}' is not loaded", key),
            Self::Parse { key, source } => write!(f, "Level '{}' is malformed: {}", key, source),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Missing(_) => None,
            Self::Parse { source, .. } => Some(source),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_full_level_and_ignores_extras() {
        let value = json!({
            "hero": { "x": 21, "y": 525 },
            "platforms": [
                { "image": "ground", "x": 0, "y": 546 },
                { "image": "grass:4x1", "x": 420, "y": 420 }
            ],
            "coins": [ { "x": 231, "y": 504 } ],
            "spiders": [ { "x": 121, "y": 399 } ],
            "decoration": []
        });

        let level = LevelDescription::from_json("level:1", Some(&value)).expect("valid level");

        assert_eq!(level.hero, Point { x: 21.0, y: 525.0 });
        assert_eq!(level.platforms.len(), 2);
        assert_eq!(level.platforms[1].image, "grass:4x1");
        assert_eq!(level.coins, vec![CoinSpec { x: 231.0, y: 504.0 }]);
    }

    #[test]
    fn shipped_level_parses() {
        let value: Value =
            serde_json::from_str(include_str!("../../assets/data/level01.json")).expect("valid JSON");

        let level = LevelDescription::from_json("level:1", Some(&value)).expect("valid level");

        assert_eq!(level.hero, Point { x: 21.0, y: 525.0 });
        assert_eq!(level.platforms[0].image, "ground");
        assert!(!level.coins.is_empty());
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let value = json!({ "hero": { "x": 1, "y": 2 } });

        let level = LevelDescription::from_json("level:1", Some(&value)).expect("valid level");

        assert!(level.platforms.is_empty());
        assert!(level.coins.is_empty());
    }

    #[test]
    fn missing_json_is_reported() {
        let err = LevelDescription::from_json("level:9", None).expect_err("missing");
        assert!(matches!(err, LevelError::Missing(ref key) if key == "level:9"));
    }

    #[test]
    fn missing_hero_is_a_parse_error() {
        let value = json!({ "platforms": [] });

        let err = LevelDescription::from_json("level:1", Some(&value)).expect_err("no hero");

        assert!(matches!(err, LevelError::Parse { .. }));
        assert!(err.to_string().contains("level:1"));
    }
}
