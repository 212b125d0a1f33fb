//! # Collection records: the personal backend's entities
//!
//! Shapes exchanged with the personal collection backend. Field names follow
//! the backend's JSON (`type`, `specialAttack`, `evolvesFrom`, ...), and the
//! document id arrives in Mongo extended JSON as `{"_id": {"$oid": "..."}}`.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`CollectionRecord`] | A user-owned Pokémon entry. The same shape is sent as the create/update payload (with no id). |
//! | [`StatBlock`] | The six base stats. |
//! | [`Evolution`] | Optional predecessor/successor names. |
//! | [`RecordId`] | The backend's stable document id. |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Backend document id (`{"$oid": "..."}`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId {
    #[serde(rename = "$oid")]
    pub oid: String,
}

/// A Pokémon entry in the user's collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(rename = "type")]
    pub types: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub stats: StatBlock,
    #[serde(default)]
    pub evolution: Evolution,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evolution {
    pub evolves_from: Option<String>,
    pub evolves_to: Option<String>,
}

impl CollectionRecord {
    /// Whether `other` denotes the same backend entity.
    ///
    /// Compares document ids when both sides carry one and names otherwise,
    /// since the backend addresses records by name.
    pub fn same_record(&self, other: &CollectionRecord) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => self.name == other.name,
        }
    }

    /// First entry of the type list, used for grouping.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// Stable key for rendering lists.
    pub fn key(&self) -> &str {
        self.id.as_ref().map_or(self.name.as_str(), |id| id.oid.as_str())
    }
}

impl StatBlock {
    /// `(label, value)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, u32); 6] {
        [
            ("HP", self.hp),
            ("Attack", self.attack),
            ("Defense", self.defense),
            ("Sp. Atk", self.special_attack),
            ("Sp. Def", self.special_defense),
            ("Speed", self.speed),
        ]
    }

    pub fn total(&self) -> u32 {
        self.entries().iter().map(|(_, v)| v).sum()
    }
}

/// Number of records per primary type, ordered by type name.
pub fn count_by_primary_type(records: &[CollectionRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        if let Some(primary) = record.primary_type() {
            *counts.entry(primary.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, types: &[&str]) -> CollectionRecord {
        CollectionRecord {
            id: None,
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
            abilities: Vec::new(),
            moves: Vec::new(),
            stats: StatBlock::default(),
            evolution: Evolution::default(),
            description: String::new(),
        }
    }

    #[test]
    fn test_deserialize_backend_document() {
        let json = r#"{
            "_id": {"$oid": "665f1c"},
            "name": "bulbasaur",
            "type": ["grass", "poison"],
            "abilities": ["overgrow"],
            "moves": ["tackle"],
            "stats": {"hp": 45, "attack": 49, "defense": 49,
                      "specialAttack": 65, "specialDefense": 65, "speed": 45},
            "evolution": {"evolvesFrom": null, "evolvesTo": "ivysaur"},
            "description": "A strange seed."
        }"#;
        let r: CollectionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.id.as_ref().unwrap().oid, "665f1c");
        assert_eq!(r.types, vec!["grass", "poison"]);
        assert_eq!(r.stats.special_attack, 65);
        assert_eq!(r.evolution.evolves_to.as_deref(), Some("ivysaur"));
        assert_eq!(r.stats.total(), 318);
        assert_eq!(r.key(), "665f1c");
    }

    #[test]
    fn test_payload_omits_id() {
        let value = serde_json::to_value(record("pikachu", &["electric"])).unwrap();
        assert!(value.get("_id").is_none());
        assert_eq!(value["type"], serde_json::json!(["electric"]));
        assert_eq!(value["stats"]["specialDefense"], 0);
        assert_eq!(value["evolution"]["evolvesFrom"], serde_json::Value::Null);
    }

    #[test]
    fn test_same_record_prefers_ids() {
        let mut a = record("pikachu", &["electric"]);
        let mut b = record("pikachu", &["electric"]);
        assert!(a.same_record(&b));

        a.id = Some(RecordId { oid: "1".to_string() });
        b.id = Some(RecordId { oid: "2".to_string() });
        assert!(!a.same_record(&b));

        b.id = None;
        assert!(a.same_record(&b));
    }

    #[test]
    fn test_count_by_primary_type() {
        let records = vec![
            record("charmander", &["fire"]),
            record("bulbasaur", &["grass", "poison"]),
            record("vulpix", &["fire"]),
            record("missingno", &[]),
        ];
        let counts = count_by_primary_type(&records);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["fire"], 2);
        assert_eq!(counts["grass"], 1);
        assert_eq!(counts.keys().next().map(String::as_str), Some("fire"));
    }
}
