use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_NAME: &str = "BitBuddy";

/// A counter clamped to `0..=100`. Every arithmetic step saturates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Stat(u8);

impl Stat {
    pub const MIN: Stat = Stat(0);
    pub const MAX: Stat = Stat(100);
    pub const MIDPOINT: Stat = Stat(50);

    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn shift(self, delta: i32) -> Self {
        Self::new(i64::from(self.0) + i64::from(delta))
    }
}

impl Default for Stat {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

impl From<i64> for Stat {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Stat> for u8 {
    fn from(stat: Stat) -> Self {
        stat.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    #[default]
    Cat,
    Dog,
    Bunny,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Cat, Species::Dog, Species::Bunny];

    pub fn next(self) -> Self {
        match self {
            Species::Cat => Species::Dog,
            Species::Dog => Species::Bunny,
            Species::Bunny => Species::Cat,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Species::Cat => "Cat",
            Species::Dog => "Dog",
            Species::Bunny => "Bunny",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|sp| sp.label().eq_ignore_ascii_case(s.trim()))
    }
}

// Unknown or empty species names fall back to the default instead of
// rejecting the whole save file.
fn lenient_species<'de, D: Deserializer<'de>>(d: D) -> Result<Species, D::Error> {
    let raw = Option::<String>::deserialize(d)?;
    Ok(raw
        .as_deref()
        .and_then(Species::from_label)
        .unwrap_or_default())
}

// An explicit null reads the same as a missing field.
fn null_stat<'de, D: Deserializer<'de>>(d: D) -> Result<Stat, D::Error> {
    Ok(Option::<Stat>::deserialize(d)?.unwrap_or_default())
}

fn null_name<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_else(|| DEFAULT_NAME.to_string()))
}

fn null_time<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
    Ok(Option::<DateTime<Utc>>::deserialize(d)?.unwrap_or_else(Utc::now))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pet {
    #[serde(alias = "Name", deserialize_with = "null_name")]
    pub name: String,
    #[serde(alias = "Species", alias = "PetType", deserialize_with = "lenient_species")]
    pub species: Species,
    #[serde(alias = "Hunger", deserialize_with = "null_stat")]
    pub hunger: Stat,
    #[serde(alias = "Happiness", deserialize_with = "null_stat")]
    pub happiness: Stat,
    #[serde(alias = "Energy", deserialize_with = "null_stat")]
    pub energy: Stat,
    #[serde(alias = "CreatedAt", deserialize_with = "null_time")]
    pub created_at: DateTime<Utc>,
    #[serde(alias = "UpdatedAt", deserialize_with = "null_time")]
    pub updated_at: DateTime<Utc>,
}

impl Default for Pet {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

impl Pet {
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        Self {
            name: name.to_string(),
            species: Species::default(),
            hunger: Stat::MIDPOINT,
            happiness: Stat::MIDPOINT,
            energy: Stat::MIDPOINT,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn feed(&mut self) {
        self.hunger = self.hunger.shift(-20);
        self.happiness = self.happiness.shift(5);
        self.touch();
    }

    pub fn play(&mut self) {
        self.happiness = self.happiness.shift(20);
        self.energy = self.energy.shift(-15);
        self.touch();
    }

    pub fn sleep(&mut self) {
        self.energy = self.energy.shift(40);
        self.touch();
    }

    /// One step of the background clock: the pet gets hungrier, sadder and
    /// a little more tired.
    pub fn decay(&mut self) {
        self.hunger = self.hunger.shift(5);
        self.happiness = self.happiness.shift(-5);
        self.energy = self.energy.shift(-2);
        self.touch();
    }

    pub fn rename(&mut self, name: &str) {
        self.name = name.to_string();
        self.touch();
    }

    pub fn cycle_species(&mut self) {
        self.species = self.species.next();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn pet_with(hunger: i64, happiness: i64, energy: i64) -> Pet {
        Pet {
            hunger: Stat::new(hunger),
            happiness: Stat::new(happiness),
            energy: Stat::new(energy),
            ..Pet::default()
        }
    }

    #[test]
    fn feed_lowers_hunger_and_cheers_up() {
        let mut p = pet_with(50, 50, 50);
        p.feed();
        assert_eq!(p.hunger.get(), 30);
        assert_eq!(p.happiness.get(), 55);
        assert_eq!(p.energy.get(), 50);
    }

    #[test]
    fn play_trades_energy_for_happiness() {
        let mut p = pet_with(50, 50, 50);
        p.play();
        assert_eq!(p.happiness.get(), 70);
        assert_eq!(p.energy.get(), 35);
        assert_eq!(p.hunger.get(), 50);
    }

    #[test]
    fn sleep_restores_energy() {
        let mut p = pet_with(50, 50, 50);
        p.sleep();
        assert_eq!(p.energy.get(), 90);
        p.sleep();
        assert_eq!(p.energy.get(), 100);
    }

    #[test]
    fn feed_clamps_at_zero() {
        let mut p = pet_with(10, 98, 50);
        p.feed();
        assert_eq!(p.hunger.get(), 0);
        assert_eq!(p.happiness.get(), 100);
    }

    #[test]
    fn decay_saturates_and_then_stops_changing() {
        let mut p = pet_with(50, 50, 50);
        let mut prev = (p.hunger, p.happiness);
        for _ in 0..100 {
            p.decay();
            assert!(p.hunger >= prev.0);
            assert!(p.happiness <= prev.1);
            prev = (p.hunger, p.happiness);
        }
        assert_eq!(p.hunger, Stat::MAX);
        assert_eq!(p.happiness, Stat::MIN);
        assert_eq!(p.energy, Stat::MIN);

        let before = (p.hunger, p.happiness, p.energy);
        p.decay();
        assert_eq!((p.hunger, p.happiness, p.energy), before);
    }

    #[test]
    fn species_cycle_wraps() {
        let mut p = Pet::default();
        assert_eq!(p.species, Species::Cat);
        p.cycle_species();
        p.cycle_species();
        assert_eq!(p.species, Species::Bunny);
        p.cycle_species();
        assert_eq!(p.species, Species::Cat);
    }

    #[test]
    fn species_label_lookup_is_case_insensitive() {
        assert_eq!(Species::from_label("dog"), Some(Species::Dog));
        assert_eq!(Species::from_label(" BUNNY "), Some(Species::Bunny));
        assert_eq!(Species::from_label("dragon"), None);
    }

    #[test]
    fn stat_deserializes_out_of_range_as_clamped() {
        let p: Pet = serde_json::from_str(r#"{"hunger": 250, "happiness": -4}"#).unwrap();
        assert_eq!(p.hunger.get(), 100);
        assert_eq!(p.happiness.get(), 0);
        assert_eq!(p.energy.get(), 50);
    }

    #[test]
    fn unknown_species_falls_back_to_cat() {
        let p: Pet = serde_json::from_str(r#"{"name": "Rex", "species": "Dragon"}"#).unwrap();
        assert_eq!(p.name, "Rex");
        assert_eq!(p.species, Species::Cat);
    }

    #[test]
    fn legacy_field_names_are_accepted() {
        let raw = r#"{
            "Name": "Mochi",
            "PetType": "Bunny",
            "Hunger": 12,
            "Happiness": 80,
            "Energy": 64,
            "CreatedAt": "2024-03-01T09:30:00.5-05:00",
            "UpdatedAt": "2024-03-02T09:30:00Z"
        }"#;
        let p: Pet = serde_json::from_str(raw).unwrap();
        assert_eq!(p.name, "Mochi");
        assert_eq!(p.species, Species::Bunny);
        assert_eq!(
            (p.hunger.get(), p.happiness.get(), p.energy.get()),
            (12, 80, 64)
        );
        assert_eq!(p.created_at.to_rfc3339(), "2024-03-01T14:30:00.500+00:00");
    }

    #[test]
    fn null_fields_read_as_missing() {
        let raw = r#"{
            "name": null,
            "species": null,
            "hunger": null,
            "happiness": 70,
            "energy": null,
            "createdAt": null,
            "updatedAt": null
        }"#;
        let p: Pet = serde_json::from_str(raw).unwrap();
        assert_eq!(p.name, DEFAULT_NAME);
        assert_eq!(p.species, Species::Cat);
        assert_eq!(p.hunger, Stat::MIDPOINT);
        assert_eq!(p.happiness.get(), 70);
        assert_eq!(p.energy, Stat::MIDPOINT);
    }

    #[test]
    fn serializes_camel_case_fields() {
        let v = serde_json::to_value(Pet::default()).unwrap();
        for key in [
            "name",
            "species",
            "hunger",
            "happiness",
            "energy",
            "createdAt",
            "updatedAt",
        ] {
            assert!(v.get(key).is_some(), "missing {key}");
        }
        assert_eq!(v["species"], "Cat");
        assert_eq!(v["hunger"], 50);
    }

    #[derive(Clone, Copy, Debug)]
    enum Op {
        Feed,
        Play,
        Sleep,
        Decay,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Feed),
            Just(Op::Play),
            Just(Op::Sleep),
            Just(Op::Decay)
        ]
    }

    proptest! {
        #[test]
        fn counters_stay_in_bounds(
            h in -50i64..200,
            hp in -50i64..200,
            e in -50i64..200,
            ops in proptest::collection::vec(op(), 0..64),
        ) {
            let mut p = pet_with(h, hp, e);
            for o in ops {
                match o {
                    Op::Feed => p.feed(),
                    Op::Play => p.play(),
                    Op::Sleep => p.sleep(),
                    Op::Decay => p.decay(),
                }
                for s in [p.hunger, p.happiness, p.energy] {
                    prop_assert!(s.get() <= 100);
                }
            }
        }
    }
}
