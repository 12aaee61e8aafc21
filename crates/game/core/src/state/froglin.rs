use crate::catalog::{Catalog, FroglinType, QUAD, ZoneId};
use crate::circuit_input::CircuitInput;
use crate::commitment::Commit;
use crate::config::GameConfig;
use crate::field::{self, EncodingError, Field};

/// A captured creature. `id == 0` marks an empty slot.
///
/// Base stats come from the species catalog; only `level_up` changes them.
/// `awake_at` and `habitats` ride along for circuit projection but are not
/// part of the commitment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Froglin {
    pub id: Field,
    pub kind: FroglinType,
    pub type_id: Field,
    pub stealth: Field,
    pub attack: Field,
    pub defense: Field,
    pub health: Field,
    pub level: Field,
    pub awake_at: [Field; QUAD],
    pub habitats: [ZoneId; QUAD],
}

impl Froglin {
    /// Instantiates a species from the catalog under a caller-chosen id.
    pub fn new(catalog: &Catalog, kind: FroglinType, id: Field) -> Self {
        let species = catalog.species(kind);
        Self {
            id,
            kind,
            type_id: species.type_id,
            stealth: species.stealth,
            attack: species.attack,
            defense: species.defense,
            health: species.health,
            level: species.level,
            awake_at: species.awake_at,
            habitats: species.habitats,
        }
    }

    /// Sentinel for an empty slot (the all-zero default species).
    pub fn empty() -> Self {
        let zero = Field::from(0u64);
        Self {
            id: zero,
            kind: FroglinType::Default,
            type_id: zero,
            stealth: zero,
            attack: zero,
            defense: zero,
            health: zero,
            level: zero,
            awake_at: [zero; QUAD],
            habitats: [ZoneId::Default; QUAD],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id == Field::from(0u64)
    }

    pub fn level_up(&mut self) {
        self.level += Field::from(1u64);
        self.attack += Field::from(1u64);
        self.defense += Field::from(1u64);
        self.health += Field::from(100u64);
    }

    /// Inverse of [`Commit::serialize`]. Schedule and habitats are restored
    /// from the catalog entry of the decoded `type_id`.
    pub fn import(catalog: &Catalog, fields: &[Field]) -> Result<Self, EncodingError> {
        let [id, type_id, stealth, attack, defense, health, level]: [Field;
            GameConfig::FROGLIN_SIZE] =
            fields.try_into().map_err(|_| EncodingError::Length {
                expected: GameConfig::FROGLIN_SIZE,
                actual: fields.len(),
            })?;
        let species = catalog
            .species_by_type_id(type_id)
            .ok_or_else(|| EncodingError::UnknownSpecies(field::to_hex(&type_id)))?;
        Ok(Self {
            id,
            kind: species.kind,
            type_id,
            stealth,
            attack,
            defense,
            health,
            level,
            awake_at: species.awake_at,
            habitats: species.habitats,
        })
    }

    /// Circuit projection, with each habitat expanded to its zone id and
    /// coordinate quad.
    pub fn to_circuit_input(&self, catalog: &Catalog) -> CircuitInput {
        let habitats = self.habitats.iter().map(|habitat| {
            let zone = catalog.zone(*habitat);
            CircuitInput::record()
                .with_scalar("id", &zone.id)
                .with(
                    "coords",
                    CircuitInput::list(zone.coords.iter().map(CircuitInput::scalars)),
                )
        });

        CircuitInput::record()
            .with_scalar("id", &self.id)
            .with_scalar("type_id", &self.type_id)
            .with_scalar("stealth", &self.stealth)
            .with_scalar("attack", &self.attack)
            .with_scalar("defense", &self.defense)
            .with_scalar("health", &self.health)
            .with_scalar("level", &self.level)
            .with("awake_at", CircuitInput::scalars(&self.awake_at))
            .with("habitats", CircuitInput::list(habitats))
    }
}

impl Default for Froglin {
    fn default() -> Self {
        Self::empty()
    }
}

impl Commit for Froglin {
    fn serialize(&self) -> Vec<Field> {
        vec![
            self.id,
            self.type_id,
            self.stealth,
            self.attack,
            self.defense,
            self.health,
            self.level,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Hasher;

    fn f(value: u64) -> Field {
        Field::from(value)
    }

    #[test]
    fn copies_species_stats() {
        let catalog = Catalog::builtin();
        let froglin = Froglin::new(&catalog, FroglinType::DesertFroglin, f(1));
        assert_eq!(
            froglin.serialize(),
            vec![f(1), f(1), f(1), f(8), f(4), f(200), f(1)]
        );
        assert_eq!(froglin.habitats[0], ZoneId::Desert);
    }

    #[test]
    fn level_up_bumps_stats() {
        let catalog = Catalog::builtin();
        let mut froglin = Froglin::new(&catalog, FroglinType::TreeFroglin, f(2));
        froglin.level_up();
        assert_eq!(froglin.level, f(2));
        assert_eq!(froglin.attack, f(8));
        assert_eq!(froglin.defense, f(6));
        assert_eq!(froglin.health, f(600));
        assert_eq!(froglin.stealth, f(6));
    }

    #[test]
    fn default_species_is_the_empty_slot() {
        let catalog = Catalog::builtin();
        assert_eq!(
            Froglin::new(&catalog, FroglinType::Default, f(0)),
            Froglin::empty()
        );
    }

    #[test]
    fn import_restores_schedule_from_catalog() {
        let catalog = Catalog::builtin();
        let mut froglin = Froglin::new(&catalog, FroglinType::TreeFroglin, f(9));
        froglin.level_up();
        let imported = Froglin::import(&catalog, &froglin.serialize()).expect("valid layout");
        assert_eq!(imported, froglin);
    }

    #[test]
    fn import_rejects_unknown_species() {
        let catalog = Catalog::builtin();
        let fields = [f(1), f(42), f(0), f(0), f(0), f(0), f(0)];
        assert!(matches!(
            Froglin::import(&catalog, &fields),
            Err(EncodingError::UnknownSpecies(_))
        ));
        assert!(matches!(
            Froglin::import(&catalog, &fields[..6]),
            Err(EncodingError::Length { expected: 7, actual: 6 })
        ));
    }

    #[test]
    fn circuit_input_expands_habitats() {
        let catalog = Catalog::builtin();
        let froglin = Froglin::new(&catalog, FroglinType::DesertFroglin, f(1));
        let input = froglin.to_circuit_input(&catalog);

        assert_eq!(
            input.keys(),
            vec![
                "id", "type_id", "stealth", "attack", "defense", "health", "level", "awake_at",
                "habitats"
            ]
        );
        assert_eq!(input.lookup("habitats[0].id").map(CircuitInput::decode), Some(Ok(f(1))));
        assert_eq!(
            input.lookup("habitats[0].coords[3][1]").map(CircuitInput::decode),
            Some(Ok(f(100)))
        );
        assert_eq!(input.lookup("awake_at[2]").map(CircuitInput::decode), Some(Ok(f(96))));
        assert_eq!(input.leaf_count(), 7 + 4 + 4 * 9);
    }

    #[test]
    fn commitment_depends_on_level() {
        let catalog = Catalog::builtin();
        let hasher = Hasher::default();
        let secret = f(123);
        let mut froglin = Froglin::new(&catalog, FroglinType::DesertFroglin, f(1));
        let before = froglin.commit(&hasher, secret);
        froglin.level_up();
        assert_ne!(froglin.commit(&hasher, secret), before);
    }
}
