//! Static species and zone catalog.
//!
//! The catalog is read-only configuration loaded at startup (see the
//! `froglin-content` crate for the RON loader). Entities never store catalog
//! data they can look up again, except the base stats a Froglin starts with.
//!
//! [`CatalogSpec`] is the serializable, unchecked form; [`Catalog`] is the
//! validated form every lookup goes through. Validation guarantees that each
//! [`ZoneId`] and [`FroglinType`] variant has exactly one entry, so lookups by
//! tag are infallible.

use strum::{EnumCount, IntoEnumIterator};

use crate::field::Field;

/// Number of awake epochs and habitats per species, and corners per zone.
pub const QUAD: usize = 4;

/// Tag of a static zone.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumCount, strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ZoneId {
    Default,
    Desert,
    Forest,
}

/// Tag of a Froglin species.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumCount, strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum FroglinType {
    Default,
    DesertFroglin,
    TreeFroglin,
}

impl ZoneId {
    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

impl FroglinType {
    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Quad-shaped region with its on-chain id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zone {
    pub id: Field,
    pub coords: [[Field; 2]; QUAD],
}

/// Base stats and schedule of a species.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Species {
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

// ============================================================================
// Serializable specs
// ============================================================================

/// Unchecked zone entry as written in data files.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneSpec {
    pub kind: ZoneId,
    pub id: u64,
    pub coords: Vec<(u64, u64)>,
}

/// Unchecked species entry as written in data files.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesSpec {
    pub kind: FroglinType,
    pub type_id: u64,
    pub stealth: u64,
    pub attack: u64,
    pub defense: u64,
    pub health: u64,
    pub level: u64,
    pub awake_at: Vec<u64>,
    pub habitats: Vec<ZoneId>,
}

/// Unchecked catalog as written in data files.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogSpec {
    pub zones: Vec<ZoneSpec>,
    pub species: Vec<SpeciesSpec>,
}

// ============================================================================
// Builtin tables
// ============================================================================

type ZoneRow = (ZoneId, u64, [(u64, u64); QUAD]);
/// `(kind, [type_id, stealth, attack, defense, health, level], awake_at, habitats)`
type SpeciesRow = (FroglinType, [u64; 6], [u64; QUAD], [ZoneId; QUAD]);

// Rows are listed in discriminant order.
const BUILTIN_ZONES: [ZoneRow; ZoneId::COUNT] = [
    (ZoneId::Default, 0, [(0, 0); QUAD]),
    (ZoneId::Desert, 1, [(0, 0), (0, 100), (100, 0), (100, 100)]),
    (ZoneId::Forest, 2, [(400, 400), (400, 500), (500, 400), (500, 500)]),
];

const BUILTIN_SPECIES: [SpeciesRow; FroglinType::COUNT] = [
    (FroglinType::Default, [0; 6], [0; QUAD], [ZoneId::Default; QUAD]),
    (
        FroglinType::DesertFroglin,
        [1, 1, 8, 4, 200, 1],
        [60, 78, 96, 114],
        [ZoneId::Desert, ZoneId::Default, ZoneId::Default, ZoneId::Default],
    ),
    (
        FroglinType::TreeFroglin,
        [2, 6, 7, 5, 500, 1],
        [8, 16, 31, 51],
        [ZoneId::Forest, ZoneId::Default, ZoneId::Default, ZoneId::Default],
    ),
];

impl CatalogSpec {
    /// The catalog the circuits were compiled against, in data-file form.
    pub fn builtin() -> Self {
        Self {
            zones: BUILTIN_ZONES
                .iter()
                .map(|&(kind, id, coords)| ZoneSpec {
                    kind,
                    id,
                    coords: coords.to_vec(),
                })
                .collect(),
            species: BUILTIN_SPECIES
                .iter()
                .map(|&(kind, stats, awake_at, habitats)| SpeciesSpec {
                    kind,
                    type_id: stats[0],
                    stealth: stats[1],
                    attack: stats[2],
                    defense: stats[3],
                    health: stats[4],
                    level: stats[5],
                    awake_at: awake_at.to_vec(),
                    habitats: habitats.to_vec(),
                })
                .collect(),
        }
    }
}

/// Errors raised while validating a [`CatalogSpec`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("zone `{0}` is defined more than once")]
    DuplicateZone(&'static str),

    #[error("zone `{0}` is missing")]
    MissingZone(&'static str),

    #[error("species `{0}` is defined more than once")]
    DuplicateSpecies(&'static str),

    #[error("species `{0}` is missing")]
    MissingSpecies(&'static str),

    #[error("type id {0} is used by more than one species")]
    DuplicateTypeId(u64),

    #[error("`{entry}` must list exactly {QUAD} {what}, found {found}")]
    WrongArity {
        entry: &'static str,
        what: &'static str,
        found: usize,
    },

    #[error("sentinel entry `{0}` must be all zero")]
    NonZeroSentinel(&'static str),
}

impl crate::error::GameError for CatalogError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Validation
    }
}

/// Validated catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    // Indexed by ZoneId / FroglinType discriminant.
    zones: Vec<Zone>,
    species: Vec<Species>,
}

impl Catalog {
    /// The catalog the circuits were compiled against.
    ///
    /// Built straight from the typed tables, which already have the shape
    /// [`Catalog::from_spec`] enforces.
    pub fn builtin() -> Self {
        let zones = BUILTIN_ZONES
            .iter()
            .map(|&(_, id, coords)| Zone {
                id: Field::from(id),
                coords: coords.map(|(x, y)| [Field::from(x), Field::from(y)]),
            })
            .collect();
        let species = BUILTIN_SPECIES
            .iter()
            .map(|&(kind, stats, awake_at, habitats)| {
                let [type_id, stealth, attack, defense, health, level] = stats.map(Field::from);
                Species {
                    kind,
                    type_id,
                    stealth,
                    attack,
                    defense,
                    health,
                    level,
                    awake_at: awake_at.map(Field::from),
                    habitats,
                }
            })
            .collect();
        Self { zones, species }
    }

    pub fn from_spec(spec: &CatalogSpec) -> Result<Self, CatalogError> {
        let mut zones: Vec<Option<Zone>> = vec![None; ZoneId::COUNT];
        for entry in &spec.zones {
            let name: &'static str = entry.kind.into();
            let corners: [(u64, u64); QUAD] =
                entry
                    .coords
                    .as_slice()
                    .try_into()
                    .map_err(|_| CatalogError::WrongArity {
                        entry: name,
                        what: "coordinates",
                        found: entry.coords.len(),
                    })?;
            let slot = &mut zones[entry.kind.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateZone(name));
            }
            if entry.kind == ZoneId::Default
                && (entry.id != 0 || corners.iter().any(|&(x, y)| x != 0 || y != 0))
            {
                return Err(CatalogError::NonZeroSentinel(name));
            }
            *slot = Some(Zone {
                id: Field::from(entry.id),
                coords: corners.map(|(x, y)| [Field::from(x), Field::from(y)]),
            });
        }

        let mut species: Vec<Option<Species>> = vec![None; FroglinType::COUNT];
        let mut type_ids = Vec::with_capacity(spec.species.len());
        for entry in &spec.species {
            let name: &'static str = entry.kind.into();
            let awake_at: [u64; QUAD] =
                entry
                    .awake_at
                    .as_slice()
                    .try_into()
                    .map_err(|_| CatalogError::WrongArity {
                        entry: name,
                        what: "awake epochs",
                        found: entry.awake_at.len(),
                    })?;
            let habitats: [ZoneId; QUAD] =
                entry
                    .habitats
                    .as_slice()
                    .try_into()
                    .map_err(|_| CatalogError::WrongArity {
                        entry: name,
                        what: "habitats",
                        found: entry.habitats.len(),
                    })?;
            if type_ids.contains(&entry.type_id) {
                return Err(CatalogError::DuplicateTypeId(entry.type_id));
            }
            type_ids.push(entry.type_id);

            let slot = &mut species[entry.kind.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateSpecies(name));
            }
            let stats = [
                entry.type_id,
                entry.stealth,
                entry.attack,
                entry.defense,
                entry.health,
                entry.level,
            ];
            if entry.kind == FroglinType::Default
                && (stats.iter().chain(awake_at.iter()).any(|&v| v != 0)
                    || habitats.iter().any(|&h| h != ZoneId::Default))
            {
                return Err(CatalogError::NonZeroSentinel(name));
            }
            *slot = Some(Species {
                kind: entry.kind,
                type_id: Field::from(entry.type_id),
                stealth: Field::from(entry.stealth),
                attack: Field::from(entry.attack),
                defense: Field::from(entry.defense),
                health: Field::from(entry.health),
                level: Field::from(entry.level),
                awake_at: awake_at.map(Field::from),
                habitats,
            });
        }

        let zones = ZoneId::iter()
            .zip(zones)
            .map(|(kind, zone)| zone.ok_or(CatalogError::MissingZone(kind.into())))
            .collect::<Result<Vec<_>, _>>()?;
        let species = FroglinType::iter()
            .zip(species)
            .map(|(kind, entry)| {
                entry.ok_or(CatalogError::MissingSpecies(kind.into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            zones = zones.len(),
            species = species.len(),
            "catalog validated"
        );
        Ok(Self { zones, species })
    }

    pub fn zone(&self, id: ZoneId) -> &Zone {
        &self.zones[id.index()]
    }

    pub fn species(&self, kind: FroglinType) -> &Species {
        &self.species[kind.index()]
    }

    /// Looks a species up by its on-circuit type id.
    pub fn species_by_type_id(&self, type_id: Field) -> Option<&Species> {
        self.species.iter().find(|s| s.type_id == type_id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_validates() {
        assert_eq!(
            Catalog::from_spec(&CatalogSpec::builtin()),
            Ok(Catalog::builtin())
        );
    }

    #[test]
    fn builtin_rows_follow_discriminant_order() {
        for (index, (kind, ..)) in BUILTIN_ZONES.iter().enumerate() {
            assert_eq!(kind.index(), index);
        }
        for (index, (kind, ..)) in BUILTIN_SPECIES.iter().enumerate() {
            assert_eq!(kind.index(), index);
        }
    }

    #[test]
    fn desert_species_matches_table() {
        let catalog = Catalog::builtin();
        let desert = catalog.species(FroglinType::DesertFroglin);
        assert_eq!(desert.type_id, Field::from(1u64));
        assert_eq!(desert.attack, Field::from(8u64));
        assert_eq!(desert.health, Field::from(200u64));
        assert_eq!(desert.awake_at[3], Field::from(114u64));
        assert_eq!(desert.habitats[0], ZoneId::Desert);
    }

    #[test]
    fn forest_zone_geometry() {
        let catalog = Catalog::builtin();
        let forest = catalog.zone(ZoneId::Forest);
        assert_eq!(forest.id, Field::from(2u64));
        assert_eq!(forest.coords[1], [Field::from(400u64), Field::from(500u64)]);
    }

    #[test]
    fn lookup_by_type_id() {
        let catalog = Catalog::builtin();
        let tree = catalog
            .species_by_type_id(Field::from(2u64))
            .expect("tree froglin is type 2");
        assert_eq!(tree.kind, FroglinType::TreeFroglin);
        assert!(catalog.species_by_type_id(Field::from(99u64)).is_none());
    }

    #[test]
    fn rejects_missing_zone() {
        let mut spec = CatalogSpec::builtin();
        spec.zones.retain(|z| z.kind != ZoneId::Forest);
        assert_eq!(
            Catalog::from_spec(&spec),
            Err(CatalogError::MissingZone("forest"))
        );
    }

    #[test]
    fn rejects_duplicate_type_id() {
        let mut spec = CatalogSpec::builtin();
        spec.species[2].type_id = 1;
        assert_eq!(
            Catalog::from_spec(&spec),
            Err(CatalogError::DuplicateTypeId(1))
        );
    }

    #[test]
    fn rejects_wrong_arity() {
        let mut spec = CatalogSpec::builtin();
        spec.species[1].awake_at.pop();
        assert!(matches!(
            Catalog::from_spec(&spec),
            Err(CatalogError::WrongArity { found: 3, .. })
        ));
    }

    #[test]
    fn rejects_non_zero_sentinel() {
        let mut spec = CatalogSpec::builtin();
        spec.species[0].health = 1;
        assert_eq!(
            Catalog::from_spec(&spec),
            Err(CatalogError::NonZeroSentinel("default"))
        );
    }
}
