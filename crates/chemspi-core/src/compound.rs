//! # Compound
//!
//! A handle on one ChemSpider record. Nothing is fetched at construction;
//! each group of attributes is requested from the [`CompoundClient`] the
//! first time one of its fields is read, then served from memory.
//!
//! | Group | Client call | Accessors |
//! |---|---|---|
//! | basic info | `fetch_basic_info` | `smiles`, `stdinchi`, `stdinchikey` |
//! | extended info | `fetch_extended_info` | `molecular_formula`, `inchi`, `inchikey`, masses, `alogp`, `xlogp`, `common_name` |
//! | 2D MOL | `fetch_structure_file(_, Two)` | `mol_2d` |
//! | 3D MOL | `fetch_structure_file(_, Three)` | `mol_3d` |
//! | thumbnail | `fetch_thumbnail` | `image` |

use crate::cache::{CacheCounters, CacheStats, MemoCell, Slot};
use crate::{
    CompoundClient, CompoundInfo, Csid, Dimension, Error, ExtendedCompoundInfo, FieldValue,
    IntoCsid, Result,
};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::{debug, trace};

/// Names accepted by [`Compound::field`].
pub const FIELD_NAMES: [&str; 13] = [
    "smiles",
    "stdinchi",
    "stdinchikey",
    "molecular_formula",
    "inchi",
    "inchikey",
    "average_mass",
    "molecular_weight",
    "monoisotopic_mass",
    "nominal_mass",
    "alogp",
    "xlogp",
    "common_name",
];

/// Lazily populated ChemSpider compound.
///
/// Two compounds are equal when their IDs are equal, whatever they have
/// cached and whichever client they use.
pub struct Compound<C: ?Sized> {
    csid: Csid,
    info: MemoCell<CompoundInfo>,
    extended: MemoCell<ExtendedCompoundInfo>,
    mol_2d: MemoCell<String>,
    mol_3d: MemoCell<String>,
    image: MemoCell<Vec<u8>>,
    counters: CacheCounters,
    client: Arc<C>,
}

impl<C: CompoundClient + ?Sized> Compound<C> {
    /// Create a compound with nothing cached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCsid`] if `csid` cannot be parsed as an integer.
    pub fn new(client: Arc<C>, csid: impl IntoCsid) -> Result<Self> {
        Ok(Self {
            csid: csid.into_csid()?,
            info: MemoCell::new(),
            extended: MemoCell::new(),
            mol_2d: MemoCell::new(),
            mol_3d: MemoCell::new(),
            image: MemoCell::new(),
            counters: CacheCounters::new(),
            client,
        })
    }

    /// Seed the basic info slot with a record already at hand.
    #[must_use]
    pub fn with_info(mut self, info: CompoundInfo) -> Self {
        self.info = MemoCell::seeded(info);
        self
    }

    /// Seed the extended info slot with a record already at hand.
    #[must_use]
    pub fn with_extended_info(mut self, extended: ExtendedCompoundInfo) -> Self {
        self.extended = MemoCell::seeded(extended);
        self
    }

    /// ChemSpider ID.
    pub fn csid(&self) -> Csid {
        self.csid
    }

    /// The client this compound delegates to.
    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    /// URL of a PNG image of the 2D chemical structure.
    pub fn image_url(&self) -> String {
        format!(
            "http://{}/ImagesHandler.ashx?id={}",
            self.client.image_host(),
            self.csid
        )
    }

    // =========================================================================
    // GROUPS
    // =========================================================================

    /// Basic info record, fetched on first use.
    pub fn info(&self) -> Result<&CompoundInfo> {
        self.load(Slot::BasicInfo, &self.info, |c, id| c.fetch_basic_info(id))
    }

    /// Extended info record, fetched on first use.
    pub fn extended_info(&self) -> Result<&ExtendedCompoundInfo> {
        self.load(Slot::ExtendedInfo, &self.extended, |c, id| {
            c.fetch_extended_info(id)
        })
    }

    /// MOL file with 2D coordinates.
    pub fn mol_2d(&self) -> Result<&str> {
        self.load(Slot::Mol2d, &self.mol_2d, |c, id| {
            c.fetch_structure_file(id, Dimension::Two)
        })
        .map(String::as_str)
    }

    /// MOL file with 3D coordinates.
    pub fn mol_3d(&self) -> Result<&str> {
        self.load(Slot::Mol3d, &self.mol_3d, |c, id| {
            c.fetch_structure_file(id, Dimension::Three)
        })
        .map(String::as_str)
    }

    /// 2D depiction of this compound (PNG bytes).
    pub fn image(&self) -> Result<&[u8]> {
        self.load(Slot::Thumbnail, &self.image, |c, id| c.fetch_thumbnail(id))
            .map(Vec::as_slice)
    }

    fn load<'a, T>(
        &'a self,
        slot: Slot,
        cell: &'a MemoCell<T>,
        fetch: impl FnOnce(&C, Csid) -> Result<T>,
    ) -> Result<&'a T> {
        if cell.is_populated() {
            trace!(csid = %self.csid, %slot, "cache hit");
        }
        cell.get_or_fetch(&self.counters, || {
            debug!(csid = %self.csid, %slot, "fetching from client");
            fetch(&*self.client, self.csid).inspect_err(|e| {
                debug!(csid = %self.csid, %slot, error = %e, "fetch failed, slot stays empty");
            })
        })
    }

    // =========================================================================
    // BASIC INFO FIELDS
    // =========================================================================

    /// SMILES string.
    pub fn smiles(&self) -> Result<&str> {
        text(&self.info()?.smiles, "smiles")
    }

    /// Standard InChI.
    pub fn stdinchi(&self) -> Result<&str> {
        text(&self.info()?.inchi, "stdinchi")
    }

    /// Standard InChIKey.
    pub fn stdinchikey(&self) -> Result<&str> {
        text(&self.info()?.inchikey, "stdinchikey")
    }

    // =========================================================================
    // EXTENDED INFO FIELDS
    // =========================================================================

    pub fn molecular_formula(&self) -> Result<&str> {
        text(&self.extended_info()?.molecular_formula, "molecular_formula")
    }

    /// InChI (non-standard).
    pub fn inchi(&self) -> Result<&str> {
        text(&self.extended_info()?.inchi, "inchi")
    }

    /// InChIKey (non-standard).
    pub fn inchikey(&self) -> Result<&str> {
        text(&self.extended_info()?.inchikey, "inchikey")
    }

    pub fn average_mass(&self) -> Result<f64> {
        number(self.extended_info()?.average_mass, "average_mass")
    }

    pub fn molecular_weight(&self) -> Result<f64> {
        number(self.extended_info()?.molecular_weight, "molecular_weight")
    }

    pub fn monoisotopic_mass(&self) -> Result<f64> {
        number(self.extended_info()?.monoisotopic_mass, "monoisotopic_mass")
    }

    pub fn nominal_mass(&self) -> Result<f64> {
        number(self.extended_info()?.nominal_mass, "nominal_mass")
    }

    /// Calculated AlogP.
    pub fn alogp(&self) -> Result<f64> {
        number(self.extended_info()?.alogp, "alogp")
    }

    /// Calculated XlogP.
    pub fn xlogp(&self) -> Result<f64> {
        number(self.extended_info()?.xlogp, "xlogp")
    }

    pub fn common_name(&self) -> Result<&str> {
        text(&self.extended_info()?.common_name, "common_name")
    }

    /// Read one field by accessor name (see [`FIELD_NAMES`]).
    pub fn field(&self, name: &str) -> Result<FieldValue<'_>> {
        let value = match name {
            "smiles" => FieldValue::Text(self.smiles()?),
            "stdinchi" => FieldValue::Text(self.stdinchi()?),
            "stdinchikey" => FieldValue::Text(self.stdinchikey()?),
            "molecular_formula" => FieldValue::Text(self.molecular_formula()?),
            "inchi" => FieldValue::Text(self.inchi()?),
            "inchikey" => FieldValue::Text(self.inchikey()?),
            "average_mass" => FieldValue::Number(self.average_mass()?),
            "molecular_weight" => FieldValue::Number(self.molecular_weight()?),
            "monoisotopic_mass" => FieldValue::Number(self.monoisotopic_mass()?),
            "nominal_mass" => FieldValue::Number(self.nominal_mass()?),
            "alogp" => FieldValue::Number(self.alogp()?),
            "xlogp" => FieldValue::Number(self.xlogp()?),
            "common_name" => FieldValue::Text(self.common_name()?),
            other => return Err(Error::UnknownField(other.to_string())),
        };
        Ok(value)
    }

    // =========================================================================
    // CACHE INTROSPECTION
    // =========================================================================

    /// Whether `slot` has been populated.
    pub fn is_cached(&self, slot: Slot) -> bool {
        match slot {
            Slot::BasicInfo => self.info.is_populated(),
            Slot::ExtendedInfo => self.extended.is_populated(),
            Slot::Mol2d => self.mol_2d.is_populated(),
            Slot::Mol3d => self.mol_3d.is_populated(),
            Slot::Thumbnail => self.image.is_populated(),
        }
    }

    pub fn cache_stats(&self) -> CacheStats {
        let populated = Slot::ALL.iter().filter(|s| self.is_cached(**s)).count();
        self.counters.stats(populated, Slot::ALL.len())
    }
}

fn text<'a>(field: &'a Option<String>, name: &'static str) -> Result<&'a str> {
    field.as_deref().ok_or(Error::MissingField(name))
}

fn number(field: Option<f64>, name: &'static str) -> Result<f64> {
    field.ok_or(Error::MissingField(name))
}

impl<C: ?Sized, D: ?Sized> PartialEq<Compound<D>> for Compound<C> {
    fn eq(&self, other: &Compound<D>) -> bool {
        self.csid == other.csid
    }
}

impl<C: ?Sized> Eq for Compound<C> {}

impl<C: ?Sized> Hash for Compound<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.csid.hash(state);
    }
}

impl<C: ?Sized> fmt::Debug for Compound<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Compound({})", self.csid)
    }
}

// =============================================================================
// TESTS
// =============================================================================
