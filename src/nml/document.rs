//! NML document assembly and file output.
//!
//! A [`NmlDocument`] owns one optional slot per GLM block and serializes
//! the present slots in a fixed canonical order, independent of the order
//! they were supplied in. GLM's namelist reader tolerates any block order,
//! but downstream tooling compares files textually, so the order is part
//! of the output contract.
//!
//! # File Format
//!
//! ```text
//! &glm_setup
//!    sim_name = 'Sparkling Lake'
//!    max_layers = 500
//! /
//! &morphometry
//!    lake_name = 'Sparkling'
//!    H = 301.7, 303.7, 305.7
//!    A = 0, 125000, 250000
//! /
//! ```
//!
//! Blocks are separated by exactly one newline and the file ends with a
//! single trailing newline.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::nml::block::{AttrMap, NmlBlock};
use crate::nml::blocks::{
    BirdModel, GlmSetup, InitProfiles, Inflows, Light, Meteorology, Mixing, Morphometry,
    Outflows, Output, Sediment, SnowIce, Time, WqSetup,
};
use crate::nml::error::NmlError;

/// The closed set of GLM block kinds, in canonical document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Setup,
    Mixing,
    WqSetup,
    Morphometry,
    Time,
    Output,
    InitProfiles,
    Light,
    BirdModel,
    Sediment,
    SnowIce,
    Meteorology,
    Inflows,
    Outflows,
}

impl BlockKind {
    /// All block kinds in canonical document order.
    pub const ALL: [BlockKind; 14] = [
        BlockKind::Setup,
        BlockKind::Mixing,
        BlockKind::WqSetup,
        BlockKind::Morphometry,
        BlockKind::Time,
        BlockKind::Output,
        BlockKind::InitProfiles,
        BlockKind::Light,
        BlockKind::BirdModel,
        BlockKind::Sediment,
        BlockKind::SnowIce,
        BlockKind::Meteorology,
        BlockKind::Inflows,
        BlockKind::Outflows,
    ];

    /// Block name without the `&` prefix.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Setup => "glm_setup",
            BlockKind::Mixing => "mixing",
            BlockKind::WqSetup => "wq_setup",
            BlockKind::Morphometry => "morphometry",
            BlockKind::Time => "time",
            BlockKind::Output => "output",
            BlockKind::InitProfiles => "init_profiles",
            BlockKind::Light => "light",
            BlockKind::BirdModel => "bird_model",
            BlockKind::Sediment => "sediment",
            BlockKind::SnowIce => "snowice",
            BlockKind::Meteorology => "meteorology",
            BlockKind::Inflows => "inflows",
            BlockKind::Outflows => "outflows",
        }
    }

    /// Look up a kind from a block name, with or without the `&` prefix.
    pub fn from_name(name: &str) -> Option<BlockKind> {
        let name = name.strip_prefix('&').unwrap_or(name);
        BlockKind::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Whether the block must be present in every GLM configuration.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            BlockKind::Setup | BlockKind::Morphometry | BlockKind::Time | BlockKind::InitProfiles
        )
    }
}

/// A populated block of any kind.
///
/// This is the registry used by the JSON front-end: a block name string
/// selects the variant, and [`Block::from_attrs`] constructs and
/// populates the matching typed struct.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Setup(GlmSetup),
    Mixing(Mixing),
    WqSetup(WqSetup),
    Morphometry(Morphometry),
    Time(Time),
    Output(Output),
    InitProfiles(InitProfiles),
    Light(Light),
    BirdModel(BirdModel),
    Sediment(Sediment),
    SnowIce(SnowIce),
    Meteorology(Meteorology),
    Inflows(Inflows),
    Outflows(Outflows),
}

impl Block {
    /// Construct and populate the block of the given kind from a mapping.
    ///
    /// # Errors
    ///
    /// Propagates [`NmlError::InvalidParameterType`] and
    /// [`NmlError::UnknownParameter`] from population.
    pub fn from_attrs(
        kind: BlockKind,
        attrs: &AttrMap,
        overrides: Option<&AttrMap>,
    ) -> Result<Block, NmlError> {
        fn populate<B: NmlBlock + Default>(
            attrs: &AttrMap,
            overrides: Option<&AttrMap>,
        ) -> Result<B, NmlError> {
            let mut block = B::default();
            block.set_attributes(attrs, overrides)?;
            Ok(block)
        }

        Ok(match kind {
            BlockKind::Setup => Block::Setup(populate(attrs, overrides)?),
            BlockKind::Mixing => Block::Mixing(populate(attrs, overrides)?),
            BlockKind::WqSetup => Block::WqSetup(populate(attrs, overrides)?),
            BlockKind::Morphometry => Block::Morphometry(populate(attrs, overrides)?),
            BlockKind::Time => Block::Time(populate(attrs, overrides)?),
            BlockKind::Output => Block::Output(populate(attrs, overrides)?),
            BlockKind::InitProfiles => Block::InitProfiles(populate(attrs, overrides)?),
            BlockKind::Light => Block::Light(populate(attrs, overrides)?),
            BlockKind::BirdModel => Block::BirdModel(populate(attrs, overrides)?),
            BlockKind::Sediment => Block::Sediment(populate(attrs, overrides)?),
            BlockKind::SnowIce => Block::SnowIce(populate(attrs, overrides)?),
            BlockKind::Meteorology => Block::Meteorology(populate(attrs, overrides)?),
            BlockKind::Inflows => Block::Inflows(populate(attrs, overrides)?),
            BlockKind::Outflows => Block::Outflows(populate(attrs, overrides)?),
        })
    }

    /// The kind of this block.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Setup(_) => BlockKind::Setup,
            Block::Mixing(_) => BlockKind::Mixing,
            Block::WqSetup(_) => BlockKind::WqSetup,
            Block::Morphometry(_) => BlockKind::Morphometry,
            Block::Time(_) => BlockKind::Time,
            Block::Output(_) => BlockKind::Output,
            Block::InitProfiles(_) => BlockKind::InitProfiles,
            Block::Light(_) => BlockKind::Light,
            Block::BirdModel(_) => BlockKind::BirdModel,
            Block::Sediment(_) => BlockKind::Sediment,
            Block::SnowIce(_) => BlockKind::SnowIce,
            Block::Meteorology(_) => BlockKind::Meteorology,
            Block::Inflows(_) => BlockKind::Inflows,
            Block::Outflows(_) => BlockKind::Outflows,
        }
    }

    /// Render the block as NML text.
    pub fn render(&self) -> String {
        match self {
            Block::Setup(b) => b.render(),
            Block::Mixing(b) => b.render(),
            Block::WqSetup(b) => b.render(),
            Block::Morphometry(b) => b.render(),
            Block::Time(b) => b.render(),
            Block::Output(b) => b.render(),
            Block::InitProfiles(b) => b.render(),
            Block::Light(b) => b.render(),
            Block::BirdModel(b) => b.render(),
            Block::Sediment(b) => b.render(),
            Block::SnowIce(b) => b.render(),
            Block::Meteorology(b) => b.render(),
            Block::Inflows(b) => b.render(),
            Block::Outflows(b) => b.render(),
        }
    }
}

/// A full GLM configuration document.
///
/// Construct via [`NmlDocument::builder`]. The four required blocks are
/// `glm_setup`, `morphometry`, `time`, and `init_profiles`; all others
/// default to absent and are simply skipped when serializing.
#[derive(Clone, Debug, PartialEq)]
pub struct NmlDocument {
    slots: Vec<Option<Block>>,
}

impl NmlDocument {
    /// Start building a document.
    pub fn builder() -> NmlDocumentBuilder {
        NmlDocumentBuilder::default()
    }

    /// The block in the given slot, if present.
    pub fn block(&self, kind: BlockKind) -> Option<&Block> {
        let idx = BlockKind::ALL.iter().position(|k| *k == kind)?;
        self.slots[idx].as_ref()
    }

    /// Serialize all present blocks in canonical order.
    ///
    /// Each block's text is followed by exactly one newline, so blocks
    /// are separated by one newline and the document ends with one.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for slot in self.slots.iter().flatten() {
            out.push_str(&slot.render());
            out.push('\n');
        }
        out
    }

    /// Write the serialized document to a file.
    ///
    /// Serialization completes in memory, the text goes to a temporary
    /// file in the destination's directory, and the temporary file is
    /// renamed over the destination. A failure at any step leaves the
    /// destination as it was, and calling again after a failure is safe.
    ///
    /// # Errors
    ///
    /// [`NmlError::Io`] if the file cannot be created or written.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use glm_prep::nml::NmlDocument;
    ///
    /// let doc = NmlDocument::builder()
    ///     .setup(setup)
    ///     .morphometry(morphometry)
    ///     .time(time)
    ///     .init_profiles(init_profiles)
    ///     .build()?;
    /// doc.write_nml("glm3.nml")?;
    /// ```
    pub fn write_nml<P: AsRef<Path>>(&self, path: P) -> Result<(), NmlError> {
        let path = path.as_ref();
        let text = self.serialize();
        // The temporary file must live on the same filesystem as the
        // destination for the rename to be atomic
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.persist(path).map_err(|e| NmlError::Io(e.error))?;
        Ok(())
    }
}

/// Builder for [`NmlDocument`]. Slots may be set in any order; the
/// canonical output order is fixed by the document.
#[derive(Clone, Debug, Default)]
pub struct NmlDocumentBuilder {
    slots: Vec<Block>,
}

impl NmlDocumentBuilder {
    /// Place a block in its slot, replacing any previous block of the
    /// same kind.
    pub fn block(mut self, block: Block) -> Self {
        self.slots.retain(|b| b.kind() != block.kind());
        self.slots.push(block);
        self
    }

    /// Set the `&glm_setup` block (required).
    pub fn setup(self, setup: GlmSetup) -> Self {
        self.block(Block::Setup(setup))
    }

    /// Set the `&mixing` block.
    pub fn mixing(self, mixing: Mixing) -> Self {
        self.block(Block::Mixing(mixing))
    }

    /// Set the `&wq_setup` block.
    pub fn wq_setup(self, wq_setup: WqSetup) -> Self {
        self.block(Block::WqSetup(wq_setup))
    }

    /// Set the `&morphometry` block (required).
    pub fn morphometry(self, morphometry: Morphometry) -> Self {
        self.block(Block::Morphometry(morphometry))
    }

    /// Set the `&time` block (required).
    pub fn time(self, time: Time) -> Self {
        self.block(Block::Time(time))
    }

    /// Set the `&output` block.
    pub fn output(self, output: Output) -> Self {
        self.block(Block::Output(output))
    }

    /// Set the `&init_profiles` block (required).
    pub fn init_profiles(self, init_profiles: InitProfiles) -> Self {
        self.block(Block::InitProfiles(init_profiles))
    }

    /// Set the `&light` block.
    pub fn light(self, light: Light) -> Self {
        self.block(Block::Light(light))
    }

    /// Set the `&bird_model` block.
    pub fn bird_model(self, bird_model: BirdModel) -> Self {
        self.block(Block::BirdModel(bird_model))
    }

    /// Set the `&sediment` block.
    pub fn sediment(self, sediment: Sediment) -> Self {
        self.block(Block::Sediment(sediment))
    }

    /// Set the `&snowice` block.
    pub fn snow_ice(self, snow_ice: SnowIce) -> Self {
        self.block(Block::SnowIce(snow_ice))
    }

    /// Set the `&meteorology` block.
    pub fn meteorology(self, meteorology: Meteorology) -> Self {
        self.block(Block::Meteorology(meteorology))
    }

    /// Set the `&inflows` block.
    pub fn inflows(self, inflows: Inflows) -> Self {
        self.block(Block::Inflows(inflows))
    }

    /// Set the `&outflows` block.
    pub fn outflows(self, outflows: Outflows) -> Self {
        self.block(Block::Outflows(outflows))
    }

    /// Finish building, checking that the required blocks are present.
    ///
    /// # Errors
    ///
    /// [`NmlError::MissingRequiredBlock`] naming the first missing
    /// required slot in canonical order.
    pub fn build(self) -> Result<NmlDocument, NmlError> {
        let slots: Vec<Option<Block>> = BlockKind::ALL
            .iter()
            .map(|kind| self.slots.iter().find(|b| b.kind() == *kind).cloned())
            .collect();

        for (kind, slot) in BlockKind::ALL.iter().zip(&slots) {
            if kind.is_required() && slot.is_none() {
                return Err(NmlError::MissingRequiredBlock { block: kind.name() });
            }
        }

        Ok(NmlDocument { slots })
    }
}
