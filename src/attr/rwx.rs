//! Read/write/execute capability flags.

use bitflags::bitflags;

bitflags! {
    /// Similar to file access modes, a value with separate flags for:
    ///
    /// - `R`: readable
    /// - `W`: writable
    /// - `X`: executable
    ///
    /// The exact meaning depends on the usage. See [`AttrData::mode`] for
    /// how attrs interpret it.
    ///
    /// [`AttrData::mode`]: crate::attr::AttrData::mode
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Rwx: u8 {
        const X = 0b001;
        const W = 0b010;
        const WX = Self::W.bits() | Self::X.bits();
        const R = 0b100;
        const RX = Self::R.bits() | Self::X.bits();
        const RW = Self::R.bits() | Self::W.bits();
        const ALL = Self::R.bits() | Self::W.bits() | Self::X.bits();
    }
}

impl Rwx {
    pub const NONE: Rwx = Rwx::empty();

    /// All eight modes, ordered by their bit value.
    pub fn variants() -> impl Iterator<Item = Rwx> {
        (0..=Self::ALL.bits()).map(Rwx::from_bits_truncate)
    }

    pub fn is_readable(self) -> bool {
        self.contains(Self::R)
    }

    pub fn is_writable(self) -> bool {
        self.contains(Self::W)
    }

    pub fn is_executable(self) -> bool {
        self.contains(Self::X)
    }
}

impl Default for Rwx {
    fn default() -> Self {
        Self::NONE
    }
}
