use bitflags::bitflags;

bitflags! {
    /// Transient movement/combat modes toggled by press/release input pairs.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CharacterFlags: u8 {
        const SPRINTING = 1 << 0;
        const ZOOMED    = 1 << 1;
        const PUNCHING  = 1 << 2;
    }
}
