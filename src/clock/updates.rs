use bitflags::bitflags;

bitflags! {
    /// Skin passes a clock change requires.
    ///
    /// Setters on [`Clock`](super::Clock) accumulate these; the owner drains
    /// them with [`Clock::take_updates`](super::Clock::take_updates) and
    /// passes them to the skin.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Updates: u8 {
        /// Bounds or insets changed; geometry must be recomputed.
        const RESIZE = 1;
        /// Paints, colors, text content or effects changed.
        const REDRAW = 1 << 1;
        /// A visibility flag changed.
        const VISIBILITY = 1 << 2;
        /// Time or needle stepping changed.
        const TIME = 1 << 3;
    }
}
