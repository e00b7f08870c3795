//! Expand/collapse state machine for note cards.
//!
//! # Invariants
//! - Cards start `Collapsed` and not overflowing.
//! - Overflow is only re-measured while collapsed; an expanded card keeps the
//!   last collapsed measurement.
//! - The affordance is shown only when the collapsed text overflows.

/// Maximum number of content lines shown by a collapsed card.
pub const DISPLAY_LINE_CAP: u32 = 6;

/// Expansion state of one card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardExpansion {
    #[default]
    Collapsed,
    Expanded,
}

impl CardExpansion {
    /// Flips between `Collapsed` and `Expanded`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// Label of the expand/collapse affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAffordance {
    Expand,
    Collapse,
}

/// Local UI state for one rendered note card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteCardState {
    expansion: CardExpansion,
    overflowing: bool,
}

impl NoteCardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expansion(&self) -> CardExpansion {
        self.expansion
    }

    pub fn is_overflowing(&self) -> bool {
        self.overflowing
    }

    /// Handles a click on the card body or on the affordance label.
    pub fn toggle(&mut self) {
        self.expansion = self.expansion.toggle();
    }

    /// Feeds a text layout measurement from the renderer.
    ///
    /// `did_overflow` is the renderer's own overflow flag for the capped
    /// layout. Ignored while expanded.
    pub fn on_text_layout(&mut self, line_count: u32, did_overflow: bool) {
        if self.expansion.is_expanded() {
            return;
        }
        self.overflowing = did_overflow || line_count > DISPLAY_LINE_CAP;
    }

    /// Line limit to apply when rendering; `None` means unlimited.
    pub fn max_lines(&self) -> Option<u32> {
        match self.expansion {
            CardExpansion::Collapsed => Some(DISPLAY_LINE_CAP),
            CardExpansion::Expanded => None,
        }
    }

    /// Affordance to render, if any.
    pub fn affordance(&self) -> Option<CardAffordance> {
        if !self.overflowing {
            return None;
        }
        Some(match self.expansion {
            CardExpansion::Collapsed => CardAffordance::Expand,
            CardExpansion::Expanded => CardAffordance::Collapse,
        })
    }
}
