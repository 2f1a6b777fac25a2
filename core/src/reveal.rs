pub const CARD_REVEAL_THRESHOLD: f64 = 0.15;
pub const BLOCK_REVEAL_THRESHOLD: f64 = 0.10;

/// One-way flag that turns on the first time its element is seen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    threshold: f64,
    visible: bool,
}

impl Reveal {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn card() -> Self {
        Self::new(CARD_REVEAL_THRESHOLD)
    }

    pub fn block() -> Self {
        Self::new(BLOCK_REVEAL_THRESHOLD)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection sample. Returns `true` only for the sample that flips the flag.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.visible || !intersecting || ratio < self.threshold {
            return false;
        }
        self.visible = true;
        true
    }
}
