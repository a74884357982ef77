/// Frame-synchronous animation state
///
/// One tick per rendered frame drives both animations: a triangle-wave
/// fade used by the running statuses and a free-running hue counter for
/// the celebration rainbow. The counter accumulates the configured hue
/// speed and is consumed modulo 256.
#[derive(Debug, Clone)]
pub struct AnimationState {
    fade_level: u8,
    fade_direction: i8,
    hue_counter: u16,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    pub const fn new() -> Self {
        Self {
            fade_level: 0,
            fade_direction: 1,
            hue_counter: 0,
        }
    }

    /// Advance both animations by one frame
    pub fn tick(&mut self, hue_speed: u8) {
        self.fade_level = self.fade_level.wrapping_add_signed(self.fade_direction);
        if self.fade_level == 0 || self.fade_level == u8::MAX {
            self.fade_direction = -self.fade_direction;
        }
        self.hue_counter = self.hue_counter.wrapping_add(u16::from(hue_speed));
    }

    /// Current fade amount (0 = base color, 255 = fully dimmed)
    pub const fn fade_level(&self) -> u8 {
        self.fade_level
    }

    /// Base hue of the rainbow on the 0-255 circle
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hue(&self) -> u8 {
        (self.hue_counter & 0xFF) as u8
    }
}
