use std::fmt;

/// SFX volume stored the way the player expects it: as attenuation.
/// 0 is the loudest setting, 16 is silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Volume(u8);

impl Volume {
    pub const MAX_ATTENUATION: u8 = 16;
    pub const LOUDEST: Volume = Volume(0);
    pub const SILENT: Volume = Volume(Self::MAX_ATTENUATION);

    /// Values above 16 are clamped.
    pub fn new(attenuation: u8) -> Self {
        Self(attenuation.min(Self::MAX_ATTENUATION))
    }

    pub fn attenuation(self) -> u8 {
        self.0
    }

    /// Level as shown to the user, 16 being the loudest.
    pub fn level(self) -> u8 {
        Self::MAX_ATTENUATION - self.0
    }

    pub fn adjusted(self, delta: i8) -> Self {
        let raw = i16::from(self.0) + i16::from(delta);
        Self(raw.clamp(0, i16::from(Self::MAX_ATTENUATION)) as u8)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_is_inverted_attenuation() {
        assert_eq!(Volume::LOUDEST.level(), 16);
        assert_eq!(Volume::SILENT.level(), 0);
        assert_eq!(Volume::new(4).level(), 12);
    }

    #[test]
    fn adjusted_clamps_both_ends() {
        assert_eq!(Volume::LOUDEST.adjusted(-1), Volume::LOUDEST);
        assert_eq!(Volume::SILENT.adjusted(1), Volume::SILENT);
        assert_eq!(Volume::new(15).adjusted(i8::MAX), Volume::SILENT);
        assert_eq!(Volume::new(1).adjusted(i8::MIN), Volume::LOUDEST);
        assert_eq!(Volume::new(8).adjusted(-3).attenuation(), 5);
    }

    #[test]
    fn new_clamps_out_of_range_values() {
        assert_eq!(Volume::new(200), Volume::SILENT);
    }
}
