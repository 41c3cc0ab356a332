use super::{Pen, ScreenPos, Surface};
use crate::audio::Volume;
use jukebox_schema::{Label, VolumeBar};

/// Bytes between two volume points on the bar.
const VOLUME_STEP_BYTES: u8 = 2;
const VOLUME_BAR_HEIGHT: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Normal,
    /// Pens swapped, used to mark a label as active.
    Highlighted,
}

impl TextStyle {
    pub fn pens(self) -> (Pen, Pen) {
        match self {
            TextStyle::Normal => (1, 0),
            TextStyle::Highlighted => (0, 1),
        }
    }
}

pub fn print_label<S: Surface + ?Sized>(surface: &mut S, label: &Label, style: TextStyle) {
    let (fg, bg) = style.pens();
    surface.set_draw_colors(fg, bg);
    surface.draw_string(&label.text, ScreenPos::new(label.x, label.y));
}

/// Clears the bar area, then draws one point per displayed level.
pub fn draw_volume<S: Surface + ?Sized>(surface: &mut S, bar: VolumeBar, volume: Volume) {
    surface.draw_solid_box(
        ScreenPos::new(bar.x, bar.y),
        0x00,
        VOLUME_STEP_BYTES * Volume::MAX_ATTENUATION,
        VOLUME_BAR_HEIGHT,
    );

    let mut x = bar.x;
    for _ in 0..volume.level() {
        surface.draw_solid_box(ScreenPos::new(x, bar.y), 0xff, 1, VOLUME_BAR_HEIGHT);
        x = x.saturating_add(VOLUME_STEP_BYTES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::ScreenBuffer;

    fn filled_points(screen: &ScreenBuffer, bar: VolumeBar) -> usize {
        screen
            .text_at(ScreenPos::new(bar.x, bar.y), 16)
            .chars()
            .filter(|&c| c == '#')
            .count()
    }

    #[test]
    fn volume_bar_shows_inverted_level() {
        let mut screen = ScreenBuffer::new();
        let bar = VolumeBar::default();

        draw_volume(&mut screen, bar, Volume::LOUDEST);
        assert_eq!(filled_points(&screen, bar), 16);

        draw_volume(&mut screen, bar, Volume::new(10));
        assert_eq!(filled_points(&screen, bar), 6);

        draw_volume(&mut screen, bar, Volume::SILENT);
        assert_eq!(filled_points(&screen, bar), 0);
    }

    #[test]
    fn highlighted_label_swaps_pens() {
        let mut screen = ScreenBuffer::new();
        let label = Label::new("[P] Pause", 2, 22);

        print_label(&mut screen, &label, TextStyle::Highlighted);
        assert!(screen.cell_at(ScreenPos::new(2, 22)).is_inverted());

        print_label(&mut screen, &label, TextStyle::Normal);
        assert!(!screen.cell_at(ScreenPos::new(2, 22)).is_inverted());
        assert_eq!(screen.text_at(ScreenPos::new(2, 22), 9), "[P] Pause");
    }
}
