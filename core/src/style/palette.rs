use crate::style::Color;

/// A named palette colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: Color,
}

impl PaletteEntry {
    /// Lower-case, dash-separated name, e.g. `atomic-tangerine`
    pub fn slug(&self) -> String {
        self.name.to_ascii_lowercase().replace(' ', "-")
    }
}

/// Fixed brand palette auto-style snaps to
pub static PALETTE: [PaletteEntry; 5] = [
    PaletteEntry { name: "Deep Lilac", color: Color::rgb(0x7B, 0x5E, 0xA7) },
    PaletteEntry { name: "Soft Periwinkle", color: Color::rgb(0xB8, 0xB8, 0xFF) },
    PaletteEntry { name: "Bright Lavender", color: Color::rgb(0x93, 0x81, 0xFF) },
    PaletteEntry { name: "Atomic Tangerine", color: Color::rgb(0xEC, 0x79, 0x3F) },
    PaletteEntry { name: "Sandy Brown", color: Color::rgb(0xF4, 0xA2, 0x59) },
];

/// Palette entry closest to `color`; ties go to the earlier entry.
pub fn nearest(color: Color) -> &'static PaletteEntry {
    let mut best = &PALETTE[0];
    let mut best_dist = color.distance_sq(best.color);
    for entry in &PALETTE[1..] {
        let dist = color.distance_sq(entry.color);
        if dist < best_dist {
            best = entry;
            best_dist = dist;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_palette_colors_map_to_themselves() {
        for entry in &PALETTE {
            assert_eq!(nearest(entry.color), entry);
        }
    }

    #[test]
    fn test_nearest_snaps_close_colors() {
        assert_eq!(nearest(Color::rgb(0xF0, 0x70, 0x40)).name, "Atomic Tangerine");
        assert_eq!(nearest(Color::rgb(0x70, 0x50, 0xA0)).name, "Deep Lilac");
        assert_eq!(nearest(Color::WHITE).name, "Soft Periwinkle");
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<String> = PALETTE.iter().map(PaletteEntry::slug).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), PALETTE.len());
        assert_eq!(PALETTE[3].slug(), "atomic-tangerine");
    }
}
