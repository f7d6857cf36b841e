use std::collections::HashMap;

pub type Rgb = [f32; 3];

pub const DEFAULT_GRADIENT: [Rgb; 3] = [[0.4, 0.2, 0.8], [0.8, 0.3, 0.5], [0.2, 0.5, 0.8]];

pub fn genre_color(name: &str) -> Rgb {
    const RULES: &[(&[&str], Rgb)] = &[
        (&["pop"], [1.0, 0.4, 0.6]),
        (&["hip", "rap"], [0.9, 0.3, 0.2]),
        (&["rock"], [0.6, 0.2, 0.8]),
        (&["r&b", "soul"], [0.3, 0.6, 0.9]),
        (&["electronic", "dance"], [0.2, 0.9, 0.7]),
        (&["jazz"], [0.9, 0.7, 0.2]),
        (&["classical"], [0.8, 0.6, 0.4]),
        (&["country"], [0.9, 0.6, 0.3]),
        (&["indie", "alternative"], [0.5, 0.8, 0.5]),
        (&["metal"], [0.3, 0.3, 0.3]),
    ];

    let lowered = name.to_lowercase();
    for (keywords, color) in RULES {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return *color;
        }
    }
    [0.6, 0.5, 0.9]
}

pub fn darken(color: Rgb, amount: f32) -> Rgb {
    let factor = (1.0 - amount).clamp(0.0, 1.0);
    [color[0] * factor, color[1] * factor, color[2] * factor]
}

pub fn to_hex(color: Rgb) -> String {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(color[0]),
        channel(color[1]),
        channel(color[2])
    )
}

#[derive(Debug, Default)]
pub struct PaletteCache {
    entries: HashMap<String, Vec<Rgb>>,
}

impl PaletteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&[Rgb]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn get_or_insert_with(
        &mut self,
        key: &str,
        extract: impl FnOnce() -> Vec<Rgb>,
    ) -> &[Rgb] {
        self.entries
            .entry(key.to_string())
            .or_insert_with(extract)
            .as_slice()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
