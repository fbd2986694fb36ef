use crate::domain::coordinate::Coordinate;

pub struct Preset {
    pub name: &'static str,
    pub coordinate: Coordinate,
}

pub static PRESETS: [Preset; 6] = [
    Preset {
        name: "Hanoi Tower",
        coordinate: Coordinate::new(21.0176, 105.8490),
    },
    Preset {
        name: "My Dinh Bus Station",
        coordinate: Coordinate::new(21.0282, 105.7780),
    },
    Preset {
        name: "Hoan Kiem Lake",
        coordinate: Coordinate::new(21.0288, 105.8523),
    },
    Preset {
        name: "Noi Bai Airport",
        coordinate: Coordinate::new(21.2212, 105.8072),
    },
    Preset {
        name: "Long Bien Bridge",
        coordinate: Coordinate::new(21.0433, 105.8592),
    },
    Preset {
        name: "West Lake",
        coordinate: Coordinate::new(21.0583, 105.8194),
    },
];

pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let name = name.trim();
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}
