use super::Variant;

/// A named seed map that can be loaded into a world
#[derive(Clone, Debug)]
pub struct MapPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub variant: Variant,
    pub rows: &'static [&'static str],
}

/// Built-in seed maps
pub mod presets {
    use super::*;

    /// Glider bouncing around a walled room until it hits a wall
    pub fn glider_box() -> MapPreset {
        MapPreset {
            name: "glider_box",
            description: "Glider in a walled room",
            variant: Variant::Life,
            rows: &[
                "############",
                "#  o       #",
                "#   o      #",
                "# ooo      #",
                "#          #",
                "#          #",
                "#          #",
                "#          #",
                "############",
            ],
        }
    }

    /// Blinker and block side by side
    pub fn blinker_box() -> MapPreset {
        MapPreset {
            name: "blinker_box",
            description: "Oscillator (period 2) next to a still life",
            variant: Variant::Life,
            rows: &[
                "##########",
                "#        #",
                "#  o     #",
                "#  o  oo #",
                "#  o  oo #",
                "#        #",
                "##########",
            ],
        }
    }

    /// Cave with walkers falling south until they land on something
    pub fn cave() -> MapPreset {
        MapPreset {
            name: "cave",
            description: "South walkers dropping through a cave",
            variant: Variant::Walkers,
            rows: &[
                "############################",
                "#      #    #   o      ##  #",
                "#  o       o     #     #   #",
                "#    ####     o      o     #",
                "##   #  #    ##            #",
                "###     ##     #      ##   #",
                "#   o      ###   o   #  o  #",
                "#         #               ##",
                "#      o  #   #      o     #",
                "############################",
            ],
        }
    }

    /// Get all available maps
    pub fn all_maps() -> Vec<MapPreset> {
        vec![glider_box(), blinker_box(), cave()]
    }

    /// Find a map by name
    pub fn by_name(name: &str) -> Option<MapPreset> {
        all_maps().into_iter().find(|map| map.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::presets;
    use crate::domain::legend;

    #[test]
    fn test_all_presets_parse() {
        for map in presets::all_maps() {
            assert!(legend::parse(map.rows, map.variant).is_ok(), "{} failed to parse", map.name);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = presets::all_maps().iter().map(|m| m.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_by_name() {
        assert_eq!(presets::by_name("cave").map(|m| m.name), Some("cave"));
        assert!(presets::by_name("nowhere").is_none());
    }
}
