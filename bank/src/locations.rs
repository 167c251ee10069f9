use serde::Serialize;

/// A drop-off station in the directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WasteBank {
    pub name: &'static str,
    pub address: &'static str,
    pub categories: &'static [&'static str],
    pub open: bool,
}

const DIRECTORY: [WasteBank; 3] = [
    WasteBank {
        name: "Bank Sampah Melati",
        address: "Jl. Melati No. 12",
        categories: &["PLASTIK", "KERTAS"],
        open: true,
    },
    WasteBank {
        name: "Pengepul Pak Budi",
        address: "Gg. Swadaya III",
        categories: &["PLASTIK", "KERTAS"],
        open: true,
    },
    WasteBank {
        name: "Bank Sampah Hijau",
        address: "Kawasan Industri Pulogadung",
        categories: &["LOGAM"],
        open: false,
    },
];

pub fn waste_banks() -> &'static [WasteBank] {
    &DIRECTORY
}

/// Open stations accepting the given waste category, case-insensitively.
pub fn accepting(category: &str) -> Vec<&'static WasteBank> {
    DIRECTORY
        .iter()
        .filter(|station| station.open)
        .filter(|station| {
            station
                .categories
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(category))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{accepting, waste_banks};

    #[test]
    fn test_directory_is_stable() {
        assert_eq!(waste_banks().len(), 3);
    }

    #[test]
    fn test_accepting_matches_case_insensitively() {
        let stations = accepting("plastik");

        assert_eq!(stations.len(), 2);
        assert!(stations.iter().all(|station| station.open));
    }

    #[test]
    fn test_accepting_skips_closed_stations() {
        // Only the closed station takes LOGAM.
        assert!(accepting("LOGAM").is_empty());
    }

    #[test]
    fn test_accepting_unknown_category() {
        assert!(accepting("STYROFOAM").is_empty());
    }
}
