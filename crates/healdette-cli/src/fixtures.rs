use std::io::Write;
use tempfile::NamedTempFile;

pub const CONFIG_JSON: &str = r#"{
    "global_params": {
        "sequence_length": { "min": 4, "max": 40 },
        "structural_params": {
            "helix_propensity": { "min": 0.5, "max": 1.5 },
            "sheet_propensity": { "min": 0.5, "max": 1.6 }
        },
        "homopolymer_threshold": 4
    },
    "populations": {
        "finnish": {
            "ancestry_weight": 0.5,
            "binding_motifs": ["WY", "RF"],
            "biophysical_params": {
                "aromatic_content": { "min": 10, "max": 20 },
                "hydrophobic_content": { "min": 30, "max": 50 },
                "net_charge": { "min": 0, "max": 4 }
            },
            "notes": "Nordic reference panel"
        },
        "yoruba": {
            "ancestry_weight": 0.5,
            "binding_motifs": ["KW", "YF"],
            "biophysical_params": {
                "aromatic_content": { "min": 20, "max": 30 },
                "hydrophobic_content": { "min": 30, "max": 50 },
                "net_charge": { "min": 0, "max": 4 }
            }
        }
    }
}"#;

pub fn write_temp(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

pub fn config_file() -> NamedTempFile {
    write_temp(CONFIG_JSON, ".json")
}
