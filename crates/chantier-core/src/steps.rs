//! Construction steps catalog
//!
//! The ordered list of construction steps, each with a phase and its tasks.
//! Step and task titles are canonical (French); ids are stable identifiers
//! used to build localization keys.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChantierError, Result};

/// Construction phase of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    PreConstruction,
    GrosOeuvre,
    SecondOeuvre,
    Finitions,
    #[serde(other)]
    Other,
}

impl Phase {
    /// Phases where physical work (and budgeted tasks) happens
    pub fn is_physical_work(self) -> bool {
        matches!(self, Self::GrosOeuvre | Self::SecondOeuvre | Self::Finitions)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PreConstruction => "pre-construction",
            Self::GrosOeuvre => "gros-oeuvre",
            Self::SecondOeuvre => "second-oeuvre",
            Self::Finitions => "finitions",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTask {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionStep {
    pub id: String,
    pub phase: Phase,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<StepTask>,
}

/// Static step definition
#[derive(Debug, Clone)]
pub struct BuiltinStep {
    pub id: &'static str,
    pub phase: Phase,
    pub title: &'static str,
    /// `(task id, canonical task title)`
    pub tasks: &'static [(&'static str, &'static str)],
}

impl From<&BuiltinStep> for ConstructionStep {
    fn from(builtin: &BuiltinStep) -> Self {
        Self {
            id: builtin.id.to_string(),
            phase: builtin.phase,
            title: builtin.title.to_string(),
            tasks: builtin
                .tasks
                .iter()
                .map(|(id, title)| StepTask {
                    id: id.to_string(),
                    title: title.to_string(),
                })
                .collect(),
        }
    }
}

pub const BUILTIN_STEPS: &[BuiltinStep] = &[
    BuiltinStep {
        id: "planification",
        phase: Phase::PreConstruction,
        title: "Planification du projet",
        tasks: &[
            ("planning-plans", "Plans et devis"),
            ("planning-budget", "Estimation du budget"),
        ],
    },
    BuiltinStep {
        id: "permis",
        phase: Phase::PreConstruction,
        title: "Permis et autorisations",
        tasks: &[
            ("permit-building", "Permis de construction"),
            ("permit-septic", "Permis d'installation septique"),
        ],
    },
    BuiltinStep {
        id: "excavation",
        phase: Phase::GrosOeuvre,
        title: "Excavation",
        tasks: &[
            ("excavation-digging", "Creusage"),
            ("excavation-french-drain", "Drain français"),
            ("excavation-backfill", "Remblai"),
        ],
    },
    BuiltinStep {
        id: "fondation",
        phase: Phase::GrosOeuvre,
        title: "Fondation",
        tasks: &[
            ("foundation-footings", "Semelles"),
            ("foundation-walls", "Coffrage mur fondation"),
            ("foundation-waterproofing", "Imperméabilisation"),
        ],
    },
    BuiltinStep {
        id: "dalle-sous-sol",
        phase: Phase::GrosOeuvre,
        title: "Coulage de dalle du sous-sol",
        tasks: &[
            ("slab-gravel", "Pierre concassée"),
            ("slab-pour", "Coulage de la dalle"),
        ],
    },
    BuiltinStep {
        id: "structure",
        phase: Phase::GrosOeuvre,
        title: "Structure et charpente",
        tasks: &[
            ("framing-floor", "Plancher"),
            ("framing-walls", "Murs extérieurs"),
            ("framing-trusses", "Fermes de toit"),
        ],
    },
    BuiltinStep {
        id: "toiture",
        phase: Phase::GrosOeuvre,
        title: "Toiture",
        tasks: &[
            ("roofing-membrane", "Membrane"),
            ("roofing-shingles", "Bardeaux"),
        ],
    },
    BuiltinStep {
        id: "fenetres-portes",
        phase: Phase::GrosOeuvre,
        title: "Fenêtres et portes",
        tasks: &[
            ("openings-windows", "Installation des fenêtres"),
            ("openings-doors", "Portes extérieures"),
        ],
    },
    BuiltinStep {
        id: "revetement-exterieur",
        phase: Phase::GrosOeuvre,
        title: "Revêtement extérieur",
        tasks: &[
            ("siding-wrap", "Pare-air"),
            ("siding-install", "Pose du revêtement"),
        ],
    },
    BuiltinStep {
        id: "plomberie-roughin",
        phase: Phase::SecondOeuvre,
        title: "Plomberie brute",
        tasks: &[
            ("plumbing-piping", "Installation tuyauterie"),
            ("plumbing-drains", "Conduits d'évacuation"),
        ],
    },
    BuiltinStep {
        id: "electricite-roughin",
        phase: Phase::SecondOeuvre,
        title: "Électricité brute",
        tasks: &[
            ("electrical-panel", "Panneau électrique"),
            ("electrical-wiring", "Filage"),
        ],
    },
    BuiltinStep {
        id: "hvac-roughin",
        phase: Phase::SecondOeuvre,
        title: "Chauffage et ventilation brut",
        tasks: &[
            ("hvac-ducts", "Conduits de ventilation"),
            ("hvac-air-exchanger", "Échangeur d'air"),
        ],
    },
    BuiltinStep {
        id: "isolation",
        phase: Phase::SecondOeuvre,
        title: "Isolation et pare-vapeur",
        tasks: &[
            ("insulation-walls", "Isolation des murs"),
            ("insulation-attic", "Isolation de l'entretoit"),
            ("insulation-vapor-barrier", "Pare-vapeur"),
        ],
    },
    BuiltinStep {
        id: "gypse-peinture",
        phase: Phase::SecondOeuvre,
        title: "Gypse et peinture",
        tasks: &[
            ("drywall-hanging", "Pose du gypse"),
            ("drywall-taping", "Tirage de joints"),
            ("drywall-paint", "Peinture"),
        ],
    },
    BuiltinStep {
        id: "revetements-sol",
        phase: Phase::Finitions,
        title: "Revêtements de sol",
        tasks: &[
            ("flooring-hardwood", "Plancher de bois franc"),
            ("flooring-tile", "Céramique"),
        ],
    },
    BuiltinStep {
        id: "cuisine-sdb",
        phase: Phase::Finitions,
        title: "Cuisine et salles de bain",
        tasks: &[
            ("kitchen-cabinets", "Armoires de cuisine"),
            ("kitchen-countertops", "Comptoirs"),
        ],
    },
    BuiltinStep {
        id: "plomberie-finition",
        phase: Phase::Finitions,
        title: "Plomberie de finition",
        tasks: &[
            ("plumbing-fixtures", "Installation des appareils sanitaires"),
            ("plumbing-water-heater", "Chauffe-eau"),
        ],
    },
    BuiltinStep {
        id: "electricite-finition",
        phase: Phase::Finitions,
        title: "Électricité de finition",
        tasks: &[
            ("electrical-fixtures", "Luminaires"),
            ("electrical-outlets", "Prises et interrupteurs"),
        ],
    },
    BuiltinStep {
        id: "hvac-finition",
        phase: Phase::Finitions,
        title: "Chauffage et ventilation de finition",
        tasks: &[("hvac-thermostats", "Thermostats")],
    },
    BuiltinStep {
        id: "finitions-interieures",
        phase: Phase::Finitions,
        title: "Finitions intérieures",
        tasks: &[
            ("finishing-trim", "Moulures et boiseries"),
            ("finishing-stairs", "Escalier"),
        ],
    },
    BuiltinStep {
        id: "amenagement-exterieur",
        phase: Phase::Finitions,
        title: "Aménagement extérieur",
        tasks: &[
            ("landscaping-grading", "Nivellement du terrain"),
            ("landscaping-driveway", "Entrée de garage"),
        ],
    },
    BuiltinStep {
        id: "inspections-finales",
        phase: Phase::Finitions,
        title: "Inspections finales",
        tasks: &[("final-inspection", "Inspection finale")],
    },
];

/// The built-in catalog as owned steps, in construction order
pub fn builtin_steps() -> Vec<ConstructionStep> {
    BUILTIN_STEPS.iter().map(ConstructionStep::from).collect()
}

/// Read a steps catalog from a JSON array
pub fn load_steps(path: &Path) -> Result<Vec<ConstructionStep>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ChantierError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
