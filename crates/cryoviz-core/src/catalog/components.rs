use super::ViewId;
use crate::{Error, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subcomponent {
    pub name: &'static str,
    /// Display name, resolved through the view's name mapping.
    pub material: &'static str,
}

/// A named stage of the modelled hardware (a fridge stage or a part of the QPU chip).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralComponent {
    pub id: &'static str,
    pub name: &'static str,
    pub temperature: Option<&'static str>,
    /// Display names, not catalog names (e.g. `"NbTi"`).
    pub materials: &'static [&'static str],
    pub description: &'static str,
    pub subcomponents: &'static [Subcomponent],
    /// The component offers a transition into the chip view.
    pub is_drill_down: bool,
}

const fn sub(name: &'static str, material: &'static str) -> Subcomponent {
    Subcomponent { name, material }
}

/// Fridge stages, top to bottom (also the legend order).
pub static FRIDGE_COMPONENTS: &[StructuralComponent] = &[
    StructuralComponent {
        id: "roomTempElectronics",
        name: "Room-Temperature Electronics",
        temperature: Some("300 K"),
        materials: &["Copper", "Gold", "Silicon"],
        description: "The control rack that sits outside the refrigerator at room temperature. Contains the microwave signal generators, amplifiers, and digital-to-analog converters that create and receive the precise pulses used to manipulate and read out qubits.",
        subcomponents: &[
            sub("Signal Generators", "Silicon"),
            sub("Microwave Amplifiers", "Gold"),
            sub("Wiring Interfaces", "Copper"),
        ],
        is_drill_down: false,
    },
    StructuralComponent {
        id: "outerVacuumChamber",
        name: "Outer Vacuum Chamber",
        temperature: Some("300 K \u{2192} 40 K"),
        materials: &["Aluminum", "Mu-Metal", "Copper"],
        description: "The outermost shell of the dilution refrigerator. A sealed vacuum vessel that provides thermal insulation from the room-temperature environment and shields the interior from external electromagnetic interference.",
        subcomponents: &[
            sub("Vacuum Shell", "Aluminum"),
            sub("Magnetic Shield", "Mu-Metal"),
            sub("Thermal Anchors", "Copper"),
        ],
        is_drill_down: false,
    },
    StructuralComponent {
        id: "upperCoolingStage",
        name: "Pulse Tube / 40 K Stage",
        temperature: Some("40 K"),
        materials: &["Copper", "Helium-4"],
        description: "The first mechanical cooling stage, driven by a pulse-tube cryocooler. Uses compressed helium-4 gas in a closed cycle to cool the system from room temperature down to roughly 40 Kelvin (\u{2212}233 \u{00b0}C), removing the bulk of the thermal energy.",
        subcomponents: &[
            sub("Pulse Tube Cold Head", "Copper"),
            sub("Radiation Shields", "Copper"),
            sub("Coolant Gas", "Helium-4"),
        ],
        is_drill_down: false,
    },
    StructuralComponent {
        id: "lowerCoolingStage",
        name: "Still & Cold Plate",
        temperature: Some("~800 \u{2192} 100 mK"),
        materials: &["Copper", "Helium-3", "Helium-4"],
        description: "The intermediate cooling stages where the dilution process begins. The still evaporates helium-3 from the mixture at ~800 mK, and the cold plate provides an additional thermal intercept at ~100 mK before reaching the mixing chamber.",
        subcomponents: &[
            sub("Still Chamber", "Copper"),
            sub("Cold Plate", "Copper"),
            sub("He-3/He-4 Mixture", "Helium-3"),
        ],
        is_drill_down: false,
    },
    StructuralComponent {
        id: "wiringAndSignalLines",
        name: "Wiring & Signal Lines",
        temperature: Some("300 K \u{2192} 10 mK"),
        materials: &["NbTi", "Beryllium Copper", "Kapton", "Copper"],
        description: "The cables and wiring looms that carry control signals and readout data between room-temperature electronics and the quantum processor. Different materials are used at different temperature stages to balance thermal conductivity with signal fidelity.",
        subcomponents: &[
            sub("Superconducting Cables", "NbTi"),
            sub("Coaxial Attenuators", "Beryllium Copper"),
            sub("Flex Ribbon Cables", "Kapton"),
            sub("Thermal Anchoring Clamps", "Copper"),
        ],
        is_drill_down: false,
    },
    StructuralComponent {
        id: "mixingChamberQPU",
        name: "Mixing Chamber & QPU",
        temperature: Some("~10 mK"),
        materials: &["Copper", "Helium-3", "Helium-4", "Indium", "Niobium"],
        description: "The coldest point in the system, where helium-3 and helium-4 mix to reach ~10 millikelvin. The quantum processor chip is mounted here on a copper cold finger, connected via indium bump bonds, operating in this ultra-cold environment where quantum effects dominate.",
        subcomponents: &[
            sub("Mixing Chamber", "Copper"),
            sub("He-3/He-4 Dilution", "Helium-3"),
            sub("QPU Mount Plate", "Copper"),
            sub("Chip Interconnects", "Indium"),
            sub("Superconducting Circuits", "Niobium"),
        ],
        is_drill_down: true,
    },
];

/// QPU chip parts, in legend order.
pub static QPU_COMPONENTS: &[StructuralComponent] = &[
    StructuralComponent {
        id: "qubitArray",
        name: "Qubit Array",
        temperature: None,
        materials: &["Aluminum", "Tantalum", "Niobium"],
        description: "The core of the processor \u{2014} a grid of tiny circuits called qubits that store and process quantum information. Each qubit uses a superconducting loop with a Josephson junction to hold a quantum state.",
        subcomponents: &[
            sub("Josephson Junctions", "Aluminum"),
            sub("Capacitor Pads", "Tantalum"),
            sub("Ground Plane", "Niobium"),
        ],
        is_drill_down: false,
    },
    StructuralComponent {
        id: "controlElectronics",
        name: "Control Electronics",
        temperature: None,
        materials: &["Niobium", "Titanium Nitride"],
        description: "The wiring that sends precise signals to each qubit to perform calculations. These include microwave drive lines that set qubit states and flux bias lines that fine-tune each qubit.",
        subcomponents: &[
            sub("Drive Lines", "Niobium"),
            sub("Flux Lines", "Niobium"),
            sub("Filters", "Titanium Nitride"),
        ],
        is_drill_down: false,
    },
    StructuralComponent {
        id: "readoutResonators",
        name: "Readout Resonators",
        temperature: None,
        materials: &["Niobium", "Titanium Nitride"],
        description: "Sensors that read the result from each qubit after a calculation. They use small resonating circuits (coplanar waveguides) tuned to detect each qubit's state without disturbing it.",
        subcomponents: &[
            sub("CPW Resonators", "Niobium"),
            sub("Coupling Capacitors", "Titanium Nitride"),
            sub("Feedlines", "Niobium"),
        ],
        is_drill_down: false,
    },
    StructuralComponent {
        id: "ioPads",
        name: "I/O Bond Pads",
        temperature: None,
        materials: &["Gold", "Aluminum", "Indium"],
        description: "Connection points where the chip plugs into the larger system, similar to pins on a computer chip. Signals flow in to control the qubits and flow out to report measurement results.",
        subcomponents: &[
            sub("Bond Pads", "Gold"),
            sub("Wire Bonds", "Aluminum"),
            sub("Bump Bonds", "Indium"),
        ],
        is_drill_down: false,
    },
    StructuralComponent {
        id: "substrate",
        name: "Silicon Substrate",
        temperature: None,
        materials: &["Silicon", "Sapphire"],
        description: "The flat base layer that all other components are built on top of, like a circuit board for the quantum chip. Made from ultra-pure crystal to avoid interference with the delicate quantum signals.",
        subcomponents: &[
            sub("Wafer Base", "Silicon"),
            sub("Oxide Layer", "Silicon"),
            sub("Alternative Base", "Sapphire"),
        ],
        is_drill_down: false,
    },
    StructuralComponent {
        id: "shielding",
        name: "Magnetic Shielding",
        temperature: None,
        materials: &["Mu-Metal", "Aluminum"],
        description: "Protective layers that block outside magnetic fields and radio-frequency signals from reaching the qubits. Even tiny interference can disrupt a quantum calculation, so multiple shield layers are used.",
        subcomponents: &[
            sub("Inner Shield", "Mu-Metal"),
            sub("Outer Shield", "Mu-Metal"),
            sub("RF Shield", "Aluminum"),
        ],
        is_drill_down: false,
    },
];

/// The component catalog of one view.
#[derive(Debug, Clone, Copy)]
pub struct ComponentCatalog {
    view: ViewId,
    components: &'static [StructuralComponent],
}

impl ComponentCatalog {
    pub const fn for_view(view: ViewId) -> Self {
        let components = match view {
            ViewId::Fridge => FRIDGE_COMPONENTS,
            ViewId::Chip => QPU_COMPONENTS,
        };
        Self { view, components }
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn components(&self) -> &'static [StructuralComponent] {
        self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'static, StructuralComponent> {
        self.components.iter()
    }

    pub fn get(&self, id: &str) -> Option<&'static StructuralComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Like [`Self::get`], for callers that take ids from user input.
    pub fn require(&self, id: &str) -> Result<&'static StructuralComponent> {
        self.get(id).ok_or_else(|| Error::UnknownComponent {
            view: self.view,
            id: id.to_string(),
        })
    }

    /// 1-based legend number, as drawn on the numbered labels.
    pub fn number_of(&self, id: &str) -> Option<usize> {
        self.components
            .iter()
            .position(|c| c.id == id)
            .map(|i| i + 1)
    }
}
