use indexmap::IndexSet;
use serde::Serialize;

/// One producing country for a material. Shares are percentages and need not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCountry {
    pub country: &'static str,
    pub code: &'static str,
    pub market_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: u32,
    /// Join key used by every other table (prices, component material lists, charts).
    pub name: &'static str,
    pub category: &'static str,
    pub chip_percentage: f64,
    /// Free text such as `"~2 g"`; see [`crate::mass::parse_mass_to_kg`].
    pub approximate_mass: &'static str,
    pub description: &'static str,
    pub source_countries: &'static [SourceCountry],
}

/// Ordered view over a static material table.
///
/// Iteration order is the table order and is part of the contract: substring name resolution
/// and category aggregation both depend on it.
#[derive(Debug, Clone, Copy)]
pub struct MaterialCatalog {
    materials: &'static [Material],
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}

impl MaterialCatalog {
    pub const fn bundled() -> Self {
        Self {
            materials: MATERIALS,
        }
    }

    pub const fn new(materials: &'static [Material]) -> Self {
        Self { materials }
    }

    pub fn materials(&self) -> &'static [Material] {
        self.materials
    }

    pub fn iter(&self) -> std::slice::Iter<'static, Material> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Exact (case-sensitive) name lookup.
    pub fn by_name(&self, name: &str) -> Option<&'static Material> {
        self.materials.iter().find(|m| m.name == name)
    }

    pub fn by_id(&self, id: u32) -> Option<&'static Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&'static str> {
        let set: IndexSet<&'static str> = self.materials.iter().map(|m| m.category).collect();
        set.into_iter().collect()
    }

    /// Sum of every material's `chip_percentage`. Used as the pie chart denominator; it is not
    /// expected to be exactly 100.
    pub fn total_percentage(&self) -> f64 {
        self.materials.iter().map(|m| m.chip_percentage).sum()
    }
}

const fn src(country: &'static str, code: &'static str, market_share: f64) -> SourceCountry {
    SourceCountry {
        country,
        code,
        market_share,
    }
}

pub static MATERIALS: &[Material] = &[
    Material {
        id: 1,
        name: "Niobium",
        category: "Superconductors",
        chip_percentage: 15.2,
        approximate_mass: "~2 g",
        description: "Used to create superconducting qubits and resonators. Niobium becomes superconducting at temperatures below 9.2K, enabling lossless electrical current flow essential for maintaining quantum coherence.",
        source_countries: &[
            src("Brazil", "BR", 88.0),
            src("Canada", "CA", 8.0),
            src("Australia", "AU", 2.0),
            src("Other", "OTHER", 2.0),
        ],
    },
    Material {
        id: 2,
        name: "Aluminum",
        category: "Superconductors",
        chip_percentage: 12.5,
        approximate_mass: "~1.5 g",
        description: "Forms Josephson junctions, the heart of superconducting qubits. Thin aluminum oxide layers between aluminum electrodes create the quantum tunneling barrier necessary for qubit operation.",
        source_countries: &[
            src("China", "CN", 56.0),
            src("India", "IN", 10.0),
            src("Russia", "RU", 6.0),
            src("Canada", "CA", 5.0),
            src("Other", "OTHER", 23.0),
        ],
    },
    Material {
        id: 3,
        name: "Silicon",
        category: "Substrates",
        chip_percentage: 25.0,
        approximate_mass: "~10 g",
        description: "High-purity silicon wafers serve as the substrate for fabricating superconducting circuits. Silicon-28 isotopically purified substrates reduce nuclear spin noise that can cause decoherence.",
        source_countries: &[
            src("China", "CN", 68.0),
            src("Russia", "RU", 7.0),
            src("Norway", "NO", 6.0),
            src("United States", "US", 5.0),
            src("Other", "OTHER", 14.0),
        ],
    },
    Material {
        id: 4,
        name: "Sapphire (Al₂O₃)",
        category: "Substrates",
        chip_percentage: 18.3,
        approximate_mass: "~8 g",
        description: "Used as a low-loss substrate material for superconducting qubits. Its crystalline structure and low dielectric loss help maintain long coherence times in quantum processors.",
        source_countries: &[
            src("United States", "US", 35.0),
            src("Japan", "JP", 25.0),
            src("Russia", "RU", 20.0),
            src("China", "CN", 15.0),
            src("Other", "OTHER", 5.0),
        ],
    },
    Material {
        id: 5,
        name: "Tantalum",
        category: "Superconductors",
        chip_percentage: 8.4,
        approximate_mass: "~500 mg",
        description: "An emerging superconducting material showing longer coherence times than niobium in some applications. Used in next-generation transmon qubits due to its superior surface oxide properties.",
        source_countries: &[
            src("DR Congo", "CD", 33.0),
            src("Rwanda", "RW", 25.0),
            src("Brazil", "BR", 10.0),
            src("Australia", "AU", 8.0),
            src("Other", "OTHER", 24.0),
        ],
    },
    Material {
        id: 6,
        name: "Indium",
        category: "Interconnects",
        chip_percentage: 2.1,
        approximate_mass: "~200 mg",
        description: "Used for bump bonding and flip-chip connections in multi-chip quantum processor assemblies. Indium's softness allows for reliable low-temperature electrical connections.",
        source_countries: &[
            src("China", "CN", 58.0),
            src("South Korea", "KR", 15.0),
            src("Japan", "JP", 10.0),
            src("Canada", "CA", 5.0),
            src("Other", "OTHER", 12.0),
        ],
    },
    Material {
        id: 7,
        name: "Copper",
        category: "Thermal Management",
        chip_percentage: 5.8,
        approximate_mass: "~100 kg",
        description: "Oxygen-free high-conductivity (OFHC) copper is used extensively in dilution refrigerator components and wiring shields. It provides excellent thermal conductivity at cryogenic temperatures.",
        source_countries: &[
            src("Chile", "CL", 27.0),
            src("Peru", "PE", 10.0),
            src("China", "CN", 8.0),
            src("DR Congo", "CD", 8.0),
            src("Other", "OTHER", 47.0),
        ],
    },
    Material {
        id: 8,
        name: "Gold",
        category: "Interconnects",
        chip_percentage: 1.5,
        approximate_mass: "~5 g",
        description: "Used for wire bonding connections and as a plating material for microwave connectors. Gold's resistance to oxidation ensures reliable electrical contacts at cryogenic temperatures.",
        source_countries: &[
            src("China", "CN", 11.0),
            src("Australia", "AU", 10.0),
            src("Russia", "RU", 9.0),
            src("United States", "US", 6.0),
            src("Other", "OTHER", 64.0),
        ],
    },
    Material {
        id: 9,
        name: "Helium-3",
        category: "Cryogenics",
        chip_percentage: 0.01,
        approximate_mass: "~5 g",
        description: "Essential for dilution refrigerators that cool quantum processors to millikelvin temperatures. The mixing of He-3 and He-4 provides continuous cooling to reach temperatures near absolute zero.",
        source_countries: &[
            src("United States", "US", 75.0),
            src("Russia", "RU", 20.0),
            src("Other", "OTHER", 5.0),
        ],
    },
    Material {
        id: 10,
        name: "Helium-4",
        category: "Cryogenics",
        chip_percentage: 0.02,
        approximate_mass: "~15 g",
        description: "Used in conjunction with He-3 in dilution refrigerators and as liquid helium for pre-cooling stages. Provides the initial cooling from room temperature to 4 Kelvin.",
        source_countries: &[
            src("United States", "US", 40.0),
            src("Qatar", "QA", 32.0),
            src("Algeria", "DZ", 12.0),
            src("Russia", "RU", 8.0),
            src("Other", "OTHER", 8.0),
        ],
    },
    Material {
        id: 11,
        name: "Titanium Nitride (TiN)",
        category: "Superconductors",
        chip_percentage: 3.2,
        approximate_mass: "~300 mg",
        description: "Used for high-quality superconducting resonators and kinetic inductance detectors. TiN films offer tunable superconducting properties and low microwave losses.",
        source_countries: &[
            src("China", "CN", 45.0),
            src("Japan", "JP", 20.0),
            src("Russia", "RU", 10.0),
            src("South Africa", "ZA", 8.0),
            src("Other", "OTHER", 17.0),
        ],
    },
    Material {
        id: 12,
        name: "Diamond (NV Centers)",
        category: "Spin Qubits",
        chip_percentage: 0.8,
        approximate_mass: "~100 mg",
        description: "Synthetic diamonds with nitrogen-vacancy (NV) centers serve as room-temperature quantum sensors and potential qubit platforms. The NV center's electron spin can be optically initialized and read out.",
        source_countries: &[
            src("Russia", "RU", 28.0),
            src("Botswana", "BW", 18.0),
            src("Canada", "CA", 13.0),
            src("Angola", "AO", 12.0),
            src("Other", "OTHER", 29.0),
        ],
    },
    Material {
        id: 13,
        name: "Germanium",
        category: "Spin Qubits",
        chip_percentage: 1.2,
        approximate_mass: "~200 mg",
        description: "Used in semiconductor spin qubit architectures. Germanium quantum wells host hole spin qubits with strong spin-orbit coupling, enabling fast electrical control.",
        source_countries: &[
            src("China", "CN", 60.0),
            src("Russia", "RU", 12.0),
            src("United States", "US", 8.0),
            src("Belgium", "BE", 5.0),
            src("Other", "OTHER", 15.0),
        ],
    },
    Material {
        id: 14,
        name: "Gallium Arsenide (GaAs)",
        category: "Spin Qubits",
        chip_percentage: 1.8,
        approximate_mass: "~3 g",
        description: "Forms quantum dot structures for electron spin qubits. GaAs heterostructures create 2D electron gases where individual electrons can be confined and manipulated as qubits.",
        source_countries: &[
            src("China", "CN", 80.0),
            src("Japan", "JP", 8.0),
            src("Germany", "DE", 5.0),
            src("Other", "OTHER", 7.0),
        ],
    },
    Material {
        id: 15,
        name: "Yttrium Barium Copper Oxide",
        category: "Superconductors",
        chip_percentage: 0.5,
        approximate_mass: "~500 mg",
        description: "A high-temperature superconductor investigated for quantum applications. While not yet mainstream in qubits, YBCO is used in SQUID magnetometers for qubit readout research.",
        source_countries: &[
            src("China", "CN", 70.0),
            src("Australia", "AU", 10.0),
            src("Myanmar", "MM", 7.0),
            src("Other", "OTHER", 13.0),
        ],
    },
    Material {
        id: 16,
        name: "Mu-Metal",
        category: "Shielding",
        chip_percentage: 2.5,
        approximate_mass: "~12 kg",
        description: "A nickel-iron alloy used for magnetic shielding around quantum processors. Protects sensitive qubits from external magnetic field fluctuations that cause decoherence.",
        source_countries: &[
            src("Germany", "DE", 30.0),
            src("United States", "US", 25.0),
            src("Japan", "JP", 20.0),
            src("United Kingdom", "GB", 10.0),
            src("Other", "OTHER", 15.0),
        ],
    },
    Material {
        id: 17,
        name: "Beryllium Copper",
        category: "Thermal Management",
        chip_percentage: 0.6,
        approximate_mass: "~1.5 kg",
        description: "Used for cryogenic microwave cables and attenuators. Its thermal conductivity profile helps manage heat flow between temperature stages in the dilution refrigerator.",
        source_countries: &[
            src("United States", "US", 65.0),
            src("China", "CN", 15.0),
            src("Kazakhstan", "KZ", 10.0),
            src("Other", "OTHER", 10.0),
        ],
    },
    Material {
        id: 18,
        name: "Kapton (Polyimide)",
        category: "Insulation",
        chip_percentage: 0.4,
        approximate_mass: "~150 g",
        description: "Thin polyimide films provide electrical insulation in cryogenic wiring and flexible circuit boards. Kapton remains flexible at millikelvin temperatures without cracking.",
        source_countries: &[
            src("United States", "US", 45.0),
            src("Japan", "JP", 30.0),
            src("China", "CN", 15.0),
            src("Other", "OTHER", 10.0),
        ],
    },
    Material {
        id: 19,
        name: "Ytterbium",
        category: "Trapped Ions",
        chip_percentage: 0.05,
        approximate_mass: "~5 mg",
        description: "Ytterbium-171 ions are used in trapped-ion quantum computers. The ion's hyperfine states serve as qubit levels, manipulated by precisely tuned laser beams.",
        source_countries: &[
            src("China", "CN", 90.0),
            src("Australia", "AU", 4.0),
            src("Myanmar", "MM", 3.0),
            src("Other", "OTHER", 3.0),
        ],
    },
    Material {
        id: 20,
        name: "Calcium",
        category: "Trapped Ions",
        chip_percentage: 0.02,
        approximate_mass: "~3 mg",
        description: "Calcium-40 ions are another popular choice for trapped-ion qubits. Optical qubits encoded in calcium ions offer long coherence times and high-fidelity operations.",
        source_countries: &[
            src("China", "CN", 35.0),
            src("United States", "US", 15.0),
            src("India", "IN", 8.0),
            src("Brazil", "BR", 5.0),
            src("Other", "OTHER", 37.0),
        ],
    },
    Material {
        id: 21,
        name: "Rubidium",
        category: "Neutral Atoms",
        chip_percentage: 0.01,
        approximate_mass: "~1 g",
        description: "Rubidium-87 atoms are used in neutral-atom quantum computers. Atoms are trapped in optical tweezers and interact via Rydberg states for two-qubit gates.",
        source_countries: &[
            src("Canada", "CA", 35.0),
            src("Namibia", "NA", 25.0),
            src("Zimbabwe", "ZW", 15.0),
            src("Other", "OTHER", 25.0),
        ],
    },
    Material {
        id: 22,
        name: "Strontium",
        category: "Neutral Atoms",
        chip_percentage: 0.01,
        approximate_mass: "~1 g",
        description: "Strontium atoms serve as qubits in optical lattice and tweezer-based quantum computers. Their nuclear spin states provide additional qubit encoding options.",
        source_countries: &[
            src("China", "CN", 50.0),
            src("Spain", "ES", 15.0),
            src("Mexico", "MX", 10.0),
            src("Argentina", "AR", 8.0),
            src("Other", "OTHER", 17.0),
        ],
    },
    Material {
        id: 23,
        name: "Niobium Titanium (NbTi)",
        category: "Cryogenics",
        chip_percentage: 0.3,
        approximate_mass: "~400 g",
        description: "Superconducting alloy used in the magnets of dilution refrigerator components and cryogenic cables. Maintains superconductivity up to relatively high magnetic fields.",
        source_countries: &[
            src("Brazil", "BR", 40.0),
            src("China", "CN", 25.0),
            src("Japan", "JP", 15.0),
            src("Russia", "RU", 10.0),
            src("Other", "OTHER", 10.0),
        ],
    },
    Material {
        id: 24,
        name: "Phosphorus in Silicon",
        category: "Spin Qubits",
        chip_percentage: 0.05,
        approximate_mass: "< 1 μg",
        description: "Individual phosphorus atoms implanted in silicon create nuclear spin qubits with extremely long coherence times. The P-31 nuclear spin can store quantum information for minutes.",
        source_countries: &[
            src("China", "CN", 45.0),
            src("Morocco", "MA", 18.0),
            src("United States", "US", 12.0),
            src("Russia", "RU", 8.0),
            src("Other", "OTHER", 17.0),
        ],
    },
];

