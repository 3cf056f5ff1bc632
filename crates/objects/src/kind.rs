use serde::{Deserialize, Serialize};

/// Stability restored by one emergency cooling.
pub const COOLING_BOOST: f64 = 50.0;

/// The three quantum object variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    DataPacket,
    DarkMatter,
    AntiMatter,
}

/// Optional behaviours a variant may support.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Emergency cooling (`QuantumObject::emergency_cool`).
    Cooling,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 3] = [
        ObjectKind::DataPacket,
        ObjectKind::DarkMatter,
        ObjectKind::AntiMatter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::DataPacket => "DataPacket",
            ObjectKind::DarkMatter => "DarkMatter",
            ObjectKind::AntiMatter => "AntiMatter",
        }
    }

    /// Id prefix handed out by the inventory.
    pub fn tag(self) -> &'static str {
        match self {
            ObjectKind::DataPacket => "V",
            ObjectKind::DarkMatter => "K",
            ObjectKind::AntiMatter => "A",
        }
    }

    /// Stability lost per analysis.
    pub fn analysis_cost(self) -> f64 {
        match self {
            ObjectKind::DataPacket => 5.0,
            ObjectKind::DarkMatter => 15.0,
            ObjectKind::AntiMatter => 25.0,
        }
    }

    pub fn analysis_message(self) -> &'static str {
        match self {
            ObjectKind::DataPacket => "Data contents read.",
            ObjectKind::DarkMatter => "Analyzing dark matter...",
            ObjectKind::AntiMatter => "The fabric of the universe trembles...",
        }
    }

    /// `None` for variants without the cooling capability.
    pub fn cooling_message(self) -> Option<&'static str> {
        match self {
            ObjectKind::DataPacket => None,
            ObjectKind::DarkMatter => Some("Applying emergency cooling to dark matter..."),
            ObjectKind::AntiMatter => Some("Applying emergency cooling to antimatter..."),
        }
    }

    pub fn supports(self, capability: Capability) -> bool {
        match capability {
            Capability::Cooling => self.cooling_message().is_some(),
        }
    }
}

impl core::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
