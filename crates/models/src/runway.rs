//! Airport and runway reference records.

/// Intersection departure point; `shift_ft` is removed from TORA and ASDA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersection {
    pub name: String,
    pub shift_ft: u32,
}

/// Runway declared distances in feet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runway {
    pub name: String,
    pub heading_deg: u16,
    pub lda_ft: u32,
    pub tora_ft: u32,
    pub asda_ft: u32,
    pub intersections: Vec<Intersection>,
}

impl Runway {
    /// Shift for a departure point: `None` is the full length, a name must match an
    /// intersection exactly.
    pub fn shift_for(&self, intersection: Option<&str>) -> Option<u32> {
        match intersection {
            None => Some(0),
            Some(name) => self
                .intersections
                .iter()
                .find(|i| i.name == name)
                .map(|i| i.shift_ft),
        }
    }

    /// Takeoff run available from the given shift. May be zero or negative.
    pub fn effective_tora(&self, shift_ft: u32) -> i64 {
        i64::from(self.tora_ft) - i64::from(shift_ft)
    }

    /// Accelerate-stop distance available from the given shift. May be zero or negative.
    pub fn effective_asda(&self, shift_ft: u32) -> i64 {
        i64::from(self.asda_ft) - i64::from(shift_ft)
    }
}

/// Airport with its runways in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    pub icao: String,
    pub name: Option<String>,
    pub runways: Vec<Runway>,
}

impl Airport {
    pub fn runway(&self, name: &str) -> Option<&Runway> {
        self.runways.iter().find(|r| r.name == name)
    }
}
